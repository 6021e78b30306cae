//! Channel specs
//!
//! Verify that events reach exactly the listeners bound to the channel they
//! were emitted on.

use crate::prelude::*;

#[tokio::test]
async fn default_channel_calls_matching_listener() {
    let fixture = Fixture::new();

    fixture.bus.emit("test", json!({ "_": "testing" })).await.unwrap();

    assert_eq!(
        summary(&fixture.mock_on.calls()),
        vec![("on_test".to_string(), json!({ "_": "testing" }))]
    );
}

#[tokio::test]
async fn named_channel_calls_only_its_listeners() {
    let fixture = Fixture::new();

    fixture
        .bus
        .emitter("mocked")
        .unwrap()
        .emit("test", json!({ "_": "testing" }))
        .await
        .unwrap();

    let calls = fixture.mock_on.calls();
    assert_eq!(
        summary(&calls),
        vec![("on_test_from_mocked".to_string(), json!({ "_": "testing" }))]
    );
    assert_eq!(calls[0].emitter, "mocked");
}

#[tokio::test]
async fn unmatched_event_has_no_effect() {
    let fixture = Fixture::new();

    let invoked = fixture.bus.emit("nobody.listens", json!(1)).await.unwrap();

    assert_eq!(invoked, 0);
    assert!(fixture.mock_on.calls().is_empty());
    assert!(fixture.request_instances().is_empty());
}

#[tokio::test]
async fn each_emission_invokes_listener_once() {
    let fixture = Fixture::new();

    for n in 0..3 {
        fixture.bus.emit("test", json!(n)).await.unwrap();
    }

    assert_eq!(fixture.mock_on.calls_to("on_test").len(), 3);
    assert!(fixture.mock_on.calls_to("on_test_from_mocked").is_empty());
}

#[test]
fn default_channel_exists_without_declaration() {
    let fixture = Fixture::new();
    assert_eq!(fixture.bus.emitter_names(), vec!["default", "mocked"]);
    assert!(fixture.bus.emitter("default").is_ok());
}

#[tokio::test]
async fn unknown_channel_lookup_fails() {
    let fixture = Fixture::new();

    let err = fixture.bus.emitter("defualt").unwrap_err();
    assert!(matches!(err, BusError::ChannelNotFound(ref name) if name == "defualt"));
    assert_eq!(err.to_string(), "emitter not found: defualt");

    let err = fixture.bus.emit_on("missing", "test", ()).await.unwrap_err();
    assert!(err.is_channel_not_found());
}
