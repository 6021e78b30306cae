//! Scope specs
//!
//! Verify per-invocation and singleton listener instances.

use crate::prelude::*;

#[tokio::test]
async fn per_invocation_listener_on_default_channel() {
    let fixture = Fixture::new();

    fixture.bus.emit("test", json!({ "_": "testing" })).await.unwrap();

    let instances = fixture.request_instances();
    assert_eq!(instances.len(), 1);
    assert_eq!(
        summary(&instances[0].calls()),
        vec![("on_test".to_string(), json!({ "_": "testing" }))]
    );
}

#[tokio::test]
async fn per_invocation_listener_on_named_channel() {
    let fixture = Fixture::new();

    fixture.bus.emit_on("mocked", "test", json!({ "_": "testing" })).await.unwrap();

    let instances = fixture.request_instances();
    assert_eq!(instances.len(), 1);
    assert_eq!(
        summary(&instances[0].calls()),
        vec![("on_test_from_mocked".to_string(), json!({ "_": "testing" }))]
    );
}

#[tokio::test]
async fn separate_emissions_get_separate_instances() {
    let fixture = Fixture::new();

    fixture.bus.emit("test", json!(1)).await.unwrap();
    fixture.bus.emit("test", json!(2)).await.unwrap();

    let instances = fixture.request_instances();
    assert_eq!(instances.len(), 2);
    assert!(!instances[0].same_instance(&instances[1]));
    assert_eq!(instances[0].calls().len(), 1);
    assert_eq!(instances[1].calls().len(), 1);
    assert_ne!(
        instances[0].calls()[0].invocation,
        instances[1].calls()[0].invocation
    );
}

#[tokio::test]
async fn singleton_listener_sees_every_emission() {
    let fixture = Fixture::new();

    fixture.bus.emit("test", json!(1)).await.unwrap();
    fixture.bus.emit("test", json!(2)).await.unwrap();

    assert_eq!(
        summary(&fixture.mock_on.calls_to("on_test")),
        vec![
            ("on_test".to_string(), json!(1)),
            ("on_test".to_string(), json!(2)),
        ]
    );
}
