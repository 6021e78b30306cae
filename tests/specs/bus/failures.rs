//! Listener failure specs
//!
//! Verify failure isolation and the opt-in rethrow policy.

use crate::prelude::*;

#[tokio::test(start_paused = true)]
async fn failing_listener_does_not_stop_siblings() {
    let fixture = Fixture::new();

    let invoked = fixture.bus.emit("throw", json!({ "_": "error" })).await.unwrap();

    assert_eq!(invoked, 2);
    assert_eq!(
        summary(&fixture.mock_on.calls()),
        vec![("on_throw_delayed".to_string(), json!({ "_": "error" }))]
    );
}

#[tokio::test]
async fn rethrow_listener_fails_emission() {
    let fixture = Fixture::new();

    let err = fixture.bus.emit("rethrow", json!({ "_": "error" })).await.unwrap_err();

    match err {
        BusError::Emit(err) => {
            assert!(matches!(
                err.failure(),
                ListenerFailure::Failed(e) if e.to_string() == "rethrow"
            ));
            assert!(err.to_string().contains("rethrow"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test(start_paused = true)]
async fn rethrow_is_reported_after_slow_listener_finishes() {
    let fixture = Fixture::new();
    // Slow listener on the same event as the rethrowing one
    let slow = FakeComponent::new();
    slow.delay("on_rethrow_slow", THROW_DELAY);
    let catalog = Catalog::new()
        .singleton("slow", std::sync::Arc::new(slow.clone()), &["on_rethrow_slow"])
        .singleton("mock_on", std::sync::Arc::new(fixture.mock_on.clone()), &["on_rethrow"]);
    let table = ListenerTable::new()
        .on("slow", "on_rethrow_slow", ListenerDescriptor::on("rethrow"))
        .on("mock_on", "on_rethrow", ListenerDescriptor::on("rethrow").rethrow());
    let options = BusOptions {
        global: false,
        ..BusOptions::default()
    };
    let bus = Bootstrap::new(options).run(&catalog, &table, catalog.clone()).unwrap();

    let started = tokio::time::Instant::now();
    let result = bus.emit("rethrow", json!({ "_": "error" })).await;

    assert!(result.is_err());
    assert!(started.elapsed() >= THROW_DELAY);
    assert_eq!(slow.calls_to("on_rethrow_slow").len(), 1);
}
