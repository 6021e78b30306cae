//! Shared fixtures for bus specs
//!
//! Mirrors a typical application: a custom `mocked` channel, a singleton
//! listener component and a per-invocation listener component.

#![allow(dead_code)]

pub use eventide_core::{BusOptions, ListenerFailure};
pub use eventide_engine::{
    Bootstrap, BusError, Catalog, ComponentCall, EventBus, FakeComponent, ListenerDescriptor,
    ListenerTable,
};
pub use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const THROW_DELAY: Duration = Duration::from_millis(300);

/// A bootstrapped bus plus handles on its listener components
pub struct Fixture {
    pub bus: EventBus,
    /// Singleton listener component
    pub mock_on: FakeComponent,
    /// Every per-invocation instance, in creation order
    pub requests: Arc<Mutex<Vec<FakeComponent>>>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_options(BusOptions::default())
    }

    pub fn with_options(options: BusOptions) -> Self {
        let options = BusOptions {
            global: false,
            ..options
        };

        let mock_on = FakeComponent::new();
        mock_on.fail("on_throw", "throw");
        mock_on.fail("on_rethrow", "rethrow");
        mock_on.delay("on_throw_delayed", THROW_DELAY);

        let requests = Arc::new(Mutex::new(Vec::new()));
        let created = Arc::clone(&requests);

        let catalog = Catalog::new()
            .emitter("mock_emitter", "mocked")
            .singleton(
                "mock_on",
                Arc::new(mock_on.clone()),
                &[
                    "on_throw_delayed",
                    "on_throw",
                    "on_rethrow",
                    "on_test",
                    "on_test_from_mocked",
                    "on_test_wildcard",
                ],
            )
            .per_invocation(
                "mock_on_request",
                &["on_test", "on_test_from_mocked"],
                move |_| {
                    let instance = FakeComponent::new();
                    created.lock().unwrap().push(instance.clone());
                    Arc::new(instance)
                },
            );

        let table = ListenerTable::new()
            .on("mock_on", "on_throw_delayed", ListenerDescriptor::on("throw"))
            .on("mock_on", "on_throw", ListenerDescriptor::on("throw"))
            .on("mock_on", "on_rethrow", ListenerDescriptor::on("rethrow").rethrow())
            .on("mock_on", "on_test", ListenerDescriptor::on("test"))
            .on(
                "mock_on",
                "on_test_from_mocked",
                ListenerDescriptor::on("test").source("mocked"),
            )
            .on("mock_on", "on_test_wildcard", ListenerDescriptor::on("test.*"))
            .on("mock_on_request", "on_test", ListenerDescriptor::on("test"))
            .on(
                "mock_on_request",
                "on_test_from_mocked",
                ListenerDescriptor::on("test").source("mocked"),
            );

        let bus = Bootstrap::new(options)
            .run(&catalog, &table, catalog.clone())
            .unwrap();

        Self {
            bus,
            mock_on,
            requests,
        }
    }

    /// Per-invocation instances created so far
    pub fn request_instances(&self) -> Vec<FakeComponent> {
        self.requests.lock().unwrap().clone()
    }
}

/// Method names and payloads of recorded calls
pub fn summary(calls: &[ComponentCall]) -> Vec<(String, serde_json::Value)> {
    calls
        .iter()
        .map(|c| {
            (
                c.method.clone(),
                c.payload.clone().unwrap_or(serde_json::Value::Null),
            )
        })
        .collect()
}
