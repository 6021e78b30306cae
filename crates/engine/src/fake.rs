// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake component for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::component::Component;
use async_trait::async_trait;
use eventide_core::{Invocation, InvocationId, ListenerError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded listener call
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentCall {
    pub method: String,
    pub emitter: String,
    pub event: String,
    pub payload: Option<Value>,
    pub invocation: InvocationId,
}

/// Component that records every successful listener call
///
/// Methods can be scripted to sleep before settling or to fail; a failing
/// method records nothing.
#[derive(Clone, Default)]
pub struct FakeComponent {
    calls: Arc<Mutex<Vec<ComponentCall>>>,
    failures: Arc<Mutex<HashMap<String, String>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
}

impl FakeComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `method` fail with `message`
    pub fn fail(&self, method: &str, message: &str) {
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(method.to_string(), message.to_string());
    }

    /// Make `method` sleep for `delay` before settling
    pub fn delay(&self, method: &str, delay: Duration) {
        self.delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(method.to_string(), delay);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ComponentCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Get recorded calls of one method
    pub fn calls_to(&self, method: &str) -> Vec<ComponentCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method)
            .collect()
    }

    /// Whether two fakes share the same recorded state
    pub fn same_instance(&self, other: &FakeComponent) -> bool {
        Arc::ptr_eq(&self.calls, &other.calls)
    }
}

#[async_trait]
impl Component for FakeComponent {
    async fn call(&self, method: &str, invocation: &Invocation) -> Result<(), ListenerError> {
        let delay = self
            .delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(method)
            .copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self
            .failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(method)
            .cloned();
        if let Some(message) = failure {
            return Err(message.into());
        }

        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ComponentCall {
                method: method.to_string(),
                emitter: invocation.emitter.to_string(),
                event: invocation.event.to_string(),
                payload: invocation.payload().cloned(),
                invocation: invocation.id,
            });
        Ok(())
    }
}
