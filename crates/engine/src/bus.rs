// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus facade

use crate::error::BusError;
use crate::registry::{EmitterRegistry, DEFAULT_EMITTER};
use eventide_core::{Emitter, EventArgs};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<EventBus> = OnceLock::new();

/// Public entry point: emit on the default channel or look up a named one
///
/// Cloning is cheap and shares the same registry.
#[derive(Clone, Debug)]
pub struct EventBus {
    registry: Arc<EmitterRegistry>,
}

impl EventBus {
    pub fn new(registry: EmitterRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Emit on the default channel and wait for every matching listener
    pub async fn emit(&self, event: &str, args: impl Into<EventArgs>) -> Result<usize, BusError> {
        self.emit_on(DEFAULT_EMITTER, event, args).await
    }

    /// Emit on the channel named `emitter`
    pub async fn emit_on(
        &self,
        emitter: &str,
        event: &str,
        args: impl Into<EventArgs>,
    ) -> Result<usize, BusError> {
        let emitter = self.emitter(emitter)?;
        Ok(emitter.emit(event, args).await?)
    }

    /// Look up a channel by name
    pub fn emitter(&self, name: &str) -> Result<Arc<Emitter>, BusError> {
        self.registry.get(name)
    }

    pub fn emitter_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    pub fn registry(&self) -> &EmitterRegistry {
        &self.registry
    }

    /// The process-wide bus, if one was bootstrapped with `global = true`
    pub fn global() -> Option<&'static EventBus> {
        GLOBAL.get()
    }

    /// Make this bus the process-wide bus; the first installation wins
    pub(crate) fn install_global(&self) -> bool {
        let installed = GLOBAL.set(self.clone()).is_ok();
        if !installed {
            tracing::warn!("a global event bus is already installed, keeping the existing one");
        }
        installed
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
