// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener descriptors: which method listens to which event, and where

use crate::component::{ComponentEntry, ComponentToken};
use crate::registry::DEFAULT_EMITTER;
use eventide_core::ListenerOptions;

/// Declares that a method listens to `event` on emitter `source`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenerDescriptor {
    /// Event pattern, matched by the target emitter's matcher
    pub event: String,
    /// Name of the emitter to subscribe on
    pub source: String,
    pub options: ListenerOptions,
}

impl ListenerDescriptor {
    /// Listen to `event` on the default emitter
    pub fn on(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            source: DEFAULT_EMITTER.to_string(),
            options: ListenerOptions::default(),
        }
    }

    /// Subscribe on the emitter named `emitter` instead of the default one
    pub fn source(mut self, emitter: impl Into<String>) -> Self {
        self.source = emitter.into();
        self
    }

    /// Propagate failures to the caller of `emit`
    pub fn rethrow(mut self) -> Self {
        self.options.rethrow = true;
        self
    }

    pub fn with_options(mut self, options: ListenerOptions) -> Self {
        self.options = options;
        self
    }
}

/// Supplies the listener descriptors attached to a component method
///
/// Must be side-effect free; queried once per method during bootstrap.
/// An empty result means the method is not a listener. Several results
/// mean stacked declarations, each registered separately.
pub trait DescriptorSource: Send + Sync {
    fn describe(&self, component: &ComponentEntry, method: &str) -> Vec<ListenerDescriptor>;
}

/// Explicit table of descriptors keyed by component and method
#[derive(Clone, Debug, Default)]
pub struct ListenerTable {
    entries: Vec<(ComponentToken, String, ListenerDescriptor)>,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `descriptor` to `method` of component `token`
    pub fn on(
        mut self,
        token: impl Into<ComponentToken>,
        method: impl Into<String>,
        descriptor: ListenerDescriptor,
    ) -> Self {
        self.entries.push((token.into(), method.into(), descriptor));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DescriptorSource for ListenerTable {
    fn describe(&self, component: &ComponentEntry, method: &str) -> Vec<ListenerDescriptor> {
        self.entries
            .iter()
            .filter(|(token, m, _)| *token == component.token && m == method)
            .map(|(_, _, descriptor)| descriptor.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
