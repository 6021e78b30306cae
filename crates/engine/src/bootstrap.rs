// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bootstrap: turns discovered components into emitter registrations
//!
//! ```text
//! emitters() ──► RegistryBuilder::declare ──► ensure_default
//!                                                   │
//! components() ++ controllers()                     ▼
//!   └─ for each method: describe() ──► emitter_mut(source).register(event, BoundListener)
//!                                                   │
//!                                                   ▼
//!                                   build() ──► EventBus (read-only)
//! ```

use crate::bus::EventBus;
use crate::component::{Component, ComponentDiscovery, ComponentEntry, ComponentToken, Scope};
use crate::descriptor::{DescriptorSource, ListenerDescriptor};
use crate::error::BootstrapError;
use crate::registry::RegistryBuilder;
use crate::scope::ScopeResolver;
use crate::traced::TracedResolver;
use async_trait::async_trait;
use eventide_core::{BusOptions, Handler, Invocation, ListenerError, ListenerId};
use std::sync::Arc;

/// Startup driver for the event bus
#[derive(Debug, Clone, Default)]
pub struct Bootstrap {
    options: BusOptions,
}

impl Bootstrap {
    pub fn new(options: BusOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BusOptions {
        &self.options
    }

    /// Build the emitter registry and register every described listener
    ///
    /// Fails fast on invalid options, on a listener targeting an emitter no
    /// component declared, and on empty event patterns.
    pub fn run<D, S, R>(
        &self,
        discovery: &D,
        descriptors: &S,
        resolver: R,
    ) -> Result<EventBus, BootstrapError>
    where
        D: ComponentDiscovery + ?Sized,
        S: DescriptorSource + ?Sized,
        R: ScopeResolver,
    {
        self.options.validate()?;

        let mut builder = RegistryBuilder::new(self.options.emitter_config());
        for decl in discovery.emitters() {
            if let Some(config) = &decl.config {
                config.validate()?;
            }
            builder.declare(&decl);
        }
        if builder.ensure_default() {
            tracing::debug!("installed built-in default emitter");
        }

        let resolver: Arc<dyn ScopeResolver> = Arc::new(TracedResolver::new(resolver));
        let mut listeners = 0usize;
        for entry in discovery.components().into_iter().chain(discovery.controllers()) {
            for method in &entry.methods {
                for descriptor in descriptors.describe(&entry, method) {
                    subscribe(&mut builder, &entry, method, descriptor, &resolver)?;
                    listeners += 1;
                }
            }
        }

        let bus = EventBus::new(builder.build());
        tracing::info!(
            emitters = ?bus.emitter_names(),
            listeners,
            wildcard = self.options.wildcard,
            "event bus ready"
        );

        if self.options.global {
            bus.install_global();
        }
        Ok(bus)
    }
}

fn subscribe(
    builder: &mut RegistryBuilder,
    entry: &ComponentEntry,
    method: &str,
    descriptor: ListenerDescriptor,
    resolver: &Arc<dyn ScopeResolver>,
) -> Result<ListenerId, BootstrapError> {
    if descriptor.event.is_empty() {
        return Err(BootstrapError::EmptyPattern {
            component: entry.token.clone(),
            method: method.to_string(),
        });
    }

    let emitter = builder
        .emitter_mut(&descriptor.source)
        .ok_or_else(|| BootstrapError::UnknownEmitter {
            emitter: descriptor.source.clone(),
            component: entry.token.clone(),
            method: method.to_string(),
        })?;

    let binding = match &entry.scope {
        Scope::Static(instance) => Binding::Instance(Arc::clone(instance)),
        Scope::Dynamic => Binding::Resolve(Arc::clone(resolver)),
    };
    let listener = BoundListener {
        token: entry.token.clone(),
        method: method.to_string(),
        binding,
    };

    Ok(emitter.register(descriptor.event, Arc::new(listener), descriptor.options))
}

enum Binding {
    Instance(Arc<dyn Component>),
    Resolve(Arc<dyn ScopeResolver>),
}

/// Handler calling one component method
struct BoundListener {
    token: ComponentToken,
    method: String,
    binding: Binding,
}

#[async_trait]
impl Handler for BoundListener {
    async fn handle(&self, invocation: Invocation) -> Result<(), ListenerError> {
        let instance = match &self.binding {
            Binding::Instance(instance) => Arc::clone(instance),
            // Resolved inside this invocation's own task, so siblings never wait on it
            Binding::Resolve(resolver) => resolver.resolve(&self.token, &invocation).await?,
        };
        instance.call(&self.method, &invocation).await
    }
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod tests;
