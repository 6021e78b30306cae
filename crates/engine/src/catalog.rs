// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Explicit component registry
//!
//! A `Catalog` is filled once at startup and serves both as the component
//! discovery for bootstrap and as the scope resolver for per-invocation
//! components.

use crate::component::{
    Component, ComponentDiscovery, ComponentEntry, ComponentToken, EmitterDecl, Scope,
};
use crate::error::ResolveError;
use crate::scope::ScopeResolver;
use async_trait::async_trait;
use eventide_core::{EmitterConfig, Invocation};
use std::collections::HashMap;
use std::sync::Arc;

type Factory = Arc<dyn Fn(&Invocation) -> Arc<dyn Component> + Send + Sync>;

#[derive(Clone, Default)]
pub struct Catalog {
    emitters: Vec<EmitterDecl>,
    components: Vec<ComponentEntry>,
    controllers: Vec<ComponentEntry>,
    factories: HashMap<ComponentToken, Factory>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare emitter `name`, inheriting the bus options
    pub fn emitter(self, token: impl Into<ComponentToken>, name: impl Into<String>) -> Self {
        self.declare(token.into(), name.into(), None)
    }

    /// Declare emitter `name` with its own channel settings
    pub fn emitter_with_config(
        self,
        token: impl Into<ComponentToken>,
        name: impl Into<String>,
        config: EmitterConfig,
    ) -> Self {
        self.declare(token.into(), name.into(), Some(config))
    }

    fn declare(
        mut self,
        token: ComponentToken,
        name: String,
        config: Option<EmitterConfig>,
    ) -> Self {
        self.emitters.push(EmitterDecl {
            token,
            name,
            config,
        });
        self
    }

    /// Add a component with one instance shared by every invocation
    pub fn singleton(
        mut self,
        token: impl Into<ComponentToken>,
        instance: Arc<dyn Component>,
        methods: &[&str],
    ) -> Self {
        self.components.push(entry(token.into(), Scope::Static(instance), methods));
        self
    }

    /// Add a component built by `factory` for every invocation
    pub fn per_invocation<F>(
        mut self,
        token: impl Into<ComponentToken>,
        methods: &[&str],
        factory: F,
    ) -> Self
    where
        F: Fn(&Invocation) -> Arc<dyn Component> + Send + Sync + 'static,
    {
        let token = token.into();
        self.factories.insert(token.clone(), Arc::new(factory));
        self.components.push(entry(token, Scope::Dynamic, methods));
        self
    }

    /// Add a controller; controllers register after all components
    pub fn controller(
        mut self,
        token: impl Into<ComponentToken>,
        instance: Arc<dyn Component>,
        methods: &[&str],
    ) -> Self {
        self.controllers.push(entry(token.into(), Scope::Static(instance), methods));
        self
    }
}

fn entry(token: ComponentToken, scope: Scope, methods: &[&str]) -> ComponentEntry {
    ComponentEntry {
        token,
        scope,
        methods: methods.iter().map(|m| m.to_string()).collect(),
    }
}

impl ComponentDiscovery for Catalog {
    fn emitters(&self) -> Vec<EmitterDecl> {
        self.emitters.clone()
    }

    fn components(&self) -> Vec<ComponentEntry> {
        self.components.clone()
    }

    fn controllers(&self) -> Vec<ComponentEntry> {
        self.controllers.clone()
    }
}

#[async_trait]
impl ScopeResolver for Catalog {
    async fn resolve(
        &self,
        token: &ComponentToken,
        invocation: &Invocation,
    ) -> Result<Arc<dyn Component>, ResolveError> {
        let factory = self
            .factories
            .get(token)
            .ok_or_else(|| ResolveError::UnknownComponent(token.clone()))?;
        Ok(factory(invocation))
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
