// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener-bearing components and their discovery

use async_trait::async_trait;
use eventide_core::{EmitterConfig, Invocation, ListenerError};
use std::fmt;
use std::sync::Arc;

/// Identity of a component, stable across instances
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentToken(pub String);

impl ComponentToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// A component whose methods can listen to events
#[async_trait]
pub trait Component: Send + Sync + 'static {
    /// Run listener `method` for one invocation
    async fn call(&self, method: &str, invocation: &Invocation) -> Result<(), ListenerError>;
}

/// How a component instance is obtained for an invocation
#[derive(Clone)]
pub enum Scope {
    /// One long-lived instance shared by every invocation
    Static(Arc<dyn Component>),
    /// A fresh instance resolved for each invocation
    Dynamic,
}

impl Scope {
    pub fn is_static(&self) -> bool {
        matches!(self, Scope::Static(_))
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Static(_) => f.write_str("Static"),
            Scope::Dynamic => f.write_str("Dynamic"),
        }
    }
}

/// A discovered component and the methods that may carry listeners
#[derive(Clone, Debug)]
pub struct ComponentEntry {
    pub token: ComponentToken,
    pub scope: Scope,
    pub methods: Vec<String>,
}

/// A component declaring itself as the emitter named `name`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitterDecl {
    pub token: ComponentToken,
    pub name: String,
    /// Channel settings; `None` inherits the bus options
    pub config: Option<EmitterConfig>,
}

/// Enumerates the components known to the process
///
/// Order only affects registration order on each emitter.
pub trait ComponentDiscovery: Send + Sync {
    /// Emitter-name declarations, read before any listener is registered
    fn emitters(&self) -> Vec<EmitterDecl> {
        Vec::new()
    }

    fn components(&self) -> Vec<ComponentEntry>;

    fn controllers(&self) -> Vec<ComponentEntry> {
        Vec::new()
    }
}
