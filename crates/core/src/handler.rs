// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener handlers and their registration options

use crate::invocation::Invocation;
use crate::options::MatcherOptions;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Error returned by listener bodies
pub type ListenerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Handle of a registration on one emitter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Per-listener options
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerOptions {
    /// Propagate this listener's failure to the caller of `emit`
    pub rethrow: bool,
    /// Match this listener's pattern with its own mode instead of the emitter's
    pub matcher: Option<MatcherOptions>,
}

impl ListenerOptions {
    pub fn rethrow() -> Self {
        Self {
            rethrow: true,
            ..Self::default()
        }
    }

    pub fn with_matcher(mut self, matcher: MatcherOptions) -> Self {
        self.matcher = Some(matcher);
        self
    }
}

/// Something that can be invoked for a matched event
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    async fn handle(&self, invocation: Invocation) -> Result<(), ListenerError>;
}

/// Handler backed by an async closure
pub struct HandlerFn<F> {
    f: F,
}

impl<F, Fut> HandlerFn<F>
where
    F: Fn(Invocation) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ListenerError>> + Send + 'static,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }

    pub fn arc(f: F) -> Arc<dyn Handler> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(Invocation) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ListenerError>> + Send + 'static,
{
    async fn handle(&self, invocation: Invocation) -> Result<(), ListenerError> {
        (self.f)(invocation).await
    }
}
