// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced resolver wrapper for consistent observability

use crate::component::{Component, ComponentToken};
use crate::error::ResolveError;
use crate::scope::ScopeResolver;
use async_trait::async_trait;
use eventide_core::Invocation;
use std::sync::Arc;
use tracing::Instrument;

/// Wrapper that adds tracing to any ScopeResolver
#[derive(Clone)]
pub struct TracedResolver<R> {
    inner: R,
}

impl<R> TracedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R: ScopeResolver> ScopeResolver for TracedResolver<R> {
    async fn resolve(
        &self,
        token: &ComponentToken,
        invocation: &Invocation,
    ) -> Result<Arc<dyn Component>, ResolveError> {
        let span = tracing::debug_span!(
            "scope.resolve",
            component = %token,
            invocation = %invocation.id,
            event = %invocation.event
        );

        let start = std::time::Instant::now();
        let result = self
            .inner
            .resolve(token, invocation)
            .instrument(span.clone())
            .await;
        let elapsed = start.elapsed();

        span.in_scope(|| match &result {
            Ok(_) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "resolved"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "resolve failed"
            ),
        });

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
