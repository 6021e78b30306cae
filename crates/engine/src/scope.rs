// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation instance resolution

use crate::component::{Component, ComponentToken};
use crate::error::ResolveError;
use async_trait::async_trait;
use eventide_core::Invocation;
use std::sync::Arc;

/// Resolves a fresh component instance for one invocation
///
/// Called concurrently for distinct invocations of dynamically scoped
/// listeners; instances must not be shared between invocations.
#[async_trait]
pub trait ScopeResolver: Send + Sync + 'static {
    async fn resolve(
        &self,
        token: &ComponentToken,
        invocation: &Invocation,
    ) -> Result<Arc<dyn Component>, ResolveError>;
}
