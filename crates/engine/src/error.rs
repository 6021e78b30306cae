// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for bootstrap, lookup and scope resolution

use crate::component::ComponentToken;
use eventide_core::{ConfigError, EmitError};
use thiserror::Error;

/// Fatal errors while wiring listeners at startup
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("listener {component}::{method} targets unknown emitter '{emitter}'")]
    UnknownEmitter {
        emitter: String,
        component: ComponentToken,
        method: String,
    },
    #[error("listener {component}::{method} has an empty event pattern")]
    EmptyPattern {
        component: ComponentToken,
        method: String,
    },
}

/// Errors returned by the event bus facade
#[derive(Debug, Error)]
pub enum BusError {
    #[error("emitter not found: {0}")]
    ChannelNotFound(String),
    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl BusError {
    pub fn is_channel_not_found(&self) -> bool {
        matches!(self, BusError::ChannelNotFound(_))
    }
}

/// Errors resolving a per-invocation component instance
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no per-invocation factory for component {0}")]
    UnknownComponent(ComponentToken),
    #[error("failed to resolve {token}: {message}")]
    Failed {
        token: ComponentToken,
        message: String,
    },
}
