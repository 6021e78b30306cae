// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for emission and configuration

use crate::handler::{ListenerError, ListenerId};
use std::any::Any;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the caller of `emit`
#[derive(Debug, Error)]
pub enum EmitError {
    /// A listener registered with `rethrow` failed
    #[error("listener {listener} ({pattern}) on emitter '{emitter}' failed for event '{event}': {failure}")]
    Listener {
        emitter: String,
        event: String,
        listener: ListenerId,
        pattern: String,
        #[source]
        failure: ListenerFailure,
    },
    /// The fan-out task itself stopped before its listeners settled
    #[error("emission of '{event}' on emitter '{emitter}' was interrupted: {failure}")]
    Interrupted {
        emitter: String,
        event: String,
        #[source]
        failure: ListenerFailure,
    },
}

impl EmitError {
    pub fn failure(&self) -> &ListenerFailure {
        match self {
            EmitError::Listener { failure, .. } | EmitError::Interrupted { failure, .. } => {
                failure
            }
        }
    }
}

/// How a single listener invocation failed
#[derive(Debug, Error)]
pub enum ListenerFailure {
    #[error("{0}")]
    Failed(ListenerError),
    #[error("listener panicked: {0}")]
    Panicked(String),
    #[error("listener task was cancelled")]
    Cancelled,
}

impl ListenerFailure {
    /// Messages of the errors beneath this failure, outermost first
    pub fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut next = match self {
            ListenerFailure::Failed(err) => err.source(),
            _ => None,
        };
        while let Some(err) = next {
            causes.push(err.to_string());
            next = err.source();
        }
        causes
    }

    pub(crate) fn from_join(err: tokio::task::JoinError) -> Self {
        if !err.is_panic() {
            return ListenerFailure::Cancelled;
        }
        Self::from_panic(err.into_panic())
    }

    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        ListenerFailure::Panicked(message)
    }
}

/// Errors loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("delimiter must not be empty when wildcard matching is enabled")]
    EmptyDelimiter,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid options: {0}")]
    Parse(#[from] toml::de::Error),
}
