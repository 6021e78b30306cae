// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! eventide-core: in-process event channels
//!
//! This crate provides:
//! - `Matcher` - exact or wildcard (`*`, `**`) event pattern matching
//! - `Emitter` - a named channel that fans events out to matching handlers
//! - `BusOptions` / `EmitterConfig` - operator-facing configuration
//! - Error types for emission and configuration

pub mod args;
pub mod emitter;
pub mod error;
pub mod handler;
pub mod invocation;
pub mod options;
pub mod pattern;

pub use args::EventArgs;
pub use emitter::{Emitter, Registration};
pub use error::{ConfigError, EmitError, ListenerFailure};
pub use handler::{Handler, HandlerFn, ListenerError, ListenerId, ListenerOptions};
pub use invocation::{Invocation, InvocationId};
pub use options::{
    BusOptions, EmitterConfig, MatcherOptions, DEFAULT_DELIMITER, DEFAULT_MAX_LISTENERS,
};
pub use pattern::Matcher;
