// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation context

use crate::args::EventArgs;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Unique identity of one listener invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InvocationId(Uuid);

impl InvocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context of a single listener invocation
///
/// Created by the emitter for each matched listener of an emission and
/// dropped when that listener settles. Scope resolvers key per-invocation
/// instances on [`Invocation::id`].
#[derive(Clone, Debug)]
pub struct Invocation {
    pub id: InvocationId,
    pub emitter: Arc<str>,
    pub event: Arc<str>,
    pub args: EventArgs,
}

impl Invocation {
    pub fn new(emitter: Arc<str>, event: Arc<str>, args: EventArgs) -> Self {
        Self {
            id: InvocationId::new(),
            emitter,
            event,
            args,
        }
    }

    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.args.payload()
    }
}
