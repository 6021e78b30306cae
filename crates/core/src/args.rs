// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event arguments shared by every listener of one emission

use serde_json::Value;
use std::ops::Deref;
use std::sync::Arc;

/// Positional event arguments; cloning shares the underlying values
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventArgs(Arc<[Value]>);

impl EventArgs {
    pub fn new(values: Vec<Value>) -> Self {
        Self(Arc::from(values))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The first argument, which is the payload for most events
    pub fn payload(&self) -> Option<&Value> {
        self.0.first()
    }
}

impl Deref for EventArgs {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Value> for EventArgs {
    fn from(value: Value) -> Self {
        Self::new(vec![value])
    }
}

impl From<Vec<Value>> for EventArgs {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl From<()> for EventArgs {
    fn from(_: ()) -> Self {
        Self::empty()
    }
}
