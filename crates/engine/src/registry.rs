// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Emitter registry: name-keyed channels, built once at startup
//!
//! `RegistryBuilder` is the mutable bootstrap phase; `build` freezes it into
//! an `EmitterRegistry` that is only read afterwards.

use crate::component::EmitterDecl;
use crate::error::BusError;
use eventide_core::{Emitter, EmitterConfig};
use std::collections::HashMap;
use std::sync::Arc;

/// Name of the channel that always exists
pub const DEFAULT_EMITTER: &str = "default";

/// Mutable registry used while wiring listeners
#[derive(Debug)]
pub struct RegistryBuilder {
    emitters: HashMap<String, Emitter>,
    defaults: EmitterConfig,
}

impl RegistryBuilder {
    /// `defaults` configures the built-in default channel and every declared
    /// channel without its own settings
    pub fn new(defaults: EmitterConfig) -> Self {
        Self {
            emitters: HashMap::new(),
            defaults,
        }
    }

    /// Add the channel declared by a component; a repeated name replaces the earlier one
    pub fn declare(&mut self, decl: &EmitterDecl) {
        let config = decl.config.clone().unwrap_or_else(|| self.defaults.clone());
        let replaced = self
            .emitters
            .insert(decl.name.clone(), Emitter::new(decl.name.clone(), config));
        if replaced.is_some() {
            tracing::warn!(
                emitter = %decl.name,
                component = %decl.token,
                "emitter declared more than once, keeping the last declaration"
            );
        } else {
            tracing::debug!(emitter = %decl.name, component = %decl.token, "emitter declared");
        }
    }

    /// Install the built-in default channel unless a component declared one
    ///
    /// Returns true if the built-in channel was installed.
    pub fn ensure_default(&mut self) -> bool {
        if self.emitters.contains_key(DEFAULT_EMITTER) {
            return false;
        }
        self.emitters.insert(
            DEFAULT_EMITTER.to_string(),
            Emitter::new(DEFAULT_EMITTER, self.defaults.clone()),
        );
        true
    }

    pub fn emitter_mut(&mut self, name: &str) -> Option<&mut Emitter> {
        self.emitters.get_mut(name)
    }

    pub fn build(mut self) -> EmitterRegistry {
        self.ensure_default();
        EmitterRegistry {
            emitters: self
                .emitters
                .into_iter()
                .map(|(name, emitter)| (name, Arc::new(emitter)))
                .collect(),
        }
    }
}

/// Read-only name-to-channel mapping; always contains `"default"`
#[derive(Debug)]
pub struct EmitterRegistry {
    emitters: HashMap<String, Arc<Emitter>>,
}

impl EmitterRegistry {
    /// Look up a channel; unknown names are a caller error
    pub fn get(&self, name: &str) -> Result<Arc<Emitter>, BusError> {
        self.emitters
            .get(name)
            .cloned()
            .ok_or_else(|| BusError::ChannelNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.emitters.contains_key(name)
    }

    /// Channel names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.emitters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.emitters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
