// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bus and per-channel configuration
//!
//! Options are plain serde structs so operators can keep them in TOML:
//!
//! ```toml
//! wildcard = true
//! delimiter = "."
//! max_listeners = 20
//! global = false
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default delimiter for hierarchical event names
pub const DEFAULT_DELIMITER: &str = ".";
/// Default soft limit of listeners per pattern
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// Per-listener override of the emitter's matching mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherOptions {
    pub wildcard: bool,
    pub delimiter: String,
}

impl MatcherOptions {
    pub fn wildcard(delimiter: impl Into<String>) -> Self {
        Self {
            wildcard: true,
            delimiter: delimiter.into(),
        }
    }

    pub fn exact() -> Self {
        Self::default()
    }
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            wildcard: false,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

/// Options recognized by the event bus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusOptions {
    /// Enable `*`/`**` segment matching
    pub wildcard: bool,
    /// Separator between event name segments
    pub delimiter: String,
    /// Soft limit of listeners per pattern (0 disables the warning)
    pub max_listeners: usize,
    /// Install the bootstrapped bus as the process-wide bus
    pub global: bool,
}

impl Default for BusOptions {
    fn default() -> Self {
        Self {
            wildcard: false,
            delimiter: DEFAULT_DELIMITER.to_string(),
            max_listeners: DEFAULT_MAX_LISTENERS,
            global: true,
        }
    }
}

impl BusOptions {
    /// Parse options from TOML text; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let options: Self = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Read and parse an options file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.emitter_config().validate()
    }

    /// Channel configuration derived from these options
    pub fn emitter_config(&self) -> EmitterConfig {
        EmitterConfig {
            wildcard: self.wildcard,
            delimiter: self.delimiter.clone(),
            max_listeners: self.max_listeners,
        }
    }
}

/// Settings of a single channel; immutable once the channel exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitterConfig {
    pub wildcard: bool,
    pub delimiter: String,
    pub max_listeners: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        BusOptions::default().emitter_config()
    }
}

impl EmitterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wildcard && self.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
