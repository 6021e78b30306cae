// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event pattern matching
//!
//! Without wildcards a pattern only matches the identical event name.
//! With wildcards enabled both sides are split on the delimiter:
//!   - Exact: "user.created"
//!   - Single wildcard: "user.*" matches "user.created", "user.deleted"
//!   - Multi wildcard: "user.**" matches "user", "user.created", "user.role.added"
//!
//! `**` may appear anywhere in a pattern and swallows zero or more segments.

use crate::options::{EmitterConfig, MatcherOptions};

const SINGLE: &str = "*";
const MULTI: &str = "**";

/// Decides whether a registered pattern matches an emitted event name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matcher {
    wildcard: bool,
    delimiter: String,
}

impl Matcher {
    /// Matcher that only accepts identical names
    pub fn exact() -> Self {
        Self {
            wildcard: false,
            delimiter: String::new(),
        }
    }

    /// Matcher that splits names on `delimiter` and honors `*` and `**`
    pub fn wildcard(delimiter: impl Into<String>) -> Self {
        Self {
            wildcard: true,
            delimiter: delimiter.into(),
        }
    }

    pub fn from_config(config: &EmitterConfig) -> Self {
        if config.wildcard {
            Self::wildcard(config.delimiter.clone())
        } else {
            Self::exact()
        }
    }

    pub fn from_options(options: &MatcherOptions) -> Self {
        if options.wildcard {
            Self::wildcard(options.delimiter.clone())
        } else {
            Self::exact()
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Check if `pattern` matches `event`
    pub fn matches(&self, pattern: &str, event: &str) -> bool {
        if !self.wildcard {
            return pattern == event;
        }

        // An empty delimiter cannot segment anything: whole names are single segments
        if self.delimiter.is_empty() {
            return Self::match_segments(&[pattern], &[event]);
        }

        let pattern_parts: Vec<&str> = pattern.split(self.delimiter.as_str()).collect();
        let event_parts: Vec<&str> = event.split(self.delimiter.as_str()).collect();

        Self::match_segments(&pattern_parts, &event_parts)
    }

    fn match_segments(pattern: &[&str], event: &[&str]) -> bool {
        match pattern.split_first() {
            None => event.is_empty(),
            // ** matches zero or more segments
            Some((&MULTI, rest)) => {
                (0..=event.len()).any(|skip| Self::match_segments(rest, &event[skip..]))
            }
            // * matches exactly one segment
            Some((&SINGLE, rest)) => {
                !event.is_empty() && Self::match_segments(rest, &event[1..])
            }
            Some((segment, rest)) => {
                event.first() == Some(segment) && Self::match_segments(rest, &event[1..])
            }
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::exact()
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
