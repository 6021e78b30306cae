// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Emitter: one named channel of listener registrations
//!
//! An emitter is built mutably during bootstrap (`register`, `off`) and is
//! shared read-only afterwards. `emit` starts every matching handler in
//! registration order on a single spawned fan-out task and waits for all of
//! them to settle.

use crate::args::EventArgs;
use crate::error::{EmitError, ListenerFailure};
use crate::handler::{Handler, ListenerError, ListenerId, ListenerOptions};
use crate::invocation::Invocation;
use crate::options::EmitterConfig;
use crate::pattern::Matcher;
use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Instrument;

/// Runtime binding of a pattern to a handler
pub struct Registration {
    pub id: ListenerId,
    pub pattern: String,
    pub options: ListenerOptions,
    matcher: Option<Matcher>,
    handler: Arc<dyn Handler>,
}

impl Registration {
    /// The listener's own matcher, or the emitter's when it has none
    fn matcher<'a>(&'a self, emitter: &'a Matcher) -> &'a Matcher {
        self.matcher.as_ref().unwrap_or(emitter)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .field("pattern", &self.pattern)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// A named, independent event channel
pub struct Emitter {
    name: Arc<str>,
    config: EmitterConfig,
    matcher: Matcher,
    registrations: Vec<Registration>,
    next_id: u64,
}

impl Emitter {
    pub fn new(name: impl Into<String>, config: EmitterConfig) -> Self {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            matcher: Matcher::from_config(&config),
            config,
            registrations: Vec::new(),
            next_id: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Bind `handler` to `pattern`
    ///
    /// Never rejects. Exceeding `max_listeners` for one pattern only warns.
    pub fn register(
        &mut self,
        pattern: impl Into<String>,
        handler: Arc<dyn Handler>,
        options: ListenerOptions,
    ) -> ListenerId {
        let pattern = pattern.into();
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        let count = 1 + self
            .registrations
            .iter()
            .filter(|r| r.pattern == pattern)
            .count();
        let max = self.config.max_listeners;
        if max > 0 && count > max {
            tracing::warn!(
                emitter = %self.name,
                pattern = %pattern,
                count,
                max,
                "listener count exceeds max_listeners, possible leak"
            );
        }

        tracing::debug!(
            emitter = %self.name,
            listener = %id,
            pattern = %pattern,
            rethrow = options.rethrow,
            "registered"
        );
        self.registrations.push(Registration {
            id,
            pattern,
            matcher: options.matcher.as_ref().map(Matcher::from_options),
            options,
            handler,
        });
        id
    }

    /// Remove a registration; returns false if it was not present
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.id != id);
        before != self.registrations.len()
    }

    pub fn listener_count(&self) -> usize {
        self.registrations.len()
    }

    /// Distinct registered patterns, in registration order
    pub fn patterns(&self) -> Vec<&str> {
        let mut patterns: Vec<&str> = Vec::new();
        for registration in &self.registrations {
            if !patterns.contains(&registration.pattern.as_str()) {
                patterns.push(&registration.pattern);
            }
        }
        patterns
    }

    /// Registrations whose pattern matches `event`, in registration order
    pub fn matching<'a>(
        &'a self,
        event: &'a str,
    ) -> impl Iterator<Item = &'a Registration> + 'a {
        self.registrations
            .iter()
            .filter(move |r| r.matcher(&self.matcher).matches(&r.pattern, event))
    }

    /// Invoke every matching listener and wait for all of them to settle
    ///
    /// Returns the number of listeners invoked. Failures of listeners without
    /// `rethrow` are logged and swallowed; the first `rethrow` failure to
    /// settle is returned once every invocation has finished.
    pub async fn emit(&self, event: &str, args: impl Into<EventArgs>) -> Result<usize, EmitError> {
        let args = args.into();
        let event: Arc<str> = Arc::from(event);

        let pending: Vec<Pending> = self
            .matching(&event)
            .map(|registration| {
                let invocation =
                    Invocation::new(Arc::clone(&self.name), Arc::clone(&event), args.clone());
                let handler = Arc::clone(&registration.handler);
                let span = tracing::debug_span!(
                    "listener",
                    listener = %registration.id,
                    pattern = %registration.pattern,
                    invocation = %invocation.id
                );
                Pending {
                    id: registration.id,
                    pattern: registration.pattern.clone(),
                    rethrow: registration.options.rethrow,
                    call: async move { handler.handle(invocation).await }
                        .instrument(span)
                        .boxed(),
                }
            })
            .collect();

        let matched = pending.len();
        tracing::trace!(emitter = %self.name, event = %event, matched, "emitting");
        if matched == 0 {
            return Ok(0);
        }

        // Dropping the handle detaches the fan-out, so an abandoned emit
        // still lets every started listener run to completion.
        let fanout = settle(Arc::clone(&self.name), Arc::clone(&event), pending);
        match tokio::spawn(fanout.in_current_span()).await {
            Ok(None) => Ok(matched),
            Ok(Some(err)) => Err(err),
            Err(err) => Err(EmitError::Interrupted {
                emitter: self.name.to_string(),
                event: event.to_string(),
                failure: ListenerFailure::from_join(err),
            }),
        }
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("registrations", &self.registrations)
            .finish()
    }
}

/// One matched listener, not yet started
struct Pending {
    id: ListenerId,
    pattern: String,
    rethrow: bool,
    call: BoxFuture<'static, Result<(), ListenerError>>,
}

/// Drive every pending invocation to completion
///
/// Invocations are first polled in registration order and then interleave
/// freely. Isolated failures are logged here so they are reported even when
/// nobody awaits the emission any more.
async fn settle(emitter: Arc<str>, event: Arc<str>, pending: Vec<Pending>) -> Option<EmitError> {
    let settled_count = AtomicUsize::new(0);
    let mut outcomes = join_all(pending.into_iter().map(|listener| {
        let settled_count = &settled_count;
        async move {
            let outcome = AssertUnwindSafe(listener.call).catch_unwind().await;
            let settled = settled_count.fetch_add(1, Ordering::Relaxed);
            let failure = match outcome {
                Ok(Ok(())) => None,
                Ok(Err(err)) => Some(ListenerFailure::Failed(err)),
                Err(payload) => Some(ListenerFailure::from_panic(payload)),
            };
            (settled, listener.id, listener.pattern, listener.rethrow, failure)
        }
    }))
    .await;
    outcomes.sort_by_key(|(settled, ..)| *settled);

    let mut first_rethrow: Option<EmitError> = None;
    for (_, listener, pattern, rethrow, failure) in outcomes {
        let Some(failure) = failure else {
            continue;
        };

        if !rethrow {
            tracing::error!(
                emitter = %emitter,
                event = %event,
                listener = %listener,
                pattern = %pattern,
                error = %failure,
                causes = ?failure.causes(),
                "listener failed"
            );
            continue;
        }

        if first_rethrow.is_some() {
            tracing::warn!(
                emitter = %emitter,
                event = %event,
                listener = %listener,
                error = %failure,
                "additional rethrow failure not propagated"
            );
            continue;
        }

        first_rethrow = Some(EmitError::Listener {
            emitter: emitter.to_string(),
            event: event.to_string(),
            listener,
            pattern,
            failure,
        });
    }
    first_rethrow
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
