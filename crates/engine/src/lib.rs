// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! eventide-engine: wiring components to event channels
//!
//! This crate provides:
//! - `Bootstrap` - builds the emitter registry and registers listeners
//! - `EventBus` - emit on the default channel or look up named channels
//! - `Catalog` / `ListenerTable` - explicit component and descriptor registries
//! - `ScopeResolver` - per-invocation instances for dynamically scoped components

pub mod bootstrap;
pub mod bus;
pub mod catalog;
pub mod component;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod scope;
pub mod traced;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use bootstrap::Bootstrap;
pub use bus::EventBus;
pub use catalog::Catalog;
pub use component::{
    Component, ComponentDiscovery, ComponentEntry, ComponentToken, EmitterDecl, Scope,
};
pub use descriptor::{DescriptorSource, ListenerDescriptor, ListenerTable};
pub use error::{BootstrapError, BusError, ResolveError};
pub use registry::{EmitterRegistry, RegistryBuilder, DEFAULT_EMITTER};
pub use scope::ScopeResolver;
pub use traced::TracedResolver;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ComponentCall, FakeComponent};
