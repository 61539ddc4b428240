//! # Refcheck
//!
//! Pointer emulation with reference cells, and a self-checking suite that
//! proves the emulation behaves like language-level pointers.
//!
//! A [`ReferenceCell`] is a "reference" variable: it may be nil, it can be
//! aliased, and a write through any alias is seen by all of them. A plain
//! Rust value is a "value" variable: copying it detaches it. The distinction
//! is made in the types, never by runtime convention.
//!
//! ## Architecture
//!
//! - **Cells**: [`ReferenceCell`] over shared, mutably borrowable storage
//! - **Scenarios**: a fixed catalogue of aliasing micro-protocols
//! - **Runner**: runs scenarios in order, soft-reports every assertion,
//!   and never halts the suite on a failure
//! - **Reporters**: where progress and failures go ([`TracingReporter`],
//!   [`MemoryReporter`])

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cell;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod scenarios;

// Re-export main types
pub use cell::ReferenceCell;
pub use config::RunConfig;
pub use error::{RefcheckError, Result};
pub use report::{Level, MemoryReporter, Reporter, TracingReporter};
pub use runner::{
    Assertion, Probe, Runner, ScenarioDef, ScenarioFn, ScenarioReport, ScenarioState, SuiteReport,
};

/// Refcheck version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
