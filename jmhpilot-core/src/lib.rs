// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! jmhpilot Core Library
//!
//! Building blocks for the jmhpilot benchmark orchestrator: runner
//! configuration, source-label classification, serialization-size
//! collection, JMH result parsing, and NJSON record writing.
//!
//! # Data Flow
//!
//! CLI args → harness invocation → JSON parse → size lookup → record
//! merge → NJSON file. Strictly linear, single-threaded, two blocking
//! child processes per run.

pub mod config;
pub mod error;
pub mod harness;
pub mod jmh;
pub mod njson;
pub mod sizes;
pub mod source;

// Re-export commonly used types
pub use config::RunnerConfig;
pub use error::{PilotError, PilotResult};
pub use harness::{ensure_artifact, HarnessInvocation, RunPaths};
pub use jmh::{JmhResult, PrimaryMetric};
pub use njson::NjsonRecord;
pub use sizes::SizeTable;
pub use source::Source;
