// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for jmhpilot.
//!
//! All fatal conditions are explicit enum variants; the binary maps each
//! of them to a non-zero exit. The only absorbed failure in the program
//! (the size calculator) never surfaces here.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the core crate.
pub type PilotResult<T> = Result<T, PilotError>;

/// Top-level error type for the jmhpilot orchestrator.
#[derive(Debug, Error)]
pub enum PilotError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Precondition Errors - No Auto-Build
    // =========================================================================
    #[error("{path} not found. Run 'mvn clean verify' first.")]
    ArtifactMissing { path: PathBuf },

    // =========================================================================
    // Harness Subprocess Errors - Fatal, No Retry
    // =========================================================================
    #[error("Failed to launch harness: {source}")]
    HarnessLaunch {
        #[source]
        source: std::io::Error,
    },

    /// The harness exited non-zero. Carries the captured child output so
    /// the binary can echo it before exiting.
    #[error("Benchmark failed with exit code {code}")]
    HarnessFailed {
        code: i32,
        stdout: String,
        stderr: String,
    },

    // =========================================================================
    // Result File Errors
    // =========================================================================
    #[error("Malformed harness result file {path}: {source}")]
    ResultParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize record: {0}")]
    RecordSerialize(#[from] serde_json::Error),

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}
