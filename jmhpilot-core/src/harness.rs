// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark harness invocation.
//!
//! Builds the `java -jar` command line for one run, spawns it, and waits
//! for completion. The harness writes its own JSON result file; this
//! module only decides where that file goes.

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Local};

use crate::config::RunnerConfig;
use crate::error::{PilotError, PilotResult};

/// Quick-mode iteration flags: one fork, one warmup, one iteration.
const QUICK_FLAGS: [&str; 6] = ["-f", "1", "-wi", "1", "-i", "1"];

/// File names for one run, both stamped with the run's start time.
#[derive(Debug, Clone)]
pub struct RunPaths {
    /// Raw JMH result file (JSON array).
    pub raw: PathBuf,
    /// Derived NJSON file.
    pub derived: PathBuf,
}

impl RunPaths {
    pub fn new(output_dir: &Path, started: DateTime<Local>) -> Self {
        let stamp = started.format("%Y%m%d_%H%M%S");
        Self {
            raw: output_dir.join(format!("jmh-result-{}.json", stamp)),
            derived: output_dir.join(format!("results-{}.njson", stamp)),
        }
    }
}

/// A fully-specified harness invocation for one run.
#[derive(Debug, Clone)]
pub struct HarnessInvocation {
    java_bin: String,
    jar: PathBuf,
    filters: Vec<String>,
    quick: bool,
    result_file: PathBuf,
}

impl HarnessInvocation {
    pub fn new(
        config: &RunnerConfig,
        filters: Vec<String>,
        quick: bool,
        result_file: PathBuf,
    ) -> Self {
        Self {
            java_bin: config.java_bin.clone(),
            jar: config.harness_jar.clone(),
            filters,
            quick,
            result_file,
        }
    }

    /// Path the harness will write its JSON result array to.
    pub fn result_file(&self) -> &Path {
        &self.result_file
    }

    /// Argument vector passed to the java binary: test filters first,
    /// quick-mode flags next, JSON output flags last.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["-jar".to_string(), self.jar.display().to_string()];

        args.extend(self.filters.iter().cloned());

        if self.quick {
            args.extend(QUICK_FLAGS.iter().map(|s| s.to_string()));
        }

        args.extend([
            "-rf".to_string(),
            "json".to_string(),
            "-rff".to_string(),
            self.result_file.display().to_string(),
        ]);

        args
    }

    /// Render the full command line for progress output.
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.java_bin.clone()];
        parts.extend(self.args());
        parts.join(" ")
    }

    /// Spawn the harness and wait for completion. No timeout is imposed;
    /// the harness runs as long as it needs to.
    ///
    /// # Errors
    /// Non-zero exit is fatal and carries the child's captured stdout and
    /// stderr so the caller can echo them.
    pub fn run(&self) -> PilotResult<()> {
        tracing::debug!(command = %self.command_line(), "Spawning harness");

        let output = Command::new(&self.java_bin)
            .args(self.args())
            .output()
            .map_err(|e| PilotError::HarnessLaunch { source: e })?;

        if !output.status.success() {
            return Err(PilotError::HarnessFailed {
                code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        tracing::debug!(result_file = %self.result_file.display(), "Harness completed");
        Ok(())
    }
}

/// Check that the harness jar was built before doing any work.
///
/// # Errors
/// Returns `ArtifactMissing` with a user-facing build instruction.
pub fn ensure_artifact(config: &RunnerConfig) -> PilotResult<()> {
    if !config.harness_jar.exists() {
        return Err(PilotError::ArtifactMissing {
            path: config.harness_jar.clone(),
        });
    }
    Ok(())
}
