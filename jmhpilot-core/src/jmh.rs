// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! JMH result-file parsing.
//!
//! The harness writes a JSON array with one object per benchmark method.
//! Only the fields consumed downstream are modeled; everything else the
//! harness emits is ignored.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PilotError, PilotResult};

/// Primary metric block of a JMH result entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryMetric {
    pub score: f64,
    pub score_error: f64,
    pub score_unit: String,
}

/// One JMH result entry.
#[derive(Debug, Clone, Deserialize)]
pub struct JmhResult {
    /// Fully-qualified benchmark method name.
    pub benchmark: String,
    /// Measurement mode, e.g. `thrpt` or `avgt`.
    pub mode: String,
    #[serde(rename = "primaryMetric")]
    pub primary_metric: PrimaryMetric,
}

/// Load the raw JMH result file written via `-rf json -rff <path>`.
pub fn load_results(path: &Path) -> PilotResult<Vec<JmhResult>> {
    let content = std::fs::read_to_string(path).map_err(|e| PilotError::Io {
        context: "reading harness result file",
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| PilotError::ResultParse {
        path: path.to_path_buf(),
        source: e,
    })
}
