// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! NJSON record assembly and writing.
//!
//! The derived file carries one minified JSON object per harness entry,
//! in the harness's original order. All records of a run share the same
//! timestamp and comment.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{PilotError, PilotResult};
use crate::jmh::JmhResult;
use crate::sizes::SizeTable;
use crate::source::Source;

/// One line of the derived NJSON file. Field order is the wire order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NjsonRecord {
    pub benchmark: String,
    pub src: Source,
    pub mode: String,
    pub score: f64,
    pub error: f64,
    pub units: String,
    pub size: u64,
    pub ts: String,
    pub comment: String,
}

impl NjsonRecord {
    /// Build a record from one harness entry, classifying its source and
    /// looking up the serialized size (0 when unreported).
    pub fn from_result(result: &JmhResult, sizes: &SizeTable, ts: &str, comment: &str) -> Self {
        let src = Source::classify(&result.benchmark);
        Self {
            benchmark: result.benchmark.clone(),
            src,
            mode: result.mode.clone(),
            score: result.primary_metric.score,
            error: result.primary_metric.score_error,
            units: result.primary_metric.score_unit.clone(),
            size: sizes.get(src.label()),
            ts: ts.to_string(),
            comment: comment.to_string(),
        }
    }
}

/// Write the derived NJSON file and return the number of records written.
///
/// An empty result slice produces a zero-line file, which is valid.
pub fn write_records(
    path: &Path,
    results: &[JmhResult],
    sizes: &SizeTable,
    timestamp: DateTime<Local>,
    comment: &str,
) -> PilotResult<usize> {
    let ts = timestamp.to_rfc3339();

    let file = File::create(path).map_err(|e| PilotError::Io {
        context: "creating njson file",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    for result in results {
        let record = NjsonRecord::from_result(result, sizes, &ts, comment);
        let line = serde_json::to_string(&record)?;
        writeln!(writer, "{}", line).map_err(|e| PilotError::Io {
            context: "writing njson file",
            source: e,
        })?;
    }

    writer.flush().map_err(|e| PilotError::Io {
        context: "flushing njson file",
        source: e,
    })?;

    Ok(results.len())
}
