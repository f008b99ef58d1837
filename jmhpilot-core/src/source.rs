// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Source-label classification for benchmark names.
//!
//! Each benchmark method measures exactly one serialization implementation,
//! identified by a marker substring in its fully-qualified name.

use serde::{Deserialize, Serialize};

/// Serialization implementation measured by a benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Source {
    /// JDK built-in serialization (reference baseline)
    Jdk,
    /// No Framework Pickler (custom format)
    Nfp,
    /// Protocol Buffers (third-party library)
    Ptb,
    /// Benchmark name matched no known marker
    Unknown,
}

impl Source {
    /// Classify a benchmark by case-insensitive substring search on its
    /// name. Markers are checked in a fixed order; the first match wins.
    pub fn classify(benchmark: &str) -> Self {
        let name = benchmark.to_ascii_lowercase();
        if name.contains("jdk") {
            Source::Jdk
        } else if name.contains("nfp") {
            Source::Nfp
        } else if name.contains("protobuf") {
            Source::Ptb
        } else {
            Source::Unknown
        }
    }

    /// Short tag used in size-table keys and output records.
    pub fn label(&self) -> &'static str {
        match self {
            Source::Jdk => "JDK",
            Source::Nfp => "NFP",
            Source::Ptb => "PTB",
            Source::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
