// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Serialization size collection.
//!
//! Runs the Maven-driven size calculator and parses its stdout into a
//! label → byte-size table. This step is best-effort: a failing child
//! yields an empty table and the run continues with every size at 0.

use std::collections::HashMap;
use std::process::Command;

use crate::config::RunnerConfig;

/// Byte sizes keyed by source label, e.g. `NFP` → 42.
///
/// Built once per run, read-only afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeTable {
    entries: HashMap<String, u64>,
}

impl SizeTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse size-calculator stdout.
    ///
    /// Lines carry comma-separated `LABEL:SIZE` pairs, e.g.
    /// `NFP:123,JDK:456,PTB:789`. A single-pair line has no comma and is
    /// still accepted. Pairs without a colon, or whose right side is not
    /// an integer, are skipped; labels and sizes are trimmed. Never fails.
    pub fn parse(output: &str) -> Self {
        let mut entries = HashMap::new();
        for line in output.lines() {
            if !line.contains(':') {
                continue;
            }
            for pair in line.split(',') {
                let Some((label, size)) = pair.split_once(':') else {
                    continue;
                };
                if let Ok(bytes) = size.trim().parse::<u64>() {
                    entries.insert(label.trim().to_string(), bytes);
                }
            }
        }
        Self { entries }
    }

    /// Size for a label, 0 when the label was never reported.
    pub fn get(&self, label: &str) -> u64 {
        self.entries.get(label).copied().unwrap_or(0)
    }

    pub fn insert(&mut self, label: impl Into<String>, bytes: u64) {
        self.entries.insert(label.into(), bytes);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Run the size calculator and build the table from its stdout.
///
/// The calculator is a Maven exec target; `-q` keeps Maven's own output
/// off stdout so only the calculator's lines remain. Any child failure
/// is absorbed here - the table simply comes back empty.
pub fn collect(config: &RunnerConfig) -> SizeTable {
    let result = Command::new(&config.maven_bin)
        .arg("exec:java")
        .arg(format!("-Dexec.mainClass={}", config.size_main_class))
        .arg("-q")
        .output();

    match result {
        Ok(output) if output.status.success() => {
            let table = SizeTable::parse(&String::from_utf8_lossy(&output.stdout));
            tracing::debug!(labels = table.len(), "Size calculation completed");
            table
        }
        Ok(output) => {
            tracing::warn!(
                code = ?output.status.code(),
                "Size calculation failed, sizes default to 0"
            );
            SizeTable::empty()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to launch size calculator, sizes default to 0");
            SizeTable::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multi_pair_line() {
        let table = SizeTable::parse("NFP:123,JDK:456,PTB:789\n");
        assert_eq!(table.get("NFP"), 123);
        assert_eq!(table.get("JDK"), 456);
        assert_eq!(table.get("PTB"), 789);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_parse_single_pair_line() {
        let table = SizeTable::parse("NFP:42");
        assert_eq!(table.get("NFP"), 42);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let table = SizeTable::parse(" NFP : 123 , JDK : 456 ");
        assert_eq!(table.get("NFP"), 123);
        assert_eq!(table.get("JDK"), 456);
    }

    #[test]
    fn test_parse_skips_surrounding_noise() {
        // Maven banners and calculator headings carry no colon pairs.
        let output = "=== Size Analysis ===\n\nNFP:88,JDK:210\nDone.\n";
        let table = SizeTable::parse(output);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("NFP"), 88);
    }

    #[test]
    fn test_parse_skips_non_integer_sizes() {
        let table = SizeTable::parse("NFP:abc,JDK:456");
        assert_eq!(table.get("NFP"), 0);
        assert_eq!(table.get("JDK"), 456);
    }

    #[test]
    fn test_parse_empty_and_all_malformed_yield_empty_table() {
        assert!(SizeTable::parse("").is_empty());
        assert!(SizeTable::parse("no pairs here\njust, commas\n").is_empty());
    }

    #[test]
    fn test_missing_label_defaults_to_zero() {
        let table = SizeTable::parse("NFP:42");
        assert_eq!(table.get("UNKNOWN"), 0);
        assert_eq!(table.get("PTB"), 0);
    }

    #[test]
    fn test_collect_absorbs_child_failure() {
        // `false` exits 1 regardless of arguments.
        let config = RunnerConfig {
            maven_bin: "false".to_string(),
            ..RunnerConfig::default()
        };
        assert!(collect(&config).is_empty());
    }

    #[test]
    fn test_collect_absorbs_spawn_failure() {
        let config = RunnerConfig {
            maven_bin: "/nonexistent/mvn".to_string(),
            ..RunnerConfig::default()
        };
        assert!(collect(&config).is_empty());
    }
}
