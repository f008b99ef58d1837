// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML runner configuration.
//!
//! Every field has a default that reproduces the conventional Maven/JMH
//! layout, so the tool works with no config file at all. A config file
//! that is present but unparseable is a fatal error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PilotError, PilotResult};

fn default_harness_jar() -> PathBuf {
    PathBuf::from("target/benchmarks.jar")
}

fn default_java_bin() -> String {
    "java".to_string()
}

fn default_maven_bin() -> String {
    "mvn".to_string()
}

fn default_size_main_class() -> String {
    "org.sample.SizeCalculator".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_comment() -> String {
    "Automated benchmark run".to_string()
}

/// Runner configuration, loaded from YAML or defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Path to the built JMH harness jar.
    #[serde(default = "default_harness_jar")]
    pub harness_jar: PathBuf,

    /// Java binary used to launch the harness.
    #[serde(default = "default_java_bin")]
    pub java_bin: String,

    /// Maven binary used to launch the size calculator.
    #[serde(default = "default_maven_bin")]
    pub maven_bin: String,

    /// Main class of the size-calculator entry point.
    #[serde(default = "default_size_main_class")]
    pub size_main_class: String,

    /// Directory the raw and derived result files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Comment text stamped onto every output record.
    #[serde(default = "default_comment")]
    pub comment: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            harness_jar: default_harness_jar(),
            java_bin: default_java_bin(),
            maven_bin: default_maven_bin(),
            size_main_class: default_size_main_class(),
            output_dir: default_output_dir(),
            comment: default_comment(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a YAML file. The file must exist.
    pub fn load_file(path: impl AsRef<Path>) -> PilotResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PilotError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| PilotError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load configuration from a YAML string.
    pub fn load_string(content: &str) -> PilotResult<Self> {
        serde_yaml::from_str(content).map_err(|e| PilotError::ConfigParse {
            message: format!("YAML parse error: {}", e),
        })
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    ///
    /// Used for the conventional config path, which is optional.
    pub fn load_or_default(path: impl AsRef<Path>) -> PilotResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_file(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_conventional_layout() {
        let config = RunnerConfig::default();
        assert_eq!(config.harness_jar, PathBuf::from("target/benchmarks.jar"));
        assert_eq!(config.java_bin, "java");
        assert_eq!(config.maven_bin, "mvn");
        assert_eq!(config.size_main_class, "org.sample.SizeCalculator");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.comment, "Automated benchmark run");
    }

    #[test]
    fn test_load_string_partial_override() {
        let config = RunnerConfig::load_string(
            "harness_jar: build/bench.jar\ncomment: nightly run\n",
        )
        .unwrap();
        assert_eq!(config.harness_jar, PathBuf::from("build/bench.jar"));
        assert_eq!(config.comment, "nightly run");
        // Unspecified fields keep their defaults.
        assert_eq!(config.java_bin, "java");
    }

    #[test]
    fn test_load_string_rejects_malformed_yaml() {
        let err = RunnerConfig::load_string("harness_jar: [unclosed").unwrap_err();
        assert!(matches!(err, PilotError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_file_missing_is_an_error() {
        let err = RunnerConfig::load_file("/no/such/jmhpilot.yaml").unwrap_err();
        assert!(matches!(err, PilotError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_or_default_missing_falls_back() {
        let config = RunnerConfig::load_or_default("/no/such/jmhpilot.yaml").unwrap();
        assert_eq!(config.java_bin, "java");
    }

    #[test]
    fn test_load_or_default_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jmhpilot.yaml");
        std::fs::write(&path, "java_bin: /usr/lib/jvm/java-21/bin/java\n").unwrap();

        let config = RunnerConfig::load_or_default(&path).unwrap();
        assert_eq!(config.java_bin, "/usr/lib/jvm/java-21/bin/java");
    }
}
