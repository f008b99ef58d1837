// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! jmhpilot CLI
//!
//! Runs the JMH benchmark harness, collects serialization sizes, and
//! reshapes the results into size-enriched NJSON.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use jmhpilot_core::{
    ensure_artifact, jmh, njson, sizes, HarnessInvocation, PilotError, RunPaths, RunnerConfig,
};

/// Conventional config path, optional.
const DEFAULT_CONFIG_PATH: &str = "jmhpilot.yaml";

/// Run JMH benchmarks and process results into NJSON
#[derive(Parser)]
#[command(name = "jmhpilot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Run quick test (1 fork, 1 warmup, 1 iteration)
    #[arg(short, long)]
    quick: bool,

    /// Specific tests to run (default: all)
    tests: Vec<String>,

    /// Runner configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    if let Err(err) = run(cli) {
        // A failed harness run echoes the child's captured output.
        if let Some(PilotError::HarnessFailed {
            code,
            stdout,
            stderr,
        }) = err.downcast_ref::<PilotError>()
        {
            println!("Benchmark failed with exit code {}", code);
            println!("stdout: {}", stdout);
            println!("stderr: {}", stderr);
        } else {
            eprintln!("✗ {:#}", err);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => RunnerConfig::load_file(path).context("loading runner config")?,
        None => RunnerConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    // The harness jar must already be built; never auto-build.
    ensure_artifact(&config)?;

    let started = Local::now();
    let paths = RunPaths::new(&config.output_dir, started);
    let invocation = HarnessInvocation::new(&config, cli.tests, cli.quick, paths.raw.clone());

    println!("Running: {}", invocation.command_line());
    println!("Output file: {}", paths.raw.display());

    invocation.run()?;
    println!("Benchmark completed successfully");

    println!("Calculating serialization sizes...");
    let size_table = sizes::collect(&config);

    println!(
        "Processing {} to {}",
        paths.raw.display(),
        paths.derived.display()
    );
    let results = jmh::load_results(&paths.raw)?;
    let written = njson::write_records(
        &paths.derived,
        &results,
        &size_table,
        Local::now(),
        &config.comment,
    )?;
    tracing::debug!(records = written, "Derived records written");
    println!("NJSON results written to {}", paths.derived.display());

    println!();
    println!("Completed successfully:");
    println!("  JMH JSON: {}", paths.raw.display());
    println!("  NJSON:    {}", paths.derived.display());

    Ok(())
}
