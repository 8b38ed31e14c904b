//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ua_corpus` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ua_corpus::initialization::init_logger_with;
use ua_corpus::{run_copy_tests, run_rewrite_tests, Command, Config, Opt};

fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match opt.command {
        Command::CopyTests => run_copy_tests(&config).map(|report| {
            println!(
                "✅ Copied {} new test{} ({} available) in {:.1}s",
                report.new_tests,
                if report.new_tests == 1 { "" } else { "s" },
                report.total_tests,
                report.elapsed_seconds
            );
            println!("Text corpus written to {}", config.txt_corpus_dir.display());
        }),
        Command::RewriteTests { .. } => run_rewrite_tests(&config).map(|report| {
            println!(
                "✅ Rewrote {} test{} ({} new) into {} folder{} in {:.1}s",
                report.total_tests,
                if report.total_tests == 1 { "" } else { "s" },
                report.new_tests,
                report.folders,
                if report.folders == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Fixtures written to {}", config.fixture_dir.display());
        }),
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("ua_corpus error: {:#}", e);
            process::exit(1);
        }
    }
}
