//! ua_corpus library: user-agent fixture harvesting and corpus rewriting
//!
//! This library reads the test fixtures of several browser-detection
//! libraries, deduplicates them by header string and by detection signature,
//! maps every fixture into one canonical result schema and writes the corpus
//! back as chunked fixture files, test-runner stubs and a CI configuration.
//!
//! # Example
//!
//! ```no_run
//! use ua_corpus::{run_rewrite_tests, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     include_sources: true,
//!     ..Default::default()
//! };
//!
//! let report = run_rewrite_tests(&config)?;
//! println!("{} new of {} tests", report.new_tests, report.total_tests);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod corpus;
pub mod dedup;
pub mod detector;
pub mod error_handling;
pub mod fallback;
pub mod initialization;
pub mod lookup;
pub mod mapper;
pub mod model;
pub mod pipeline;
pub mod source;

// Re-export public API
pub use config::{Command, Config, LogFormat, LogLevel, Opt};
pub use pipeline::{CopyReport, RewriteReport};
pub use run::{run_copy_tests, run_rewrite_tests};

// Entry points used by the binary: table setup, the run itself and the
// final statistics.
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::app::{print_processing_statistics, print_run_summary};
    use crate::config::Config;
    use crate::error_handling::ProcessingStats;
    use crate::initialization::init_lookup_tables;
    use crate::mapper::InputMapper;
    use crate::pipeline::{copy_tests, rewrite_tests, CopyReport, RewriteReport};
    use crate::source::SourceCollection;

    /// Merges new header strings from the library checkouts below
    /// `config.resources_dir` into the text corpus.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - A lookup table override cannot be loaded
    /// - The old text corpus cannot be removed
    /// - The new text corpus cannot be written
    pub fn run_copy_tests(config: &Config) -> Result<CopyReport> {
        let tables = init_lookup_tables(config)?;
        let stats = ProcessingStats::new();

        info!("init sources ...");
        let sources =
            SourceCollection::standard(&config.resources_dir, InputMapper::new(tables.companies));

        let report = copy_tests(&config.txt_corpus_dir, &sources, &stats)
            .context("copy-tests failed")?;

        print_run_summary("copy-tests", report.new_tests, report.total_tests, report.elapsed_seconds);
        print_processing_statistics(&stats);
        Ok(report)
    }

    /// Rewrites the JSON corpus, the runner stubs and the CI configuration.
    ///
    /// The library checkouts are only read when `config.include_sources` is
    /// set; otherwise the text corpus and the stored results are rewritten.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - A lookup table override or a template cannot be loaded
    /// - Stale fixtures or stubs cannot be removed
    /// - The new corpus cannot be written
    pub fn run_rewrite_tests(config: &Config) -> Result<RewriteReport> {
        let tables = init_lookup_tables(config)?;
        let stats = ProcessingStats::new();

        let sources = if config.include_sources {
            info!("init sources ...");
            SourceCollection::standard(&config.resources_dir, InputMapper::new(tables.companies))
        } else {
            SourceCollection::new()
        };

        let report = rewrite_tests(config, &sources, &tables, &stats)
            .context("rewrite-tests failed")?;

        print_run_summary(
            "rewrite-tests",
            report.new_tests,
            report.total_tests,
            report.elapsed_seconds,
        );
        print_processing_statistics(&stats);
        Ok(report)
    }
}
