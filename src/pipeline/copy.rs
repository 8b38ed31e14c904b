//! The text-only run.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use super::{offer_sources, seed_from_txt_corpus};
use crate::app::{log_progress, log_stage, Stage};
use crate::corpus::{remove_fixture_files, write_txt_corpus};
use crate::dedup::HeaderPool;
use crate::error_handling::ProcessingStats;
use crate::source::SourceCollection;

/// Outcome of a copy run.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyReport {
    /// Header strings the sources added.
    pub new_tests: usize,
    /// Unique header strings in the corpus afterwards.
    pub total_tests: usize,
    /// Text files written.
    pub files: usize,
    pub elapsed_seconds: f64,
}

/// Merges the sources' header strings into the text corpus at
/// `txt_corpus_dir`.
///
/// Existing headers keep their position; new ones are appended in source
/// order. The old text files are replaced.
///
/// # Errors
///
/// Fails when the old corpus files cannot be removed or the new ones cannot
/// be written.
pub fn copy_tests(
    txt_corpus_dir: &Path,
    sources: &SourceCollection,
    stats: &ProcessingStats,
) -> Result<CopyReport> {
    let start_time = Instant::now();
    let mut pool = HeaderPool::new();

    seed_from_txt_corpus(&mut pool, txt_corpus_dir, stats);
    let existing = pool.len();
    log::info!("{} tests already in the corpus", existing);

    log_stage(Stage::Writing, "remove tests");
    remove_fixture_files(txt_corpus_dir, Some("txt"))
        .context(format!("Failed to clean {}", txt_corpus_dir.display()))?;

    let dedup_start = Instant::now();
    let new_tests = offer_sources(&mut pool, sources, stats);
    log_progress(Stage::Deduping, dedup_start, new_tests);

    log_stage(Stage::Writing, "rewrite tests");
    let headers: Vec<&str> = pool.headers().collect();
    let files = write_txt_corpus(&headers, txt_corpus_dir)
        .context(format!("Failed to write text corpus to {}", txt_corpus_dir.display()))?;

    Ok(CopyReport {
        new_tests,
        total_tests: pool.len(),
        files,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}
