//! The two corpus runs.
//!
//! - [`copy_tests`]: text-only. Merges new header strings from the sources
//!   into the text corpus.
//! - [`rewrite_tests`]: full. Maps every header to a canonical result,
//!   dedups by signature, resolves generic devices and rewrites the JSON
//!   corpus, runner stubs and CI configuration.
//!
//! Both runs are single-threaded and scoped: dedup state lives for one run.

mod copy;
mod rewrite;

use std::path::Path;

use crate::app::{log_stage, Stage};
use crate::dedup::HeaderPool;
use crate::error_handling::{InfoType, ProcessingStats};
use crate::source::{Source, SourceCollection, TxtFileSource};

pub use copy::{copy_tests, CopyReport};
pub use rewrite::{rewrite_tests, rewrite_with_detector, RewriteReport};

/// Seeds a fresh pool with the header strings of the text corpus.
pub(crate) fn seed_from_txt_corpus(
    pool: &mut HeaderPool,
    txt_corpus_dir: &Path,
    stats: &ProcessingStats,
) {
    log_stage(Stage::Reading, "already existing tests");
    let corpus = TxtFileSource::new(txt_corpus_dir);
    seed_pool(pool, corpus.headers(), stats);
}

/// Adds existing-corpus headers to the pool. Repeats are logged by the pool
/// and counted here.
pub(crate) fn seed_pool(
    pool: &mut HeaderPool,
    headers: impl Iterator<Item = String>,
    stats: &ProcessingStats,
) {
    for header in headers {
        if !pool.seed(&header) {
            stats.increment_info(InfoType::DuplicateHeader);
        }
    }
}

/// Offers every source's headers to the pool in registration order. Returns
/// how many were new.
pub(crate) fn offer_sources(
    pool: &mut HeaderPool,
    sources: &SourceCollection,
    stats: &ProcessingStats,
) -> usize {
    log_stage(Stage::Deduping, "headers from sources");
    let mut added = 0;
    for (index, source) in sources.sources().iter().enumerate() {
        log::info!("reading from source {}", source.name());
        for header in source.headers() {
            if pool.offer(&header, index) {
                added += 1;
            } else if !header.trim().is_empty() {
                stats.increment_info(InfoType::DuplicateHeader);
            }
        }
    }
    added
}
