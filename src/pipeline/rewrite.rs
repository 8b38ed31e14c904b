//! The full run: map, dedup, resolve and rewrite the JSON corpus.

use std::collections::HashMap;
use std::time::Instant;

use anyhow::{Context, Result};

use super::{offer_sources, seed_from_txt_corpus};
use crate::app::{log_progress, log_stage, Stage};
use crate::config::{Config, STUB_FIXTURE_PREFIX};
use crate::corpus::{
    remove_fixture_files, write_ci_config, write_json_corpus, write_runner_stubs, RunnerTemplates,
};
use crate::dedup::{Admission, HeaderPool, Origin, SignatureSet};
use crate::detector::{Detector, FixtureDetector};
use crate::error_handling::{InfoType, ProcessingStats, WarningType};
use crate::fallback::FallbackResolver;
use crate::initialization::LookupTables;
use crate::model::CanonicalResult;
use crate::source::{JsonCorpusSource, RawRecord, Source, SourceCollection};

/// Outcome of a rewrite run.
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteReport {
    /// Retained results that came from a source rather than the corpus.
    pub new_tests: usize,
    /// Retained results written to the corpus.
    pub total_tests: usize,
    /// Corpus folders (and runner stubs) written.
    pub folders: usize,
    /// JSON fixture files written.
    pub files: usize,
    pub elapsed_seconds: f64,
}

/// Rewrites the JSON corpus using the results it already stores as the
/// detector.
///
/// The stored results are read before anything is deleted. Headers come from
/// the text corpus, then from the stored results, then from `sources`.
///
/// # Errors
///
/// Fails when a template cannot be read or the corpus cannot be replaced.
pub fn rewrite_tests(
    config: &Config,
    sources: &SourceCollection,
    tables: &LookupTables,
    stats: &ProcessingStats,
) -> Result<RewriteReport> {
    let stored = JsonCorpusSource::new(&config.fixture_dir);
    let detector = FixtureDetector::from_corpus(&stored);
    rewrite_with_detector(config, sources, &detector, tables, stats)
}

/// [`rewrite_tests`] with an explicit detector.
pub fn rewrite_with_detector(
    config: &Config,
    sources: &SourceCollection,
    detector: &dyn Detector,
    tables: &LookupTables,
    stats: &ProcessingStats,
) -> Result<RewriteReport> {
    let start_time = Instant::now();

    let templates = RunnerTemplates::load(&config.runner_template, &config.ci_template)
        .context("Failed to load runner templates")?;

    let mut pool = HeaderPool::new();
    seed_from_txt_corpus(&mut pool, &config.txt_corpus_dir, stats);
    let stored = JsonCorpusSource::new(&config.fixture_dir);
    for header in stored.headers() {
        if !pool.contains(&header) {
            pool.seed(&header);
        }
    }
    offer_sources(&mut pool, sources, stats);
    log::info!("{} unique headers to rewrite", pool.len());

    let mapping_start = Instant::now();
    let (origins, retained): (Vec<Origin>, Vec<CanonicalResult>) =
        map_pool(&pool, sources, detector, tables, stats)
            .into_iter()
            .unzip();
    log_progress(Stage::Mapping, mapping_start, pool.len());

    log_stage(Stage::Writing, "remove old test files");
    remove_fixture_files(&config.fixture_dir, None)
        .context(format!("Failed to clean {}", config.fixture_dir.display()))?;
    remove_fixture_files(&config.runner_dir, None)
        .context(format!("Failed to clean {}", config.runner_dir.display()))?;

    log_stage(Stage::Writing, "tests and CI configuration");
    let layout = write_json_corpus(&retained, &config.fixture_dir).context(format!(
        "Failed to write fixtures to {}",
        config.fixture_dir.display()
    ))?;
    write_runner_stubs(
        &templates,
        &layout.folder_sizes,
        &config.runner_dir,
        STUB_FIXTURE_PREFIX,
    )
    .context(format!(
        "Failed to write runner stubs to {}",
        config.runner_dir.display()
    ))?;
    write_ci_config(&templates, &layout.folder_sizes, &config.ci_config).context(format!(
        "Failed to write CI configuration to {}",
        config.ci_config.display()
    ))?;

    Ok(RewriteReport {
        new_tests: origins
            .iter()
            .filter(|origin| matches!(origin, Origin::Source(_)))
            .count(),
        total_tests: retained.len(),
        folders: layout.folders(),
        files: layout.files,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}

/// First record per pool header for every source that has a mapper and
/// contributed headers.
fn source_records(
    pool: &HeaderPool,
    sources: &SourceCollection,
) -> HashMap<usize, HashMap<String, RawRecord>> {
    let mut by_source = HashMap::new();
    for (index, source) in sources.sources().iter().enumerate() {
        if source.mapper().is_none() {
            continue;
        }
        let mut records: HashMap<String, RawRecord> = HashMap::new();
        for record in source.records() {
            if pool.origin(&record.header) == Some(Origin::Source(index)) {
                records.entry(record.header).or_insert(record.raw);
            }
        }
        if !records.is_empty() {
            by_source.insert(index, records);
        }
    }
    by_source
}

/// Maps every pool header in pool order, rewrites generic devices and keeps
/// the results whose signature is new.
fn map_pool(
    pool: &HeaderPool,
    sources: &SourceCollection,
    detector: &dyn Detector,
    tables: &LookupTables,
    stats: &ProcessingStats,
) -> Vec<(Origin, CanonicalResult)> {
    log_stage(Stage::Mapping, "headers");
    let records = source_records(pool, sources);
    let resolver = FallbackResolver::new(tables.regexes, tables.devices.as_ref(), stats);
    let mut signatures = SignatureSet::new();
    let mut retained = Vec::new();

    for (header, origin) in pool.iter() {
        let mapped = match origin {
            Origin::Source(index) => sources.sources().get(index).and_then(|source| {
                let mapper = source.mapper()?;
                let raw = records.get(&index)?.get(header)?;
                Some(mapper.map(raw, header))
            }),
            Origin::Corpus => None,
        };
        let result = match mapped {
            Some(result) => result,
            None => {
                if !detector.knows(header) {
                    stats.increment_warning(WarningType::DetectorMiss);
                }
                detector.parse(header)
            }
        };

        let user_agent = result.headers.user_agent().to_string();
        let device = resolver.rewrite_device(result.device.clone(), &user_agent);
        let result = result.with_device(device);

        // Keyed on the stored result; a rerun reads exactly that back.
        if let Admission::Duplicate { key, .. } = signatures.admit(&result) {
            log::info!(
                "UA \"{}\" was skipped because a similar UA was already added ({})",
                header,
                key
            );
            stats.increment_info(InfoType::DuplicateSignature);
            continue;
        }
        retained.push((origin, result));
    }

    retained
}
