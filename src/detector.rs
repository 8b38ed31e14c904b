//! Detection-engine interface.
//!
//! The pipeline classifies corpus headers and headers from sources without a
//! mapper through a [`Detector`]. The shipped implementation answers from
//! results stored in an earlier JSON corpus.

use std::collections::HashMap;

use crate::model::{CanonicalResult, Headers};
use crate::source::JsonCorpusSource;

/// Classifies a header string. Total: unknown input yields unknown fields.
pub trait Detector {
    fn parse(&self, header: &str) -> CanonicalResult;

    /// True when `parse` has a real answer for `header`.
    fn knows(&self, _header: &str) -> bool {
        true
    }
}

/// Detector backed by stored fixture results, keyed by header string.
#[derive(Debug, Clone, Default)]
pub struct FixtureDetector {
    results: HashMap<String, CanonicalResult>,
}

impl FixtureDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every stored result of `corpus`. Must run before the corpus is
    /// cleaned up.
    pub fn from_corpus(corpus: &JsonCorpusSource) -> Self {
        let mut detector = Self::new();
        for result in corpus.results() {
            detector.insert(result);
        }
        log::info!("Loaded {} stored results", detector.len());
        detector
    }

    /// Registers a result under its header string; the first one wins.
    pub fn insert(&mut self, result: CanonicalResult) -> bool {
        let header = result.header_string();
        if header.is_empty() || self.results.contains_key(&header) {
            return false;
        }
        self.results.insert(header, result);
        true
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl Detector for FixtureDetector {
    fn parse(&self, header: &str) -> CanonicalResult {
        let header = header.trim();
        match self.results.get(header) {
            Some(result) => result.clone(),
            None => {
                log::debug!("No stored result for \"{}\"", header);
                CanonicalResult::unknown(Headers::from_header_string(header))
            }
        }
    }

    fn knows(&self, header: &str) -> bool {
        self.results.contains_key(header.trim())
    }
}
