//! Ordered aggregation of source adapters.

use std::path::Path;

use super::{
    BrowscapSource, CrawlerDetectSource, MobileDetectSource, PiwikSource, Source, SourceRecord,
    TxtFileSource, UapCoreSource, WhichBrowserSource, WootheeSource, YzalisSource,
};
use crate::config::{
    BROWSCAP_DIR, CRAWLER_DETECT_DIR, MOBILE_DETECT_DIR, PIWIK_DIR, TXT_SOURCES_DIR, UAP_CORE_DIR,
    WHICH_BROWSER_DIR, WOOTHEE_DIR, YZALIS_DIR,
};
use crate::mapper::InputMapper;

/// Adapters in registration order. Earlier adapters win duplicates.
#[derive(Default)]
pub struct SourceCollection {
    sources: Vec<Box<dyn Source>>,
}

impl SourceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The libraries below `resources`, in the order they are trusted.
    /// Plain text lists come last.
    pub fn standard(resources: &Path, input: InputMapper) -> Self {
        Self::new()
            .with(BrowscapSource::new(resources.join(BROWSCAP_DIR), input))
            .with(PiwikSource::new(resources.join(PIWIK_DIR), input))
            .with(UapCoreSource::new(resources.join(UAP_CORE_DIR), input))
            .with(WhichBrowserSource::new(resources.join(WHICH_BROWSER_DIR), input))
            .with(WootheeSource::new(resources.join(WOOTHEE_DIR), input))
            .with(MobileDetectSource::new(resources.join(MOBILE_DETECT_DIR), input))
            .with(YzalisSource::new(resources.join(YZALIS_DIR), input))
            .with(CrawlerDetectSource::new(resources.join(CRAWLER_DETECT_DIR)))
            .with(TxtFileSource::new(resources.join(TXT_SOURCES_DIR)))
    }

    pub fn with(mut self, source: impl Source + 'static) -> Self {
        self.push(Box::new(source));
        self
    }

    pub fn push(&mut self, source: Box<dyn Source>) {
        self.sources.push(source);
    }

    pub fn sources(&self) -> &[Box<dyn Source>] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Source for SourceCollection {
    fn name(&self) -> &str {
        "collection"
    }

    fn records(&self) -> Box<dyn Iterator<Item = SourceRecord> + '_> {
        Box::new(self.sources.iter().flat_map(|source| {
            log::info!("reading from source {}", source.name());
            source.records()
        }))
    }

    fn headers(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(self.sources.iter().flat_map(|source| {
            log::info!("reading from source {}", source.name());
            source.headers()
        }))
    }
}
