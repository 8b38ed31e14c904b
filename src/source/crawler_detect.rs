//! Crawler-Detect test lists: `crawlers.txt` and `devices.txt`, one user
//! agent per line. The lists carry no result, so the detector classifies
//! them.

use std::path::PathBuf;

use super::{fixture_files, records_from_files, txt::read_lines, Source, SourceRecord};

const SOURCE_NAME: &str = "crawler-detect";

/// The lists read, in order.
const LIST_FILES: &[&str] = &["crawlers.txt", "devices.txt"];

#[derive(Debug, Clone)]
pub struct CrawlerDetectSource {
    root: PathBuf,
}

impl CrawlerDetectSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CrawlerDetectSource { root: root.into() }
    }

    fn list_files(&self) -> Vec<PathBuf> {
        let files = fixture_files(&self.root, &["txt"]);
        LIST_FILES
            .iter()
            .flat_map(|list| {
                files
                    .iter()
                    .filter(move |path| path.file_name().is_some_and(|name| name == *list))
                    .cloned()
            })
            .collect()
    }
}

impl Source for CrawlerDetectSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn records(&self) -> Box<dyn Iterator<Item = SourceRecord> + '_> {
        records_from_files(SOURCE_NAME, self.list_files(), read_lines)
    }
}
