//! Plain text header lists: `*.txt` files with one header string per line.

use std::path::{Path, PathBuf};

use super::{fixture_files, read_to_string, records_from_files, RawRecord, Source, SourceRecord};
use crate::error_handling::SourceError;

#[derive(Debug, Clone)]
pub struct TxtFileSource {
    name: String,
    root: PathBuf,
}

impl TxtFileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        TxtFileSource {
            name: format!("txt:{}", root.display()),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

pub(super) fn read_lines(path: &Path) -> Result<Vec<SourceRecord>, SourceError> {
    Ok(read_to_string(path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| SourceRecord::new(line, RawRecord::new()))
        .collect())
}

impl Source for TxtFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn records(&self) -> Box<dyn Iterator<Item = SourceRecord> + '_> {
        records_from_files(&self.name, fixture_files(&self.root, &["txt"]), read_lines)
    }
}
