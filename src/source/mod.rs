//! Source adapters.
//!
//! One adapter per fixture library format. Each adapter reads its files
//! under a root directory and yields either just the header strings (for the
//! header dedup pass) or header strings paired with the library's raw result
//! record (for mapping).
//!
//! Sequences are lazy and restartable: every call re-reads the files. A
//! missing root yields nothing. Unreadable files and malformed entries are
//! logged and skipped.

mod browscap;
mod collection;
mod crawler_detect;
mod json_corpus;
mod mobile_detect;
mod piwik;
mod raw;
mod txt;
mod uap_core;
mod which_browser;
mod woothee;
mod yzalis;

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error_handling::SourceError;
use crate::mapper::FieldMapper;

pub use browscap::BrowscapSource;
pub use collection::SourceCollection;
pub use crawler_detect::CrawlerDetectSource;
pub use json_corpus::JsonCorpusSource;
pub use mobile_detect::MobileDetectSource;
pub use piwik::PiwikSource;
pub use raw::RawRecord;
pub use txt::TxtFileSource;
pub use uap_core::UapCoreSource;
pub use which_browser::WhichBrowserSource;
pub use woothee::WootheeSource;
pub use yzalis::YzalisSource;

/// One fixture: the header string it was recorded with and the library's
/// raw result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub header: String,
    pub raw: RawRecord,
}

impl SourceRecord {
    pub fn new(header: &str, raw: RawRecord) -> Self {
        SourceRecord {
            header: header.trim().to_string(),
            raw,
        }
    }
}

/// A fixture library.
pub trait Source {
    /// Name used in log messages.
    fn name(&self) -> &str;

    /// Header string and raw record for every fixture.
    fn records(&self) -> Box<dyn Iterator<Item = SourceRecord> + '_>;

    /// Header string of every fixture.
    fn headers(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(self.records().map(|record| record.header))
    }

    /// The mapper for this library's raw records. `None` means the records
    /// carry no result and are classified by the detector.
    fn mapper(&self) -> Option<&dyn FieldMapper> {
        None
    }
}

/// Files below `root` with one of `extensions`, sorted by path. A missing
/// root yields no files.
pub(crate) fn fixture_files(root: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    if !root.exists() {
        log::debug!("Source directory {} does not exist", root.display());
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry below {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    files
}

pub(crate) fn read_to_string(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn read_json(path: &Path) -> Result<Value, SourceError> {
    serde_json::from_str(&read_to_string(path)?).map_err(|source| SourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a YAML document into a JSON value so every adapter can flatten it
/// the same way.
pub(crate) fn read_yaml(path: &Path) -> Result<Value, SourceError> {
    serde_yaml::from_str(&read_to_string(path)?).map_err(|source| SourceError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Lazily reads `files` one at a time with `read`, logging and skipping files
/// that fail.
pub(crate) fn records_from_files<'a, F>(
    source: &'a str,
    files: Vec<PathBuf>,
    read: F,
) -> Box<dyn Iterator<Item = SourceRecord> + 'a>
where
    F: Fn(&Path) -> Result<Vec<SourceRecord>, SourceError> + 'a,
{
    Box::new(files.into_iter().flat_map(move |path| {
        log::debug!("{}: reading {}", source, path.display());
        read(&path).unwrap_or_else(|e| {
            log::warn!("{}: skipping file: {}", source, e);
            Vec::new()
        })
    }))
}

/// The entries of a file that must hold a top-level list.
pub(crate) fn list_entries(path: &Path, value: Value) -> Result<Vec<Value>, SourceError> {
    match value {
        Value::Array(entries) => Ok(entries),
        Value::Null => Ok(Vec::new()),
        other => Err(SourceError::MalformedEntry {
            path: path.to_path_buf(),
            reason: format!("expected a list of fixtures, found {}", json_kind(&other)),
        }),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Logs a malformed entry.
pub(crate) fn skip_entry(source: &str, path: &Path, reason: &str) {
    let err = SourceError::MalformedEntry {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };
    log::warn!("{}: {}", source, err);
}
