//! The crate's own JSON fixture corpus, read back.
//!
//! Layout: `<root>/<folder>/<batch>.json`, each file an object of
//! `test name → canonical result`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{
    fixture_files, json_kind, read_json, records_from_files, skip_entry, RawRecord, Source,
    SourceRecord,
};
use crate::error_handling::SourceError;
use crate::model::{CanonicalResult, Headers};

const SOURCE_NAME: &str = "json corpus";

#[derive(Debug, Clone)]
pub struct JsonCorpusSource {
    root: PathBuf,
}

impl JsonCorpusSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        JsonCorpusSource { root: root.into() }
    }

    /// Every stored result, in corpus order. Entries that do not deserialize
    /// are skipped.
    pub fn results(&self) -> impl Iterator<Item = CanonicalResult> + '_ {
        fixture_files(&self.root, &["json"])
            .into_iter()
            .flat_map(|path| match read_entries(&path) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("{}: skipping file: {}", SOURCE_NAME, e);
                    Vec::new()
                }
            })
            .filter_map(|(path, name, value)| {
                serde_json::from_value::<CanonicalResult>(value)
                    .map_err(|e| skip_entry(SOURCE_NAME, &path, &format!("test \"{}\": {}", name, e)))
                    .ok()
            })
    }
}

fn read_entries(path: &Path) -> Result<Vec<(PathBuf, String, Value)>, SourceError> {
    match read_json(path)? {
        Value::Object(tests) => Ok(tests
            .into_iter()
            .map(|(name, value)| (path.to_path_buf(), name, value))
            .collect()),
        other => Err(SourceError::MalformedEntry {
            path: path.to_path_buf(),
            reason: format!("expected an object of tests, found {}", json_kind(&other)),
        }),
    }
}

fn read_tests(path: &Path) -> Result<Vec<SourceRecord>, SourceError> {
    let mut records = Vec::new();
    for (path, name, value) in read_entries(path)? {
        let headers = value
            .get("headers")
            .and_then(|h| serde_json::from_value::<Headers>(h.clone()).ok())
            .filter(|h| !h.user_agent().is_empty());
        match headers {
            Some(headers) => {
                records.push(SourceRecord::new(&headers.header_string(), RawRecord::from_value(&value)))
            }
            None => skip_entry(SOURCE_NAME, &path, &format!("test \"{}\" has no user-agent", name)),
        }
    }
    Ok(records)
}

impl Source for JsonCorpusSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn records(&self) -> Box<dyn Iterator<Item = SourceRecord> + '_> {
        records_from_files(SOURCE_NAME, fixture_files(&self.root, &["json"]), read_tests)
    }
}
