//! Browscap test fixtures: `*.json` files holding
//! `{ "<test name>": { "ua": "...", "properties": { ... } } }`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{
    fixture_files, json_kind, read_json, records_from_files, skip_entry, RawRecord, Source,
    SourceRecord,
};
use crate::error_handling::SourceError;
use crate::mapper::{BrowscapMapper, FieldMapper, InputMapper};

const SOURCE_NAME: &str = "browscap";

#[derive(Debug, Clone)]
pub struct BrowscapSource {
    root: PathBuf,
    mapper: BrowscapMapper,
}

impl BrowscapSource {
    pub fn new(root: impl Into<PathBuf>, input: InputMapper) -> Self {
        BrowscapSource {
            root: root.into(),
            mapper: BrowscapMapper::new(input),
        }
    }
}

fn read_tests(path: &Path) -> Result<Vec<SourceRecord>, SourceError> {
    let tests = match read_json(path)? {
        Value::Object(tests) => tests,
        other => {
            return Err(SourceError::MalformedEntry {
                path: path.to_path_buf(),
                reason: format!("expected an object of tests, found {}", json_kind(&other)),
            })
        }
    };

    let mut records = Vec::with_capacity(tests.len());
    for (name, test) in &tests {
        let Some(ua) = test.get("ua").and_then(Value::as_str) else {
            skip_entry(SOURCE_NAME, path, &format!("test \"{}\" has no ua", name));
            continue;
        };
        let raw = test
            .get("properties")
            .map(RawRecord::from_value)
            .unwrap_or_default();
        records.push(SourceRecord::new(ua, raw));
    }
    Ok(records)
}

impl Source for BrowscapSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn records(&self) -> Box<dyn Iterator<Item = SourceRecord> + '_> {
        records_from_files(SOURCE_NAME, fixture_files(&self.root, &["json"]), read_tests)
    }

    fn mapper(&self) -> Option<&dyn FieldMapper> {
        Some(&self.mapper)
    }
}
