//! Woothee test fixtures: `*.yaml` files holding a list of
//! `{ target, name, category, os, version, os_version, vendor }`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{
    fixture_files, list_entries, read_yaml, records_from_files, skip_entry, RawRecord, Source,
    SourceRecord,
};
use crate::error_handling::SourceError;
use crate::mapper::{FieldMapper, InputMapper, WootheeMapper};

const SOURCE_NAME: &str = "woothee";

#[derive(Debug, Clone)]
pub struct WootheeSource {
    root: PathBuf,
    mapper: WootheeMapper,
}

impl WootheeSource {
    pub fn new(root: impl Into<PathBuf>, input: InputMapper) -> Self {
        WootheeSource {
            root: root.into(),
            mapper: WootheeMapper::new(input),
        }
    }
}

fn read_fixtures(path: &Path) -> Result<Vec<SourceRecord>, SourceError> {
    let entries = list_entries(path, read_yaml(path)?)?;
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry.get("target").and_then(Value::as_str) {
            Some(target) if !target.trim().is_empty() => {
                records.push(SourceRecord::new(target, RawRecord::from_value(entry)));
            }
            _ => skip_entry(SOURCE_NAME, path, &format!("entry {} has no target", index)),
        }
    }
    Ok(records)
}

impl Source for WootheeSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn records(&self) -> Box<dyn Iterator<Item = SourceRecord> + '_> {
        records_from_files(
            SOURCE_NAME,
            fixture_files(&self.root, &["yaml", "yml"]),
            read_fixtures,
        )
    }

    fn mapper(&self) -> Option<&dyn FieldMapper> {
        Some(&self.mapper)
    }
}
