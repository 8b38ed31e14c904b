//! yzalis/ua-parser fixtures: `*.yml` files holding a list of
//! `{ user_agent, browser, rendering_engine, operating_system, device }`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{
    fixture_files, list_entries, read_yaml, records_from_files, skip_entry, RawRecord, Source,
    SourceRecord,
};
use crate::error_handling::SourceError;
use crate::mapper::{FieldMapper, InputMapper, YzalisMapper};

const SOURCE_NAME: &str = "yzalis";

#[derive(Debug, Clone)]
pub struct YzalisSource {
    root: PathBuf,
    mapper: YzalisMapper,
}

impl YzalisSource {
    pub fn new(root: impl Into<PathBuf>, input: InputMapper) -> Self {
        YzalisSource {
            root: root.into(),
            mapper: YzalisMapper::new(input),
        }
    }
}

fn read_fixtures(path: &Path) -> Result<Vec<SourceRecord>, SourceError> {
    let entries = list_entries(path, read_yaml(path)?)?;
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry.get("user_agent").and_then(Value::as_str) {
            Some(ua) if !ua.trim().is_empty() => {
                records.push(SourceRecord::new(ua, RawRecord::from_value(entry)));
            }
            _ => skip_entry(SOURCE_NAME, path, &format!("entry {} has no user_agent", index)),
        }
    }
    Ok(records)
}

impl Source for YzalisSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn records(&self) -> Box<dyn Iterator<Item = SourceRecord> + '_> {
        records_from_files(
            SOURCE_NAME,
            fixture_files(&self.root, &["yml", "yaml"]),
            read_fixtures,
        )
    }

    fn mapper(&self) -> Option<&dyn FieldMapper> {
        Some(&self.mapper)
    }
}
