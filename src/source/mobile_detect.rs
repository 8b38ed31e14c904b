//! MobileDetect test lists: `*.json` files holding
//! `{ user_agents: [{ vendor, user_agent, mobile, tablet, version, model }] }`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{
    fixture_files, json_kind, list_entries, read_json, records_from_files, skip_entry, RawRecord,
    Source, SourceRecord,
};
use crate::error_handling::SourceError;
use crate::mapper::{FieldMapper, InputMapper, MobileDetectMapper};

const SOURCE_NAME: &str = "mobiledetect";

#[derive(Debug, Clone)]
pub struct MobileDetectSource {
    root: PathBuf,
    mapper: MobileDetectMapper,
}

impl MobileDetectSource {
    pub fn new(root: impl Into<PathBuf>, input: InputMapper) -> Self {
        MobileDetectSource {
            root: root.into(),
            mapper: MobileDetectMapper::new(input),
        }
    }
}

fn read_fixtures(path: &Path) -> Result<Vec<SourceRecord>, SourceError> {
    let list = match read_json(path)? {
        Value::Object(mut map) => match map.remove("user_agents") {
            Some(list) => list,
            None => {
                return Err(SourceError::MalformedEntry {
                    path: path.to_path_buf(),
                    reason: "expected a user_agents list".to_string(),
                })
            }
        },
        other @ (Value::Array(_) | Value::Null) => other,
        other => {
            return Err(SourceError::MalformedEntry {
                path: path.to_path_buf(),
                reason: format!("expected a user_agents list, found {}", json_kind(&other)),
            })
        }
    };

    let entries = list_entries(path, list)?;
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

impl Source for MobileDetectSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn records(&self) -> Box<dyn Iterator<Item = SourceRecord> + '_> {
        records_from_files(SOURCE_NAME, fixture_files(&self.root, &["json"]), read_fixtures)
    }

    fn mapper(&self) -> Option<&dyn FieldMapper> {
        Some(&self.mapper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeviceType;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_ua_list() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("UA_List.json"),
            r#"{"user_agents": [
                {"vendor": "Apple", "user_agent": "Mozilla/5.0 (iPad; CPU OS 7_0 like Mac OS X)", "mobile": true, "tablet": true, "model": "iPad"},
                {"vendor": "Apple", "mobile": true}
            ]}"#,
        )
        .unwrap();
        fs::write(dir.path().join("broken.json"), r#"{"hello": 1}"#).unwrap();

        let source = MobileDetectSource::new(dir.path(), InputMapper::default());
        let records: Vec<_> = source.records().collect();
        assert_eq!(records.len(), 1);

        let result = source.mapper().unwrap().map(&records[0].raw, &records[0].header);
        assert_eq!(result.device.device_type, DeviceType::Tablet);
        assert_eq!(result.device.manufacturer.key, "Apple");
    }
}
