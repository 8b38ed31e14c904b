//! ua-parser (uap-core) test fixtures.
//!
//! uap-core splits its expectations over three files, each a `test_cases`
//! list keyed by `user_agent_string`:
//!
//! - `test_ua.yaml`: browser family and version
//! - `test_os.yaml`: OS family and version
//! - `test_device.yaml`: device family, brand and model
//!
//! The source merges them per user agent into one record with `ua.*`,
//! `os.*` and `device.*` fields, in order of first appearance.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

use super::{fixture_files, read_yaml, skip_entry, RawRecord, Source, SourceRecord};
use crate::error_handling::SourceError;
use crate::mapper::{FieldMapper, InputMapper, UapCoreMapper};

const SOURCE_NAME: &str = "uap-core";
const USER_AGENT_KEY: &str = "user_agent_string";

/// Test file name → field prefix in the merged record.
const TEST_FILES: &[(&str, &str)] = &[
    ("test_ua.yaml", "ua"),
    ("test_os.yaml", "os"),
    ("test_device.yaml", "device"),
];

#[derive(Debug, Clone)]
pub struct UapCoreSource {
    root: PathBuf,
    mapper: UapCoreMapper,
}

impl UapCoreSource {
    pub fn new(root: impl Into<PathBuf>, input: InputMapper) -> Self {
        UapCoreSource {
            root: root.into(),
            mapper: UapCoreMapper::new(input),
        }
    }

    fn merged(&self) -> IndexMap<String, RawRecord> {
        let mut merged: IndexMap<String, RawRecord> = IndexMap::new();
        for path in fixture_files(&self.root, &["yaml"]) {
            let Some(prefix) = prefix_for(&path) else {
                continue;
            };
            if let Err(e) = merge_file(&path, prefix, &mut merged) {
                log::warn!("{}: skipping file: {}", SOURCE_NAME, e);
            }
        }
        merged
    }
}

fn prefix_for(path: &Path) -> Option<&'static str> {
    let file_name = path.file_name()?.to_str()?;
    TEST_FILES
        .iter()
        .find(|(name, _)| *name == file_name)
        .map(|(_, prefix)| *prefix)
}

fn merge_file(
    path: &Path,
    prefix: &str,
    merged: &mut IndexMap<String, RawRecord>,
) -> Result<(), SourceError> {
    let document = read_yaml(path)?;
    let Some(cases) = document.get("test_cases").and_then(Value::as_array) else {
        return Err(SourceError::MalformedEntry {
            path: path.to_path_buf(),
            reason: "no test_cases list".to_string(),
        });
    };

    for case in cases {
        let Some(ua) = case.get(USER_AGENT_KEY).and_then(Value::as_str) else {
            skip_entry(SOURCE_NAME, path, "test case without user_agent_string");
            continue;
        };
        let Value::Object(fields) = case else {
            continue;
        };
        let record = merged.entry(ua.trim().to_string()).or_default();
        for (key, value) in fields {
            if key != USER_AGENT_KEY {
                record.merge_value(&format!("{}.{}", prefix, key), value);
            }
        }
    }
    Ok(())
}

impl Source for UapCoreSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn records(&self) -> Box<dyn Iterator<Item = SourceRecord> + '_> {
        Box::new(
            self.merged()
                .into_iter()
                .map(|(ua, raw)| SourceRecord::new(&ua, raw)),
        )
    }

    fn headers(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(self.merged().into_keys())
    }

    fn mapper(&self) -> Option<&dyn FieldMapper> {
        Some(&self.mapper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_merges_three_files_per_user_agent() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("tests")).unwrap();
        fs::write(
            dir.path().join("tests/test_ua.yaml"),
            "test_cases:\n  - user_agent_string: 'UA-1'\n    family: 'Chrome'\n    major: '90'\n    minor: '0'\n    patch: null\n  - user_agent_string: 'UA-2'\n    family: 'Firefox'\n    major: '88'\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("tests/test_os.yaml"),
            "test_cases:\n  - user_agent_string: 'UA-1'\n    family: 'Windows'\n    major: '10'\n  - family: 'orphan'\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("tests/test_device.yaml"),
            "test_cases:\n  - user_agent_string: 'UA-3'\n    family: 'iPhone'\n    brand: 'Apple'\n    model: 'iPhone'\n",
        )
        .unwrap();
        fs::write(dir.path().join("tests/other.yaml"), "test_cases: []\n").unwrap();

        let source = UapCoreSource::new(dir.path(), InputMapper::default());
        let headers: Vec<String> = source.headers().collect();
        // test_device.yaml sorts before test_os.yaml and test_ua.yaml
        assert_eq!(headers, vec!["UA-3", "UA-1", "UA-2"]);

        let records: Vec<_> = source.records().collect();
        let ua1 = &records[1];
        assert_eq!(ua1.raw.get("ua.family"), Some("Chrome"));
        assert_eq!(ua1.raw.get("os.family"), Some("Windows"));
        assert_eq!(ua1.raw.get("ua.patch"), None);
        assert!(!ua1.raw.contains("ua.user_agent_string"));
    }
}
