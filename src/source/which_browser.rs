//! WhichBrowser test fixtures: `*.yaml` files holding a list of
//! `{ headers, result: { browser, engine, os, device } }`.
//!
//! `headers` is either a single `Name: value` line or a map of headers.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{
    fixture_files, list_entries, read_yaml, records_from_files, skip_entry, RawRecord, Source,
    SourceRecord,
};
use crate::error_handling::SourceError;
use crate::mapper::{FieldMapper, InputMapper, WhichBrowserMapper};
use crate::model::Headers;

const SOURCE_NAME: &str = "whichbrowser";

#[derive(Debug, Clone)]
pub struct WhichBrowserSource {
    root: PathBuf,
    mapper: WhichBrowserMapper,
}

impl WhichBrowserSource {
    pub fn new(root: impl Into<PathBuf>, input: InputMapper) -> Self {
        WhichBrowserSource {
            root: root.into(),
            mapper: WhichBrowserMapper::new(input),
        }
    }
}

/// Parses the `headers` field into request headers.
fn parse_headers(value: &Value) -> Option<Headers> {
    let mut headers = Headers::new();
    match value {
        Value::String(line) => {
            let (name, value) = line.split_once(':')?;
            headers.insert(name, value);
        }
        Value::Object(map) => {
            for (name, value) in map {
                if let Some(value) = value.as_str() {
                    headers.insert(name, value);
                }
            }
        }
        _ => return None,
    }
    (!headers.user_agent().is_empty()).then_some(headers)
}

fn read_fixtures(path: &Path) -> Result<Vec<SourceRecord>, SourceError> {
    let entries = list_entries(path, read_yaml(path)?)?;
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(headers) = entry.get("headers").and_then(parse_headers) else {
            skip_entry(SOURCE_NAME, path, &format!("entry {} has no user-agent header", index));
            continue;
        };
        let raw = entry
            .get("result")
            .map(RawRecord::from_value)
            .unwrap_or_default();
        records.push(SourceRecord::new(&headers.header_string(), raw));
    }
    Ok(records)
}

impl Source for WhichBrowserSource {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_header_forms() {
        let single = parse_headers(&json!("User-Agent: Mozilla/5.0 (X11)")).unwrap();
        assert_eq!(single.header_string(), "Mozilla/5.0 (X11)");

        let multi = parse_headers(&json!({
            "User-Agent": "Mozilla/5.0 (Linux; Android 9)",
            "X-Requested-With": "com.example"
        }))
        .unwrap();
        assert_eq!(multi.len(), 2);
        assert!(multi.header_string().starts_with('{'));

        assert!(parse_headers(&json!({"Accept": "*/*"})).is_none());
        assert!(parse_headers(&json!(42)).is_none());
    }

    #[test]
    fn test_reads_fixture_list() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("android.yaml"),
            "- headers: 'User-Agent: UA-1'\n  result: { browser: { name: Chrome, version: '90.0' }, device: { type: mobile, subtype: smart } }\n- result: { browser: { name: Nothing } }\n- headers: 'User-Agent: UA-2'\n",
        )
        .unwrap();

        let source = WhichBrowserSource::new(dir.path(), InputMapper::default());
        let records: Vec<_> = source.records().collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header, "UA-1");
        assert_eq!(records[0].raw.get("browser.name"), Some("Chrome"));
        assert_eq!(records[1].header, "UA-2");
    }
}
