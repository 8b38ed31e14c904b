//! Raw source records.

use indexmap::IndexMap;
use serde_json::Value;

/// A library's native fixture result, flattened to lower-cased, dot-joined
/// keys (`result.browser.name`, `platform_version`, `device.0`) and string
/// values. `null` values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: IndexMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens a JSON (or YAML read as JSON) value.
    pub fn from_value(value: &Value) -> Self {
        let mut record = Self::new();
        record.merge_value("", value);
        record
    }

    /// Flattens `value` below `prefix` into this record; existing keys are
    /// overwritten.
    pub fn merge_value(&mut self, prefix: &str, value: &Value) {
        match value {
            Value::Null => {}
            Value::Bool(b) => self.insert(prefix, if *b { "true" } else { "false" }),
            Value::Number(n) => self.insert(prefix, &n.to_string()),
            Value::String(s) => self.insert(prefix, s),
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.merge_value(&join(prefix, &index.to_string()), item);
                }
            }
            Value::Object(map) => {
                for (key, item) in map {
                    self.merge_value(&join(prefix, key), item);
                }
            }
        }
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_lowercase(), value.to_string());
    }

    /// The raw value, `None` when the field was absent or `null`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The raw value, `""` when absent.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Keeps only the fields below `prefix`, with the prefix removed.
    pub fn subrecord(&self, prefix: &str) -> RawRecord {
        let start = format!("{}.", prefix.to_lowercase());
        RawRecord {
            fields: self
                .fields
                .iter()
                .filter_map(|(k, v)| k.strip_prefix(&start).map(|rest| (rest.to_string(), v.clone())))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
