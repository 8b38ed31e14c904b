//! Company lookup table.
//!
//! Loaded once per process (embedded default or an override file) and shared
//! read-only afterwards.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error_handling::{ConfigError, LookupError};
use crate::model::Company;

const EMBEDDED_COMPANIES: &str = include_str!("../../data/companies.json");

static COMPANIES: OnceLock<CompanyTable> = OnceLock::new();

/// Resolves company keys to company records.
pub trait CompanyLoader {
    fn load(&self, key: &str) -> Result<Arc<Company>, LookupError>;
}

#[derive(Debug, Deserialize)]
struct CompanyRecord {
    name: Option<String>,
    #[serde(rename = "brandname", default)]
    brand_name: Option<String>,
}

/// Key → company records, plus a case-insensitive index of keys, names and
/// brand names back to keys.
#[derive(Debug, Default)]
pub struct CompanyTable {
    companies: HashMap<String, Arc<Company>>,
    aliases: HashMap<String, String>,
}

impl CompanyTable {
    pub fn from_json_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let records: IndexMap<String, CompanyRecord> =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse {
                origin: origin.to_string(),
                reason: e.to_string(),
            })?;

        let mut table = CompanyTable::default();
        for (key, record) in records {
            table.insert(Company {
                key,
                name: record.name,
                brand_name: record.brand_name,
            });
        }
        Ok(table)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content, &path.display().to_string())
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json_str(EMBEDDED_COMPANIES, "embedded company table")
    }

    pub fn insert(&mut self, company: Company) {
        let key = company.key.clone();
        for alias in [Some(&company.key), company.name.as_ref(), company.brand_name.as_ref()]
            .into_iter()
            .flatten()
        {
            self.aliases
                .entry(alias.to_lowercase())
                .or_insert_with(|| key.clone());
        }
        self.companies.insert(key, Arc::new(company));
    }

    /// Finds the key of the company whose key, name or brand name equals
    /// `name`, ignoring case.
    pub fn find_key(&self, name: &str) -> Option<&str> {
        self.aliases
            .get(&name.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

impl CompanyLoader for CompanyTable {
    fn load(&self, key: &str) -> Result<Arc<Company>, LookupError> {
        self.companies
            .get(key)
            .or_else(|| self.find_key(key).and_then(|k| self.companies.get(k)))
            .cloned()
            .ok_or_else(|| LookupError::company(key))
    }
}

/// Loads the process-wide company table. Later calls return the table that
/// was loaded first.
///
/// # Errors
///
/// Returns `ConfigError` when the override file cannot be read or parsed.
pub fn init_companies(path: Option<&Path>) -> Result<&'static CompanyTable, ConfigError> {
    if let Some(table) = COMPANIES.get() {
        if path.is_some() {
            log::debug!("Company table already loaded; ignoring override");
        }
        return Ok(table);
    }
    let table = match path {
        Some(path) => CompanyTable::from_path(path)?,
        None => CompanyTable::embedded()?,
    };
    Ok(COMPANIES.get_or_init(|| table))
}

/// The process-wide company table, loading the embedded one on first use.
pub fn companies() -> &'static CompanyTable {
    COMPANIES.get_or_init(|| {
        CompanyTable::embedded().unwrap_or_else(|e| {
            log::error!("Embedded company table is unusable: {}", e);
            CompanyTable::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Google": {"name": "Google Inc", "brandname": "Google"},
        "Samsung": {"name": "Samsung Electronics Co., Ltd.", "brandname": "Samsung"},
        "Rim": {"name": "Research In Motion Limited", "brandname": "BlackBerry"}
    }"#;

    #[test]
    fn test_load_by_key() {
        let table = CompanyTable::from_json_str(SAMPLE, "sample").unwrap();
        let google = table.load("Google").unwrap();
        assert_eq!(google.name.as_deref(), Some("Google Inc"));
        assert_eq!(google.brand_name.as_deref(), Some("Google"));
    }

    #[test]
    fn test_load_by_name_or_brand() {
        let table = CompanyTable::from_json_str(SAMPLE, "sample").unwrap();
        assert_eq!(table.find_key("blackberry"), Some("Rim"));
        assert_eq!(table.find_key("Samsung Electronics Co., Ltd."), Some("Samsung"));
        assert_eq!(table.load("google inc").unwrap().key, "Google");
    }

    #[test]
    fn test_missing_key_is_not_found() {
        let table = CompanyTable::from_json_str(SAMPLE, "sample").unwrap();
        assert_eq!(
            table.load("Acme").unwrap_err(),
            LookupError::company("Acme")
        );
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = CompanyTable::from_json_str("{ nope", "broken").unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_embedded_table_loads() {
        let table = CompanyTable::embedded().unwrap();
        assert!(table.len() > 10);
        assert!(table.load("Google").is_ok());
        assert!(table.load("Apple").is_ok());
    }
}
