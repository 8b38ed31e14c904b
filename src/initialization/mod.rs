//! Process-wide initialization.
//!
//! Sets up logging and loads the read-only lookup tables (companies, devices,
//! regex rules) once, before any pipeline stage runs. Table loading failures
//! are configuration errors and abort startup.

mod logger;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::fallback::{init_regexes, RegexRuleSet};
use crate::lookup::{init_companies, CompanyTable, DeviceTable};

pub use logger::init_logger_with;

/// The shared read-only tables a run needs.
#[derive(Debug, Clone)]
pub struct LookupTables {
    pub companies: &'static CompanyTable,
    pub devices: Arc<DeviceTable>,
    pub regexes: &'static RegexRuleSet,
}

/// Loads the company table, device table and regex rules named by `config`,
/// falling back to the embedded defaults.
///
/// # Errors
///
/// Fails when an override file is missing or malformed, or when the regex
/// definitions contain no rules.
pub fn init_lookup_tables(config: &Config) -> Result<LookupTables> {
    let companies =
        init_companies(config.companies.as_deref()).context("Failed to load company table")?;
    let devices = match config.devices.as_deref() {
        Some(path) => DeviceTable::from_path(path, companies),
        None => DeviceTable::embedded(companies),
    }
    .context("Failed to load device table")?;
    let regexes = init_regexes(config.regexes.as_deref()).context("Failed to load regex rules")?;

    log::info!(
        "Loaded {} companies, {} devices, {} regex rules",
        companies.len(),
        devices.len(),
        regexes.len()
    );

    Ok(LookupTables {
        companies,
        devices: Arc::new(devices),
        regexes,
    })
}
