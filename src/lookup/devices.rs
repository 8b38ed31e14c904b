//! Device lookup table.
//!
//! Maps device keys (lower-cased code names and the generic category keys
//! such as `general mobile device`) to full device records.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use super::companies::{CompanyLoader, CompanyTable};
use crate::error_handling::{ConfigError, LookupError};
use crate::model::{Company, Device, DeviceType, PointingMethod};

const EMBEDDED_DEVICES: &str = include_str!("../../data/devices.yaml");

/// Resolves a device key to a device record.
///
/// `user_agent` is the normalized user agent the key was derived from.
pub trait DeviceLoader {
    fn load(&self, key: &str, user_agent: &str) -> Result<Device, LookupError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeviceRecord {
    device_name: Option<String>,
    marketing_name: Option<String>,
    manufacturer: Option<String>,
    brand: Option<String>,
    #[serde(rename = "type", default)]
    device_type: DeviceType,
    #[serde(default)]
    pointing_method: PointingMethod,
}

#[derive(Debug, Default)]
pub struct DeviceTable {
    devices: IndexMap<String, Device>,
}

impl DeviceTable {
    pub fn from_yaml_str(
        content: &str,
        origin: &str,
        companies: &CompanyTable,
    ) -> Result<Self, ConfigError> {
        let records: IndexMap<String, DeviceRecord> =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
                origin: origin.to_string(),
                reason: e.to_string(),
            })?;

        let company = |key: Option<&str>| match key {
            Some(key) => companies.load(key).unwrap_or_else(|e| {
                log::debug!("{}: {}", origin, e);
                Company::unknown()
            }),
            None => Company::unknown(),
        };

        let devices = records
            .into_iter()
            .map(|(key, record)| {
                let device = Device {
                    device_name: record.device_name,
                    marketing_name: record.marketing_name,
                    manufacturer: company(record.manufacturer.as_deref()),
                    brand: company(record.brand.as_deref()),
                    device_type: record.device_type,
                    pointing_method: record.pointing_method,
                };
                (key.to_lowercase(), device)
            })
            .collect();

        Ok(DeviceTable { devices })
    }

    pub fn from_path(path: &Path, companies: &CompanyTable) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content, &path.display().to_string(), companies)
    }

    pub fn embedded(companies: &CompanyTable) -> Result<Self, ConfigError> {
        Self::from_yaml_str(EMBEDDED_DEVICES, "embedded device table", companies)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl DeviceLoader for DeviceTable {
    fn load(&self, key: &str, user_agent: &str) -> Result<Device, LookupError> {
        let device = self
            .devices
            .get(&key.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| LookupError::device(key))?;
        log::trace!("Loaded device \"{}\" for \"{}\"", key, user_agent);
        Ok(device)
    }
}
