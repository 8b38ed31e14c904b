//! Operating system (platform) part of a canonical result.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::company::{company_ref, Company};
use super::version::Version;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Os {
    pub name: Option<String>,
    pub marketing_name: Option<String>,
    #[serde(with = "company_ref", default = "Company::unknown")]
    pub manufacturer: Arc<Company>,
    #[serde(default)]
    pub version: Version,
    #[serde(default)]
    pub bits: Option<u8>,
}

impl Default for Os {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Os {
    pub fn unknown() -> Self {
        Os {
            name: None,
            marketing_name: None,
            manufacturer: Company::unknown(),
            version: Version::unknown(),
            bits: None,
        }
    }
}
