//! Rendering engine part of a canonical result.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::company::{company_ref, Company};
use super::version::Version;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    pub name: Option<String>,
    #[serde(with = "company_ref", default = "Company::unknown")]
    pub manufacturer: Arc<Company>,
    #[serde(default)]
    pub version: Version,
}

impl Default for Engine {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Engine {
    pub fn unknown() -> Self {
        Engine {
            name: None,
            manufacturer: Company::unknown(),
            version: Version::unknown(),
        }
    }
}
