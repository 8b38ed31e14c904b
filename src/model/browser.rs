//! Browser part of a canonical result.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::company::{company_ref, Company};
use super::version::Version;

/// Category of the client software.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BrowserType {
    Browser,
    Application,
    Bot,
    EmailClient,
    FeedReader,
    MediaPlayer,
    Library,
    Tool,
    Transcoder,
    OfflineBrowser,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Browser {
    pub name: Option<String>,
    #[serde(with = "company_ref", default = "Company::unknown")]
    pub manufacturer: Arc<Company>,
    #[serde(default)]
    pub version: Version,
    #[serde(rename = "type", default)]
    pub browser_type: BrowserType,
    /// 32 or 64 when known.
    #[serde(default)]
    pub bits: Option<u8>,
}

impl Default for Browser {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Browser {
    pub fn unknown() -> Self {
        Browser {
            name: None,
            manufacturer: Company::unknown(),
            version: Version::unknown(),
            browser_type: BrowserType::Unknown,
            bits: None,
        }
    }
}
