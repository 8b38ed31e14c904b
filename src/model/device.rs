//! Device part of a canonical result.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::company::{company_ref, Company};
use crate::config::NOT_FOUND_VIA_REGEXES;

/// Form factor of a device.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DeviceType {
    MobilePhone,
    Smartphone,
    FeaturePhone,
    Tablet,
    Phablet,
    MobileDevice,
    Wearable,
    Desktop,
    Tv,
    Console,
    CarEntertainmentSystem,
    /// Identified, but not classifiable into a form factor.
    General,
    #[default]
    Unknown,
}

impl DeviceType {
    /// Handheld form factors, tablets included.
    pub fn is_mobile(self) -> bool {
        matches!(
            self,
            DeviceType::MobilePhone
                | DeviceType::Smartphone
                | DeviceType::FeaturePhone
                | DeviceType::Tablet
                | DeviceType::Phablet
                | DeviceType::MobileDevice
                | DeviceType::Wearable
        )
    }

    pub fn is_tablet(self) -> bool {
        self == DeviceType::Tablet
    }

    pub fn is_tv(self) -> bool {
        self == DeviceType::Tv
    }
}

/// Primary input method of a device.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PointingMethod {
    Mouse,
    Touchscreen,
    Stylus,
    Joystick,
    Clickwheel,
    Trackpad,
    Trackball,
    #[default]
    Unknown,
}

/// The device a user agent belongs to.
///
/// `device_name` is the code name (`SM-G900F`); `None` and `"unknown"` both
/// mean "not identified".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_name: Option<String>,
    pub marketing_name: Option<String>,
    #[serde(with = "company_ref", default = "Company::unknown")]
    pub manufacturer: Arc<Company>,
    #[serde(with = "company_ref", default = "Company::unknown")]
    pub brand: Arc<Company>,
    #[serde(rename = "type", default)]
    pub device_type: DeviceType,
    #[serde(default)]
    pub pointing_method: PointingMethod,
}

impl Default for Device {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Device {
    /// A device with only names set; everything else is the sentinel.
    pub fn new(device_name: Option<String>, marketing_name: Option<String>) -> Self {
        Device {
            device_name,
            marketing_name,
            manufacturer: Company::unknown(),
            brand: Company::unknown(),
            device_type: DeviceType::Unknown,
            pointing_method: PointingMethod::Unknown,
        }
    }

    /// `{name: null, marketingName: null}`.
    pub fn unknown() -> Self {
        Self::new(None, None)
    }

    /// Marker for "the regex fallback ran and found nothing specific".
    pub fn not_found_via_regexes() -> Self {
        Self::new(Some(NOT_FOUND_VIA_REGEXES.to_string()), None)
    }

    pub fn is_identified(&self) -> bool {
        is_identified_name(self.device_name.as_deref())
    }

    /// True when the name only names a broad category ("general Mobile Device").
    pub fn is_generic(&self) -> bool {
        is_generic_name(self.device_name.as_deref())
    }
}

/// `None`, `""` and `"unknown"` all mean "not identified".
pub fn is_identified_name(name: Option<&str>) -> bool {
    matches!(name, Some(n) if !n.is_empty() && !n.eq_ignore_ascii_case("unknown"))
}

/// Case-insensitive check for the `general` category prefix used by generic names.
pub fn is_generic_name(name: Option<&str>) -> bool {
    name.is_some_and(|n| n.to_lowercase().contains("general"))
}
