//! Mapper for woothee test fixtures.
//!
//! Woothee reports a browser, an OS and a coarse category (`pc`,
//! `smartphone`, `mobilephone`, `crawler`, `appliance`, `misc`); it has no
//! engine or device model data.

use super::input::InputMapper;
use super::FieldMapper;
use crate::model::{Browser, BrowserType, Device, DeviceType, Engine, Os};
use crate::source::RawRecord;

#[derive(Debug, Clone, Copy, Default)]
pub struct WootheeMapper {
    input: InputMapper,
}

impl WootheeMapper {
    pub fn new(input: InputMapper) -> Self {
        WootheeMapper { input }
    }
}

fn category_type(category: &str) -> DeviceType {
    match category {
        "pc" => DeviceType::Desktop,
        "smartphone" => DeviceType::Smartphone,
        "mobilephone" => DeviceType::FeaturePhone,
        "appliance" => DeviceType::General,
        _ => DeviceType::Unknown,
    }
}

impl FieldMapper for WootheeMapper {
    fn map_browser(&self, raw: &RawRecord) -> Browser {
        let name = self.input.map_browser_name(raw.value("name"));
        let browser_type = match raw.value("category") {
            "crawler" => BrowserType::Bot,
            _ if name.is_some() => BrowserType::Browser,
            _ => BrowserType::Unknown,
        };
        Browser {
            manufacturer: self
                .input
                .map_browser_maker(raw.value("vendor"), name.as_deref()),
            version: self.input.map_version(raw.value("version")),
            browser_type,
            bits: None,
            name,
        }
    }

    fn map_engine(&self, _raw: &RawRecord) -> Engine {
        Engine::unknown()
    }

    fn map_os(&self, raw: &RawRecord) -> Os {
        let raw_name = raw.value("os");
        let name = self.input.map_os_name(raw_name);
        Os {
            manufacturer: self.input.map_os_maker("", name.as_deref()),
            version: self.input.map_os_version(raw.value("os_version"), raw_name),
            marketing_name: None,
            bits: None,
            name,
        }
    }

    fn map_device(&self, raw: &RawRecord) -> Device {
        let mut device = Device::unknown();
        device.device_type = category_type(raw.value("category"));
        device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Version;
    use serde_json::json;

    #[test]
    fn test_pc_browser() {
        let raw = RawRecord::from_value(&json!({
            "target": "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/90.0.4430.85",
            "name": "Chrome",
            "category": "pc",
            "os": "Windows 10",
            "version": "90.0.4430.85",
            "os_version": "NT 10.0",
            "vendor": "Google"
        }));
        let result = WootheeMapper::default().map(&raw, "UA-1");
        assert_eq!(result.browser.name.as_deref(), Some("Chrome"));
        assert_eq!(result.browser.manufacturer.key, "Google");
        assert_eq!(result.os.name.as_deref(), Some("Windows"));
        assert_eq!(result.os.manufacturer.key, "Microsoft");
        assert_eq!(result.device.device_type, DeviceType::Desktop);
        assert_eq!(result.device.device_name, None);
    }

    #[test]
    fn test_crawler_and_unknown_values() {
        let raw = RawRecord::from_value(&json!({
            "name": "Googlebot",
            "category": "crawler",
            "os": "UNKNOWN",
            "version": "UNKNOWN",
            "os_version": "UNKNOWN",
            "vendor": "UNKNOWN"
        }));
        let result = WootheeMapper::default().map(&raw, "UA-1");
        assert_eq!(result.browser.browser_type, BrowserType::Bot);
        assert_eq!(result.browser.version, Version::unknown());
        assert_eq!(result.os, Os::unknown());
        assert_eq!(result.device.device_type, DeviceType::Unknown);
    }
}
