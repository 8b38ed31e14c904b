//! Mapper for WhichBrowser test fixtures.
//!
//! Fields come from the fixture's `result` block. Versions are either plain
//! strings or `{value, alias}` objects.

use super::input::InputMapper;
use super::{first_value, FieldMapper};
use crate::model::{Browser, BrowserType, Device, DeviceType, Engine, Os};
use crate::source::RawRecord;

#[derive(Debug, Clone, Copy, Default)]
pub struct WhichBrowserMapper {
    input: InputMapper,
}

impl WhichBrowserMapper {
    pub fn new(input: InputMapper) -> Self {
        WhichBrowserMapper { input }
    }

    fn version(&self, raw: &RawRecord, part: &str) -> crate::model::Version {
        let plain = format!("{part}.version");
        let nested = format!("{part}.version.value");
        self.input
            .map_version(first_value(raw, &[plain.as_str(), nested.as_str()]))
    }

    fn device_type(&self, raw: &RawRecord) -> DeviceType {
        let device_type = raw.value("device.type");
        match (device_type, raw.value("device.subtype")) {
            ("mobile", "smart") => DeviceType::Smartphone,
            ("mobile", "feature") => DeviceType::FeaturePhone,
            ("mobile", _) => DeviceType::MobilePhone,
            _ => self.input.map_device_type(device_type),
        }
    }
}

impl FieldMapper for WhichBrowserMapper {
    fn map_browser(&self, raw: &RawRecord) -> Browser {
        let name = self.input.map_browser_name(raw.value("browser.name"));
        let browser_type = if raw.value("device.type") == "bot" {
            BrowserType::Bot
        } else {
            match self.input.map_browser_type(raw.value("browser.type")) {
                BrowserType::Unknown if name.is_some() => BrowserType::Browser,
                other => other,
            }
        };
        Browser {
            manufacturer: self.input.map_browser_maker("", name.as_deref()),
            version: self.version(raw, "browser"),
            browser_type,
            bits: None,
            name,
        }
    }

    fn map_engine(&self, raw: &RawRecord) -> Engine {
        let name = self.input.map_engine_name(raw.value("engine.name"));
        Engine {
            manufacturer: self.input.map_engine_maker("", name.as_deref()),
            version: self.version(raw, "engine"),
            name,
        }
    }

    fn map_os(&self, raw: &RawRecord) -> Os {
        let name = self.input.map_os_name(raw.value("os.name"));
        let alias = raw.value("os.version.alias");
        Os {
            manufacturer: self.input.map_os_maker("", name.as_deref()),
            version: self.version(raw, "os"),
            marketing_name: if alias.is_empty() { None } else { Some(alias.to_string()) },
            bits: None,
            name,
        }
    }

    fn map_device(&self, raw: &RawRecord) -> Device {
        let name = self.input.map_device_name(raw.value("device.model"));
        Device {
            marketing_name: self.input.map_device_marketing_name(
                first_value(raw, &["device.series", "device.model"]),
                name.as_deref(),
            ),
            manufacturer: self
                .input
                .map_device_maker(raw.value("device.manufacturer"), name.as_deref()),
            brand: self
                .input
                .map_device_maker(raw.value("device.manufacturer"), name.as_deref()),
            device_type: self.device_type(raw),
            pointing_method: Default::default(),
            device_name: name,
        }
    }
}
