//! Mapper for ua-parser (uap-core) test fixtures.
//!
//! The source merges the three uap-core test files per user agent, so the
//! record carries `ua.*`, `os.*` and `device.*` fields. uap-core has no
//! rendering engine, device type or pointing method data.

use super::input::InputMapper;
use super::{first_value, joined_version, FieldMapper};
use crate::model::{Browser, BrowserType, Device, Engine, Os};
use crate::source::RawRecord;

/// Device family uap-core assigns to crawlers.
const SPIDER_FAMILY: &str = "Spider";

#[derive(Debug, Clone, Copy, Default)]
pub struct UapCoreMapper {
    input: InputMapper,
}

impl UapCoreMapper {
    pub fn new(input: InputMapper) -> Self {
        UapCoreMapper { input }
    }
}

impl FieldMapper for UapCoreMapper {
    fn map_browser(&self, raw: &RawRecord) -> Browser {
        let name = self.input.map_browser_name(raw.value("ua.family"));
        let browser_type = if raw.value("device.family") == SPIDER_FAMILY {
            BrowserType::Bot
        } else if name.is_some() {
            BrowserType::Browser
        } else {
            BrowserType::Unknown
        };
        Browser {
            manufacturer: self.input.map_browser_maker("", name.as_deref()),
            version: self
                .input
                .map_version(&joined_version(raw, &["ua.major", "ua.minor", "ua.patch"])),
            browser_type,
            bits: None,
            name,
        }
    }

    fn map_engine(&self, _raw: &RawRecord) -> Engine {
        Engine::unknown()
    }

    fn map_os(&self, raw: &RawRecord) -> Os {
        let name = self.input.map_os_name(raw.value("os.family"));
        Os {
            manufacturer: self.input.map_os_maker("", name.as_deref()),
            version: self.input.map_version(&joined_version(
                raw,
                &["os.major", "os.minor", "os.patch", "os.patch_minor"],
            )),
            marketing_name: None,
            bits: None,
            name,
        }
    }

    fn map_device(&self, raw: &RawRecord) -> Device {
        let family = raw.value("device.family");
        if family == SPIDER_FAMILY {
            return Device::unknown();
        }
        let name = self
            .input
            .map_device_name(first_value(raw, &["device.model", "device.family"]));
        let brand = self
            .input
            .map_device_maker(raw.value("device.brand"), name.as_deref());
        Device {
            marketing_name: self.input.map_device_marketing_name(family, name.as_deref()),
            manufacturer: brand.clone(),
            brand,
            device_type: Default::default(),
            pointing_method: Default::default(),
            device_name: name,
        }
    }
}
