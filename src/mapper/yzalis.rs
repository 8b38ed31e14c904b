//! Mapper for yzalis/ua-parser fixtures.
//!
//! Parts carry uap-style `family`/`major`/`minor`/`patch` fields; the device
//! names its maker as `constructor`.

use super::input::InputMapper;
use super::{joined_version, FieldMapper};
use crate::model::{Browser, BrowserType, Device, Engine, Os};
use crate::source::RawRecord;

#[derive(Debug, Clone, Copy, Default)]
pub struct YzalisMapper {
    input: InputMapper,
}

impl YzalisMapper {
    pub fn new(input: InputMapper) -> Self {
        YzalisMapper { input }
    }
}

impl FieldMapper for YzalisMapper {
    fn map_browser(&self, raw: &RawRecord) -> Browser {
        let name = self.input.map_browser_name(raw.value("browser.family"));
        let browser_type = if raw.value("device.type") == "bot" {
            BrowserType::Bot
        } else if name.is_some() {
            BrowserType::Browser
        } else if !raw.value("email_client.family").is_empty() {
            BrowserType::EmailClient
        } else {
            BrowserType::Unknown
        };
        Browser {
            manufacturer: self.input.map_browser_maker("", name.as_deref()),
            version: self.input.map_version(&joined_version(
                raw,
                &["browser.major", "browser.minor", "browser.patch"],
            )),
            browser_type,
            bits: None,
            name,
        }
    }

    fn map_engine(&self, raw: &RawRecord) -> Engine {
        let name = self.input.map_engine_name(raw.value("rendering_engine.family"));
        Engine {
            manufacturer: self.input.map_engine_maker("", name.as_deref()),
            version: self.input.map_version(raw.value("rendering_engine.version")),
            name,
        }
    }

    fn map_os(&self, raw: &RawRecord) -> Os {
        let raw_name = raw.value("operating_system.family");
        let name = self.input.map_os_name(raw_name);
        let version = joined_version(
            raw,
            &[
                "operating_system.major",
                "operating_system.minor",
                "operating_system.patch",
            ],
        );
        Os {
            manufacturer: self.input.map_os_maker("", name.as_deref()),
            version: self.input.map_os_version(&version, raw_name),
            marketing_name: None,
            bits: None,
            name,
        }
    }

    fn map_device(&self, raw: &RawRecord) -> Device {
        let name = self.input.map_device_name(raw.value("device.model"));
        let manufacturer = self
            .input
            .map_device_maker(raw.value("device.constructor"), name.as_deref());
        Device {
            marketing_name: self
                .input
                .map_device_marketing_name("", name.as_deref()),
            manufacturer: manufacturer.clone(),
            brand: manufacturer,
            device_type: self.input.map_device_type(raw.value("device.type")),
            pointing_method: Default::default(),
            device_name: name,
        }
    }
}
