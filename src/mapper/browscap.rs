//! Mapper for browscap test fixtures.
//!
//! Browscap properties are flat; a part whose anchor field (`browser`,
//! `platform`, `renderingengine_name`, `device_code_name`) is missing maps to
//! the unknown value of that part.

use super::input::InputMapper;
use super::FieldMapper;
use crate::model::{Browser, Device, Engine, Os};
use crate::source::RawRecord;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowscapMapper {
    input: InputMapper,
}

impl BrowscapMapper {
    pub fn new(input: InputMapper) -> Self {
        BrowscapMapper { input }
    }
}

impl FieldMapper for BrowscapMapper {
    fn map_browser(&self, raw: &RawRecord) -> Browser {
        let Some(raw_name) = raw.get("browser") else {
            return Browser::unknown();
        };
        let name = self.input.map_browser_name(raw_name);
        Browser {
            manufacturer: self
                .input
                .map_browser_maker(raw.value("browser_maker"), name.as_deref()),
            version: self.input.map_version(raw.value("version")),
            browser_type: self.input.map_browser_type(raw.value("browser_type")),
            bits: self.input.map_bits(raw.value("browser_bits")),
            name,
        }
    }

    fn map_engine(&self, raw: &RawRecord) -> Engine {
        let Some(raw_name) = raw.get("renderingengine_name") else {
            return Engine::unknown();
        };
        let name = self.input.map_engine_name(raw_name);
        Engine {
            manufacturer: self
                .input
                .map_engine_maker(raw.value("renderingengine_maker"), name.as_deref()),
            version: self.input.map_version(raw.value("renderingengine_version")),
            name,
        }
    }

    fn map_os(&self, raw: &RawRecord) -> Os {
        let Some(raw_name) = raw.get("platform") else {
            return Os::unknown();
        };
        let name = self.input.map_os_name(raw_name);
        Os {
            manufacturer: self
                .input
                .map_os_maker(raw.value("platform_maker"), name.as_deref()),
            version: self
                .input
                .map_os_version(raw.value("platform_version"), raw_name),
            bits: self.input.map_bits(raw.value("platform_bits")),
            marketing_name: None,
            name,
        }
    }

    fn map_device(&self, raw: &RawRecord) -> Device {
        let Some(raw_code) = raw.get("device_code_name") else {
            return Device::unknown();
        };
        let name = self.input.map_device_name(raw_code);
        Device {
            marketing_name: self
                .input
                .map_device_marketing_name(raw.value("device_name"), name.as_deref()),
            manufacturer: self
                .input
                .map_device_maker(raw.value("device_maker"), name.as_deref()),
            brand: self
                .input
                .map_device_maker(raw.value("device_brand_name"), name.as_deref()),
            device_type: self.input.map_device_type(raw.value("device_type")),
            pointing_method: self
                .input
                .map_pointing_method(raw.value("device_pointing_method")),
            device_name: name,
        }
    }
}
