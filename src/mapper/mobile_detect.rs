//! Mapper for MobileDetect test lists.
//!
//! MobileDetect only answers "mobile?" and "tablet?", names a vendor and
//! sometimes a model. `version` holds property versions keyed by
//! MobileDetect property name; the platform ones give the OS.

use super::input::InputMapper;
use super::FieldMapper;
use crate::model::{Browser, Device, DeviceType, Engine, Os};
use crate::source::RawRecord;

/// MobileDetect version properties that name a platform, in lookup order.
const OS_PROPERTIES: &[(&str, &str)] = &[
    ("ios", "iOS"),
    ("android", "Android"),
    ("windows phone os", "Windows Phone OS"),
    ("windows phone", "Windows Phone OS"),
    ("windows ce", "Windows CE"),
    ("blackberry", "RIM OS"),
    ("bada", "Bada"),
    ("symbian", "Symbian OS"),
    ("webos", "webOS"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct MobileDetectMapper {
    input: InputMapper,
}

impl MobileDetectMapper {
    pub fn new(input: InputMapper) -> Self {
        MobileDetectMapper { input }
    }
}

fn flag(raw: &RawRecord, key: &str) -> bool {
    raw.value(key).eq_ignore_ascii_case("true")
}

impl FieldMapper for MobileDetectMapper {
    fn map_browser(&self, _raw: &RawRecord) -> Browser {
        Browser::unknown()
    }

    fn map_engine(&self, _raw: &RawRecord) -> Engine {
        Engine::unknown()
    }

    fn map_os(&self, raw: &RawRecord) -> Os {
        let Some((property, os_name)) = OS_PROPERTIES
            .iter()
            .find(|(property, _)| raw.contains(&format!("version.{property}")))
        else {
            return Os::unknown();
        };
        let name = self.input.map_os_name(os_name);
        Os {
            manufacturer: self.input.map_os_maker("", name.as_deref()),
            version: self.input.map_version(raw.value(&format!("version.{property}"))),
            marketing_name: None,
            bits: None,
            name,
        }
    }

    fn map_device(&self, raw: &RawRecord) -> Device {
        let name = self.input.map_device_name(raw.value("model"));
        let manufacturer = self.input.map_device_maker(raw.value("vendor"), name.as_deref());
        let device_type = match (flag(raw, "mobile"), flag(raw, "tablet")) {
            (_, true) => DeviceType::Tablet,
            (true, false) => DeviceType::MobilePhone,
            (false, false) if raw.contains("mobile") => DeviceType::Desktop,
            _ => DeviceType::Unknown,
        };
        Device {
            marketing_name: None,
            manufacturer: manufacturer.clone(),
            brand: manufacturer,
            device_type,
            pointing_method: Default::default(),
            device_name: name,
        }
    }
}
