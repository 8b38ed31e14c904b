//! Mapper for Matomo (piwik) device-detector fixtures.
//!
//! Clients carry `client.*` fields, crawlers carry `bot.*` fields instead.
//! Device brands are two-letter codes.

use std::sync::Arc;

use super::input::InputMapper;
use super::FieldMapper;
use crate::model::{Browser, BrowserType, Company, Device, Engine, Os, Version};
use crate::source::RawRecord;

/// device-detector brand codes for the companies in the company table.
const BRAND_CODES: &[(&str, &str)] = &[
    ("AC", "Acer"),
    ("AL", "Alcatel"),
    ("AM", "Amazon"),
    ("AP", "Apple"),
    ("AS", "Asus"),
    ("DL", "Dell"),
    ("GO", "Google"),
    ("HP", "Hp"),
    ("HT", "Htc"),
    ("HU", "Huawei"),
    ("LE", "Lenovo"),
    ("LG", "Lg"),
    ("MI", "Microsoft"),
    ("MR", "Motorola"),
    ("NI", "Nintendo"),
    ("NK", "Nokia"),
    ("OP", "Oppo"),
    ("PH", "Philips"),
    ("RM", "Rim"),
    ("SA", "Samsung"),
    ("SO", "Sony"),
    ("VV", "Vivo"),
    ("XI", "Xiaomi"),
    ("ZT", "ZTE"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PiwikMapper {
    input: InputMapper,
}

impl PiwikMapper {
    pub fn new(input: InputMapper) -> Self {
        PiwikMapper { input }
    }

    fn brand(&self, raw: &str, device_name: Option<&str>) -> Arc<Company> {
        let code = raw.trim();
        let key = BRAND_CODES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map_or(code, |(_, key)| *key);
        self.input.map_device_maker(key, device_name)
    }
}

/// `x64` and `x86` platforms; ARM and MIPS say nothing about the width.
fn platform_bits(platform: &str) -> Option<u8> {
    match platform.trim().to_ascii_lowercase().as_str() {
        "x64" => Some(64),
        "x86" => Some(32),
        _ => None,
    }
}

impl FieldMapper for PiwikMapper {
    fn map_browser(&self, raw: &RawRecord) -> Browser {
        if raw.contains("bot.name") {
            let name = self.input.map_browser_name(raw.value("bot.name"));
            return Browser {
                manufacturer: self
                    .input
                    .map_browser_maker(raw.value("bot.producer.name"), name.as_deref()),
                version: Version::unknown(),
                browser_type: BrowserType::Bot,
                bits: None,
                name,
            };
        }

        let name = self.input.map_browser_name(raw.value("client.name"));
        let browser_type = match self.input.map_browser_type(raw.value("client.type")) {
            BrowserType::Unknown if name.is_some() => BrowserType::Browser,
            browser_type => browser_type,
        };
        Browser {
            manufacturer: self.input.map_browser_maker("", name.as_deref()),
            version: self.input.map_version(raw.value("client.version")),
            browser_type,
            bits: None,
            name,
        }
    }

    fn map_engine(&self, raw: &RawRecord) -> Engine {
        let name = self.input.map_engine_name(raw.value("client.engine"));
        Engine {
            manufacturer: self.input.map_engine_maker("", name.as_deref()),
            version: self.input.map_version(raw.value("client.engine_version")),
            name,
        }
    }

    fn map_os(&self, raw: &RawRecord) -> Os {
        let raw_name = raw.value("os.name");
        let name = self.input.map_os_name(raw_name);
        Os {
            manufacturer: self.input.map_os_maker("", name.as_deref()),
            version: self.input.map_os_version(raw.value("os.version"), raw_name),
            marketing_name: None,
            bits: platform_bits(raw.value("os.platform")),
            name,
        }
    }

    fn map_device(&self, raw: &RawRecord) -> Device {
        let name = self.input.map_device_name(raw.value("device.model"));
        let brand = self.brand(raw.value("device.brand"), name.as_deref());
        Device {
            marketing_name: self
                .input
                .map_device_marketing_name(raw.value("device.model"), name.as_deref()),
            manufacturer: brand.clone(),
            brand,
            device_type: self.input.map_device_type(raw.value("device.type")),
            pointing_method: Default::default(),
            device_name: name,
        }
    }
}
