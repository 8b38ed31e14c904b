//! Shared normalization of raw library values.
//!
//! Every library mapper funnels names, versions, types and makers through
//! these tables. Names without a table entry pass through unchanged.

use std::str::FromStr;
use std::sync::Arc;

use crate::lookup::{companies, CompanyLoader, CompanyTable};
use crate::model::{BrowserType, Company, DeviceType, PointingMethod, Version};

/// Raw values that mean "the library did not know".
const SENTINEL_VALUES: &[&str] = &["", "unknown", "other", "0", "0.0"];

const BROWSER_NAMES: &[(&str, &str)] = &[
    ("ie", "Internet Explorer"),
    ("msie", "Internet Explorer"),
    ("ie mobile", "IEMobile"),
    ("chrome mobile", "Chrome"),
    ("chrome mobile ios", "Chrome"),
    ("crios", "Chrome"),
    ("chrome mobile webview", "Android WebView"),
    ("mobile safari", "Safari"),
    ("mobile safari ui/wkwebview", "Safari"),
    ("firefox mobile", "Firefox"),
    ("firefox ios", "Firefox"),
    ("android", "Android WebKit"),
    ("android browser", "Android WebKit"),
    ("edge mobile", "Edge Mobile"),
    ("microsoft edge", "Edge"),
    ("samsung internet", "Samsung Browser"),
    ("samsungbrowser", "Samsung Browser"),
    ("googlebot", "Google Bot"),
    ("yandex browser", "Yandex Browser"),
    ("yabrowser", "Yandex Browser"),
    ("facebook", "Facebook App"),
    ("opera mobi", "Opera Mobile"),
    ("ucbrowser", "UC Browser"),
    ("blackberry webkit", "BlackBerry"),
];

const BROWSER_MAKERS: &[(&str, &str)] = &[
    ("chrome", "Google"),
    ("android webview", "Google"),
    ("android webkit", "Google"),
    ("google bot", "Google"),
    ("internet explorer", "Microsoft"),
    ("iemobile", "Microsoft"),
    ("edge", "Microsoft"),
    ("edge mobile", "Microsoft"),
    ("firefox", "Mozilla"),
    ("safari", "Apple"),
    ("opera", "Opera"),
    ("opera mini", "Opera"),
    ("opera mobile", "Opera"),
    ("samsung browser", "Samsung"),
    ("yandex browser", "Yandex"),
    ("facebook app", "Facebook"),
    ("blackberry", "Rim"),
];

const OS_NAMES: &[(&str, &str)] = &[
    ("win10", "Windows"),
    ("win8.1", "Windows"),
    ("win8", "Windows"),
    ("win7", "Windows"),
    ("windows 10", "Windows"),
    ("windows nt", "Windows NT"),
    ("mac os x", "macOS"),
    ("macosx", "macOS"),
    ("os x", "macOS"),
    ("mac os", "macOS"),
    ("ios", "iOS"),
    ("iphone os", "iOS"),
    ("android", "Android"),
    ("linux", "Linux"),
    ("ubuntu", "Ubuntu"),
    ("chromeos", "ChromeOS"),
    ("chrome os", "ChromeOS"),
    ("windows phone", "Windows Phone"),
    ("windows phone os", "Windows Phone"),
    ("rim os", "RIM OS"),
    ("blackberry os", "RIM OS"),
    ("blackberry", "RIM OS"),
    ("bb10", "BlackBerry OS"),
    ("tizen", "Tizen"),
];

/// Version implied by a platform name that embeds it (`Win10`).
const OS_VERSIONS: &[(&str, &str)] = &[
    ("win10", "10"),
    ("win8.1", "8.1"),
    ("win8", "8"),
    ("win7", "7"),
    ("windows 10", "10"),
];

const OS_MAKERS: &[(&str, &str)] = &[
    ("windows", "Microsoft"),
    ("windows nt", "Microsoft"),
    ("windows phone", "Microsoft"),
    ("macos", "Apple"),
    ("ios", "Apple"),
    ("android", "Google"),
    ("chromeos", "Google"),
    ("linux", "Linux Foundation"),
    ("ubuntu", "Canonical"),
    ("rim os", "Rim"),
    ("blackberry os", "Rim"),
    ("tizen", "Tizen"),
];

const ENGINE_NAMES: &[(&str, &str)] = &[
    ("webkit", "WebKit"),
    ("applewebkit", "WebKit"),
    ("blink", "Blink"),
    ("gecko", "Gecko"),
    ("trident", "Trident"),
    ("presto", "Presto"),
    ("edgehtml", "Edge"),
];

const ENGINE_MAKERS: &[(&str, &str)] = &[
    ("webkit", "Apple"),
    ("blink", "Google"),
    ("gecko", "Mozilla"),
    ("trident", "Microsoft"),
    ("edge", "Microsoft"),
    ("presto", "Opera"),
];

const DEVICE_NAMES: &[(&str, &str)] = &[
    ("general mobile phone", "general Mobile Phone"),
    ("general mobile device", "general Mobile Device"),
    ("general tablet", "general Tablet"),
    ("general desktop", "general Desktop"),
    ("general apple device", "general Apple Device"),
    ("iphone", "iPhone"),
    ("ipad", "iPad"),
    ("ipod", "iPod Touch"),
    ("ipod touch", "iPod Touch"),
    ("macintosh", "Macintosh"),
    ("mac", "Macintosh"),
    ("windows desktop", "Windows Desktop"),
    ("linux desktop", "Linux Desktop"),
    ("smartphone", "general Mobile Phone"),
    ("tablet", "general Tablet"),
];

const DEVICE_MAKERS: &[(&str, &str)] = &[
    ("iphone", "Apple"),
    ("ipad", "Apple"),
    ("ipod touch", "Apple"),
    ("macintosh", "Apple"),
    ("general apple device", "Apple"),
];

const DEVICE_TYPES: &[(&str, DeviceType)] = &[
    ("mobile", DeviceType::MobilePhone),
    ("mobile phone", DeviceType::MobilePhone),
    ("mobilephone", DeviceType::MobilePhone),
    ("featurephone", DeviceType::FeaturePhone),
    ("mobile device", DeviceType::MobileDevice),
    ("ebook reader", DeviceType::Tablet),
    ("smarttv", DeviceType::Tv),
    ("smart-tv", DeviceType::Tv),
    ("television", DeviceType::Tv),
    ("smartwatch", DeviceType::Wearable),
    ("watch", DeviceType::Wearable),
    ("pc", DeviceType::Desktop),
    ("appliance", DeviceType::General),
    ("media player", DeviceType::MobileDevice),
    ("portable media player", DeviceType::MobileDevice),
    ("car browser", DeviceType::CarEntertainmentSystem),
    ("car", DeviceType::CarEntertainmentSystem),
    ("gaming", DeviceType::Console),
    ("ereader", DeviceType::Tablet),
    ("media", DeviceType::MobileDevice),
];

const BROWSER_TYPES: &[(&str, BrowserType)] = &[
    ("crawler", BrowserType::Bot),
    ("bot/crawler", BrowserType::Bot),
    ("robot", BrowserType::Bot),
    ("email client", BrowserType::EmailClient),
    ("feed reader", BrowserType::FeedReader),
    ("multimedia player", BrowserType::MediaPlayer),
    ("app", BrowserType::Application),
    ("mobile app", BrowserType::Application),
    ("mobile application", BrowserType::Application),
    ("pim", BrowserType::Application),
    ("useragent anonymizer", BrowserType::Tool),
    ("offline browser", BrowserType::OfflineBrowser),
];

const POINTING_METHODS: &[(&str, PointingMethod)] = &[
    ("touch", PointingMethod::Touchscreen),
    ("touch screen", PointingMethod::Touchscreen),
    ("click wheel", PointingMethod::Clickwheel),
];

/// True for raw values that carry no information.
pub fn is_sentinel(value: &str) -> bool {
    let trimmed = value.trim();
    SENTINEL_VALUES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(trimmed))
}

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    let key = key.trim();
    table
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| *v)
}

/// Lower-cased, single-dash form used to parse enum names (`Mobile Phone` → `mobile-phone`).
fn enum_key(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Table-driven normalization shared by all library mappers.
#[derive(Debug, Clone, Copy)]
pub struct InputMapper {
    companies: &'static CompanyTable,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(companies())
    }
}

impl InputMapper {
    pub fn new(companies: &'static CompanyTable) -> Self {
        InputMapper { companies }
    }

    fn name(&self, table: &[(&str, &'static str)], raw: &str) -> Option<String> {
        if is_sentinel(raw) {
            return None;
        }
        Some(
            lookup(table, raw)
                .map(str::to_string)
                .unwrap_or_else(|| raw.trim().to_string()),
        )
    }

    pub fn map_browser_name(&self, raw: &str) -> Option<String> {
        self.name(BROWSER_NAMES, raw)
    }

    pub fn map_os_name(&self, raw: &str) -> Option<String> {
        self.name(OS_NAMES, raw)
    }

    pub fn map_engine_name(&self, raw: &str) -> Option<String> {
        self.name(ENGINE_NAMES, raw)
    }

    pub fn map_device_name(&self, raw: &str) -> Option<String> {
        self.name(DEVICE_NAMES, raw)
    }

    /// Marketing name; falls back to the mapped code name for the generic
    /// devices, whose code and marketing names coincide.
    pub fn map_device_marketing_name(&self, raw: &str, device_name: Option<&str>) -> Option<String> {
        if !is_sentinel(raw) {
            return Some(raw.trim().to_string());
        }
        device_name
            .filter(|name| crate::model::is_generic_name(Some(name)))
            .map(str::to_string)
    }

    pub fn map_version(&self, raw: &str) -> Version {
        if is_sentinel(raw) {
            return Version::unknown();
        }
        Version::parse(raw)
    }

    /// OS version; platforms like `Win10` carry it in their name.
    pub fn map_os_version(&self, raw: &str, raw_os_name: &str) -> Version {
        if is_sentinel(raw) {
            if let Some(implied) = lookup(OS_VERSIONS, raw_os_name) {
                return Version::parse(implied);
            }
        }
        self.map_version(raw)
    }

    pub fn map_browser_type(&self, raw: &str) -> BrowserType {
        if is_sentinel(raw) {
            return BrowserType::Unknown;
        }
        BrowserType::from_str(&enum_key(raw))
            .ok()
            .or_else(|| lookup(BROWSER_TYPES, raw))
            .unwrap_or_else(|| {
                log::debug!("Unrecognized browser type \"{}\"", raw);
                BrowserType::Unknown
            })
    }

    pub fn map_device_type(&self, raw: &str) -> DeviceType {
        if is_sentinel(raw) {
            return DeviceType::Unknown;
        }
        DeviceType::from_str(&enum_key(raw))
            .ok()
            .or_else(|| lookup(DEVICE_TYPES, raw))
            .unwrap_or_else(|| {
                log::debug!("Unrecognized device type \"{}\"", raw);
                DeviceType::Unknown
            })
    }

    pub fn map_pointing_method(&self, raw: &str) -> PointingMethod {
        if is_sentinel(raw) {
            return PointingMethod::Unknown;
        }
        PointingMethod::from_str(&enum_key(raw))
            .ok()
            .or_else(|| lookup(POINTING_METHODS, raw))
            .unwrap_or(PointingMethod::Unknown)
    }

    /// `32`/`64` style bit widths; anything else is unknown.
    pub fn map_bits(&self, raw: &str) -> Option<u8> {
        match raw.trim().parse::<u8>() {
            Ok(bits @ (8 | 16 | 32 | 64)) => Some(bits),
            _ => None,
        }
    }

    pub fn map_browser_maker(&self, raw_maker: &str, browser_name: Option<&str>) -> Arc<Company> {
        self.company(raw_maker, browser_name, BROWSER_MAKERS)
    }

    pub fn map_os_maker(&self, raw_maker: &str, os_name: Option<&str>) -> Arc<Company> {
        self.company(raw_maker, os_name, OS_MAKERS)
    }

    pub fn map_engine_maker(&self, raw_maker: &str, engine_name: Option<&str>) -> Arc<Company> {
        self.company(raw_maker, engine_name, ENGINE_MAKERS)
    }

    pub fn map_device_maker(&self, raw_maker: &str, device_name: Option<&str>) -> Arc<Company> {
        self.company(raw_maker, device_name, DEVICE_MAKERS)
    }

    /// Resolves a maker to a company: the raw maker string when the library
    /// gave one, otherwise the maker implied by the normalized product name.
    /// Misses degrade to the unknown company.
    pub fn company(
        &self,
        raw_maker: &str,
        product: Option<&str>,
        makers: &[(&str, &'static str)],
    ) -> Arc<Company> {
        let key = if !is_sentinel(raw_maker) {
            raw_maker.trim()
        } else if let Some(key) = product.and_then(|name| lookup(makers, name)) {
            key
        } else {
            return Company::unknown();
        };

        self.companies.load(key).unwrap_or_else(|e| {
            log::debug!("{}", e);
            Company::unknown()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> InputMapper {
        InputMapper::default()
    }

    #[test]
    fn test_names_normalize_with_identity_fallback() {
        let m = mapper();
        assert_eq!(m.map_browser_name("Chrome Mobile").as_deref(), Some("Chrome"));
        assert_eq!(m.map_browser_name(" NewBrowser ").as_deref(), Some("NewBrowser"));
        assert_eq!(m.map_os_name("Mac OS X").as_deref(), Some("macOS"));
        assert_eq!(m.map_engine_name("AppleWebKit").as_deref(), Some("WebKit"));
        assert_eq!(m.map_device_name("iphone").as_deref(), Some("iPhone"));
    }

    #[test]
    fn test_sentinels_map_to_unknown() {
        let m = mapper();
        for raw in ["", "unknown", "Other", "0", "0.0", "  "] {
            assert_eq!(m.map_browser_name(raw), None, "{raw:?}");
            assert!(m.map_version(raw).is_unknown(), "{raw:?}");
            assert_eq!(m.map_device_type(raw), DeviceType::Unknown);
            assert!(m.map_browser_maker(raw, None).is_unknown());
        }
    }

    #[test]
    fn test_enum_parsing() {
        let m = mapper();
        assert_eq!(m.map_device_type("Mobile Phone"), DeviceType::MobilePhone);
        assert_eq!(m.map_device_type("smartphone"), DeviceType::Smartphone);
        assert_eq!(m.map_device_type("TV"), DeviceType::Tv);
        assert_eq!(m.map_device_type("smart-tv"), DeviceType::Tv);
        assert_eq!(m.map_device_type("ebook reader"), DeviceType::Tablet);
        assert_eq!(m.map_device_type("toaster"), DeviceType::Unknown);
        assert_eq!(m.map_browser_type("Bot/Crawler"), BrowserType::Bot);
        assert_eq!(m.map_browser_type("Email Client"), BrowserType::EmailClient);
        assert_eq!(m.map_pointing_method("touchscreen"), PointingMethod::Touchscreen);
        assert_eq!(m.map_pointing_method("touch"), PointingMethod::Touchscreen);
    }

    #[test]
    fn test_os_version_implied_by_name() {
        let m = mapper();
        assert_eq!(m.map_os_version("unknown", "Win10"), Version::parse("10"));
        assert_eq!(m.map_os_version("8.1", "Win10"), Version::parse("8.1"));
        assert!(m.map_os_version("", "Linux").is_unknown());
    }

    #[test]
    fn test_maker_resolution() {
        let m = mapper();
        let google = m.map_browser_maker("", Some("Chrome"));
        assert_eq!(google.key, "Google");
        let by_name = m.map_browser_maker("Google Inc", Some("Whatever"));
        assert_eq!(by_name.key, "Google");
        assert!(m.map_browser_maker("Nobody Ltd", Some("Chrome")).is_unknown());
        assert!(m.map_browser_maker("", Some("NewBrowser")).is_unknown());
    }

    #[test]
    fn test_bits() {
        let m = mapper();
        assert_eq!(m.map_bits("64"), Some(64));
        assert_eq!(m.map_bits("0"), None);
        assert_eq!(m.map_bits("x"), None);
    }
}
