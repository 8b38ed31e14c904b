//! Regex-based device fallback resolution.
//!
//! When the primary result names a mobile device only generically ("general
//! Mobile Device"), the user agent is normalized and run through an ordered
//! regex rule set:
//!
//! - no rule matches: `Unresolved`, the device becomes unknown
//! - a rule names a device: the device record is loaded; a generic name that is
//!   not on the accepted list becomes the "not found via regexes" marker
//! - a rule names a category: the category record is loaded from the device
//!   table, any lookup failure gives the unknown device
//!
//! Failures never leave the resolver; each path ends in a device.

mod normalize;
mod rules;

pub use normalize::normalize_user_agent;
pub use rules::{init_regexes, MatchOutcome, RegexRule, RegexRuleSet};

use crate::config::{ACCEPTED_GENERIC_DEVICES, RESOLVER_SKIP_DEVICES};
use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};
use crate::lookup::DeviceLoader;
use crate::model::Device;

/// Terminal state of one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(Device),
    Unresolved,
}

impl Resolution {
    /// The device to store; `Unresolved` stores the unknown device.
    pub fn into_device(self) -> Device {
        match self {
            Resolution::Resolved(device) => device,
            Resolution::Unresolved => Device::unknown(),
        }
    }
}

/// True when `device` should go through the resolver: a mobile form factor
/// whose name is only a generic category, other than the Apple catch-all.
pub fn should_resolve(device: &Device) -> bool {
    let Some(name) = device.device_name.as_deref() else {
        return false;
    };
    device.device_type.is_mobile()
        && device.is_identified()
        && device.is_generic()
        && !RESOLVER_SKIP_DEVICES.contains(&name)
}

pub struct FallbackResolver<'a> {
    rules: &'a RegexRuleSet,
    devices: &'a dyn DeviceLoader,
    stats: &'a ProcessingStats,
}

impl<'a> FallbackResolver<'a> {
    pub fn new(
        rules: &'a RegexRuleSet,
        devices: &'a dyn DeviceLoader,
        stats: &'a ProcessingStats,
    ) -> Self {
        FallbackResolver {
            rules,
            devices,
            stats,
        }
    }

    /// Runs `Normalize → Match → {Resolved, Unresolved, CategoryLookup}` for
    /// one user agent.
    pub fn resolve(&self, user_agent: &str) -> Resolution {
        let normalized = normalize_user_agent(user_agent);

        match self.rules.find(&normalized) {
            Ok(MatchOutcome::NoMatch) => {
                log::debug!("No regex matched \"{}\"", normalized);
                self.stats.increment_info(InfoType::RegexUnresolved);
                Resolution::Unresolved
            }
            Ok(MatchOutcome::Category { key, .. }) => self.category_lookup(&key, &normalized),
            Ok(MatchOutcome::Device { rule, key }) => {
                let device = match self.devices.load(&key, &normalized) {
                    Ok(device) => device,
                    Err(e) => {
                        log::debug!("Rule \"{}\": {}", rule, e);
                        self.stats.increment_warning(WarningType::DeviceLookupMiss);
                        Device::unknown()
                    }
                };
                Resolution::Resolved(self.apply_policy(device))
            }
            Err(e) => {
                log::error!("Regex resolution failed for \"{}\": {}", normalized, e);
                self.stats.increment_error(ErrorType::RegexResolution);
                Resolution::Resolved(Device::unknown())
            }
        }
    }

    /// Replaces a primary-result device: unknown names become the unknown
    /// device, generic mobile names go through [`FallbackResolver::resolve`],
    /// everything else is kept.
    pub fn rewrite_device(&self, device: Device, user_agent: &str) -> Device {
        if !device.is_identified() {
            return Device::unknown();
        }
        if !should_resolve(&device) {
            return device;
        }
        self.resolve(user_agent).into_device()
    }

    fn category_lookup(&self, key: &str, normalized: &str) -> Resolution {
        match self.devices.load(key, normalized) {
            Ok(device) => {
                self.stats.increment_info(InfoType::RegexResolved);
                Resolution::Resolved(device)
            }
            Err(e) => {
                log::error!("Category lookup failed: {}", e);
                self.stats.increment_error(ErrorType::CategoryLookup);
                Resolution::Resolved(Device::unknown())
            }
        }
    }

    fn apply_policy(&self, device: Device) -> Device {
        if !device.is_identified() {
            return Device::unknown();
        }
        let accepted = device
            .device_name
            .as_deref()
            .is_some_and(|name| ACCEPTED_GENERIC_DEVICES.contains(&name));
        if device.is_generic() && !accepted {
            self.stats.increment_info(InfoType::RegexNotFoundMarker);
            return Device::not_found_via_regexes();
        }
        self.stats.increment_info(InfoType::RegexResolved);
        device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::LookupError;
    use crate::model::{DeviceType, PointingMethod};
    use crate::config::NOT_FOUND_VIA_REGEXES;
    use std::cell::RefCell;

    const RULES: &str = r#"
regexes:
  - name: blackberry
    regex: '(?i)blackberry'
    device: 'general blackberry device'
  - name: nexus
    regex: '(?i)android [\d.]+; (nexus \d+)'
    device: '$1'
  - name: generic-android
    regex: '(?i)android [\d.]+; generic'
    device: 'general Android Thing'
  - name: desktop
    regex: '(?i)desktopish'
    device: 'general Desktop'
  - name: missing
    regex: '(?i)missingphone(\d)?'
    device: 'phone $1'
"#;

    /// Device loader backed by a fixed list, recording every key it is asked for.
    struct StubDevices {
        known: Vec<(&'static str, Device)>,
        calls: RefCell<Vec<String>>,
    }

    impl StubDevices {
        fn new(known: Vec<(&'static str, Device)>) -> Self {
            StubDevices {
                known,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl DeviceLoader for StubDevices {
        fn load(&self, key: &str, _user_agent: &str) -> Result<Device, LookupError> {
            self.calls.borrow_mut().push(key.to_string());
            self.known
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, d)| d.clone())
                .ok_or_else(|| LookupError::device(key))
        }
    }

    fn named(name: &str, device_type: DeviceType) -> Device {
        let mut device = Device::new(Some(name.to_string()), Some(name.to_string()));
        device.device_type = device_type;
        device
    }

    fn rules() -> RegexRuleSet {
        RegexRuleSet::from_yaml_str(RULES, "test").unwrap()
    }

    #[test]
    fn test_unresolved_gives_unknown_device() {
        let rules = rules();
        let devices = StubDevices::new(vec![]);
        let stats = ProcessingStats::new();
        let resolver = FallbackResolver::new(&rules, &devices, &stats);

        let ua = "Mozilla/5.0 (Linux; Android 9; SomethingElse)";
        assert_eq!(resolver.resolve(ua), Resolution::Unresolved);

        let device = resolver.rewrite_device(named("general Mobile Device", DeviceType::Smartphone), ua);
        assert_eq!(device.device_name, None);
        assert_eq!(device.marketing_name, None);
        assert_eq!(stats.get_info_count(InfoType::RegexUnresolved), 2);
    }

    #[test]
    fn test_category_path_returns_loaded_device() {
        let rules = rules();
        let mut bb = named("general BlackBerry Device", DeviceType::Smartphone);
        bb.pointing_method = PointingMethod::Clickwheel;
        let devices = StubDevices::new(vec![("general blackberry device", bb.clone())]);
        let stats = ProcessingStats::new();
        let resolver = FallbackResolver::new(&rules, &devices, &stats);

        let device = resolver.rewrite_device(
            named("general Mobile Device", DeviceType::Smartphone),
            "BlackBerry9700/5.0.0.351",
        );
        assert_eq!(device, bb);
        assert_eq!(devices.calls.borrow().as_slice(), ["general blackberry device"]);
    }

    #[test]
    fn test_category_lookup_failure_gives_unknown_device() {
        let rules = rules();
        let devices = StubDevices::new(vec![]);
        let stats = ProcessingStats::new();
        let resolver = FallbackResolver::new(&rules, &devices, &stats);

        assert_eq!(
            resolver.resolve("BlackBerry9700"),
            Resolution::Resolved(Device::unknown())
        );
        assert_eq!(stats.get_error_count(ErrorType::CategoryLookup), 1);
    }

    #[test]
    fn test_direct_match_loads_device() {
        let rules = rules();
        let nexus = named("Nexus 5", DeviceType::Smartphone);
        let devices = StubDevices::new(vec![("nexus 5", nexus.clone())]);
        let stats = ProcessingStats::new();
        let resolver = FallbackResolver::new(&rules, &devices, &stats);

        assert_eq!(
            resolver.resolve("Mozilla/5.0 (Linux; Android 6.0; Nexus 5) AppleWebKit"),
            Resolution::Resolved(nexus)
        );
    }

    #[test]
    fn test_generic_match_becomes_not_found_marker() {
        let rules = rules();
        let devices = StubDevices::new(vec![(
            "general Android Thing",
            named("general Android Thing", DeviceType::Smartphone),
        )]);
        let stats = ProcessingStats::new();
        let resolver = FallbackResolver::new(&rules, &devices, &stats);

        let device = resolver.resolve("Android 9; generic").into_device();
        assert_eq!(device.device_name.as_deref(), Some(NOT_FOUND_VIA_REGEXES));
        assert_eq!(device.marketing_name, None);
        assert_eq!(stats.get_info_count(InfoType::RegexNotFoundMarker), 1);
    }

    #[test]
    fn test_accepted_generic_match_is_kept() {
        let rules = rules();
        let desktop = named("general Desktop", DeviceType::Desktop);
        let devices = StubDevices::new(vec![("general Desktop", desktop.clone())]);
        let stats = ProcessingStats::new();
        let resolver = FallbackResolver::new(&rules, &devices, &stats);

        assert_eq!(resolver.resolve("desktopish"), Resolution::Resolved(desktop));
    }

    #[test]
    fn test_expansion_error_gives_unknown_device() {
        let rules = rules();
        let devices = StubDevices::new(vec![]);
        let stats = ProcessingStats::new();
        let resolver = FallbackResolver::new(&rules, &devices, &stats);

        assert_eq!(
            resolver.resolve("MissingPhone"),
            Resolution::Resolved(Device::unknown())
        );
        assert_eq!(stats.get_error_count(ErrorType::RegexResolution), 1);
    }

    #[test]
    fn test_rewrite_gate() {
        let rules = rules();
        let devices = StubDevices::new(vec![]);
        let stats = ProcessingStats::new();
        let resolver = FallbackResolver::new(&rules, &devices, &stats);

        // unknown names are normalized without consulting the rules
        let unknown = named("unknown", DeviceType::Smartphone);
        assert_eq!(resolver.rewrite_device(unknown, "BlackBerry"), Device::unknown());

        // specific devices, non-mobile generics and the Apple catch-all pass through
        let specific = named("SM-G900F", DeviceType::Smartphone);
        assert_eq!(resolver.rewrite_device(specific.clone(), "BlackBerry"), specific);
        let desktop = named("general Desktop", DeviceType::Desktop);
        assert_eq!(resolver.rewrite_device(desktop.clone(), "BlackBerry"), desktop);
        let apple = named("general Apple Device", DeviceType::MobileDevice);
        assert_eq!(resolver.rewrite_device(apple.clone(), "BlackBerry"), apple);

        assert!(devices.calls.borrow().is_empty());
    }
}
