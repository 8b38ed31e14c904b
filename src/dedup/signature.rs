//! Signature keys and the signature dedup set.

use std::collections::HashSet;

use crate::config::SIGNATURE_DELIMITER;
use crate::model::{CanonicalResult, VersionFormat};

/// Which dedup branch a result falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureBranch {
    /// Desktop-style results and mobile results failing the strict gate.
    Baseline,
    /// Mobile/tablet results with a specific browser and device name.
    StrictMobile,
}

/// Outcome of offering a result to a [`SignatureSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admitted { key: String, branch: SignatureBranch },
    Duplicate { key: String, branch: SignatureBranch },
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }

    pub fn key(&self) -> &str {
        match self {
            Admission::Admitted { key, .. } | Admission::Duplicate { key, .. } => key,
        }
    }
}

/// Identity of a result: browser, engine and OS names with versions at
/// major.minor precision, then device code name, marketing name and
/// manufacturer name. Absent values are empty strings.
pub fn signature_key(result: &CanonicalResult) -> String {
    let components = [
        result.browser.name.clone().unwrap_or_default(),
        result.browser.version.format(VersionFormat::IgnoreMicro),
        result.engine.name.clone().unwrap_or_default(),
        result.engine.version.format(VersionFormat::IgnoreMicro),
        result.os.name.clone().unwrap_or_default(),
        result.os.version.format(VersionFormat::IgnoreMicro),
        result.device.device_name.clone().unwrap_or_default(),
        result.device.marketing_name.clone().unwrap_or_default(),
        result.device.manufacturer.name_or_empty().to_string(),
    ];
    components.join(SIGNATURE_DELIMITER)
}

fn is_specific(name: Option<&str>) -> bool {
    matches!(name, Some(n) if !n.contains("general") && n != "unknown")
}

pub fn classify(result: &CanonicalResult) -> SignatureBranch {
    let device_type = result.device.device_type;
    let mobile = device_type.is_mobile() || device_type.is_tablet();
    if mobile
        && is_specific(result.browser.name.as_deref())
        && is_specific(result.device.device_name.as_deref())
    {
        SignatureBranch::StrictMobile
    } else {
        SignatureBranch::Baseline
    }
}

/// Signature keys seen so far in one run. First seen wins.
#[derive(Debug, Clone, Default)]
pub struct SignatureSet {
    keys: HashSet<String>,
}

impl SignatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&mut self, result: &CanonicalResult) -> Admission {
        let branch = classify(result);
        let key = signature_key(result);
        if self.keys.insert(key.clone()) {
            Admission::Admitted { key, branch }
        } else {
            Admission::Duplicate { key, branch }
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
