//! Ordered regex rules mapping normalized user agents to device keys.
//!
//! Rules are read from a YAML document with a top-level `regexes` list:
//!
//! ```yaml
//! regexes:
//!   - name: samsung-galaxy
//!     regex: '(?i)android [\d.]+; (sm-[a-z]\d{3}[a-z]?)'
//!     device: '$1'
//! ```
//!
//! `device` is a template; `$1` and `${name}` are replaced by the rule's
//! capture groups, `$$` is a literal dollar. The expanded key names either a device or one of the
//! generic categories that need a category lookup.

use std::path::Path;
use std::sync::{LazyLock, OnceLock};

use regex::{Captures, Regex};
use serde::Deserialize;

use crate::config::SPECIAL_DEVICE_CATEGORIES;
use crate::error_handling::{ConfigError, ResolveError};

const EMBEDDED_REGEXES: &str = include_str!("../../data/regexes.yaml");

static REGEXES: OnceLock<RegexRuleSet> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct RuleDefinition {
    name: String,
    regex: String,
    device: String,
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    regexes: Option<Vec<RuleDefinition>>,
}

#[derive(Debug, Clone)]
pub struct RegexRule {
    pub name: String,
    pub regex: Regex,
    pub device: String,
}

/// What the `Match` state produced for one user agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A rule matched and named a device key.
    Device { rule: String, key: String },
    /// A rule matched and named a generic category key.
    Category { rule: String, key: String },
    /// No rule matched.
    NoMatch,
}

#[derive(Debug, Clone, Default)]
pub struct RegexRuleSet {
    rules: Vec<RegexRule>,
}

impl RegexRuleSet {
    /// Parses a rule file.
    ///
    /// # Errors
    ///
    /// `MissingRegexes` when the `regexes` list is absent or empty,
    /// `InvalidRegex` when a pattern does not compile.
    pub fn from_yaml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: RuleFile = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;

        let definitions = match file.regexes {
            Some(definitions) if !definitions.is_empty() => definitions,
            _ => return Err(ConfigError::MissingRegexes(origin.to_string())),
        };

        let rules = definitions
            .into_iter()
            .map(|definition| {
                let regex = Regex::new(&definition.regex).map_err(|source| {
                    ConfigError::InvalidRegex {
                        rule: definition.name.clone(),
                        source,
                    }
                })?;
                Ok(RegexRule {
                    name: definition.name,
                    regex,
                    device: definition.device,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(RegexRuleSet { rules })
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content, &path.display().to_string())
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_yaml_str(EMBEDDED_REGEXES, "embedded regexes.yaml")
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluates the rules in order against a normalized user agent. The
    /// first matching rule decides.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError` when the matching rule's device template cannot
    /// be expanded.
    pub fn find(&self, normalized: &str) -> Result<MatchOutcome, ResolveError> {
        for rule in &self.rules {
            let Some(captures) = rule.regex.captures(normalized) else {
                continue;
            };
            let key = expand_device(rule, &captures)?;
            log::debug!("Rule \"{}\" matched \"{}\" as \"{}\"", rule.name, normalized, key);

            let lowered = key.to_lowercase();
            return Ok(if SPECIAL_DEVICE_CATEGORIES.contains(&lowered.as_str()) {
                MatchOutcome::Category {
                    rule: rule.name.clone(),
                    key: lowered,
                }
            } else {
                MatchOutcome::Device {
                    rule: rule.name.clone(),
                    key,
                }
            });
        }
        Ok(MatchOutcome::NoMatch)
    }
}

/// `$$`, `${name}` and `$name` references, read the way
/// [`Captures::expand`] reads them.
static GROUP_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\$|\{([^}]*)\}|([0-9A-Za-z_]+))").unwrap_or_else(|e| {
        panic!("Failed to compile group reference pattern: {e}. This is a programming error.")
    })
});

/// Expands the rule's device template with [`Captures::expand`]. Every
/// referenced group must have participated in the match.
fn expand_device(rule: &RegexRule, captures: &Captures<'_>) -> Result<String, ResolveError> {
    for reference in GROUP_REFERENCE.captures_iter(&rule.device) {
        let Some(group) = reference.get(1).or_else(|| reference.get(2)) else {
            continue;
        };
        let group = group.as_str();
        let captured = match group.parse::<usize>() {
            Ok(index) => captures.get(index),
            Err(_) => captures.name(group),
        };
        if captured.is_none() {
            return Err(ResolveError::MissingCapture {
                rule: rule.name.clone(),
                group: group.to_string(),
            });
        }
    }

    let mut expanded = String::with_capacity(rule.device.len());
    captures.expand(&rule.device, &mut expanded);

    let key = expanded.trim().to_string();
    if key.is_empty() {
        return Err(ResolveError::EmptyDeviceKey {
            rule: rule.name.clone(),
        });
    }
    Ok(key)
}

/// Loads the process-wide rule set. Later calls return the set loaded first.
///
/// # Errors
///
/// Returns `ConfigError` when the rule file is unreadable, malformed, has no
/// `regexes` list or contains an invalid pattern.
pub fn init_regexes(path: Option<&Path>) -> Result<&'static RegexRuleSet, ConfigError> {
    if let Some(rules) = REGEXES.get() {
        return Ok(rules);
    }
    let rules = match path {
        Some(path) => RegexRuleSet::from_path(path)?,
        None => RegexRuleSet::embedded()?,
    };
    Ok(REGEXES.get_or_init(|| rules))
}
