//! Structured versions with precision-controlled rendering.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Precision used when rendering a [`Version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionFormat {
    /// Every component plus any suffix.
    Full,
    /// Major and minor only.
    IgnoreMicro,
    /// Major only.
    IgnoreMinor,
}

/// A dotted version such as `90.0.4430.85` or `10_15_7`.
///
/// Components keep the digit strings they were parsed from; comparison is
/// numeric. A version without components is the unknown version, rendered
/// as `"0"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Version {
    components: Vec<String>,
    suffix: Option<String>,
}

impl Version {
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Parses the leading numeric part of `input`. Never fails: input without
    /// a leading number yields the unknown version.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim().trim_start_matches(['v', 'V']);
        let mut components = Vec::new();
        let mut rest = trimmed;

        loop {
            let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if digits == 0 {
                break;
            }
            components.push(rest[..digits].to_string());
            rest = &rest[digits..];

            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some('.' | '_'), Some(c)) if c.is_ascii_digit() => rest = &rest[1..],
                _ => break,
            }
        }

        if components.is_empty() {
            return Self::unknown();
        }

        let suffix = rest.trim();
        Version {
            components,
            suffix: (!suffix.is_empty()).then(|| suffix.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.components.is_empty()
    }

    pub fn major(&self) -> Option<&str> {
        self.components.first().map(String::as_str)
    }

    pub fn minor(&self) -> Option<&str> {
        self.components.get(1).map(String::as_str)
    }

    pub fn micro(&self) -> Option<&str> {
        self.components.get(2).map(String::as_str)
    }

    /// Renders the version at the requested precision. Components that were
    /// never present are not invented.
    pub fn format(&self, format: VersionFormat) -> String {
        if self.is_unknown() {
            return "0".to_string();
        }
        let take = match format {
            VersionFormat::Full => self.components.len(),
            VersionFormat::IgnoreMicro => 2,
            VersionFormat::IgnoreMinor => 1,
        };
        let mut out = self
            .components
            .iter()
            .take(take)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(".");
        if format == VersionFormat::Full {
            if let Some(suffix) = &self.suffix {
                out.push_str(suffix);
            }
        }
        out
    }

    fn numeric(&self, index: usize) -> u64 {
        self.components
            .get(index)
            .and_then(|c| c.parse().ok())
            .unwrap_or(0)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            match self.numeric(i).cmp(&other.numeric(i)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        // A pre-release suffix sorts before the plain release
        match (&self.suffix, &other.suffix) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(VersionFormat::Full))
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Version::parse(&value)
    }
}

impl From<Version> for String {
    fn from(value: Version) -> Self {
        value.format(VersionFormat::Full)
    }
}
