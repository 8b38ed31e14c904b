//! Error type definitions.
//!
//! This module defines the error, warning, and info types used throughout the
//! ingestion and rewrite pipeline. Recoverable conditions (lookup misses,
//! malformed entries, resolver failures) are plain values that callers turn
//! into sentinels; corpus and configuration errors are fatal.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A lookup in one of the static tables (companies, devices, categories) missed.
///
/// Always recovered locally: the caller substitutes the "unknown" sentinel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No record is registered under the key.
    #[error("no {kind} found for key \"{key}\"")]
    NotFound {
        /// Table that was searched ("company", "device").
        kind: &'static str,
        /// Key that was looked up.
        key: String,
    },
}

impl LookupError {
    pub(crate) fn company(key: &str) -> Self {
        LookupError::NotFound {
            kind: "company",
            key: key.to_string(),
        }
    }

    pub(crate) fn device(key: &str) -> Self {
        LookupError::NotFound {
            kind: "device",
            key: key.to_string(),
        }
    }
}

/// A source file or entry could not be read.
///
/// Sources log these and skip the offending file or entry.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Reading the file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON.
    #[error("failed to parse JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file content is not valid YAML.
    #[error("failed to parse YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The file parsed but an entry does not have the expected shape.
    #[error("malformed entry in {path}: {reason}")]
    MalformedEntry { path: PathBuf, reason: String },
}

/// A regex rule matched but its device key could not be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The device template references a capture group the pattern did not capture.
    #[error("rule \"{rule}\" references missing capture group \"{group}\"")]
    MissingCapture { rule: String, group: String },

    /// The expanded device key is empty.
    #[error("rule \"{rule}\" produced an empty device key")]
    EmptyDeviceKey { rule: String },
}

/// Errors while replacing the corpus on disk. Always fatal for the run.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Deleting a stale fixture failed.
    #[error("failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Traversing the target directory failed.
    #[error("failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Writing a fixture, stub, or CI file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a template failed.
    #[error("failed to read template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a fixture failed.
    #[error("failed to serialize fixtures for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration errors. Fatal at startup, never retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The regex definition file has no usable `regexes` list.
    #[error("no regexes are defined in {0}")]
    MissingRegexes(String),

    /// A regex rule does not compile.
    #[error("invalid regex in rule \"{rule}\": {source}")]
    InvalidRegex {
        rule: String,
        #[source]
        source: regex::Error,
    },

    /// A data file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file could not be parsed.
    #[error("failed to parse {origin}: {reason}")]
    Parse { origin: String, reason: String },
}

/// Failure conditions counted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// The fallback resolver hit an unexpected error while matching.
    RegexResolution,
    /// A category lookup failed after a special-category regex match.
    CategoryLookup,
}

/// Missing optional data worth tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants end with "Miss"
pub enum WarningType {
    /// A device key matched by a regex rule was not in the device table.
    DeviceLookupMiss,
    /// The detector had no result for a header.
    DetectorMiss,
}

/// Informational metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A header string was already in the pool.
    DuplicateHeader,
    /// A result shared its signature with an earlier one.
    DuplicateSignature,
    /// The fallback resolver found a device.
    RegexResolved,
    /// No regex rule matched.
    RegexUnresolved,
    /// A generic device name was replaced with the "not found via regexes" marker.
    RegexNotFoundMarker,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::RegexResolution => "Regex resolution error",
            ErrorType::CategoryLookup => "Category lookup failed",
        }
    }
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::DeviceLookupMiss => "Device lookup miss",
            WarningType::DetectorMiss => "No detector result",
        }
    }
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::DuplicateHeader => "Duplicate header string",
            InfoType::DuplicateSignature => "Duplicate signature",
            InfoType::RegexResolved => "Device resolved via regexes",
            InfoType::RegexUnresolved => "No regex matched",
            InfoType::RegexNotFoundMarker => "Generic device marked as not found",
        }
    }
}
