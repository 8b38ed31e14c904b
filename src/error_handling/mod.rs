//! Error handling and run statistics.
//!
//! This module provides:
//! - Typed errors for each failure class of the pipeline
//! - Run statistics (errors, warnings, info metrics)
//!
//! Failure classes:
//! - **Recoverable**: lookup misses, resolver errors, detector misses.
//!   These are logged, counted and replaced with sentinel values.
//! - **Fatal**: corpus I/O and configuration errors. These abort the run.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{
    ConfigError, CorpusError, ErrorType, InfoType, InitializationError, LookupError,
    ResolveError, SourceError, WarningType,
};
