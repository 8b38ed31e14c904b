//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (chunk sizes, template tokens, default paths)
//! - The library `Config` and the CLI option types that populate it

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Command, Config, LogFormat, LogLevel, Opt, PathArgs};
