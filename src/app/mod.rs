//! Run-level helpers shared by the copy and rewrite pipelines.
//!
//! Stage progress logging and final statistics printing.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::{log_progress, log_stage, Stage};
pub use statistics::{print_processing_statistics, print_run_summary};
