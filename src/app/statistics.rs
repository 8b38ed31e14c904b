//! Run summary and statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};

/// Logs the one-line summary of a run: how many tests are new and how many
/// unique tests the corpus holds afterwards.
pub fn print_run_summary(label: &str, new_tests: usize, total_tests: usize, elapsed_seconds: f64) {
    info!(
        "{}: {} new test{}, {} unique test{} available ({:.1}s)",
        label,
        new_tests,
        if new_tests == 1 { "" } else { "s" },
        total_tests,
        if total_tests == 1 { "" } else { "s" },
        elapsed_seconds
    );
}

/// Prints error, warning, and info statistics to the log.
pub fn print_processing_statistics(stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    let total_warnings = stats.total_warnings();
    let total_info = stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}
