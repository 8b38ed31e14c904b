//! Run statistics.
//!
//! Counts errors, warnings and informational events while a corpus run is in
//! progress. The pipeline is single-threaded, so counters are plain `Cell`s
//! behind a shared reference.

use std::cell::Cell;
use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// Per-run event counters.
///
/// Every variant of `ErrorType`, `WarningType` and `InfoType` is registered at
/// construction, so lookups never miss.
#[derive(Debug)]
pub struct ProcessingStats {
    errors: HashMap<ErrorType, Cell<usize>>,
    warnings: HashMap<WarningType, Cell<usize>>,
    info: HashMap<InfoType, Cell<usize>>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            errors: ErrorType::iter().map(|e| (e, Cell::new(0))).collect(),
            warnings: WarningType::iter().map(|w| (w, Cell::new(0))).collect(),
            info: InfoType::iter().map(|i| (i, Cell::new(0))).collect(),
        }
    }

    pub fn increment_error(&self, error: ErrorType) {
        bump(self.errors.get(&error));
    }

    pub fn increment_warning(&self, warning: WarningType) {
        bump(self.warnings.get(&warning));
    }

    pub fn increment_info(&self, info_type: InfoType) {
        bump(self.info.get(&info_type));
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).map(Cell::get).unwrap_or(0)
    }

    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(&warning).map(Cell::get).unwrap_or(0)
    }

    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info.get(&info_type).map(Cell::get).unwrap_or(0)
    }

    /// Total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }

    /// Total info count across all info types.
    pub fn total_info(&self) -> usize {
        InfoType::iter().map(|i| self.get_info_count(i)).sum()
    }
}

fn bump(counter: Option<&Cell<usize>>) {
    match counter {
        Some(c) => c.set(c.get() + 1),
        None => log::error!("Counter missing from ProcessingStats; initialization is incomplete"),
    }
}
