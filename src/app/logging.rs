//! Stage progress logging.

use log::info;
use std::time::Instant;

/// A pipeline stage, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Reading,
    Deduping,
    Mapping,
    Writing,
}

impl Stage {
    fn label(self) -> &'static str {
        match self {
            Stage::Reading => "reading",
            Stage::Deduping => "deduping",
            Stage::Mapping => "mapping",
            Stage::Writing => "writing",
        }
    }
}

/// Logs the start of a stage.
pub fn log_stage(stage: Stage, detail: &str) {
    info!("{} {} ...", stage.label(), detail);
}

/// Logs how many items a stage handled and at what rate.
pub fn log_progress(stage: Stage, start_time: Instant, items: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        items as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "{}: {} items in {:.2} seconds (~{:.2} items/sec)",
        stage.label(),
        items,
        elapsed_secs,
        rate
    );
}
