//! Run reporting: structured log events and the final [`RunReport`].
//!
//! Two event shapes are emitted distinctly from plain progress messages:
//!
//! - **Per-file timing**, when each outcome is recorded: `info`
//!   "Operation completed" (or "Operation failed" for a failed file), or
//!   `warn` "Slow operation detected" once the duration exceeds the slow
//!   threshold.
//! - **Batch summary**, once at the end: `info` "Batch processing completed"
//!   with totals, success rate, average duration and wall-clock time.

use crate::stats::{FileOutcome, RunStatistics};
use serde::Serialize;
use std::path::Path;

/// Default slow-operation threshold.
pub const SLOW_OPERATION_MS: u64 = 1000;

const OPERATION: &str = "process_file";

/// Everything a finished (or cancelled) run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub statistics: RunStatistics,
    pub success_rate: f64,
    /// Wall-clock time from start of the run to the summary.
    pub elapsed_ms: f64,
    /// True when the run stopped early on request.
    pub cancelled: bool,
    /// Per-file outcomes, in processing order.
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new(
        statistics: RunStatistics,
        outcomes: Vec<FileOutcome>,
        elapsed_ms: f64,
        cancelled: bool,
    ) -> Self {
        Self {
            success_rate: statistics.success_rate(),
            statistics,
            elapsed_ms,
            cancelled,
            outcomes,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded)
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}

pub fn is_slow(duration_ms: f64, threshold_ms: u64) -> bool {
    duration_ms > threshold_ms as f64
}

/// Emit the timing event for one outcome. Returns whether it was slow.
pub fn log_file_timing(outcome: &FileOutcome, threshold_ms: u64) -> bool {
    let duration = format!("{:.2}ms", outcome.duration_ms);
    let slow = is_slow(outcome.duration_ms, threshold_ms);
    if slow {
        tracing::warn!(
            operation = OPERATION,
            file = %outcome.filename,
            duration_ms = %duration,
            succeeded = outcome.succeeded,
            "Slow operation detected"
        );
    } else if outcome.succeeded {
        tracing::info!(
            operation = OPERATION,
            file = %outcome.filename,
            duration_ms = %duration,
            succeeded = true,
            "Operation completed"
        );
    } else {
        tracing::info!(
            operation = OPERATION,
            file = %outcome.filename,
            duration_ms = %duration,
            succeeded = false,
            "Operation failed"
        );
    }
    slow
}

/// Emit the batch summary event.
pub fn log_batch_summary(report: &RunReport) {
    let stats = &report.statistics;
    tracing::info!(
        total_files = stats.total_files,
        processed = stats.processed_count,
        errors = stats.error_count,
        success_rate = %format!("{:.1}%", report.success_rate),
        avg_processing_ms = %format!("{:.2}ms", stats.average_duration_ms),
        elapsed_ms = %format!("{:.2}ms", report.elapsed_ms),
        cancelled = report.cancelled,
        "Batch processing completed"
    );
}
