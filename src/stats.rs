//! Per-run statistics.
//!
//! [`RunStatistics`] is a pure fold over [`FileOutcome`]s: the batch runner
//! records each outcome as it happens, then [`RunStatistics::finalize`]
//! computes the average. Only successful files contribute a duration.
//! Empty runs report a success rate and average of zero rather than NaN.

use serde::Serialize;

/// What happened to one discovered file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    pub filename: String,
    pub succeeded: bool,
    pub duration_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl FileOutcome {
    pub fn success(filename: impl Into<String>, duration_ms: f64) -> Self {
        Self {
            filename: filename.into(),
            succeeded: true,
            duration_ms,
            error_message: None,
        }
    }

    pub fn failure(filename: impl Into<String>, duration_ms: f64, error: impl ToString) -> Self {
        Self {
            filename: filename.into(),
            succeeded: false,
            duration_ms,
            error_message: Some(error.to_string()),
        }
    }
}

/// Aggregate counters for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStatistics {
    /// Files discovered; fixed when iteration starts.
    pub total_files: usize,
    pub processed_count: usize,
    pub error_count: usize,
    /// Durations of successful files, in processing order.
    pub durations: Vec<f64>,
    /// Mean of `durations`; zero until [`finalize`](Self::finalize).
    pub average_duration_ms: f64,
}

impl RunStatistics {
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            processed_count: 0,
            error_count: 0,
            durations: Vec::new(),
            average_duration_ms: 0.0,
        }
    }

    /// Fold one outcome into the counters.
    pub fn record(mut self, outcome: &FileOutcome) -> Self {
        if outcome.succeeded {
            self.processed_count += 1;
            self.durations.push(outcome.duration_ms);
        } else {
            self.error_count += 1;
        }
        self
    }

    /// Compute the average duration over successful files.
    pub fn finalize(mut self) -> Self {
        self.average_duration_ms = if self.durations.is_empty() {
            0.0
        } else {
            self.durations.iter().sum::<f64>() / self.durations.len() as f64
        };
        self
    }

    /// Build finalized statistics from a complete set of outcomes.
    pub fn from_outcomes<'a>(
        total_files: usize,
        outcomes: impl IntoIterator<Item = &'a FileOutcome>,
    ) -> Self {
        outcomes
            .into_iter()
            .fold(Self::new(total_files), Self::record)
            .finalize()
    }

    /// Percentage of discovered files that produced a mockup.
    pub fn success_rate(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            self.processed_count as f64 / self.total_files as f64 * 100.0
        }
    }

    /// Files discovered but never attempted (only non-zero after cancellation).
    pub fn skipped_count(&self) -> usize {
        self.total_files
            .saturating_sub(self.processed_count + self.error_count)
    }
}
