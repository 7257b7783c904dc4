//! Batch processing: the run loop.
//!
//! A [`BatchRunner`] owns one run over one input directory:
//!
//! ```text
//! Idle → EnsuringOutputDir → Discovering → Iterating → Finalizing → Done
//!              │                  │
//!              └──────────────────┴──→ Aborted
//! ```
//!
//! Only directory-level failures abort: the output directory cannot be
//! created, or the input directory cannot be listed. Every per-file failure
//! is logged, counted, and the loop moves on to the next file. Files are
//! processed strictly in discovery order, one at a time, with no retries.
//! Two sources that map to the same output name (`a.jpg` and `a.png`) never
//! overwrite each other: the later one fails with
//! [`TransformError::OutputCollision`].
//!
//! ## Progress events
//!
//! When a channel is attached with [`BatchRunner::with_events`], the runner
//! sends a [`RunEvent`] as each step completes. The sender is dropped when
//! [`run`](BatchRunner::run) returns, so a printer thread iterating the
//! receiver terminates on its own.
//!
//! ## Cancellation
//!
//! A [`CancellationToken`] is checked between files, never mid-transform.
//! A cancelled run still finalizes: the report carries the partial
//! statistics and `cancelled: true`.

use crate::imaging::{ImageBackend, OutputFormat, TransformError, TransformPolicy, output_path};
use crate::report::{self, RunReport};
use crate::scan::{self, ScanError};
use crate::stats::{FileOutcome, RunStatistics};
use crate::validate::{ImageValidator, ValidationVerdict};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::time::Instant;
use thiserror::Error;

/// Run-level failures. Either one ends the run before any file is touched.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("cannot create output directory {}: {source}", path.display())]
    OutputDirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    DirectoryUnreadable(#[from] ScanError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    EnsuringOutputDir,
    Discovering,
    Iterating,
    Finalizing,
    Done,
    Aborted,
}

/// Shared stop flag, checked by the runner between files.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Progress reported while a run executes.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Discovery finished; `total` is fixed for the rest of the run.
    Started {
        input_dir: PathBuf,
        output_dir: PathBuf,
        total: usize,
    },
    /// One file finished, successfully or not. `index` is 1-based.
    FileFinished {
        index: usize,
        total: usize,
        outcome: FileOutcome,
        output: Option<PathBuf>,
        slow: bool,
    },
    /// The run stopped early; `remaining` files were never attempted.
    Cancelled { remaining: usize },
}

/// Everything the runner needs besides the backend.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub policy: TransformPolicy,
    /// Per-file durations above this are logged as slow.
    pub slow_threshold_ms: u64,
}

pub struct BatchRunner<B: ImageBackend> {
    options: BatchOptions,
    backend: B,
    state: RunState,
    events: Option<Sender<RunEvent>>,
    cancel: CancellationToken,
}

impl<B: ImageBackend> BatchRunner<B> {
    pub fn new(options: BatchOptions, backend: B) -> Self {
        Self {
            options,
            backend,
            state: RunState::Idle,
            events: None,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_events(mut self, events: Sender<RunEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Execute the run. Per-file failures are inside the report; only
    /// directory-level failures come back as `Err`.
    pub fn run(&mut self) -> Result<RunReport, RunError> {
        let result = self.run_inner();
        if result.is_err() {
            self.transition(RunState::Aborted);
        }
        self.events = None;
        result
    }

    fn run_inner(&mut self) -> Result<RunReport, RunError> {
        let started = Instant::now();

        self.transition(RunState::EnsuringOutputDir);
        let output_dir = self.options.output_dir.clone();
        std::fs::create_dir_all(&output_dir).map_err(|source| {
            RunError::OutputDirUnavailable {
                path: output_dir.clone(),
                source,
            }
        })?;

        self.transition(RunState::Discovering);
        let files = scan::list_images(&self.options.input_dir)?;
        let total = files.len();

        self.transition(RunState::Iterating);
        tracing::info!(
            input = %self.options.input_dir.display(),
            output = %output_dir.display(),
            total_files = total,
            "Starting batch"
        );
        let policy = &self.options.policy;
        if OutputFormat::from_name(&policy.format).is_some_and(|f| !f.is_lossy()) {
            tracing::debug!(
                format = %policy.format,
                quality = policy.quality.value(),
                "Quality setting is ignored by lossless format"
            );
        }
        self.emit(RunEvent::Started {
            input_dir: self.options.input_dir.clone(),
            output_dir: output_dir.clone(),
            total,
        });

        let mut stats = RunStatistics::new(total);
        let mut outcomes = Vec::with_capacity(total);
        let mut cancelled = false;
        // Output path → source that produced it
        let mut written: HashMap<PathBuf, String> = HashMap::new();

        for (i, filename) in files.iter().enumerate() {
            if self.cancel.is_cancelled() {
                let remaining = total - i;
                tracing::warn!(remaining, "Run cancelled, skipping remaining files");
                self.emit(RunEvent::Cancelled { remaining });
                cancelled = true;
                break;
            }

            let (outcome, output) = self.process_file(filename, &output_dir, &mut written);
            let slow = report::log_file_timing(&outcome, self.options.slow_threshold_ms);
            stats = stats.record(&outcome);
            self.emit(RunEvent::FileFinished {
                index: i + 1,
                total,
                outcome: outcome.clone(),
                output,
                slow,
            });
            outcomes.push(outcome);
        }

        self.transition(RunState::Finalizing);
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let report = RunReport::new(stats.finalize(), outcomes, elapsed_ms, cancelled);
        report::log_batch_summary(&report);

        self.transition(RunState::Done);
        Ok(report)
    }

    /// Transform one file, catching and logging any failure.
    fn process_file(
        &self,
        filename: &str,
        output_dir: &Path,
        written: &mut HashMap<PathBuf, String>,
    ) -> (FileOutcome, Option<PathBuf>) {
        let source = self.options.input_dir.join(filename);
        let target = output_path(output_dir, &source, &self.options.policy.format);
        let start = Instant::now();
        let result = match written.get(&target) {
            Some(first) => Err(TransformError::OutputCollision {
                path: target,
                first: first.clone(),
            }),
            None => self
                .options
                .policy
                .transform(&self.backend, &source, output_dir),
        };
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        match result {
            Ok(output) => {
                written.insert(output.clone(), filename.to_string());
                (FileOutcome::success(filename, duration_ms), Some(output))
            }
            Err(err) => {
                tracing::error!(file = %filename, error = %err, "Failed to process file");
                (FileOutcome::failure(filename, duration_ms, &err), None)
            }
        }
    }

    fn transition(&mut self, next: RunState) {
        tracing::debug!(from = ?self.state, to = ?next, "Run state change");
        self.state = next;
    }

    fn emit(&self, event: RunEvent) {
        if let Some(tx) = &self.events {
            tx.send(event).ok();
        }
    }
}

/// Verdict for one discovered file, as reported by `check`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileVerdict {
    pub filename: String,
    pub verdict: ValidationVerdict,
}

/// Discover and validate every image in `dir` without writing anything.
pub fn check_directory(
    backend: &impl ImageBackend,
    validator: &ImageValidator,
    dir: &Path,
) -> Result<Vec<FileVerdict>, ScanError> {
    let verdicts = scan::list_images(dir)?
        .into_iter()
        .map(|filename| {
            let verdict = validator.validate(backend, &dir.join(&filename));
            FileVerdict { filename, verdict }
        })
        .collect();
    Ok(verdicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::imaging::{
        BackendError, Dimensions, MockupParams, Quality, ValidationPolicy,
    };
    use crate::templates;
    use crate::validate::ImageValidator;
    use std::fs;
    use tempfile::TempDir;

    // =========================================================================
    // Fixtures
    // =========================================================================

    fn options(input: &Path, output: &Path) -> BatchOptions {
        BatchOptions {
            input_dir: input.to_path_buf(),
            output_dir: output.to_path_buf(),
            policy: TransformPolicy {
                template: templates::resolve("mobile"),
                format: "png".to_string(),
                quality: Quality::new(90),
                validator: ImageValidator::default(),
                validation: ValidationPolicy::Enforce,
            },
            slow_threshold_ms: report::SLOW_OPERATION_MS,
        }
    }

    /// Create stub files on disk; the mock backend supplies their dimensions.
    fn input_dir(names: &[&str]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for name in names {
            fs::write(tmp.path().join(name), b"stub").unwrap();
        }
        tmp
    }

    fn mock_for(names: &[&str]) -> MockBackend {
        let dims: Vec<(&str, u32, u32)> = names.iter().map(|n| (*n, 800, 600)).collect();
        MockBackend::with_dimensions(&dims)
    }

    /// Cancels the token as soon as the first render happens.
    struct CancelAfterFirst {
        inner: MockBackend,
        token: CancellationToken,
    }

    impl ImageBackend for CancelAfterFirst {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.inner.identify(path)
        }

        fn render_mockup(&self, params: &MockupParams) -> Result<(), BackendError> {
            self.token.cancel();
            self.inner.render_mockup(params)
        }
    }

    // =========================================================================
    // Run outcomes
    // =========================================================================

    #[test]
    fn empty_directory_completes_with_zero_statistics() {
        let input = input_dir(&[]);
        let out = TempDir::new().unwrap();
        let mut runner = BatchRunner::new(options(input.path(), out.path()), MockBackend::new());

        let report = runner.run().unwrap();

        assert_eq!(runner.state(), RunState::Done);
        assert_eq!(report.statistics.total_files, 0);
        assert_eq!(report.success_rate, 0.0);
        assert_eq!(report.statistics.average_duration_ms, 0.0);
        assert!(report.outcomes.is_empty());
        assert!(!report.cancelled);
    }

    #[test]
    fn all_valid_files_are_processed() {
        let names = ["a.jpg", "b.png", "c.webp"];
        let input = input_dir(&names);
        let out = TempDir::new().unwrap();
        let mut runner = BatchRunner::new(options(input.path(), out.path()), mock_for(&names));

        let report = runner.run().unwrap();

        assert_eq!(report.statistics.processed_count, 3);
        assert_eq!(report.statistics.error_count, 0);
        assert_eq!(report.success_rate, 100.0);
        assert_eq!(report.statistics.durations.len(), 3);
    }

    #[test]
    fn corrupt_file_does_not_stop_the_batch() {
        let names = ["one.png", "two.png", "bad.png", "three.png", "four.png"];
        let input = input_dir(&names);
        let out = TempDir::new().unwrap();
        let backend = mock_for(&names).fail_render("bad.png");
        let mut runner = BatchRunner::new(options(input.path(), out.path()), backend);

        let report = runner.run().unwrap();

        assert_eq!(report.statistics.total_files, 5);
        assert_eq!(report.statistics.processed_count, 4);
        assert_eq!(report.statistics.error_count, 1);

        // Every file was attempted, in discovery order
        let discovered = scan::list_images(input.path()).unwrap();
        let attempted: Vec<&str> = report.outcomes.iter().map(|o| o.filename.as_str()).collect();
        assert_eq!(attempted, discovered);
        assert_eq!(runner.backend().rendered_sources(), discovered);

        let failed: Vec<&FileOutcome> = report.failures().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].filename, "bad.png");
        assert!(failed[0].error_message.as_deref().unwrap().contains("bad.png"));
    }

    #[test]
    fn sources_sharing_a_stem_do_not_overwrite_each_other() {
        let names = ["a.png", "a.jpg", "b.png"];
        let input = input_dir(&names);
        let out = TempDir::new().unwrap();
        let mut runner = BatchRunner::new(options(input.path(), out.path()), mock_for(&names));

        let report = runner.run().unwrap();

        assert_eq!(report.statistics.total_files, 3);
        assert_eq!(report.statistics.processed_count, 2);
        assert_eq!(report.statistics.error_count, 1);

        // Whichever of the pair is listed first wins; the other is never rendered
        let rendered = runner.backend().rendered_sources();
        assert_eq!(rendered.len(), 2);
        assert!(rendered.contains(&"b.png".to_string()));
        let failure = report.failures().next().unwrap();
        assert!(failure.filename.starts_with("a."));
        assert!(!rendered.contains(&failure.filename));
        let message = failure.error_message.as_deref().unwrap();
        assert!(message.contains("mockup_a.png"), "{message}");
        assert!(message.contains("already written"), "{message}");
    }

    #[test]
    fn undersized_image_fails_validation_and_is_not_rendered() {
        let input = input_dir(&["a.jpg", "b.png"]);
        let out = TempDir::new().unwrap();
        let backend = MockBackend::with_dimensions(&[("a.jpg", 2000, 1500), ("b.png", 50, 50)]);
        let mut runner = BatchRunner::new(options(input.path(), out.path()), backend);

        let report = runner.run().unwrap();

        assert_eq!(report.statistics.processed_count, 1);
        assert_eq!(report.statistics.error_count, 1);
        assert_eq!(runner.backend().rendered_sources(), vec!["a.jpg"]);
        let failure = report.failures().next().unwrap();
        assert_eq!(failure.filename, "b.png");
        assert_eq!(
            failure.error_message.as_deref(),
            Some("validation failed: Image too small. Minimum: 100x100px")
        );
    }

    #[test]
    fn failed_durations_do_not_count_toward_average() {
        let names = ["ok.png", "bad.png"];
        let input = input_dir(&names);
        let out = TempDir::new().unwrap();
        let backend = mock_for(&names).fail_render("bad.png");
        let mut runner = BatchRunner::new(options(input.path(), out.path()), backend);

        let report = runner.run().unwrap();

        let ok = report.outcomes.iter().find(|o| o.succeeded).unwrap();
        assert_eq!(report.statistics.durations, vec![ok.duration_ms]);
        assert_eq!(report.statistics.average_duration_ms, ok.duration_ms);
    }

    #[test]
    fn repeated_runs_produce_identical_outputs_and_counts() {
        let names = ["a.png", "b.jpg", "bad.gif"];
        let input = input_dir(&names);
        let out = TempDir::new().unwrap();

        let run_once = || {
            let backend = mock_for(&names).fail_render("bad.gif");
            let mut runner = BatchRunner::new(options(input.path(), out.path()), backend);
            let report = runner.run().unwrap();
            let outputs: Vec<String> = runner
                .backend()
                .get_operations()
                .into_iter()
                .filter_map(|op| match op {
                    RecordedOp::Render { output, .. } => Some(output),
                    _ => None,
                })
                .collect();
            (report.statistics.processed_count, report.statistics.error_count, outputs)
        };

        let first = run_once();
        let second = run_once();
        assert_eq!(first, second);
        assert_eq!(first.0, 2);
        assert_eq!(first.1, 1);
    }

    #[test]
    fn existing_output_directory_is_reused() {
        let input = input_dir(&["a.png"]);
        let out = TempDir::new().unwrap();
        fs::write(out.path().join("keep.txt"), b"x").unwrap();
        let mut runner = BatchRunner::new(options(input.path(), out.path()), mock_for(&["a.png"]));

        runner.run().unwrap();
        assert!(out.path().join("keep.txt").exists());
    }

    #[test]
    fn missing_output_directory_is_created() {
        let input = input_dir(&[]);
        let out = TempDir::new().unwrap();
        let nested = out.path().join("deep/er/output");
        let mut runner = BatchRunner::new(options(input.path(), &nested), MockBackend::new());

        runner.run().unwrap();
        assert!(nested.is_dir());
    }

    // =========================================================================
    // Fatal errors
    // =========================================================================

    #[test]
    fn unreadable_input_directory_aborts() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out");
        let mut runner =
            BatchRunner::new(options(&tmp.path().join("absent"), &out), MockBackend::new());

        let err = runner.run().unwrap_err();

        assert!(matches!(err, RunError::DirectoryUnreadable(_)));
        assert_eq!(runner.state(), RunState::Aborted);
        assert!(runner.backend().get_operations().is_empty());
    }

    #[test]
    fn output_path_blocked_by_file_aborts() {
        let input = input_dir(&["a.png"]);
        let tmp = TempDir::new().unwrap();
        let blocked = tmp.path().join("output");
        fs::write(&blocked, b"not a directory").unwrap();
        let mut runner = BatchRunner::new(options(input.path(), &blocked), mock_for(&["a.png"]));

        let err = runner.run().unwrap_err();

        assert!(matches!(err, RunError::OutputDirUnavailable { .. }));
        assert_eq!(runner.state(), RunState::Aborted);
        assert!(runner.backend().get_operations().is_empty());
    }

    // =========================================================================
    // Cancellation
    // =========================================================================

    #[test]
    fn cancelled_before_start_attempts_nothing() {
        let names = ["a.png", "b.png"];
        let input = input_dir(&names);
        let out = TempDir::new().unwrap();
        let token = CancellationToken::new();
        token.cancel();
        let mut runner = BatchRunner::new(options(input.path(), out.path()), mock_for(&names))
            .with_cancellation(token);

        let report = runner.run().unwrap();

        assert!(report.cancelled);
        assert_eq!(runner.state(), RunState::Done);
        assert!(report.outcomes.is_empty());
        assert_eq!(report.statistics.total_files, 2);
        assert_eq!(report.statistics.skipped_count(), 2);
    }

    #[test]
    fn cancellation_takes_effect_between_files() {
        let names = ["a.png", "b.png", "c.png"];
        let input = input_dir(&names);
        let out = TempDir::new().unwrap();
        let token = CancellationToken::new();
        let backend = CancelAfterFirst {
            inner: mock_for(&names),
            token: token.clone(),
        };
        let mut runner =
            BatchRunner::new(options(input.path(), out.path()), backend).with_cancellation(token);

        let report = runner.run().unwrap();

        // The in-flight file completes; nothing after it starts
        assert!(report.cancelled);
        assert_eq!(report.outcomes.len(), 1);
        assert!(report.outcomes[0].succeeded);
        assert_eq!(runner.backend().inner.rendered_sources().len(), 1);
        assert_eq!(report.statistics.skipped_count(), 2);
    }

    // =========================================================================
    // Events and state
    // =========================================================================

    #[test]
    fn events_describe_the_run_in_order() {
        let names = ["a.png", "bad.png"];
        let input = input_dir(&names);
        let out = TempDir::new().unwrap();
        let backend = mock_for(&names).fail_render("bad.png");
        let (tx, rx) = std::sync::mpsc::channel();
        let mut runner =
            BatchRunner::new(options(input.path(), out.path()), backend).with_events(tx);

        let report = runner.run().unwrap();
        let events: Vec<RunEvent> = rx.iter().collect();

        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            RunEvent::Started {
                input_dir: input.path().to_path_buf(),
                output_dir: out.path().to_path_buf(),
                total: 2,
            }
        );
        for (i, event) in events[1..].iter().enumerate() {
            match event {
                RunEvent::FileFinished { index, total, outcome, output, .. } => {
                    assert_eq!(*index, i + 1);
                    assert_eq!(*total, 2);
                    assert_eq!(outcome, &report.outcomes[i]);
                    assert_eq!(output.is_some(), outcome.succeeded);
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }
    }

    #[test]
    fn cancelled_run_emits_cancelled_event() {
        let input = input_dir(&["a.png"]);
        let out = TempDir::new().unwrap();
        let token = CancellationToken::new();
        token.cancel();
        let (tx, rx) = std::sync::mpsc::channel();
        let mut runner = BatchRunner::new(options(input.path(), out.path()), mock_for(&["a.png"]))
            .with_events(tx)
            .with_cancellation(token);

        runner.run().unwrap();
        let events: Vec<RunEvent> = rx.iter().collect();
        assert_eq!(events.last(), Some(&RunEvent::Cancelled { remaining: 1 }));
    }

    #[test]
    fn runner_starts_idle() {
        let tmp = TempDir::new().unwrap();
        let runner = BatchRunner::new(options(tmp.path(), tmp.path()), MockBackend::new());
        assert_eq!(runner.state(), RunState::Idle);
    }

    #[test]
    fn run_logs_state_changes_and_summary() {
        let input = input_dir(&["a.png"]);
        let out = TempDir::new().unwrap();
        let mut runner = BatchRunner::new(options(input.path(), out.path()), mock_for(&["a.png"]));

        let (result, logs) = crate::test_helpers::capture_logs(|| runner.run());
        result.unwrap();

        for state in ["EnsuringOutputDir", "Discovering", "Iterating", "Finalizing", "Done"] {
            assert!(logs.contains(&format!("to={state}")), "missing {state}: {logs}");
        }
        assert!(logs.contains("Operation completed"), "{logs}");
        assert!(logs.contains("Quality setting is ignored by lossless format"), "{logs}");
        assert!(logs.contains("Batch processing completed"), "{logs}");
    }

    #[test]
    fn lossy_format_does_not_log_quality_note() {
        let input = input_dir(&["a.png"]);
        let out = TempDir::new().unwrap();
        let mut opts = options(input.path(), out.path());
        opts.policy.format = "jpg".to_string();
        let mut runner = BatchRunner::new(opts, mock_for(&["a.png"]));

        let (result, logs) = crate::test_helpers::capture_logs(|| runner.run());
        result.unwrap();

        assert!(!logs.contains("Quality setting is ignored"), "{logs}");
    }

    #[test]
    fn per_file_failure_is_logged_with_filename() {
        let input = input_dir(&["bad.png"]);
        let out = TempDir::new().unwrap();
        let backend = mock_for(&["bad.png"]).fail_render("bad.png");
        let mut runner = BatchRunner::new(options(input.path(), out.path()), backend);

        let (_, logs) = crate::test_helpers::capture_logs(|| runner.run());

        assert!(logs.contains("ERROR"), "{logs}");
        assert!(logs.contains("Failed to process file"), "{logs}");
        assert!(logs.contains("file=bad.png"), "{logs}");
    }

    // =========================================================================
    // Check
    // =========================================================================

    #[test]
    fn check_directory_validates_without_rendering() {
        let input = input_dir(&["a.jpg", "b.png", "notes.txt"]);
        let backend = MockBackend::with_dimensions(&[("a.jpg", 2000, 1500), ("b.png", 50, 50)]);

        let mut verdicts =
            check_directory(&backend, &ImageValidator::default(), input.path()).unwrap();
        verdicts.sort_by(|a, b| a.filename.cmp(&b.filename));

        assert_eq!(verdicts.len(), 2);
        assert!(verdicts[0].verdict.is_valid());
        assert!(!verdicts[1].verdict.is_valid());
        assert_eq!(verdicts[1].verdict.errors, vec!["Image too small. Minimum: 100x100px"]);
        assert!(backend.rendered_sources().is_empty());
    }

    #[test]
    fn check_directory_missing_input_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = check_directory(
            &MockBackend::new(),
            &ImageValidator::default(),
            &tmp.path().join("absent"),
        );
        assert!(matches!(result, Err(ScanError::DirectoryUnreadable { .. })));
    }
}
