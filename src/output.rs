//! CLI output formatting.
//!
//! Console output is for people; the log file is for machines. Lines here
//! lead with the file's position in the run and its name, with detail
//! (output file, error) as indented context.
//!
//! # Output Format
//!
//! ## Run
//!
//! ```text
//! Processing 3 images: photos → output
//! [001/003] a.jpg → mockup_a.png (41ms)
//! [002/003] b.png FAILED
//!     validation failed: Image too small. Minimum: 100x100px
//! [003/003] c.webp → mockup_c.png (1204ms, slow)
//!
//! Processed 2 of 3 images (66.7%), 1 failed
//!     Average: 622.50ms per image
//!     Elapsed: 1.31s
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 a.jpg: ok
//! 002 b.png: invalid
//!     Image too small. Minimum: 100x100px
//! 2 images, 1 valid, 1 invalid
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::process::{FileVerdict, RunEvent};
use crate::report::RunReport;
use crate::templates::TEMPLATES;
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Milliseconds below one second, seconds with two decimals above.
fn format_elapsed(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{:.0}ms", ms)
    } else {
        format!("{:.2}s", ms / 1000.0)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Run progress
// ============================================================================

/// Format a single run progress event as display lines.
pub fn format_run_event(event: &RunEvent) -> Vec<String> {
    match event {
        RunEvent::Started {
            input_dir,
            output_dir,
            total,
        } => vec![format!(
            "Processing {}: {} \u{2192} {}",
            plural(*total, "image"),
            input_dir.display(),
            output_dir.display()
        )],
        RunEvent::FileFinished {
            index,
            total,
            outcome,
            output,
            slow,
        } => {
            let position = format!("[{}/{}]", format_index(*index), format_index(*total));
            match (outcome.succeeded, output) {
                (true, Some(output)) => {
                    let timing = if *slow {
                        format!("{}, slow", format_elapsed(outcome.duration_ms))
                    } else {
                        format_elapsed(outcome.duration_ms)
                    };
                    vec![format!(
                        "{} {} \u{2192} {} ({})",
                        position,
                        outcome.filename,
                        file_name(output),
                        timing
                    )]
                }
                _ => {
                    let mut lines = vec![format!("{} {} FAILED", position, outcome.filename)];
                    if let Some(error) = &outcome.error_message {
                        lines.push(format!("{}{}", indent(1), error));
                    }
                    lines
                }
            }
        }
        RunEvent::Cancelled { remaining } => {
            vec![format!("Cancelled: {} not processed", plural(*remaining, "image"))]
        }
    }
}

/// Format the end-of-run summary.
pub fn format_summary(report: &RunReport) -> Vec<String> {
    let stats = &report.statistics;
    let mut lines = vec![String::new()];

    if stats.total_files == 0 {
        lines.push("No images found".to_string());
        return lines;
    }

    let mut headline = format!(
        "Processed {} of {} ({:.1}%)",
        stats.processed_count,
        plural(stats.total_files, "image"),
        report.success_rate
    );
    if stats.error_count > 0 {
        headline.push_str(&format!(", {} failed", stats.error_count));
    }
    if report.cancelled {
        headline.push_str(&format!(", {} skipped", stats.skipped_count()));
    }
    lines.push(headline);
    lines.push(format!(
        "{}Average: {:.2}ms per image",
        indent(1),
        stats.average_duration_ms
    ));
    lines.push(format!("{}Elapsed: {}", indent(1), format_elapsed(report.elapsed_ms)));
    lines
}

/// Print a run event to stdout.
pub fn print_run_event(event: &RunEvent) {
    for line in format_run_event(event) {
        println!("{}", line);
    }
}

/// Print the run summary to stdout.
pub fn print_summary(report: &RunReport) {
    for line in format_summary(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format validation verdicts for the `check` command.
pub fn format_check(verdicts: &[FileVerdict]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, item) in verdicts.iter().enumerate() {
        let status = if item.verdict.is_valid() { "ok" } else { "invalid" };
        lines.push(format!("{} {}: {}", format_index(i + 1), item.filename, status));
        for error in &item.verdict.errors {
            lines.push(format!("{}{}", indent(1), error));
        }
    }

    let valid = verdicts.iter().filter(|v| v.verdict.is_valid()).count();
    lines.push(format!(
        "{}, {} valid, {} invalid",
        plural(verdicts.len(), "image"),
        valid,
        verdicts.len() - valid
    ));
    lines
}

pub fn print_check(verdicts: &[FileVerdict]) {
    for line in format_check(verdicts) {
        println!("{}", line);
    }
}

// ============================================================================
// Templates
// ============================================================================

/// Format the template registry, marking the fallback.
pub fn format_templates() -> Vec<String> {
    TEMPLATES
        .iter()
        .map(|(name, t)| {
            let content = t
                .content_box()
                .map(|(w, h)| format!("{w}x{h}"))
                .unwrap_or_else(|_| "none".to_string());
            let marker = if *name == crate::templates::DEFAULT_TEMPLATE {
                " (fallback)"
            } else {
                ""
            };
            format!(
                "{:<8} {:>9}  padding {:<4} content {}{}",
                name,
                format!("{}x{}", t.width, t.height),
                t.padding,
                content,
                marker
            )
        })
        .collect()
}

pub fn print_templates() {
    for line in format_templates() {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
