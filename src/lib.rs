//! # Mockup Batch
//!
//! Batch-converts a directory of images into framed presentation mockups.
//! Each source is fitted inside a named template's content box (never
//! enlarged), centered on a solid white canvas of the template's exact size,
//! re-encoded, and written as `mockup_<name>.<format>`.
//!
//! # Architecture: One Sequential Run
//!
//! ```text
//! ensure output dir → discover images → for each file: validate → fit → pad → encode
//!                                                      └── failure: log, count, continue
//!                   → statistics → summary event → report
//! ```
//!
//! Directory-level failures (output directory cannot be created, input
//! directory cannot be listed) end the run. A file that fails for any reason
//! is logged and counted, and the run moves on: one corrupt input never
//! aborts a batch.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`templates`] | Fixed registry of canvas templates with a `default` fallback |
//! | [`validate`] | Format, file-size and minimum-dimension checks producing a verdict |
//! | [`scan`] | Lists the input directory, keeping supported image files in listing order |
//! | [`imaging`] | Fit-inside geometry, the backend trait, and the `image`-crate backend |
//! | [`process`] | The batch runner state machine, cancellation, progress events |
//! | [`stats`] | Per-file outcomes folded into run statistics |
//! | [`report`] | Slow-operation and batch-summary log events, JSON run report |
//! | [`config`] | Layered `mockup.toml` + CLI configuration, validated once |
//! | [`logging`] | Log file and console subscriber setup |
//! | [`signal`] | Ctrl-C to cooperative cancellation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Validation Is a Gate
//!
//! A file failing any validation check is skipped and counted as an error,
//! with the verdict's messages as the error detail. Setting
//! `validation.enforce = false` turns the gate advisory: the verdict is
//! logged and the file is transformed anyway.
//!
//! ## Exact Canvas Size
//!
//! The fitted image is centered on a canvas of exactly the template's size.
//! When the image fills the content box in one direction, the margin on that
//! axis equals the template's padding; small images keep their native size
//! and get wider margins.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, Lanczos3 resampling and encoding all use the `image` crate, so
//! the binary has no system dependencies.

pub mod config;
pub mod imaging;
pub mod logging;
pub mod output;
pub mod process;
pub mod report;
pub mod scan;
pub mod signal;
pub mod stats;
pub mod templates;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
