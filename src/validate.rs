//! Input image validation.
//!
//! Three independent checks decide whether a source image is fit for a
//! mockup: the file extension, the on-disk size, and the pixel dimensions.
//! None of them raise; an unreadable file simply fails the check. The
//! resulting [`ValidationVerdict`] carries human-readable messages in a fixed
//! order (format, size, dimensions) for display.

use crate::imaging::ImageBackend;
use serde::Serialize;
use std::path::Path;

/// Extensions (lowercase, without the dot) accepted as input images.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Whether a file name ends in a supported image extension, ignoring case.
///
/// Names without an extension (including dotfiles like `.png`) are rejected.
pub fn is_valid_image_format(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// Limits applied by [`ImageValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Largest accepted file, in bytes.
    pub max_file_size: u64,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_file_size: 50 * BYTES_PER_MIB,
            min_width: 100,
            min_height: 100,
        }
    }
}

/// Outcome of validating one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationVerdict {
    pub format_ok: bool,
    pub size_ok: bool,
    pub dimensions_ok: bool,
    pub errors: Vec<String>,
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        self.format_ok && self.size_ok && self.dimensions_ok
    }
}

/// Checks source images against configured limits.
#[derive(Debug, Clone, Default)]
pub struct ImageValidator {
    config: ValidatorConfig,
}

impl ImageValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// True when the file can be stat'ed and is no larger than the limit.
    pub fn validate_file_size(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.len() <= self.config.max_file_size)
            .unwrap_or(false)
    }

    /// True when the image header decodes and both edges meet the minimum.
    pub fn validate_dimensions(&self, backend: &impl ImageBackend, path: &Path) -> bool {
        backend
            .identify(path)
            .map(|dims| {
                dims.width >= self.config.min_width && dims.height >= self.config.min_height
            })
            .unwrap_or(false)
    }

    /// Run all three checks against `path`.
    pub fn validate(&self, backend: &impl ImageBackend, path: &Path) -> ValidationVerdict {
        let format_ok = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_valid_image_format);
        let size_ok = self.validate_file_size(path);
        let dimensions_ok = self.validate_dimensions(backend, path);

        ValidationVerdict {
            format_ok,
            size_ok,
            dimensions_ok,
            errors: self.validation_errors(format_ok, size_ok, dimensions_ok),
        }
    }

    /// Messages for each failed check, in format → size → dimensions order.
    pub fn validation_errors(
        &self,
        format_ok: bool,
        size_ok: bool,
        dimensions_ok: bool,
    ) -> Vec<String> {
        let mut errors = Vec::new();

        if !format_ok {
            let supported: Vec<String> = SUPPORTED_EXTENSIONS
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect();
            errors.push(format!(
                "Unsupported format. Supported: {}",
                supported.join(", ")
            ));
        }

        if !size_ok {
            errors.push(format!(
                "File too large. Maximum size: {}MB",
                format_mib(self.config.max_file_size)
            ));
        }

        if !dimensions_ok {
            errors.push(format!(
                "Image too small. Minimum: {}x{}px",
                self.config.min_width, self.config.min_height
            ));
        }

        errors
    }
}

/// Render a byte count in MiB, without decimals when it divides evenly.
fn format_mib(bytes: u64) -> String {
    if bytes % BYTES_PER_MIB == 0 {
        (bytes / BYTES_PER_MIB).to_string()
    } else {
        format!("{:.2}", bytes as f64 / BYTES_PER_MIB as f64)
    }
}
