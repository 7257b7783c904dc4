//! High-level mockup operations.
//!
//! [`TransformPolicy`] turns one source image into one framed mockup:
//!
//! 1. Derive the content box from the template (`InvalidTemplate` if empty).
//! 2. Resolve the output encoder (`UnsupportedFormat`).
//! 3. Consult the [`ImageValidator`] (hard gate or advisory, see [`ValidationPolicy`]).
//! 4. Fit the source inside the content box without enlarging it.
//! 5. Center it on a solid white canvas of the template's exact size.
//! 6. Encode and write `mockup_<stem>.<format>` into the output directory.
//!
//! Geometry is decided here; the pixel work happens in the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{center_offset, fit_inside};
use super::params::{BACKGROUND, MockupParams, OutputFormat, Quality};
use crate::templates::{InvalidTemplate, Template};
use crate::validate::ImageValidator;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a single file could not be turned into a mockup.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error(transparent)]
    InvalidTemplate(#[from] InvalidTemplate),
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
    #[error("cannot read source {}: {reason}", path.display())]
    SourceUnreadable { path: PathBuf, reason: String },
    #[error("cannot write {}: {reason}", path.display())]
    WriteFailed { path: PathBuf, reason: String },
    #[error("{} was already written from {first} in this run", path.display())]
    OutputCollision { path: PathBuf, first: String },
}

impl TransformError {
    fn from_backend(err: BackendError, output: &Path) -> Self {
        match err {
            BackendError::Decode { path, reason } => Self::SourceUnreadable { path, reason },
            BackendError::Write { path, source } => Self::WriteFailed {
                path,
                reason: source.to_string(),
            },
            BackendError::Encode(reason) => Self::WriteFailed {
                path: output.to_path_buf(),
                reason,
            },
        }
    }
}

/// How a failed validation verdict affects the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Skip the file and report it as failed.
    #[default]
    Enforce,
    /// Log the verdict and transform anyway.
    Advisory,
}

/// Destination of the mockup for `source`: `mockup_<stem>.<format>`.
pub fn output_path(output_dir: &Path, source: &Path, format: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("mockup_{stem}.{format}"))
}

/// Plan a mockup render without executing it.
///
/// `source_dims` are the source's native dimensions; the fitted content is
/// never larger than them.
pub fn plan_mockup(
    source: &Path,
    output: &Path,
    source_dims: (u32, u32),
    template: &Template,
    format: OutputFormat,
    quality: Quality,
) -> Result<MockupParams, InvalidTemplate> {
    let content_box = template.content_box()?;
    let (content_width, content_height) = fit_inside(source_dims, content_box);
    let canvas = (template.width, template.height);
    let (offset_x, offset_y) = center_offset(canvas, (content_width, content_height));

    Ok(MockupParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        canvas_width: template.width,
        canvas_height: template.height,
        content_width,
        content_height,
        offset_x,
        offset_y,
        background: BACKGROUND,
        format,
        quality,
    })
}

/// Everything needed to transform files for one run.
#[derive(Debug, Clone)]
pub struct TransformPolicy {
    pub template: Template,
    /// Format name as requested; also used verbatim as the output extension.
    pub format: String,
    pub quality: Quality,
    pub validator: ImageValidator,
    pub validation: ValidationPolicy,
}

impl TransformPolicy {
    /// Transform `source` into a mockup under `output_dir`, returning the written path.
    pub fn transform(
        &self,
        backend: &impl ImageBackend,
        source: &Path,
        output_dir: &Path,
    ) -> Result<PathBuf, TransformError> {
        self.template.content_box()?;

        let format = OutputFormat::from_name(&self.format)
            .ok_or_else(|| TransformError::UnsupportedFormat(self.format.clone()))?;

        let verdict = self.validator.validate(backend, source);
        if !verdict.is_valid() {
            match self.validation {
                ValidationPolicy::Enforce => {
                    return Err(TransformError::ValidationFailed(verdict.errors));
                }
                ValidationPolicy::Advisory => tracing::warn!(
                    file = %source.display(),
                    errors = ?verdict.errors,
                    "Validation failed, transforming anyway"
                ),
            }
        }

        let output = output_path(output_dir, source, &self.format);
        let dims = backend
            .identify(source)
            .map_err(|e| TransformError::from_backend(e, &output))?;

        let params = plan_mockup(
            source,
            &output,
            dims.as_tuple(),
            &self.template,
            format,
            self.quality,
        )?;
        tracing::debug!(
            file = %source.display(),
            content = ?(params.content_width, params.content_height),
            offset = ?(params.offset_x, params.offset_y),
            "Rendering mockup"
        );

        backend
            .render_mockup(&params)
            .map_err(|e| TransformError::from_backend(e, &output))?;
        Ok(output)
    }
}
