//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the whole codec surface the pipeline needs:
//! read an image's dimensions, and render a mockup (decode, resize, place on
//! a padded canvas, encode, write).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below.

use super::params::MockupParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("cannot read {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("encoding failed: {0}")]
    Encode(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions from the file header, without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Render one mockup described by `params` and write it to `params.output`.
    fn render_mockup(&self, params: &MockupParams) -> Result<(), BackendError>;
}
