//! Parameter types for image operations.
//!
//! These structs describe *what* to render, not *how*. They sit between
//! [`operations`](super::operations), which decides the geometry of a mockup,
//! and the [`backend`](super::backend), which does the pixel work. Keeping them
//! plain data lets tests swap in a mock backend and inspect every request.
//!
//! ## Types
//!
//! - [`Quality`]: lossy encoding quality (1–100, default 90). Clamped on construction.
//! - [`OutputFormat`]: encoder selected from the requested format name.
//! - [`MockupParams`]: full specification for one render: source, output, canvas, placement.

use std::fmt;
use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Encoders the backend can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    WebP,
    Gif,
    Avif,
}

impl OutputFormat {
    /// Map a format name (as given on the command line) to an encoder.
    ///
    /// Matching is case-insensitive; `jpg` and `jpeg` are the same encoder.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::WebP),
            "gif" => Some(Self::Gif),
            "avif" => Some(Self::Avif),
            _ => None,
        }
    }

    /// Whether the quality setting changes the encoded output.
    pub fn is_lossy(self) -> bool {
        matches!(self, Self::Jpeg | Self::Avif)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::WebP => "webp",
            Self::Gif => "gif",
            Self::Avif => "avif",
        };
        f.write_str(name)
    }
}

/// Names accepted by [`OutputFormat::from_name`], for help and error text.
pub const OUTPUT_FORMAT_NAMES: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "avif"];

/// Solid RGBA fill used for the padding area.
pub const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// Parameters for a single mockup render.
///
/// The source is resized to exactly `content_width × content_height` (already
/// aspect-correct, computed by the caller), placed at `(offset_x, offset_y)` on
/// a `canvas_width × canvas_height` canvas filled with `background`, and encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct MockupParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub content_width: u32,
    pub content_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
    pub background: [u8; 4],
    pub format: OutputFormat,
    pub quality: Quality,
}
