//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header only) |
//! | Decode (JPEG, PNG, WebP, GIF) | `image::ImageReader` with content sniffing |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Pad | `imageops::overlay` onto a solid `RgbaImage` canvas |
//! | Encode → PNG / JPEG / GIF | `image::codecs::{png, jpeg, gif}` |
//! | Encode → WebP | `image::codecs::webp::WebPEncoder` (lossless only) |
//! | Encode → AVIF | `image::codecs::avif::AvifEncoder` (rav1e, speed 6) |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{MockupParams, OutputFormat};
use image::buffer::ConvertBuffer;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageError, ImageReader, Rgba, RgbaImage};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, reason: impl ToString) -> BackendError {
    BackendError::Decode {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Load and decode an image from disk, trusting content over extension.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(|e| decode_error(path, e))?
        .with_guessed_format()
        .map_err(|e| decode_error(path, e))?
        .decode()
        .map_err(|e| decode_error(path, e))
}

/// Resize the source and composite it onto the solid canvas.
fn compose(img: &DynamicImage, params: &MockupParams) -> RgbaImage {
    let resized = if img.width() == params.content_width && img.height() == params.content_height
    {
        img.to_rgba8()
    } else {
        img.resize_exact(
            params.content_width,
            params.content_height,
            FilterType::Lanczos3,
        )
        .to_rgba8()
    };

    let mut canvas = RgbaImage::from_pixel(
        params.canvas_width,
        params.canvas_height,
        Rgba(params.background),
    );
    imageops::overlay(
        &mut canvas,
        &resized,
        i64::from(params.offset_x),
        i64::from(params.offset_y),
    );
    canvas
}

fn map_encode_error(path: &Path, err: ImageError) -> BackendError {
    match err {
        ImageError::IoError(source) => BackendError::Write {
            path: path.to_path_buf(),
            source,
        },
        other => BackendError::Encode(other.to_string()),
    }
}

/// Encode `canvas` in the requested format and write it to `path`.
///
/// Encoding happens in memory, so a failed encode leaves no file behind.
fn save_image(canvas: RgbaImage, params: &MockupParams) -> Result<(), BackendError> {
    let path = params.output.as_path();
    let quality = params.quality.value();
    let mut encoded = Vec::new();

    // The canvas is fully opaque, so alpha only costs bytes
    let opaque = DynamicImage::ImageRgb8(canvas.convert());

    let result = match params.format {
        OutputFormat::Png => {
            opaque.write_with_encoder(image::codecs::png::PngEncoder::new(&mut encoded))
        }
        OutputFormat::Jpeg => opaque.write_with_encoder(
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut encoded, quality),
        ),
        OutputFormat::WebP => opaque
            .write_with_encoder(image::codecs::webp::WebPEncoder::new_lossless(&mut encoded)),
        OutputFormat::Gif => image::codecs::gif::GifEncoder::new(&mut encoded)
            .encode_frame(image::Frame::new(canvas)),
        OutputFormat::Avif => opaque.write_with_encoder(
            image::codecs::avif::AvifEncoder::new_with_speed_quality(&mut encoded, 6, quality),
        ),
    };
    result.map_err(|e| map_encode_error(path, e))?;

    std::fs::write(path, &encoded).map_err(|source| BackendError::Write {
        path: path.to_path_buf(),
        source,
    })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| decode_error(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn render_mockup(&self, params: &MockupParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let canvas = compose(&img, params);
        save_image(canvas, params)
    }
}
