//! Image processing, pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Fit inside** | [`fit_inside`] (aspect-preserving, never enlarges) |
//! | **Resize → pad → encode** | Lanczos3 + `imageops::overlay` + `image::codecs` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for geometry (unit testable)
//! - **Parameters**: Data structures describing a render
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: [`TransformPolicy`], combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{center_offset, fit_inside};
pub use operations::{TransformError, TransformPolicy, ValidationPolicy, output_path, plan_mockup};
pub use params::{BACKGROUND, MockupParams, OUTPUT_FORMAT_NAMES, OutputFormat, Quality};
pub use rust_backend::RustBackend;
