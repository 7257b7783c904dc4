//! Named mockup templates.
//!
//! A template describes the canvas every mockup is framed on: its exact pixel
//! size and the padding kept free around the content. The registry is fixed
//! at compile time:
//!
//! | Name | Canvas | Padding | Content box |
//! |---|---|---|---|
//! | `default` | 1200×800 | 50 | 1100×700 |
//! | `mobile` | 375×812 | 20 | 335×772 |
//! | `desktop` | 1920×1080 | 100 | 1720×880 |
//! | `tablet` | 768×1024 | 40 | 688×944 |
//!
//! Unknown names resolve to `default`; [`resolve`] never fails.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("template {width}x{height} with padding {padding} leaves no content area")]
pub struct InvalidTemplate {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

/// Canvas specification for one mockup style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl Template {
    pub const fn new(width: u32, height: u32, padding: u32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// The area left for the image once padding is removed from every side.
    ///
    /// Errors when padding consumes the whole canvas in either direction.
    pub fn content_box(&self) -> Result<(u32, u32), InvalidTemplate> {
        let inset = self.padding.saturating_mul(2);
        match (
            self.width.checked_sub(inset),
            self.height.checked_sub(inset),
        ) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Ok((w, h)),
            _ => Err(InvalidTemplate {
                width: self.width,
                height: self.height,
                padding: self.padding,
            }),
        }
    }
}

pub const DEFAULT_TEMPLATE: &str = "default";

/// Registry entries in display order.
pub const TEMPLATES: &[(&str, Template)] = &[
    (DEFAULT_TEMPLATE, Template::new(1200, 800, 50)),
    ("mobile", Template::new(375, 812, 20)),
    ("desktop", Template::new(1920, 1080, 100)),
    ("tablet", Template::new(768, 1024, 40)),
];

/// Look up a template by exact name.
pub fn lookup(name: &str) -> Option<Template> {
    TEMPLATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, t)| *t)
}

/// Resolve a template name, falling back to `default` for unknown names.
pub fn resolve(name: &str) -> Template {
    lookup(name).unwrap_or(TEMPLATES[0].1)
}

/// Whether `name` is one of the registry entries.
pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}
