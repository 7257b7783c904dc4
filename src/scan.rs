//! Input file discovery.
//!
//! Lists a single directory (no recursion) and keeps the regular files whose
//! names carry a supported image extension, in whatever order the platform's
//! directory listing yields them. Nothing here sorts: callers must not rely
//! on alphabetical order.

use crate::validate::is_valid_image_format;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read input directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List image file names in `dir`, preserving listing order.
pub fn list_images(dir: &Path) -> Result<Vec<String>, ScanError> {
    let unreadable = |source| ScanError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut images = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if is_valid_image_format(&name) => images.push(name),
            Ok(_) => {}
            Err(raw) => tracing::warn!(
                file = %raw.to_string_lossy(),
                "Skipping file with non UTF-8 name"
            ),
        }
    }

    tracing::debug!(dir = %dir.display(), count = images.len(), "Discovered input images");
    Ok(images)
}
