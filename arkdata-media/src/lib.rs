//! Image download and WebP re-encoding.
//!
//! Images live under one directory per [`ImageCategory`]:
//! `<root>/<subdir>/<id>.png`, with the re-encoded copies in
//! `<root>/<subdir>/webp/<id>.webp`.

pub mod category;
pub mod convert;
pub mod download;
pub mod error;

use std::path::Path;

pub use category::{ImageCategory, MISSING_IMAGE_ID};
pub use convert::{ConvertReport, WEBP_DIR, WEBP_QUALITY, convert_category, convert_file};
pub use download::{BatchReport, fetch_images};
pub use error::MediaError;

/// Create every category directory and its `webp/` sibling.
pub fn ensure_layout(root: &Path) -> Result<(), MediaError> {
    for category in ImageCategory::all() {
        let dir = root.join(category.subdir()).join(WEBP_DIR);
        std::fs::create_dir_all(&dir).map_err(|e| MediaError::io(&dir, e))?;
    }
    Ok(())
}
