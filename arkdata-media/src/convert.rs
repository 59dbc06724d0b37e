//! WebP re-encoding of downloaded images.

use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::category::ImageCategory;
use crate::error::MediaError;

/// Subdirectory of each category holding the WebP copies.
pub const WEBP_DIR: &str = "webp";

/// Lossy WebP quality, 0 to 100.
pub const WEBP_QUALITY: f32 = 80.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertReport {
    pub converted: usize,
    /// WebP copy already newer than its source.
    pub up_to_date: usize,
    /// Stems of the images that failed to convert.
    pub failed: Vec<String>,
}

/// Re-encode every `*.png` of a category as WebP at [`WEBP_QUALITY`].
///
/// A file that fails to decode or encode is logged and reported, not retried.
pub fn convert_category(root: &Path, category: ImageCategory) -> Result<ConvertReport, MediaError> {
    let dir = root.join(category.subdir());
    let out_dir = dir.join(WEBP_DIR);
    fs::create_dir_all(&out_dir).map_err(|e| MediaError::io(&out_dir, e))?;

    let mut report = ConvertReport::default();
    for source in png_files(&dir)? {
        let Some(stem) = source.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        let dest = out_dir.join(format!("{stem}.webp"));
        if is_up_to_date(&source, &dest) {
            report.up_to_date += 1;
            continue;
        }
        match convert_file(&source, &dest) {
            Ok(()) => report.converted += 1,
            Err(e) => {
                log::warn!("{e}");
                report.failed.push(stem);
            }
        }
    }

    log::info!(
        "{category}: {} converted to WebP, {} up to date, {} failed",
        report.converted,
        report.up_to_date,
        report.failed.len()
    );
    Ok(report)
}

/// Encode one image file as lossy WebP at [`WEBP_QUALITY`].
pub fn convert_file(source: &Path, dest: &Path) -> Result<(), MediaError> {
    let img = image::open(source).map_err(|e| MediaError::image(source, e))?;
    // libwebp only takes 8-bit RGB or RGBA.
    let img = if img.color().has_alpha() {
        DynamicImage::ImageRgba8(img.into_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.into_rgb8())
    };

    let encoder = webp::Encoder::from_image(&img).map_err(|e| MediaError::encode(dest, e))?;
    let bytes = encoder.encode(WEBP_QUALITY);
    let tmp = dest.with_extension("webp.tmp");
    fs::write(&tmp, &*bytes).map_err(|e| MediaError::io(&tmp, e))?;
    fs::rename(&tmp, dest).map_err(|e| MediaError::io(dest, e))
}

fn png_files(dir: &Path) -> Result<Vec<PathBuf>, MediaError> {
    let entries = fs::read_dir(dir).map_err(|e| MediaError::io(dir, e))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn is_up_to_date(source: &Path, dest: &Path) -> bool {
    let modified = |path: &Path| fs::metadata(path).and_then(|m| m.modified()).ok();
    match (modified(source), modified(dest)) {
        (Some(src), Some(out)) => out >= src,
        _ => false,
    }
}
