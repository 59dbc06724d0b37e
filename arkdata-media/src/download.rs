//! Candidate-URL image downloads.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use arkdata_core::Transport;
use arkdata_core::assets::expand;
use futures::stream::{self, StreamExt};

use crate::category::ImageCategory;
use crate::error::MediaError;

/// Outcome of one [`fetch_images`] batch. Ids are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub downloaded: Vec<String>,
    /// Already on disk.
    pub skipped: Vec<String>,
    /// Every candidate source failed.
    pub failed: Vec<String>,
}

/// Download the images of `ids` that are not on disk yet.
///
/// Each id tries the category's sources in order and stops at the first that
/// answers. An id whose sources all fail is reported in
/// [`BatchReport::failed`]; the rest of the batch carries on.
pub async fn fetch_images<S: AsRef<str>>(
    transport: &impl Transport,
    category: ImageCategory,
    ids: &[S],
    root: &Path,
    concurrency: usize,
) -> Result<BatchReport, MediaError> {
    let dir = root.join(category.subdir());
    std::fs::create_dir_all(&dir).map_err(|e| MediaError::io(&dir, e))?;

    let mut report = BatchReport::default();
    let mut pending = Vec::new();
    let unique: BTreeSet<&str> = ids
        .iter()
        .map(|id| id.as_ref())
        .filter(|id| !id.is_empty())
        .collect();
    for id in unique {
        if image_path(&dir, id).exists() {
            log::debug!("Skipping {category}/{id}.png");
            report.skipped.push(id.to_string());
        } else {
            pending.push(id.to_string());
        }
    }

    let dir = dir.as_path();
    let results: Vec<(String, bool)> = stream::iter(pending)
        .map(|id| async move {
            let ok = fetch_one(transport, category, &id, dir).await;
            (id, ok)
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    for (id, ok) in results {
        if ok {
            report.downloaded.push(id);
        } else {
            report.failed.push(id);
        }
    }
    report.downloaded.sort();
    report.failed.sort();

    log::info!(
        "{category}: {} downloaded, {} already present, {} failed",
        report.downloaded.len(),
        report.skipped.len(),
        report.failed.len()
    );
    Ok(report)
}

fn image_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{id}.png"))
}

/// Write to a temporary sibling, then rename it into place. A `<id>.png`
/// on disk is always a complete download.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), MediaError> {
    let tmp = path.with_extension("png.tmp");
    if let Err(e) = std::fs::write(&tmp, bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(MediaError::io(&tmp, e));
    }
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        MediaError::io(path, e)
    })
}

async fn fetch_one(
    transport: &impl Transport,
    category: ImageCategory,
    id: &str,
    dir: &Path,
) -> bool {
    for template in category.sources() {
        let url = expand(template, id);
        let bytes = match transport.get(&url, None).await {
            Ok(bytes) => bytes,
            Err(e) => {
                log::debug!("{e}");
                continue;
            }
        };
        let path = image_path(dir, id);
        return match write_atomic(&path, &bytes) {
            Ok(()) => {
                log::debug!("Saved {} from {url}", path.display());
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        };
    }
    log::warn!("Could not find image for {category}/{id}");
    false
}
