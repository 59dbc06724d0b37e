//! Persisted output document.
//!
//! The document is written twice: compact (`arkdata.json`, the file later
//! runs read back) and pretty-printed (`arkdata-pretty.json`, for humans).
//! A stored document is only reused when its embedded commit hashes match
//! the current upstream fingerprint.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{ArkDocument, CommitHashes};

pub const DOCUMENT_FILE: &str = "arkdata.json";
pub const PRETTY_DOCUMENT_FILE: &str = "arkdata-pretty.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Directory holding the published document.
#[derive(Debug, Clone)]
pub struct OutputStore {
    dir: PathBuf,
}

impl OutputStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn document_path(&self) -> PathBuf {
        self.dir.join(DOCUMENT_FILE)
    }

    pub fn pretty_path(&self) -> PathBuf {
        self.dir.join(PRETTY_DOCUMENT_FILE)
    }

    /// Read the stored document, or `None` if nothing has been written yet.
    pub fn load(&self) -> Result<Option<ArkDocument>, StoreError> {
        let path = self.document_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
        let doc = serde_json::from_str(&contents).map_err(|e| StoreError::json(&path, e))?;
        Ok(Some(doc))
    }

    /// Read the stored document if it was built from exactly `hashes`.
    ///
    /// A document that no longer parses is treated as stale rather than
    /// fatal: it is about to be rebuilt and overwritten anyway.
    pub fn load_if_current(
        &self,
        hashes: &CommitHashes,
    ) -> Result<Option<ArkDocument>, StoreError> {
        match self.load() {
            Ok(Some(doc)) if doc.commit_hashes == *hashes => Ok(Some(doc)),
            Ok(Some(doc)) => {
                log::debug!(
                    "Stored document is from yostar {} / cn {}, upstream is at yostar {} / cn {}",
                    doc.commit_hashes.yostar,
                    doc.commit_hashes.cn,
                    hashes.yostar,
                    hashes.cn,
                );
                Ok(None)
            }
            Ok(None) => Ok(None),
            Err(StoreError::Json { path, source }) => {
                log::warn!("Ignoring unreadable stored document {path}: {source}");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Write both the compact and the pretty-printed document.
    pub fn save(&self, doc: &ArkDocument) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;

        let pretty_path = self.pretty_path();
        let pretty =
            serde_json::to_string_pretty(doc).map_err(|e| StoreError::json(&pretty_path, e))?;
        write_atomic(&pretty_path, &pretty)?;

        let path = self.document_path();
        let compact = serde_json::to_string(doc).map_err(|e| StoreError::json(&path, e))?;
        write_atomic(&path, &compact)?;

        log::debug!("Wrote {} and {}", path.display(), pretty_path.display());
        Ok(())
    }
}

/// Write to a temporary sibling, then rename it into place.
fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents).map_err(|e| StoreError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}
