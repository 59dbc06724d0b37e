//! Upstream revision fingerprint.

use arkdata_catalog::CommitHashes;
use arkdata_core::Transport;

use crate::error::TableError;
use crate::sources::{CN_COMMIT_URL, COMMIT_SHA_ACCEPT, YOSTAR_COMMIT_URL};

/// Latest commit of both data repositories.
pub async fn fetch_commit_hashes(transport: &impl Transport) -> Result<CommitHashes, TableError> {
    let (yostar, cn) = tokio::try_join!(
        fetch_commit_hash(transport, YOSTAR_COMMIT_URL),
        fetch_commit_hash(transport, CN_COMMIT_URL)
    )?;
    log::debug!("Upstream at yostar {yostar}, cn {cn}");
    Ok(CommitHashes { yostar, cn })
}

async fn fetch_commit_hash(transport: &impl Transport, url: &str) -> Result<String, TableError> {
    let body = transport.get(url, Some(COMMIT_SHA_ACCEPT)).await?;
    let hash = String::from_utf8_lossy(&body).trim().to_string();
    if hash.is_empty() {
        return Err(TableError::EmptyHash {
            url: url.to_string(),
        });
    }
    Ok(hash)
}
