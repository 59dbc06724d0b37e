//! The pipeline driver.

use std::collections::BTreeMap;

use arkdata_catalog::{ArkDocument, CommitHashes, OutputStore};
use arkdata_core::Transport;
use arkdata_tables::{
    fetch_commit_hashes, fetch_items, fetch_modules, fetch_operators, fetch_recipes, fetch_skills,
};

use crate::error::PipelineError;
use crate::mapper::{apply_exp_items, map_item, map_operator};

/// Result of [`load_or_build`].
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub document: ArkDocument,
    /// The document was rebuilt from upstream rather than reused from disk.
    pub rebuilt: bool,
}

/// Fetch every table concurrently and map the merged records.
pub async fn build_document(
    transport: &impl Transport,
    commit_hashes: CommitHashes,
) -> Result<ArkDocument, PipelineError> {
    let (operators, skills, modules, items, recipes) = tokio::try_join!(
        fetch_operators(transport),
        fetch_skills(transport),
        fetch_modules(transport),
        fetch_items(transport),
        fetch_recipes(transport),
    )?;

    let mut mapped_operators = BTreeMap::new();
    for record in &operators {
        let (id, operator) = map_operator(record, &skills, &modules)?;
        mapped_operators.insert(id, operator);
    }

    let mut mapped_items: BTreeMap<_, _> = items
        .items
        .iter()
        .map(|(id, item)| (id.clone(), map_item(item, &recipes)))
        .collect();
    apply_exp_items(&mut mapped_items, &items.exp_items);

    Ok(ArkDocument {
        commit_hashes,
        operators: mapped_operators,
        items: mapped_items,
    })
}

/// Reuse the stored document if upstream has not moved since it was built,
/// otherwise rebuild and store it. `force` always rebuilds.
pub async fn load_or_build(
    transport: &impl Transport,
    store: &OutputStore,
    force: bool,
) -> Result<PipelineRun, PipelineError> {
    let hashes = fetch_commit_hashes(transport).await?;

    if !force {
        if let Some(document) = store.load_if_current(&hashes)? {
            log::info!("Data is up to date");
            return Ok(PipelineRun {
                document,
                rebuilt: false,
            });
        }
    }

    log::info!("Out of date, rebuilding data");
    let document = build_document(transport, hashes).await?;
    store.save(&document)?;
    log::info!(
        "Wrote {} operators and {} items to {}",
        document.operators.len(),
        document.items.len(),
        store.document_path().display()
    );
    Ok(PipelineRun {
        document,
        rebuilt: true,
    })
}
