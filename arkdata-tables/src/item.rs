//! Items: materials, EXP cards and the two currencies the planner tracks.

use std::collections::BTreeMap;

use arkdata_core::{CERTIFICATE_ITEM_ID, GOLD_ITEM_ID, SchemaError, Transport};
use serde::Deserialize;
use serde_json::Value;

use crate::error::TableError;
use crate::fetch::{decode, fetch_pair};
use crate::merge::overlay;
use crate::raw::{RawExpItem, RawItem};
use crate::sources::ITEM_TABLE;
use crate::validate::{Record, section};

/// Included items keyed by item id, plus the EXP card table.
#[derive(Debug, Clone, Default)]
pub struct ItemData {
    pub items: BTreeMap<String, RawItem>,
    pub exp_items: BTreeMap<String, RawExpItem>,
}

/// Items are decoded lazily: only included ones must match [`RawItem`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemTable {
    items: BTreeMap<String, Value>,
    exp_items: BTreeMap<String, RawExpItem>,
}

/// Whether an item is published.
///
/// The currencies are always in. Otherwise the item must be a material or
/// an EXP card, classified as a material, and not a token.
pub fn is_included(item_id: &str, item_type: &str, classify_type: &str, name: &str) -> bool {
    item_id == GOLD_ITEM_ID
        || item_id == CERTIFICATE_ITEM_ID
        || (matches!(item_type, "MATERIAL" | "CARD_EXP")
            && classify_type == "MATERIAL"
            && !name.ends_with("Token"))
}

impl RawItem {
    pub fn is_included(&self) -> bool {
        is_included(&self.item_id, &self.item_type, &self.classify_type, &self.name)
    }
}

/// [`is_included`] on an undecoded record. Missing fields read as empty.
fn is_included_value(value: &Value) -> bool {
    let field = |name: &str| value.get(name).and_then(Value::as_str).unwrap_or("");
    is_included(
        field("itemId"),
        field("itemType"),
        field("classifyType"),
        field("name"),
    )
}

pub async fn fetch_items(transport: &impl Transport) -> Result<ItemData, TableError> {
    let (mut primary, mut variant) = fetch_pair(transport, &ITEM_TABLE).await?;
    validate(ITEM_TABLE.name, &mut primary)?;
    validate(ITEM_TABLE.name, &mut variant)?;

    let primary: ItemTable = decode(ITEM_TABLE.name, primary)?;
    let variant: ItemTable = decode(ITEM_TABLE.name, variant)?;

    let data = merge_items(
        &primary.items,
        &variant.items,
        &primary.exp_items,
        &variant.exp_items,
    )?;
    log::info!(
        "Loaded {} items ({} EXP cards)",
        data.items.len(),
        data.exp_items.len()
    );
    Ok(data)
}

/// Check an item table document. Only included items are checked.
pub fn validate(table: &str, doc: &mut Value) -> Result<(), SchemaError> {
    section(table, doc, "expItems")?;
    for (id, item) in section(table, doc, "items")?.iter_mut() {
        if !is_included_value(item) {
            continue;
        }
        let record = Record::new(table, id, item)?;
        record.non_empty_str("itemId")?;
        record.non_empty_str("name")?;
        record.string("description")?;
        record.non_empty_str("itemType")?;
        record.non_empty_str("classifyType")?;
        record.present("rarity")?;
        record.string("iconId")?;
        record.number("sortId")?;
    }
    Ok(())
}

/// Merge both tables, keep the included items, and key them by item id.
pub fn merge_items(
    primary: &BTreeMap<String, Value>,
    variant: &BTreeMap<String, Value>,
    primary_exp: &BTreeMap<String, RawExpItem>,
    variant_exp: &BTreeMap<String, RawExpItem>,
) -> Result<ItemData, SchemaError> {
    let mut items = BTreeMap::new();
    for value in overlay(primary, variant).into_values() {
        if !is_included_value(&value) {
            continue;
        }
        let item: RawItem = decode(ITEM_TABLE.name, value)?;
        items.insert(item.item_id.clone(), item);
    }
    Ok(ItemData {
        items,
        exp_items: overlay(primary_exp, variant_exp),
    })
}

#[cfg(test)]
#[path = "tests/item_tests.rs"]
mod tests;
