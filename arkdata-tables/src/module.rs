//! Operator modules (UniEquip).

use std::collections::BTreeMap;

use arkdata_core::{SchemaError, Transport};
use serde_json::Value;

use crate::error::TableError;
use crate::fetch::{decode, fetch_pair};
use crate::merge::overlay;
use crate::raw::{ModuleKind, RawModule, UniEquipTable};
use crate::sources::UNIEQUIP_TABLE;
use crate::validate::{Record, list, section};

#[derive(Debug, Clone)]
pub struct OperatorModule {
    pub module: RawModule,
    /// Absent from the primary-locale equip dictionary.
    pub cn_only: bool,
}

/// Modules per operator id, in upstream order.
pub type ModuleLookup = BTreeMap<String, Vec<OperatorModule>>;

pub async fn fetch_modules(transport: &impl Transport) -> Result<ModuleLookup, TableError> {
    let (mut primary, mut variant) = fetch_pair(transport, &UNIEQUIP_TABLE).await?;
    validate(UNIEQUIP_TABLE.name, &mut primary)?;
    validate(UNIEQUIP_TABLE.name, &mut variant)?;

    let primary: UniEquipTable = decode(UNIEQUIP_TABLE.name, primary)?;
    let variant: UniEquipTable = decode(UNIEQUIP_TABLE.name, variant)?;

    let lookup = merge_modules(&primary, &variant)?;
    log::info!(
        "Loaded {} modules for {} operators",
        lookup.values().map(Vec::len).sum::<usize>(),
        lookup.len()
    );
    Ok(lookup)
}

/// Check an equip table document.
pub fn validate(table: &str, doc: &mut Value) -> Result<(), SchemaError> {
    for (id, equip) in section(table, doc, "equipDict")?.iter_mut() {
        let mut record = Record::new(table, id, equip)?;
        record.non_empty_str("uniEquipId")?;
        record.non_empty_str("type")?;
        record.optional_array("itemCost")?;
    }
    for (id, modules) in section(table, doc, "charEquip")?.iter_mut() {
        list(table, id, modules)?;
    }
    Ok(())
}

/// Resolve the CN per-operator module lists through the merged equip
/// dictionary. `INITIAL` entries, the default equipment every operator
/// starts with, are dropped.
pub fn merge_modules(
    primary: &UniEquipTable,
    variant: &UniEquipTable,
) -> Result<ModuleLookup, TableError> {
    let equip = overlay(&primary.equip_dict, &variant.equip_dict);

    let mut lookup = ModuleLookup::new();
    for (char_id, module_ids) in &variant.char_equip {
        let mut modules = Vec::new();
        for module_id in module_ids {
            let module = equip
                .get(module_id)
                .ok_or_else(|| TableError::lookup(UNIEQUIP_TABLE.name, module_id, "module"))?;
            if module.kind == ModuleKind::Initial {
                continue;
            }
            modules.push(OperatorModule {
                module: module.clone(),
                cn_only: !primary.equip_dict.contains_key(module_id),
            });
        }
        lookup.insert(char_id.clone(), modules);
    }
    Ok(lookup)
}

#[cfg(test)]
#[path = "tests/module_tests.rs"]
mod tests;
