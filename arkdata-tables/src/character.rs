//! Operators: the character tables, their patch tables, and alternate forms.

use std::collections::BTreeMap;

use arkdata_core::{Profession, SchemaError, Transport};
use serde_json::Value;

use crate::error::TableError;
use crate::fetch::{decode, fetch_json};
use crate::merge::overlay;
use crate::raw::{PatchInfo, PatchTable, RawOperator};
use crate::sources::{CHAR_PATCH_TABLE, CHARACTER_TABLE};
use crate::validate::{Record, records, section};

/// A merged operator ready for mapping.
#[derive(Debug, Clone)]
pub struct OperatorRecord {
    pub id: String,
    /// Absent from both primary-locale tables.
    pub cn_only: bool,
    pub data: RawOperator,
}

/// Fetch the four character documents and return the obtainable operators,
/// sorted by id.
pub async fn fetch_operators(
    transport: &impl Transport,
) -> Result<Vec<OperatorRecord>, TableError> {
    let (mut primary, mut variant, mut primary_patch, mut variant_patch) = tokio::try_join!(
        fetch_json(transport, CHARACTER_TABLE.primary),
        fetch_json(transport, CHARACTER_TABLE.variant),
        fetch_json(transport, CHAR_PATCH_TABLE.primary),
        fetch_json(transport, CHAR_PATCH_TABLE.variant),
    )?;

    validate(CHARACTER_TABLE.name, &mut primary)?;
    validate(CHARACTER_TABLE.name, &mut variant)?;
    validate_patch(CHAR_PATCH_TABLE.name, &mut primary_patch)?;
    validate_patch(CHAR_PATCH_TABLE.name, &mut variant_patch)?;

    let primary: BTreeMap<String, RawOperator> = decode(CHARACTER_TABLE.name, primary)?;
    let variant: BTreeMap<String, RawOperator> = decode(CHARACTER_TABLE.name, variant)?;
    let primary_patch: PatchTable = decode(CHAR_PATCH_TABLE.name, primary_patch)?;
    let variant_patch: PatchTable = decode(CHAR_PATCH_TABLE.name, variant_patch)?;

    let operators = merge_operators(&primary, &variant, &primary_patch, &variant_patch)?;
    log::info!(
        "Loaded {} operators ({} CN only)",
        operators.len(),
        operators.iter().filter(|op| op.cn_only).count()
    );
    Ok(operators)
}

/// Check every record of a character table document.
pub fn validate(table: &str, doc: &mut Value) -> Result<(), SchemaError> {
    for (id, record) in records(table, doc)?.iter_mut() {
        check_operator(table, id, record)?;
    }
    Ok(())
}

/// Check a patch table document, including every patched character record.
pub fn validate_patch(table: &str, doc: &mut Value) -> Result<(), SchemaError> {
    for (id, info) in section(table, doc, "infos")?.iter_mut() {
        Record::new(table, id, info)?.array("tmplIds")?;
    }
    for (id, record) in section(table, doc, "patchChars")?.iter_mut() {
        check_operator(table, id, record)?;
    }
    Ok(())
}

fn check_operator(table: &str, id: &str, value: &mut Value) -> Result<(), SchemaError> {
    let mut record = Record::new(table, id, value)?;
    record.string("appellation")?;
    record.non_empty_str("name")?;
    record.non_empty_str("profession")?;
    record.present("rarity")?;
    record.each("phases", |phase| phase.number("maxLevel"))?;
    record.array("skills")?;
    record.array("allSkillLvlup")?;
    Ok(())
}

/// Merge the decoded character and patch tables.
///
/// CN records are named after their `appellation` (the romanized name)
/// before the primary table is laid over them, so primary-locale names win
/// and CN-only operators still get a latin name. Alternate forms are
/// synthesized from the merged patch tables, then unobtainable records and
/// non-character ids are dropped.
pub fn merge_operators(
    primary: &BTreeMap<String, RawOperator>,
    variant: &BTreeMap<String, RawOperator>,
    primary_patch: &PatchTable,
    variant_patch: &PatchTable,
) -> Result<Vec<OperatorRecord>, TableError> {
    let variant: BTreeMap<String, RawOperator> = variant
        .iter()
        .map(|(id, op)| {
            let mut op = op.clone();
            op.name = op.appellation.clone();
            (id.clone(), op)
        })
        .collect();
    let mut combined = overlay(primary, &variant);

    let infos = overlay(&primary_patch.infos, &variant_patch.infos);
    let patch_chars = overlay(&primary_patch.patch_chars, &variant_patch.patch_chars);
    for (form_id, form) in alternate_forms(&combined, &infos, &patch_chars)? {
        combined.insert(form_id, form);
    }

    Ok(combined
        .into_iter()
        .filter(|(id, op)| !op.is_not_obtainable && is_character_id(id))
        .map(|(id, mut data)| {
            data.name = clean_name(&data.name);
            let cn_only =
                !(primary.contains_key(&id) || primary_patch.patch_chars.contains_key(&id));
            OperatorRecord { id, cn_only, data }
        })
        .collect())
}

/// Synthesize one record per extra template id of every patch entry.
///
/// The canonical record is cloned, the patch record is laid over it, and the
/// result is named `"<canonical name> - <class>"`.
pub fn alternate_forms(
    operators: &BTreeMap<String, RawOperator>,
    infos: &BTreeMap<String, PatchInfo>,
    patch_chars: &BTreeMap<String, RawOperator>,
) -> Result<Vec<(String, RawOperator)>, TableError> {
    let mut forms = Vec::new();
    for (key, info) in infos {
        for form_id in info.tmpl_ids.iter().filter(|id| *id != key) {
            let canonical = operators.get(key).ok_or_else(|| {
                TableError::lookup(CHAR_PATCH_TABLE.name, key, "canonical character")
            })?;
            let patch = patch_chars.get(form_id).ok_or_else(|| {
                TableError::lookup(CHAR_PATCH_TABLE.name, form_id, "patch character")
            })?;

            let mut form = canonical.overlaid_with(patch);
            form.name = format!(
                "{} - {}",
                canonical.name,
                alternate_form_label(&patch.profession)
            );
            log::debug!("Alternate form {form_id}: {}", form.name);
            forms.push((form_id.clone(), form));
        }
    }
    Ok(forms)
}

/// Class label used in alternate form names. Only the classes alternate
/// forms have used so far get a display name; other codes pass through.
pub fn alternate_form_label(code: &str) -> String {
    match code.parse::<Profession>() {
        Ok(profession @ (Profession::Warrior | Profession::Medic)) => {
            profession.display_name().to_string()
        }
        _ => code.to_string(),
    }
}

/// `char_<digits>_<alphanumeric...>`, checked at the start of the id.
pub fn is_character_id(id: &str) -> bool {
    let Some(rest) = id.strip_prefix("char_") else {
        return false;
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    let Some(tail) = rest[digits..].strip_prefix('_') else {
        return false;
    };
    tail.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
}

/// Strip the quotes some names are wrapped in (`'Justice Knight'`).
pub fn clean_name(name: &str) -> String {
    match name.strip_prefix('\'') {
        Some(rest) => {
            let mut chars = rest.chars();
            chars.next_back();
            chars.as_str().to_string()
        }
        None => name.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/character_tests.rs"]
mod tests;
