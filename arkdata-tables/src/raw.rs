//! Typed shapes of the upstream tables.
//!
//! Only the fields the pipeline reads are modelled; everything else in the
//! upstream documents is ignored. List fields go through
//! [`arkdata_core::normalize::seq`], so object-shaped lists decode the same
//! as arrays.

use std::collections::BTreeMap;

use arkdata_core::Rarity;
use arkdata_core::normalize::seq;
use serde::Deserialize;

/// A cost line: `count` units of item `id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCost {
    pub id: String,
    pub count: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

// building_data.json

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecipe {
    pub item_id: String,
    pub count: i64,
    #[serde(default)]
    pub gold_cost: i64,
    #[serde(deserialize_with = "seq")]
    pub costs: Vec<RawCost>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingTable {
    pub workshop_formulas: BTreeMap<String, RawRecipe>,
    pub manufact_formulas: BTreeMap<String, RawRecipe>,
}

// character_table.json, char_patch_table.json

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOperator {
    pub name: String,
    pub appellation: String,
    pub profession: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub is_not_obtainable: bool,
    #[serde(default, deserialize_with = "seq")]
    pub phases: Vec<RawPhase>,
    #[serde(default, deserialize_with = "seq")]
    pub skills: Vec<RawOperatorSkill>,
    #[serde(default, deserialize_with = "seq")]
    pub all_skill_lvlup: Vec<RawSkillLevelUp>,
}

impl RawOperator {
    /// A copy of `self` with every field `patch` actually sets laid over it.
    ///
    /// Empty strings and empty lists in the patch count as unset.
    pub fn overlaid_with(&self, patch: &RawOperator) -> RawOperator {
        let mut form = self.clone();
        if !patch.name.is_empty() {
            form.name = patch.name.clone();
        }
        if !patch.appellation.is_empty() {
            form.appellation = patch.appellation.clone();
        }
        if !patch.profession.is_empty() {
            form.profession = patch.profession.clone();
        }
        form.rarity = patch.rarity.clone();
        form.is_not_obtainable = patch.is_not_obtainable;
        if !patch.phases.is_empty() {
            form.phases = patch.phases.clone();
        }
        if !patch.skills.is_empty() {
            form.skills = patch.skills.clone();
        }
        if !patch.all_skill_lvlup.is_empty() {
            form.all_skill_lvlup = patch.all_skill_lvlup.clone();
        }
        form
    }
}

/// One elite phase.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPhase {
    pub max_level: i64,
    #[serde(default, deserialize_with = "seq")]
    pub evolve_cost: Vec<RawCost>,
}

/// A skill slot on an operator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOperatorSkill {
    #[serde(default)]
    pub skill_id: Option<String>,
    /// One entry per mastery rank.
    #[serde(default, deserialize_with = "seq")]
    pub level_up_cost_cond: Vec<RawSkillCond>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSkillCond {
    #[serde(default, deserialize_with = "seq")]
    pub level_up_cost: Vec<RawCost>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSkillLevelUp {
    #[serde(default, deserialize_with = "seq")]
    pub lvl_up_cost: Vec<RawCost>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchTable {
    pub infos: BTreeMap<String, PatchInfo>,
    pub patch_chars: BTreeMap<String, RawOperator>,
}

/// Template ids sharing one canonical character.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchInfo {
    #[serde(default, deserialize_with = "seq")]
    pub tmpl_ids: Vec<String>,
}

// item_table.json

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub item_id: String,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub icon_id: String,
    pub sort_id: i64,
    pub classify_type: String,
    pub item_type: String,
    #[serde(default, deserialize_with = "seq")]
    pub stage_drop_list: Vec<RawStageDrop>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStageDrop {
    pub stage_id: String,
    #[serde(default)]
    pub occ_per: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExpItem {
    pub id: String,
    pub gain_exp: i64,
}

// uniequip_table.json

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleKind {
    Advanced,
    Initial,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModule {
    pub uni_equip_id: String,
    #[serde(default)]
    pub uni_equip_name: String,
    #[serde(default)]
    pub uni_equip_icon: String,
    #[serde(default)]
    pub uni_equip_desc: Option<String>,
    #[serde(default)]
    pub char_id: String,
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    #[serde(default)]
    pub type_name1: Option<String>,
    #[serde(default)]
    pub type_name2: Option<String>,
    /// Costs per module stage, keyed `"1"`, `"2"`, `"3"` upstream.
    #[serde(default, deserialize_with = "seq")]
    pub item_cost: Vec<Vec<RawCost>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniEquipTable {
    pub equip_dict: BTreeMap<String, RawModule>,
    pub char_equip: BTreeMap<String, Vec<String>>,
}

// skill_table.json

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSkill {
    #[serde(default)]
    pub icon_id: Option<String>,
    #[serde(deserialize_with = "seq")]
    pub levels: Vec<RawSkillLevel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSkillLevel {
    pub name: String,
}
