//! Public record types. Field names serialize in camelCase.

use std::collections::{BTreeMap, BTreeSet};

use arkdata_core::Rarity;
use serde::{Deserialize, Serialize};

/// One material line of a cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpCost {
    pub id: String,
    pub count: i64,
}

/// One line of a crafting recipe. Only the synthetic gold line carries a `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCost {
    pub id: String,
    pub count: i64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl RecipeCost {
    pub fn material(id: impl Into<String>, count: i64) -> Self {
        Self {
            id: id.into(),
            count,
            kind: None,
        }
    }
}

/// How an item is crafted: `count` units out for `costs` in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub count: i64,
    pub costs: Vec<RecipeCost>,
}

/// Cost and level cap of one elite promotion phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub max_level: i64,
    pub evolve_cost: Vec<LevelUpCost>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub icon_id: String,
    /// One entry per mastery rank.
    pub mastery_costs: Vec<Vec<LevelUpCost>>,
}

/// An operator module (UniEquip).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name1: Option<String>,
    /// Secondary type name (e.g. `"X"`, `"Y"`, `"D"`).
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: String,
    pub description: String,
    pub cn_only: bool,
    /// One entry per module stage, in stage order.
    pub cost: Vec<Vec<LevelUpCost>>,
}

/// A published operator. The id is the key of [`ArkDocument::operators`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub name: String,
    pub cn_only: bool,
    pub profession: String,
    pub rarity: Rarity,
    /// Costs of skill levels 2 through 7, shared across the operator's skills.
    pub skill_level_up_costs: Vec<Vec<LevelUpCost>>,
    pub promotions: Vec<Promotion>,
    pub skills: Vec<Skill>,
    pub modules: Vec<Module>,
}

/// Where an item drops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageDrop {
    pub stage_id: String,
    #[serde(default)]
    pub occ_per: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: String,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub icon_id: String,
    pub sort_id: i64,
    pub classify_type: String,
    pub item_type: String,
    pub stage_drop_list: Vec<StageDrop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain_exp: Option<i64>,
}

/// Upstream revision fingerprint: one commit hash per data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitHashes {
    pub yostar: String,
    pub cn: String,
}

/// The published document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArkDocument {
    pub commit_hashes: CommitHashes,
    pub operators: BTreeMap<String, Operator>,
    pub items: BTreeMap<String, Item>,
}

impl ArkDocument {
    pub fn operator_ids(&self) -> Vec<String> {
        self.operators.keys().cloned().collect()
    }

    /// Distinct item icon ids, sorted.
    pub fn item_icon_ids(&self) -> Vec<String> {
        distinct(self.items.values().map(|item| item.icon_id.as_str()))
    }

    /// Distinct module icon ids across all operators, sorted.
    pub fn module_icon_ids(&self) -> Vec<String> {
        distinct(
            self.operators
                .values()
                .flat_map(|op| op.modules.iter())
                .map(|module| module.icon.as_str()),
        )
    }

    /// Distinct skill icon ids across all operators, sorted.
    pub fn skill_icon_ids(&self) -> Vec<String> {
        distinct(
            self.operators
                .values()
                .flat_map(|op| op.skills.iter())
                .map(|skill| skill.icon_id.as_str()),
        )
    }
}

fn distinct<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    ids.filter(|id| !id.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
