//! Projection of merged upstream records onto the public schema.
//!
//! Joins against the skill table and the module lookup are strict: a miss
//! means upstream data drifted and the run aborts. Profession codes are the
//! one lenient lookup, since a new class should not block a data refresh.

use std::collections::BTreeMap;

use arkdata_catalog::{Item, LevelUpCost, Module, Operator, Promotion, Recipe, Skill, StageDrop};
use arkdata_core::Profession;
use arkdata_tables::raw::{RawCost, RawExpItem, RawItem, RawOperatorSkill, RawPhase};
use arkdata_tables::{ModuleLookup, OperatorModule, OperatorRecord, SkillInfo};

use crate::error::MapError;

/// Public class name for an upstream profession code. Unknown codes map to
/// an empty string.
pub fn map_profession(code: &str) -> String {
    match code.parse::<Profession>() {
        Ok(profession) => profession.display_name().to_string(),
        Err(e) => {
            log::warn!("{e}");
            String::new()
        }
    }
}

fn map_cost(cost: &RawCost) -> LevelUpCost {
    LevelUpCost {
        id: cost.id.clone(),
        count: cost.count,
    }
}

fn map_costs(costs: &[RawCost]) -> Vec<LevelUpCost> {
    costs.iter().map(map_cost).collect()
}

fn map_promotion(phase: &RawPhase) -> Promotion {
    Promotion {
        max_level: phase.max_level,
        evolve_cost: map_costs(&phase.evolve_cost),
    }
}

fn map_skill(
    operator_id: &str,
    skill: &RawOperatorSkill,
    skills: &BTreeMap<String, SkillInfo>,
) -> Result<Skill, MapError> {
    let skill_id = skill.skill_id.as_deref().unwrap_or_default();
    let info = skills
        .get(skill_id)
        .ok_or_else(|| MapError::unknown_skill(operator_id, skill_id))?;
    Ok(Skill {
        id: skill_id.to_string(),
        name: info.name.clone(),
        icon_id: info.icon_id.clone(),
        mastery_costs: skill
            .level_up_cost_cond
            .iter()
            .map(|cond| map_costs(&cond.level_up_cost))
            .collect(),
    })
}

/// Map one operator. Returns the id separately: it is the document key.
pub fn map_operator(
    record: &OperatorRecord,
    skills: &BTreeMap<String, SkillInfo>,
    modules: &ModuleLookup,
) -> Result<(String, Operator), MapError> {
    let raw = &record.data;
    let operator = Operator {
        name: raw.name.clone(),
        cn_only: record.cn_only,
        profession: map_profession(&raw.profession),
        rarity: raw.rarity.clone(),
        skill_level_up_costs: raw
            .all_skill_lvlup
            .iter()
            .map(|level| map_costs(&level.lvl_up_cost))
            .collect(),
        promotions: raw.phases.iter().map(map_promotion).collect(),
        skills: raw
            .skills
            .iter()
            .map(|skill| map_skill(&record.id, skill, skills))
            .collect::<Result<_, _>>()?,
        modules: match modules.get(&record.id) {
            Some(list) => map_modules(list)?,
            None => Vec::new(),
        },
    };
    Ok((record.id.clone(), operator))
}

/// Map an operator's modules, in order.
pub fn map_modules(modules: &[OperatorModule]) -> Result<Vec<Module>, MapError> {
    modules
        .iter()
        .map(|entry| {
            let module = &entry.module;
            let Some(kind) = module.type_name2.clone() else {
                log::error!("Module {} has no typeName2", module.uni_equip_id);
                return Err(MapError::MissingModuleType(module.uni_equip_id.clone()));
            };
            Ok(Module {
                id: module.uni_equip_id.clone(),
                name: module.uni_equip_name.clone(),
                type_name1: module.type_name1.clone(),
                kind,
                icon: module.uni_equip_icon.clone(),
                description: module.uni_equip_desc.clone().unwrap_or_default(),
                cn_only: entry.cn_only,
                cost: module.item_cost.iter().map(|level| map_costs(level)).collect(),
            })
        })
        .collect()
}

/// Map one item, attaching its recipe when it has a non-empty one.
pub fn map_item(item: &RawItem, recipes: &BTreeMap<String, Recipe>) -> Item {
    Item {
        item_id: item.item_id.clone(),
        name: item.name.clone(),
        description: item.description.clone(),
        rarity: item.rarity.clone(),
        icon_id: item.icon_id.clone(),
        sort_id: item.sort_id,
        classify_type: item.classify_type.clone(),
        item_type: item.item_type.clone(),
        stage_drop_list: item
            .stage_drop_list
            .iter()
            .map(|drop| StageDrop {
                stage_id: drop.stage_id.clone(),
                occ_per: drop.occ_per.clone().unwrap_or_default(),
            })
            .collect(),
        recipe: recipes
            .get(&item.item_id)
            .filter(|recipe| !recipe.costs.is_empty())
            .cloned(),
        gain_exp: None,
    }
}

/// Set `gainExp` on mapped EXP cards. EXP cards that were filtered out of
/// the item list are skipped.
pub fn apply_exp_items(
    items: &mut BTreeMap<String, Item>,
    exp_items: &BTreeMap<String, RawExpItem>,
) {
    for (id, exp) in exp_items {
        match items.get_mut(id) {
            Some(item) => item.gain_exp = Some(exp.gain_exp),
            None => log::debug!("EXP item {id} is not published, skipping"),
        }
    }
}

#[cfg(test)]
#[path = "tests/mapper_tests.rs"]
mod tests;
