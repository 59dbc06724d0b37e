//! Crafting recipes from the base workshop and factories.

use std::collections::BTreeMap;

use arkdata_catalog::{Recipe, RecipeCost};
use arkdata_core::{CERTIFICATE_ITEM_ID, GOLD_ITEM_ID, SchemaError, Transport};
use serde_json::Value;

use crate::error::TableError;
use crate::fetch::{decode, fetch_pair};
use crate::merge::overlay;
use crate::raw::{BuildingTable, RawRecipe};
use crate::sources::BUILDING_TABLE;
use crate::validate::{Record, section};

/// Item id of the module data block.
pub const MODULE_TOKEN_ITEM_ID: &str = "mod_unlock_token";

/// Item id of the chip catalyst.
pub const CATALYST_ITEM_ID: &str = "32001";

/// Recipes that exist outside the building table: certificate shop prices.
fn fixed_recipes() -> [(&'static str, Recipe); 2] {
    [
        (
            CATALYST_ITEM_ID,
            Recipe {
                count: 1,
                costs: vec![RecipeCost::material(CERTIFICATE_ITEM_ID, 90)],
            },
        ),
        (
            MODULE_TOKEN_ITEM_ID,
            Recipe {
                count: 1,
                costs: vec![RecipeCost::material(CERTIFICATE_ITEM_ID, 120)],
            },
        ),
    ]
}

/// Fetch, validate and merge both building tables into recipes keyed by item id.
pub async fn fetch_recipes(
    transport: &impl Transport,
) -> Result<BTreeMap<String, Recipe>, TableError> {
    let (mut primary, mut variant) = fetch_pair(transport, &BUILDING_TABLE).await?;
    validate(BUILDING_TABLE.name, &mut primary)?;
    validate(BUILDING_TABLE.name, &mut variant)?;

    let primary: BuildingTable = decode(BUILDING_TABLE.name, primary)?;
    let variant: BuildingTable = decode(BUILDING_TABLE.name, variant)?;

    let recipes = merge_recipes(&primary, &variant);
    log::info!("Loaded {} recipes", recipes.len());
    Ok(recipes)
}

/// Check both formula sections of a building table document.
pub fn validate(table: &str, doc: &mut Value) -> Result<(), SchemaError> {
    check_formulas(table, doc, "workshopFormulas", true)?;
    check_formulas(table, doc, "manufactFormulas", false)
}

fn check_formulas(
    table: &str,
    doc: &mut Value,
    field: &str,
    needs_gold: bool,
) -> Result<(), SchemaError> {
    for (id, formula) in section(table, doc, field)?.iter_mut() {
        let mut record = Record::new(table, id, formula)?;
        record.non_empty_str("itemId")?;
        record.array("costs")?;
        record.number("count")?;
        if needs_gold {
            record.number("goldCost")?;
        }
    }
    Ok(())
}

/// Merge two decoded building tables.
///
/// Factory formulas replace workshop formulas for the same item, and the
/// fixed certificate recipes replace both.
pub fn merge_recipes(
    primary: &BuildingTable,
    variant: &BuildingTable,
) -> BTreeMap<String, Recipe> {
    let workshop = overlay(&primary.workshop_formulas, &variant.workshop_formulas);
    let manufacture = overlay(&primary.manufact_formulas, &variant.manufact_formulas);

    let mut recipes = BTreeMap::new();
    for formula in workshop.values() {
        recipes.insert(formula.item_id.clone(), workshop_recipe(formula));
    }
    for formula in manufacture.values() {
        recipes.insert(formula.item_id.clone(), manufacture_recipe(formula));
    }
    for (id, recipe) in fixed_recipes() {
        recipes.insert(id.to_string(), recipe);
    }
    recipes
}

/// A workshop formula, with its LMD cost appended as a `"gold"` line when positive.
pub fn workshop_recipe(formula: &RawRecipe) -> Recipe {
    let mut recipe = manufacture_recipe(formula);
    if formula.gold_cost > 0 {
        recipe.costs.push(RecipeCost {
            id: GOLD_ITEM_ID.to_string(),
            count: formula.gold_cost,
            kind: Some("gold".to_string()),
        });
    }
    recipe
}

/// A factory formula. Factories take no LMD.
pub fn manufacture_recipe(formula: &RawRecipe) -> Recipe {
    Recipe {
        count: formula.count,
        costs: formula
            .costs
            .iter()
            .map(|cost| RecipeCost::material(cost.id.clone(), cost.count))
            .collect(),
    }
}

#[cfg(test)]
#[path = "tests/building_tests.rs"]
mod tests;
