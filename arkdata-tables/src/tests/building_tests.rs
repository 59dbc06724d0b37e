use super::*;
use crate::raw::RawCost;
use serde_json::json;

fn formula(item_id: &str, gold_cost: i64, costs: &[(&str, i64)]) -> RawRecipe {
    RawRecipe {
        item_id: item_id.to_string(),
        count: 1,
        gold_cost,
        costs: costs
            .iter()
            .map(|(id, count)| RawCost {
                id: id.to_string(),
                count: *count,
                kind: Some("MATERIAL".to_string()),
            })
            .collect(),
    }
}

fn table(workshop: Vec<RawRecipe>, manufacture: Vec<RawRecipe>) -> BuildingTable {
    let keyed = |formulas: Vec<RawRecipe>| -> BTreeMap<String, RawRecipe> {
        formulas
            .into_iter()
            .enumerate()
            .map(|(i, f)| (i.to_string(), f))
            .collect()
    };
    BuildingTable {
        workshop_formulas: keyed(workshop),
        manufact_formulas: keyed(manufacture),
    }
}

#[test]
fn workshop_recipe_appends_gold_line() {
    let recipe = workshop_recipe(&formula("30013", 50, &[("30012", 2)]));
    assert_eq!(
        recipe.costs,
        vec![
            RecipeCost::material("30012", 2),
            RecipeCost {
                id: "4001".to_string(),
                count: 50,
                kind: Some("gold".to_string()),
            },
        ]
    );
}

#[test]
fn zero_gold_cost_appends_nothing() {
    let recipe = workshop_recipe(&formula("30013", 0, &[("30012", 2)]));
    assert_eq!(recipe.costs, vec![RecipeCost::material("30012", 2)]);
}

#[test]
fn cost_type_is_dropped() {
    let recipe = manufacture_recipe(&formula("3003", 0, &[("3002", 5)]));
    assert!(recipe.costs.iter().all(|cost| cost.kind.is_none()));
}

#[test]
fn fixed_recipes_are_always_present() {
    let recipes = merge_recipes(&table(vec![], vec![]), &table(vec![], vec![]));
    assert_eq!(recipes.len(), 2);
    assert_eq!(
        recipes[CATALYST_ITEM_ID].costs,
        vec![RecipeCost::material("4006", 90)]
    );
    assert_eq!(
        recipes[MODULE_TOKEN_ITEM_ID].costs,
        vec![RecipeCost::material("4006", 120)]
    );
}

#[test]
fn fixed_recipes_override_upstream_formulas() {
    let primary = table(vec![formula(CATALYST_ITEM_ID, 10, &[("30012", 1)])], vec![]);
    let recipes = merge_recipes(&primary, &table(vec![], vec![]));
    assert_eq!(
        recipes[CATALYST_ITEM_ID].costs,
        vec![RecipeCost::material("4006", 90)]
    );
}

#[test]
fn factory_formula_replaces_workshop_formula() {
    let primary = table(
        vec![formula("3003", 100, &[("3002", 1)])],
        vec![formula("3003", 0, &[("3001", 2)])],
    );
    let recipes = merge_recipes(&primary, &table(vec![], vec![]));
    assert_eq!(recipes["3003"].costs, vec![RecipeCost::material("3001", 2)]);
}

#[test]
fn primary_formula_wins_and_variant_only_formula_survives() {
    let primary = table(vec![formula("30013", 0, &[("30012", 2)])], vec![]);
    let mut variant = table(vec![formula("30013", 0, &[("30012", 9)])], vec![]);
    variant
        .workshop_formulas
        .insert("cn".to_string(), formula("31093", 0, &[("31083", 1)]));

    let recipes = merge_recipes(&primary, &variant);
    assert_eq!(recipes["30013"].costs, vec![RecipeCost::material("30012", 2)]);
    assert!(recipes.contains_key("31093"));
}

#[test]
fn validate_normalizes_object_shaped_costs() {
    let mut doc = json!({
        "workshopFormulas": {
            "1": {
                "itemId": "30013",
                "count": 1,
                "goldCost": 300,
                "costs": { "0": { "id": "30012", "count": 2, "type": "MATERIAL" } }
            }
        },
        "manufactFormulas": {}
    });
    validate("building_data.json", &mut doc).unwrap();
    assert!(doc["workshopFormulas"]["1"]["costs"].is_array());

    let decoded: BuildingTable = decode("building_data.json", doc).unwrap();
    assert_eq!(decoded.workshop_formulas["1"].costs[0].id, "30012");
}

#[test]
fn workshop_formula_needs_gold_cost() {
    let mut doc = json!({
        "workshopFormulas": { "7": { "itemId": "30013", "count": 1, "costs": [] } },
        "manufactFormulas": {}
    });
    let err = validate("building_data.json", &mut doc).unwrap_err();
    assert_eq!(err.record(), Some("7"));
    assert_eq!(err.field(), Some("goldCost"));
}

#[test]
fn manufacture_formula_does_not_need_gold_cost() {
    let mut doc = json!({
        "workshopFormulas": {},
        "manufactFormulas": { "1": { "itemId": "3003", "count": 1, "costs": [] } }
    });
    assert!(validate("building_data.json", &mut doc).is_ok());
}

#[test]
fn missing_section_fails() {
    let mut doc = json!({ "workshopFormulas": {} });
    let err = validate("building_data.json", &mut doc).unwrap_err();
    assert_eq!(err.field(), Some("manufactFormulas"));
}

#[test]
fn empty_item_id_fails() {
    let mut doc = json!({
        "workshopFormulas": {},
        "manufactFormulas": { "2": { "itemId": "", "count": 1, "costs": [] } }
    });
    let err = validate("building_data.json", &mut doc).unwrap_err();
    assert_eq!(err.field(), Some("itemId"));
}
