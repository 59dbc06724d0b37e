use super::*;
use serde_json::json;

fn item(id: &str, name: &str, item_type: &str, classify_type: &str) -> Value {
    json!({
        "itemId": id,
        "name": name,
        "description": "",
        "rarity": "TIER_3",
        "iconId": format!("icon_{id}"),
        "sortId": 100,
        "classifyType": classify_type,
        "itemType": item_type,
        "stageDropList": [{ "stageId": "main_01-07", "occPer": "USUAL" }]
    })
}

fn items(entries: Vec<Value>) -> BTreeMap<String, Value> {
    entries
        .into_iter()
        .map(|v| (v["itemId"].as_str().unwrap().to_string(), v))
        .collect()
}

#[test]
fn inclusion_predicate() {
    assert!(is_included("4001", "GOLD", "NONE", "LMD"));
    assert!(is_included("4006", "EXGG_SHD", "NONE", "Purchase Certificate"));
    assert!(is_included("30012", "MATERIAL", "MATERIAL", "Orirock Cube"));
    assert!(is_included("2001", "CARD_EXP", "MATERIAL", "Drill Battle Record"));
    assert!(!is_included("30012", "MATERIAL", "CONSUME", "Orirock Cube"));
    assert!(!is_included("3401", "VOUCHER_PICK", "MATERIAL", "Voucher"));
    assert!(!is_included("act_token", "MATERIAL", "MATERIAL", "Event Token"));
}

#[test]
fn merged_items_are_filtered_and_keyed_by_item_id() {
    let primary = items(vec![
        item("30012", "Orirock Cube", "MATERIAL", "MATERIAL"),
        item("4001", "LMD", "GOLD", "NONE"),
        item("act_token", "Event Token", "MATERIAL", "MATERIAL"),
    ]);
    let variant = items(vec![item("30145", "Crystalline Component", "MATERIAL", "MATERIAL")]);

    let data = merge_items(&primary, &variant, &BTreeMap::new(), &BTreeMap::new()).unwrap();
    let ids: Vec<_> = data.items.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["30012", "30145", "4001"]);
}

#[test]
fn filter_is_idempotent() {
    let primary = items(vec![
        item("30012", "Orirock Cube", "MATERIAL", "MATERIAL"),
        item("4006", "Purchase Certificate", "EXGG_SHD", "NONE"),
        item("2001", "Drill Battle Record", "CARD_EXP", "MATERIAL"),
        item("3401", "Voucher", "VOUCHER_PICK", "MATERIAL"),
        item("act_token", "Event Token", "MATERIAL", "MATERIAL"),
    ]);
    let data = merge_items(&primary, &BTreeMap::new(), &BTreeMap::new(), &BTreeMap::new()).unwrap();

    let refiltered: Vec<_> = data
        .items
        .values()
        .filter(|item| item.is_included())
        .map(|item| item.item_id.clone())
        .collect();
    let original: Vec<_> = data.items.keys().cloned().collect();
    assert_eq!(refiltered, original);
    assert_eq!(original.len(), 3);
}

#[test]
fn primary_item_wins() {
    let primary = items(vec![item("30012", "Orirock Cube", "MATERIAL", "MATERIAL")]);
    let variant = items(vec![item("30012", "固源岩组", "MATERIAL", "MATERIAL")]);
    let data = merge_items(&primary, &variant, &BTreeMap::new(), &BTreeMap::new()).unwrap();
    assert_eq!(data.items["30012"].name, "Orirock Cube");
}

#[test]
fn exp_items_merge_with_primary_precedence() {
    let exp = |id: &str, gain_exp: i64| {
        (
            id.to_string(),
            RawExpItem {
                id: id.to_string(),
                gain_exp,
            },
        )
    };
    let primary: BTreeMap<_, _> = [exp("2001", 200)].into_iter().collect();
    let variant: BTreeMap<_, _> = [exp("2001", 1), exp("2002", 400)].into_iter().collect();

    let data = merge_items(&BTreeMap::new(), &BTreeMap::new(), &primary, &variant).unwrap();
    assert_eq!(data.exp_items["2001"].gain_exp, 200);
    assert_eq!(data.exp_items["2002"].gain_exp, 400);
}

#[test]
fn excluded_items_are_not_validated() {
    let mut doc = json!({
        "items": {
            "30012": item("30012", "Orirock Cube", "MATERIAL", "MATERIAL"),
            "voucher": { "itemId": "voucher", "itemType": "VOUCHER_PICK" }
        },
        "expItems": {}
    });
    assert!(validate("item_table.json", &mut doc).is_ok());
}

#[test]
fn included_item_missing_description_fails() {
    let mut cube = item("30012", "Orirock Cube", "MATERIAL", "MATERIAL");
    cube.as_object_mut().unwrap().remove("description");
    let mut doc = json!({ "items": { "30012": cube }, "expItems": {} });
    let err = validate("item_table.json", &mut doc).unwrap_err();
    assert_eq!(err.record(), Some("30012"));
    assert_eq!(err.field(), Some("description"));
}

#[test]
fn missing_exp_items_section_fails() {
    let mut doc = json!({ "items": {} });
    let err = validate("item_table.json", &mut doc).unwrap_err();
    assert_eq!(err.field(), Some("expItems"));
}
