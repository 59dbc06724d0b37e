use super::*;
use serde_json::json;

#[test]
fn section_requires_an_object() {
    let mut doc = json!({ "items": {}, "expItems": null, "other": [] });
    assert!(section("t", &mut doc, "items").is_ok());

    let err = section("t", &mut doc, "expItems").unwrap_err();
    assert!(matches!(err, SchemaError::MissingField { .. }));
    assert_eq!(err.field(), Some("expItems"));

    let err = section("t", &mut doc, "other").unwrap_err();
    assert!(matches!(err, SchemaError::InvalidField { .. }));

    let err = section("t", &mut doc, "absent").unwrap_err();
    assert_eq!(err.field(), Some("absent"));
}

#[test]
fn records_rejects_non_object_documents() {
    let mut doc = json!([1, 2]);
    assert!(records("t", &mut doc).is_err());
}

#[test]
fn string_checks() {
    let mut value = json!({ "name": "Amiya", "empty": "", "num": 3, "nothing": null });
    let record = Record::new("t", "char_002_amiya", &mut value).unwrap();

    assert_eq!(record.non_empty_str("name").unwrap(), "Amiya");
    assert_eq!(record.string("empty").unwrap(), "");

    let err = record.non_empty_str("empty").unwrap_err();
    assert!(matches!(err, SchemaError::InvalidField { .. }));
    assert_eq!(err.record(), Some("char_002_amiya"));

    assert!(matches!(
        record.string("num").unwrap_err(),
        SchemaError::InvalidField { .. }
    ));
    assert!(matches!(
        record.string("nothing").unwrap_err(),
        SchemaError::MissingField { .. }
    ));
    assert!(matches!(
        record.present("absent").unwrap_err(),
        SchemaError::MissingField { .. }
    ));
}

#[test]
fn number_check() {
    let mut value = json!({ "count": 3, "ratio": 0.5, "text": "3" });
    let record = Record::new("t", "r", &mut value).unwrap();
    assert!(record.number("count").is_ok());
    assert!(record.number("ratio").is_ok());
    assert!(record.number("text").is_err());
    assert!(record.number("absent").is_err());
}

#[test]
fn array_normalizes_in_place() {
    let mut value = json!({ "costs": { "1": "b", "0": "a" } });
    {
        let mut record = Record::new("t", "r", &mut value).unwrap();
        assert_eq!(record.array("costs").unwrap().len(), 2);
    }
    assert_eq!(value["costs"], json!(["a", "b"]));
}

#[test]
fn array_failures_name_the_field() {
    let mut value = json!({ "costs": { "x": 1 }, "scalar": 4 });
    let mut record = Record::new("t", "r", &mut value).unwrap();

    let err = record.array("costs").unwrap_err();
    assert!(matches!(err, SchemaError::Shape { .. }));
    assert_eq!(err.field(), Some("costs"));

    assert!(matches!(
        record.array("scalar").unwrap_err(),
        SchemaError::Shape { .. }
    ));
    assert!(matches!(
        record.array("absent").unwrap_err(),
        SchemaError::MissingField { .. }
    ));
}

#[test]
fn each_reports_nested_paths() {
    let mut value = json!({ "phases": [{ "maxLevel": 50 }, { "maxLevel": "x" }] });
    let mut record = Record::new("t", "char_1", &mut value).unwrap();
    let err = record
        .each("phases", |phase| phase.number("maxLevel"))
        .unwrap_err();
    assert_eq!(err.field(), Some("phases[1].maxLevel"));
    assert_eq!(err.record(), Some("char_1"));
}

#[test]
fn each_rejects_non_object_elements() {
    let mut value = json!({ "phases": [3] });
    let mut record = Record::new("t", "r", &mut value).unwrap();
    let err = record.each("phases", |_| Ok(())).unwrap_err();
    assert_eq!(err.field(), Some("phases[0]"));
}

#[test]
fn first_requires_a_non_empty_array() {
    let mut value = json!({ "levels": [], "named": { "0": { "name": "Burst" } } });
    let mut record = Record::new("t", "skill", &mut value).unwrap();

    let err = record.first("levels", |_| Ok(())).unwrap_err();
    assert_eq!(err.field(), Some("levels"));

    let mut seen = String::new();
    record
        .first("named", |level| {
            seen = level.non_empty_str("name")?.to_string();
            Ok(())
        })
        .unwrap();
    assert_eq!(seen, "Burst");
}
