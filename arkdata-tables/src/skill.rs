//! Skill names and icons.

use std::collections::BTreeMap;

use arkdata_core::{SchemaError, Transport};
use serde_json::Value;

use crate::error::TableError;
use crate::fetch::{decode, fetch_pair};
use crate::merge::overlay;
use crate::raw::RawSkill;
use crate::sources::SKILL_TABLE;
use crate::validate::{Record, records};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillInfo {
    /// Name of the first skill level.
    pub name: String,
    /// Icon image id. The icon itself is fetched by the image pipeline.
    pub icon_id: String,
}

pub async fn fetch_skills(
    transport: &impl Transport,
) -> Result<BTreeMap<String, SkillInfo>, TableError> {
    let (mut primary, mut variant) = fetch_pair(transport, &SKILL_TABLE).await?;
    validate(SKILL_TABLE.name, &mut primary)?;
    validate(SKILL_TABLE.name, &mut variant)?;

    let primary: BTreeMap<String, RawSkill> = decode(SKILL_TABLE.name, primary)?;
    let variant: BTreeMap<String, RawSkill> = decode(SKILL_TABLE.name, variant)?;

    let skills = merge_skills(&primary, &variant);
    log::info!("Loaded {} skills", skills.len());
    Ok(skills)
}

pub fn validate(table: &str, doc: &mut Value) -> Result<(), SchemaError> {
    for (id, skill) in records(table, doc)?.iter_mut() {
        Record::new(table, id, skill)?.first("levels", |level| {
            level.non_empty_str("name")?;
            Ok(())
        })?;
    }
    Ok(())
}

pub fn merge_skills(
    primary: &BTreeMap<String, RawSkill>,
    variant: &BTreeMap<String, RawSkill>,
) -> BTreeMap<String, SkillInfo> {
    overlay(primary, variant)
        .into_iter()
        .map(|(id, skill)| {
            let info = skill_info(&id, &skill);
            (id, info)
        })
        .collect()
}

/// Falls back to the skill id when the skill has no icon of its own.
pub fn skill_info(skill_id: &str, skill: &RawSkill) -> SkillInfo {
    let icon_id = match skill.icon_id.as_deref() {
        Some(icon) if !icon.is_empty() => icon.to_string(),
        _ => skill_id.to_string(),
    };
    SkillInfo {
        name: skill
            .levels
            .first()
            .map(|level| level.name.clone())
            .unwrap_or_default(),
        icon_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn skill(icon_id: Option<&str>, name: &str) -> RawSkill {
        serde_json::from_value(json!({
            "skillId": "x",
            "iconId": icon_id,
            "levels": [{ "name": name, "description": "..." }]
        }))
        .unwrap()
    }

    #[test]
    fn icon_falls_back_to_skill_id() {
        let info = skill_info("skchr_amiya_2", &skill(None, "Spirit Burst"));
        assert_eq!(info.icon_id, "skchr_amiya_2");

        let info = skill_info("skchr_amiya_2", &skill(Some(""), "Spirit Burst"));
        assert_eq!(info.icon_id, "skchr_amiya_2");
    }

    #[test]
    fn explicit_icon_is_used() {
        let info = skill_info("skchr_amiya2_1", &skill(Some("skchr_amiya_1"), "Sword"));
        assert_eq!(info.icon_id, "skchr_amiya_1");
        assert_eq!(info.name, "Sword");
    }

    #[test]
    fn primary_name_wins() {
        let primary: BTreeMap<_, _> = [("sk".to_string(), skill(None, "Global"))].into();
        let variant: BTreeMap<_, _> = [
            ("sk".to_string(), skill(None, "国服")),
            ("sk_cn".to_string(), skill(None, "新技能")),
        ]
        .into();
        let merged = merge_skills(&primary, &variant);
        assert_eq!(merged["sk"].name, "Global");
        assert_eq!(merged["sk_cn"].name, "新技能");
    }

    #[test]
    fn validate_normalizes_levels_and_requires_a_name() {
        let mut doc = json!({ "sk": { "levels": { "0": { "name": "Burst" } } } });
        validate("skill_table.json", &mut doc).unwrap();
        assert!(doc["sk"]["levels"].is_array());

        let mut doc = json!({ "sk": { "levels": [{ "name": "" }] } });
        let err = validate("skill_table.json", &mut doc).unwrap_err();
        assert_eq!(err.field(), Some("levels[0].name"));

        let mut doc = json!({ "sk": { "levels": [] } });
        let err = validate("skill_table.json", &mut doc).unwrap_err();
        assert_eq!(err.field(), Some("levels"));
    }
}
