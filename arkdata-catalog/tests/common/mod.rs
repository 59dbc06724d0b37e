use std::collections::BTreeMap;

use arkdata_catalog::*;
use arkdata_core::Rarity;

fn cost(id: &str, count: i64) -> LevelUpCost {
    LevelUpCost {
        id: id.to_string(),
        count,
    }
}

pub fn sample_document() -> ArkDocument {
    let mut operators = BTreeMap::new();
    operators.insert(
        "char_002_amiya".to_string(),
        Operator {
            name: "Amiya".to_string(),
            cn_only: false,
            profession: "Caster".to_string(),
            rarity: Rarity::Tier("TIER_5".to_string()),
            skill_level_up_costs: vec![vec![cost("3301", 5)]],
            promotions: vec![
                Promotion {
                    max_level: 50,
                    evolve_cost: vec![],
                },
                Promotion {
                    max_level: 70,
                    evolve_cost: vec![cost("4001", 20000), cost("30012", 4)],
                },
            ],
            skills: vec![Skill {
                id: "skchr_amiya_2".to_string(),
                name: "Spirit Burst".to_string(),
                icon_id: "skchr_amiya_2".to_string(),
                mastery_costs: vec![vec![cost("3303", 8)]],
            }],
            modules: vec![Module {
                id: "uniequip_002_amiya".to_string(),
                name: "Amiya's Module".to_string(),
                type_name1: Some("CCR".to_string()),
                kind: "X".to_string(),
                icon: "ccr-x".to_string(),
                description: "A module".to_string(),
                cn_only: true,
                cost: vec![vec![cost("mod_unlock_token", 1)], vec![], vec![]],
            }],
        },
    );

    let mut items = BTreeMap::new();
    items.insert(
        "30012".to_string(),
        Item {
            item_id: "30012".to_string(),
            name: "Orirock Cube".to_string(),
            description: "A cube".to_string(),
            rarity: Rarity::Tier("TIER_2".to_string()),
            icon_id: "MTL_SL_G2".to_string(),
            sort_id: 10002,
            classify_type: "MATERIAL".to_string(),
            item_type: "MATERIAL".to_string(),
            stage_drop_list: vec![StageDrop {
                stage_id: "main_01-07".to_string(),
                occ_per: "USUAL".to_string(),
            }],
            recipe: Some(Recipe {
                count: 1,
                costs: vec![
                    RecipeCost::material("30011", 3),
                    RecipeCost {
                        id: "4001".to_string(),
                        count: 100,
                        kind: Some("gold".to_string()),
                    },
                ],
            }),
            gain_exp: None,
        },
    );
    items.insert(
        "2001".to_string(),
        Item {
            item_id: "2001".to_string(),
            name: "Drill Battle Record".to_string(),
            description: String::new(),
            rarity: Rarity::Level(1),
            icon_id: "EXP_PLAYER_1".to_string(),
            sort_id: 2001,
            classify_type: "MATERIAL".to_string(),
            item_type: "CARD_EXP".to_string(),
            stage_drop_list: vec![],
            recipe: None,
            gain_exp: Some(200),
        },
    );

    ArkDocument {
        commit_hashes: CommitHashes {
            yostar: "aaa".to_string(),
            cn: "bbb".to_string(),
        },
        operators,
        items,
    }
}
