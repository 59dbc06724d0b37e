//! Upstream document locations.

/// A table published in both the primary locale and the CN region variant.
#[derive(Debug, Clone, Copy)]
pub struct TableSource {
    /// Table name used in error messages.
    pub name: &'static str,
    pub primary: &'static str,
    pub variant: &'static str,
}

macro_rules! kengxxiao {
    ($file:literal) => {
        TableSource {
            name: $file,
            primary: concat!(
                "https://raw.githubusercontent.com/Kengxxiao/ArknightsGameData_YoStar/main/en_US/gamedata/excel/",
                $file
            ),
            variant: concat!(
                "https://raw.githubusercontent.com/Kengxxiao/ArknightsGameData/master/zh_CN/gamedata/excel/",
                $file
            ),
        }
    };
}

macro_rules! arknights_assets {
    ($file:literal) => {
        TableSource {
            name: $file,
            primary: concat!(
                "https://raw.githubusercontent.com/ArknightsAssets/ArknightsGamedata/refs/heads/master/en/gamedata/excel/",
                $file
            ),
            variant: concat!(
                "https://raw.githubusercontent.com/ArknightsAssets/ArknightsGamedata/refs/heads/master/cn/gamedata/excel/",
                $file
            ),
        }
    };
}

pub const CHARACTER_TABLE: TableSource = kengxxiao!("character_table.json");
pub const CHAR_PATCH_TABLE: TableSource = kengxxiao!("char_patch_table.json");
pub const SKILL_TABLE: TableSource = kengxxiao!("skill_table.json");

pub const BUILDING_TABLE: TableSource = arknights_assets!("building_data.json");
pub const ITEM_TABLE: TableSource = arknights_assets!("item_table.json");
pub const UNIEQUIP_TABLE: TableSource = arknights_assets!("uniequip_table.json");

/// Latest commit of the YoStar data repository.
pub const YOSTAR_COMMIT_URL: &str =
    "https://api.github.com/repos/Kengxxiao/ArknightsGameData_YoStar/commits/main";

/// Latest commit of the CN data repository.
pub const CN_COMMIT_URL: &str =
    "https://api.github.com/repos/Kengxxiao/ArknightsGameData/commits/master";

/// Makes the commits endpoint answer with the bare SHA as plain text.
pub const COMMIT_SHA_ACCEPT: &str = "application/vnd.github.VERSION.sha";

