use arkdata_core::assets::SKILL_ICON_TEMPLATE;

/// The kinds of image the pipeline downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCategory {
    Operators,
    Items,
    Modules,
    Skills,
    Other,
}

const ALL_CATEGORIES: &[ImageCategory] = &[
    ImageCategory::Operators,
    ImageCategory::Items,
    ImageCategory::Modules,
    ImageCategory::Skills,
    ImageCategory::Other,
];

const OPERATOR_SOURCES: &[&str] = &[
    "https://raw.githubusercontent.com/Aceship/Arknight-Images/main/avatars/{id}.png",
    "https://raw.githubusercontent.com/ArknightsAssets/ArknightsAssets/cn/assets/torappu/dynamicassets/arts/charavatars/{id}.png",
    "https://raw.githubusercontent.com/ArknightsAssets/ArknightsAssets/cn/assets/torappu/dynamicassets/arts/charportraits/{id}_2.png",
];

const ITEM_SOURCES: &[&str] = &[
    "https://raw.githubusercontent.com/Aceship/Arknight-Images/main/items/{id}.png",
    "https://raw.githubusercontent.com/ArknightsAssets/ArknightsAssets/cn/assets/torappu/dynamicassets/arts/items/icons/{id}.png",
];

const MODULE_SOURCES: &[&str] = &[
    "https://raw.githubusercontent.com/ArknightsAssets/ArknightsAssets/cn/assets/torappu/dynamicassets/arts/ui/uniequipimg/{id}.png",
];

const SKILL_SOURCES: &[&str] = &[SKILL_ICON_TEMPLATE];

const OTHER_SOURCES: &[&str] = &[
    "https://raw.githubusercontent.com/ArknightsAssets/ArknightsAssets/cn/assets/torappu/dynamicassets/ui/sandboxv2/%5Buc%5Dcommon/battle/sandbox_construct_character_menu/{id}.png",
];

impl ImageCategory {
    pub fn all() -> &'static [ImageCategory] {
        ALL_CATEGORIES
    }

    /// Directory name under the image root.
    pub fn subdir(&self) -> &'static str {
        match self {
            Self::Operators => "operators",
            Self::Items => "items",
            Self::Modules => "modules",
            Self::Skills => "skills",
            Self::Other => "other",
        }
    }

    /// Candidate URL templates, tried in order. `{id}` is the image id.
    pub fn sources(&self) -> &'static [&'static str] {
        match self {
            Self::Operators => OPERATOR_SOURCES,
            Self::Items => ITEM_SOURCES,
            Self::Modules => MODULE_SOURCES,
            Self::Skills => SKILL_SOURCES,
            Self::Other => OTHER_SOURCES,
        }
    }
}

impl std::fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.subdir())
    }
}

/// Id of the placeholder image shown for anything that has no picture.
pub const MISSING_IMAGE_ID: &str = "missing";
