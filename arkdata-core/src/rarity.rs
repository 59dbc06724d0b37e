use serde::{Deserialize, Serialize};

/// Rarity as the upstream tables encode it.
///
/// Current tables use tier strings (`"TIER_6"`); older snapshots and some
/// item records use bare numbers. The value is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rarity {
    Tier(String),
    Level(i64),
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tier(tier) => write!(f, "{tier}"),
            Self::Level(level) => write!(f, "{level}"),
        }
    }
}
