use std::path::PathBuf;

use arkdata_catalog::StoreError;
use arkdata_tables::TableError;
use thiserror::Error;

/// A merged record cannot be projected onto the public schema.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("operator {operator}: unknown skill '{skill}'")]
    UnknownSkill { operator: String, skill: String },

    #[error("module {0} has no secondary type name")]
    MissingModuleType(String),
}

impl MapError {
    pub fn unknown_skill(operator: impl Into<String>, skill: impl Into<String>) -> Self {
        Self::UnknownSkill {
            operator: operator.into(),
            skill: skill.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
