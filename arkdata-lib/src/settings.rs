//! User settings.
//!
//! Read from `~/.config/arkdata/settings.toml`. Every key is optional and
//! a missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where `arkdata.json` is written. Relative to the root unless absolute.
    pub output_dir: PathBuf,
    /// Where downloaded images go. Relative to the root unless absolute.
    pub images_dir: PathBuf,
    /// Image downloads in flight at once.
    pub download_concurrency: usize,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("jsondata"),
            images_dir: PathBuf::from("images"),
            download_concurrency: 8,
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Load the shared settings file.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings: Settings =
            toml::from_str(&contents).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.download_concurrency = settings.download_concurrency.max(1);
        Ok(settings)
    }

    pub fn output_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    pub fn images_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.images_dir)
    }
}

/// Canonical path to the settings file: `~/.config/arkdata/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("arkdata").join("settings.toml")
}

/// Resolve the working root: the CLI override if given, else the current
/// directory.
pub fn resolve_root(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
