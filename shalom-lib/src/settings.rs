//! Application settings (`~/.config/shalom/settings.toml`).
//!
//! Every field has a default, so a missing file or a missing table behaves
//! like an empty one. Command-line flags override what is read here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shalom_data::{DEFAULT_TABLE_PATH, MatchMode};

use crate::error::StoreError;

/// Base URL of the deployed application when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173/shalom/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source: SourceSettings,
    pub assets: AssetSettings,
}

/// Where the source table is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    pub base_url: String,
    pub table_path: String,
    /// Local copy of the table; takes precedence over `base_url` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            table_path: DEFAULT_TABLE_PATH.to_string(),
            file: None,
        }
    }
}

/// Where media assets are discovered and how records are matched to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    pub match_mode: MatchMode,
}

/// Canonical path to the settings file: `~/.config/shalom/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("shalom").join("settings.toml")
}

/// Load settings from `path`, falling back to defaults when it does not exist.
pub fn load_settings(path: &Path) -> Result<Settings, StoreError> {
    if !path.exists() {
        log::debug!("No settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| StoreError::settings(format!("Failed to read {}: {e}", path.display())))?;
    toml::from_str(&contents)
        .map_err(|e| StoreError::settings(format!("Failed to parse {}: {e}", path.display())))
}

impl Settings {
    /// Pretty-printed TOML, for display.
    pub fn to_toml_string(&self) -> Result<String, StoreError> {
        toml::to_string_pretty(self).map_err(|e| StoreError::settings(e.to_string()))
    }
}
