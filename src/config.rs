use std::path::Path;

use serde::{Deserialize, Serialize};

/// Page settings. Every key is optional in the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    /// Project data location, relative to the page.
    pub data_path: String,
    /// Preference store key holding "light" or "dark".
    pub theme_key: String,
    /// Root element attribute mirroring the theme.
    pub theme_attribute: String,
    /// Label of the all-items filter button.
    pub all_label: String,
    /// Actions shown per card; the rest are dropped.
    pub max_actions: usize,
    pub meta_separator: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            data_path: "assets/projects.json".to_string(),
            theme_key: "theme".to_string(),
            theme_attribute: "data-theme".to_string(),
            all_label: "Tous".to_string(),
            max_actions: 4,
            meta_separator: " • ".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| format!("Invalid page config: {}", e))
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            log::warn!("{} not found, using default page config", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml_str(&raw)
    }
}
