use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::tabs::Tab;

/// Color overrides, each a `#RRGGBB` or `#RGB` string
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destructive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_dim: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Tab shown on startup
    #[serde(default)]
    pub default_tab: Tab,

    #[serde(default)]
    pub theme: ThemeConfig,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("crm-settings").join("config.toml"))
    }

    /// Load config from the user's config directory. With `write_default`,
    /// a missing file is created with the defaults.
    pub fn load(write_default: bool) -> Self {
        match Self::config_path() {
            Some(path) => Self::load_or_init(&path, write_default),
            None => {
                tracing::warn!("Could not find config directory");
                AppConfig::default()
            }
        }
    }

    /// Load `path`, writing the defaults there first if it is missing and
    /// `write_default` is set
    pub fn load_or_init(path: &Path, write_default: bool) -> Self {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = AppConfig::default();
        if write_default {
            if let Err(e) = config.save_to(path) {
                tracing::warn!("Failed to write default config: {}", e);
            }
        }
        config
    }

    /// Read a config file; unreadable or invalid files yield the default
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Failed to parse config: {}", e),
            },
            Err(e) => tracing::warn!("Failed to read config: {}", e),
        }
        AppConfig::default()
    }

    /// Save config to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            default_tab: Tab::Groups,
            theme: ThemeConfig {
                creation: Some("#16a34a".to_string()),
                ..Default::default()
            },
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        assert!(serialized.contains("default_tab = \"groups\""));

        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_tab, Tab::Database);
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig {
            default_tab: Tab::Groups,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path), config);
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_tab = \"billing\"").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
        assert_eq!(AppConfig::load_from(&dir.path().join("missing.toml")), AppConfig::default());
    }

    #[test]
    fn test_missing_file_written_only_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crm-settings").join("config.toml");

        assert_eq!(AppConfig::load_or_init(&path, false), AppConfig::default());
        assert!(!path.exists());
        assert!(!dir.path().join("crm-settings").exists());

        assert_eq!(AppConfig::load_or_init(&path, true), AppConfig::default());
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn test_existing_file_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_tab = \"groups\"\n").unwrap();

        let config = AppConfig::load_or_init(&path, true);
        assert_eq!(config.default_tab, Tab::Groups);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "default_tab = \"groups\"\n");
    }
}
