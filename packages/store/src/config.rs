//! # Application configuration — `gym.toml`
//!
//! Settings the UI reads at start-up. Every section is optional, so a missing
//! or empty file is the same as [`GymConfig::default()`].
//!
//! ```toml
//! [site]
//! name = "Fitness First Gym"
//!
//! [storage]
//! key = "fitness-ui-prototype"   # localStorage key / file stem
//!
//! [notices]
//! dismiss_after_ms = 2100
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GymConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub notices: NoticeConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Brand name shown in the header and footer.
    #[serde(default = "default_site_name")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key the session is persisted under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeConfig {
    /// How long a notice stays on screen.
    #[serde(default = "default_dismiss_after")]
    pub dismiss_after_ms: u64,
}

fn default_site_name() -> String {
    "Fitness First Gym".to_string()
}

fn default_storage_key() -> String {
    "fitness-ui-prototype".to_string()
}

fn default_dismiss_after() -> u64 {
    2100
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
        }
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after(),
        }
    }
}

impl GymConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "gym.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, logging and falling back to defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Invalid {}: {}", Self::filename(), e);
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = GymConfig::from_toml("").unwrap();
        assert_eq!(config, GymConfig::default());
        assert_eq!(config.storage.key, "fitness-ui-prototype");
        assert_eq!(config.notices.dismiss_after_ms, 2100);
    }

    #[test]
    fn test_partial_sections() {
        let config = GymConfig::from_toml("[notices]\ndismiss_after_ms = 500\n").unwrap();
        assert_eq!(config.notices.dismiss_after_ms, 500);
        assert_eq!(config.site.name, "Fitness First Gym");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = GymConfig::default();
        config.storage.key = "gym-test".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(GymConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let config = GymConfig::from_toml_or_default("[storage\nkey = 1");
        assert_eq!(config, GymConfig::default());
    }
}
