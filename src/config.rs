use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Delay between starting each fetch request to avoid rate limiting (10ms)
pub const FETCH_STAGGER_DELAY_MS: u64 = 10;

/// User agent sent with every registry request
pub const USER_AGENT: &str = "installer-versions";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub registries: RegistriesConfig,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Registry-specific configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RegistriesConfig {
    pub forge: RegistryConfig,
    pub fabric: RegistryConfig,
}

/// Individual registry configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    pub enabled: bool,
    /// Overrides the registry's default base URL (mirrors, tests)
    pub base_url: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: None,
        }
    }
}

/// Returns the path to the data directory for installer-versions.
/// Uses $XDG_DATA_HOME/installer-versions if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/installer-versions,
/// or ./installer-versions if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("installer-versions.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("installer-versions")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "registries": {
                "forge": { "enabled": false }
            }
        }))
        .unwrap();

        assert_eq!(
            result.registries.forge,
            RegistryConfig {
                enabled: false,
                base_url: None
            }
        );
        assert_eq!(result.registries.fabric, RegistryConfig::default());
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "registries": {
                "forge": { "enabled": true, "baseUrl": "https://mirror.example/forge" },
                "fabric": { "enabled": false, "baseUrl": "https://mirror.example/fabric" }
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                registries: RegistriesConfig {
                    forge: RegistryConfig {
                        enabled: true,
                        base_url: Some("https://mirror.example/forge".to_string()),
                    },
                    fabric: RegistryConfig {
                        enabled: false,
                        base_url: Some("https://mirror.example/fabric".to_string()),
                    },
                }
            }
        );
    }

    #[test]
    fn config_load_reads_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"registries": {{"fabric": {{"enabled": false}}}}}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();

        assert!(config.registries.forge.enabled);
        assert!(!config.registries.fabric.enabled);
    }

    #[test]
    fn config_load_fails_for_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/installer-versions"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(
            path,
            PathBuf::from("/home/user/.local/share/installer-versions")
        );
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./installer-versions"));
    }
}
