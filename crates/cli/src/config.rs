//! Configuration loading and management

use anyhow::{Context, Result};
use recipe_keeper_adapters::remote::HttpRecipeSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// sqlite, file, memory
    #[serde(default = "default_storage_backend")]
    pub backend: String,

    /// Database file (sqlite) or directory (file)
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// http, stub
    #[serde(default = "default_remote_provider")]
    pub provider: String,

    #[serde(default = "default_remote_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_storage_backend() -> String {
    "sqlite".to_string()
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./recipes.sqlite")
}

fn default_remote_provider() -> String {
    "http".to_string()
}

fn default_remote_base_url() -> String {
    HttpRecipeSource::DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            path: default_storage_path(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            provider: default_remote_provider(),
            base_url: default_remote_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("RECIPE_KEEPER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# recipe-keeper configuration

[general]
log_level = "info"

[storage]
backend = "sqlite"  # sqlite, file, memory
# Database file for sqlite, directory for file
path = "./recipes.sqlite"

[remote]
provider = "http"  # http, stub
base_url = "https://api-receitas-pi.vercel.app/receitas"
timeout_secs = 30
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_parses_to_defaults() {
        let parsed: AppConfig = toml::from_str(&AppConfig::example_toml()).unwrap();
        let defaults = AppConfig::default();

        assert_eq!(parsed.general.log_level, defaults.general.log_level);
        assert_eq!(parsed.storage.backend, defaults.storage.backend);
        assert_eq!(parsed.storage.path, defaults.storage.path);
        assert_eq!(parsed.remote.base_url, defaults.remote.base_url);
        assert_eq!(parsed.remote.timeout_secs, defaults.remote.timeout_secs);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let parsed: AppConfig = toml::from_str("[remote]\nprovider = \"stub\"\n").unwrap();

        assert_eq!(parsed.remote.provider, "stub");
        assert_eq!(parsed.remote.timeout_secs, 30);
        assert_eq!(parsed.storage.backend, "sqlite");
    }

    #[test]
    fn test_to_toml_round_trips() {
        let rendered = AppConfig::default().to_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.remote.provider, "http");
    }

    #[test]
    fn test_default_base_url_matches_http_source() {
        assert_eq!(
            AppConfig::default().remote.base_url,
            HttpRecipeSource::DEFAULT_BASE_URL
        );
    }
}
