// Configuration module for leetui
// Handles loading and parsing configuration from ~/.config/leetui/config.toml

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::api::DEFAULT_ENDPOINT;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Upstream GraphQL endpoint, called directly (no relay hop)
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/leetui/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config: {}", e)),
        },
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/leetui/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("leetui")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = Config::default();
        assert_eq!(config.api.endpoint, "https://leetcode.com/graphql/");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_endpoint_override() {
        let config: Config = toml::from_str(
            r#"
[api]
endpoint = "http://localhost:8080/graphql"
"#,
        )
        .unwrap();
        assert_eq!(config.api.endpoint, "http://localhost:8080/graphql");
    }

    #[test]
    fn test_malformed_toml_fails_to_parse() {
        // load_config catches this and falls back to defaults with a warning
        for malformed in [
            "[api\nendpoint = \"x\"",
            "[api]\nendpoint = x",
            "[api]\nendpoint = \"x",
        ] {
            assert!(toml::from_str::<Config>(malformed).is_err());
        }
    }

    #[test]
    fn test_config_path_ends_with_expected_suffix() {
        let path = get_config_path();
        assert!(path.ends_with(".config/leetui/config.toml"));
    }
}
