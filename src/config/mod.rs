//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment prefix, e.g. `RESULTANT_BRIDGE__LOG_CAPTURES=false`
pub const ENV_PREFIX: &str = "RESULTANT";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bridge: BridgeConfig,
}

/// Settings for the panic-to-result bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Error message used when a panic payload is neither `&str` nor `String`
    pub fallback_message: String,
    /// Emit a `warn` event for every captured panic
    pub log_captures: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            fallback_message: "panic payload was not a string".to_string(),
            log_captures: true,
        }
    }
}

impl Config {
    /// Load from a file (format picked from its extension), then apply
    /// `RESULTANT_*` environment overrides.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.bridge.log_captures);
        assert_eq!(
            config.bridge.fallback_message,
            "panic payload was not a string"
        );
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml_str(
            r#"
            [bridge]
            log_captures = false
            "#,
        )
        .unwrap();

        assert!(!config.bridge.log_captures);
        assert_eq!(
            config.bridge.fallback_message,
            BridgeConfig::default().fallback_message
        );
    }

    #[test]
    fn test_from_toml_empty() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = Config::from_toml_str("[bridge]\nlog_captures = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("resultant-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[bridge]\nfallback_message = \"opaque panic\"\nlog_captures = true\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.bridge.fallback_message, "opaque panic");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/resultant.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
