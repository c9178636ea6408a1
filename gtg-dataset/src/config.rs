//! Configuration resolution for gtg-dataset
//!
//! Secrets resolve with ENV → TOML priority. Run settings merge command-line
//! overrides over the TOML file over built-in defaults.

use gtg_common::config::{AdmissionConfig, FetchConfig, TomlConfig};
use gtg_common::{Error, Result};
use std::path::PathBuf;
use tracing::{info, warn};

/// Environment variable holding the RAWG API key
pub const RAWG_API_KEY_ENV: &str = "RAWG_API_KEY";

/// Default dataset location
pub const DEFAULT_OUTPUT_PATH: &str = "games.json";

/// Default corpus size after sampling
pub const DEFAULT_TARGET_SIZE: usize = 500;

/// Resolve the RAWG API key
///
/// **Priority:** ENV → TOML
pub fn resolve_rawg_api_key(toml_config: &TomlConfig) -> Result<String> {
    let env_key = std::env::var(RAWG_API_KEY_ENV)
        .ok()
        .filter(|key| is_valid_key(key));
    let toml_key = toml_config
        .rawg_api_key
        .as_deref()
        .filter(|key| is_valid_key(key));

    if env_key.is_some() && toml_key.is_some() {
        warn!(
            "RAWG API key found in multiple sources: environment, TOML. Using environment (highest priority)."
        );
    }

    if let Some(key) = env_key {
        info!("RAWG API key loaded from environment variable");
        return Ok(key.trim().to_string());
    }

    if let Some(key) = toml_key {
        info!("RAWG API key loaded from TOML config");
        return Ok(key.trim().to_string());
    }

    Err(Error::Config(format!(
        "RAWG API key not configured. Please configure using one of:\n\
         1. Environment: {}=your-key-here\n\
         2. TOML config: ~/.config/gtg/dataset.toml (rawg_api_key = \"your-key\")\n\
         \n\
         Obtain API key at: https://rawg.io/apidocs",
        RAWG_API_KEY_ENV
    )))
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

/// Command-line values that take precedence over the TOML file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_path: Option<PathBuf>,
    pub target_size: Option<usize>,
}

/// Effective settings for one build run
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSettings {
    pub output_path: PathBuf,
    pub target_size: usize,
    pub fetch: FetchConfig,
    pub admission: AdmissionConfig,
}

impl BuildSettings {
    /// Merge: CLI → TOML → defaults
    pub fn resolve(toml_config: &TomlConfig, overrides: &CliOverrides) -> Self {
        let output_path = overrides
            .output_path
            .clone()
            .or_else(|| toml_config.output_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        let target_size = overrides
            .target_size
            .or(toml_config.target_size)
            .unwrap_or(DEFAULT_TARGET_SIZE);

        Self {
            output_path,
            target_size,
            fetch: toml_config.fetch.clone(),
            admission: toml_config.admission,
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self::resolve(&TomlConfig::default(), &CliOverrides::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_key() {
        assert!(is_valid_key("abc123"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("   \t"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = BuildSettings::default();
        assert_eq!(settings.output_path, PathBuf::from("games.json"));
        assert_eq!(settings.target_size, 500);
        assert_eq!(settings.fetch, FetchConfig::default());
        assert_eq!(settings.admission, AdmissionConfig::default());
    }

    #[test]
    fn test_cli_overrides_toml() {
        let toml_config = TomlConfig {
            output_path: Some(PathBuf::from("from_toml.json")),
            target_size: Some(100),
            ..Default::default()
        };

        let from_toml = BuildSettings::resolve(&toml_config, &CliOverrides::default());
        assert_eq!(from_toml.output_path, PathBuf::from("from_toml.json"));
        assert_eq!(from_toml.target_size, 100);

        let overrides = CliOverrides {
            output_path: Some(PathBuf::from("cli.json")),
            target_size: Some(25),
        };
        let from_cli = BuildSettings::resolve(&toml_config, &overrides);
        assert_eq!(from_cli.output_path, PathBuf::from("cli.json"));
        assert_eq!(from_cli.target_size, 25);
    }
}
