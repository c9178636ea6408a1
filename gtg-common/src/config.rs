//! Configuration loading and config file resolution
//!
//! Bootstrap configuration lives in a single TOML file. Every section and
//! every key is optional; a missing or unreadable file degrades to built-in
//! defaults with a warning instead of aborting the run.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "GTG_CONFIG";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct TomlConfig {
    /// RAWG API key (environment variable takes precedence)
    #[serde(default)]
    pub rawg_api_key: Option<String>,

    /// Path of the generated dataset file
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    /// Number of games kept after sampling
    #[serde(default)]
    pub target_size: Option<usize>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Catalog fetch parameters (optional)
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Admission filter thresholds (optional)
    #[serde(default)]
    pub admission: AdmissionConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Catalog pagination and rate limiting
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FetchConfig {
    /// First release year requested from the catalog
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Last release year requested from the catalog (inclusive)
    #[serde(default = "default_end_year")]
    pub end_year: i32,

    /// Results per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Upper bound on pages fetched
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Minimum delay between two catalog requests
    #[serde(default = "default_request_interval_ms")]
    pub request_interval_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: default_end_year(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
            request_interval_ms: default_request_interval_ms(),
        }
    }
}

/// Thresholds a raw record must meet to become a game entry
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct AdmissionConfig {
    /// Oldest accepted release year (inclusive)
    #[serde(default = "default_min_year")]
    pub min_year: i32,

    /// Minimum catalog ratings count (inclusive)
    #[serde(default = "default_min_ratings_count")]
    pub min_ratings_count: i64,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            min_year: default_min_year(),
            min_ratings_count: default_min_ratings_count(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_start_year() -> i32 {
    2010
}

fn default_end_year() -> i32 {
    2024
}

fn default_page_size() -> u32 {
    40
}

fn default_max_pages() -> u32 {
    30
}

fn default_request_interval_ms() -> u64 {
    200
}

fn default_min_year() -> i32 {
    2010
}

fn default_min_ratings_count() -> i64 {
    500
}

/// Config file resolution, in priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. Per-user config directory (`<config_dir>/gtg/dataset.toml`)
///
/// Returns `None` when no candidate exists; callers fall back to defaults.
pub fn resolve_config_path(cli_arg: Option<&Path>, env_var_name: &str) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: per-user config file, only if present
    default_config_path().filter(|p| p.exists())
}

/// Platform config file location (`~/.config/gtg/dataset.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gtg").join("dataset.toml"))
}

/// Parse a TOML config file
///
/// Strict: a missing file or a syntax error is reported as `Error::Config`.
pub fn read_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed ({}): {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))
}

/// Where the effective bootstrap config came from
#[derive(Debug)]
pub enum ConfigOrigin {
    /// Parsed from this file
    File(PathBuf),
    /// No candidate file; built-in defaults
    NotFound,
    /// Candidate file unreadable or invalid; built-in defaults
    Invalid(Error),
}

impl ConfigOrigin {
    /// Report the origin (info for a file or no file, warn for a bad file)
    ///
    /// Kept separate from loading so callers can read the config before
    /// their subscriber is installed.
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => info!("Loaded config from {}", path.display()),
            ConfigOrigin::NotFound => info!("No config file found, using built-in defaults"),
            ConfigOrigin::Invalid(e) => warn!("{}. Using built-in defaults.", e),
        }
    }

    pub fn is_defaulted(&self) -> bool {
        !matches!(self, ConfigOrigin::File(_))
    }
}

/// Load the bootstrap config, degrading to defaults
///
/// Never fails: a missing path, unreadable file or invalid TOML yields
/// `TomlConfig::default()`. Nothing is logged here; see [`ConfigOrigin::log`].
pub fn load_toml_config(path: Option<&Path>) -> (TomlConfig, ConfigOrigin) {
    let Some(path) = path else {
        return (TomlConfig::default(), ConfigOrigin::NotFound);
    };

    match read_toml_config(path) {
        Ok(config) => (config, ConfigOrigin::File(path.to_path_buf())),
        Err(e) => (TomlConfig::default(), ConfigOrigin::Invalid(e)),
    }
}
