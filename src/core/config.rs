//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.kosovo-unis/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::CityFilter;
use crate::core::stats::DEFAULT_TOP_N;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_city: Option<String>,
    pub top_n: Option<usize>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExportConfig {
    pub directory: Option<String>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub city: Option<String>,
    pub export_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_EXPORT_DIR: &str = ".";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

pub const ENV_DEFAULT_CITY: &str = "KOSOVO_UNIS_DEFAULT_CITY";
pub const ENV_EXPORT_DIR: &str = "KOSOVO_UNIS_EXPORT_DIR";
pub const ENV_LOG_LEVEL: &str = "KOSOVO_UNIS_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub default_city: CityFilter,
    pub top_n: usize,
    pub log_level: LevelFilter,
    pub export_dir: PathBuf,
    /// Values that were rejected while resolving. Reported by the caller
    /// once logging is up.
    pub warnings: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            default_city: CityFilter::All,
            top_n: DEFAULT_TOP_N,
            log_level: DEFAULT_LOG_LEVEL,
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            warnings: Vec::new(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.kosovo-unis/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".kosovo-unis").join("config.toml"))
}

/// Load config from `~/.kosovo-unis/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AppConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AppConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AppConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Kosovo Universities browser configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_city = "All Cities"       # or one of: Gjilan, Ferizaj, Prizren, Prishtina,
#                                   #   Peja, Gjakova, Mitrovica, Lipjan
# top_n = 5                         # length of the "largest universities" ranking
# log_level = "debug"               # off, error, warn, info, debug, trace

# [export]
# directory = "."                   # Or set KOSOVO_UNIS_EXPORT_DIR
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AppConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &AppConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ResolvedConfig::default();
    let mut warnings = Vec::new();

    // City: CLI → env → config → default
    let default_city = cli
        .city
        .clone()
        .or_else(|| env(ENV_DEFAULT_CITY))
        .or_else(|| config.general.default_city.clone())
        .map(|name| match CityFilter::parse(&name) {
            Some(filter) => filter,
            None => {
                warnings.push(format!("Unknown city '{}', falling back to All Cities", name));
                CityFilter::All
            }
        })
        .unwrap_or(defaults.default_city);

    // Export directory: CLI → env → config → default
    let export_dir = cli
        .export_dir
        .clone()
        .or_else(|| env(ENV_EXPORT_DIR).map(PathBuf::from))
        .or_else(|| config.export.directory.as_ref().map(PathBuf::from))
        .unwrap_or(defaults.export_dir);

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env(ENV_LOG_LEVEL))
        .or_else(|| config.general.log_level.clone())
        .map(|level| match level.parse::<LevelFilter>() {
            Ok(filter) => filter,
            Err(_) => {
                warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, DEFAULT_LOG_LEVEL
                ));
                DEFAULT_LOG_LEVEL
            }
        })
        .unwrap_or(defaults.log_level);

    let top_n = config.general.top_n.unwrap_or(defaults.top_n).max(1);

    ResolvedConfig {
        default_city,
        top_n,
        log_level,
        export_dir,
        warnings,
    }
}
