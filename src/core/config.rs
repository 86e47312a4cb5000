//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.artspace/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The catalog itself is compiled in and cannot be changed from here.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ArtSpaceConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_collection: Option<usize>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub accent: Option<Accent>,
    pub show_hints: Option<bool>,
}

/// Accent colour for titles, borders and the navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Teal,
    Cyan,
    Magenta,
    Yellow,
    Green,
    Blue,
    White,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_START_COLLECTION: usize = 0;
pub const DEFAULT_LOG_FILE: &str = "artspace.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_collection: usize,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub accent: Accent,
    pub show_hints: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.artspace/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".artspace").join("config.toml"))
}

/// Load config from `~/.artspace/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ArtSpaceConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ArtSpaceConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ArtSpaceConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ArtSpaceConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ArtSpaceConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ArtSpaceConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# ArtSpace Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_collection = 0               # Or set ARTSPACE_START_COLLECTION
# log_file = "artspace.log"          # Or set ARTSPACE_LOG_FILE
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"

# [display]
# accent = "teal"                    # "teal", "cyan", "magenta", "yellow", "green", "blue", "white"
# show_hints = true
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_collection` and `cli_log_file` are from CLI flags (None = not specified).
pub fn resolve(
    config: &ArtSpaceConfig,
    cli_collection: Option<usize>,
    cli_log_file: Option<&str>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_collection, cli_log_file, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], reading env vars through `env` instead of the process
/// environment.
pub fn resolve_with_env(
    config: &ArtSpaceConfig,
    cli_collection: Option<usize>,
    cli_log_file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start collection: CLI → env → config → default
    let start_collection = cli_collection
        .or_else(|| env_parse(&env, "ARTSPACE_START_COLLECTION"))
        .or(config.general.start_collection)
        .unwrap_or(DEFAULT_START_COLLECTION);

    // Log file: CLI → env → config → default
    let log_file = cli_log_file
        .map(|s| s.to_string())
        .or_else(|| env("ARTSPACE_LOG_FILE"))
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Log level: env → config → default
    let log_level = env("ARTSPACE_LOG_LEVEL")
        .and_then(|level| parse_level(&level))
        .or_else(|| config.general.log_level.as_deref().and_then(parse_level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        start_collection,
        log_file: PathBuf::from(log_file),
        log_level,
        accent: config.display.accent.unwrap_or_default(),
        show_hints: config.display.show_hints.unwrap_or(true),
    }
}

fn env_parse<T: FromStr>(env: impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = env(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", name, raw);
            None
        }
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match LevelFilter::from_str(level.trim()) {
        Ok(filter) => Some(filter),
        Err(_) => {
            warn!("Unknown log level {:?}, using default", level);
            None
        }
    }
}
