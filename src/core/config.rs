//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.strands/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StrandsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub output_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DictionaryConfig {
    pub base_url: Option<String>,
    pub request_delay_ms: Option<u64>,
    pub fallback_definition: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_SITE_BASE_URL: &str = "https://www.strands.today";
pub const DEFAULT_DICTIONARY_BASE_URL: &str = "https://api.dictionaryapi.dev";
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;
pub const DEFAULT_FALLBACK_DEFINITION: &str = "A {len}-letter word related to {theme}.";
pub const DEFAULT_USER_AGENT: &str = concat!("strands-scraper/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub output_dir: PathBuf,
    pub site_base_url: String,
    pub user_agent: String,
    pub dictionary_base_url: String,
    pub request_delay: Duration,
    pub fallback_definition: String,
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

/// Returns the path to `~/.strands/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".strands").join("config.toml"))
}

/// Load config from `~/.strands/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StrandsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StrandsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StrandsConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(StrandsConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a specific config file.
pub fn load_config_from(path: &Path) -> Result<StrandsConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: StrandsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Strands Scraper Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# output_dir = "."                   # Or set STRANDS_OUT_DIR, or pass --out

# [site]
# base_url = "https://www.strands.today"        # Or set STRANDS_BASE_URL
# user_agent = "strands-scraper"

# [dictionary]
# base_url = "https://api.dictionaryapi.dev"    # Or set DICTIONARY_BASE_URL
# request_delay_ms = 1000            # Pause between lookups
# fallback_definition = "A {len}-letter word related to {theme}."
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_output_dir` is the `--out` flag (None = not specified).
pub fn resolve(config: &StrandsConfig, cli_output_dir: Option<&Path>) -> ResolvedConfig {
    // Output dir: CLI → env → config → default
    let output_dir = cli_output_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("STRANDS_OUT_DIR").ok().map(PathBuf::from))
        .or_else(|| config.general.output_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    // Site base URL: env → config → default
    let site_base_url = std::env::var("STRANDS_BASE_URL")
        .ok()
        .or_else(|| config.site.base_url.clone())
        .unwrap_or_else(|| DEFAULT_SITE_BASE_URL.to_string());

    // Dictionary base URL: env → config → default
    let dictionary_base_url = std::env::var("DICTIONARY_BASE_URL")
        .ok()
        .or_else(|| config.dictionary.base_url.clone())
        .unwrap_or_else(|| DEFAULT_DICTIONARY_BASE_URL.to_string());

    ResolvedConfig {
        output_dir,
        site_base_url: trim_base_url(site_base_url),
        user_agent: config
            .site
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        dictionary_base_url: trim_base_url(dictionary_base_url),
        request_delay: Duration::from_millis(
            config
                .dictionary
                .request_delay_ms
                .unwrap_or(DEFAULT_REQUEST_DELAY_MS),
        ),
        fallback_definition: config
            .dictionary
            .fallback_definition
            .clone()
            .unwrap_or_else(|| DEFAULT_FALLBACK_DEFINITION.to_string()),
    }
}

/// Paths are appended with a leading slash, so drop any trailing one.
fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
