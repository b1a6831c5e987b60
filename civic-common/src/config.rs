//! Configuration loading and database path resolution
//!
//! Bootstrap configuration comes from an optional TOML file. A missing file
//! is not an error: every field has a built-in default. The database path is
//! resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable `CIVIC_DATABASE_PATH`
//! 3. TOML config file (`database_path`)
//! 4. OS-dependent default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the database location
pub const DATABASE_PATH_ENV: &str = "CIVIC_DATABASE_PATH";

/// File name of the SQLite database inside the default data directory
pub const DATABASE_FILE_NAME: &str = "civic_tracker.db";

/// Default listen address of the query service
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Default LLM used for name extraction
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";

/// House lookup page; `{zip}` is replaced with the ZIP code
pub const DEFAULT_SOURCE_URL_TEMPLATE: &str =
    "https://ziplook.house.gov/htbin/findrep_house?ZIP={zip}";

/// Delay between two consecutive page fetches
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;

const APP_DIR_NAME: &str = "civic-tracker";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Path to the SQLite database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Listen address for the query service (host:port)
    #[serde(default)]
    pub bind_address: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub ingest: IngestConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Settings for the scrape run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// ZIP codes processed by a full run, in order
    #[serde(default = "default_zip_codes")]
    pub zip_codes: Vec<String>,

    /// Pause between page fetches, in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Gemini model name
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Gemini API key (the `GOOGLE_API_KEY` environment variable wins)
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Lookup page URL with a `{zip}` placeholder
    #[serde(default = "default_source_url_template")]
    pub source_url_template: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            zip_codes: default_zip_codes(),
            request_delay_ms: default_request_delay_ms(),
            gemini_model: default_gemini_model(),
            gemini_api_key: None,
            source_url_template: default_source_url_template(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_zip_codes() -> Vec<String> {
    // 90210 spans more than one congressional district
    vec!["11354".to_string(), "13662".to_string(), "90210".to_string()]
}

fn default_request_delay_ms() -> u64 {
    DEFAULT_REQUEST_DELAY_MS
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_source_url_template() -> String {
    DEFAULT_SOURCE_URL_TEMPLATE.to_string()
}

impl TomlConfig {
    /// Listen address, falling back to [`DEFAULT_BIND_ADDRESS`]
    pub fn bind_address(&self) -> &str {
        self.bind_address.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS)
    }
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

/// Where the loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// Built-in defaults; the default location (if any) had no file
    Defaults(Option<PathBuf>),
}

impl ConfigSource {
    /// Log where the configuration came from
    ///
    /// Config is read before the tracing subscriber exists, so binaries call
    /// this once logging is up.
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Defaults(Some(path)) => {
                warn!("No config file at {}, using defaults", path.display())
            }
            ConfigSource::Defaults(None) => {
                warn!("No config directory on this platform, using defaults")
            }
        }
    }
}

/// Load bootstrap configuration
///
/// An explicitly requested file must exist and parse. Without one, the
/// platform default location is tried and a missing file yields defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<(TomlConfig, ConfigSource)> {
    load_config_from(explicit, default_config_path())
}

fn load_config_from(
    explicit: Option<&Path>,
    default_path: Option<PathBuf>,
) -> Result<(TomlConfig, ConfigSource)> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let config = load_toml_config(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    match default_path {
        Some(path) if path.exists() => {
            let config = load_toml_config(&path)?;
            Ok((config, ConfigSource::File(path)))
        }
        other => Ok((TomlConfig::default(), ConfigSource::Defaults(other))),
    }
}

/// Platform config file location (`<config dir>/civic-tracker/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join("config.toml"))
}

/// Platform default database location
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR_NAME).join(DATABASE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DATABASE_FILE_NAME))
}

/// Resolve the database path (CLI → ENV → TOML → default)
pub fn resolve_database_path(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(DATABASE_PATH_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &config.database_path {
        return path.clone();
    }

    default_database_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: TomlConfig = toml::from_str("").unwrap();
        assert!(config.database_path.is_none());
        assert_eq!(config.bind_address(), DEFAULT_BIND_ADDRESS);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.ingest.zip_codes, vec!["11354", "13662", "90210"]);
        assert_eq!(config.ingest.request_delay_ms, 1000);
        assert_eq!(config.ingest.gemini_model, DEFAULT_GEMINI_MODEL);
        assert!(config.ingest.source_url_template.contains("{zip}"));
    }

    #[test]
    fn test_partial_ingest_section_keeps_other_defaults() {
        let config: TomlConfig = toml::from_str(
            r#"
            [ingest]
            zip_codes = ["10001"]
            "#,
        )
        .unwrap();
        assert_eq!(config.ingest.zip_codes, vec!["10001"]);
        assert_eq!(config.ingest.request_delay_ms, DEFAULT_REQUEST_DELAY_MS);
        assert!(config.ingest.gemini_api_key.is_none());
    }

    #[test]
    fn test_missing_default_file_yields_defaults() {
        let dir = std::env::temp_dir().join("civic-tracker-no-such-dir");
        let default_path = dir.join("config.toml");

        let (config, source) = load_config_from(None, Some(default_path.clone())).unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(source, ConfigSource::Defaults(Some(default_path)));

        let (_, source) = load_config_from(None, None).unwrap();
        assert_eq!(source, ConfigSource::Defaults(None));
    }
}
