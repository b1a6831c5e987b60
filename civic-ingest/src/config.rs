//! Configuration resolution for civic-ingest
//!
//! The Gemini API key is resolved with ENV → TOML priority. A `.env` file in
//! the working directory is loaded into the environment first.

use civic_common::config::IngestConfig;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::{IngestError, IngestResult};

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Result of looking for a `.env` file
#[derive(Debug)]
pub enum DotenvStatus {
    Loaded(PathBuf),
    NotFound,
    /// Present but unreadable or malformed; ignored
    Invalid(String),
}

impl DotenvStatus {
    /// Log the outcome once tracing is initialized
    pub fn log(&self) {
        match self {
            DotenvStatus::Loaded(path) => info!("Loaded environment from {}", path.display()),
            DotenvStatus::NotFound => debug!("No .env file found"),
            DotenvStatus::Invalid(e) => warn!("Ignoring unreadable .env file: {}", e),
        }
    }
}

/// Load `.env` from the working directory, if present
///
/// Values already set in the environment are overwritten.
pub fn load_dotenv() -> DotenvStatus {
    match dotenvy::dotenv_override() {
        Ok(path) => DotenvStatus::Loaded(path),
        Err(e) if e.not_found() => DotenvStatus::NotFound,
        Err(e) => DotenvStatus::Invalid(e.to_string()),
    }
}

/// Resolve the Gemini API key (ENV → TOML)
pub fn resolve_gemini_api_key(config: &IngestConfig) -> IngestResult<String> {
    let env_key = std::env::var(API_KEY_ENV).ok().filter(|k| is_valid_key(k));
    let toml_key = config
        .gemini_api_key
        .as_ref()
        .filter(|k| is_valid_key(k))
        .cloned();

    if env_key.is_some() && toml_key.is_some() {
        warn!(
            "Gemini API key found in both {} and TOML config. Using the environment variable.",
            API_KEY_ENV
        );
    }

    if let Some(key) = env_key {
        info!("Gemini API key loaded from environment variable");
        return Ok(key);
    }

    if let Some(key) = toml_key {
        info!("Gemini API key loaded from TOML config");
        return Ok(key);
    }

    Err(IngestError::Config(format!(
        "Gemini API key not configured. Set it with one of:\n\
         1. Environment: {}=your-key-here (a .env file works too)\n\
         2. TOML config: [ingest] gemini_api_key = \"your-key\"",
        API_KEY_ENV
    )))
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}
