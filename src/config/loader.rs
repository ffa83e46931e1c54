//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use regex::Regex;
use thiserror::Error;

use crate::config::schema::RouterConfig;

/// Error type for configuration loading and router construction.
///
/// All variants are fatal: construction aborts and no partial router is
/// usable. Per-request outcomes are never errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid blacklist pattern {pattern:?}: {source}")]
    Blacklist {
        pattern: String,
        source: regex::Error,
    },

    #[error("the base router must have pretty URLs enabled")]
    PrettyUrlRequired,

    #[error("base router initialization failed: {0}")]
    Base(String),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RouterConfig = toml::from_str(&content)?;

    validate_config(&config)?;

    Ok(config)
}

/// Semantic validation (serde handles syntactic): every blacklist pattern
/// must be a valid regex. Runs before the config is accepted.
pub fn validate_config(config: &RouterConfig) -> Result<(), ConfigError> {
    for pattern in &config.blacklist {
        Regex::new(pattern).map_err(|source| ConfigError::Blacklist {
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}
