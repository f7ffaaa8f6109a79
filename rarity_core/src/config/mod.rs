//! Configuration loading from TOML files

mod settings;

pub use settings::{GeneralSettings, RarityConfig, RarityMultipliers, RarityWeights, ValuableSettings};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate a rarity config file
pub fn load_rarity_config(path: &Path) -> Result<RarityConfig, ConfigError> {
    let config: RarityConfig = load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate a rarity config from a TOML string
pub fn parse_rarity_config(content: &str) -> Result<RarityConfig, ConfigError> {
    let config: RarityConfig = parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// The bundled default configuration
pub fn default_config() -> RarityConfig {
    let toml = include_str!("../../config/rarity.toml");
    parse_rarity_config(toml).unwrap_or_else(|e| {
        log::warn!("bundled rarity.toml rejected ({}), using built-in defaults", e);
        RarityConfig::default()
    })
}
