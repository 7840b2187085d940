//! Configuration loading
//!
//! Reads an optional JSON file into `RegistryConfig`. Missing fields take
//! their defaults; a missing file argument means all defaults.

use std::path::Path;

use anyhow::{Context, Result};
use trafficguard_core::RegistryConfig;

/// Load and validate the registry configuration
pub fn load_config(path: Option<&Path>) -> Result<RegistryConfig> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;

            let config: RegistryConfig = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?;

            log::info!("Loaded configuration from {}", path.display());
            config
        }
        None => {
            log::debug!("No config file given, using defaults");
            RegistryConfig::default()
        }
    };

    config.validate().context("Invalid registry configuration")?;
    Ok(config)
}
