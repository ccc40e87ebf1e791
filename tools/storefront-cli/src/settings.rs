//! Storefront settings files.
//!
//! A settings file is flat TOML using the same keys as the component's Spin
//! variables:
//!
//! ```toml
//! api_base = "https://dummyjson.com"
//! default_page_size = 10
//! narrow_page_size = 5
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use edge_core::StorefrontConfig;

/// File names searched for when no settings path is given.
pub const SETTINGS_FILE_NAMES: [&str; 2] = ["storefront.toml", ".storefront.toml"];

/// Parsed settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config: StorefrontConfig,
    /// Keys present in the file that the storefront does not read.
    pub unknown_keys: Vec<String>,
}

impl Settings {
    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid settings file: {}", path.display()))
    }

    /// Parse settings from TOML text.
    ///
    /// Values go through the same validation as the component's variables.
    pub fn parse(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content).context("Failed to parse TOML")?;

        let mut pairs = Vec::new();
        let mut unknown_keys = Vec::new();
        for (key, value) in &table {
            if !StorefrontConfig::KEYS.contains(&key.as_str()) {
                unknown_keys.push(key.clone());
                continue;
            }
            let value = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                other => bail!("Unsupported value for '{}': {}", key, other),
            };
            pairs.push((key.as_str(), value));
        }

        let config = StorefrontConfig::from_pairs(pairs)?;
        Ok(Self {
            config,
            unknown_keys,
        })
    }
}

/// Settings file content holding the defaults.
pub fn generate_default_settings() -> Result<String> {
    let body = toml::to_string_pretty(&StorefrontConfig::default())?;
    Ok(format!("# Storefront settings\n\n{}", body))
}
