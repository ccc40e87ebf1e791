//! Storefront configuration.

use serde::{Deserialize, Serialize};

/// Error raised when a configuration override cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },

    #[error("Page size for '{0}' must be at least 1")]
    ZeroPageSize(String),
}

/// Settings for the catalog listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Base URL of the remote catalog API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Page size on wide viewports.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Page size once the viewport is narrow.
    #[serde(default = "default_narrow_page_size")]
    pub narrow_page_size: u32,
    /// Widths strictly below this many CSS pixels count as narrow.
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint_px: u32,
    /// Route of the product detail view.
    #[serde(default = "default_detail_route")]
    pub detail_route: String,
    /// Route of the cart view.
    #[serde(default = "default_cart_route")]
    pub cart_route: String,
}

fn default_api_base() -> String {
    "https://dummyjson.com".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_narrow_page_size() -> u32 {
    5
}

// Matches the `md` breakpoint (48em).
fn default_narrow_breakpoint() -> u32 {
    768
}

fn default_detail_route() -> String {
    "/item-page".to_string()
}

fn default_cart_route() -> String {
    "/cart".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            default_page_size: default_page_size(),
            narrow_page_size: default_narrow_page_size(),
            narrow_breakpoint_px: default_narrow_breakpoint(),
            detail_route: default_detail_route(),
            cart_route: default_cart_route(),
        }
    }
}

impl StorefrontConfig {
    /// Keys recognised by [`StorefrontConfig::apply`].
    pub const KEYS: [&'static str; 6] = [
        "api_base",
        "default_page_size",
        "narrow_page_size",
        "narrow_breakpoint_px",
        "detail_route",
        "cart_route",
    ];

    /// Build a config from defaults plus flat key/value overrides.
    ///
    /// Unknown keys are ignored so a shared variable store can carry
    /// settings for other components.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            config.apply(key, value)?;
        }
        Ok(config)
    }

    /// Apply a single override.
    pub fn apply(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "api_base" => {
                let trimmed = value.trim_end_matches('/');
                if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        value,
                    });
                }
                self.api_base = trimmed.to_string();
            }
            "default_page_size" => self.default_page_size = parse_page_size(key, &value)?,
            "narrow_page_size" => self.narrow_page_size = parse_page_size(key, &value)?,
            "narrow_breakpoint_px" => {
                self.narrow_breakpoint_px = value.trim().parse().map_err(|_| {
                    ConfigError::InvalidValue {
                        key: key.to_string(),
                        value: value.clone(),
                    }
                })?
            }
            "detail_route" => self.detail_route = value,
            "cart_route" => self.cart_route = value,
            _ => {}
        }
        Ok(())
    }
}

fn parse_page_size(key: &str, value: &str) -> Result<u32, ConfigError> {
    let size: u32 = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    if size == 0 {
        return Err(ConfigError::ZeroPageSize(key.to_string()));
    }
    Ok(size)
}
