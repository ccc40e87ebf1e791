//! Settings commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;
use crate::settings::{generate_default_settings, SETTINGS_FILE_NAMES};
use edge_core::StorefrontConfig;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Storefront Settings");
    match &ctx.source {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "(defaults)"),
    }
    ctx.output.info("");
    for key in StorefrontConfig::KEYS {
        if let Some(value) = config_value(&ctx.config, key) {
            ctx.output.kv(key, &value);
        }
    }
    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let Some(value) = config_value(&ctx.config, key) else {
        bail!(
            "Unknown setting '{}'. Known settings: {}",
            key,
            StorefrontConfig::KEYS.join(", ")
        );
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(SETTINGS_FILE_NAMES[0]);
    if path.exists() && !force {
        bail!("{} already exists. Use --force to overwrite.", path.display());
    }

    fs::write(&path, generate_default_settings()?)?;
    ctx.output.success(&format!("Created {}", path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating settings");

    let Some(path) = &ctx.source else {
        ctx.output.warn("No settings file found; defaults apply");
        return Ok(());
    };
    ctx.output.kv("file", &path.display().to_string());

    for key in &ctx.unknown_keys {
        ctx.output.warn(&format!("Unknown key '{}' is ignored", key));
    }

    let config = &ctx.config;
    if config.narrow_page_size > config.default_page_size {
        ctx.output.warn(&format!(
            "narrow_page_size ({}) is larger than default_page_size ({})",
            config.narrow_page_size, config.default_page_size
        ));
    }
    for (key, route) in [
        ("detail_route", &config.detail_route),
        ("cart_route", &config.cart_route),
    ] {
        if !route.starts_with('/') {
            ctx.output
                .warn(&format!("{} '{}' is not an absolute path", key, route));
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": true,
            "file": path.display().to_string(),
            "unknown_keys": ctx.unknown_keys,
        }));
    }
    ctx.output.success("Settings are valid");
    Ok(())
}

/// Current value of `key` as text.
fn config_value(config: &StorefrontConfig, key: &str) -> Option<String> {
    let value = match key {
        "api_base" => config.api_base.clone(),
        "default_page_size" => config.default_page_size.to_string(),
        "narrow_page_size" => config.narrow_page_size.to_string(),
        "narrow_breakpoint_px" => config.narrow_breakpoint_px.to_string(),
        "detail_route" => config.detail_route.clone(),
        "cart_route" => config.cart_route.clone(),
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_a_value() {
        let config = StorefrontConfig::default();
        for key in StorefrontConfig::KEYS {
            assert!(config_value(&config, key).is_some(), "{}", key);
        }
        assert_eq!(config_value(&config, "theme"), None);
        assert_eq!(
            config_value(&config, "narrow_breakpoint_px").as_deref(),
            Some("768")
        );
    }
}
