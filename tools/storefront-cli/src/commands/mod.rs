//! CLI command implementations.

pub mod config;
pub mod render;

use clap::{Args, Subcommand};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective settings.
    Show,
    /// Get a single setting.
    Get {
        /// Setting key.
        key: String,
    },
    /// Write a settings file holding the defaults.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the settings file.
    Validate,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Request path and query, as the component would receive it.
    #[arg(default_value = "/products")]
    pub path: String,

    /// Directory holding fixture responses.
    #[arg(short, long, default_value = "fixtures")]
    pub fixtures: String,

    /// Viewport width hint in CSS pixels.
    #[arg(long)]
    pub viewport_width: Option<u32>,

    /// Write the HTML to a file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}
