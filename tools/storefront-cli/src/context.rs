//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use edge_core::StorefrontConfig;

use crate::output::Output;
use crate::settings::{Settings, SETTINGS_FILE_NAMES};

/// Execution context for CLI commands.
pub struct Context {
    /// Effective storefront settings.
    pub config: StorefrontConfig,
    /// File the settings were read from, if any.
    pub source: Option<PathBuf>,
    /// Keys in the settings file that nothing reads.
    pub unknown_keys: Vec<String>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, reading settings from `config_path` or the nearest
    /// settings file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let source = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => find_settings(&cwd),
        };

        let settings = match &source {
            Some(path) => Settings::load(path)?,
            None => Settings {
                config: StorefrontConfig::default(),
                unknown_keys: Vec::new(),
            },
        };

        Ok(Self {
            config: settings.config,
            source,
            unknown_keys: settings.unknown_keys,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

/// Find a settings file in `start` or its parents.
fn find_settings(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &SETTINGS_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}
