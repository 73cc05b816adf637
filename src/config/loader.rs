//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Project config (luaudoc.toml, or the file given with --config)
//! 3. Environment variables (LUAUDOC_* prefix, nested keys separated by `__`)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::types::{DocError, Result};

/// Default project config file name
pub const PROJECT_CONFIG_FILE: &str = "luaudoc.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "LUAUDOC_";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → project file (if present) → env vars
    pub fn load(config_path: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if config_path.exists() {
            debug!("Loading project config from: {}", config_path.display());
            figment = figment.merge(Toml::file(config_path));
        } else {
            debug!(
                "No project config at {}, using built-in rules",
                config_path.display()
            );
        }

        // e.g. LUAUDOC_PROJECT__OUTPUT_DIR -> project.output_dir
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| DocError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file path
    pub fn show_path(config_path: &Path) {
        println!("Configuration paths:");
        println!();

        let exists = if config_path.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, config_path.display());
        println!("  Env:     {}*", ENV_PREFIX);
    }

    /// Show current effective configuration
    pub fn show_config(config_path: &Path, as_json: bool) -> Result<()> {
        let config = Self::load(config_path)?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config).map_err(|e| DocError::Config(e.to_string()))?
            );
        }

        Ok(())
    }
}

impl Config {
    /// Analysis root as configured
    pub fn project_root(&self) -> &Path {
        &self.project.root
    }

    /// Output directory, resolved against the project root
    pub fn output_root(&self) -> PathBuf {
        resolve_against(&self.project.root, &self.project.output_dir)
    }

    /// Changelog document, resolved against the project root
    pub fn changelog_path(&self) -> PathBuf {
        resolve_against(&self.project.root, &self.changelog.path)
    }
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
