//! Config Command
//!
//! Usage:
//!   luaudoc config show [-f json]
//!   luaudoc config path

use std::path::Path;

use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the merged effective configuration
pub fn show(config_path: &Path, format: &str) -> Result<()> {
    ConfigLoader::show_config(config_path, format == "json")
}

/// Show configuration sources
pub fn path(config_path: &Path) -> Result<()> {
    ConfigLoader::show_path(config_path);
    Ok(())
}
