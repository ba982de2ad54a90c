// File: ./src/paths.rs
// Locates the per-user configuration file.
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

pub fn default_config_file() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "avisame")
        .context("Could not determine a config directory for this platform")?;
    Ok(dirs.config_dir().join("config.toml"))
}
