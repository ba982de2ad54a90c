// File: ./src/config.rs
// Handles configuration loading and defaults.
use anyhow::{Error, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_timezone() -> String {
    "America/Lima".to_string()
}

fn default_soon_window() -> i64 {
    crate::scheduler::DEFAULT_SOON_WINDOW_SECS
}

fn default_placeholder_title() -> String {
    "Tarea sin nombre".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// IANA name of the single fixed zone all date arithmetic runs in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Ceiling in seconds under which a reminder is imminent enough to
    /// warrant an immediate deferred fire instead of a later polling check.
    #[serde(default = "default_soon_window")]
    pub soon_window_secs: i64,
    /// Title used when normalization leaves nothing behind.
    #[serde(default = "default_placeholder_title")]
    pub placeholder_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            timezone: default_timezone(),
            soon_window_secs: default_soon_window(),
            placeholder_title: default_placeholder_title(),
        }
    }
}

impl Config {
    /// Load the configuration from disk.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(path: &Path) -> Result<Self> {
        // Explicitly detect missing file so callers can fall back to defaults.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Helper to detect whether an anyhow::Error indicates that the config
    /// file was missing, so callers can distinguish "use the defaults" from
    /// a real read/parse failure.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        // Walk the error chain and look for an underlying IO NotFound.
        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// The configured timezone, parsed.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|e| anyhow::anyhow!("Unknown timezone '{}': {}", self.timezone, e))
    }
}
