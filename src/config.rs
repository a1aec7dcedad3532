//! Configuration file handling.
//!
//! `ftv` reads an optional TOML config from the platform config
//! directory (`~/.config/ftv/config.toml` on Linux). A missing file
//! means defaults; fields left out of the file keep their defaults.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub report: ReportConfig,
}

/// Player settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Playback speed multiplier applied at startup (0.1-16).
    pub speed: f64,
    /// Host frame rate for the playback loop.
    pub fps: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { speed: 1.0, fps: 60 }
    }
}

/// Report export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Page width in pixels.
    pub chart_width: u32,
    /// Page height in pixels.
    pub chart_height: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_width: 1280,
            chart_height: 960,
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("could not determine the config directory")?;
        Ok(dir.join("ftv").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not
    /// exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        Self::parse(&content).with_context(|| format!("invalid config file {:?}", path))
    }

    /// Parse a config from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the config file, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {:?}", parent))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).with_context(|| format!("failed to write {:?}", path))?;
        Ok(())
    }
}
