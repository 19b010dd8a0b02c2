use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shades::Thresholds;
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub tone: Thresholds,
    pub ui: UiConfig,
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Source color shown on startup (6 hex digits, `#` optional).
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the "copied" toast stays visible.
    pub toast_millis: u64,
    /// Redraw interval used to expire toasts.
    pub tick_millis: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy through the OSC 52 terminal escape.
    pub osc52: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            source: defaults::SOURCE.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_millis: defaults::TOAST_MILLIS,
            tick_millis: defaults::TICK_MILLIS,
        }
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self { osc52: true }
    }
}

pub fn project_dirs() -> anyhow::Result<ProjectDirs> {
    ProjectDirs::from("dev", "shades", "shades").context("ProjectDirs unavailable")
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

/// Reads the config file. A missing file is not an error: the defaults are
/// used and nothing is written back.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}
