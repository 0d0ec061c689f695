//! Dashboard configuration loaded from YAML.

use crate::store::DEFAULT_RECENT_LIMIT;
use crate::trend::{DEFAULT_TREND_DAYS, MAX_TREND_DAYS, TrendMode, is_valid_window};
use eyre::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name within the taskflow config directory.
const CONFIG_FILE: &str = "taskflow.yml";

/// Settings for the dashboard views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many tasks the recent activity panel shows
    pub recent_limit: usize,

    /// Width of the completion trend window in days
    pub trend_days: usize,

    /// Synthetic even split or real per-day history
    pub trend_mode: TrendMode,

    /// Seed the welcome tasks when starting with an empty store
    pub seed_welcome: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            trend_days: DEFAULT_TREND_DAYS,
            trend_mode: TrendMode::default(),
            seed_welcome: true,
        }
    }
}

impl Config {
    /// Default config path: `<config_dir>/taskflow/taskflow.yml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskflow").join(CONFIG_FILE))
    }

    /// Load config from an explicit path, or the default path if it exists.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from YAML text. Missing fields keep their defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content).context("Failed to parse config YAML")?
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !is_valid_window(self.trend_days) {
            bail!("trend_days must be between 1 and {}, got {}", MAX_TREND_DAYS, self.trend_days);
        }
        Ok(())
    }
}
