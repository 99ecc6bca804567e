// SPDX-License-Identifier: MPL-2.0
//! Widget configuration, including loading and saving host-tunable defaults
//! to a `slider.toml` file.
//!
//! The live divider position is deliberately never persisted; only defaults
//! such as the keyboard step size and animation duration are stored here.
//!
//! # Examples
//!
//! ```no_run
//! use iced_compare::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.disable_hint_reappear = true;
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "slider.toml";
const APP_NAME: &str = "IcedCompare";

/// Keyboard step as a percentage of the slider's width.
pub const DEFAULT_STEP_PERCENT: f32 = 10.0;
pub const MIN_STEP_PERCENT: f32 = 1.0;
pub const MAX_STEP_PERCENT: f32 = 50.0;

/// Duration of the animated transition triggered by keys and seeks.
pub const DEFAULT_TRANSITION_MS: u64 = 400;

/// Window within which a repeated seek token is treated as a duplicate
/// delivery of the same host action and suppressed.
pub const SEEK_DEDUP_WINDOW_MS: u64 = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// When set, the hint never reappears after its first dismissal, even if
    /// the widget leaves and re-enters the viewport. Read once at build time.
    #[serde(default)]
    pub disable_hint_reappear: bool,
    #[serde(default)]
    pub step_percent: Option<f32>,
    #[serde(default)]
    pub transition_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disable_hint_reappear: false,
            step_percent: Some(DEFAULT_STEP_PERCENT),
            transition_ms: Some(DEFAULT_TRANSITION_MS),
        }
    }
}

impl Config {
    /// Whether the hint may come back after the first interaction hid it.
    #[must_use]
    pub fn reappear_allowed(&self) -> bool {
        !self.disable_hint_reappear
    }

    /// Keyboard step converted to a fraction of the slider width, clamped to
    /// the valid percent range.
    #[must_use]
    pub fn step_fraction(&self) -> f32 {
        self.step_percent
            .unwrap_or(DEFAULT_STEP_PERCENT)
            .clamp(MIN_STEP_PERCENT, MAX_STEP_PERCENT)
            / 100.0
    }

    /// Duration of one animated transition.
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS))
    }

    /// Duplicate-seek suppression window.
    #[must_use]
    pub fn dedup_window(&self) -> Duration {
        Duration::from_millis(SEEK_DEDUP_WINDOW_MS)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default platform location.
/// A missing file yields the defaults rather than an error.
pub fn load() -> Result<Config> {
    match get_default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Loads the configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the default platform location.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = get_default_config_path() else {
        return Err(crate::error::Error::Config(
            "could not determine config directory".to_string(),
        ));
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    save_to_path(config, &path)
}

/// Saves the configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
