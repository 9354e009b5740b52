// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[player]` - Overlay behavior (auto-hide, visible controls, fades, frame size)
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `OVERLAY_PLAYER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use overlay_player::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.player.auto_hide_player = false;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::overlay::{AutoHideDelay, FadeDuration};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "OverlayPlayer";

/// Environment variable overriding the configuration directory.
pub const ENV_CONFIG_DIR: &str = "OVERLAY_PLAYER_CONFIG_DIR";

/// General settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Options recognized by the playback overlay.
///
/// Every field has a default, so a partial `[player]` section is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerOptions {
    /// Media to play. Usually supplied per mount rather than from the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_source: Option<String>,

    /// Looping videos render without any overlay.
    pub looping: bool,

    /// Hide visible controls automatically while playing.
    pub auto_hide_player: bool,

    /// Whether controls start out visible.
    pub default_controls_visible: bool,

    pub time_visible: bool,
    pub slider_visible: bool,
    pub mute_visible: bool,
    pub fullscreen_visible: bool,

    #[serde(rename = "fade_in_duration_ms")]
    pub fade_in_duration: FadeDuration,

    #[serde(rename = "fade_out_duration_ms")]
    pub fade_out_duration: FadeDuration,

    #[serde(rename = "auto_hide_delay_ms")]
    pub auto_hide_delay: AutoHideDelay,

    /// Box the video surface is fitted into.
    pub frame_width: f32,
    pub frame_height: f32,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            video_source: None,
            looping: false,
            auto_hide_player: true,
            default_controls_visible: false,
            time_visible: true,
            slider_visible: true,
            mute_visible: false,
            fullscreen_visible: false,
            fade_in_duration: FadeDuration::new(DEFAULT_FADE_IN_MS),
            fade_out_duration: FadeDuration::new(DEFAULT_FADE_OUT_MS),
            auto_hide_delay: AutoHideDelay::default(),
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

impl PlayerOptions {
    /// Returns a copy of these options bound to the given source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.video_source = Some(source.into());
        self
    }

    /// Returns the source if one was supplied and it is not blank.
    pub fn source(&self) -> Option<&str> {
        self.video_source
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub player: PlayerOptions,
}

fn get_default_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// A missing file yields the defaults.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
