// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[slideshow]` - Auto-advance period of the compact presentation
//! - `[swipe]` - Commit threshold and transition delay of the wide presentation
//! - `[marquee]` - Drift speed and card stride of the wide presentation
//! - `[display]` - Compact breakpoint and forced presentation
//!
//! Every value is optional. Missing values fall back to [`defaults`]; out of
//! range values are clamped when converted into [`CarouselSettings`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. `SHOWCASE_CAROUSEL_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use showcase_carousel::config;
//!
//! let (mut config, _warning) = config::load();
//! config.slideshow.interval_ms = Some(8_000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::carousel::CarouselSettings;
use crate::domain::carousel::{
    AdvanceInterval, CardStride, MarqueeSpeed, SwipeThreshold, TransitionDelay,
};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Presentation pinned regardless of window width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ForcedMode {
    /// Always run the slideshow.
    Compact,
    /// Always run the rotating queue.
    Wide,
}

impl ForcedMode {
    #[must_use]
    pub fn is_compact(self) -> bool {
        self == ForcedMode::Compact
    }
}

impl std::str::FromStr for ForcedMode {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "compact" => Ok(ForcedMode::Compact),
            "wide" => Ok(ForcedMode::Wide),
            other => Err(Error::Config(format!(
                "invalid mode: {} (expected compact or wide)",
                other
            ))),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Compact presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Period between two automatic advances (milliseconds).
    #[serde(
        default = "default_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u64>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

/// Swipe gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal distance a release must exceed to commit (pixels).
    #[serde(
        default = "default_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub threshold_px: Option<f32>,

    /// Delay between a commit and the rotation (milliseconds).
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_px: default_threshold_px(),
            transition_ms: default_transition_ms(),
        }
    }
}

/// Marquee settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarqueeConfig {
    /// Drift speed (pixels per second). Zero stops the drift.
    #[serde(
        default = "default_speed_px_per_sec",
        skip_serializing_if = "Option::is_none"
    )]
    pub speed_px_per_sec: Option<f32>,

    /// Distance between two card leading edges (pixels).
    #[serde(
        default = "default_card_stride_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_stride_px: Option<f32>,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed_px_per_sec: default_speed_px_per_sec(),
            card_stride_px: default_card_stride_px(),
        }
    }
}

/// Responsive layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Widths strictly below this value are compact (pixels).
    #[serde(
        default = "default_compact_breakpoint_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub compact_breakpoint_px: Option<f32>,

    /// Pins the presentation; `None` follows the window width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_mode: Option<ForcedMode>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint_px: default_compact_breakpoint_px(),
            forced_mode: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub swipe: SwipeConfig,

    #[serde(default)]
    pub marquee: MarqueeConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Builds the controller settings, clamping every value into range.
    #[must_use]
    pub fn carousel_settings(&self) -> CarouselSettings {
        CarouselSettings {
            advance_interval: AdvanceInterval::new(
                self.slideshow
                    .interval_ms
                    .unwrap_or(DEFAULT_ADVANCE_INTERVAL_MS),
            ),
            transition_delay: TransitionDelay::new(
                self.swipe.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS),
            ),
            swipe_threshold: SwipeThreshold::new(
                self.swipe
                    .threshold_px
                    .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX),
            ),
            marquee_speed: MarqueeSpeed::new(
                self.marquee
                    .speed_px_per_sec
                    .unwrap_or(DEFAULT_MARQUEE_SPEED_PX_PER_SEC),
            ),
            card_stride: CardStride::new(
                self.marquee
                    .card_stride_px
                    .unwrap_or(DEFAULT_CARD_STRIDE_PX),
            ),
        }
    }

    /// Effective compact breakpoint; non-positive or non-finite values fall back.
    #[must_use]
    pub fn compact_breakpoint(&self) -> f32 {
        match self.display.compact_breakpoint_px {
            Some(px) if px.is_finite() && px > 0.0 => px,
            _ => DEFAULT_COMPACT_BREAKPOINT_PX,
        }
    }

    /// Derives the mode signal for a window `width`.
    #[must_use]
    pub fn is_compact_width(&self, width: f32) -> bool {
        match self.display.forced_mode {
            Some(mode) => mode.is_compact(),
            None => width < self.compact_breakpoint(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_interval_ms() -> Option<u64> {
    Some(DEFAULT_ADVANCE_INTERVAL_MS)
}

fn default_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_speed_px_per_sec() -> Option<f32> {
    Some(DEFAULT_MARQUEE_SPEED_PX_PER_SEC)
}

fn default_card_stride_px() -> Option<f32> {
    Some(DEFAULT_CARD_STRIDE_PX)
}

fn default_compact_breakpoint_px() -> Option<f32> {
    Some(DEFAULT_COMPACT_BREAKPOINT_PX)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("loaded config from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    let warning = format!("Ignoring {}: {}", path.display(), err);
                    log::warn!("{}", warning);
                    return (Config::default(), Some(warning));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
