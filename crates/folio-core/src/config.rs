use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Scroll offset above which the nav bar reacts to scroll direction
    #[serde(default = "default_nav_scroll_threshold")]
    pub nav_scroll_threshold: f64,
    /// How long a toast stays visible
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,
    /// Background translation per scrolled unit
    #[serde(default = "default_parallax_factor")]
    pub parallax_factor: f64,
    /// Minimum viewport width for the cursor follower
    #[serde(default = "default_cursor_breakpoint")]
    pub cursor_breakpoint: f64,
    /// Visible fraction of a section that marks its nav link active
    #[serde(default = "default_section_visible_ratio")]
    pub section_visible_ratio: f64,
    /// Visible fraction of a content block that triggers its reveal
    #[serde(default = "default_reveal_visible_ratio")]
    pub reveal_visible_ratio: f64,
    /// Bottom viewport margin subtracted before reveal checks
    #[serde(default = "default_reveal_bottom_margin")]
    pub reveal_bottom_margin: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            nav_scroll_threshold: default_nav_scroll_threshold(),
            toast_duration_ms: default_toast_duration(),
            parallax_factor: default_parallax_factor(),
            cursor_breakpoint: default_cursor_breakpoint(),
            section_visible_ratio: default_section_visible_ratio(),
            reveal_visible_ratio: default_reveal_visible_ratio(),
            reveal_bottom_margin: default_reveal_bottom_margin(),
        }
    }
}

/// Smooth scrolling configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate in-page scrolls instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Frames per second while animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Easing curve applied to the animation
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            animation_fps: default_animation_fps(),
            easing: EasingType::default(),
        }
    }
}

/// Easing curve selection for scroll animations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump to the target at the end of the duration
    None,
    Linear,
    Cubic,
    Quintic,
    #[default]
    EaseOut,
}

fn default_nav_scroll_threshold() -> f64 {
    100.0
}

fn default_toast_duration() -> u64 {
    3000
}

fn default_parallax_factor() -> f64 {
    0.5
}

fn default_cursor_breakpoint() -> f64 {
    768.0
}

fn default_section_visible_ratio() -> f64 {
    0.5
}

fn default_reveal_visible_ratio() -> f64 {
    0.1
}

fn default_reveal_bottom_margin() -> f64 {
    50.0
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    400
}

fn default_animation_fps() -> u16 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the settings store file path (persisted page preferences)
    pub fn settings_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("settings.json")
    }
}
