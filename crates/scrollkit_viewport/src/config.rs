//! Viewport configuration (scrollkit.toml)
//!
//! Every field has a default, so an empty file or a partial table is valid.

use std::fs;
use std::path::Path;

use scrollkit_animation::FlingConfig;
use scrollkit_core::geometry::{Axis, Point};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewportError};

/// Which axes a viewport scrolls along
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollAxes {
    Vertical,
    Horizontal,
    #[default]
    Both,
}

impl ScrollAxes {
    pub fn allows(self, axis: Axis) -> bool {
        match self {
            ScrollAxes::Both => true,
            ScrollAxes::Vertical => axis == Axis::Vertical,
            ScrollAxes::Horizontal => axis == Axis::Horizontal,
        }
    }
}

/// Tuning for gesture recognition, physics, and keyboard scrolling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Movement (px) a pointer may make before a press becomes a drag
    #[serde(default = "default_touch_slop")]
    pub touch_slop: i32,
    /// Release speed (px/s) below which a drag just ends
    #[serde(default = "default_min_fling_velocity")]
    pub min_fling_velocity: f32,
    /// Per-axis cap on release speed (px/s)
    #[serde(default = "default_max_fling_velocity")]
    pub max_fling_velocity: f32,
    /// Duration of `slide_to` pans
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
    /// Duration of smooth scrolls
    #[serde(default = "default_smooth_scroll_duration_ms")]
    pub smooth_scroll_duration_ms: u64,
    /// Smooth scrolls closer together than this jump instead of animating
    #[serde(default = "default_animated_scroll_gap_ms")]
    pub animated_scroll_gap_ms: u64,
    /// When false every scroll request lands immediately
    #[serde(default = "default_true")]
    pub smooth_scrolling_enabled: bool,
    /// Margin (px) at the viewport edges where content is faded out
    #[serde(default)]
    pub fading_edge_length: i32,
    #[serde(default = "default_double_tap_timeout_ms")]
    pub double_tap_timeout_ms: u64,
    /// Max distance (px) between the two taps of a double tap
    #[serde(default = "default_double_tap_slop")]
    pub double_tap_slop: i32,
    #[serde(default = "default_long_press_timeout_ms")]
    pub long_press_timeout_ms: u64,
    /// Arrow-key step as a fraction of the viewport extent
    #[serde(default = "default_max_scroll_factor")]
    pub max_scroll_factor: f32,
    #[serde(default = "default_scroll_friction")]
    pub scroll_friction: f32,
    #[serde(default = "default_pixels_per_inch")]
    pub pixels_per_inch: f32,
    #[serde(default)]
    pub axes: ScrollAxes,
    /// Stretch content to at least the viewport size
    #[serde(default)]
    pub fill_viewport: bool,
    /// Lowest legal scroll offset on each axis
    #[serde(default)]
    pub scroll_min: Point,
}

fn default_touch_slop() -> i32 {
    8
}

fn default_min_fling_velocity() -> f32 {
    50.0
}

fn default_max_fling_velocity() -> f32 {
    8000.0
}

fn default_animation_duration_ms() -> u64 {
    400
}

fn default_smooth_scroll_duration_ms() -> u64 {
    250
}

fn default_animated_scroll_gap_ms() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

fn default_double_tap_timeout_ms() -> u64 {
    300
}

fn default_double_tap_slop() -> i32 {
    100
}

fn default_long_press_timeout_ms() -> u64 {
    500
}

fn default_max_scroll_factor() -> f32 {
    0.5
}

fn default_scroll_friction() -> f32 {
    0.015
}

fn default_pixels_per_inch() -> f32 {
    160.0
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            touch_slop: default_touch_slop(),
            min_fling_velocity: default_min_fling_velocity(),
            max_fling_velocity: default_max_fling_velocity(),
            animation_duration_ms: default_animation_duration_ms(),
            smooth_scroll_duration_ms: default_smooth_scroll_duration_ms(),
            animated_scroll_gap_ms: default_animated_scroll_gap_ms(),
            smooth_scrolling_enabled: true,
            fading_edge_length: 0,
            double_tap_timeout_ms: default_double_tap_timeout_ms(),
            double_tap_slop: default_double_tap_slop(),
            long_press_timeout_ms: default_long_press_timeout_ms(),
            max_scroll_factor: default_max_scroll_factor(),
            scroll_friction: default_scroll_friction(),
            pixels_per_inch: default_pixels_per_inch(),
            axes: ScrollAxes::default(),
            fill_viewport: false,
            scroll_min: Point::ZERO,
        }
    }
}

impl ViewportConfig {
    /// Single-axis vertical viewport with otherwise default settings
    pub fn vertical() -> Self {
        Self {
            axes: ScrollAxes::Vertical,
            ..Self::default()
        }
    }

    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ViewportConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ViewportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every value is in range
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ViewportError::InvalidConfig(msg));

        if self.touch_slop < 0 {
            return invalid(format!("touch_slop must be >= 0, got {}", self.touch_slop));
        }
        if self.double_tap_slop < 0 {
            return invalid(format!(
                "double_tap_slop must be >= 0, got {}",
                self.double_tap_slop
            ));
        }
        if self.fading_edge_length < 0 {
            return invalid(format!(
                "fading_edge_length must be >= 0, got {}",
                self.fading_edge_length
            ));
        }
        if !(self.min_fling_velocity > 0.0 && self.min_fling_velocity <= self.max_fling_velocity) {
            return invalid(format!(
                "fling velocities must satisfy 0 < min <= max, got min={} max={}",
                self.min_fling_velocity, self.max_fling_velocity
            ));
        }
        for (name, value) in [
            ("animation_duration_ms", self.animation_duration_ms),
            ("smooth_scroll_duration_ms", self.smooth_scroll_duration_ms),
            ("double_tap_timeout_ms", self.double_tap_timeout_ms),
            ("long_press_timeout_ms", self.long_press_timeout_ms),
        ] {
            if value == 0 {
                return invalid(format!("{name} must be positive"));
            }
        }
        if !(self.max_scroll_factor > 0.0 && self.max_scroll_factor <= 1.0) {
            return invalid(format!(
                "max_scroll_factor must be in (0, 1], got {}",
                self.max_scroll_factor
            ));
        }
        if !(self.scroll_friction > 0.0) {
            return invalid(format!(
                "scroll_friction must be positive, got {}",
                self.scroll_friction
            ));
        }
        if !(self.pixels_per_inch > 0.0) {
            return invalid(format!(
                "pixels_per_inch must be positive, got {}",
                self.pixels_per_inch
            ));
        }
        Ok(())
    }

    /// Physics settings for the fling simulator
    pub fn fling_config(&self) -> FlingConfig {
        FlingConfig {
            friction: self.scroll_friction,
            pixels_per_inch: self.pixels_per_inch,
        }
    }
}
