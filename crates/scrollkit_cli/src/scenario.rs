//! Scenario definition for headless viewport runs

use anyhow::{Context, Result};
use scrollkit_core::events::{EdgeFlags, PointerAction};
use scrollkit_core::geometry::{Direction, Rect};
use serde::Deserialize;
use std::path::Path;

/// Viewport setup plus a sequence of steps to replay against it
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub viewport: SizeSpec,
    pub content: SizeSpec,
    #[serde(default)]
    pub focusables: Vec<FocusableSpec>,
    /// Name of the initially focused element
    #[serde(default)]
    pub focus: Option<String>,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid scenario {}", path.display()))
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SizeSpec {
    pub width: i32,
    pub height: i32,
}

/// A named focusable element in content coordinates
#[derive(Debug, Clone, Deserialize)]
pub struct FocusableSpec {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl FocusableSpec {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

fn default_frame_ms() -> u64 {
    16
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Pointer {
        action: PointerAction,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
        t: u64,
        #[serde(default)]
        edge_flags: EdgeFlags,
    },
    /// Run frames until `until_ms`
    Tick {
        until_ms: u64,
        #[serde(default = "default_frame_ms")]
        frame_ms: u64,
    },
    Key {
        key: String,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        alt: bool,
    },
    ScrollTo { x: i32, y: i32 },
    SlideTo { x: i32, y: i32 },
    /// Pointer-space throw velocity (px/s)
    Fling { vx: f32, vy: f32 },
    Arrow { direction: Direction },
    Page { direction: Direction },
    Full { direction: Direction },
    /// The host moves focus to a named element
    Focus { name: String },
    /// The element leaves the content
    Remove { name: String },
    /// The host marks layout dirty
    RequestLayout,
    /// A layout pass with a new content size
    Layout { width: i32, height: i32 },
    AssertOffset { x: i32, y: i32 },
    AssertIdle,
    AssertFocus { name: Option<String> },
}

impl ScenarioStep {
    pub fn kind(&self) -> &'static str {
        match self {
            ScenarioStep::Pointer { .. } => "pointer",
            ScenarioStep::Tick { .. } => "tick",
            ScenarioStep::Key { .. } => "key",
            ScenarioStep::ScrollTo { .. } => "scroll_to",
            ScenarioStep::SlideTo { .. } => "slide_to",
            ScenarioStep::Fling { .. } => "fling",
            ScenarioStep::Arrow { .. } => "arrow",
            ScenarioStep::Page { .. } => "page",
            ScenarioStep::Full { .. } => "full",
            ScenarioStep::Focus { .. } => "focus",
            ScenarioStep::Remove { .. } => "remove",
            ScenarioStep::RequestLayout => "request_layout",
            ScenarioStep::Layout { .. } => "layout",
            ScenarioStep::AssertOffset { .. } => "assert_offset",
            ScenarioStep::AssertIdle => "assert_idle",
            ScenarioStep::AssertFocus { .. } => "assert_focus",
        }
    }
}
