//! Input events
//!
//! Pointer and key events as the host delivers them to a viewport, plus the
//! numeric event ids the interaction state machines react to.

use serde::{Deserialize, Serialize};

/// Event type identifier
pub type EventType = u32;

/// Event ids consumed by `StateTransitions` implementations
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_CANCEL: EventType = 4;
    /// Movement crossed the touch slop
    pub const DRAG: EventType = 6;
    /// Drag released without enough velocity to fling
    pub const DRAG_END: EventType = 7;
    /// Inertial motion requested
    pub const FLING: EventType = 8;
    /// Programmatic tween requested
    pub const SLIDE: EventType = 9;
    /// Fling or tween reached its end
    pub const SETTLED: EventType = 10;
    /// Running motion stopped by an explicit request
    pub const STOP: EventType = 11;
}

/// Phase of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// Screen edges reserved by the system
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeFlags(pub u32);

impl EdgeFlags {
    pub const NONE: EdgeFlags = EdgeFlags(0);
    pub const TOP: EdgeFlags = EdgeFlags(0b0001);
    pub const BOTTOM: EdgeFlags = EdgeFlags(0b0010);
    pub const LEFT: EdgeFlags = EdgeFlags(0b0100);
    pub const RIGHT: EdgeFlags = EdgeFlags(0b1000);

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A raw pointer sample from the host
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: u64,
    #[serde(default)]
    pub edge_flags: EdgeFlags,
}

impl PointerEvent {
    pub fn new(action: PointerAction, x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            action,
            x,
            y,
            timestamp_ms,
            edge_flags: EdgeFlags::NONE,
        }
    }

    pub fn down(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerAction::Down, x, y, timestamp_ms)
    }

    pub fn moved(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerAction::Move, x, y, timestamp_ms)
    }

    pub fn up(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerAction::Up, x, y, timestamp_ms)
    }

    pub fn cancel(timestamp_ms: u64) -> Self {
        Self::new(PointerAction::Cancel, 0.0, 0.0, timestamp_ms)
    }

    pub fn with_edge_flags(mut self, flags: EdgeFlags) -> Self {
        self.edge_flags = flags;
        self
    }
}

/// Virtual key codes the viewport responds to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const SPACE: KeyCode = KeyCode(0x20);

    // Arrow keys
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const RIGHT: KeyCode = KeyCode(0x27);
    pub const DOWN: KeyCode = KeyCode(0x28);

    // Navigation keys
    pub const HOME: KeyCode = KeyCode(0x24);
    pub const END: KeyCode = KeyCode(0x23);
    pub const PAGE_UP: KeyCode = KeyCode(0x21);
    pub const PAGE_DOWN: KeyCode = KeyCode(0x22);

    pub const UNKNOWN: KeyCode = KeyCode(0);

    /// Look up a key by its lowercase name (`"down"`, `"page_up"`, ...)
    pub fn from_name(name: &str) -> KeyCode {
        match name {
            "space" => KeyCode::SPACE,
            "left" => KeyCode::LEFT,
            "up" => KeyCode::UP,
            "right" => KeyCode::RIGHT,
            "down" => KeyCode::DOWN,
            "home" => KeyCode::HOME,
            "end" => KeyCode::END,
            "page_up" => KeyCode::PAGE_UP,
            "page_down" => KeyCode::PAGE_DOWN,
            _ => KeyCode::UNKNOWN,
        }
    }
}

/// Keyboard modifier flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { bits: 0 };
    pub const SHIFT: u8 = 0b0001;
    pub const CTRL: u8 = 0b0010;
    pub const ALT: u8 = 0b0100;

    pub const fn new(shift: bool, ctrl: bool, alt: bool) -> Self {
        let mut bits = 0;
        if shift {
            bits |= Self::SHIFT;
        }
        if ctrl {
            bits |= Self::CTRL;
        }
        if alt {
            bits |= Self::ALT;
        }
        Self { bits }
    }

    pub const fn shift(&self) -> bool {
        self.bits & Self::SHIFT != 0
    }

    pub const fn ctrl(&self) -> bool {
        self.bits & Self::CTRL != 0
    }

    pub const fn alt(&self) -> bool {
        self.bits & Self::ALT != 0
    }
}

/// A key press delivered to the viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn with_modifiers(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers() {
        let m = Modifiers::new(true, false, true);
        assert!(m.shift());
        assert!(!m.ctrl());
        assert!(m.alt());
        assert!(!Modifiers::NONE.alt());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(KeyCode::from_name("page_down"), KeyCode::PAGE_DOWN);
        assert_eq!(KeyCode::from_name("tab"), KeyCode::UNKNOWN);
    }

    #[test]
    fn test_pointer_constructors() {
        let ev = PointerEvent::down(1.0, 2.0, 5);
        assert_eq!(ev.action, PointerAction::Down);
        assert!(ev.edge_flags.is_empty());

        let edge = PointerEvent::down(0.0, 0.0, 5).with_edge_flags(EdgeFlags::LEFT);
        assert!(!edge.edge_flags.is_empty());
    }
}
