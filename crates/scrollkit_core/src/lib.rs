//! Scrollkit Core
//!
//! Foundational primitives shared by the scrollkit crates:
//!
//! - **Geometry**: integer points, sizes, rectangles, viewport and content bounds
//! - **Clamping**: the single scroll-limit policy every offset mutation goes through
//! - **Input Events**: pointer and key events as delivered by the host
//! - **State Machines**: enum-based interaction states with transition history
//!
//! # Example
//!
//! ```rust
//! use scrollkit_core::geometry::{clamp_axis, ContentBounds, Point};
//!
//! let bounds = ContentBounds::new(Point::ZERO, Point::new(0, 2400));
//! assert_eq!(bounds.clamp(Point::new(10, 3000)), Point::new(0, 2400));
//! assert_eq!(clamp_axis(-5, 0, 100), 0);
//! ```

pub mod events;
pub mod fsm;
pub mod geometry;

pub use events::{EdgeFlags, KeyCode, KeyEvent, Modifiers, PointerAction, PointerEvent};
pub use fsm::{EventId, StateMachine, StateTransitions};
pub use geometry::{
    clamp_axis, scale, unscale, Axis, ContentBounds, Direction, Insets, Point, Rect, ScrollOffset,
    Size, Viewport,
};
