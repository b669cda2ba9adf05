//! Scrollkit Viewport
//!
//! A pannable, inertial, focus-aware 2D viewport over a single content
//! child.
//!
//! # Features
//!
//! - **Gesture Arbitration**: touch slop, drag deltas, flings, taps, double taps and long presses
//! - **Inertial Scrolling**: spline flings that stop at the content edges
//! - **Programmatic Motion**: jumps, eased slides and rate-limited smooth scrolls
//! - **Focus Navigation**: arrow, page and home/end keys that move focus and scroll together
//! - **Configuration**: TOML-backed tuning with validated defaults
//!
//! # Example
//!
//! ```rust
//! use scrollkit_core::geometry::{Point, Size, Viewport};
//! use scrollkit_viewport::{NoFocus, ViewportConfig, ViewportController};
//!
//! let mut viewport = ViewportController::new(ViewportConfig::default()).unwrap();
//! viewport.attach_child(Size::new(800, 3000)).unwrap();
//! viewport.layout(Viewport::new(800, 600), Size::new(800, 3000), &mut NoFocus);
//!
//! viewport.scroll_to(0, 5000);
//! assert_eq!(viewport.offset(), Point::new(0, 2400));
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod focus;
pub mod gesture;

pub use config::{ScrollAxes, ViewportConfig};
pub use controller::{Frame, InteractionState, ViewportController};
pub use error::{Result, ViewportError};
pub use focus::{FocusCandidate, FocusHost, FocusId, FocusNavigator, NoFocus};
pub use gesture::{GestureArbiter, GestureEvent, GestureEvents, GesturePhase};

/// Common imports for hosts embedding a viewport
pub mod prelude {
    pub use crate::config::{ScrollAxes, ViewportConfig};
    pub use crate::controller::{Frame, InteractionState, ViewportController};
    pub use crate::error::{Result, ViewportError};
    pub use crate::focus::{FocusCandidate, FocusHost, FocusId, NoFocus};
    pub use crate::gesture::GestureEvent;

    pub use scrollkit_core::events::{KeyCode, KeyEvent, Modifiers, PointerEvent};
    pub use scrollkit_core::geometry::{Direction, Point, Rect, Size, Viewport};
}
