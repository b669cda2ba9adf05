//! Scrollkit Animation System
//!
//! Time-driven motion for a scroll viewport.
//!
//! # Features
//!
//! - **Velocity Tracking**: pointer velocity from a short trailing window of samples
//! - **Fling Physics**: spline deceleration with per-axis edge stops
//! - **Pan Tweens**: fixed-duration eased moves between two offsets
//!
//! Nothing here reads a clock. Every `step` takes the host's frame time in
//! milliseconds, so animations pause simply by not being stepped.

pub mod easing;
pub mod fling;
pub mod pan;
pub mod velocity;

pub use easing::Easing;
pub use fling::{FlingConfig, FlingSimulator, FlingState, FlingStep};
pub use pan::{PanAnimationState, PanAnimator, PanStep};
pub use velocity::{GestureSample, Velocity, VelocityTracker};
