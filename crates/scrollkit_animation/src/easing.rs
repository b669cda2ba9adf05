//! Easing functions for pan tweens

use serde::{Deserialize, Serialize};

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseOutQuad,
    EaseOutCubic,
    EaseInOutCubic,
    /// `1 - (1 - t)^8`: covers most of the distance early, then settles slowly
    #[default]
    EaseOutOctic,
    /// Friction-like curve used for short programmatic scrolls
    ViscousFluid,
}

/// Strength of the viscous curve
const VISCOUS_FLUID_SCALE: f32 = 8.0;

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    ///
    /// Input outside the unit range is clamped first.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOutOctic => 1.0 - (1.0 - t).powi(8),
            Easing::ViscousFluid => viscous_fluid(t) / viscous_fluid(1.0),
        }
    }
}

/// Exponential approach curve: a quick initial ramp followed by an
/// exponential settle toward 1.
fn viscous_fluid(t: f32) -> f32 {
    let x = t * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        let start = 0.367_879_44; // 1/e
        let rest = 1.0 - (1.0 - x).exp();
        start + rest * (1.0 - start)
    }
}
