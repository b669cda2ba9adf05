//! Fling physics
//!
//! Inertial deceleration after a throw. The curve is a spline fitted to
//! measured finger-scroll friction: total distance and duration are derived
//! from the launch speed, and position over time follows a precomputed
//! normalized table.
//!
//! Each axis is clamped to its bounds independently. An axis that reaches
//! its limit stays pinned there while the other axis keeps decelerating.

use std::sync::OnceLock;

use scrollkit_core::geometry::{clamp_axis, ContentBounds, Point};

use crate::velocity::Velocity;

/// Inflection point of the deceleration spline
const INFLEXION: f64 = 0.35;
const START_TENSION: f64 = 0.5;
const END_TENSION: f64 = 1.0;
const NB_SAMPLES: usize = 100;

const GRAVITY_EARTH: f64 = 9.80665;
const INCHES_PER_METER: f64 = 39.37;
/// Empirical tuning of the physical coefficient
const PHYSICAL_TUNING: f64 = 0.84;

fn deceleration_rate() -> f64 {
    0.78f64.ln() / 0.9f64.ln()
}

/// Normalized distance travelled at each of `NB_SAMPLES` equal time steps
fn spline_position() -> &'static [f64; NB_SAMPLES + 1] {
    static TABLE: OnceLock<[f64; NB_SAMPLES + 1]> = OnceLock::new();
    TABLE.get_or_init(build_spline_table)
}

fn build_spline_table() -> [f64; NB_SAMPLES + 1] {
    let p1 = START_TENSION * INFLEXION;
    let p2 = 1.0 - END_TENSION * (1.0 - INFLEXION);

    let mut table = [0.0; NB_SAMPLES + 1];
    let mut x_min = 0.0;
    for (i, slot) in table.iter_mut().take(NB_SAMPLES).enumerate() {
        let alpha = i as f64 / NB_SAMPLES as f64;
        let mut x_max = 1.0;

        // Bisect for the curve parameter whose time coordinate is alpha
        let (x, coef) = loop {
            let x = x_min + (x_max - x_min) / 2.0;
            let coef = 3.0 * x * (1.0 - x);
            let tx = coef * ((1.0 - x) * p1 + x * p2) + x * x * x;
            if (tx - alpha).abs() < 1e-5 {
                break (x, coef);
            }
            if tx > alpha {
                x_max = x;
            } else {
                x_min = x;
            }
        };

        *slot = coef * ((1.0 - x) * START_TENSION + x) + x * x * x;
    }
    table[NB_SAMPLES] = 1.0;
    table
}

/// Tuning for the deceleration curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingConfig {
    /// Dimensionless friction coefficient
    pub friction: f32,
    /// Screen density used to convert physical friction to pixels
    pub pixels_per_inch: f32,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            friction: 0.015,
            pixels_per_inch: 160.0,
        }
    }
}

impl FlingConfig {
    fn physical_coeff(&self) -> f64 {
        GRAVITY_EARTH * INCHES_PER_METER * self.pixels_per_inch as f64 * PHYSICAL_TUNING
    }
}

/// Computes fling trajectories for a given friction model
#[derive(Debug, Clone, Copy, Default)]
pub struct FlingSimulator {
    config: FlingConfig,
}

impl FlingSimulator {
    pub fn new(config: FlingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> FlingConfig {
        self.config
    }

    fn spline_deceleration(&self, speed: f64) -> f64 {
        let friction = self.config.friction as f64;
        (INFLEXION * speed.abs() / (friction * self.config.physical_coeff())).ln()
    }

    /// Time for a throw at `speed` px/s to come to rest
    pub fn fling_duration_ms(&self, speed: f32) -> u64 {
        if speed == 0.0 {
            return 0;
        }
        let l = self.spline_deceleration(speed as f64);
        (1000.0 * (l / (deceleration_rate() - 1.0)).exp()) as u64
    }

    /// Distance a throw at `speed` px/s travels before resting
    pub fn fling_distance(&self, speed: f32) -> f64 {
        if speed == 0.0 {
            return 0.0;
        }
        let rate = deceleration_rate();
        let l = self.spline_deceleration(speed as f64);
        let friction = self.config.friction as f64;
        friction * self.config.physical_coeff() * (rate / (rate - 1.0) * l).exp()
    }

    /// Launch a fling from `start` with a scroll-offset-space `velocity`
    ///
    /// Positive components increase the offset.
    pub fn start(
        &self,
        start: Point,
        velocity: Velocity,
        bounds: ContentBounds,
        now_ms: u64,
    ) -> FlingState {
        let speed = velocity.magnitude();
        let duration_ms = self.fling_duration_ms(speed);
        let distance = self.fling_distance(speed);

        let (coeff_x, coeff_y) = if speed == 0.0 {
            (0.0, 0.0)
        } else {
            (velocity.x as f64 / speed as f64, velocity.y as f64 / speed as f64)
        };
        let travel_x = (distance * coeff_x).round() as i32;
        let travel_y = (distance * coeff_y).round() as i32;

        let mut state = FlingState {
            velocity_x: velocity.x,
            velocity_y: velocity.y,
            start_time_ms: now_ms,
            start_offset: start,
            min_offset: bounds.min,
            max_offset: bounds.max,
            duration_ms,
            distance,
            travel: (travel_x, travel_y),
            final_offset: start,
            current_offset: bounds.clamp(start),
            current_velocity: speed,
            finished: false,
        };
        state.final_offset = state.clamp(start.offset(travel_x, travel_y));
        if duration_ms == 0 || state.current_offset == state.final_offset {
            state.finish();
        }

        tracing::debug!(
            vx = velocity.x,
            vy = velocity.y,
            duration_ms,
            distance,
            final_x = state.final_offset.x,
            final_y = state.final_offset.y,
            "fling started"
        );
        state
    }
}

/// One sampled point of a fling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingStep {
    pub offset: Point,
    /// Current speed along the throw direction (px/s)
    pub velocity: f32,
    pub is_finished: bool,
}

/// An in-flight fling
#[derive(Debug, Clone)]
pub struct FlingState {
    /// Launch velocity in scroll-offset space
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub start_time_ms: u64,
    pub start_offset: Point,
    pub min_offset: Point,
    pub max_offset: Point,
    duration_ms: u64,
    distance: f64,
    /// Unclamped per-axis travel over the whole curve
    travel: (i32, i32),
    final_offset: Point,
    current_offset: Point,
    current_velocity: f32,
    finished: bool,
}

impl FlingState {
    fn clamp(&self, offset: Point) -> Point {
        Point::new(
            clamp_axis(offset.x, self.min_offset.x, self.max_offset.x),
            clamp_axis(offset.y, self.min_offset.y, self.max_offset.y),
        )
    }

    fn finish(&mut self) {
        self.current_offset = self.final_offset;
        self.current_velocity = 0.0;
        self.finished = true;
    }

    /// Where the fling will come to rest (already clamped)
    pub fn final_offset(&self) -> Point {
        self.final_offset
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn current_offset(&self) -> Point {
        self.current_offset
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Sample the trajectory at `now_ms`
    pub fn step(&mut self, now_ms: u64) -> FlingStep {
        if !self.finished {
            let elapsed = now_ms.saturating_sub(self.start_time_ms);
            if elapsed >= self.duration_ms {
                self.finish();
            } else {
                let t = elapsed as f64 / self.duration_ms as f64;
                let table = spline_position();
                let index = (NB_SAMPLES as f64 * t) as usize;

                let (distance_coef, velocity_coef) = if index < NB_SAMPLES {
                    let t_inf = index as f64 / NB_SAMPLES as f64;
                    let t_sup = (index + 1) as f64 / NB_SAMPLES as f64;
                    let d_inf = table[index];
                    let d_sup = table[index + 1];
                    let velocity_coef = (d_sup - d_inf) / (t_sup - t_inf);
                    (d_inf + (t - t_inf) * velocity_coef, velocity_coef)
                } else {
                    (1.0, 0.0)
                };

                let x = (distance_coef * self.travel.0 as f64).round() as i32;
                let y = (distance_coef * self.travel.1 as f64).round() as i32;
                self.current_offset = self.clamp(self.start_offset.offset(x, y));
                self.current_velocity =
                    (velocity_coef * self.distance / self.duration_ms as f64 * 1000.0) as f32;

                if self.current_offset == self.final_offset {
                    self.finish();
                }
            }
        }

        FlingStep {
            offset: self.current_offset,
            velocity: self.current_velocity,
            is_finished: self.finished,
        }
    }

    /// Replace the bounds after a layout change, truncating the remaining
    /// trajectory at the new limits.
    pub fn set_bounds(&mut self, bounds: ContentBounds) {
        self.min_offset = bounds.min;
        self.max_offset = bounds.max;
        self.final_offset = self.clamp(self.start_offset.offset(self.travel.0, self.travel.1));
        self.current_offset = self.clamp(self.current_offset);
        if !self.finished && self.current_offset == self.final_offset {
            self.finish();
        }
    }
}
