//! Pointer velocity tracking for fling detection
//!
//! Keeps a short trailing window of timestamped pointer samples and
//! estimates velocity from the displacement across the most recent ones.
//!
//! Sign convention: velocities describe the pointer, so a positive `y`
//! means the finger is moving down the screen. Converting to scroll-offset
//! space (where dragging down moves the offset up) is the caller's job.

use smallvec::SmallVec;

/// Upper bound on retained samples
pub const HISTORY_SIZE: usize = 20;

/// Samples older than this (relative to the newest) are dropped
pub const HORIZON_MS: u64 = 100;

/// A gap this long before the final sample means the pointer rested
const ASSUME_STOPPED_MS: u64 = 40;

/// A single pointer position at a point in time
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: u64,
}

impl GestureSample {
    pub fn new(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self { x, y, timestamp_ms }
    }
}

/// 2D velocity in pixels per second
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Clamp each component into `[-max, max]`
    pub fn clamp_components(self, max: f32) -> Self {
        Self {
            x: self.x.clamp(-max, max),
            y: self.y.clamp(-max, max),
        }
    }
}

/// Rolling pointer sample window
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[GestureSample; HISTORY_SIZE]>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample, lazily discarding ones that fell out of the horizon
    ///
    /// A sample older than the newest retained one starts a fresh window.
    pub fn add_sample(&mut self, sample: GestureSample) {
        if let Some(last) = self.samples.last() {
            if sample.timestamp_ms < last.timestamp_ms {
                self.samples.clear();
            }
        }

        let now = sample.timestamp_ms;
        self.samples
            .retain(|s| now.saturating_sub(s.timestamp_ms) <= HORIZON_MS);
        if self.samples.len() == HISTORY_SIZE {
            self.samples.remove(0);
        }
        self.samples.push(sample);
    }

    /// Forget all samples (a new drag is starting)
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Estimate the current velocity in pixels per second
    ///
    /// Only samples within `window_ms` of the newest one contribute. Each
    /// component is clamped to `max_velocity`. Returns zero with fewer than
    /// two usable samples or when the pointer rested before the last sample.
    pub fn compute_velocity(&self, window_ms: u64, max_velocity: f32) -> Velocity {
        let Some(newest) = self.samples.last().copied() else {
            return Velocity::ZERO;
        };

        let count = self.samples.len();
        if count < 2 {
            return Velocity::ZERO;
        }

        let previous = self.samples[count - 2];
        if newest.timestamp_ms - previous.timestamp_ms > ASSUME_STOPPED_MS {
            return Velocity::ZERO;
        }

        let Some(oldest) = self
            .samples
            .iter()
            .find(|s| newest.timestamp_ms - s.timestamp_ms <= window_ms)
            .copied()
        else {
            return Velocity::ZERO;
        };

        let dt_ms = newest.timestamp_ms - oldest.timestamp_ms;
        if dt_ms == 0 {
            return Velocity::ZERO;
        }

        let dt = dt_ms as f32 / 1000.0;
        let velocity = Velocity::new((newest.x - oldest.x) / dt, (newest.y - oldest.y) / dt);
        tracing::trace!(vx = velocity.x, vy = velocity.y, samples = count, "velocity estimate");
        velocity.clamp_components(max_velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(points: &[(f32, f32, u64)]) -> VelocityTracker {
        let mut tracker = VelocityTracker::new();
        for &(x, y, t) in points {
            tracker.add_sample(GestureSample::new(x, y, t));
        }
        tracker
    }

    #[test]
    fn test_constant_motion() {
        // 1 px/ms downward = 1000 px/s
        let tracker = tracker_with(&[(0.0, 0.0, 0), (0.0, 10.0, 10), (0.0, 20.0, 20), (0.0, 30.0, 30)]);
        let v = tracker.compute_velocity(HORIZON_MS, 8000.0);
        assert!((v.y - 1000.0).abs() < 0.01);
        assert_eq!(v.x, 0.0);
    }

    #[test]
    fn test_single_sample_is_zero() {
        let tracker = tracker_with(&[(0.0, 0.0, 0)]);
        assert_eq!(tracker.compute_velocity(HORIZON_MS, 8000.0), Velocity::ZERO);
        assert_eq!(VelocityTracker::new().compute_velocity(100, 8000.0), Velocity::ZERO);
    }

    #[test]
    fn test_old_samples_dropped_lazily() {
        let tracker = tracker_with(&[(0.0, 0.0, 0), (0.0, 5.0, 10), (0.0, 100.0, 150), (0.0, 110.0, 160)]);
        // Only the last two remain inside the 100 ms horizon
        assert_eq!(tracker.len(), 2);
        let v = tracker.compute_velocity(HORIZON_MS, 8000.0);
        assert!((v.y - 1000.0).abs() < 0.01);
    }

    #[test]
    fn test_window_limits_contribution() {
        // Slow start, fast finish: a narrow window sees only the fast part
        let tracker = tracker_with(&[(0.0, 0.0, 0), (0.0, 1.0, 40), (0.0, 2.0, 80), (0.0, 22.0, 90)]);
        let narrow = tracker.compute_velocity(10, 8000.0);
        let wide = tracker.compute_velocity(100, 8000.0);
        assert!((narrow.y - 2000.0).abs() < 0.01);
        assert!(wide.y < narrow.y);
    }

    #[test]
    fn test_rest_before_release_is_zero() {
        let tracker = tracker_with(&[(0.0, 0.0, 0), (0.0, 30.0, 10), (0.0, 30.0, 60)]);
        assert_eq!(tracker.compute_velocity(HORIZON_MS, 8000.0), Velocity::ZERO);
    }

    #[test]
    fn test_clamped_to_max() {
        let tracker = tracker_with(&[(0.0, 0.0, 0), (-500.0, 500.0, 10)]);
        let v = tracker.compute_velocity(HORIZON_MS, 8000.0);
        assert_eq!(v.y, 8000.0);
        assert_eq!(v.x, -8000.0);
    }

    #[test]
    fn test_clear_and_restart() {
        let mut tracker = tracker_with(&[(0.0, 0.0, 0), (0.0, 10.0, 10)]);
        tracker.clear();
        assert!(tracker.is_empty());

        // Timestamps going backwards start a new window
        let mut tracker = tracker_with(&[(0.0, 0.0, 500), (0.0, 10.0, 510)]);
        tracker.add_sample(GestureSample::new(0.0, 0.0, 5));
        assert_eq!(tracker.len(), 1);
    }
}
