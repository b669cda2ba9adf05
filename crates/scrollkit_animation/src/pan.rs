//! Eased pan between two offsets
//!
//! A programmatic slide tween. Only one pan is in flight per animator; a new
//! request replaces the old one and starts from wherever the caller says the
//! offset currently is.

use scrollkit_core::geometry::Point;

use crate::easing::Easing;

/// State of a running pan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanAnimationState {
    pub from: Point,
    pub to: Point,
    pub start_time_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl PanAnimationState {
    /// Offset at `now_ms`, and whether the pan has completed
    pub fn sample(&self, now_ms: u64) -> (Point, bool) {
        let elapsed = now_ms.saturating_sub(self.start_time_ms);
        if self.duration_ms == 0 || elapsed >= self.duration_ms {
            return (self.to, true);
        }

        let t = elapsed as f32 / self.duration_ms as f32;
        let eased = self.easing.apply(t);
        let lerp = |a: i32, b: i32| a + ((b - a) as f32 * eased).round() as i32;
        let offset = Point::new(lerp(self.from.x, self.to.x), lerp(self.from.y, self.to.y));
        (offset, false)
    }
}

/// Result of advancing a pan by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanStep {
    pub offset: Point,
    pub is_finished: bool,
}

/// Drives at most one pan at a time
#[derive(Debug, Clone, Default)]
pub struct PanAnimator {
    active: Option<PanAnimationState>,
}

impl PanAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a pan from `current` toward `target`
    ///
    /// Returns false when there is no distance to cover. Any running pan is
    /// dropped so the offset stays where it is.
    pub fn animate_to(
        &mut self,
        current: Point,
        target: Point,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> bool {
        if current == target {
            if self.active.take().is_some() {
                tracing::trace!(x = current.x, y = current.y, "pan dropped, already at target");
            }
            return false;
        }

        if let Some(previous) = self.active.replace(PanAnimationState {
            from: current,
            to: target,
            start_time_ms: now_ms,
            duration_ms,
            easing,
        }) {
            tracing::trace!(
                old_x = previous.to.x,
                old_y = previous.to.y,
                "pan superseded"
            );
        }
        tracing::debug!(
            from_x = current.x,
            from_y = current.y,
            to_x = target.x,
            to_y = target.y,
            duration_ms,
            "pan started"
        );
        true
    }

    /// Advance to `now_ms`. Returns `None` when no pan is running.
    pub fn step(&mut self, now_ms: u64) -> Option<PanStep> {
        let state = self.active?;
        let (offset, is_finished) = state.sample(now_ms);
        if is_finished {
            self.active = None;
        }
        Some(PanStep {
            offset,
            is_finished,
        })
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Destination of the running pan
    pub fn target(&self) -> Option<Point> {
        self.active.map(|state| state.to)
    }

    pub fn state(&self) -> Option<&PanAnimationState> {
        self.active.as_ref()
    }
}
