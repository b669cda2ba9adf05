//! Gesture arbitration
//!
//! Classifies a raw pointer stream into drag, fling, tap, double-tap and
//! long-press gestures. One arbiter replaces a family of listener callbacks:
//! it takes pointer events in and hands tagged [`GestureEvent`]s out.
//!
//! State machine:
//!
//! ```text
//! Idle ──Down──▶ PossibleDrag ──Move past slop──▶ Dragging
//!                    │                                 │
//!                    └──Up──▶ Idle (Tap)               └──Up──▶ Idle (Fling | DragEnd)
//! PossibleDrag | Dragging ──Cancel──▶ Idle
//! ```
//!
//! All deltas and velocities are in pointer space: positive `x`/`y` means the
//! pointer moved right/down. The controller converts to scroll direction.

use scrollkit_animation::velocity::{GestureSample, VelocityTracker, HORIZON_MS};
use scrollkit_core::events::{event_types, PointerAction, PointerEvent};
use scrollkit_core::fsm::{EventId, StateMachine, StateTransitions};
use smallvec::SmallVec;

use crate::config::ViewportConfig;

/// Arbiter phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Pointer is down but has not moved past the touch slop
    PossibleDrag,
    Dragging,
}

impl StateTransitions for GesturePhase {
    fn on_event(&self, event: EventId) -> Option<Self> {
        use event_types::*;
        match (self, event) {
            (GesturePhase::Idle, POINTER_DOWN) => Some(GesturePhase::PossibleDrag),
            (GesturePhase::PossibleDrag, DRAG) => Some(GesturePhase::Dragging),
            (GesturePhase::PossibleDrag, POINTER_UP) => Some(GesturePhase::Idle),
            (GesturePhase::Dragging, POINTER_UP) => Some(GesturePhase::Idle),
            (GesturePhase::PossibleDrag | GesturePhase::Dragging, POINTER_CANCEL) => {
                Some(GesturePhase::Idle)
            }
            _ => None,
        }
    }
}

/// A classified gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer went down; any running motion should stop
    Down { x: f32, y: f32 },
    /// Movement crossed the touch slop
    DragStart { x: f32, y: f32 },
    /// Whole-pixel pointer movement since the previous delta
    DragDelta { dx: i32, dy: i32 },
    /// Released while moving fast enough to throw (px/s)
    Fling { velocity_x: f32, velocity_y: f32 },
    /// Released too slowly to throw
    DragEnd,
    Tap { x: f32, y: f32 },
    DoubleTap { x: f32, y: f32 },
    LongPress { x: f32, y: f32 },
    /// Emitted last for every release
    TouchUp { x: f32, y: f32 },
    Cancel,
}

/// Gestures produced by a single pointer event
pub type GestureEvents = SmallVec<[GestureEvent; 4]>;

#[derive(Debug, Clone, Copy)]
struct TapRecord {
    x: f32,
    y: f32,
    timestamp_ms: u64,
}

/// Turns pointer events into gestures
#[derive(Debug, Clone)]
pub struct GestureArbiter {
    touch_slop: i32,
    min_fling_velocity: f32,
    max_fling_velocity: f32,
    double_tap_timeout_ms: u64,
    double_tap_slop: i32,
    long_press_timeout_ms: u64,

    fsm: StateMachine<GesturePhase>,
    tracker: VelocityTracker,
    anchor: (f32, f32),
    last: (f32, f32),
    /// Sub-pixel movement not yet reported
    remainder: (f32, f32),
    down_time_ms: u64,
    long_press_fired: bool,
    last_tap: Option<TapRecord>,
    second_tap: bool,
}

impl GestureArbiter {
    pub fn new(config: &ViewportConfig) -> Self {
        Self {
            touch_slop: config.touch_slop,
            min_fling_velocity: config.min_fling_velocity,
            max_fling_velocity: config.max_fling_velocity,
            double_tap_timeout_ms: config.double_tap_timeout_ms,
            double_tap_slop: config.double_tap_slop,
            long_press_timeout_ms: config.long_press_timeout_ms,
            fsm: StateMachine::default(),
            tracker: VelocityTracker::new(),
            anchor: (0.0, 0.0),
            last: (0.0, 0.0),
            remainder: (0.0, 0.0),
            down_time_ms: 0,
            long_press_fired: false,
            last_tap: None,
            second_tap: false,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.fsm.current()
    }

    pub fn is_dragging(&self) -> bool {
        self.fsm.is_in(GesturePhase::Dragging)
    }

    /// Feed one pointer event
    ///
    /// Returns `None` when the event is not consumed: a press that starts on
    /// a system-reserved edge, or movement with no press in progress.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<GestureEvents> {
        match event.action {
            PointerAction::Down => self.on_down(event),
            PointerAction::Move => self.on_move(event),
            PointerAction::Up => self.on_up(event),
            PointerAction::Cancel => self.on_cancel(),
        }
    }

    /// Fire a pending long press once the hold duration has elapsed
    pub fn tick(&mut self, now_ms: u64) -> Option<GestureEvent> {
        if self.fsm.is_in(GesturePhase::PossibleDrag)
            && !self.long_press_fired
            && now_ms.saturating_sub(self.down_time_ms) >= self.long_press_timeout_ms
        {
            self.long_press_fired = true;
            self.last_tap = None;
            tracing::debug!(x = self.anchor.0, y = self.anchor.1, "long press");
            return Some(GestureEvent::LongPress {
                x: self.anchor.0,
                y: self.anchor.1,
            });
        }
        None
    }

    /// Drop any gesture in progress without reporting it
    pub fn reset(&mut self) {
        self.fsm = StateMachine::default();
        self.tracker.clear();
        self.remainder = (0.0, 0.0);
        self.long_press_fired = false;
        self.second_tap = false;
    }

    fn on_down(&mut self, event: &PointerEvent) -> Option<GestureEvents> {
        if !event.edge_flags.is_empty() {
            tracing::trace!(flags = event.edge_flags.0, "edge touch rejected");
            return None;
        }

        if !self.fsm.is_in(GesturePhase::Idle) {
            // Missed the release of the previous gesture
            self.reset();
        }
        self.fsm.send(event_types::POINTER_DOWN);

        self.tracker.clear();
        self.tracker
            .add_sample(GestureSample::new(event.x, event.y, event.timestamp_ms));
        self.anchor = (event.x, event.y);
        self.last = (event.x, event.y);
        self.remainder = (0.0, 0.0);
        self.down_time_ms = event.timestamp_ms;
        self.long_press_fired = false;

        self.second_tap = self.last_tap.is_some_and(|tap| {
            event.timestamp_ms.saturating_sub(tap.timestamp_ms) <= self.double_tap_timeout_ms
                && within(tap.x - event.x, tap.y - event.y, self.double_tap_slop)
        });

        let mut out = GestureEvents::new();
        out.push(GestureEvent::Down {
            x: event.x,
            y: event.y,
        });
        Some(out)
    }

    fn on_move(&mut self, event: &PointerEvent) -> Option<GestureEvents> {
        if self.fsm.is_in(GesturePhase::Idle) {
            return None;
        }

        let mut out = GestureEvents::new();
        if let Some(long_press) = self.tick(event.timestamp_ms) {
            out.push(long_press);
        }
        self.tracker
            .add_sample(GestureSample::new(event.x, event.y, event.timestamp_ms));

        if self.long_press_fired {
            // A held press no longer drags
            return Some(out);
        }

        if self.fsm.is_in(GesturePhase::PossibleDrag) {
            let dx = event.x - self.anchor.0;
            let dy = event.y - self.anchor.1;
            if within(dx, dy, self.touch_slop) {
                return Some(out);
            }
            self.fsm.send(event_types::DRAG);
            self.last_tap = None;
            self.second_tap = false;
            tracing::debug!(x = event.x, y = event.y, "drag started");
            out.push(GestureEvent::DragStart {
                x: event.x,
                y: event.y,
            });
        }

        let fx = self.remainder.0 + (event.x - self.last.0);
        let fy = self.remainder.1 + (event.y - self.last.1);
        let dx = fx.trunc() as i32;
        let dy = fy.trunc() as i32;
        self.remainder = (fx - dx as f32, fy - dy as f32);
        self.last = (event.x, event.y);

        if dx != 0 || dy != 0 {
            tracing::trace!(dx, dy, "drag delta");
            out.push(GestureEvent::DragDelta { dx, dy });
        }
        Some(out)
    }

    fn on_up(&mut self, event: &PointerEvent) -> Option<GestureEvents> {
        let phase = self.fsm.current();
        if phase == GesturePhase::Idle {
            return None;
        }

        self.tracker
            .add_sample(GestureSample::new(event.x, event.y, event.timestamp_ms));
        let mut out = GestureEvents::new();

        match phase {
            GesturePhase::Dragging => {
                let velocity = self
                    .tracker
                    .compute_velocity(HORIZON_MS, self.max_fling_velocity);
                if velocity.magnitude() > self.min_fling_velocity {
                    tracing::debug!(vx = velocity.x, vy = velocity.y, "fling");
                    out.push(GestureEvent::Fling {
                        velocity_x: velocity.x,
                        velocity_y: velocity.y,
                    });
                } else {
                    out.push(GestureEvent::DragEnd);
                }
            }
            GesturePhase::PossibleDrag if self.long_press_fired => {}
            GesturePhase::PossibleDrag if self.second_tap => {
                self.last_tap = None;
                out.push(GestureEvent::DoubleTap {
                    x: event.x,
                    y: event.y,
                });
            }
            GesturePhase::PossibleDrag => {
                self.last_tap = Some(TapRecord {
                    x: event.x,
                    y: event.y,
                    timestamp_ms: event.timestamp_ms,
                });
                out.push(GestureEvent::Tap {
                    x: event.x,
                    y: event.y,
                });
            }
            GesturePhase::Idle => {}
        }

        self.fsm.send(event_types::POINTER_UP);
        self.tracker.clear();
        self.second_tap = false;
        out.push(GestureEvent::TouchUp {
            x: event.x,
            y: event.y,
        });
        Some(out)
    }

    fn on_cancel(&mut self) -> Option<GestureEvents> {
        self.fsm.send(event_types::POINTER_CANCEL)?;
        self.reset();
        let mut out = GestureEvents::new();
        out.push(GestureEvent::Cancel);
        Some(out)
    }
}

/// Squared-distance check against a pixel radius
fn within(dx: f32, dy: f32, radius: i32) -> bool {
    let r = radius as f32;
    dx * dx + dy * dy <= r * r
}
