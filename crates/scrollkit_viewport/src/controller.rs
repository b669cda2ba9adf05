//! Viewport controller
//!
//! Owns the scroll offset of one viewport and is its only writer. Pointer
//! input goes through the [`GestureArbiter`], throws through the fling
//! simulator, and programmatic moves through the pan animator. Every
//! offset change funnels through one clamp against the current
//! [`ContentBounds`].
//!
//! The host drives the controller:
//!
//! - `layout` on every layout pass with the viewport and content size
//! - `on_pointer_event` / `execute_key_event` for input
//! - `tick` once per frame, applying the returned offset
//!
//! Focus is reached through a [`FocusHost`] passed into each call that may
//! need it; the controller keeps no reference to the host between calls.

use scrollkit_animation::{Easing, FlingSimulator, FlingState, PanAnimator, Velocity};
use scrollkit_core::events::{event_types, KeyCode, KeyEvent, PointerEvent};
use scrollkit_core::fsm::{EventId, StateMachine, StateTransitions};
use scrollkit_core::geometry::{scale, Axis, ContentBounds, Direction, Point, Rect, Size, Viewport};
use serde::{Deserialize, Serialize};

use crate::config::ViewportConfig;
use crate::error::{Result, ViewportError};
use crate::focus::{FocusHost, FocusId, FocusNavigator};
use crate::gesture::{GestureArbiter, GestureEvent, GestureEvents};

// ============================================================================
// Interaction state
// ============================================================================

/// Which component currently writes the scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionState {
    #[default]
    Idle,
    /// Following the pointer
    Dragging,
    /// Decelerating after a throw
    Flinging,
    /// Running a programmatic pan
    Animating,
}

impl StateTransitions for InteractionState {
    fn on_event(&self, event: EventId) -> Option<Self> {
        use event_types::*;
        use InteractionState::*;

        match (self, event) {
            (Idle, DRAG) => Some(Dragging),
            (Dragging, DRAG_END | POINTER_CANCEL) => Some(Idle),
            (Idle | Dragging | Flinging | Animating, FLING) => Some(Flinging),
            (Idle | Flinging | Animating, SLIDE) => Some(Animating),
            (Flinging | Animating, SETTLED | STOP | POINTER_DOWN) => Some(Idle),
            _ => None,
        }
    }
}

/// Output of one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Committed offset to apply to the visible surface
    pub offset: Point,
    pub state: InteractionState,
    /// Host should redraw and keep ticking
    pub needs_redraw: bool,
    /// Long press that fired on this frame
    pub long_press: Option<GestureEvent>,
}

// ============================================================================
// Controller
// ============================================================================

/// Pannable, inertial, focus-aware scroll engine for one viewport
#[derive(Debug)]
pub struct ViewportController {
    config: ViewportConfig,
    arbiter: GestureArbiter,
    navigator: FocusNavigator,
    simulator: FlingSimulator,
    state: StateMachine<InteractionState>,
    fling: Option<FlingState>,
    pan: PanAnimator,

    viewport: Viewport,
    /// Measured size of the hosted child, if one is attached
    content: Option<Size>,
    bounds: ContentBounds,
    offset: Point,
    /// Offset changed since the last frame
    dirty: bool,

    now_ms: u64,
    last_smooth_scroll_ms: Option<u64>,
    layout_dirty: bool,
    /// Focused element waiting for a layout pass before it can be revealed
    pending_reveal: Option<FocusId>,
    /// Focus move the controller itself requested
    moved_focus: Option<FocusId>,
}

impl ViewportController {
    /// Create a controller. Fails if the config does not validate.
    pub fn new(config: ViewportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            arbiter: GestureArbiter::new(&config),
            navigator: FocusNavigator::new(config.fading_edge_length),
            simulator: FlingSimulator::new(config.fling_config()),
            state: StateMachine::default(),
            fling: None,
            pan: PanAnimator::new(),
            viewport: Viewport::default(),
            content: None,
            bounds: ContentBounds::new(config.scroll_min, config.scroll_min),
            offset: config.scroll_min,
            dirty: false,
            now_ms: 0,
            last_smooth_scroll_ms: None,
            layout_dirty: true,
            pending_reveal: None,
            moved_focus: None,
            config,
        })
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn bounds(&self) -> ContentBounds {
        self.bounds
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn state(&self) -> InteractionState {
        self.state.current()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_in(InteractionState::Dragging)
    }

    pub fn is_flinging(&self) -> bool {
        self.state.is_in(InteractionState::Flinging)
    }

    /// A programmatic pan is running
    pub fn is_sliding(&self) -> bool {
        self.state.is_in(InteractionState::Animating)
    }

    pub fn has_child(&self) -> bool {
        self.content.is_some()
    }

    /// Where the offset is headed: the end of the running fling or pan, or
    /// the current offset
    pub fn scroll_target(&self) -> Point {
        match self.state.current() {
            InteractionState::Flinging => self
                .fling
                .as_ref()
                .map_or(self.offset, |fling| fling.final_offset()),
            InteractionState::Animating => self.pan.target().unwrap_or(self.offset),
            _ => self.offset,
        }
    }

    /// The viewport rectangle in content coordinates
    pub fn visible_window(&self) -> Rect {
        Rect {
            origin: self.offset,
            size: self.viewport.size,
        }
    }

    /// Content length along `axis`, stretched to the viewport when
    /// `fill_viewport` is set
    pub fn content_extent(&self, axis: Axis) -> i32 {
        let Some(content) = self.content else {
            return 0;
        };
        let extent = content.extent(axis).max(0);
        if self.config.fill_viewport {
            extent.max(self.viewport.inner_extent(axis))
        } else {
            extent
        }
    }

    /// Largest arrow-key step along `axis`
    pub fn max_scroll_amount(&self, axis: Axis) -> i32 {
        (self.config.max_scroll_factor * self.viewport.extent(axis) as f32) as i32
    }

    /// True when the content overflows the viewport on `axis`
    pub fn can_scroll_axis(&self, axis: Axis) -> bool {
        let (min, max) = self.bounds.range(axis);
        max > min
    }

    pub fn can_scroll(&self) -> bool {
        self.can_scroll_axis(Axis::Horizontal) || self.can_scroll_axis(Axis::Vertical)
    }

    /// Whether there is room to scroll right (`direction > 0`) or left
    /// (`direction < 0`)
    pub fn can_scroll_horizontally(&self, direction: i32) -> bool {
        self.can_scroll_toward(Axis::Horizontal, direction)
    }

    /// Whether there is room to scroll down (`direction > 0`) or up
    /// (`direction < 0`)
    pub fn can_scroll_vertically(&self, direction: i32) -> bool {
        self.can_scroll_toward(Axis::Vertical, direction)
    }

    fn can_scroll_toward(&self, axis: Axis, direction: i32) -> bool {
        let position = self.offset.get(axis);
        let (min, max) = self.bounds.range(axis);
        match direction.signum() {
            1 => position < max,
            -1 => position > min,
            _ => false,
        }
    }

    // ------------------------------------------------------------------------
    // Structure and layout
    // ------------------------------------------------------------------------

    /// Attach the single hosted child with its measured size
    pub fn attach_child(&mut self, size: Size) -> Result<()> {
        if self.content.is_some() {
            tracing::warn!("refusing to attach a second child");
            return Err(ViewportError::MultipleChildren);
        }
        self.content = Some(size);
        self.layout_dirty = true;
        self.update_bounds();
        Ok(())
    }

    pub fn detach_child(&mut self) {
        self.content = None;
        self.stop();
        self.update_bounds();
    }

    /// Mark layout as pending; focus reveals wait for the next `layout`
    pub fn request_layout(&mut self) {
        self.layout_dirty = true;
    }

    /// Apply a layout pass
    ///
    /// Replaces the viewport and child size, re-clamps the offset, and
    /// truncates a running fling at the new limits. A focused element that
    /// was on screen before a resize is kept on screen.
    pub fn layout(&mut self, viewport: Viewport, content: Size, host: &mut dyn FocusHost) {
        let old_viewport = self.viewport;
        self.viewport = viewport;
        if let Some(current) = self.content.as_mut() {
            *current = content;
        }
        self.update_bounds();
        self.layout_dirty = false;

        if let Some(id) = self.pending_reveal.take() {
            if host.is_attached(id) {
                self.scroll_to_child(id, host);
            }
        }

        if old_viewport.size != viewport.size && !old_viewport.is_empty() {
            self.keep_focus_visible(&old_viewport, host);
        }
        tracing::debug!(
            width = viewport.width(),
            height = viewport.height(),
            content_w = content.width,
            content_h = content.height,
            max_x = self.bounds.max.x,
            max_y = self.bounds.max.y,
            "layout"
        );
    }

    fn update_bounds(&mut self) {
        let limit = |axis: Axis| {
            if !self.config.axes.allows(axis)
                || self.viewport.is_empty()
                || self.content_extent(axis) == 0
            {
                0
            } else {
                (self.content_extent(axis) - self.viewport.inner_extent(axis)).max(0)
            }
        };
        self.bounds = ContentBounds::new(
            self.config.scroll_min,
            Point::new(limit(Axis::Horizontal), limit(Axis::Vertical)),
        );

        if let Some(fling) = self.fling.as_mut() {
            fling.set_bounds(self.bounds);
        }
        self.commit(self.offset);
    }

    fn keep_focus_visible(&mut self, old_viewport: &Viewport, host: &mut dyn FocusHost) {
        let Some(rect) = host.focused_rect() else {
            return;
        };
        let old_window = Rect {
            origin: self.offset,
            size: old_viewport.size,
        };
        let was_visible = [Axis::Horizontal, Axis::Vertical]
            .into_iter()
            .all(|axis| self.navigator.is_within_delta_of_screen(&rect, axis, &old_window, 0));
        if was_visible {
            let delta = self.reveal_delta(&rect);
            self.do_scroll(delta.x, delta.y);
        }
    }

    // ------------------------------------------------------------------------
    // Frame loop and input
    // ------------------------------------------------------------------------

    fn observe(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Advance running motion to `now_ms`
    pub fn tick(&mut self, now_ms: u64) -> Frame {
        self.observe(now_ms);
        let long_press = self.arbiter.tick(now_ms);

        match self.state.current() {
            InteractionState::Flinging => {
                let step = self.fling.as_mut().map(|fling| fling.step(now_ms));
                if let Some(step) = step {
                    self.commit(step.offset);
                }
                if step.map_or(true, |step| step.is_finished) {
                    self.fling = None;
                    self.state.send(event_types::SETTLED);
                    tracing::debug!(x = self.offset.x, y = self.offset.y, "fling settled");
                }
            }
            InteractionState::Animating => {
                let step = self.pan.step(now_ms);
                if let Some(step) = step {
                    self.commit(step.offset);
                }
                if step.map_or(true, |step| step.is_finished) {
                    self.state.send(event_types::SETTLED);
                    tracing::debug!(x = self.offset.x, y = self.offset.y, "pan settled");
                }
            }
            InteractionState::Idle | InteractionState::Dragging => {}
        }

        let moving = matches!(
            self.state.current(),
            InteractionState::Flinging | InteractionState::Animating
        );
        Frame {
            offset: self.offset,
            state: self.state.current(),
            needs_redraw: moving || std::mem::take(&mut self.dirty),
            long_press,
        }
    }

    /// Feed a pointer event. Returns `None` when the event is left to the
    /// host (edge touches, stray moves).
    pub fn on_pointer_event(
        &mut self,
        event: &PointerEvent,
        host: &mut dyn FocusHost,
    ) -> Option<GestureEvents> {
        self.observe(event.timestamp_ms);
        let gestures = self.arbiter.on_pointer_event(event)?;

        for gesture in &gestures {
            match *gesture {
                GestureEvent::Down { .. } => {
                    if self.is_dragging() {
                        // Release of the previous drag never arrived
                        self.state.send(event_types::DRAG_END);
                    } else if self.state.send(event_types::POINTER_DOWN).is_some() {
                        self.fling = None;
                        self.pan.cancel();
                        tracing::debug!("motion aborted by touch");
                    }
                }
                GestureEvent::DragStart { .. } => {
                    self.state.send(event_types::DRAG);
                }
                GestureEvent::DragDelta { dx, dy } => {
                    if self.is_dragging() {
                        // Content follows the pointer, so the offset moves the other way
                        self.commit(self.offset.offset(dx.saturating_neg(), dy.saturating_neg()));
                    }
                }
                GestureEvent::Fling {
                    velocity_x,
                    velocity_y,
                } => {
                    self.start_fling(velocity_x, velocity_y, host);
                }
                GestureEvent::DragEnd => {
                    self.state.send(event_types::DRAG_END);
                }
                GestureEvent::Cancel => {
                    self.state.send(event_types::POINTER_CANCEL);
                }
                GestureEvent::Tap { .. }
                | GestureEvent::DoubleTap { .. }
                | GestureEvent::LongPress { .. }
                | GestureEvent::TouchUp { .. } => {}
            }
        }
        Some(gestures)
    }

    // ------------------------------------------------------------------------
    // Programmatic scrolling
    // ------------------------------------------------------------------------

    /// Abort any fling or pan in place
    pub fn stop(&mut self) {
        if self.state.send(event_types::STOP).is_some() {
            self.fling = None;
            self.pan.cancel();
            tracing::debug!(x = self.offset.x, y = self.offset.y, "motion stopped");
        }
    }

    /// Jump to an offset
    pub fn scroll_to(&mut self, x: i32, y: i32) -> bool {
        self.stop();
        self.commit(Point::new(x, y))
    }

    pub fn scroll_by(&mut self, dx: i32, dy: i32) -> bool {
        let target = self.offset.offset(dx, dy);
        self.scroll_to(target.x, target.y)
    }

    /// Jump so that `(x, y)` sits at the viewport center
    pub fn scroll_to_and_center(&mut self, x: i32, y: i32) -> bool {
        let (half_w, half_h) = self.half_size();
        self.scroll_to(x.saturating_sub(half_w), y.saturating_sub(half_h))
    }

    /// Pan to an offset over `animation_duration_ms`
    ///
    /// When the clamped destination is the current offset a running slide
    /// stops in place and nothing starts. A new slide replaces a running one.
    pub fn slide_to(&mut self, x: i32, y: i32) -> bool {
        if self.is_dragging() {
            tracing::warn!(x, y, "slide refused while dragging");
            return false;
        }
        let target = self.bounds.clamp(Point::new(x, y));
        if target == self.offset {
            if self.is_sliding() {
                self.stop();
            }
            return false;
        }
        if !self.config.smooth_scrolling_enabled {
            return self.scroll_to(target.x, target.y);
        }
        self.start_pan(target, self.config.animation_duration_ms, Easing::EaseOutOctic)
    }

    pub fn slide_to_and_center(&mut self, x: i32, y: i32) -> bool {
        let (half_w, half_h) = self.half_size();
        self.slide_to(x.saturating_sub(half_w), y.saturating_sub(half_h))
    }

    /// Scroll by a delta, animating unless the previous smooth scroll was
    /// too recent. Relative to the end of a running smooth scroll.
    pub fn smooth_scroll_by(&mut self, dx: i32, dy: i32) -> bool {
        let base = if self.is_sliding() {
            self.scroll_target()
        } else {
            self.offset
        };
        let target = base.offset(dx, dy);
        self.smooth_scroll_to(target.x, target.y)
    }

    pub fn smooth_scroll_to(&mut self, x: i32, y: i32) -> bool {
        if self.is_dragging() {
            tracing::warn!(x, y, "smooth scroll refused while dragging");
            return false;
        }

        let target = self.bounds.clamp(Point::new(x, y));
        let since_last = self
            .last_smooth_scroll_ms
            .map(|last| self.now_ms.saturating_sub(last));
        self.last_smooth_scroll_ms = Some(self.now_ms);

        let too_soon = since_last.is_some_and(|gap| gap <= self.config.animated_scroll_gap_ms);
        if !self.config.smooth_scrolling_enabled || too_soon || target == self.offset {
            self.stop();
            return self.commit(target);
        }
        self.start_pan(target, self.config.smooth_scroll_duration_ms, Easing::ViscousFluid)
    }

    /// Throw the content with a pointer-space velocity (px/s, positive =
    /// pointer moving right/down).
    pub fn fling(&mut self, velocity_x: f32, velocity_y: f32, host: &mut dyn FocusHost) -> bool {
        if self.is_dragging() {
            tracing::warn!("fling refused while dragging");
            return false;
        }
        self.start_fling(velocity_x, velocity_y, host)
    }

    fn start_pan(&mut self, target: Point, duration_ms: u64, easing: Easing) -> bool {
        if !self
            .pan
            .animate_to(self.offset, target, self.now_ms, duration_ms, easing)
        {
            return false;
        }
        self.fling = None;
        self.state.send(event_types::SLIDE);
        true
    }

    fn start_fling(&mut self, velocity_x: f32, velocity_y: f32, host: &mut dyn FocusHost) -> bool {
        let velocity = Velocity::new(
            if self.config.axes.allows(Axis::Horizontal) {
                -velocity_x
            } else {
                0.0
            },
            if self.config.axes.allows(Axis::Vertical) {
                -velocity_y
            } else {
                0.0
            },
        );
        let fling = self
            .simulator
            .start(self.offset, velocity, self.bounds, self.now_ms);

        if self.content.is_some() {
            self.retarget_focus_for_fling(velocity, fling.final_offset(), host);
        }

        if fling.is_finished() || !self.config.smooth_scrolling_enabled {
            self.end_motion();
            return self.commit(fling.final_offset());
        }

        self.pan.cancel();
        self.fling = Some(fling);
        self.state.send(event_types::FLING);
        true
    }

    /// Return to Idle from whatever is writing the offset
    fn end_motion(&mut self) {
        if self.is_dragging() {
            self.state.send(event_types::DRAG_END);
        } else {
            self.stop();
        }
    }

    /// Move focus into the window a fling will come to rest in
    fn retarget_focus_for_fling(&mut self, velocity: Velocity, landing: Point, host: &mut dyn FocusHost) {
        let axis = if velocity.y.abs() >= velocity.x.abs() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        let speed = match axis {
            Axis::Horizontal => velocity.x,
            Axis::Vertical => velocity.y,
        };
        if speed == 0.0 {
            return;
        }
        let toward_end = speed > 0.0;

        let candidates = host.focusables();
        let focused = host.focused();
        let preferred = focused.and_then(|id| candidates.iter().find(|c| c.id == id));
        let landing_window = Rect {
            origin: landing,
            size: self.viewport.size,
        };
        // Moving toward the end favours the element nearest the window start
        let target = self
            .navigator
            .find_next_focusable(
                Direction::along(axis, toward_end),
                &candidates,
                &landing_window,
                preferred,
            )
            .map(|c| c.id);
        self.move_focus(target, Direction::along(axis, !toward_end), host);
    }

    // ------------------------------------------------------------------------
    // Focus-driven scrolling
    // ------------------------------------------------------------------------

    /// Handle a navigation key. Returns true if it was consumed.
    pub fn execute_key_event(&mut self, event: &KeyEvent, host: &mut dyn FocusHost) -> bool {
        let alt = event.modifiers.alt();
        let arrow = match event.key {
            KeyCode::UP => Some(Direction::Up),
            KeyCode::DOWN => Some(Direction::Down),
            KeyCode::LEFT => Some(Direction::Left),
            KeyCode::RIGHT => Some(Direction::Right),
            _ => None,
        };
        let navigation = arrow.is_some()
            || matches!(
                event.key,
                KeyCode::SPACE | KeyCode::PAGE_UP | KeyCode::PAGE_DOWN | KeyCode::HOME | KeyCode::END
            );
        if !navigation {
            return false;
        }

        if !self.can_scroll() {
            if host.focused().is_some() {
                return false;
            }
            // Nothing to scroll: pass focus down into the content
            let window = self.visible_window();
            let source = FocusNavigator::leading_corner(&window, Direction::Down);
            let candidates = host.focusables();
            return self
                .navigator
                .find_in_direction(&candidates, &source, Direction::Down, None)
                .is_some_and(|next| host.request_focus(next.id, Some(Direction::Down)));
        }

        if let Some(direction) = arrow {
            return if alt {
                self.full_scroll(direction, host)
            } else {
                self.arrow_scroll(direction, host)
            };
        }

        let page_axis = if self.can_scroll_axis(Axis::Vertical) {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        match event.key {
            KeyCode::SPACE => {
                let back = event.modifiers.shift();
                self.page_scroll(Direction::along(page_axis, back), host)
            }
            KeyCode::PAGE_UP => self.page_scroll(Direction::along(page_axis, true), host),
            KeyCode::PAGE_DOWN => self.page_scroll(Direction::along(page_axis, false), host),
            KeyCode::HOME => self.full_scroll(Direction::along(page_axis, true), host),
            KeyCode::END => self.full_scroll(Direction::along(page_axis, false), host),
            _ => false,
        }
    }

    /// Move one step in `direction`
    ///
    /// Focuses the next element in that direction if it lies within one
    /// step of the window, scrolling just enough to show it. Otherwise
    /// scrolls by up to `max_scroll_amount` without moving focus. Returns
    /// false when there was no room to scroll.
    pub fn arrow_scroll(&mut self, direction: Direction, host: &mut dyn FocusHost) -> bool {
        let axis = direction.axis();
        if !self.config.axes.allows(axis) {
            return false;
        }

        let candidates = host.focusables();
        let focused = host.focused();
        let focused_rect = focused
            .and_then(|id| candidates.iter().find(|c| c.id == id))
            .map(|c| c.rect);
        let window = self.visible_window();
        let source =
            focused_rect.unwrap_or_else(|| FocusNavigator::leading_corner(&window, direction));
        let max_jump = self.max_scroll_amount(axis);

        let next = self
            .navigator
            .find_in_direction(&candidates, &source, direction, focused)
            .filter(|c| {
                self.navigator
                    .is_within_delta_of_screen(&c.rect, axis, &window, max_jump)
            })
            .copied();

        if let Some(next) = next {
            let delta = self.navigator.scroll_delta_to_reveal(
                &next.rect,
                axis,
                &window,
                self.content_extent(axis),
            );
            self.do_scroll_axis(axis, delta);
            if host.request_focus(next.id, Some(direction)) {
                self.moved_focus = Some(next.id);
            }
        } else {
            let position = self.offset.get(axis);
            let (min, max) = self.bounds.range(axis);
            let room = if direction.is_toward_start() {
                position - min
            } else {
                max - position
            };
            let delta = room.min(max_jump).max(0);
            if delta == 0 {
                return false;
            }
            self.do_scroll_axis(axis, delta * direction.sign());
        }

        if let Some(rect) = focused_rect {
            let target_window = Rect {
                origin: self.scroll_target(),
                size: self.viewport.size,
            };
            let still_focused = host.focused() == focused;
            if still_focused && self.navigator.is_off_screen(&rect, &target_window) {
                tracing::debug!("focused element scrolled away, viewport takes focus");
                host.focus_viewport();
            }
        }
        true
    }

    /// Scroll one viewport-length in `direction` and focus within the new
    /// window
    pub fn page_scroll(&mut self, direction: Direction, host: &mut dyn FocusHost) -> bool {
        let axis = direction.axis();
        if !self.can_scroll_axis(axis) {
            return false;
        }
        let extent = self.viewport.extent(axis);
        let position = self.scroll_target().get(axis);

        let start = if direction.is_toward_start() {
            (position - extent).max(self.bounds.min.get(axis).min(0))
        } else {
            let content_end = self.content_extent(axis);
            let start = position + extent;
            if start + extent > content_end {
                content_end - extent
            } else {
                start
            }
        };
        self.scroll_and_focus(direction, start, start + extent, host)
    }

    /// Jump to the content start or end in `direction`
    pub fn full_scroll(&mut self, direction: Direction, host: &mut dyn FocusHost) -> bool {
        let axis = direction.axis();
        if !self.can_scroll_axis(axis) {
            return false;
        }
        let extent = self.viewport.extent(axis);
        let (start, end) = if direction.is_toward_start() {
            (0, extent)
        } else {
            let content_end = self.content_extent(axis);
            (content_end - extent, content_end)
        };
        self.scroll_and_focus(direction, start, end, host)
    }

    /// Scroll so `[start, end)` along the direction's axis is on screen and
    /// focus the best element inside it
    fn scroll_and_focus(
        &mut self,
        direction: Direction,
        start: i32,
        end: i32,
        host: &mut dyn FocusHost,
    ) -> bool {
        let axis = direction.axis();
        let toward_start = direction.is_toward_start();
        let candidates = host.focusables();
        let target = self
            .navigator
            .find_focusable_in_bounds(&candidates, axis, toward_start, start, end)
            .map(|c| c.id);

        let container_start = self.scroll_target().get(axis);
        let container_end = container_start + self.viewport.extent(axis);
        let handled = if start >= container_start && end <= container_end {
            false
        } else {
            let delta = if toward_start {
                start - container_start
            } else {
                end - container_end
            };
            self.do_scroll_axis(axis, delta);
            true
        };

        self.move_focus(target, direction, host);
        handled
    }

    fn move_focus(&mut self, target: Option<FocusId>, direction: Direction, host: &mut dyn FocusHost) {
        let focused = host.focused();
        match target {
            Some(id) if Some(id) != focused => {
                if host.request_focus(id, Some(direction)) {
                    self.moved_focus = Some(id);
                }
            }
            Some(_) => {}
            None => {
                if focused.is_some() {
                    host.focus_viewport();
                }
            }
        }
    }

    /// The host moved focus to a descendant
    ///
    /// Scrolls it into view unless the controller moved focus itself. While
    /// a layout is pending the reveal waits for the next `layout` call.
    pub fn on_child_focused(&mut self, id: FocusId, host: &mut dyn FocusHost) -> bool {
        if self.moved_focus.take() == Some(id) {
            return false;
        }
        if self.layout_dirty {
            tracing::trace!(id = id.0, "focus reveal deferred until layout");
            self.pending_reveal = Some(id);
            return false;
        }
        self.scroll_to_child(id, host)
    }

    /// Reveal a content rectangle. Returns true if a scroll was issued.
    pub fn request_rectangle_on_screen(&mut self, rect: Rect, immediate: bool) -> bool {
        let delta = self.reveal_delta(&rect);
        if delta == Point::ZERO {
            return false;
        }
        if immediate {
            self.scroll_by(delta.x, delta.y);
        } else {
            self.smooth_scroll_by(delta.x, delta.y);
        }
        true
    }

    /// Focus entering the viewport from outside. `previous_rect` is the
    /// previously focused rectangle in content coordinates. Refuses to focus
    /// an element that is off screen.
    pub fn request_focus_in_descendants(
        &mut self,
        direction: Direction,
        previous_rect: Option<Rect>,
        host: &mut dyn FocusHost,
    ) -> bool {
        let window = self.visible_window();
        let source =
            previous_rect.unwrap_or_else(|| FocusNavigator::leading_corner(&window, direction));
        let candidates = host.focusables();
        let Some(next) = self
            .navigator
            .find_in_direction(&candidates, &source, direction, None)
        else {
            return false;
        };
        if self.navigator.is_off_screen(&next.rect, &window) {
            return false;
        }
        host.request_focus(next.id, Some(direction))
    }

    fn scroll_to_child(&mut self, id: FocusId, host: &dyn FocusHost) -> bool {
        let Some(candidate) = host.focusables().into_iter().find(|c| c.id == id) else {
            return false;
        };
        let delta = self.reveal_delta(&candidate.rect);
        if delta == Point::ZERO {
            return false;
        }
        self.scroll_by(delta.x, delta.y)
    }

    /// Per-axis scroll that reveals `rect`
    fn reveal_delta(&self, rect: &Rect) -> Point {
        let window = self.visible_window();
        let delta = |axis: Axis| {
            if self.config.axes.allows(axis) {
                self.navigator
                    .scroll_delta_to_reveal(rect, axis, &window, self.content_extent(axis))
            } else {
                0
            }
        };
        Point::new(delta(Axis::Horizontal), delta(Axis::Vertical))
    }

    fn do_scroll_axis(&mut self, axis: Axis, delta: i32) {
        let delta = Point::ZERO.with(axis, delta);
        self.do_scroll(delta.x, delta.y);
    }

    fn do_scroll(&mut self, dx: i32, dy: i32) {
        if dx == 0 && dy == 0 {
            return;
        }
        if self.config.smooth_scrolling_enabled {
            self.smooth_scroll_by(dx, dy);
        } else {
            self.scroll_by(dx, dy);
        }
    }

    // ------------------------------------------------------------------------
    // Offset commit
    // ------------------------------------------------------------------------

    fn half_size(&self) -> (i32, i32) {
        (
            scale(self.viewport.width(), 0.5),
            scale(self.viewport.height(), 0.5),
        )
    }

    /// Clamp and store an offset. Returns true if it changed.
    fn commit(&mut self, offset: Point) -> bool {
        let clamped = self.bounds.clamp(offset);
        if clamped == self.offset {
            return false;
        }
        tracing::trace!(x = clamped.x, y = clamped.y, "offset");
        self.offset = clamped;
        self.dirty = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::{FocusCandidate, NoFocus};

    /// In-memory focus host
    #[derive(Default)]
    struct Host {
        items: Vec<FocusCandidate>,
        focused: Option<FocusId>,
        viewport_focus_requests: usize,
    }

    impl Host {
        fn with_items(rects: &[Rect]) -> Self {
            Self {
                items: rects
                    .iter()
                    .enumerate()
                    .map(|(i, r)| FocusCandidate::new(FocusId(i as u64 + 1), *r))
                    .collect(),
                ..Default::default()
            }
        }
    }

    impl FocusHost for Host {
        fn focusables(&self) -> Vec<FocusCandidate> {
            self.items.clone()
        }

        fn focused(&self) -> Option<FocusId> {
            self.focused
        }

        fn request_focus(&mut self, id: FocusId, _direction: Option<Direction>) -> bool {
            self.focused = Some(id);
            true
        }

        fn focus_viewport(&mut self) {
            self.focused = None;
            self.viewport_focus_requests += 1;
        }
    }

    fn immediate_config() -> ViewportConfig {
        ViewportConfig {
            smooth_scrolling_enabled: false,
            ..ViewportConfig::default()
        }
    }

    fn controller_with(config: ViewportConfig, content: Size) -> ViewportController {
        let mut c = ViewportController::new(config).unwrap();
        c.attach_child(content).unwrap();
        c.layout(Viewport::new(800, 600), content, &mut NoFocus);
        c
    }

    fn tall() -> ViewportController {
        controller_with(ViewportConfig::default(), Size::new(800, 3000))
    }

    fn run_until_idle(c: &mut ViewportController, mut now: u64) -> u64 {
        while c.state() != InteractionState::Idle {
            now += 16;
            c.tick(now);
            assert!(now < 60_000, "motion never settled");
        }
        now
    }

    #[test]
    fn test_bounds_from_layout() {
        let c = tall();
        assert_eq!(c.bounds(), ContentBounds::new(Point::ZERO, Point::new(0, 2400)));
        assert!(c.can_scroll());
        assert!(c.can_scroll_vertically(1));
        assert!(!c.can_scroll_vertically(-1));
        assert!(!c.can_scroll_horizontally(1));
    }

    #[test]
    fn test_zero_size_viewport_cannot_scroll() {
        let mut c = ViewportController::new(ViewportConfig::default()).unwrap();
        c.attach_child(Size::new(800, 3000)).unwrap();
        c.layout(Viewport::new(0, 0), Size::new(800, 3000), &mut NoFocus);
        assert!(!c.scroll_to(0, 500));
        assert_eq!(c.offset(), Point::ZERO);
    }

    #[test]
    fn test_second_child_is_rejected() {
        let mut c = tall();
        assert!(matches!(
            c.attach_child(Size::new(10, 10)),
            Err(ViewportError::MultipleChildren)
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ViewportConfig {
            touch_slop: -1,
            ..ViewportConfig::default()
        };
        assert!(ViewportController::new(config).is_err());
    }

    #[test]
    fn test_scroll_to_clamps() {
        let mut c = tall();
        assert!(c.scroll_to(50, 5000));
        assert_eq!(c.offset(), Point::new(0, 2400));
        assert!(!c.scroll_to(0, 9999));
        c.scroll_by(0, -100);
        assert_eq!(c.offset(), Point::new(0, 2300));
    }

    #[test]
    fn test_custom_minimum_is_kept() {
        let config = ViewportConfig {
            scroll_min: Point::new(0, 40),
            ..ViewportConfig::default()
        };
        let mut c = controller_with(config, Size::new(800, 3000));
        assert_eq!(c.offset(), Point::new(0, 40));
        c.scroll_to(0, -500);
        assert_eq!(c.offset(), Point::new(0, 40));
    }

    #[test]
    fn test_scroll_to_and_center() {
        let mut c = tall();
        c.scroll_to_and_center(400, 1000);
        assert_eq!(c.offset(), Point::new(0, 700));
    }

    #[test]
    fn test_fill_viewport_stretches_content() {
        let config = ViewportConfig {
            fill_viewport: true,
            ..ViewportConfig::default()
        };
        let c = controller_with(config, Size::new(100, 100));
        assert_eq!(c.content_extent(Axis::Vertical), 600);
        assert!(!c.can_scroll());
    }

    #[test]
    fn test_slide_to_lands_exactly() {
        let mut c = tall();
        assert!(c.slide_to(0, 1234));
        assert!(c.is_sliding());
        let frame = c.tick(16);
        assert!(frame.needs_redraw);
        run_until_idle(&mut c, 16);
        assert_eq!(c.offset(), Point::new(0, 1234));
        assert!(!c.is_sliding());
    }

    #[test]
    fn test_slide_to_current_is_noop() {
        let mut c = tall();
        assert!(!c.slide_to(0, 0));
        assert_eq!(c.state(), InteractionState::Idle);
    }

    #[test]
    fn test_slide_to_current_stops_running_slide() {
        let mut c = tall();
        assert!(c.slide_to(0, 1500));
        c.tick(20);
        let here = c.offset();
        assert!(here.y > 0 && here.y < 1500);

        assert!(!c.slide_to(here.x, here.y));
        assert_eq!(c.state(), InteractionState::Idle);
        c.tick(1000);
        assert_eq!(c.offset(), here);
    }

    #[test]
    fn test_extreme_deltas_saturate() {
        let mut c = tall();
        c.scroll_to(0, 100);
        c.scroll_by(0, i32::MAX);
        assert_eq!(c.offset(), Point::new(0, 2400));
        c.scroll_by(i32::MIN, i32::MIN);
        assert_eq!(c.offset(), Point::ZERO);

        c.scroll_to_and_center(i32::MAX, i32::MAX);
        assert_eq!(c.offset(), Point::new(0, 2400));
        c.scroll_to_and_center(i32::MIN, i32::MIN);
        assert_eq!(c.offset(), Point::ZERO);

        assert!(c.slide_to_and_center(i32::MIN, i32::MAX));
        let now = run_until_idle(&mut c, 0);
        assert_eq!(c.offset(), Point::new(0, 2400));

        c.tick(now + 1000);
        assert!(c.smooth_scroll_by(0, i32::MIN));
        run_until_idle(&mut c, now + 1000);
        assert_eq!(c.offset(), Point::ZERO);
    }

    #[test]
    fn test_huge_fling_stays_in_bounds() {
        let mut c = tall();
        c.scroll_to(0, 100);
        assert!(c.fling(0.0, -5e7, &mut NoFocus));
        let mut now = 0;
        while c.is_flinging() {
            now += 16;
            c.tick(now);
            assert!(c.bounds().contains(c.offset()));
            assert!(now < 60_000, "fling never settled");
        }
        assert_eq!(c.offset(), Point::new(0, 2400));
    }

    #[test]
    fn test_smooth_scroll_gap() {
        let mut c = tall();
        c.tick(1000);
        assert!(c.smooth_scroll_by(0, 300));
        assert!(c.is_sliding());

        // Within the gap: relative to the pending target, applied at once
        c.tick(1100);
        c.smooth_scroll_by(0, -300);
        assert_eq!(c.state(), InteractionState::Idle);
        assert_eq!(c.offset(), Point::ZERO);
    }

    #[test]
    fn test_immediate_mode_never_animates() {
        let mut c = controller_with(immediate_config(), Size::new(800, 3000));
        assert!(c.slide_to(0, 500));
        assert_eq!(c.state(), InteractionState::Idle);
        assert_eq!(c.offset(), Point::new(0, 500));

        let sim = FlingSimulator::new(c.config().fling_config());
        let expected = 500 + sim.fling_distance(2000.0).round() as i32;
        assert!(c.fling(0.0, -2000.0, &mut NoFocus));
        assert_eq!(c.state(), InteractionState::Idle);
        assert_eq!(c.offset(), Point::new(0, expected));
    }

    #[test]
    fn test_drag_moves_opposite_to_pointer() {
        let mut c = tall();
        c.scroll_to(0, 1000);
        let mut host = NoFocus;
        c.on_pointer_event(&PointerEvent::down(400.0, 300.0, 0), &mut host);
        c.on_pointer_event(&PointerEvent::moved(400.0, 250.0, 10), &mut host);
        assert!(c.is_dragging());
        assert_eq!(c.offset(), Point::new(0, 1050));
        c.on_pointer_event(&PointerEvent::moved(400.0, 350.0, 20), &mut host);
        assert_eq!(c.offset(), Point::new(0, 950));
    }

    #[test]
    fn test_drag_past_edge_is_truncated() {
        let mut c = tall();
        let mut host = NoFocus;
        c.on_pointer_event(&PointerEvent::down(400.0, 100.0, 0), &mut host);
        c.on_pointer_event(&PointerEvent::moved(400.0, 400.0, 10), &mut host);
        assert_eq!(c.offset(), Point::ZERO);
    }

    #[test]
    fn test_slow_release_returns_to_idle() {
        let mut c = tall();
        let mut host = NoFocus;
        c.on_pointer_event(&PointerEvent::down(400.0, 400.0, 0), &mut host);
        c.on_pointer_event(&PointerEvent::moved(400.0, 300.0, 10), &mut host);
        c.on_pointer_event(&PointerEvent::up(400.0, 300.0, 300), &mut host);
        assert_eq!(c.state(), InteractionState::Idle);
        assert_eq!(c.offset(), Point::new(0, 100));
    }

    #[test]
    fn test_touch_aborts_fling() {
        let mut c = tall();
        let mut host = NoFocus;
        assert!(c.fling(0.0, -3000.0, &mut host));
        c.tick(100);
        let stopped_at = c.offset();
        c.on_pointer_event(&PointerEvent::down(10.0, 10.0, 110), &mut host);
        assert!(!c.is_flinging());
        c.on_pointer_event(&PointerEvent::up(10.0, 10.0, 120), &mut host);
        c.tick(500);
        assert_eq!(c.offset(), stopped_at);
    }

    #[test]
    fn test_missed_release_ends_drag() {
        let mut c = tall();
        let mut host = NoFocus;
        c.on_pointer_event(&PointerEvent::down(400.0, 400.0, 0), &mut host);
        c.on_pointer_event(&PointerEvent::moved(400.0, 300.0, 10), &mut host);
        assert!(c.is_dragging());
        c.on_pointer_event(&PointerEvent::down(400.0, 400.0, 50), &mut host);
        assert_eq!(c.state(), InteractionState::Idle);
        assert!(c.slide_to(0, 500));
    }

    #[test]
    fn test_fling_refused_while_dragging() {
        let mut c = tall();
        let mut host = NoFocus;
        c.on_pointer_event(&PointerEvent::down(400.0, 400.0, 0), &mut host);
        c.on_pointer_event(&PointerEvent::moved(400.0, 300.0, 10), &mut host);
        assert!(!c.fling(0.0, -3000.0, &mut host));
        assert!(!c.slide_to(0, 500));
        assert!(c.is_dragging());
    }

    #[test]
    fn test_resize_truncates_fling() {
        let mut c = tall();
        let mut host = NoFocus;
        c.fling(0.0, -8000.0, &mut host);
        c.tick(50);
        c.layout(Viewport::new(800, 600), Size::new(800, 900), &mut host);
        assert!(c.offset().y <= 300);
        run_until_idle(&mut c, 50);
        assert_eq!(c.offset(), Point::new(0, 300));
    }

    #[test]
    fn test_arrow_scroll_without_focusables() {
        let mut c = controller_with(immediate_config(), Size::new(800, 3000));
        let mut host = NoFocus;
        assert!(c.arrow_scroll(Direction::Down, &mut host));
        assert_eq!(c.offset(), Point::new(0, 300));

        c.scroll_to(0, 2200);
        assert!(c.arrow_scroll(Direction::Down, &mut host));
        assert_eq!(c.offset(), Point::new(0, 2400));
        assert!(!c.arrow_scroll(Direction::Down, &mut host));
    }

    #[test]
    fn test_arrow_scroll_when_content_fits() {
        let mut c = controller_with(immediate_config(), Size::new(800, 600));
        assert!(!c.arrow_scroll(Direction::Down, &mut NoFocus));
    }

    #[test]
    fn test_arrow_scroll_moves_focus_to_nearby_item() {
        let mut c = controller_with(immediate_config(), Size::new(800, 3000));
        let mut host = Host::with_items(&[Rect::new(0, 100, 800, 50), Rect::new(0, 700, 800, 50)]);
        host.focused = Some(FocusId(1));

        assert!(c.arrow_scroll(Direction::Down, &mut host));
        assert_eq!(host.focused, Some(FocusId(2)));
        assert_eq!(c.offset(), Point::new(0, 150));
        // The host echoes the focus change; it was ours, so no extra scroll
        assert!(!c.on_child_focused(FocusId(2), &mut host));
    }

    #[test]
    fn test_arrow_scroll_reclaims_focus_when_scrolled_away() {
        let mut c = controller_with(immediate_config(), Size::new(800, 3000));
        let mut host = Host::with_items(&[Rect::new(0, 0, 800, 50)]);
        host.focused = Some(FocusId(1));

        assert!(c.arrow_scroll(Direction::Down, &mut host));
        assert_eq!(c.offset(), Point::new(0, 300));
        assert_eq!(host.focused, None);
        assert_eq!(host.viewport_focus_requests, 1);
    }

    #[test]
    fn test_page_scroll_round_trip() {
        let mut c = controller_with(immediate_config(), Size::new(800, 3000));
        let mut host = NoFocus;
        c.scroll_to(0, 500);
        assert!(c.page_scroll(Direction::Down, &mut host));
        assert_eq!(c.offset(), Point::new(0, 1100));
        assert!(c.page_scroll(Direction::Up, &mut host));
        assert_eq!(c.offset(), Point::new(0, 500));
    }

    #[test]
    fn test_page_scroll_round_trip_smooth() {
        let mut c = tall();
        let mut host = NoFocus;
        c.tick(1000);
        assert!(c.page_scroll(Direction::Down, &mut host));
        assert!(c.page_scroll(Direction::Up, &mut host));
        run_until_idle(&mut c, 1000);
        assert_eq!(c.offset(), Point::ZERO);
    }

    #[test]
    fn test_full_scroll() {
        let mut c = controller_with(immediate_config(), Size::new(800, 3000));
        let mut host = Host::with_items(&[Rect::new(0, 2900, 800, 50)]);
        assert!(c.full_scroll(Direction::Down, &mut host));
        assert_eq!(c.offset(), Point::new(0, 2400));
        assert_eq!(host.focused, Some(FocusId(1)));
        assert!(c.full_scroll(Direction::Up, &mut host));
        assert_eq!(c.offset(), Point::ZERO);
        assert_eq!(host.focused, None);
    }

    #[test]
    fn test_key_dispatch() {
        use scrollkit_core::events::Modifiers;

        let mut c = controller_with(immediate_config(), Size::new(800, 3000));
        let mut host = NoFocus;
        assert!(c.execute_key_event(&KeyEvent::new(KeyCode::PAGE_DOWN), &mut host));
        assert_eq!(c.offset(), Point::new(0, 600));
        assert!(c.execute_key_event(&KeyEvent::new(KeyCode::SPACE), &mut host));
        assert_eq!(c.offset(), Point::new(0, 1200));
        let shift = Modifiers::new(true, false, false);
        assert!(c.execute_key_event(&KeyEvent::with_modifiers(KeyCode::SPACE, shift), &mut host));
        assert_eq!(c.offset(), Point::new(0, 600));
        let alt = Modifiers::new(false, false, true);
        assert!(c.execute_key_event(&KeyEvent::with_modifiers(KeyCode::DOWN, alt), &mut host));
        assert_eq!(c.offset(), Point::new(0, 2400));
        assert!(c.execute_key_event(&KeyEvent::new(KeyCode::HOME), &mut host));
        assert_eq!(c.offset(), Point::ZERO);
        assert!(!c.execute_key_event(&KeyEvent::new(KeyCode::UNKNOWN), &mut host));
    }

    #[test]
    fn test_key_moves_focus_when_nothing_scrolls() {
        let mut c = controller_with(immediate_config(), Size::new(800, 600));
        let mut host = Host::with_items(&[Rect::new(0, 100, 800, 50)]);
        assert!(c.execute_key_event(&KeyEvent::new(KeyCode::DOWN), &mut host));
        assert_eq!(host.focused, Some(FocusId(1)));
        assert!(!c.execute_key_event(&KeyEvent::new(KeyCode::DOWN), &mut host));
    }

    #[test]
    fn test_child_focus_reveal_waits_for_layout() {
        let mut c = ViewportController::new(immediate_config()).unwrap();
        c.attach_child(Size::new(800, 3000)).unwrap();
        let mut host = Host::with_items(&[Rect::new(0, 1500, 800, 100)]);

        assert!(!c.on_child_focused(FocusId(1), &mut host));
        assert_eq!(c.offset(), Point::ZERO);

        c.layout(Viewport::new(800, 600), Size::new(800, 3000), &mut host);
        assert_eq!(c.offset(), Point::new(0, 1000));

        c.scroll_to(0, 0);
        assert!(c.on_child_focused(FocusId(1), &mut host));
        assert_eq!(c.offset(), Point::new(0, 1000));
    }

    #[test]
    fn test_deferred_reveal_skipped_when_detached() {
        let mut c = ViewportController::new(immediate_config()).unwrap();
        c.attach_child(Size::new(800, 3000)).unwrap();
        let mut host = Host::with_items(&[Rect::new(0, 1500, 800, 100)]);
        c.on_child_focused(FocusId(1), &mut host);
        host.items.clear();
        c.layout(Viewport::new(800, 600), Size::new(800, 3000), &mut host);
        assert_eq!(c.offset(), Point::ZERO);
    }

    #[test]
    fn test_resize_keeps_focus_visible() {
        let mut c = controller_with(immediate_config(), Size::new(800, 3000));
        let mut host = Host::with_items(&[Rect::new(0, 500, 800, 80)]);
        host.focused = Some(FocusId(1));
        c.layout(Viewport::new(800, 300), Size::new(800, 3000), &mut host);
        assert_eq!(c.offset(), Point::new(0, 280));
    }

    #[test]
    fn test_request_rectangle_on_screen() {
        let mut c = controller_with(immediate_config(), Size::new(800, 3000));
        assert!(c.request_rectangle_on_screen(Rect::new(0, 900, 100, 100), true));
        assert_eq!(c.offset(), Point::new(0, 400));
        assert!(!c.request_rectangle_on_screen(Rect::new(0, 500, 100, 100), true));
    }

    #[test]
    fn test_focus_in_descendants_refuses_off_screen() {
        let mut c = controller_with(immediate_config(), Size::new(800, 3000));
        let mut host = Host::with_items(&[Rect::new(0, 1000, 800, 50)]);
        assert!(!c.request_focus_in_descendants(Direction::Down, None, &mut host));
        assert_eq!(host.focused, None);

        c.scroll_to(0, 800);
        assert!(c.request_focus_in_descendants(Direction::Down, None, &mut host));
        assert_eq!(host.focused, Some(FocusId(1)));
    }

    #[test]
    fn test_fling_moves_focus_into_landing_window() {
        let mut c = tall();
        let mut host = Host::with_items(&[Rect::new(0, 100, 800, 50), Rect::new(0, 2500, 800, 50)]);
        host.focused = Some(FocusId(1));
        c.fling(0.0, -8000.0, &mut host);
        // Lands at the bottom; the lower item is the only one in that window
        assert_eq!(host.focused, Some(FocusId(2)));
        run_until_idle(&mut c, 0);
        assert_eq!(c.offset(), Point::new(0, 2400));
    }

    #[test]
    fn test_interaction_transitions() {
        use event_types::*;
        use InteractionState::*;
        assert_eq!(Idle.on_event(DRAG), Some(Dragging));
        assert_eq!(Dragging.on_event(SLIDE), None);
        assert_eq!(Flinging.on_event(POINTER_DOWN), Some(Idle));
        assert_eq!(Animating.on_event(SLIDE), Some(Animating));
        assert_eq!(Idle.on_event(SETTLED), None);
    }
}
