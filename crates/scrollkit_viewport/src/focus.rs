//! Focus navigation
//!
//! Geometry for keeping keyboard focus and scrolling in step: picking a
//! focus target inside a window, searching for the next focusable in a
//! direction, and computing the smallest scroll that reveals a rectangle.
//!
//! All rectangles are in content coordinates. The visible window is the
//! viewport rectangle placed at the current scroll offset.
//!
//! The engine never holds on to candidates. The host hands them over for
//! each query through [`FocusHost`] and the engine asks the host to move
//! focus; it never walks a view tree itself.

use scrollkit_core::geometry::{Axis, Direction, Rect};
use serde::{Deserialize, Serialize};

/// Host-assigned identity of a focusable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FocusId(pub u64);

/// A focusable element and its bounds in content coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusCandidate {
    pub id: FocusId,
    pub rect: Rect,
}

impl FocusCandidate {
    pub const fn new(id: FocusId, rect: Rect) -> Self {
        Self { id, rect }
    }
}

/// The host's focus system, as seen by a viewport
pub trait FocusHost {
    /// Focusable descendants of the viewport's content
    fn focusables(&self) -> Vec<FocusCandidate>;

    /// The focused descendant, or `None` when focus is elsewhere (including
    /// on the viewport itself)
    fn focused(&self) -> Option<FocusId>;

    /// Move focus to a descendant. Returns true if focus moved.
    fn request_focus(&mut self, id: FocusId, direction: Option<Direction>) -> bool;

    /// Give focus to the viewport itself ahead of its descendants
    fn focus_viewport(&mut self);

    /// Whether the element is still part of the viewport's content
    fn is_attached(&self, id: FocusId) -> bool {
        self.focusables().iter().any(|c| c.id == id)
    }

    /// Bounds of the focused descendant
    fn focused_rect(&self) -> Option<Rect> {
        let id = self.focused()?;
        self.focusables()
            .into_iter()
            .find(|c| c.id == id)
            .map(|c| c.rect)
    }
}

/// Host with nothing focusable
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFocus;

impl FocusHost for NoFocus {
    fn focusables(&self) -> Vec<FocusCandidate> {
        Vec::new()
    }

    fn focused(&self) -> Option<FocusId> {
        None
    }

    fn request_focus(&mut self, _id: FocusId, _direction: Option<Direction>) -> bool {
        false
    }

    fn focus_viewport(&mut self) {}
}

/// Weight of the distance along the travel direction relative to the
/// sideways distance when ranking directional candidates
const MAJOR_AXIS_WEIGHT: i64 = 13;

/// Focus geometry for one viewport
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusNavigator {
    fading_edge_length: i32,
}

impl FocusNavigator {
    pub fn new(fading_edge_length: i32) -> Self {
        Self {
            fading_edge_length: fading_edge_length.max(0),
        }
    }

    pub fn fading_edge_length(&self) -> i32 {
        self.fading_edge_length
    }

    /// Pick a focusable overlapping `[start, end)` along `axis`
    ///
    /// A candidate strictly inside the range beats one that is only partly
    /// inside. Within a class, the one closest to the start of the range
    /// wins when `prefer_start` is set, otherwise the one closest to the end.
    pub fn find_focusable_in_bounds<'a>(
        &self,
        candidates: &'a [FocusCandidate],
        axis: Axis,
        prefer_start: bool,
        start: i32,
        end: i32,
    ) -> Option<&'a FocusCandidate> {
        let mut best: Option<&FocusCandidate> = None;
        let mut best_fully_contained = false;

        for candidate in candidates {
            let c_start = candidate.rect.start(axis);
            let c_end = candidate.rect.end(axis);
            if !(start < c_end && c_start < end) {
                continue;
            }

            let fully_contained = start < c_start && c_end < end;
            let Some(current) = best else {
                best = Some(candidate);
                best_fully_contained = fully_contained;
                continue;
            };

            let closer = if prefer_start {
                c_start < current.rect.start(axis)
            } else {
                c_end > current.rect.end(axis)
            };

            if best_fully_contained {
                if fully_contained && closer {
                    best = Some(candidate);
                }
            } else if fully_contained {
                best = Some(candidate);
                best_fully_contained = true;
            } else if closer {
                best = Some(candidate);
            }
        }
        best
    }

    /// Pick a focus target for `window`
    ///
    /// Half the fading edge at each end of the window is treated as hidden.
    /// `preferred` (usually the current focus) wins if it still overlaps the
    /// remaining range; otherwise the choice follows
    /// [`find_focusable_in_bounds`](Self::find_focusable_in_bounds), with
    /// `direction` selecting which end of the window counts as closest.
    pub fn find_next_focusable<'a>(
        &self,
        direction: Direction,
        candidates: &'a [FocusCandidate],
        window: &Rect,
        preferred: Option<&'a FocusCandidate>,
    ) -> Option<&'a FocusCandidate> {
        let axis = direction.axis();
        let margin = self.fading_edge_length / 2;
        let start = window.start(axis) + margin;
        let end = window.end(axis) - margin;

        if let Some(preferred) = preferred {
            if preferred.rect.start(axis) < end && preferred.rect.end(axis) > start {
                return Some(preferred);
            }
        }

        self.find_focusable_in_bounds(candidates, axis, direction.is_toward_start(), start, end)
    }

    /// Signed scroll along `axis` that brings `rect` on screen
    ///
    /// A rect longer than the window is revealed one window-length at a
    /// time, leading edge first. The fading edge is kept clear unless the
    /// rect touches the content edge on that side. The result never scrolls
    /// past the content start or `content_extent`.
    pub fn scroll_delta_to_reveal(
        &self,
        rect: &Rect,
        axis: Axis,
        window: &Rect,
        content_extent: i32,
    ) -> i32 {
        let extent = window.extent(axis);
        let scroll = window.start(axis);
        let mut screen_start = scroll;
        let mut screen_end = scroll + extent;

        if rect.start(axis) > 0 {
            screen_start += self.fading_edge_length;
        }
        if rect.end(axis) < content_extent {
            screen_end -= self.fading_edge_length;
        }

        let mut delta = 0;
        if rect.end(axis) > screen_end && rect.start(axis) > screen_start {
            delta += if rect.extent(axis) > extent {
                rect.start(axis) - screen_start
            } else {
                rect.end(axis) - screen_end
            };
            let distance_to_end = content_extent - (scroll + extent);
            delta = delta.min(distance_to_end);
        } else if rect.start(axis) < screen_start && rect.end(axis) < screen_end {
            delta -= if rect.extent(axis) > extent {
                screen_end - rect.end(axis)
            } else {
                screen_start - rect.start(axis)
            };
            delta = delta.max(-scroll);
        }
        delta
    }

    /// Whether `rect` lies within `delta` pixels of the window along `axis`
    pub fn is_within_delta_of_screen(&self, rect: &Rect, axis: Axis, window: &Rect, delta: i32) -> bool {
        rect.end(axis) + delta >= window.start(axis) && rect.start(axis) - delta <= window.end(axis)
    }

    /// True when `rect` is entirely outside the window on either axis
    pub fn is_off_screen(&self, rect: &Rect, window: &Rect) -> bool {
        !(self.is_within_delta_of_screen(rect, Axis::Vertical, window, 0)
            && self.is_within_delta_of_screen(rect, Axis::Horizontal, window, 0))
    }

    /// Nearest candidate beyond `source` in `direction`
    ///
    /// Candidates must lie past the source's edge in the direction of travel.
    /// Ranking favours distance along the direction over sideways offset.
    pub fn find_in_direction<'a>(
        &self,
        candidates: &'a [FocusCandidate],
        source: &Rect,
        direction: Direction,
        exclude: Option<FocusId>,
    ) -> Option<&'a FocusCandidate> {
        candidates
            .iter()
            .filter(|c| Some(c.id) != exclude)
            .filter(|c| is_candidate(source, &c.rect, direction))
            .min_by_key(|c| directional_score(source, &c.rect, direction))
    }

    /// Source rect for a directional search with no focused element: the
    /// window corner the search moves away from
    pub fn leading_corner(window: &Rect, direction: Direction) -> Rect {
        if direction.is_toward_start() {
            Rect::new(window.right(), window.bottom(), 0, 0)
        } else {
            Rect::new(window.left(), window.top(), 0, 0)
        }
    }
}

fn is_candidate(src: &Rect, dest: &Rect, direction: Direction) -> bool {
    let axis = direction.axis();
    let (s0, s1) = (src.start(axis), src.end(axis));
    let (d0, d1) = (dest.start(axis), dest.end(axis));
    if direction.is_toward_start() {
        (s1 > d1 || s0 >= d1) && s0 > d0
    } else {
        (s0 < d0 || s1 <= d0) && s1 < d1
    }
}

fn directional_score(src: &Rect, dest: &Rect, direction: Direction) -> i64 {
    let axis = direction.axis();
    let major = if direction.is_toward_start() {
        src.start(axis) - dest.end(axis)
    } else {
        dest.start(axis) - src.end(axis)
    }
    .max(0) as i64;

    let other = axis.other();
    let src_center = src.start(other) as i64 * 2 + src.extent(other) as i64;
    let dest_center = dest.start(other) as i64 * 2 + dest.extent(other) as i64;
    let minor = (src_center - dest_center).abs() / 2;

    MAJOR_AXIS_WEIGHT * major * major + minor * minor
}
