//! State Machine Runtime
//!
//! Flat, enum-based state machines for interaction states. A state type
//! declares its transition table by implementing [`StateTransitions`];
//! [`StateMachine`] holds the current state and a short transition history
//! for debugging.

use smallvec::SmallVec;

/// Identifier for an event type (see [`crate::events::event_types`])
pub type EventId = u32;

/// Number of transitions kept in the history ring
const HISTORY_CAPACITY: usize = 16;

/// Trait for enum states that react to numeric events
///
/// # Example
///
/// ```rust
/// use scrollkit_core::fsm::{StateMachine, StateTransitions};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// enum Lamp {
///     #[default]
///     Off,
///     On,
/// }
///
/// impl StateTransitions for Lamp {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (Lamp::Off, 1) => Some(Lamp::On),
///             (Lamp::On, 1) => Some(Lamp::Off),
///             _ => None,
///         }
///     }
/// }
///
/// let mut lamp = StateMachine::new(Lamp::Off);
/// assert_eq!(lamp.send(1), Some(Lamp::On));
/// assert_eq!(lamp.send(2), None);
/// ```
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + std::hash::Hash + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventId) -> Option<Self>;
}

/// A state machine instance over a `StateTransitions` enum
#[derive(Debug, Clone)]
pub struct StateMachine<S: StateTransitions> {
    current: S,
    history: SmallVec<[(S, EventId, S); HISTORY_CAPACITY]>,
}

impl<S: StateTransitions> StateMachine<S> {
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            history: SmallVec::new(),
        }
    }

    /// Get the current state
    pub fn current(&self) -> S {
        self.current
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current == state
    }

    /// Check if an event would trigger a transition from the current state
    pub fn can_send(&self, event: EventId) -> bool {
        self.current.on_event(event).is_some()
    }

    /// Send an event, returning the new state if a transition occurred
    pub fn send(&mut self, event: EventId) -> Option<S> {
        let from = self.current;
        let to = from.on_event(event)?;

        self.current = to;
        if self.history.len() == HISTORY_CAPACITY {
            self.history.remove(0);
        }
        self.history.push((from, event, to));

        tracing::trace!(?from, ?to, event, "state transition");
        Some(to)
    }

    /// Most recent transitions, oldest first
    pub fn history(&self) -> &[(S, EventId, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl<S: StateTransitions + Default> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
