//! Simulated focus tree for headless runs

use scrollkit_core::geometry::{Direction, Rect};
use scrollkit_viewport::{FocusCandidate, FocusHost, FocusId};
use slotmap::{new_key_type, Key, KeyData, SlotMap};

new_key_type! {
    pub struct ElementKey;
}

#[derive(Debug, Clone)]
struct Element {
    name: String,
    rect: Rect,
}

/// Focusable elements plus a single focus slot. `None` means the viewport
/// itself holds focus.
#[derive(Debug, Default)]
pub struct SimulatedHost {
    elements: SlotMap<ElementKey, Element>,
    focused: Option<ElementKey>,
}

fn focus_id(key: ElementKey) -> FocusId {
    FocusId(key.data().as_ffi())
}

fn element_key(id: FocusId) -> ElementKey {
    ElementKey::from(KeyData::from_ffi(id.0))
}

impl SimulatedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, rect: Rect) -> FocusId {
        focus_id(self.elements.insert(Element {
            name: name.into(),
            rect,
        }))
    }

    pub fn remove(&mut self, id: FocusId) {
        let key = element_key(id);
        self.elements.remove(key);
        if self.focused == Some(key) {
            self.focused = None;
        }
    }

    pub fn find(&self, name: &str) -> Option<FocusId> {
        self.elements
            .iter()
            .find(|(_, element)| element.name == name)
            .map(|(key, _)| focus_id(key))
    }

    /// Name of the focused element
    pub fn focused_name(&self) -> Option<&str> {
        self.focused
            .and_then(|key| self.elements.get(key))
            .map(|element| element.name.as_str())
    }
}

impl FocusHost for SimulatedHost {
    fn focusables(&self) -> Vec<FocusCandidate> {
        self.elements
            .iter()
            .map(|(key, element)| FocusCandidate::new(focus_id(key), element.rect))
            .collect()
    }

    fn focused(&self) -> Option<FocusId> {
        self.focused
            .filter(|key| self.elements.contains_key(*key))
            .map(focus_id)
    }

    fn request_focus(&mut self, id: FocusId, direction: Option<Direction>) -> bool {
        let key = element_key(id);
        if !self.elements.contains_key(key) {
            tracing::warn!(id = id.0, "focus requested for unknown element");
            return false;
        }
        tracing::debug!(name = self.elements[key].name.as_str(), ?direction, "focus moved");
        self.focused = Some(key);
        true
    }

    fn focus_viewport(&mut self) {
        tracing::debug!("viewport took focus");
        self.focused = None;
    }

    fn is_attached(&self, id: FocusId) -> bool {
        self.elements.contains_key(element_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_round_trip() {
        let mut host = SimulatedHost::new();
        let a = host.insert("a", Rect::new(0, 0, 10, 10));
        let b = host.insert("b", Rect::new(0, 20, 10, 10));

        assert_eq!(host.find("b"), Some(b));
        assert!(host.request_focus(a, None));
        assert_eq!(host.focused(), Some(a));
        assert_eq!(host.focused_name(), Some("a"));
        assert_eq!(host.focused_rect(), Some(Rect::new(0, 0, 10, 10)));

        host.focus_viewport();
        assert_eq!(host.focused(), None);
        assert_eq!(host.focusables().len(), 2);
    }

    #[test]
    fn test_removed_element_is_detached() {
        let mut host = SimulatedHost::new();
        let a = host.insert("a", Rect::new(0, 0, 10, 10));
        host.request_focus(a, None);
        host.remove(a);

        assert!(!host.is_attached(a));
        assert_eq!(host.focused(), None);
        assert!(!host.request_focus(a, None));
        assert_eq!(host.find("a"), None);
    }
}
