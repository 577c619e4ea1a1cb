//! Custom cursor hover state
//!
//! The marker grows while the pointer is over a link, button or project card.
//! Instead of toggling on every enter/leave pair, the tracker keeps the number
//! of matching elements in the ancestor chain under the pointer. Leaving a
//! nested match while still inside an outer one keeps the count above zero.

/// Selectors that make the cursor grow
pub const HOVER_SELECTORS: [&str; 3] = ["a", "button", ".proj"];

#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    depth: usize,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_grown(&self) -> bool {
        self.depth > 0
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Pointer now over an element with `matching_ancestors` matches in its
    /// ancestor chain (itself included). Returns the new grown state if it
    /// changed.
    pub fn enter(&mut self, matching_ancestors: usize) -> Option<bool> {
        let was = self.is_grown();
        self.depth = matching_ancestors;
        let now = self.is_grown();
        (was != now).then_some(now)
    }

    /// Pointer left the document entirely
    pub fn leave_document(&mut self) -> Option<bool> {
        self.enter(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_and_shrink() {
        let mut t = HoverTracker::new();
        assert!(!t.is_grown());
        assert_eq!(t.enter(1), Some(true));
        assert_eq!(t.enter(0), Some(false));
        assert_eq!(t.enter(0), None);
    }

    #[test]
    fn test_nested_targets_stay_grown() {
        let mut t = HoverTracker::new();
        // card -> button inside card -> back to card body
        assert_eq!(t.enter(1), Some(true));
        assert_eq!(t.enter(2), None);
        assert_eq!(t.enter(1), None);
        assert!(t.is_grown());
        assert_eq!(t.depth(), 1);
        assert_eq!(t.leave_document(), Some(false));
    }
}
