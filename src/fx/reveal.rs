//! Scroll reveal and section mood
//!
//! Observed elements flip to revealed the first time they intersect the
//! viewport and stay that way. The page mood follows whichever known section
//! last had an element come into view.

use serde::{Deserialize, Serialize};

/// Page-level cosmetic classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Hero,
    About,
    Projects,
    Contact,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Hero, Mood::About, Mood::Projects, Mood::Contact];

    /// Map a section id to its mood. Unknown sections have none.
    pub fn from_section_id(id: &str) -> Option<Self> {
        match id {
            "hero" => Some(Mood::Hero),
            "about" => Some(Mood::About),
            "projects" => Some(Mood::Projects),
            "contact" => Some(Mood::Contact),
            _ => None,
        }
    }

    /// Body class applied for this mood
    pub fn class_name(&self) -> &'static str {
        match self {
            Mood::Hero => "theme-hero",
            Mood::About => "theme-about",
            Mood::Projects => "theme-projects",
            Mood::Contact => "theme-contact",
        }
    }
}

/// What changed in response to an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reaction {
    pub newly_revealed: bool,
    /// Set when the page mood was overwritten
    pub mood: Option<Mood>,
}

#[derive(Debug, Clone, Default)]
pub struct VisibilityReactor {
    revealed: Vec<bool>,
    mood: Option<Mood>,
}

impl VisibilityReactor {
    pub fn with_len(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
            mood: None,
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    /// Feed one intersection entry. Non-intersecting entries and unknown
    /// indices change nothing.
    pub fn observe(&mut self, index: usize, intersecting: bool, section_id: Option<&str>) -> Reaction {
        if !intersecting {
            return Reaction::default();
        }
        let Some(slot) = self.revealed.get_mut(index) else {
            return Reaction::default();
        };
        let newly_revealed = !*slot;
        *slot = true;

        // Re-entering a section re-asserts its mood even if already current
        let mood = section_id.and_then(Mood::from_section_id);
        if let Some(m) = mood {
            self.mood = Some(m);
        }
        Reaction {
            newly_revealed,
            mood,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reveal_once() {
        let mut r = VisibilityReactor::with_len(3);
        let first = r.observe(1, true, Some("about"));
        assert!(first.newly_revealed);
        assert_eq!(first.mood, Some(Mood::About));
        let again = r.observe(1, true, Some("about"));
        assert!(!again.newly_revealed);
        assert!(r.is_revealed(1));
        assert!(!r.is_revealed(0));
    }

    #[test]
    fn test_leaving_view_is_ignored() {
        let mut r = VisibilityReactor::with_len(1);
        assert_eq!(r.observe(0, false, Some("hero")), Reaction::default());
        assert!(!r.is_revealed(0));
        assert_eq!(r.mood(), None);
    }

    #[test]
    fn test_mood_last_writer_wins() {
        let mut r = VisibilityReactor::with_len(3);
        r.observe(0, true, Some("hero"));
        r.observe(1, true, Some("projects"));
        assert_eq!(r.mood(), Some(Mood::Projects));
        // Unknown section leaves mood alone
        let reaction = r.observe(2, true, Some("footer"));
        assert_eq!(reaction.mood, None);
        assert_eq!(r.mood(), Some(Mood::Projects));
        r.observe(0, true, Some("hero"));
        assert_eq!(r.mood(), Some(Mood::Hero));
    }

    #[test]
    fn test_unknown_index() {
        let mut r = VisibilityReactor::with_len(1);
        assert_eq!(r.observe(5, true, Some("hero")), Reaction::default());
        assert_eq!(r.mood(), None);
    }

    #[test]
    fn test_mood_classes() {
        for mood in Mood::ALL {
            assert!(mood.class_name().starts_with("theme-"));
        }
        assert_eq!(Mood::from_section_id("contact"), Some(Mood::Contact));
        assert_eq!(Mood::from_section_id("Contact"), None);
    }

    proptest! {
        #[test]
        fn prop_revealed_never_reverts(
            events in prop::collection::vec((0usize..8, any::<bool>()), 0..200)
        ) {
            let mut r = VisibilityReactor::with_len(8);
            let mut seen = [false; 8];
            for (i, hit) in events {
                r.observe(i, hit, None);
                seen[i] |= hit;
                for (j, s) in seen.iter().enumerate() {
                    prop_assert_eq!(r.is_revealed(j), *s);
                }
            }
        }
    }
}
