//! Scroll-depth badges
//!
//! Persisted to LocalStorage as a JSON array of milestone ids. The set only
//! ever grows.

use serde::{Deserialize, Serialize};

use crate::consts::BADGE_THRESHOLDS;
use crate::persistence::Store;

/// Notification text for a fresh unlock
pub const UNLOCK_MESSAGE: &str = "Badge unlocked!";

/// A scroll-depth milestone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    /// Scroll fraction at which the badge unlocks
    pub threshold: f64,
    pub id: &'static str,
}

/// The fixed milestone list, in ascending threshold order
pub fn milestones() -> impl Iterator<Item = Milestone> {
    BADGE_THRESHOLDS
        .iter()
        .map(|&(threshold, id)| Milestone { threshold, id })
}

/// Unlocked badge ids
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct BadgeBook {
    unlocked: Vec<String>,
}

impl BadgeBook {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "portfolio-badges";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.iter().any(|u| u == id)
    }

    pub fn unlocked(&self) -> &[String] {
        &self.unlocked
    }

    pub fn len(&self) -> usize {
        self.unlocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }

    /// Unlock every milestone reached by `fraction` that isn't unlocked yet.
    /// Returns the newly unlocked milestones.
    pub fn record(&mut self, fraction: f64) -> Vec<Milestone> {
        let mut fresh = Vec::new();
        for m in milestones() {
            if fraction >= m.threshold && !self.is_unlocked(m.id) {
                self.unlocked.push(m.id.to_string());
                log::info!("Badge unlocked: {}", m.id);
                fresh.push(m);
            }
        }
        fresh
    }

    /// Load from the store, starting fresh if missing or corrupt
    pub fn load(store: &dyn Store) -> Self {
        let Some(json) = store.get(Self::STORAGE_KEY) else {
            log::info!("No badges found, starting fresh");
            return Self::new();
        };
        match serde_json::from_str::<BadgeBook>(&json) {
            Ok(book) => {
                log::info!("Loaded {} badges", book.len());
                book
            }
            Err(e) => {
                log::warn!("Ignoring corrupt badge data: {}", e);
                Self::new()
            }
        }
    }

    pub fn save(&self, store: &mut dyn Store) {
        if let Ok(json) = serde_json::to_string(self) {
            store.set(Self::STORAGE_KEY, &json);
            log::debug!("Badges saved ({} unlocked)", self.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    #[test]
    fn test_unlocks_in_order() {
        let mut book = BadgeBook::new();
        assert!(book.record(0.1).is_empty());

        let fresh = book.record(0.3);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].id, "scrolled-25");

        let fresh = book.record(0.5);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].id, "scrolled-50");

        assert_eq!(book.record(0.8)[0].id, "scrolled-80");
        assert_eq!(book.unlocked(), ["scrolled-25", "scrolled-50", "scrolled-80"]);
    }

    #[test]
    fn test_jump_unlocks_several() {
        let mut book = BadgeBook::new();
        let fresh = book.record(1.0);
        let ids: Vec<_> = fresh.iter().map(|m| m.id).collect();
        assert_eq!(ids, ["scrolled-25", "scrolled-50", "scrolled-80"]);
        assert!(book.record(1.0).is_empty());
    }

    #[test]
    fn test_oscillation_unlocks_once() {
        let mut book = BadgeBook::new();
        let mut total = 0;
        for p in [0.24, 0.26, 0.2, 0.25, 0.49, 0.5, 0.3, 0.51] {
            total += book.record(p).len();
        }
        assert_eq!(total, 2);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_persisted_as_json_array() {
        let mut store = MemoryStore::new();
        let mut book = BadgeBook::load(&store);
        book.record(0.6);
        book.save(&mut store);
        assert_eq!(
            store.get(BadgeBook::STORAGE_KEY).as_deref(),
            Some(r#"["scrolled-25","scrolled-50"]"#)
        );

        let mut reloaded = BadgeBook::load(&store);
        assert_eq!(reloaded, book);
        assert!(reloaded.record(0.55).is_empty());
    }

    #[test]
    fn test_foreign_ids_kept() {
        let mut store = MemoryStore::new();
        store.set(BadgeBook::STORAGE_KEY, r#"["visited-contact"]"#);
        let mut book = BadgeBook::load(&store);
        book.record(0.25);
        assert!(book.is_unlocked("visited-contact"));
        assert!(book.is_unlocked("scrolled-25"));
    }

    #[test]
    fn test_corrupt_data_starts_fresh() {
        let mut store = MemoryStore::new();
        store.set(BadgeBook::STORAGE_KEY, "{not json");
        assert!(BadgeBook::load(&store).is_empty());
    }

    proptest! {
        #[test]
        fn prop_each_badge_unlocks_once(fractions in prop::collection::vec(0.0f64..=1.0, 0..100)) {
            let mut book = BadgeBook::new();
            let mut unlocked: Vec<&str> = Vec::new();
            let mut max_seen = 0.0f64;
            for p in fractions {
                max_seen = max_seen.max(p);
                for m in book.record(p) {
                    prop_assert!(!unlocked.contains(&m.id));
                    unlocked.push(m.id);
                }
                let expected = milestones().filter(|m| max_seen >= m.threshold).count();
                prop_assert_eq!(book.len(), expected);
            }
        }
    }
}
