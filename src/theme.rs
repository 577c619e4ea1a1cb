//! Light/dark theme preference
//!
//! Persisted as a bare string under `site-theme`.

use serde::{Deserialize, Serialize};

use crate::persistence::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    /// Value for the toggle's `aria-pressed`
    pub fn aria_pressed(self) -> &'static str {
        if self.is_light() { "true" } else { "false" }
    }
}

/// Owns the current theme and keeps the store in step with it
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current: Theme,
}

impl ThemeManager {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "site-theme";

    /// Read the saved theme (dark if missing or unrecognised) and write the
    /// resolved value back.
    pub fn load(store: &mut dyn Store) -> Self {
        let current = match store.get(Self::STORAGE_KEY) {
            Some(saved) => Theme::parse(&saved).unwrap_or_else(|| {
                log::warn!("Unrecognised saved theme '{}', using dark", saved);
                Theme::Dark
            }),
            None => Theme::default(),
        };
        store.set(Self::STORAGE_KEY, current.as_str());
        log::info!("Theme: {}", current.as_str());
        Self { current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it
    pub fn toggle(&mut self, store: &mut dyn Store) -> Theme {
        self.current = self.current.toggled();
        store.set(Self::STORAGE_KEY, self.current.as_str());
        log::info!("Theme toggled to {}", self.current.as_str());
        self.current
    }
}
