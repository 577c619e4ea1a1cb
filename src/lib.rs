//! Portfolio FX - interactive effects for a personal portfolio page
//!
//! Core modules:
//! - `fx`: Deterministic effect models (typing, particles, reveal, rail, ...)
//! - `platform`: Browser bindings that wire DOM events to the models
//! - `persistence`: Key-value store abstraction (LocalStorage on web)
//! - `theme` / `badges`: Persisted user preferences and achievements
//! - `config`: Tunable design constants

pub mod badges;
pub mod config;
pub mod fx;
pub mod persistence;
pub mod platform;
pub mod theme;

pub use badges::{BadgeBook, Milestone};
pub use config::FxConfig;
pub use theme::{Theme, ThemeManager};

use glam::Vec2;

/// Design constants (defaults for [`FxConfig`])
pub mod consts {
    /// Glyph appended to the typed text
    pub const CURSOR_GLYPH: char = '▌';
    /// Delay between typed characters (ms)
    pub const TYPE_INTERVAL_MS: u32 = 90;
    /// Delay between deleted characters (ms)
    pub const DELETE_INTERVAL_MS: u32 = 40;
    /// Pause once a phrase is fully typed (ms)
    pub const HOLD_MS: u32 = 900;

    /// Number of background particles
    pub const PARTICLE_COUNT: usize = 70;
    /// Max velocity component magnitude (px per frame)
    pub const PARTICLE_MAX_SPEED: f32 = 0.3;
    pub const PARTICLE_MIN_RADIUS: f32 = 0.6;
    pub const PARTICLE_MAX_RADIUS: f32 = 2.4;
    pub const PARTICLE_FILL: &str = "rgba(255,255,255,0.6)";

    /// Fraction of an element that must be visible before it is revealed
    pub const REVEAL_THRESHOLD: f64 = 0.2;

    /// Magnetic button travel (px at the element edge)
    pub const MAGNET_STRENGTH: f32 = 6.0;
    /// Pointer offset (px) per degree of card tilt
    pub const TILT_DIVISOR: f32 = 22.0;
    pub const TILT_PERSPECTIVE_PX: f32 = 900.0;
    pub const TILT_LIFT_PX: f32 = 6.0;
    pub const TILT_MOVE_TRANSITION: &str = "transform 0.08s linear";
    pub const TILT_RESET_TRANSITION: &str = "transform 260ms ease";

    /// Horizontal rail travel per arrow key press (px)
    pub const RAIL_STEP: f64 = 320.0;

    /// Scroll fractions that unlock a badge
    pub const BADGE_THRESHOLDS: [(f64, &str); 3] = [
        (0.25, "scrolled-25"),
        (0.50, "scrolled-50"),
        (0.80, "scrolled-80"),
    ];
    /// How long the unlock toast stays on screen (ms)
    pub const BADGE_TOAST_MS: u32 = 1600;

    /// Timeline SVG viewBox height
    pub const TIMELINE_TRACK_HEIGHT: f64 = 600.0;
    pub const TIMELINE_MARGIN: f64 = 20.0;

    /// Delay before the contact confirmation appears (ms)
    pub const CONTACT_CONFIRM_DELAY_MS: u32 = 200;
}

/// Axis-aligned element bounds in client (viewport) pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Clamp to [0, 1], mapping NaN to 0
#[inline]
pub fn unit_clamp(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
