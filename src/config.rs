//! Effect tuning
//!
//! Every knob defaults to the constants in [`crate::consts`]. On the web, a
//! page may override any subset by embedding
//! `<script type="application/json" id="fx-config">{...}</script>`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::fx::particles::Spawn;
use crate::fx::typer::Timing;

/// Phrases cycled in the hero headline
pub const DEFAULT_PHRASES: [&str; 4] = [
    "FullStack Developer",
    "Learner",
    "Problem Solver",
    "Performance-minded",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FxConfig {
    // === Hero ===
    pub phrases: Vec<String>,
    pub type_interval_ms: u32,
    pub delete_interval_ms: u32,
    pub hold_ms: u32,

    // === Particles ===
    pub particle_count: usize,
    pub particle_max_speed: f32,
    pub particle_min_radius: f32,
    pub particle_max_radius: f32,
    pub particle_fill: String,

    // === Scroll ===
    /// Visible fraction that triggers a reveal (0.0 - 1.0)
    pub reveal_threshold: f64,
    pub badge_toast_ms: u32,
    pub timeline_track_height: f64,
    pub timeline_margin: f64,

    // === Pointer ===
    pub magnet_strength: f32,
    pub tilt_divisor: f32,
    pub rail_step: f64,

    // === Contact ===
    pub contact_confirm_delay_ms: u32,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
            type_interval_ms: TYPE_INTERVAL_MS,
            delete_interval_ms: DELETE_INTERVAL_MS,
            hold_ms: HOLD_MS,

            particle_count: PARTICLE_COUNT,
            particle_max_speed: PARTICLE_MAX_SPEED,
            particle_min_radius: PARTICLE_MIN_RADIUS,
            particle_max_radius: PARTICLE_MAX_RADIUS,
            particle_fill: PARTICLE_FILL.to_string(),

            reveal_threshold: REVEAL_THRESHOLD,
            badge_toast_ms: BADGE_TOAST_MS,
            timeline_track_height: TIMELINE_TRACK_HEIGHT,
            timeline_margin: TIMELINE_MARGIN,

            magnet_strength: MAGNET_STRENGTH,
            tilt_divisor: TILT_DIVISOR,
            rail_step: RAIL_STEP,

            contact_confirm_delay_ms: CONTACT_CONFIRM_DELAY_MS,
        }
    }
}

impl FxConfig {
    /// Element id of the optional inline JSON override
    pub const ELEMENT_ID: &'static str = "fx-config";

    /// Parse an override document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    pub fn typer_timing(&self) -> Timing {
        Timing {
            type_ms: self.type_interval_ms,
            delete_ms: self.delete_interval_ms,
            hold_ms: self.hold_ms,
        }
    }

    pub fn particle_spawn(&self) -> Spawn {
        Spawn {
            count: self.particle_count,
            max_speed: self.particle_max_speed,
            min_radius: self.particle_min_radius,
            max_radius: self.particle_max_radius,
        }
    }

    /// Pull out-of-range values back to something usable
    fn sanitized(mut self) -> Self {
        if !(self.reveal_threshold >= 0.0 && self.reveal_threshold <= 1.0) {
            log::warn!(
                "reveal_threshold {} out of range, using {}",
                self.reveal_threshold,
                REVEAL_THRESHOLD
            );
            self.reveal_threshold = REVEAL_THRESHOLD;
        }
        if self.tilt_divisor == 0.0 || !self.tilt_divisor.is_finite() {
            self.tilt_divisor = TILT_DIVISOR;
        }
        if self.particle_max_radius < self.particle_min_radius {
            std::mem::swap(&mut self.particle_min_radius, &mut self.particle_max_radius);
        }
        self
    }

    /// Load config from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded effect config from #{}", Self::ELEMENT_ID);
                    return config;
                }
                Err(e) => log::warn!("Invalid #{} JSON: {}", Self::ELEMENT_ID, e),
            }
        }

        log::info!("Using default effect config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
