//! Scroll-linked timeline marker

use crate::unit_clamp;

/// How far the viewport has travelled through a section.
///
/// 0 while the section's top is still below the viewport, 1 once the section
/// has scrolled fully past, linear in between.
pub fn section_progress(viewport_height: f64, section_top: f64, section_height: f64) -> f64 {
    let span = section_height + viewport_height;
    if span <= 0.0 {
        return 0.0;
    }
    unit_clamp((viewport_height - section_top) / span)
}

/// Marker offset (px) along a track of `track_height`, leaving `margin` at the end
pub fn marker_offset(progress: f64, track_height: f64, margin: f64) -> f64 {
    unit_clamp(progress) * (track_height - margin).max(0.0)
}
