//! Page scroll progress

use crate::unit_clamp;

/// Fraction of the page scrolled, clamped to [0, 1].
///
/// A page that fits in the viewport has nothing to scroll and reports 0.
pub fn scroll_fraction(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 || !range.is_finite() {
        return 0.0;
    }
    unit_clamp(scroll_top / range)
}

/// CSS transform for the progress bar
pub fn progress_transform(fraction: f64) -> String {
    format!("scaleX({})", unit_clamp(fraction))
}
