//! Horizontal project rail and case-study modal

use crate::consts::RAIL_STEP;

/// Body text shown in the case-study modal
pub const CASE_PLACEHOLDER: &str = "Quick case study: goals, constraints, approach, and outcomes. \
This modal shows the core details in a digestible format. Replace with your project's real content.";

/// Result of a wheel gesture over the rail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelOutcome {
    /// Gesture was converted to horizontal scroll; suppress the native scroll
    pub consumed: bool,
    /// New horizontal offset
    pub offset: f64,
}

/// Tracks the rail's horizontal scroll offset
#[derive(Debug, Clone)]
pub struct RailController {
    offset: f64,
    max_offset: f64,
    step: f64,
}

impl Default for RailController {
    fn default() -> Self {
        Self::new(RAIL_STEP)
    }
}

impl RailController {
    pub fn new(step: f64) -> Self {
        Self {
            offset: 0.0,
            max_offset: f64::INFINITY,
            step,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Adopt the element's actual offset and scroll range (the user can also
    /// drag the scrollbar or swipe).
    pub fn sync(&mut self, offset: f64, max_offset: f64) {
        self.max_offset = max_offset.max(0.0);
        self.offset = offset.clamp(0.0, self.max_offset);
    }

    /// Vertical-dominant wheel gestures scroll the rail sideways
    pub fn wheel(&mut self, delta_x: f64, delta_y: f64) -> WheelOutcome {
        if delta_y.abs() > delta_x.abs() {
            self.scroll_by(delta_y);
            WheelOutcome {
                consumed: true,
                offset: self.offset,
            }
        } else {
            WheelOutcome {
                consumed: false,
                offset: self.offset,
            }
        }
    }

    /// Arrow keys step the rail. Returns the new offset for handled keys.
    pub fn key(&mut self, key: &str) -> Option<f64> {
        match key {
            "ArrowRight" => self.scroll_by(self.step),
            "ArrowLeft" => self.scroll_by(-self.step),
            _ => return None,
        }
        Some(self.offset)
    }

    fn scroll_by(&mut self, delta: f64) {
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset);
    }
}

/// What the modal displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub body: String,
}

/// The single case-study overlay
#[derive(Debug, Clone, Default)]
pub struct CaseModal {
    content: Option<ModalContent>,
}

impl CaseModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    /// Open (or re-populate) with the card's `data-title`, falling back to its
    /// heading text.
    pub fn open(&mut self, data_title: Option<&str>, heading: Option<&str>) -> &ModalContent {
        let title = data_title
            .filter(|t| !t.is_empty())
            .or(heading)
            .unwrap_or_default()
            .to_string();
        self.content.insert(ModalContent {
            title,
            body: CASE_PLACEHOLDER.to_string(),
        })
    }

    /// Returns true if the modal was open
    pub fn close(&mut self) -> bool {
        self.content.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_wheel_scrolls_sideways() {
        let mut rail = RailController::default();
        rail.sync(0.0, 2000.0);
        let out = rail.wheel(5.0, 40.0);
        assert!(out.consumed);
        assert_eq!(out.offset, 40.0);
        assert_eq!(rail.offset(), 40.0);
    }

    #[test]
    fn test_horizontal_wheel_passes_through() {
        let mut rail = RailController::default();
        rail.sync(100.0, 2000.0);
        let out = rail.wheel(30.0, 10.0);
        assert!(!out.consumed);
        assert_eq!(rail.offset(), 100.0);
        // Equal magnitudes are not vertical-dominant
        assert!(!rail.wheel(10.0, -10.0).consumed);
    }

    #[test]
    fn test_arrow_keys_step() {
        let mut rail = RailController::default();
        rail.sync(0.0, 5000.0);
        assert_eq!(rail.key("ArrowRight"), Some(320.0));
        assert_eq!(rail.key("ArrowRight"), Some(640.0));
        assert_eq!(rail.key("ArrowLeft"), Some(320.0));
        assert_eq!(rail.key("Enter"), None);
        assert_eq!(rail.offset(), 320.0);
    }

    #[test]
    fn test_offset_clamped_to_range() {
        let mut rail = RailController::default();
        rail.sync(0.0, 500.0);
        assert_eq!(rail.key("ArrowLeft"), Some(0.0));
        rail.key("ArrowRight");
        assert_eq!(rail.key("ArrowRight"), Some(500.0));
        rail.sync(900.0, 400.0);
        assert_eq!(rail.offset(), 400.0);
    }

    #[test]
    fn test_modal_open_close() {
        let mut modal = CaseModal::new();
        assert!(!modal.is_open());

        let content = modal.open(Some("Realtime Dashboard"), Some("Dashboard"));
        assert_eq!(content.title, "Realtime Dashboard");
        assert_eq!(content.body, CASE_PLACEHOLDER);
        assert!(modal.is_open());

        // Reopening re-populates
        let content = modal.open(None, Some("Compiler"));
        assert_eq!(content.title, "Compiler");

        assert!(modal.close());
        assert!(!modal.is_open());
        assert!(!modal.close());
    }

    #[test]
    fn test_modal_title_fallbacks() {
        let mut modal = CaseModal::new();
        assert_eq!(modal.open(Some(""), Some("Heading")).title, "Heading");
        assert_eq!(modal.open(None, None).title, "");
    }
}
