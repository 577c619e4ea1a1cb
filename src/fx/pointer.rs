//! Pointer micro-interactions: magnetic buttons and tilting cards

use glam::Vec2;

use crate::Bounds;
use crate::consts::{TILT_LIFT_PX, TILT_PERSPECTIVE_PX};

/// Normalized pointer offset from the element center, in [-1, 1] per axis
/// while the pointer is inside the element.
pub fn normalized_offset(pointer: Vec2, bounds: &Bounds) -> Vec2 {
    let half = bounds.half_extent();
    let d = pointer - bounds.center();
    Vec2::new(
        if half.x > 0.0 { d.x / half.x } else { 0.0 },
        if half.y > 0.0 { d.y / half.y } else { 0.0 },
    )
}

/// Translation (px) for a magnetic element
pub fn magnetic_offset(pointer: Vec2, bounds: &Bounds, strength: f32) -> Vec2 {
    normalized_offset(pointer, bounds) * strength
}

/// CSS transform for a magnetic translation
pub fn magnetic_transform(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// Card rotation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Rotation about the X axis (pointer below center tips the card back)
    pub rx: f32,
    pub ry: f32,
}

impl Tilt {
    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
            TILT_PERSPECTIVE_PX, self.rx, self.ry, TILT_LIFT_PX
        )
    }
}

/// Tilt angles for a pointer over a card
pub fn tilt(pointer: Vec2, bounds: &Bounds, divisor: f32) -> Tilt {
    if divisor == 0.0 {
        return Tilt::default();
    }
    let d = pointer - bounds.center();
    Tilt {
        rx: -d.y / divisor,
        ry: d.x / divisor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAGNET_STRENGTH, TILT_DIVISOR};

    #[test]
    fn test_magnetic_center_is_zero() {
        let b = Bounds::new(100.0, 50.0, 80.0, 40.0);
        assert_eq!(magnetic_offset(b.center(), &b, MAGNET_STRENGTH), Vec2::ZERO);
    }

    #[test]
    fn test_magnetic_edges() {
        let b = Bounds::new(100.0, 50.0, 80.0, 40.0);
        let right_bottom = Vec2::new(180.0, 90.0);
        assert_eq!(normalized_offset(right_bottom, &b), Vec2::new(1.0, 1.0));
        assert_eq!(
            magnetic_offset(right_bottom, &b, MAGNET_STRENGTH),
            Vec2::new(6.0, 6.0)
        );
        let left = Vec2::new(100.0, 70.0);
        assert_eq!(magnetic_offset(left, &b, MAGNET_STRENGTH), Vec2::new(-6.0, 0.0));
        assert_eq!(magnetic_transform(Vec2::new(-6.0, 0.0)), "translate(-6px, 0px)");
    }

    #[test]
    fn test_zero_size_element() {
        let b = Bounds::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(normalized_offset(Vec2::new(50.0, 50.0), &b), Vec2::ZERO);
    }

    #[test]
    fn test_tilt_angles() {
        let b = Bounds::new(0.0, 0.0, 220.0, 110.0);
        // 44px right of center, 22px below
        let t = tilt(Vec2::new(154.0, 77.0), &b, TILT_DIVISOR);
        assert_eq!(t, Tilt { rx: -1.0, ry: 2.0 });
        assert_eq!(
            t.transform(),
            "perspective(900px) rotateX(-1deg) rotateY(2deg) translateZ(6px)"
        );
    }
}
