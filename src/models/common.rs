use serde::{Deserialize, Serialize};

/// Width of the canonical slide frame in pixels. Every slide container is
/// forced to this size before any geometry is read.
pub const CANONICAL_WIDTH: u32 = 1280;

/// Height of the canonical slide frame in pixels.
pub const CANONICAL_HEIGHT: u32 = 720;

/// Pixel-accurate placement of an element relative to its slide container's
/// top-left corner, after the container has been normalized to the canonical
/// 1280x720 frame.
///
/// Values are rounded to the nearest integer. In-bounds elements are always
/// non-negative; a partially clipped element may report a right/bottom edge
/// beyond 1280/720 and is NOT clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset from the container's left edge, in pixels.
    pub left: i32,
    /// Vertical offset from the container's top edge, in pixels.
    pub top: i32,
    /// Element width in pixels.
    pub width: i32,
    /// Element height in pixels.
    pub height: i32,
}

impl Position {
    /// Builds a `Position` from unrounded rectangle coordinates as measured
    /// in the live page, rounding each component to the nearest integer.
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Position {
            left: left.round() as i32,
            top: top.round() as i32,
            width: width.round() as i32,
            height: height.round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_integer() {
        let pos = Position::from_rect(10.4, 20.6, 99.5, 100.49);
        assert_eq!(
            pos,
            Position {
                left: 10,
                top: 21,
                width: 100,
                height: 100
            }
        );
    }

    #[test]
    fn negative_offsets_survive_rounding() {
        // Elements dragged partially out of frame keep their negative offset.
        let pos = Position::from_rect(-12.5, -0.4, 300.0, 40.0);
        assert_eq!(pos.left, -13);
        assert_eq!(pos.top, 0);
    }
}
