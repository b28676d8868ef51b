//! Croprect Core - Crop rectangle overlay interaction library
//!
//! This crate provides the interaction core for a crop-rectangle overlay:
//! zone hit-testing geometry, the drag gesture state machine, and the
//! layout computation for the dimming mask, edge/corner decorations and
//! the grid. It knows nothing about rendering or the underlying image
//! surface - the host drives it with touch events and draws whatever the
//! layout describes.

pub mod config;
pub mod gesture;
pub mod layout;
pub mod zone;

pub use config::{ConfigError, EdgeThickness, OverlayConfig};
pub use gesture::{CropInteraction, GestureEvent};
pub use layout::{compute_layout, OverlayLayout};
pub use zone::{classify, corner_frame, edge_frame, Corner, Edge, Zone};

/// A point in host-view coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in host-view coordinates.
///
/// Rectangles produced by the gesture machinery always have non-negative
/// dimensions. Intermediate hit-test frames may go negative for very small
/// crop rectangles; such frames contain no point (see [`Rect::contains`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Point containment test, half-open on the max edges.
    ///
    /// A rectangle with negative width or height never contains any point.
    /// This matters for edge touch frames, whose span goes negative once
    /// the crop rectangle is smaller than two adjacent corner frames.
    pub fn contains(&self, p: Point) -> bool {
        if self.width < 0.0 || self.height < 0.0 {
            return false;
        }
        p.x >= self.x && p.x < self.max_x() && p.y >= self.y && p.y < self.max_y()
    }

    /// Return a copy with negative dimensions clamped to zero.
    ///
    /// The gesture machine runs this before publishing a rectangle, so the
    /// layout side never sees a negative size.
    pub fn with_non_negative_size(self) -> Self {
        Self {
            x: self.x,
            y: self.y,
            width: self.width.max(0.0),
            height: self.height.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_x(), 40.0);
        assert_eq!(r.max_y(), 60.0);
        assert_eq!(r.mid_x(), 25.0);
        assert_eq!(r.mid_y(), 40.0);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(5.0, 5.0)));
        // Half-open: the max edges are outside
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 10.0)));
        assert!(!r.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn test_negative_rect_contains_nothing() {
        let r = Rect::new(50.0, 50.0, -20.0, 10.0);
        assert!(!r.contains(Point::new(50.0, 55.0)));
        assert!(!r.contains(Point::new(40.0, 55.0)));

        let r = Rect::new(50.0, 50.0, 10.0, -1.0);
        assert!(!r.contains(Point::new(55.0, 50.0)));
    }

    #[test]
    fn test_with_non_negative_size() {
        let r = Rect::new(1.0, 2.0, -3.0, -4.0).with_non_negative_size();
        assert_eq!(r, Rect::new(1.0, 2.0, 0.0, 0.0));

        let r = Rect::new(1.0, 2.0, 3.0, 4.0).with_non_negative_size();
        assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 4.0));
    }
}
