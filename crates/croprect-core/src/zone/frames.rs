//! Touch frame geometry for the crop rectangle zones.
//!
//! Pure functions from the current crop rectangle and the configured touch
//! target sizes to the nine hit-test frames. Corner frames are squares (or
//! rectangles) centered on the corner points; edge frames are thin strips
//! centered on the crop boundary, spanning between the facing edges of the
//! two adjacent corner frames.
//!
//! # Degenerate frames
//!
//! When the crop rectangle is smaller than two adjacent corner frames, an
//! edge frame's span goes negative. That is deliberate: a negative-size
//! frame contains no point, so the corner frames win the whole boundary.

use crate::config::EdgeThickness;
use crate::zone::{Corner, Edge};
use crate::{Rect, Size};

/// Touch frame for a corner: `corner_touch_size`, centered on the corner
/// point of the crop rectangle.
pub fn corner_frame(crop_rect: Rect, corner: Corner, corner_touch_size: Size) -> Rect {
    let half_w = corner_touch_size.width / 2.0;
    let half_h = corner_touch_size.height / 2.0;

    let (cx, cy) = match corner {
        Corner::TopLeft => (crop_rect.min_x(), crop_rect.min_y()),
        Corner::TopRight => (crop_rect.max_x(), crop_rect.min_y()),
        Corner::BottomRight => (crop_rect.max_x(), crop_rect.max_y()),
        Corner::BottomLeft => (crop_rect.min_x(), crop_rect.max_y()),
    };

    Rect::new(
        cx - half_w,
        cy - half_h,
        corner_touch_size.width,
        corner_touch_size.height,
    )
}

/// Touch frame for an edge: a strip of the configured thickness centered
/// on the crop boundary, running between the facing edges of the adjacent
/// corner frames.
///
/// Top/bottom edges use the `horizontal` thickness, left/right edges the
/// `vertical` one.
pub fn edge_frame(
    crop_rect: Rect,
    edge: Edge,
    corner_touch_size: Size,
    thickness: EdgeThickness,
) -> Rect {
    let half_corner_w = corner_touch_size.width / 2.0;
    let half_corner_h = corner_touch_size.height / 2.0;

    match edge {
        Edge::Top => Rect::new(
            crop_rect.min_x() + half_corner_w,
            crop_rect.min_y() - thickness.horizontal / 2.0,
            crop_rect.width - corner_touch_size.width,
            thickness.horizontal,
        ),
        Edge::Bottom => Rect::new(
            crop_rect.min_x() + half_corner_w,
            crop_rect.max_y() - thickness.horizontal / 2.0,
            crop_rect.width - corner_touch_size.width,
            thickness.horizontal,
        ),
        Edge::Right => Rect::new(
            crop_rect.max_x() - thickness.vertical / 2.0,
            crop_rect.min_y() + half_corner_h,
            thickness.vertical,
            crop_rect.height - corner_touch_size.height,
        ),
        Edge::Left => Rect::new(
            crop_rect.min_x() - thickness.vertical / 2.0,
            crop_rect.min_y() + half_corner_h,
            thickness.vertical,
            crop_rect.height - corner_touch_size.height,
        ),
    }
}
