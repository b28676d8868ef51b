//! Overlay layout computation.
//!
//! Turns the current crop rectangle, active zone and configuration into
//! the frames the host draws: four dimming mask regions tiling the overlay
//! bounds around the crop rectangle, edge and corner decorations (with the
//! highlighted metrics when their zone is active), and the grid lines.
//! Pure data out - computing the same layout twice yields identical
//! frames.

use crate::config::OverlayConfig;
use crate::zone::{corner_frame, edge_frame, Corner, Edge, Zone};
use crate::Rect;
use serde::{Deserialize, Serialize};

/// The four dimming regions around the crop rectangle.
///
/// Together with the crop rectangle they tile the overlay bounds exactly:
/// top and bottom span the full width, left and right fill the remaining
/// side bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskFrames {
    pub top: Rect,
    pub bottom: Rect,
    pub left: Rect,
    pub right: Rect,
}

/// One edge decoration: the touch frame plus the line the host draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeDecoration {
    pub edge: Edge,
    pub touch_frame: Rect,
    /// Line rectangle in overlay coordinates, extended past the corner
    /// midpoints so it meets the corner decorations.
    pub line: Rect,
    pub line_width: f64,
    pub highlighted: bool,
}

/// One corner decoration: the touch frame plus the L-bracket frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerDecoration {
    pub corner: Corner,
    pub touch_frame: Rect,
    /// Bracket frame centered in the touch frame; normal or highlighted
    /// size depending on the active zone.
    pub frame: Rect,
    pub line_width: f64,
    pub highlighted: bool,
}

/// Complete overlay layout for one rectangle/zone/config triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayLayout {
    pub mask: MaskFrames,
    /// Empty when edge decorations are hidden by configuration.
    pub edges: Vec<EdgeDecoration>,
    /// Empty when corner decorations are hidden by configuration.
    pub corners: Vec<CornerDecoration>,
    /// Horizontal grid lines, top to bottom. Empty when the grid is hidden.
    pub grid_horizontal: Vec<Rect>,
    /// Vertical grid lines, left to right. Empty when the grid is hidden.
    pub grid_vertical: Vec<Rect>,
}

/// Compute the full overlay layout.
///
/// `overlay_bounds` is the rectangle the overlay covers (the host view's
/// bounds); `active_zone` selects which decoration gets the highlighted
/// metrics.
pub fn compute_layout(
    crop_rect: Rect,
    overlay_bounds: Rect,
    active_zone: Zone,
    config: &OverlayConfig,
) -> OverlayLayout {
    OverlayLayout {
        mask: mask_frames(crop_rect, overlay_bounds),
        edges: edge_decorations(crop_rect, active_zone, config),
        corners: corner_decorations(crop_rect, active_zone, config),
        grid_horizontal: grid_lines_horizontal(crop_rect, config),
        grid_vertical: grid_lines_vertical(crop_rect, config),
    }
}

/// The four mask regions tiling `overlay_bounds` minus `crop_rect`.
pub fn mask_frames(crop_rect: Rect, overlay_bounds: Rect) -> MaskFrames {
    MaskFrames {
        top: Rect::new(
            overlay_bounds.min_x(),
            overlay_bounds.min_y(),
            overlay_bounds.width,
            crop_rect.min_y() - overlay_bounds.min_y(),
        ),
        bottom: Rect::new(
            overlay_bounds.min_x(),
            crop_rect.max_y(),
            overlay_bounds.width,
            overlay_bounds.max_y() - crop_rect.max_y(),
        ),
        left: Rect::new(
            overlay_bounds.min_x(),
            crop_rect.min_y(),
            crop_rect.min_x() - overlay_bounds.min_x(),
            crop_rect.height,
        ),
        right: Rect::new(
            crop_rect.max_x(),
            crop_rect.min_y(),
            overlay_bounds.max_x() - crop_rect.max_x(),
            crop_rect.height,
        ),
    }
}

fn edge_decorations(crop_rect: Rect, active_zone: Zone, config: &OverlayConfig) -> Vec<EdgeDecoration> {
    if config.edge.hidden {
        return Vec::new();
    }

    [
        (Edge::Top, Zone::TopEdge),
        (Edge::Right, Zone::RightEdge),
        (Edge::Bottom, Zone::BottomEdge),
        (Edge::Left, Zone::LeftEdge),
    ]
    .into_iter()
    .map(|(edge, zone)| {
        let highlighted = active_zone == zone;
        let width = if highlighted {
            config.edge.highlighted_line_width
        } else {
            config.edge.normal_line_width
        };
        let touch_frame = edge_frame(
            crop_rect,
            edge,
            config.corner_touch_size,
            config.edge_touch_thickness,
        );

        // Lines overshoot the touch frame by half a corner frame plus the
        // normal line width on both ends, so they meet the corner brackets.
        let overshoot_x = config.corner_touch_size.width / 2.0 + config.edge.normal_line_width;
        let overshoot_y = config.corner_touch_size.height / 2.0 + config.edge.normal_line_width;
        let line = match edge {
            Edge::Top => Rect::new(
                touch_frame.min_x() - overshoot_x,
                touch_frame.mid_y() - width,
                touch_frame.width + 2.0 * overshoot_x,
                width,
            ),
            Edge::Bottom => Rect::new(
                touch_frame.min_x() - overshoot_x,
                touch_frame.mid_y(),
                touch_frame.width + 2.0 * overshoot_x,
                width,
            ),
            Edge::Right => Rect::new(
                touch_frame.mid_x(),
                touch_frame.min_y() - overshoot_y,
                width,
                touch_frame.height + 2.0 * overshoot_y,
            ),
            Edge::Left => Rect::new(
                touch_frame.mid_x() - width,
                touch_frame.min_y() - overshoot_y,
                width,
                touch_frame.height + 2.0 * overshoot_y,
            ),
        };

        EdgeDecoration {
            edge,
            touch_frame,
            line,
            line_width: width,
            highlighted,
        }
    })
    .collect()
}

fn corner_decorations(
    crop_rect: Rect,
    active_zone: Zone,
    config: &OverlayConfig,
) -> Vec<CornerDecoration> {
    if config.corner.hidden {
        return Vec::new();
    }

    [
        (Corner::TopLeft, Zone::TopLeftCorner),
        (Corner::TopRight, Zone::TopRightCorner),
        (Corner::BottomRight, Zone::BottomRightCorner),
        (Corner::BottomLeft, Zone::BottomLeftCorner),
    ]
    .into_iter()
    .map(|(corner, zone)| {
        let highlighted = active_zone == zone;
        let (size, line_width) = if highlighted {
            (
                config.corner.highlighted_size,
                config.corner.highlighted_line_width,
            )
        } else {
            (config.corner.normal_size, config.corner.normal_line_width)
        };
        let touch_frame = corner_frame(crop_rect, corner, config.corner_touch_size);
        let frame = Rect::new(
            touch_frame.mid_x() - size.width / 2.0,
            touch_frame.mid_y() - size.height / 2.0,
            size.width,
            size.height,
        );

        CornerDecoration {
            corner,
            touch_frame,
            frame,
            line_width,
            highlighted,
        }
    })
    .collect()
}

fn grid_lines_horizontal(crop_rect: Rect, config: &OverlayConfig) -> Vec<Rect> {
    if config.grid.hidden {
        return Vec::new();
    }
    let n = config.grid.horizontal_lines;
    (1..=n)
        .map(|i| {
            Rect::new(
                crop_rect.min_x(),
                crop_rect.min_y() + crop_rect.height * f64::from(i) / f64::from(n + 1),
                crop_rect.width,
                config.grid.line_width,
            )
        })
        .collect()
}

fn grid_lines_vertical(crop_rect: Rect, config: &OverlayConfig) -> Vec<Rect> {
    if config.grid.hidden {
        return Vec::new();
    }
    let n = config.grid.vertical_lines;
    (1..=n)
        .map(|i| {
            Rect::new(
                crop_rect.min_x() + crop_rect.width * f64::from(i) / f64::from(n + 1),
                crop_rect.min_y(),
                config.grid.line_width,
                crop_rect.height,
            )
        })
        .collect()
}

/// Target alpha for the dimming mask's blur layer.
///
/// Idempotent presentation state - the host animates to this value over
/// [`OverlayConfig::animation_duration`].
pub fn blur_target_alpha(visible: bool, config: &OverlayConfig) -> f64 {
    if visible {
        config.mask.blur_alpha
    } else {
        0.0
    }
}

/// Target alpha for the grid, or `None` when the transition should be
/// skipped (overlay hidden with auto-hide enabled, matching the fade
/// short-circuit the host expects).
pub fn grid_target_alpha(visible: bool, overlay_hidden: bool, config: &OverlayConfig) -> Option<f64> {
    if overlay_hidden && config.grid.auto_hide {
        return None;
    }
    Some(if visible { 1.0 } else { 0.0 })
}
