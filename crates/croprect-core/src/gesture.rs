//! Drag gesture state machine for the crop rectangle.
//!
//! The machine is driven by three synchronous calls - [`touch_began`],
//! [`touch_moved`], [`touch_ended`] - and owns the crop rectangle for the
//! duration of a drag. Each move applies per-edge update rules with
//! "stick point" clamping: the clamp thresholds are computed from the
//! rectangle and touch point captured at touch-down, so repeated clamping
//! over a long drag cannot accumulate drift.
//!
//! # Gesture policy
//!
//! Touch delivery comes from an input system the core cannot fully trust:
//!
//! - a second touch-down while a drag is active is ignored (the first
//!   gesture keeps its snapshot),
//! - a move or end without a preceding touch-down is a no-op,
//! - touch-cancel behaves exactly like touch-up, so the host always gets
//!   a closing event with the last valid rectangle.
//!
//! [`touch_began`]: CropInteraction::touch_began
//! [`touch_moved`]: CropInteraction::touch_moved
//! [`touch_ended`]: CropInteraction::touch_ended

use crate::config::OverlayConfig;
use crate::zone::{classify, Edge, Zone};
use crate::{Point, Rect};

/// Notification produced by one gesture call.
///
/// Maps one-to-one onto the host callbacks: touch started (even on a miss,
/// so the host can treat it as a tap-outside signal), rectangle changed,
/// touch ended.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "rect", rename_all = "snake_case")]
pub enum GestureEvent {
    TouchBegan(Rect),
    RectChanged(Rect),
    TouchEnded(Rect),
}

impl GestureEvent {
    /// The rectangle carried by the event.
    pub fn rect(&self) -> Rect {
        match *self {
            GestureEvent::TouchBegan(r)
            | GestureEvent::RectChanged(r)
            | GestureEvent::TouchEnded(r) => r,
        }
    }
}

/// State captured at touch-down, immutable for the whole drag.
#[derive(Debug, Clone, Copy)]
struct GestureSnapshot {
    rect_at_touch_start: Rect,
    touch_start: Point,
}

/// Live per-drag state: the snapshot plus the last seen touch point, which
/// turns absolute move coordinates into per-move deltas.
#[derive(Debug, Clone, Copy)]
struct DragState {
    snapshot: GestureSnapshot,
    last_point: Point,
}

/// The crop rectangle interaction state machine.
///
/// Owns the crop rectangle while a drag is in progress and publishes it
/// through [`GestureEvent`]s. Containment bounds are passed into every
/// move call because the host's scroll surface may change them between
/// events.
#[derive(Debug, Clone)]
pub struct CropInteraction {
    config: OverlayConfig,
    crop_rect: Rect,
    active_zone: Zone,
    drag: Option<DragState>,
}

impl CropInteraction {
    pub fn new(config: OverlayConfig, crop_rect: Rect) -> Self {
        Self {
            config,
            crop_rect: crop_rect.with_non_negative_size(),
            active_zone: Zone::None,
            drag: None,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn crop_rect(&self) -> Rect {
        self.crop_rect
    }

    /// Replace the crop rectangle outside of a drag.
    ///
    /// Ignored while a gesture is active; the machine owns the rectangle
    /// exclusively until touch-up.
    pub fn set_crop_rect(&mut self, rect: Rect) {
        if self.drag.is_none() {
            self.crop_rect = rect.with_non_negative_size();
        }
    }

    pub fn active_zone(&self) -> Zone {
        self.active_zone
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Input routing predicate for the host.
    ///
    /// True only when the overlay is visible and the point falls inside
    /// one of the nine zone frames; everything else (interior, outside)
    /// passes through to the image surface for pan/zoom.
    pub fn should_capture(&self, point: Point, overlay_visible: bool) -> bool {
        overlay_visible && classify(point, self.crop_rect, &self.config) != Zone::None
    }

    /// Touch-down: classify the point, capture the gesture snapshot, and
    /// report the current rectangle.
    ///
    /// Always emits - a miss (`Zone::None`) is still a recorded touch, so
    /// the host can react to taps outside the handles. A touch-down while
    /// already dragging is ignored and emits nothing.
    pub fn touch_began(&mut self, point: Point) -> Option<GestureEvent> {
        if self.drag.is_some() {
            return None;
        }

        self.active_zone = classify(point, self.crop_rect, &self.config);
        self.drag = Some(DragState {
            snapshot: GestureSnapshot {
                rect_at_touch_start: self.crop_rect,
                touch_start: point,
            },
            last_point: point,
        });

        Some(GestureEvent::TouchBegan(self.crop_rect))
    }

    /// Touch-move: apply the active zone's edge rules and report the
    /// updated rectangle.
    ///
    /// `bounds` is the current containment rectangle from the host's
    /// scroll surface, re-queried per move. Returns `None` when no drag is
    /// in progress or the active zone moves nothing.
    pub fn touch_moved(&mut self, point: Point, bounds: Rect) -> Option<GestureEvent> {
        let drag = self.drag.as_mut()?;

        let edges = self.active_zone.edges();
        if edges.is_empty() {
            drag.last_point = point;
            return None;
        }

        let translation = Point::new(point.x - drag.last_point.x, point.y - drag.last_point.y);
        let snapshot = drag.snapshot;
        drag.last_point = point;

        let mut rect = self.crop_rect;
        for &edge in edges {
            apply_edge_rule(
                &mut rect,
                edge,
                translation,
                point,
                &snapshot,
                bounds,
                &self.config,
            );
        }

        self.crop_rect = rect.with_non_negative_size();
        Some(GestureEvent::RectChanged(self.crop_rect))
    }

    /// Touch-up: reset to idle and report the final rectangle.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn touch_ended(&mut self) -> Option<GestureEvent> {
        self.drag.take()?;
        self.active_zone = Zone::None;
        Some(GestureEvent::TouchEnded(self.crop_rect))
    }

    /// Touch-cancel: identical to touch-up, so the host state stays
    /// consistent even when the input system aborts a gesture.
    pub fn touch_cancelled(&mut self) -> Option<GestureEvent> {
        self.touch_ended()
    }
}

/// Apply one edge's 1-D update rule to `rect`.
///
/// The translation moves the edge; the clamps then pin it against the
/// minimum crop size (shrink direction) and the containment bounds (grow
/// direction). Both thresholds are "stick points" in absolute touch
/// coordinates, derived from where inside the touch frame the gesture
/// started - `point_in_edge` keeps the finger-to-edge offset constant so
/// the edge sticks under the finger rather than jumping on the first
/// clamped move.
fn apply_edge_rule(
    rect: &mut Rect,
    edge: Edge,
    translation: Point,
    point: Point,
    snapshot: &GestureSnapshot,
    bounds: Rect,
    config: &OverlayConfig,
) {
    let start = snapshot.rect_at_touch_start;
    let touch_start = snapshot.touch_start;
    let min_size = config.min_crop_rect_size;

    match edge {
        Edge::Top => {
            rect.y += translation.y;
            rect.height -= translation.y;

            let point_in_edge = touch_start.y - start.min_y();
            let min_stick = point_in_edge + bounds.min_y();
            let max_stick = point_in_edge + start.max_y() - min_size.height;

            if point.y > max_stick || rect.height < min_size.height {
                rect.y = start.max_y() - min_size.height;
                rect.height = min_size.height;
            }
            // The position check backs up the stick point: after an
            // overshoot past the opposite stick the edge trails the finger,
            // and the threshold alone would let it slip past the bound.
            if point.y < min_stick || rect.y < bounds.min_y() {
                rect.y = bounds.min_y();
                rect.height = start.max_y() - bounds.min_y();
            }
        }
        Edge::Right => {
            rect.width += translation.x;

            let point_in_edge = touch_start.x - start.max_x();
            let min_stick = point_in_edge + start.min_x() + min_size.width;
            let max_stick = point_in_edge + bounds.max_x();

            if point.x > max_stick || rect.max_x() > bounds.max_x() {
                rect.width = bounds.max_x() - rect.x;
            }
            if point.x < min_stick || rect.width < min_size.width {
                rect.width = min_size.width;
            }
        }
        Edge::Bottom => {
            rect.height += translation.y;

            let point_in_edge = touch_start.y - start.max_y();
            let min_stick = point_in_edge + start.min_y() + min_size.height;
            let max_stick = point_in_edge + bounds.max_y();

            if point.y > max_stick || rect.max_y() > bounds.max_y() {
                rect.height = bounds.max_y() - rect.y;
            }
            if point.y < min_stick || rect.height < min_size.height {
                rect.height = min_size.height;
            }
        }
        Edge::Left => {
            rect.x += translation.x;
            rect.width -= translation.x;

            let point_in_edge = touch_start.x - start.min_x();
            let min_stick = point_in_edge + bounds.min_x();
            let max_stick = point_in_edge + start.max_x() - min_size.width;

            if point.x > max_stick || rect.width < min_size.width {
                rect.x = start.max_x() - min_size.width;
                rect.width = min_size.width;
            }
            if point.x < min_stick || rect.x < bounds.min_x() {
                rect.x = bounds.min_x();
                rect.width = start.max_x() - bounds.min_x();
            }
        }
    }
}
