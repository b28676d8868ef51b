//! Point-to-zone classification.
//!
//! Zones are tested in a fixed order: the four edges first, then the four
//! corners. Edge and corner touch frames meet seam-to-seam along the crop
//! boundary (and can collide outright with unusual touch size settings),
//! so the order is a deliberate tie-break - a point claimed by both an
//! edge frame and a corner frame always classifies as the edge. First
//! match wins; exactly one zone (or `None`) comes back.

use crate::config::OverlayConfig;
use crate::zone::{corner_frame, edge_frame, Corner, Edge, Zone};
use crate::{Point, Rect};

/// Classify a point against the nine zone frames of `crop_rect`.
///
/// Returns the single zone whose touch frame contains the point, or
/// [`Zone::None`]. Never returns [`Zone::All`].
pub fn classify(point: Point, crop_rect: Rect, config: &OverlayConfig) -> Zone {
    let corner_size = config.corner_touch_size;
    let thickness = config.edge_touch_thickness;

    let edge = |e| edge_frame(crop_rect, e, corner_size, thickness);
    let corner = |c| corner_frame(crop_rect, c, corner_size);

    if edge(Edge::Top).contains(point) {
        Zone::TopEdge
    } else if edge(Edge::Bottom).contains(point) {
        Zone::BottomEdge
    } else if edge(Edge::Right).contains(point) {
        Zone::RightEdge
    } else if edge(Edge::Left).contains(point) {
        Zone::LeftEdge
    } else if corner(Corner::TopLeft).contains(point) {
        Zone::TopLeftCorner
    } else if corner(Corner::TopRight).contains(point) {
        Zone::TopRightCorner
    } else if corner(Corner::BottomLeft).contains(point) {
        Zone::BottomLeftCorner
    } else if corner(Corner::BottomRight).contains(point) {
        Zone::BottomRightCorner
    } else {
        Zone::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop() -> Rect {
        Rect::new(50.0, 50.0, 200.0, 200.0)
    }

    fn config() -> OverlayConfig {
        OverlayConfig::default()
    }

    #[test]
    fn test_edge_midpoints_classify_as_edges() {
        assert_eq!(classify(Point::new(150.0, 50.0), crop(), &config()), Zone::TopEdge);
        assert_eq!(
            classify(Point::new(150.0, 250.0), crop(), &config()),
            Zone::BottomEdge
        );
        assert_eq!(classify(Point::new(50.0, 150.0), crop(), &config()), Zone::LeftEdge);
        assert_eq!(
            classify(Point::new(250.0, 150.0), crop(), &config()),
            Zone::RightEdge
        );
    }

    #[test]
    fn test_corner_points_classify_as_corners() {
        assert_eq!(
            classify(Point::new(50.0, 50.0), crop(), &config()),
            Zone::TopLeftCorner
        );
        assert_eq!(
            classify(Point::new(250.0, 50.0), crop(), &config()),
            Zone::TopRightCorner
        );
        assert_eq!(
            classify(Point::new(250.0, 250.0), crop(), &config()),
            Zone::BottomRightCorner
        );
        assert_eq!(
            classify(Point::new(50.0, 250.0), crop(), &config()),
            Zone::BottomLeftCorner
        );
    }

    #[test]
    fn test_interior_and_outside_classify_as_none() {
        assert_eq!(classify(Point::new(150.0, 150.0), crop(), &config()), Zone::None);
        assert_eq!(classify(Point::new(0.0, 0.0), crop(), &config()), Zone::None);
        assert_eq!(classify(Point::new(300.0, 300.0), crop(), &config()), Zone::None);
    }

    #[test]
    fn test_edge_wins_at_the_corner_seam() {
        // The top edge frame starts exactly where the top-left corner
        // frame's exclusive max edge ends. A point on that seam must
        // classify as the edge, never the corner.
        let cfg = config();
        let tl = corner_frame(crop(), Corner::TopLeft, cfg.corner_touch_size);
        let seam = Point::new(tl.max_x(), crop().min_y());

        let top = edge_frame(crop(), Edge::Top, cfg.corner_touch_size, cfg.edge_touch_thickness);
        assert!(top.contains(seam));
        assert_eq!(classify(seam, crop(), &cfg), Zone::TopEdge);
    }

    #[test]
    fn test_corner_exclusive_region_classifies_as_corner() {
        // The outer half of a corner frame is unreachable by any edge frame
        let cfg = config();
        let probe = Point::new(crop().min_x() - 10.0, crop().min_y() - 10.0);
        assert_eq!(classify(probe, crop(), &cfg), Zone::TopLeftCorner);
    }

    #[test]
    fn test_never_returns_all() {
        // Sweep a coarse grid over and around the crop rect
        for x in (0..350).step_by(5) {
            for y in (0..350).step_by(5) {
                let zone = classify(Point::new(x as f64, y as f64), crop(), &config());
                assert_ne!(zone, Zone::All);
            }
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-100.0f64..=500.0, -100.0f64..=500.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn crop_strategy() -> impl Strategy<Value = Rect> {
        (0.0f64..=200.0, 0.0f64..=200.0, 10.0f64..=300.0, 10.0f64..=300.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        /// Property: classification is deterministic.
        #[test]
        fn prop_classify_deterministic(p in point_strategy(), crop in crop_strategy()) {
            let config = OverlayConfig::default();
            prop_assert_eq!(classify(p, crop, &config), classify(p, crop, &config));
        }

        /// Property: a point inside any edge frame never classifies as a corner.
        #[test]
        fn prop_edge_precedence_over_corners(p in point_strategy(), crop in crop_strategy()) {
            let config = OverlayConfig::default();
            let in_some_edge = [Edge::Top, Edge::Bottom, Edge::Right, Edge::Left]
                .into_iter()
                .any(|e| {
                    edge_frame(crop, e, config.corner_touch_size, config.edge_touch_thickness)
                        .contains(p)
                });

            if in_some_edge {
                let zone = classify(p, crop, &config);
                prop_assert!(
                    matches!(
                        zone,
                        Zone::TopEdge | Zone::BottomEdge | Zone::RightEdge | Zone::LeftEdge
                    ),
                    "expected an edge zone, got {:?}",
                    zone
                );
            }
        }

        /// Property: a classified zone's touch frame actually contains the point.
        #[test]
        fn prop_classified_zone_contains_point(p in point_strategy(), crop in crop_strategy()) {
            let config = OverlayConfig::default();
            let frame = match classify(p, crop, &config) {
                Zone::None | Zone::All => return Ok(()),
                Zone::TopEdge => edge_frame(crop, Edge::Top, config.corner_touch_size, config.edge_touch_thickness),
                Zone::BottomEdge => edge_frame(crop, Edge::Bottom, config.corner_touch_size, config.edge_touch_thickness),
                Zone::RightEdge => edge_frame(crop, Edge::Right, config.corner_touch_size, config.edge_touch_thickness),
                Zone::LeftEdge => edge_frame(crop, Edge::Left, config.corner_touch_size, config.edge_touch_thickness),
                Zone::TopLeftCorner => corner_frame(crop, Corner::TopLeft, config.corner_touch_size),
                Zone::TopRightCorner => corner_frame(crop, Corner::TopRight, config.corner_touch_size),
                Zone::BottomRightCorner => corner_frame(crop, Corner::BottomRight, config.corner_touch_size),
                Zone::BottomLeftCorner => corner_frame(crop, Corner::BottomLeft, config.corner_touch_size),
            };
            prop_assert!(frame.contains(p));
        }
    }
}
