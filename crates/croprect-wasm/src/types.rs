//! WASM-compatible wrapper types for overlay geometry.
//!
//! Small plain-data wrappers over the core geometry types, plus the
//! conversion helpers used by the overlay bindings. Structured values
//! (configs, bounds, layouts, events) cross the boundary as JSON objects
//! via `serde_wasm_bindgen`; `JsRect` exists for the hot getter path where
//! a typed object with field getters is nicer to consume than a JsValue.

use croprect_core::{Rect, Zone};
use wasm_bindgen::prelude::*;

/// A rectangle wrapper for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsRect {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> JsRect {
        JsRect {
            x,
            y,
            width,
            height,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl From<Rect> for JsRect {
    fn from(r: Rect) -> Self {
        JsRect {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

impl From<JsRect> for Rect {
    fn from(r: JsRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

/// Stable string name for a zone, for host-side highlight styling.
pub(crate) fn zone_name(zone: Zone) -> &'static str {
    match zone {
        Zone::None => "none",
        Zone::All => "all",
        Zone::TopEdge => "top_edge",
        Zone::LeftEdge => "left_edge",
        Zone::BottomEdge => "bottom_edge",
        Zone::RightEdge => "right_edge",
        Zone::TopLeftCorner => "top_left_corner",
        Zone::TopRightCorner => "top_right_corner",
        Zone::BottomRightCorner => "bottom_right_corner",
        Zone::BottomLeftCorner => "bottom_left_corner",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_rect_round_trip() {
        let core = Rect::new(10.0, 20.0, 30.0, 40.0);
        let js = JsRect::from(core);
        assert_eq!(js.x(), 10.0);
        assert_eq!(js.y(), 20.0);
        assert_eq!(js.width(), 30.0);
        assert_eq!(js.height(), 40.0);
        assert_eq!(Rect::from(js), core);
    }

    #[test]
    fn test_zone_names_are_unique() {
        let zones = [
            Zone::None,
            Zone::All,
            Zone::TopEdge,
            Zone::LeftEdge,
            Zone::BottomEdge,
            Zone::RightEdge,
            Zone::TopLeftCorner,
            Zone::TopRightCorner,
            Zone::BottomRightCorner,
            Zone::BottomLeftCorner,
        ];
        let names: Vec<_> = zones.iter().map(|&z| zone_name(z)).collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }
}
