//! Crop overlay bindings.
//!
//! A stateful [`CropOverlay`] wraps the core interaction machine for the
//! JavaScript host. Pointer handlers feed it coordinates; it returns
//! gesture events (`{ kind, rect }` objects, or `undefined` when nothing
//! happened) and full layout descriptions the host applies to its DOM
//! elements.

use crate::types::{zone_name, JsRect};
use croprect_core::layout::{blur_target_alpha, grid_target_alpha};
use croprect_core::{compute_layout, CropInteraction, GestureEvent, OverlayConfig, Point, Rect};
use wasm_bindgen::prelude::*;

fn js_err<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn event_to_js(event: Option<GestureEvent>) -> Result<JsValue, JsValue> {
    match event {
        Some(event) => serde_wasm_bindgen::to_value(&event).map_err(js_err),
        None => Ok(JsValue::UNDEFINED),
    }
}

/// The crop-rectangle overlay, driven by host pointer events.
#[wasm_bindgen]
pub struct CropOverlay {
    interaction: CropInteraction,
    visible: bool,
}

#[wasm_bindgen]
impl CropOverlay {
    /// Create an overlay from a configuration object and an initial crop
    /// rectangle.
    ///
    /// `config` may be `undefined`/`null` or a partial object; missing
    /// fields fall back to the defaults. Fails on malformed objects or a
    /// configuration with non-positive touch targets.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, crop_rect: JsValue) -> Result<CropOverlay, JsValue> {
        let config: OverlayConfig = if config.is_undefined() || config.is_null() {
            OverlayConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(js_err)?
        };
        config.validate().map_err(js_err)?;

        let crop_rect: Rect = serde_wasm_bindgen::from_value(crop_rect).map_err(js_err)?;

        Ok(CropOverlay {
            interaction: CropInteraction::new(config, crop_rect),
            visible: true,
        })
    }

    /// Pointer-down. Returns a `touch_began` event, or `undefined` when a
    /// drag is already active (secondary touches are ignored).
    pub fn touch_began(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        event_to_js(self.interaction.touch_began(Point::new(x, y)))
    }

    /// Pointer-move with the current containment bounds from the scroll
    /// surface. Returns a `rect_changed` event, or `undefined` when the
    /// move changed nothing.
    pub fn touch_moved(&mut self, x: f64, y: f64, bounds: JsValue) -> Result<JsValue, JsValue> {
        let bounds: Rect = serde_wasm_bindgen::from_value(bounds).map_err(js_err)?;
        event_to_js(self.interaction.touch_moved(Point::new(x, y), bounds))
    }

    /// Pointer-up. Returns a `touch_ended` event, or `undefined` when no
    /// drag was active.
    pub fn touch_ended(&mut self) -> Result<JsValue, JsValue> {
        event_to_js(self.interaction.touch_ended())
    }

    /// Pointer-cancel; behaves exactly like `touch_ended`.
    pub fn touch_cancelled(&mut self) -> Result<JsValue, JsValue> {
        event_to_js(self.interaction.touch_cancelled())
    }

    /// The current crop rectangle.
    pub fn crop_rect(&self) -> JsRect {
        JsRect::from(self.interaction.crop_rect())
    }

    /// Replace the crop rectangle (ignored while a drag is active).
    pub fn set_crop_rect(&mut self, rect: JsValue) -> Result<(), JsValue> {
        let rect: Rect = serde_wasm_bindgen::from_value(rect).map_err(js_err)?;
        self.interaction.set_crop_rect(rect);
        Ok(())
    }

    /// Name of the currently active zone (`"none"` outside a drag).
    pub fn active_zone(&self) -> String {
        zone_name(self.interaction.active_zone()).to_string()
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    #[wasm_bindgen(getter)]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the overlay. A hidden overlay captures no input.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Input routing predicate: true when the overlay should take this
    /// pointer event instead of the underlying image surface.
    pub fn should_capture(&self, x: f64, y: f64) -> bool {
        self.interaction.should_capture(Point::new(x, y), self.visible)
    }

    /// Compute the full overlay layout for the given overlay bounds.
    ///
    /// Returns `{ mask, edges, corners, grid_horizontal, grid_vertical }`
    /// with every frame in overlay coordinates.
    pub fn layout(&self, overlay_bounds: JsValue) -> Result<JsValue, JsValue> {
        let overlay_bounds: Rect = serde_wasm_bindgen::from_value(overlay_bounds).map_err(js_err)?;
        let layout = compute_layout(
            self.interaction.crop_rect(),
            overlay_bounds,
            self.interaction.active_zone(),
            self.interaction.config(),
        );
        serde_wasm_bindgen::to_value(&layout).map_err(js_err)
    }

    /// Target alpha for the dimming mask blur at the given visibility.
    pub fn blur_alpha(&self, visible: bool) -> f64 {
        blur_target_alpha(visible, self.interaction.config())
    }

    /// Target alpha for the grid, or `undefined` when the fade should be
    /// skipped (overlay hidden with grid auto-hide on).
    pub fn grid_alpha(&self, visible: bool) -> Option<f64> {
        grid_target_alpha(visible, !self.visible, self.interaction.config())
    }

    /// Fade duration in seconds for visibility transitions.
    pub fn animation_duration(&self) -> f64 {
        self.interaction.config().animation_duration
    }
}
