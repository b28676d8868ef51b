//! Croprect WASM - WebAssembly bindings for the crop overlay core
//!
//! This crate exposes the croprect-core interaction machinery to a
//! JavaScript/TypeScript host. The host owns the actual DOM surfaces (the
//! zoomable image, the mask elements, the decoration canvases) and drives
//! a [`CropOverlay`] with pointer events; the overlay answers with gesture
//! events and layout frames to apply.
//!
//! # Usage
//!
//! ```typescript
//! import init, { CropOverlay } from '@croprect/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const overlay = new CropOverlay(
//!   { min_crop_rect_size: { width: 60, height: 60 } },
//!   { x: 50, y: 50, width: 200, height: 200 },
//! );
//!
//! canvas.onpointerdown = (e) => {
//!   if (overlay.should_capture(e.offsetX, e.offsetY)) {
//!     overlay.touch_began(e.offsetX, e.offsetY);
//!   }
//! };
//! ```

use wasm_bindgen::prelude::*;

mod overlay;
mod types;

// Re-export public types
pub use overlay::CropOverlay;
pub use types::JsRect;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
