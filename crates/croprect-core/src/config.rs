//! Overlay configuration.
//!
//! All tunables the interaction core and the layout computation consume:
//! touch target sizes, the minimum crop rectangle size, and the visual
//! parameters (line widths, decoration sizes, grid density) the host needs
//! to draw the overlay. Colors stay on the host side; the core only deals
//! in geometry.

use crate::Size;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Edge touch area thickness, split by edge orientation.
///
/// `horizontal` applies to the top and bottom edges, `vertical` to the
/// left and right edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeThickness {
    pub horizontal: f64,
    pub vertical: f64,
}

impl EdgeThickness {
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for EdgeThickness {
    fn default() -> Self {
        Self {
            horizontal: 20.0,
            vertical: 20.0,
        }
    }
}

/// Edge decoration appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
    /// Skip edge decorations entirely.
    pub hidden: bool,
    pub normal_line_width: f64,
    pub highlighted_line_width: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            hidden: false,
            normal_line_width: 1.0,
            highlighted_line_width: 3.0,
        }
    }
}

/// Corner decoration appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerStyle {
    /// Skip corner decorations entirely.
    pub hidden: bool,
    pub normal_size: Size,
    pub highlighted_size: Size,
    pub normal_line_width: f64,
    pub highlighted_line_width: f64,
}

impl Default for CornerStyle {
    fn default() -> Self {
        Self {
            hidden: false,
            normal_size: Size::new(20.0, 20.0),
            highlighted_size: Size::new(26.0, 26.0),
            normal_line_width: 3.0,
            highlighted_line_width: 3.0,
        }
    }
}

/// Grid appearance and behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    pub hidden: bool,
    /// Show the grid only while a drag is in progress.
    pub auto_hide: bool,
    /// Number of interior lines per axis; `n` lines split the crop
    /// rectangle into `n + 1` equal bands.
    pub horizontal_lines: u32,
    pub vertical_lines: u32,
    pub line_width: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            hidden: false,
            auto_hide: true,
            horizontal_lines: 2,
            vertical_lines: 2,
            line_width: 1.0,
        }
    }
}

/// Dimming mask appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskStyle {
    /// Target alpha for the blurred mask regions when visible.
    pub blur_alpha: f64,
}

impl Default for MaskStyle {
    fn default() -> Self {
        Self { blur_alpha: 0.5 }
    }
}

/// Full overlay configuration.
///
/// Read-only for the duration of a gesture; the interaction core never
/// mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Touch target size for each corner, centered on the corner point.
    pub corner_touch_size: Size,
    /// Touch target thickness for the edges.
    pub edge_touch_thickness: EdgeThickness,
    /// The crop rectangle can never be dragged smaller than this.
    pub min_crop_rect_size: Size,
    pub edge: EdgeStyle,
    pub corner: CornerStyle,
    pub grid: GridStyle,
    pub mask: MaskStyle,
    /// Fade duration in seconds for visibility transitions.
    pub animation_duration: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            corner_touch_size: Size::new(30.0, 30.0),
            edge_touch_thickness: EdgeThickness::default(),
            min_crop_rect_size: Size::new(30.0, 30.0),
            edge: EdgeStyle::default(),
            corner: CornerStyle::default(),
            grid: GridStyle::default(),
            mask: MaskStyle::default(),
            animation_duration: 0.3,
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("corner touch size must be positive, got {width}x{height}")]
    InvalidCornerTouchSize { width: f64, height: f64 },

    #[error("edge touch thickness must be positive, got horizontal {horizontal}, vertical {vertical}")]
    InvalidEdgeThickness { horizontal: f64, vertical: f64 },

    #[error("minimum crop rectangle size must be positive, got {width}x{height}")]
    InvalidMinCropSize { width: f64, height: f64 },
}

impl OverlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the geometric fields the interaction core depends on.
    ///
    /// Visual fields (line widths, grid density) are allowed to be zero;
    /// touch targets and the minimum crop size are not, since zero-sized
    /// targets make every zone unreachable and a zero minimum lets the
    /// rectangle collapse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.corner_touch_size.width <= 0.0 || self.corner_touch_size.height <= 0.0 {
            return Err(ConfigError::InvalidCornerTouchSize {
                width: self.corner_touch_size.width,
                height: self.corner_touch_size.height,
            });
        }
        if self.edge_touch_thickness.horizontal <= 0.0 || self.edge_touch_thickness.vertical <= 0.0
        {
            return Err(ConfigError::InvalidEdgeThickness {
                horizontal: self.edge_touch_thickness.horizontal,
                vertical: self.edge_touch_thickness.vertical,
            });
        }
        if self.min_crop_rect_size.width <= 0.0 || self.min_crop_rect_size.height <= 0.0 {
            return Err(ConfigError::InvalidMinCropSize {
                width: self.min_crop_rect_size.width,
                height: self.min_crop_rect_size.height,
            });
        }
        Ok(())
    }
}
