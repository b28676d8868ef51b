//! Crop rectangle zones.
//!
//! The overlay divides the crop rectangle boundary into nine named zones:
//! four edges, four corners, and the composite `All` used for whole-frame
//! drags. A touch activates exactly one zone; the zone determines which
//! independent edges a drag moves.
//!
//! ## Module layout
//!
//! - [`frames`] - pure geometry for the per-zone touch frames
//! - [`classify`] - point-to-zone hit testing with fixed precedence

pub mod classify;
pub mod frames;

pub use classify::classify;
pub use frames::{corner_frame, edge_frame};

/// A single independent side of the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// A corner of the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// An interaction zone on the crop rectangle.
///
/// `None` means the touch landed outside every touch frame. `All` stands
/// for a whole-rectangle drag; it is assigned programmatically and never
/// produced by [`classify`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Zone {
    #[default]
    None,
    All,
    TopEdge,
    LeftEdge,
    BottomEdge,
    RightEdge,
    TopLeftCorner,
    TopRightCorner,
    BottomRightCorner,
    BottomLeftCorner,
}

impl Zone {
    /// The independent edges a drag on this zone moves.
    ///
    /// A corner moves its two adjacent edges; each edge rule is applied
    /// separately with no diagonal coupling. An empty slice means the zone
    /// does not move anything (`None`).
    pub fn edges(self) -> &'static [Edge] {
        match self {
            Zone::None => &[],
            Zone::All => &[Edge::Top, Edge::Right, Edge::Bottom, Edge::Left],
            Zone::TopEdge => &[Edge::Top],
            Zone::LeftEdge => &[Edge::Left],
            Zone::BottomEdge => &[Edge::Bottom],
            Zone::RightEdge => &[Edge::Right],
            Zone::TopLeftCorner => &[Edge::Top, Edge::Left],
            Zone::TopRightCorner => &[Edge::Top, Edge::Right],
            Zone::BottomRightCorner => &[Edge::Bottom, Edge::Right],
            Zone::BottomLeftCorner => &[Edge::Bottom, Edge::Left],
        }
    }

    /// Whether this zone includes the given edge.
    pub fn moves(self, edge: Edge) -> bool {
        self.edges().contains(&edge)
    }
}
