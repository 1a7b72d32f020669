//! Core types for spark-grid.
//!
//! Geometry flows through the crate as taffy's `Point<f32>` / `Size<f32>`.
//! Anchors and pivots are fractions of a rect (0..1), offsets and sizes are
//! in pixels. The y axis grows upward, so a grid laid out top-to-bottom has
//! increasingly negative y positions.

use taffy::geometry::{Point, Size};

// =============================================================================
// Vectors
// =============================================================================

/// 2D vector used for anchors, pivots, offsets and positions.
pub type Vec2 = Point<f32>;

/// Construct a [`Vec2`].
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Point { x, y }
}

/// The zero vector.
pub const ZERO: Vec2 = vec2(0.0, 0.0);

/// The top-left corner of a rect in anchor/pivot space.
pub const TOP_LEFT: Vec2 = vec2(0.0, 1.0);

/// Construct a `Size<f32>`.
#[inline]
pub const fn size(width: f32, height: f32) -> Size<f32> {
    Size { width, height }
}

// =============================================================================
// Handles
// =============================================================================

/// Opaque handle to a node in a host's rect tree.
///
/// Handles are dense indices. A host never reuses one, so a handle stays
/// valid for as long as the host lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Raw arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Placement of one grid cell.
///
/// `(x, y)` is the offset of the cell's top-left corner from the panel's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl CellGeometry {
    /// Convert to rect fields pinned at the parent's top-left corner.
    pub fn to_rect(self) -> RectGeometry {
        RectGeometry {
            anchor_min: TOP_LEFT,
            anchor_max: TOP_LEFT,
            pivot: TOP_LEFT,
            size_delta: vec2(self.width, self.height),
            anchored_position: vec2(self.x, self.y),
        }
    }
}

/// Rect fields a host writes onto a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectGeometry {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub pivot: Vec2,
    pub size_delta: Vec2,
    pub anchored_position: Vec2,
}

// =============================================================================
// Selection Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// What the currently selected node is, as far as editor commands care.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SelectionFlags: u8 {
        const NONE = 0;
        /// Node has a parent in the tree.
        const HAS_PARENT = 1 << 0;
        /// Node is a top-level canvas container.
        const CANVAS = 1 << 1;
        /// Node carries a sizable rect.
        const HAS_RECT = 1 << 2;
    }
}

impl SelectionFlags {
    /// Whether anchor normalization may run on a node with these flags.
    #[inline]
    pub fn can_normalize_anchors(self) -> bool {
        self.contains(Self::HAS_PARENT | Self::HAS_RECT) && !self.contains(Self::CANVAS)
    }
}

/// Approximate float equality for comparing computed geometry.
///
/// Uses a relative tolerance of `1e-3`, never tighter than `1e-3` absolute,
/// so positions and sizes derived through re-computed spacing rates compare
/// equal to their hand-computed values.
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * a.abs().max(b.abs()).max(1.0)
}
