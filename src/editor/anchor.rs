//! Anchor normalization.
//!
//! Folds a node's pixel offsets into its anchors so that the node keeps its
//! current rect but scales with its parent from then on.
//!
//! ```text
//! anchor_min += offset_min / parent_size
//! anchor_max += offset_max / parent_size
//! offset_min  = offset_max = 0
//! ```
//!
//! The update is additive: it only reaches a fixed point because the
//! offsets are zeroed in the same step.

use taffy::geometry::Size;
use tracing::debug;

use crate::error::AnchorError;
use crate::host::{LayoutHost, Scene};
use crate::types::{vec2, NodeId, Vec2, ZERO};

/// New anchors for a node whose offsets are being cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorUpdate {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
}

/// Compute normalized anchors from pixel offsets.
///
/// Fails when the parent has no area, since the offsets cannot be expressed
/// as fractions of it.
pub fn normalize_anchors(
    offset_min: Vec2,
    offset_max: Vec2,
    anchor_min: Vec2,
    anchor_max: Vec2,
    parent: Size<f32>,
) -> Result<AnchorUpdate, AnchorError> {
    if !(parent.width > 0.0 && parent.height > 0.0) {
        return Err(AnchorError::DegenerateParent {
            width: parent.width,
            height: parent.height,
        });
    }

    let left_bottom = vec2(offset_min.x / parent.width, offset_min.y / parent.height);
    let right_up = vec2(offset_max.x / parent.width, offset_max.y / parent.height);

    Ok(AnchorUpdate {
        anchor_min: vec2(anchor_min.x + left_bottom.x, anchor_min.y + left_bottom.y),
        anchor_max: vec2(anchor_max.x + right_up.x, anchor_max.y + right_up.y),
    })
}

/// Normalize the anchors of `node` in place and zero its offsets.
pub fn auto_set_anchor(scene: &mut Scene, node: NodeId) -> Result<AnchorUpdate, AnchorError> {
    let parent = scene.parent(node)?.ok_or(AnchorError::NoParent(node))?;
    let parent_size = scene.rect_size(parent)?;

    let n = scene.node_mut(node)?;
    let update = normalize_anchors(
        n.offset_min(),
        n.offset_max(),
        n.rect.anchor_min,
        n.rect.anchor_max,
        parent_size,
    )?;

    n.rect.anchor_max = update.anchor_max;
    n.rect.anchor_min = update.anchor_min;
    n.set_offset_min(ZERO);
    n.set_offset_max(ZERO);

    debug!(
        %node,
        min_x = update.anchor_min.x,
        min_y = update.anchor_min.y,
        max_x = update.anchor_max.x,
        max_y = update.anchor_max.y,
        "normalized anchors"
    );
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::stretch_rect;
    use crate::types::{approx_eq, RectGeometry};

    fn assert_vec(v: Vec2, x: f32, y: f32) {
        assert!(approx_eq(v.x, x) && approx_eq(v.y, y), "expected ({x}, {y}), got ({}, {})", v.x, v.y);
    }

    /// 800x600 canvas with an inset child: 80px left/right, 60px top/bottom.
    fn setup() -> (Scene, NodeId) {
        let mut scene = Scene::new();
        let canvas = scene.add_canvas("Canvas", 800.0, 600.0);
        let child = scene.add_rect("Child", canvas, stretch_rect()).unwrap();
        let n = scene.node_mut(child).unwrap();
        n.set_offset_min(vec2(80.0, 60.0));
        n.set_offset_max(vec2(-80.0, -60.0));
        (scene, child)
    }

    #[test]
    fn test_normalize_pure() {
        let update = normalize_anchors(
            vec2(80.0, 60.0),
            vec2(-80.0, -60.0),
            vec2(0.0, 0.0),
            vec2(1.0, 1.0),
            Size { width: 800.0, height: 600.0 },
        )
        .unwrap();

        assert_vec(update.anchor_min, 0.1, 0.1);
        assert_vec(update.anchor_max, 0.9, 0.9);
    }

    #[test]
    fn test_normalize_rejects_zero_area_parent() {
        let err = normalize_anchors(
            ZERO,
            ZERO,
            ZERO,
            ZERO,
            Size { width: 0.0, height: 600.0 },
        )
        .unwrap_err();
        assert_eq!(err, AnchorError::DegenerateParent { width: 0.0, height: 600.0 });
    }

    #[test]
    fn test_auto_set_anchor_keeps_rect() {
        let (mut scene, child) = setup();
        assert_eq!(scene.rect_size(child).unwrap(), Size { width: 640.0, height: 480.0 });

        auto_set_anchor(&mut scene, child).unwrap();

        let n = scene.node(child).unwrap();
        assert_vec(n.rect.anchor_min, 0.1, 0.1);
        assert_vec(n.rect.anchor_max, 0.9, 0.9);
        assert_vec(n.offset_min(), 0.0, 0.0);
        assert_vec(n.offset_max(), 0.0, 0.0);

        let size = scene.rect_size(child).unwrap();
        assert!(approx_eq(size.width, 640.0) && approx_eq(size.height, 480.0));
    }

    #[test]
    fn test_second_call_is_a_no_op() {
        let (mut scene, child) = setup();

        let first = auto_set_anchor(&mut scene, child).unwrap();
        let second = auto_set_anchor(&mut scene, child).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_update_is_additive() {
        let (mut scene, child) = setup();
        auto_set_anchor(&mut scene, child).unwrap();

        // Pull the right edge in by another 80px
        scene.node_mut(child).unwrap().set_offset_max(vec2(-80.0, 0.0));
        auto_set_anchor(&mut scene, child).unwrap();

        let n = scene.node(child).unwrap();
        assert_vec(n.rect.anchor_min, 0.1, 0.1);
        assert_vec(n.rect.anchor_max, 0.8, 0.9);
        assert!(approx_eq(scene.rect_size(child).unwrap().width, 560.0));
    }

    #[test]
    fn test_root_has_no_parent() {
        let mut scene = Scene::new();
        let canvas = scene.add_canvas("Canvas", 800.0, 600.0);
        assert_eq!(
            auto_set_anchor(&mut scene, canvas).unwrap_err(),
            AnchorError::NoParent(canvas)
        );
    }

    #[test]
    fn test_fixed_rect_becomes_relative() {
        let mut scene = Scene::new();
        let canvas = scene.add_canvas("Canvas", 1000.0, 500.0);
        let rect = RectGeometry {
            anchor_min: vec2(0.5, 0.5),
            anchor_max: vec2(0.5, 0.5),
            pivot: vec2(0.5, 0.5),
            size_delta: vec2(200.0, 100.0),
            anchored_position: vec2(100.0, 0.0),
        };
        let node = scene.add_rect("Button", canvas, rect).unwrap();

        auto_set_anchor(&mut scene, node).unwrap();

        let n = scene.node(node).unwrap();
        assert_vec(n.rect.anchor_min, 0.5, 0.4);
        assert_vec(n.rect.anchor_max, 0.7, 0.6);
    }
}
