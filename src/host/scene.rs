//! Scene - In-memory rect tree.
//!
//! Nodes live in a dense arena and are addressed by [`NodeId`]. Nothing is
//! ever removed, so ids stay valid for the scene's lifetime.
//!
//! # Rect model
//!
//! Each rect node stores anchors (fractions of the parent rect), a pivot
//! (fraction of its own rect), `size_delta` and `anchored_position`:
//!
//! ```text
//! size       = parent_size * (anchor_max - anchor_min) + size_delta
//! offset_min = anchored_position - size_delta * pivot
//! offset_max = anchored_position + size_delta * (1 - pivot)
//! ```
//!
//! A root node's size is its `size_delta`.

use taffy::geometry::Size;
use tracing::trace;

use crate::error::HostError;
use crate::types::{size, vec2, NodeId, RectGeometry, SelectionFlags, Vec2, ZERO};

use super::LayoutHost;

// =============================================================================
// Node
// =============================================================================

/// What a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Plain transform without a rect (zero size).
    Transform,
    /// Sizable rect.
    Rect,
    /// Top-level container with a rect.
    Canvas,
}

impl NodeKind {
    #[inline]
    pub fn has_rect(self) -> bool {
        matches!(self, NodeKind::Rect | NodeKind::Canvas)
    }
}

/// One node of the scene.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub rect: RectGeometry,
}

impl SceneNode {
    /// Bottom-left corner offset from the anchor rect.
    pub fn offset_min(&self) -> Vec2 {
        let r = &self.rect;
        vec2(
            r.anchored_position.x - r.size_delta.x * r.pivot.x,
            r.anchored_position.y - r.size_delta.y * r.pivot.y,
        )
    }

    /// Top-right corner offset from the anchor rect.
    pub fn offset_max(&self) -> Vec2 {
        let r = &self.rect;
        vec2(
            r.anchored_position.x + r.size_delta.x * (1.0 - r.pivot.x),
            r.anchored_position.y + r.size_delta.y * (1.0 - r.pivot.y),
        )
    }

    /// Move the bottom-left corner, keeping the top-right corner fixed.
    pub fn set_offset_min(&mut self, value: Vec2) {
        let current = self.offset_min();
        let dx = value.x - current.x;
        let dy = value.y - current.y;
        let r = &mut self.rect;
        r.size_delta = vec2(r.size_delta.x - dx, r.size_delta.y - dy);
        r.anchored_position = vec2(
            r.anchored_position.x + dx * (1.0 - r.pivot.x),
            r.anchored_position.y + dy * (1.0 - r.pivot.y),
        );
    }

    /// Move the top-right corner, keeping the bottom-left corner fixed.
    pub fn set_offset_max(&mut self, value: Vec2) {
        let current = self.offset_max();
        let dx = value.x - current.x;
        let dy = value.y - current.y;
        let r = &mut self.rect;
        r.size_delta = vec2(r.size_delta.x + dx, r.size_delta.y + dy);
        r.anchored_position = vec2(
            r.anchored_position.x + dx * r.pivot.x,
            r.anchored_position.y + dy * r.pivot.y,
        );
    }
}

/// Rect that fills its parent exactly.
pub fn stretch_rect() -> RectGeometry {
    RectGeometry {
        anchor_min: ZERO,
        anchor_max: vec2(1.0, 1.0),
        pivot: vec2(0.5, 0.5),
        size_delta: ZERO,
        anchored_position: ZERO,
    }
}

/// Centered rect of fixed pixel size.
pub fn fixed_rect(width: f32, height: f32) -> RectGeometry {
    RectGeometry {
        anchor_min: vec2(0.5, 0.5),
        anchor_max: vec2(0.5, 0.5),
        pivot: vec2(0.5, 0.5),
        size_delta: vec2(width, height),
        anchored_position: ZERO,
    }
}

// =============================================================================
// Scene
// =============================================================================

/// Arena-backed rect tree.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level canvas of the given pixel size.
    pub fn add_canvas(&mut self, name: &str, width: f32, height: f32) -> NodeId {
        let rect = RectGeometry {
            size_delta: vec2(width, height),
            ..stretch_rect()
        };
        self.push(name, NodeKind::Canvas, None, rect)
    }

    /// Add a rect node under `parent`.
    pub fn add_rect(
        &mut self,
        name: &str,
        parent: NodeId,
        rect: RectGeometry,
    ) -> Result<NodeId, HostError> {
        self.node(parent)?;
        Ok(self.push(name, NodeKind::Rect, Some(parent), rect))
    }

    /// Add a plain transform (no rect) under `parent`.
    pub fn add_transform(&mut self, name: &str, parent: NodeId) -> Result<NodeId, HostError> {
        self.node(parent)?;
        let rect = RectGeometry {
            size_delta: ZERO,
            ..stretch_rect()
        };
        Ok(self.push(name, NodeKind::Transform, Some(parent), rect))
    }

    fn push(
        &mut self,
        name: &str,
        kind: NodeKind,
        parent: Option<NodeId>,
        rect: RectGeometry,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name: name.to_string(),
            kind,
            parent,
            children: Vec::new(),
            rect,
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        id
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn node(&self, id: NodeId) -> Result<&SceneNode, HostError> {
        self.nodes.get(id.index()).ok_or(HostError::UnknownNode(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, HostError> {
        self.nodes.get_mut(id.index()).ok_or(HostError::UnknownNode(id))
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], HostError> {
        Ok(&self.node(id)?.children)
    }

    /// First node with the given name, in creation order.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.name == name)
            .map(NodeId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id.index()).and_then(|n| n.parent);
        }
        false
    }

    /// Editor-facing description of a node.
    pub fn selection_flags(&self, id: NodeId) -> Result<SelectionFlags, HostError> {
        let node = self.node(id)?;
        let mut flags = SelectionFlags::NONE;
        if node.parent.is_some() {
            flags |= SelectionFlags::HAS_PARENT;
        }
        if node.kind == NodeKind::Canvas {
            flags |= SelectionFlags::CANVAS;
        }
        if node.kind.has_rect() {
            flags |= SelectionFlags::HAS_RECT;
        }
        Ok(flags)
    }
}

// =============================================================================
// LayoutHost
// =============================================================================

impl LayoutHost for Scene {
    fn rect_size(&self, node: NodeId) -> Result<Size<f32>, HostError> {
        let n = self.node(node)?;
        if !n.kind.has_rect() {
            return Ok(size(0.0, 0.0));
        }
        let r = &n.rect;
        let Some(parent) = n.parent else {
            return Ok(size(r.size_delta.x, r.size_delta.y));
        };
        let p = self.rect_size(parent)?;
        Ok(size(
            p.width * (r.anchor_max.x - r.anchor_min.x) + r.size_delta.x,
            p.height * (r.anchor_max.y - r.anchor_min.y) + r.size_delta.y,
        ))
    }

    fn parent(&self, node: NodeId) -> Result<Option<NodeId>, HostError> {
        Ok(self.node(node)?.parent)
    }

    fn instantiate(&mut self, template: NodeId) -> Result<NodeId, HostError> {
        let source = self.node(template)?;
        let name = format!("{}(Clone)", source.name);
        let (kind, parent, rect) = (source.kind, source.parent, source.rect);
        let id = self.push(&name, kind, parent, rect);
        trace!(%template, clone = %id, "instantiated node");
        Ok(id)
    }

    fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) -> Result<(), HostError> {
        self.node(node)?;
        if let Some(parent) = parent {
            self.node(parent)?;
            if self.is_ancestor_or_self(node, parent) {
                return Err(HostError::Cycle { child: node, parent });
            }
        }

        let old = self.nodes[node.index()].parent;
        if old == parent {
            return Ok(());
        }
        if let Some(old) = old {
            self.nodes[old.index()].children.retain(|&c| c != node);
        }
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(node);
        }
        self.nodes[node.index()].parent = parent;
        Ok(())
    }

    fn apply_geometry(&mut self, node: NodeId, geometry: &RectGeometry) -> Result<(), HostError> {
        self.node_mut(node)?.rect = *geometry;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::approx_eq;

    #[test]
    fn test_rect_size_resolution() {
        let mut scene = Scene::new();
        let canvas = scene.add_canvas("Canvas", 800.0, 600.0);
        let panel = scene.add_rect("Panel", canvas, stretch_rect()).unwrap();
        let half = RectGeometry {
            anchor_min: vec2(0.0, 0.0),
            anchor_max: vec2(0.5, 1.0),
            size_delta: vec2(-20.0, 0.0),
            ..stretch_rect()
        };
        let left = scene.add_rect("Left", panel, half).unwrap();
        let fixed = scene.add_rect("Fixed", left, fixed_rect(40.0, 30.0)).unwrap();

        assert_eq!(scene.rect_size(canvas).unwrap(), size(800.0, 600.0));
        assert_eq!(scene.rect_size(panel).unwrap(), size(800.0, 600.0));
        assert_eq!(scene.rect_size(left).unwrap(), size(380.0, 600.0));
        assert_eq!(scene.rect_size(fixed).unwrap(), size(40.0, 30.0));
    }

    #[test]
    fn test_transform_has_no_size() {
        let mut scene = Scene::new();
        let canvas = scene.add_canvas("Canvas", 800.0, 600.0);
        let holder = scene.add_transform("Holder", canvas).unwrap();
        assert_eq!(scene.rect_size(holder).unwrap(), size(0.0, 0.0));
    }

    #[test]
    fn test_offsets_roundtrip_through_setters() {
        let mut scene = Scene::new();
        let canvas = scene.add_canvas("Canvas", 800.0, 600.0);
        let rect = RectGeometry {
            pivot: vec2(0.25, 0.75),
            size_delta: vec2(100.0, 50.0),
            anchored_position: vec2(10.0, -5.0),
            ..fixed_rect(0.0, 0.0)
        };
        let id = scene.add_rect("Widget", canvas, rect).unwrap();
        let node = scene.node_mut(id).unwrap();

        let min = node.offset_min();
        let max = node.offset_max();
        assert!(approx_eq(min.x, -15.0) && approx_eq(min.y, -42.5));
        assert!(approx_eq(max.x, 85.0) && approx_eq(max.y, 7.5));

        node.set_offset_min(vec2(0.0, -40.0));
        assert!(approx_eq(node.offset_max().x, 85.0));
        assert!(approx_eq(node.offset_max().y, 7.5));
        assert!(approx_eq(node.offset_min().x, 0.0));
        assert!(approx_eq(node.offset_min().y, -40.0));

        node.set_offset_min(ZERO);
        node.set_offset_max(ZERO);
        assert!(approx_eq(node.rect.size_delta.x, 0.0));
        assert!(approx_eq(node.rect.size_delta.y, 0.0));
        assert!(approx_eq(node.rect.anchored_position.x, 0.0));
        assert!(approx_eq(node.rect.anchored_position.y, 0.0));
    }

    #[test]
    fn test_instantiate_clones_under_template_parent() {
        let mut scene = Scene::new();
        let canvas = scene.add_canvas("Canvas", 800.0, 600.0);
        let holder = scene.add_rect("Prefab", canvas, stretch_rect()).unwrap();
        let template = scene.add_rect("Item", holder, fixed_rect(30.0, 20.0)).unwrap();

        let clone = scene.instantiate(template).unwrap();

        assert_ne!(clone, template);
        assert_eq!(scene.node(clone).unwrap().name, "Item(Clone)");
        assert_eq!(scene.parent(clone).unwrap(), Some(holder));
        assert_eq!(scene.rect_size(clone).unwrap(), size(30.0, 20.0));
        assert_eq!(scene.children(holder).unwrap(), &[template, clone]);
    }

    #[test]
    fn test_set_parent_moves_children_lists() {
        let mut scene = Scene::new();
        let canvas = scene.add_canvas("Canvas", 800.0, 600.0);
        let a = scene.add_rect("A", canvas, stretch_rect()).unwrap();
        let b = scene.add_rect("B", canvas, stretch_rect()).unwrap();
        let item = scene.add_rect("Item", a, fixed_rect(10.0, 10.0)).unwrap();

        scene.set_parent(item, Some(b)).unwrap();

        assert!(scene.children(a).unwrap().is_empty());
        assert_eq!(scene.children(b).unwrap(), &[item]);
        assert_eq!(scene.parent(item).unwrap(), Some(b));
    }

    #[test]
    fn test_set_parent_rejects_cycles() {
        let mut scene = Scene::new();
        let canvas = scene.add_canvas("Canvas", 800.0, 600.0);
        let a = scene.add_rect("A", canvas, stretch_rect()).unwrap();
        let b = scene.add_rect("B", a, stretch_rect()).unwrap();

        assert_eq!(
            scene.set_parent(a, Some(b)),
            Err(HostError::Cycle { child: a, parent: b })
        );
        assert_eq!(
            scene.set_parent(a, Some(a)),
            Err(HostError::Cycle { child: a, parent: a })
        );
    }

    #[test]
    fn test_unknown_node() {
        let scene = Scene::new();
        assert_eq!(
            scene.rect_size(NodeId(3)),
            Err(HostError::UnknownNode(NodeId(3)))
        );
    }

    #[test]
    fn test_selection_flags() {
        let mut scene = Scene::new();
        let canvas = scene.add_canvas("Canvas", 800.0, 600.0);
        let rect = scene.add_rect("Rect", canvas, stretch_rect()).unwrap();
        let plain = scene.add_transform("Plain", canvas).unwrap();

        assert_eq!(
            scene.selection_flags(canvas).unwrap(),
            SelectionFlags::CANVAS | SelectionFlags::HAS_RECT
        );
        assert_eq!(
            scene.selection_flags(rect).unwrap(),
            SelectionFlags::HAS_PARENT | SelectionFlags::HAS_RECT
        );
        assert_eq!(scene.selection_flags(plain).unwrap(), SelectionFlags::HAS_PARENT);
    }
}
