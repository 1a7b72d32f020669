//! Host boundary.
//!
//! The grid engine and the anchor command never own widgets. They talk to a
//! host that owns the rect tree: reading rect sizes, cloning a template,
//! moving nodes between parents and writing rect fields back.
//!
//! [`Scene`] is the in-memory host used by tests and by embedders that do
//! not bring their own tree.

mod scene;

pub use scene::*;

use taffy::geometry::Size;

use crate::error::HostError;
use crate::types::{NodeId, RectGeometry};

/// Operations the layout engine needs from the presentation layer.
pub trait LayoutHost {
    /// Resolved width/height of a node's rect.
    fn rect_size(&self, node: NodeId) -> Result<Size<f32>, HostError>;

    /// Current parent of a node, `None` at the root.
    fn parent(&self, node: NodeId) -> Result<Option<NodeId>, HostError>;

    /// Clone `template` into a new node under the template's parent.
    fn instantiate(&mut self, template: NodeId) -> Result<NodeId, HostError>;

    /// Move `node` under `parent`, keeping its local rect fields untouched.
    fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) -> Result<(), HostError>;

    /// Overwrite a node's rect fields.
    fn apply_geometry(&mut self, node: NodeId, geometry: &RectGeometry) -> Result<(), HostError>;
}
