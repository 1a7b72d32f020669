//! Error types for the host, layout, anchor and command boundaries.
//!
//! The layout arithmetic itself never fails. Errors only come from talking
//! to a host (stale handles), from a missing template, or from config I/O.

use thiserror::Error;

use crate::types::NodeId;

/// Failures reported by a [`LayoutHost`](crate::host::LayoutHost).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    #[error("cannot parent node {child} under its own descendant {parent}")]
    Cycle { child: NodeId, parent: NodeId },
}

/// Failures from the grid layout component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid layout has no template assigned")]
    MissingTemplate,
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Failures from anchor normalization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnchorError {
    #[error("node {0} has no parent")]
    NoParent(NodeId),
    #[error("parent rect has no area ({width}x{height})")]
    DegenerateParent { width: f32, height: f32 },
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Failures from the editor menu surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("no menu command registered at {0:?}")]
    UnknownCommand(String),
    #[error("nothing is selected")]
    NoSelection,
    #[error("command {path:?} is not available for node {node}")]
    Unavailable { path: String, node: NodeId },
    #[error(transparent)]
    Anchor(#[from] AnchorError),
}

/// Failures loading or saving grid settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read grid settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse grid settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize grid settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
