//! # spark-grid
//!
//! Aspect-fitting grid layout and anchor normalization for retained UI rect
//! trees.
//!
//! ## Architecture
//!
//! Widgets are handles into a host-owned rect tree. The grid component asks a
//! [`WidgetPool`] for as many handles as it has items, computes uniform cell
//! geometry with the pure [`compute_layout`], and writes the result back
//! through the [`LayoutHost`] trait:
//!
//! ```text
//! GridSettings → GridLayout::reset_layout → WidgetPool::reconcile
//!                                         → compute_layout
//!                                         → LayoutHost::apply_geometry
//! ```
//!
//! The anchor command is independent: it folds a node's pixel offsets into
//! its anchors so the node scales with its parent.
//!
//! ## Modules
//!
//! - [`types`] - Geometry types, handles, selection flags
//! - [`engine`] - Widget pool with a FIFO free list
//! - [`layout`] - Pure grid computation
//! - [`pipeline`] - Grid component and reactive auto-apply
//! - [`host`] - Host trait and the in-memory [`Scene`]
//! - [`editor`] - Anchor normalization and the command menu
//! - [`config`] - Stored grid settings (TOML)

pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod host;
pub mod layout;
pub mod pipeline;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::GridSettings;

pub use editor::{auto_set_anchor, normalize_anchors, AnchorUpdate, Menu, AUTO_SET_ANCHOR};

pub use engine::{PoolAction, ReconcilePlan, WidgetPool};

pub use error::{AnchorError, CommandError, ConfigError, GridError, HostError};

pub use host::{LayoutHost, NodeKind, Scene, SceneNode};

pub use layout::{compute_layout, GridFrame, LayoutConfig};

pub use pipeline::{auto_apply, GridLayout};
