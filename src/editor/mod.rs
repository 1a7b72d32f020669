//! Editor commands.
//!
//! One-shot tools invoked on the current selection, outside the layout
//! pipeline. Each command is a pure computation plus a thin wrapper that
//! applies it to a [`Scene`](crate::host::Scene) node.

mod anchor;
mod menu;

pub use anchor::*;
pub use menu::*;
