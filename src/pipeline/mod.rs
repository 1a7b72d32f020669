//! Grid Pipeline
//!
//! Connects stored settings to live widgets.
//!
//! ```text
//! GridSettings signal → auto_apply effect → GridLayout::on_validate
//!                                         → WidgetPool::reconcile
//!                                         → compute_layout
//!                                         → LayoutHost::apply_geometry
//! ```
//!
//! `compute_layout` is pure; only `GridLayout` touches the host.

mod auto_apply;
mod grid_layout;

pub use auto_apply::auto_apply;
pub use grid_layout::GridLayout;
