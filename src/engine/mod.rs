//! Grid Engine - Widget pooling.
//!
//! Widgets are NOT objects owned by the engine. They are handles into the
//! host's rect tree, handed out by a [`WidgetPool`]:
//!
//! ```text
//! active: [#4, #5, #6]     placed in the panel, row-major
//! free:   [#7]             parked under the template's parent
//! ```
//!
//! Growing takes from `free` before cloning the template, so a grid that
//! shrinks and regrows never re-instantiates.

mod pool;

pub use pool::*;
