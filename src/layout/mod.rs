//! Layout Module
//!
//! Fixed row/column grid computation.
//!
//! # Example
//!
//! ```
//! use spark_grid::layout::{compute_layout, LayoutConfig};
//! use spark_grid::types::size;
//!
//! let config = LayoutConfig::clamped(5, 2, 3, 0.1, 0.1);
//! let frame = compute_layout(&config, size(480.0, 210.0), size(150.0, 100.0));
//! assert_eq!(frame.cells.len(), 5);
//! ```

mod grid;

pub use grid::*;
