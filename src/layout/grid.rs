//! Grid Layout - Aspect-fitting row/column geometry.
//!
//! # Algorithm
//!
//! 1. Clamp the request: item count to `rows * columns`, everything to >= 0
//! 2. Split the panel into uniform cells using the spacing rates
//! 3. Shrink one axis so each cell matches the template's aspect ratio, then
//!    re-derive that axis' spacing so the cells still span the panel
//! 4. Center the last row when it is only partially filled
//! 5. Place cells row-major from the panel's top-left corner
//!
//! Everything here is pure. Applying the result to live widgets is the job
//! of [`GridLayout`](crate::pipeline::GridLayout).

use taffy::geometry::Size;

use crate::engine::ReconcilePlan;
use crate::types::{size, CellGeometry};

// =============================================================================
// Config
// =============================================================================

/// Validated grid parameters.
///
/// Only built through [`LayoutConfig::clamped`], so all counts are
/// non-negative, rates are >= 0 (never NaN), and
/// `item_count <= row_count * column_count`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub item_count: usize,
    pub row_count: usize,
    pub column_count: usize,
    /// Horizontal gap as a fraction of cell width.
    pub space_x_rate: f32,
    /// Vertical gap as a fraction of cell height.
    pub space_y_rate: f32,
}

impl LayoutConfig {
    /// Build a config from raw (possibly negative) inputs.
    ///
    /// Rows and columns are floored at zero first, then the item count is
    /// clamped into `0..=rows * columns`. Nothing is ever rejected.
    pub fn clamped(count: i32, rows: i32, columns: i32, x_rate: f32, y_rate: f32) -> Self {
        let rows = rows.max(0);
        let columns = columns.max(0);
        let capacity = i64::from(rows) * i64::from(columns);
        let count = i64::from(count).clamp(0, capacity);
        Self {
            item_count: usize::try_from(count).unwrap_or(0),
            row_count: usize::try_from(rows).unwrap_or(0),
            column_count: usize::try_from(columns).unwrap_or(0),
            space_x_rate: floor_rate(x_rate),
            space_y_rate: floor_rate(y_rate),
        }
    }

    /// Number of cells the grid can hold.
    pub fn capacity(&self) -> usize {
        self.row_count.saturating_mul(self.column_count)
    }
}

/// Negative and NaN rates become zero.
fn floor_rate(rate: f32) -> f32 {
    if rate.is_nan() { 0.0 } else { rate.max(0.0) }
}

// =============================================================================
// Output
// =============================================================================

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFrame {
    /// Config after aspect fitting. One of the spacing rates may differ from
    /// the input because it was re-derived.
    pub config: LayoutConfig,
    /// Uniform cell size.
    pub cell: Size<f32>,
    /// Left offset of the partially filled last row, 0 when rows are full.
    pub last_line_left_indent: f32,
    /// One entry per item, row-major.
    pub cells: Vec<CellGeometry>,
}

impl GridFrame {
    /// Pool changes needed to go from `active` widgets to this frame.
    pub fn plan(&self, active: usize) -> ReconcilePlan {
        ReconcilePlan::new(active, self.config.item_count)
    }

    fn degenerate(config: LayoutConfig) -> Self {
        let zero = CellGeometry { width: 0.0, height: 0.0, x: 0.0, y: 0.0 };
        Self {
            cells: vec![zero; config.item_count],
            config,
            cell: size(0.0, 0.0),
            last_line_left_indent: 0.0,
        }
    }
}

// =============================================================================
// Main Entry Point
// =============================================================================

/// Compute grid geometry for `config` inside a `panel`, fitting cells to the
/// aspect ratio of `template`.
///
/// An empty grid, or a panel without area, produces all-zero geometry. A
/// template without area skips the aspect correction.
pub fn compute_layout(config: &LayoutConfig, panel: Size<f32>, template: Size<f32>) -> GridFrame {
    let mut config = *config;
    let rows = config.row_count;
    let columns = config.column_count;
    let count = config.item_count;

    if count == 0 || rows == 0 || columns == 0 || !(panel.width > 0.0 && panel.height > 0.0) {
        return GridFrame::degenerate(config);
    }

    let rows_f = rows as f32;
    let columns_f = columns as f32;

    // Pass 1: unconstrained cell size
    let mut height = panel.height / (rows_f + (rows_f - 1.0) * config.space_y_rate);
    let mut width = panel.width / (columns_f + (columns_f - 1.0) * config.space_x_rate);

    // Pass 2: aspect fit, re-deriving the spacing of the shrunk axis
    if template.width > 0.0 && template.height > 0.0 {
        let aspect = template.width / template.height;
        if width / height > aspect {
            width = aspect * height;
            config.space_x_rate = derived_rate(panel.width, width, columns);
        } else {
            height = width / aspect;
            config.space_y_rate = derived_rate(panel.height, height, rows);
        }
    }

    // Pass 3: center the partial last row
    let remainder = count % columns;
    let last_line_left_indent = if remainder != 0 {
        let k = remainder as f32;
        (panel.width - (k + (k - 1.0) * config.space_x_rate) * width) / 2.0
    } else {
        0.0
    };

    // Pass 4: row-major placement
    let step_x = width * (1.0 + config.space_x_rate);
    let step_y = height * (1.0 + config.space_y_rate);
    let mut cells = Vec::with_capacity(count);
    let mut y = 0.0;
    'rows: for r in 0..rows {
        let remaining = count.saturating_sub(r * columns);
        let mut x = if remaining < columns { last_line_left_indent } else { 0.0 };
        for c in 0..columns {
            if r * columns + c >= count {
                break 'rows;
            }
            cells.push(CellGeometry { width, height, x, y });
            x += step_x;
        }
        y -= step_y;
    }

    GridFrame {
        config,
        cell: size(width, height),
        last_line_left_indent,
        cells,
    }
}

/// Spacing rate that makes `n` cells of `cell` plus `n - 1` gaps span `extent`.
fn derived_rate(extent: f32, cell: f32, n: usize) -> f32 {
    if n <= 1 {
        return 0.0;
    }
    let n = n as f32;
    ((extent / cell) - n) / (n - 1.0)
}

// =============================================================================
// Tests
// =============================================================================
