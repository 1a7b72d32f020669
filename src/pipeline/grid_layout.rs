//! GridLayout - Applies grid geometry to pooled widgets.
//!
//! The component owns the stored settings and the widget pool for one panel.
//! Each `reset_layout` call:
//!
//! 1. Clamps and stores the parameters
//! 2. Reconciles the pool to the item count
//! 3. Runs [`compute_layout`] against the panel and template sizes
//! 4. Writes each cell's rect onto the matching active widget

use tracing::debug;

use crate::config::GridSettings;
use crate::engine::WidgetPool;
use crate::error::GridError;
use crate::host::LayoutHost;
use crate::layout::{compute_layout, GridFrame, LayoutConfig};
use crate::types::NodeId;

/// Grid layout component bound to one panel.
#[derive(Debug, Clone)]
pub struct GridLayout {
    panel: NodeId,
    settings: GridSettings,
    pool: Option<WidgetPool>,
    last_frame: Option<GridFrame>,
}

impl GridLayout {
    /// Create a component for `panel` without a template.
    pub fn new(panel: NodeId) -> Self {
        Self {
            panel,
            settings: GridSettings::default(),
            pool: None,
            last_frame: None,
        }
    }

    /// Create a component for `panel` cloning widgets from `template`.
    pub fn with_template(panel: NodeId, template: NodeId) -> Self {
        let mut grid = Self::new(panel);
        grid.set_template(template);
        grid
    }

    pub fn panel(&self) -> NodeId {
        self.panel
    }

    pub fn template(&self) -> Option<NodeId> {
        self.pool.as_ref().map(WidgetPool::template)
    }

    /// Assign the template. Widgets cloned from a previous template are
    /// forgotten by the component but stay in the host tree.
    pub fn set_template(&mut self, template: NodeId) {
        if self.template() != Some(template) {
            self.pool = Some(WidgetPool::new(template));
        }
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Replace the stored settings without applying them.
    pub fn set_settings(&mut self, settings: GridSettings) {
        self.settings = settings;
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.settings.editing = editing;
    }

    pub fn pool(&self) -> Option<&WidgetPool> {
        self.pool.as_ref()
    }

    /// Active widgets, in placement order.
    pub fn items(&self) -> &[NodeId] {
        self.pool.as_ref().map(WidgetPool::active).unwrap_or_default()
    }

    /// Geometry of the most recent layout pass.
    pub fn last_frame(&self) -> Option<&GridFrame> {
        self.last_frame.as_ref()
    }

    /// Re-lay out the grid.
    ///
    /// # Arguments
    /// * `count` - Number of items, capped at `row * column`
    /// * `row` - Number of rows
    /// * `column` - Number of columns
    /// * `x_rate` - Horizontal gap as a fraction of item width
    /// * `y_rate` - Vertical gap as a fraction of item height
    ///
    /// Negative inputs are floored to zero.
    pub fn reset_layout<H: LayoutHost>(
        &mut self,
        host: &mut H,
        count: i32,
        row: i32,
        column: i32,
        x_rate: f32,
        y_rate: f32,
    ) -> Result<&GridFrame, GridError> {
        let pool = self.pool.as_mut().ok_or(GridError::MissingTemplate)?;

        let config = LayoutConfig::clamped(count, row, column, x_rate, y_rate);
        self.settings.store(&config);
        pool.reconcile(host, self.panel, config.item_count)?;

        let panel_size = host.rect_size(self.panel)?;
        let template_size = host.rect_size(pool.template())?;
        let frame = compute_layout(&config, panel_size, template_size);

        for (&item, cell) in pool.active().iter().zip(&frame.cells) {
            host.apply_geometry(item, &cell.to_rect())?;
        }

        // The re-derived spacing rate is kept for the next pass
        self.settings.store(&frame.config);

        debug!(
            panel = %self.panel,
            items = frame.config.item_count,
            rows = frame.config.row_count,
            columns = frame.config.column_count,
            cell_width = frame.cell.width,
            cell_height = frame.cell.height,
            indent = frame.last_line_left_indent,
            "grid layout reset"
        );

        Ok(self.last_frame.insert(frame))
    }

    /// Apply the stored settings, unless editing or no template is assigned.
    ///
    /// Returns the new frame when a layout pass ran.
    pub fn on_validate<H: LayoutHost>(
        &mut self,
        host: &mut H,
    ) -> Result<Option<&GridFrame>, GridError> {
        if self.settings.editing || self.pool.is_none() {
            return Ok(None);
        }
        let s = self.settings.clone();
        let frame = self.reset_layout(
            host,
            s.item_count,
            s.row_count,
            s.column_count,
            s.space_x_rate,
            s.space_y_rate,
        )?;
        Ok(Some(frame))
    }
}

// =============================================================================
// Tests
// =============================================================================
