//! Auto Apply - Re-run the grid layout when its settings change.
//!
//! Installs one effect that reads a settings signal, copies the value into
//! the component and calls [`GridLayout::on_validate`]. The `editing` flag in
//! the settings suspends the layout while a user is still adjusting values.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use spark_grid::host::{fixed_rect, stretch_rect};
//! use spark_grid::{auto_apply, GridLayout, GridSettings, Scene};
//! use spark_signals::signal;
//!
//! let mut scene = Scene::new();
//! let canvas = scene.add_canvas("Canvas", 400.0, 400.0);
//! let panel = scene.add_rect("Panel", canvas, stretch_rect()).unwrap();
//! let holder = scene.add_rect("Prefab", panel, stretch_rect()).unwrap();
//! let template = scene.add_rect("Item", holder, fixed_rect(10.0, 10.0)).unwrap();
//!
//! let scene = Rc::new(RefCell::new(scene));
//! let grid = Rc::new(RefCell::new(GridLayout::with_template(panel, template)));
//! let settings = signal(GridSettings::default());
//! let stop = auto_apply(grid.clone(), scene.clone(), settings.clone());
//!
//! settings.set(GridSettings { item_count: 4, row_count: 2, column_count: 2, ..Default::default() });
//! assert_eq!(grid.borrow().items().len(), 4);
//!
//! stop();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{effect, Signal};
use tracing::warn;

use crate::config::GridSettings;
use crate::host::LayoutHost;

use super::grid_layout::GridLayout;

/// Keep `grid` in sync with `settings`.
///
/// The effect runs once immediately and again on every settings change.
/// Host errors are logged, not propagated, since there is no caller to
/// return them to. Returns the effect's stop function.
pub fn auto_apply<H: LayoutHost + 'static>(
    grid: Rc<RefCell<GridLayout>>,
    host: Rc<RefCell<H>>,
    settings: Signal<GridSettings>,
) -> impl FnOnce() {
    effect(move || {
        // Read settings (creates reactive dependency)
        let current = settings.get();

        let mut grid = grid.borrow_mut();
        let panel = grid.panel();
        grid.set_settings(current);

        let mut host = host.borrow_mut();
        if let Err(err) = grid.on_validate(&mut *host) {
            warn!(%panel, "grid auto-apply failed: {err}");
        }
    })
}

// =============================================================================
// Tests
// =============================================================================
