//! Menu - Editor command registry.
//!
//! Commands are registered by menu path with two callbacks: a validator
//! deciding whether the entry is enabled for the current selection, and the
//! action itself. Invoking a disabled entry is an error and leaves the
//! scene untouched.
//!
//! # Example
//!
//! ```
//! use spark_grid::editor::{Menu, AUTO_SET_ANCHOR};
//! use spark_grid::host::{stretch_rect, Scene};
//!
//! let mut scene = Scene::new();
//! let canvas = scene.add_canvas("Canvas", 800.0, 600.0);
//! let child = scene.add_rect("Child", canvas, stretch_rect()).unwrap();
//!
//! let menu = Menu::default();
//! assert!(menu.is_enabled(AUTO_SET_ANCHOR, &scene, Some(child)));
//! assert!(!menu.is_enabled(AUTO_SET_ANCHOR, &scene, Some(canvas)));
//! menu.invoke(AUTO_SET_ANCHOR, &mut scene, Some(child)).unwrap();
//! ```

use tracing::debug;

use crate::error::CommandError;
use crate::host::Scene;
use crate::types::NodeId;

use super::anchor::auto_set_anchor;

/// Menu path of the anchor normalization command.
pub const AUTO_SET_ANCHOR: &str = "Auto/AutoSetAnchor";

type Validator = Box<dyn Fn(&Scene, NodeId) -> bool>;
type Action = Box<dyn Fn(&mut Scene, NodeId) -> Result<(), CommandError>>;

struct MenuItem {
    path: String,
    validate: Validator,
    execute: Action,
}

/// Registry of editor commands keyed by menu path.
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Default for Menu {
    /// Menu with the built-in commands registered.
    fn default() -> Self {
        let mut menu = Self::new();
        menu.register(
            AUTO_SET_ANCHOR,
            |scene, node| {
                scene
                    .selection_flags(node)
                    .is_ok_and(|flags| flags.can_normalize_anchors())
            },
            |scene, node| {
                auto_set_anchor(scene, node)?;
                Ok(())
            },
        );
        menu
    }
}

impl Menu {
    /// Empty menu.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Register a command. A later registration at the same path replaces
    /// the earlier one.
    pub fn register(
        &mut self,
        path: &str,
        validate: impl Fn(&Scene, NodeId) -> bool + 'static,
        execute: impl Fn(&mut Scene, NodeId) -> Result<(), CommandError> + 'static,
    ) {
        self.items.retain(|item| item.path != path);
        self.items.push(MenuItem {
            path: path.to_string(),
            validate: Box::new(validate),
            execute: Box::new(execute),
        });
    }

    /// Registered menu paths, in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.path.as_str())
    }

    fn item(&self, path: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.path == path)
    }

    /// Whether the command at `path` is offered for `selection`.
    pub fn is_enabled(&self, path: &str, scene: &Scene, selection: Option<NodeId>) -> bool {
        match (self.item(path), selection) {
            (Some(item), Some(node)) => (item.validate)(scene, node),
            _ => false,
        }
    }

    /// Run the command at `path` on `selection`.
    pub fn invoke(
        &self,
        path: &str,
        scene: &mut Scene,
        selection: Option<NodeId>,
    ) -> Result<(), CommandError> {
        let item = self
            .item(path)
            .ok_or_else(|| CommandError::UnknownCommand(path.to_string()))?;
        let node = selection.ok_or(CommandError::NoSelection)?;
        if !(item.validate)(scene, node) {
            return Err(CommandError::Unavailable {
                path: path.to_string(),
                node,
            });
        }
        debug!(path, %node, "invoking menu command");
        (item.execute)(scene, node)
    }
}
