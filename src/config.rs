//! Stored grid settings.
//!
//! These are the raw, user-editable fields of a grid component. They may
//! hold out-of-range values; [`GridSettings::layout_config`] clamps them.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::layout::LayoutConfig;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GridSettings {
    /// While set, settings changes are not applied to the grid.
    pub editing: bool,
    pub item_count: i32,
    pub row_count: i32,
    pub column_count: i32,
    /// Horizontal gap as a fraction of cell width.
    pub space_x_rate: f32,
    /// Vertical gap as a fraction of cell height.
    pub space_y_rate: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            editing: false,
            item_count: 0,
            row_count: 0,
            column_count: 0,
            space_x_rate: 0.1,
            space_y_rate: 0.1,
        }
    }
}

impl GridSettings {
    /// Clamped layout parameters for these settings.
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig::clamped(
            self.item_count,
            self.row_count,
            self.column_count,
            self.space_x_rate,
            self.space_y_rate,
        )
    }

    /// Overwrite the layout fields with a resolved config, keeping `editing`.
    pub fn store(&mut self, config: &LayoutConfig) {
        self.item_count = saturating_i32(config.item_count);
        self.row_count = saturating_i32(config.row_count);
        self.column_count = saturating_i32(config.column_count);
        self.space_x_rate = config.space_x_rate;
        self.space_y_rate = config.space_y_rate;
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load settings from `path`, falling back to defaults on errors.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!("{err} ({}). Using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write settings to `path` as TOML, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        let toml = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}

fn saturating_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
