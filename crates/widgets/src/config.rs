//! Widget configuration

use material_core::MaterialConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::WidgetError;
use crate::render::{Orientation, RenderStyle};

/// Piece-count widget settings, loadable from TOML:
///
/// ```toml
/// style = "overlay"
/// orientation = "black"
///
/// [material.piece_values]
/// king = 0
/// pawn = 1
/// knight = 3
/// bishop = 3
/// rook = 5
/// queen = 9
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub style: RenderStyle,
    pub orientation: Orientation,
    pub material: MaterialConfig,
}

impl WidgetConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, WidgetError> {
        toml::from_str(contents).map_err(|e| WidgetError::ConfigParse(e.to_string()))
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, WidgetError> {
        let contents = std::fs::read_to_string(path).map_err(|e| WidgetError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }
}
