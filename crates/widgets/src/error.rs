//! Error types for the widgets

use material_core::MaterialError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// A piece element whose classes name no color or no piece kind.
    #[error("cannot classify piece element with classes {classes:?}")]
    UnclassifiedPiece { classes: String },

    /// An explorer occurrence count that is not a `,`-grouped number.
    #[error("invalid occurrence count: {0:?}")]
    InvalidCount(String),

    #[error("failed to read config {path}: {message}")]
    ConfigRead { path: String, message: String },

    #[error("failed to parse config: {0}")]
    ConfigParse(String),

    #[error(transparent)]
    Material(#[from] MaterialError),
}
