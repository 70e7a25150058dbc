//! Error types for the material core

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaterialError {
    /// A snapshot entry that names no known piece kind.
    #[error("invalid piece kind: {label:?}")]
    InvalidPieceKind { label: String },

    #[error("failed to read config {path}: {message}")]
    ConfigRead { path: String, message: String },

    #[error("failed to parse config: {0}")]
    ConfigParse(String),
}
