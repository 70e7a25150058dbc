//! Piece values and starting counts fed to the calculator

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::error::MaterialError;
use crate::types::{PieceKind, PieceTable};

/// Standard point values: king 0, pawn 1, knight 3, bishop 3, rook 5, queen 9.
pub const STANDARD_VALUES: PieceTable<i32> = PieceTable {
    king: 0,
    pawn: 1,
    knight: 3,
    bishop: 3,
    rook: 5,
    queen: 9,
};

/// Pieces each side starts a standard game with.
pub const STARTING_COUNTS: PieceTable<u32> = PieceTable {
    king: 1,
    pawn: 8,
    knight: 2,
    bishop: 2,
    rook: 2,
    queen: 1,
};

/// Immutable tables injected into [`crate::MaterialBalance`].
///
/// Missing tables, and missing kinds inside a table, fall back to the
/// standard ones. This only changes the queen:
///
/// ```toml
/// [piece_values]
/// queen = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    #[serde(deserialize_with = "values_over_standard")]
    pub piece_values: PieceTable<i32>,
    #[serde(deserialize_with = "counts_over_standard")]
    pub starting_counts: PieceTable<u32>,
}

/// A table as written in a config file, any kind may be left out.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialTable<T> {
    king: Option<T>,
    pawn: Option<T>,
    knight: Option<T>,
    bishop: Option<T>,
    rook: Option<T>,
    queen: Option<T>,
}

impl<T: Copy> PartialTable<T> {
    fn over(self, base: PieceTable<T>) -> PieceTable<T> {
        PieceTable {
            king: self.king.unwrap_or(base.king),
            pawn: self.pawn.unwrap_or(base.pawn),
            knight: self.knight.unwrap_or(base.knight),
            bishop: self.bishop.unwrap_or(base.bishop),
            rook: self.rook.unwrap_or(base.rook),
            queen: self.queen.unwrap_or(base.queen),
        }
    }
}

fn values_over_standard<'de, D>(deserializer: D) -> Result<PieceTable<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    PartialTable::<i32>::deserialize(deserializer).map(|t| t.over(STANDARD_VALUES))
}

fn counts_over_standard<'de, D>(deserializer: D) -> Result<PieceTable<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    PartialTable::<u32>::deserialize(deserializer).map(|t| t.over(STARTING_COUNTS))
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            piece_values: STANDARD_VALUES,
            starting_counts: STARTING_COUNTS,
        }
    }
}

impl MaterialConfig {
    pub fn value(&self, kind: PieceKind) -> i32 {
        self.piece_values.get(kind)
    }

    pub fn starting_count(&self, kind: PieceKind) -> u32 {
        self.starting_counts.get(kind)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, MaterialError> {
        toml::from_str(contents).map_err(|e| MaterialError::ConfigParse(e.to_string()))
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, MaterialError> {
        let contents = std::fs::read_to_string(path).map_err(|e| MaterialError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
