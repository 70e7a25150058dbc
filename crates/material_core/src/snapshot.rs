//! Live-piece snapshots handed in by the board-state collaborator

use serde::{Deserialize, Serialize};

use crate::error::MaterialError;
use crate::types::{Color, PieceKind, PieceTable};

/// Pieces alive for one side at a given instant. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSnapshot {
    pub pieces: Vec<PieceKind>,
}

impl SideSnapshot {
    /// The full set of pieces one side has at the start of a standard game.
    pub fn starting() -> Self {
        let mut pieces = Vec::with_capacity(16);
        pieces.push(PieceKind::King);
        pieces.push(PieceKind::Queen);
        pieces.extend([PieceKind::Rook; 2]);
        pieces.extend([PieceKind::Bishop; 2]);
        pieces.extend([PieceKind::Knight; 2]);
        pieces.extend([PieceKind::Pawn; 8]);
        Self { pieces }
    }

    /// Parse piece labels, failing on the first one that is not a piece kind.
    pub fn parse_labels<I, S>(labels: I) -> Result<Self, MaterialError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pieces = labels
            .into_iter()
            .map(|label| label.as_ref().parse())
            .collect::<Result<Vec<PieceKind>, _>>()?;
        Ok(Self { pieces })
    }

    pub fn counts(&self) -> PieceTable<u32> {
        count_kinds(&self.pieces)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

/// Tally pieces per kind. Absent kinds count as zero.
pub fn count_kinds(pieces: &[PieceKind]) -> PieceTable<u32> {
    let mut counts: PieceTable<u32> = PieceTable::default();
    for &kind in pieces {
        let slot = counts.get_mut(kind);
        *slot = slot.saturating_add(1);
    }
    counts
}

/// Both sides' live pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub white: SideSnapshot,
    pub black: SideSnapshot,
}

impl BoardSnapshot {
    pub fn new(white: SideSnapshot, black: SideSnapshot) -> Self {
        Self { white, black }
    }

    pub fn startpos() -> Self {
        Self {
            white: SideSnapshot::starting(),
            black: SideSnapshot::starting(),
        }
    }

    pub fn push(&mut self, color: Color, kind: PieceKind) {
        match color {
            Color::White => self.white.pieces.push(kind),
            Color::Black => self.black.pieces.push(kind),
        }
    }

    /// Build a snapshot from the piece-placement field of a FEN string.
    ///
    /// Only the first whitespace-separated field is read, so a full FEN
    /// works too. Uppercase letters are white, lowercase are black.
    pub fn from_fen(fen: &str) -> Result<Self, MaterialError> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let mut snapshot = Self::default();

        for c in placement.chars() {
            if c == '/' || c.is_ascii_digit() {
                continue;
            }
            let kind = PieceKind::from_letter(c).ok_or_else(|| MaterialError::InvalidPieceKind {
                label: c.to_string(),
            })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            snapshot.push(color, kind);
        }

        Ok(snapshot)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
