//! Material balance: captured pieces and point advantage.
//!
//! Losses are attributed to the side that lost them: `white_captures`
//! holds the white pieces black has taken, and vice versa.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::MaterialConfig;
use crate::error::MaterialError;
use crate::snapshot::{count_kinds, SideSnapshot};
use crate::types::{Color, PieceKind, PieceTable};

/// Lost pieces of one side, as `(kind, count)` pairs.
///
/// Only kinds with a positive count appear, ascending by piece value with
/// ties in [`PieceKind`] declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureBreakdown {
    pub entries: Vec<(PieceKind, u32)>,
}

impl CaptureBreakdown {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, kind: PieceKind) -> u32 {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|&(_, n)| n)
            .unwrap_or(0)
    }

    /// Total number of lost pieces.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|&(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(PieceKind, u32)> {
        self.entries.iter()
    }
}

/// More pieces of a kind than a side starts with. The capture count for
/// that kind was clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surplus {
    pub color: Color,
    pub kind: PieceKind,
    pub excess: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialResult {
    /// White pieces lost (captured by black)
    pub white_captures: CaptureBreakdown,
    /// Black pieces lost (captured by white)
    pub black_captures: CaptureBreakdown,
    /// White point sum minus black point sum. Positive favors white.
    pub point_advantage: i64,
    /// Clamped anomalies; empty for any legal position.
    pub surplus: Vec<Surplus>,
}

impl MaterialResult {
    pub fn captures(&self, color: Color) -> &CaptureBreakdown {
        match color {
            Color::White => &self.white_captures,
            Color::Black => &self.black_captures,
        }
    }

    /// Advantage from `color`'s point of view.
    pub fn advantage_for(&self, color: Color) -> i64 {
        match color {
            Color::White => self.point_advantage,
            Color::Black => -self.point_advantage,
        }
    }

    /// The side ahead on material, `None` when balanced.
    pub fn leader(&self) -> Option<Color> {
        match self.point_advantage {
            0 => None,
            n if n > 0 => Some(Color::White),
            _ => Some(Color::Black),
        }
    }
}

/// Material balance calculator with injected piece tables.
///
/// Stateless: every call depends only on its arguments and the config.
#[derive(Debug, Clone, Default)]
pub struct MaterialBalance {
    config: MaterialConfig,
}

impl MaterialBalance {
    pub fn new(config: MaterialConfig) -> Self {
        Self { config }
    }

    /// Sum of piece values for one side. Zero for an empty side.
    pub fn point_sum(&self, pieces: &[PieceKind]) -> i64 {
        pieces
            .iter()
            .map(|&kind| i64::from(self.config.value(kind)))
            .sum()
    }

    /// An empty board on both sides means no piece layer yet, not a double
    /// wipeout, and yields the balanced empty result.
    pub fn compute(&self, white: &[PieceKind], black: &[PieceKind]) -> MaterialResult {
        if white.is_empty() && black.is_empty() {
            return MaterialResult::default();
        }

        let white_sum = self.point_sum(white);
        let black_sum = self.point_sum(black);
        trace!(white_sum, black_sum, "material sums");

        let mut surplus = Vec::new();
        let white_captures = self.losses(Color::White, &count_kinds(white), &mut surplus);
        let black_captures = self.losses(Color::Black, &count_kinds(black), &mut surplus);

        MaterialResult {
            white_captures,
            black_captures,
            point_advantage: white_sum - black_sum,
            surplus,
        }
    }

    pub fn compute_snapshots(&self, white: &SideSnapshot, black: &SideSnapshot) -> MaterialResult {
        self.compute(&white.pieces, &black.pieces)
    }

    /// Parse both sides' labels and compute. Fails on the first unknown label.
    pub fn compute_from_labels<S: AsRef<str>>(
        &self,
        white: &[S],
        black: &[S],
    ) -> Result<MaterialResult, MaterialError> {
        let white = SideSnapshot::parse_labels(white)?;
        let black = SideSnapshot::parse_labels(black)?;
        Ok(self.compute_snapshots(&white, &black))
    }

    fn losses(
        &self,
        color: Color,
        current: &PieceTable<u32>,
        surplus: &mut Vec<Surplus>,
    ) -> CaptureBreakdown {
        let mut entries = Vec::new();

        for kind in PieceKind::ALL {
            let start = self.config.starting_count(kind);
            let have = current.get(kind);
            if have > start {
                let excess = have - start;
                debug!(
                    %color,
                    %kind,
                    have,
                    start,
                    "more pieces than a side starts with, clamping captures to 0"
                );
                surplus.push(Surplus {
                    color,
                    kind,
                    excess,
                });
            } else if have < start {
                entries.push((kind, start - have));
            }
        }

        // Stable, so equal values keep declaration order
        entries.sort_by_key(|&(kind, _)| self.config.value(kind));
        CaptureBreakdown { entries }
    }
}

/// Compute material balance with the standard piece tables.
pub fn compute_material_balance(white: &[PieceKind], black: &[PieceKind]) -> MaterialResult {
    MaterialBalance::default().compute(white, black)
}

#[cfg(test)]
#[path = "balance_tests.rs"]
mod tests;
