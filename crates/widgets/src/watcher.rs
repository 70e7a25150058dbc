//! Board watcher: decides when the material widget needs recomputing.
//!
//! The host calls [`BoardWatcher::observe`] on every change to the piece
//! layer. Moves without captures or promotions leave the per-kind counts
//! untouched, so those changes are skipped.

use material_core::{BoardSnapshot, MaterialBalance, MaterialResult, PieceTable};
use tracing::debug;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::piece_layer;
use crate::render::{make_renderer, MaterialRenderer, Overlay};

/// A fresh result and its rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardUpdate {
    pub result: MaterialResult,
    pub overlay: Overlay,
}

type Counts = (PieceTable<u32>, PieceTable<u32>);

pub struct BoardWatcher {
    calculator: MaterialBalance,
    renderer: Box<dyn MaterialRenderer>,
    last_counts: Option<Counts>,
}

impl BoardWatcher {
    pub fn new(calculator: MaterialBalance, renderer: Box<dyn MaterialRenderer>) -> Self {
        Self {
            calculator,
            renderer,
            last_counts: None,
        }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(
            MaterialBalance::new(config.material.clone()),
            make_renderer(config.style, config.orientation),
        )
    }

    /// Swap the renderer. The next observation renders unconditionally.
    pub fn set_renderer(&mut self, renderer: Box<dyn MaterialRenderer>) {
        self.renderer = renderer;
        self.last_counts = None;
    }

    /// Forget the last board, e.g. when a new game replaces the board.
    pub fn reset(&mut self) {
        self.last_counts = None;
    }

    /// Recompute if material changed since the last call.
    pub fn observe(&mut self, snapshot: &BoardSnapshot) -> Option<BoardUpdate> {
        let counts = (snapshot.white.counts(), snapshot.black.counts());
        if self.last_counts.as_ref() == Some(&counts) {
            debug!("material unchanged, skipping recompute");
            return None;
        }
        self.last_counts = Some(counts);

        let result = self
            .calculator
            .compute_snapshots(&snapshot.white, &snapshot.black);
        let overlay = self.renderer.render(&result);
        debug!(
            advantage = result.point_advantage,
            renderer = self.renderer.name(),
            "material recomputed"
        );
        Some(BoardUpdate { result, overlay })
    }

    /// Parse a FEN placement and observe it.
    pub fn observe_fen(&mut self, fen: &str) -> Result<Option<BoardUpdate>, WidgetError> {
        let snapshot = BoardSnapshot::from_fen(fen)?;
        Ok(self.observe(&snapshot))
    }

    /// Classify piece elements and observe the resulting snapshot.
    ///
    /// An unclassifiable element fails the whole cycle; the previous
    /// board is kept so the next good snapshot compares against it.
    pub fn observe_classes<I, S>(&mut self, elements: I) -> Result<Option<BoardUpdate>, WidgetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let snapshot = piece_layer::snapshot_from_classes(elements)?;
        Ok(self.observe(&snapshot))
    }
}

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;
