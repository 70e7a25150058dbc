//! Renderer strategies for the piece-count widget.
//!
//! Each strategy turns a [`MaterialResult`] into plain-text overlay lines;
//! placing them on a page is up to the host.

use material_core::{CaptureBreakdown, Color, MaterialResult, PieceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which renderer the widget uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Single `white: +N` summary line
    #[default]
    Text,
    /// One line per side with lost-piece symbols
    Icons,
    /// Lost pieces pinned to the board edge of the side that lost them
    Overlay,
}

impl std::str::FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(RenderStyle::Text),
            "icons" | "icon" => Ok(RenderStyle::Icons),
            "overlay" | "positioned" => Ok(RenderStyle::Overlay),
            _ => Err(format!("unknown render style: {s}")),
        }
    }
}

/// Which side is drawn at the bottom of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    White,
    Black,
}

impl Orientation {
    pub fn bottom(self) -> Color {
        match self {
            Orientation::White => Color::White,
            Orientation::Black => Color::Black,
        }
    }

    pub fn top(self) -> Color {
        self.bottom().other()
    }

    pub fn flipped(self) -> Self {
        match self {
            Orientation::White => Orientation::Black,
            Orientation::Black => Orientation::White,
        }
    }
}

/// Where a line goes relative to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Side panel next to the board
    Panel,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLine {
    pub anchor: Anchor,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    pub lines: Vec<OverlayLine>,
}

impl Overlay {
    pub fn line(&self, anchor: Anchor) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.anchor == anchor)
            .map(|l| l.text.as_str())
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&line.text)?;
        }
        Ok(())
    }
}

/// A swappable presentation of the material balance
pub trait MaterialRenderer: Send + Sync {
    fn render(&self, result: &MaterialResult) -> Overlay;

    fn name(&self) -> &str;
}

/// Unicode chess symbol for a piece
pub fn piece_symbol(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}

/// Signed advantage as the widget shows it: `+3`, `0`, `-2`.
pub fn format_advantage(advantage: i64) -> String {
    if advantage > 0 {
        format!("+{advantage}")
    } else {
        advantage.to_string()
    }
}

/// Lost pieces in `Nx` notation, e.g. `2x♙ ♘ ♕`.
pub fn format_losses(color: Color, losses: &CaptureBreakdown) -> String {
    losses
        .iter()
        .map(|&(kind, n)| {
            let symbol = piece_symbol(color, kind);
            if n > 1 {
                format!("{n}x{symbol}")
            } else {
                symbol.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Losses of `color`, followed by `+N` when that side is ahead.
fn side_text(result: &MaterialResult, color: Color) -> String {
    let mut parts = Vec::new();
    let losses = result.captures(color);
    if !losses.is_empty() {
        parts.push(format_losses(color, losses));
    }
    if result.leader() == Some(color) {
        parts.push(format_advantage(result.advantage_for(color)));
    }
    parts.join(" ")
}

/// `white: +N` in the side panel
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSummary;

impl MaterialRenderer for TextSummary {
    fn render(&self, result: &MaterialResult) -> Overlay {
        Overlay {
            lines: vec![OverlayLine {
                anchor: Anchor::Panel,
                text: format!("white: {}", format_advantage(result.point_advantage)),
            }],
        }
    }

    fn name(&self) -> &str {
        "text"
    }
}

/// One panel line per side: `white: ♙ 2x♘` / `black: ♛ +4`
#[derive(Debug, Clone, Copy, Default)]
pub struct IconRow;

impl MaterialRenderer for IconRow {
    fn render(&self, result: &MaterialResult) -> Overlay {
        let lines = Color::ALL
            .into_iter()
            .map(|color| {
                let body = side_text(result, color);
                let text = if body.is_empty() {
                    format!("{color}:")
                } else {
                    format!("{color}: {body}")
                };
                OverlayLine {
                    anchor: Anchor::Panel,
                    text,
                }
            })
            .collect();
        Overlay { lines }
    }

    fn name(&self) -> &str {
        "icons"
    }
}

/// Losses pinned next to the side that lost them, top line first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionedOverlay {
    pub orientation: Orientation,
}

impl PositionedOverlay {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }
}

impl MaterialRenderer for PositionedOverlay {
    fn render(&self, result: &MaterialResult) -> Overlay {
        Overlay {
            lines: vec![
                OverlayLine {
                    anchor: Anchor::Top,
                    text: side_text(result, self.orientation.top()),
                },
                OverlayLine {
                    anchor: Anchor::Bottom,
                    text: side_text(result, self.orientation.bottom()),
                },
            ],
        }
    }

    fn name(&self) -> &str {
        "overlay"
    }
}

/// Pick a renderer by style
pub fn make_renderer(style: RenderStyle, orientation: Orientation) -> Box<dyn MaterialRenderer> {
    match style {
        RenderStyle::Text => Box::new(TextSummary),
        RenderStyle::Icons => Box::new(IconRow),
        RenderStyle::Overlay => Box::new(PositionedOverlay::new(orientation)),
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
