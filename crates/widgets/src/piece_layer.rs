//! Classification of the board's piece layer.
//!
//! The host page renders each piece as an element whose class list names
//! its color and kind (`"white knight"`). Drag previews carry an extra
//! `ghost` class and are not live pieces.

use material_core::{BoardSnapshot, Color, PieceKind};
use tracing::trace;

use crate::error::WidgetError;

pub const GHOST_CLASS: &str = "ghost";

/// Classify one element's class list.
///
/// Returns `Ok(None)` for ghost pieces.
pub fn classify(classes: &str) -> Result<Option<(Color, PieceKind)>, WidgetError> {
    let mut color = None;
    let mut kind = None;

    for class in classes.split_whitespace() {
        if class == GHOST_CLASS {
            trace!(classes, "skipping ghost piece");
            return Ok(None);
        }
        match class {
            "white" => color = Some(Color::White),
            "black" => color = Some(Color::Black),
            _ => {
                if let Some(k) = PieceKind::ALL.into_iter().find(|k| k.name() == class) {
                    kind = Some(k);
                }
            }
        }
    }

    match (color, kind) {
        (Some(color), Some(kind)) => Ok(Some((color, kind))),
        _ => Err(WidgetError::UnclassifiedPiece {
            classes: classes.to_string(),
        }),
    }
}

/// Build a board snapshot from the class lists of every piece element.
pub fn snapshot_from_classes<I, S>(elements: I) -> Result<BoardSnapshot, WidgetError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut snapshot = BoardSnapshot::default();
    for classes in elements {
        if let Some((color, kind)) = classify(classes.as_ref())? {
            snapshot.push(color, kind);
        }
    }
    Ok(snapshot)
}

#[cfg(test)]
#[path = "piece_layer_tests.rs"]
mod tests;
