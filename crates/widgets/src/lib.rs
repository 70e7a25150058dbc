//! Game page widgets
//!
//! The logic behind the widgets added to a game page:
//! - piece-count overlay: classify the piece layer, watch it for material
//!   changes, render the balance with a configurable strategy
//! - opening explorer percentages
//! - "Copy as SAN" PGN conversion
//!
//! DOM access, clipboard and file upload stay with the host; everything
//! here takes and returns plain data.

pub mod config;
pub mod error;
pub mod explorer;
pub mod pgn;
pub mod piece_layer;
pub mod render;
pub mod watcher;

pub use config::WidgetConfig;
pub use error::WidgetError;
pub use render::*;
pub use watcher::*;
