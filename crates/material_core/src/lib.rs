//! Material balance for a live chess board
//!
//! A board-state collaborator supplies the live pieces of each side
//! whenever the piece layer changes; this crate derives which pieces each
//! side has lost and the signed point advantage. Presentation is left to
//! the caller.
//!
//! ```
//! use material_core::{compute_material_balance, PieceKind, SideSnapshot};
//!
//! let white = SideSnapshot::starting().pieces;
//! let mut black = SideSnapshot::starting().pieces;
//! black.retain(|&k| k != PieceKind::Queen);
//!
//! let result = compute_material_balance(&white, &black);
//! assert_eq!(result.point_advantage, 9);
//! assert_eq!(result.black_captures.count(PieceKind::Queen), 1);
//! ```

pub mod balance;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod types;

pub use balance::*;
pub use config::*;
pub use error::MaterialError;
pub use snapshot::*;
pub use types::*;
