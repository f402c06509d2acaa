//! Error types for the rules crate
//!
//! Only the committing side of the API returns these. Legality probes answer
//! `bool` and never fail; every variant here collapses to "illegal" there.

use crate::types::{Square, Team};
use thiserror::Error;

/// Reasons a move could not be executed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Raw coordinates outside the board (includes the `-1` "nothing selected" marker)
    #[error("Coordinates out of range: row {row}, col {col} (must be 0-7)")]
    OutOfBounds { row: i32, col: i32 },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    EmptySquare { square: Square },

    /// Piece belongs to the side not on move
    #[error("Piece at square {square} belongs to {team}, who is not on move")]
    NotYourTurn { square: Square, team: Team },

    /// Move rejected by the piece's movement rules
    #[error("Illegal move: from square {from} to square {to}")]
    IllegalMove { from: Square, to: Square },

    /// A king has been captured and no further moves are accepted
    #[error("Game is over")]
    GameOver,
}

/// Result type alias for rule operations
pub type RulesResult<T> = Result<T, RulesError>;

impl RulesError {
    /// Validate raw coordinates into a square
    pub fn check_square(row: i32, col: i32) -> RulesResult<Square> {
        Square::from_coords(row, col).ok_or(RulesError::OutOfBounds { row, col })
    }
}
