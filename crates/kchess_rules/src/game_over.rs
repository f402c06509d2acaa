//! King-capture detection
//!
//! The game ends when a king leaves the board. There is no check, checkmate or
//! stalemate; a side wins by actually taking the opposing king.
//!
//! # State Transitions
//!
//! ```text
//! InProgress → Ended { winner }
//! ```
//!
//! `Ended` is terminal until the game is reset.

use crate::board::Board;
use crate::types::{PieceKind, Team};

/// Whether play continues
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    InProgress,
    /// A king is missing; `winner` is the side that still has one
    Ended { winner: Option<Team> },
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Ended { .. })
    }

    pub fn winner(&self) -> Option<Team> {
        match self {
            GameStatus::Ended { winner } => *winner,
            GameStatus::InProgress => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            GameStatus::InProgress => "Game in progress".to_string(),
            GameStatus::Ended {
                winner: Some(team),
            } => format!("{team} wins! Congratulations!"),
            GameStatus::Ended { winner: None } => "Both kings are gone".to_string(),
        }
    }
}

/// Whether `team` still has a king anywhere on the board
pub fn has_king(board: &Board, team: Team) -> bool {
    board
        .squares()
        .any(|(_, tile)| tile.holds(team) && tile.kind() == Some(PieceKind::King))
}

/// True iff at least one side has no king
pub fn is_game_over(board: &Board) -> bool {
    !has_king(board, Team::White) || !has_king(board, Team::Black)
}

/// The only side with a king left, if exactly one has one
pub fn surviving_king(board: &Board) -> Option<Team> {
    match (has_king(board, Team::White), has_king(board, Team::Black)) {
        (true, false) => Some(Team::White),
        (false, true) => Some(Team::Black),
        _ => None,
    }
}

/// Status implied by the current board
pub fn status(board: &Board) -> GameStatus {
    if is_game_over(board) {
        GameStatus::Ended {
            winner: surviving_king(board),
        }
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_opening_position_is_not_over() {
        let board = Board::new();
        assert!(!is_game_over(&board));
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_missing_black_king_ends_game() {
        let mut board = Board::new();
        board.clear(sq(0, 4));

        assert!(is_game_over(&board));
        assert_eq!(surviving_king(&board), Some(Team::White));
        assert_eq!(
            status(&board),
            GameStatus::Ended {
                winner: Some(Team::White)
            }
        );
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::empty();
        assert!(is_game_over(&board));
        assert_eq!(surviving_king(&board), None);
        assert_eq!(status(&board).message(), "Both kings are gone");
    }

    #[test]
    fn test_king_found_anywhere() {
        let mut board = Board::empty();
        board.place(sq(3, 3), Piece::new(Team::White, PieceKind::King));
        board.place(sq(5, 1), Piece::new(Team::Black, PieceKind::King));
        assert!(!is_game_over(&board));
    }
}
