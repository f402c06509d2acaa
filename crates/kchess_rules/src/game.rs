//! Turn controller
//!
//! [`Game`] owns the board, whose turn it is and whether play has ended. It is
//! the only thing that mutates the board during play, and it does so only
//! after re-validating the requested move.
//!
//! Flow of one accepted move:
//!
//! ```text
//! make_move(from, to)
//!   → evaluate (pure)        reject: RulesError
//!   → relocate castling rook (if any)
//!   → relocate mover, mark destination moved
//!   → flip side to move
//!   → scan for missing kings → InProgress | Ended
//! ```

use crate::board::Board;
use crate::error::{RulesError, RulesResult};
use crate::game_over::{self, GameStatus};
use crate::move_gen;
use crate::selection::Selection;
use crate::types::*;
use tracing::{debug, info};

/// Result of an executed move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: LegalMove,
    pub captured: Option<Piece>,
    pub status: GameStatus,
}

/// What a click did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(Square),
    Deselected,
    Moved(MoveOutcome),
    Ignored,
}

/// A game in progress
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Team,
    status: GameStatus,
    selection: Selection,
    move_count: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard opening position, White to move
    pub fn new() -> Self {
        Self::with_board(Board::new(), Team::White)
    }

    /// Start from an arbitrary position
    ///
    /// The status is derived from the board, so a position that is already
    /// missing a king starts out ended.
    pub fn with_board(board: Board, to_move: Team) -> Self {
        let status = game_over::status(&board);
        Self {
            board,
            to_move,
            status,
            selection: Selection::Idle,
            move_count: 0,
        }
    }

    /// Throw the current game away and start over
    pub fn reset(&mut self) {
        info!("[GAME] Resetting to the opening position");
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Team {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Moves executed since the game started
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<Team> {
        self.status.winner()
    }

    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        move_gen::is_legal(&self.board, from, to)
    }

    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        move_gen::legal_destinations(&self.board, from)
    }

    /// Validate and execute a move for the side on move
    pub fn make_move(&mut self, from: Square, to: Square) -> RulesResult<MoveOutcome> {
        if self.status.is_over() {
            return Err(RulesError::GameOver);
        }

        let piece = self
            .board
            .occupant(from)
            .ok_or(RulesError::EmptySquare { square: from })?;

        if piece.team != self.to_move {
            return Err(RulesError::NotYourTurn {
                square: from,
                team: piece.team,
            });
        }

        let mv = move_gen::evaluate(&self.board, from, to)
            .ok_or(RulesError::IllegalMove { from, to })?;

        Ok(self.apply(mv))
    }

    /// Raw-coordinate command for pointer front-ends
    ///
    /// Any failure, including coordinates off the board, is reported as `false`.
    pub fn attempt_move(&mut self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        let result = RulesError::check_square(from_row, from_col).and_then(|from| {
            RulesError::check_square(to_row, to_col).and_then(|to| self.make_move(from, to))
        });

        match result {
            Ok(_) => true,
            Err(e) => {
                debug!("[GAME] Move rejected: {}", e);
                false
            }
        }
    }

    /// Feed one clicked square into the selection state machine
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        if self.status.is_over() {
            return ClickOutcome::Ignored;
        }

        match self.selection {
            Selection::Idle => {
                if self.board.team_at(sq) == Some(self.to_move) {
                    self.selection = Selection::Selected(sq);
                    ClickOutcome::Selected(sq)
                } else {
                    ClickOutcome::Ignored
                }
            }
            Selection::Selected(from) if from == sq => {
                self.selection.clear();
                ClickOutcome::Deselected
            }
            Selection::Selected(from) => match self.make_move(from, sq) {
                Ok(outcome) => ClickOutcome::Moved(outcome),
                Err(e) => {
                    debug!("[GAME] Click on {} ignored: {}", sq, e);
                    ClickOutcome::Ignored
                }
            },
        }
    }

    fn apply(&mut self, mv: LegalMove) -> MoveOutcome {
        if let Some(castling) = mv.castling {
            self.board.relocate(castling.rook_from, castling.rook_to);
            info!(
                "[GAME] {} castles {:?}: rook {} -> {}",
                mv.piece.team, castling.side, castling.rook_from, castling.rook_to
            );
        }

        let captured = self.board.relocate(mv.from, mv.to);
        self.selection.clear();
        self.move_count += 1;
        self.to_move = self.to_move.opponent();

        match captured {
            Some(victim) => info!(
                "[GAME] Move #{}: {} {} -> {} takes {}",
                self.move_count, mv.piece, mv.from, mv.to, victim
            ),
            None => info!(
                "[GAME] Move #{}: {} {} -> {}",
                self.move_count, mv.piece, mv.from, mv.to
            ),
        }

        if game_over::is_game_over(&self.board) {
            self.status = GameStatus::Ended {
                winner: game_over::surviving_king(&self.board),
            };
            info!("[GAME] ========== GAME OVER ==========");
            info!("[GAME] {}", self.status.message());
        }

        MoveOutcome {
            mv,
            captured,
            status: self.status,
        }
    }
}
