//! Pawn movement
//!
//! - One step forward onto an empty tile
//! - Two steps forward from an unmoved tile when the first step is empty
//!   (the landing tile itself is not inspected)
//! - One step diagonally forward onto an opposing piece

use crate::board::Board;
use crate::types::{Square, Team};

pub(super) fn can_move(board: &Board, from: Square, to: Square, team: Team) -> bool {
    let dir = team.forward();

    // A pawn with no square ahead has nowhere to go
    let Some(one) = from.offset(dir, 0) else {
        return false;
    };

    if board.is_empty(one) {
        if to == one {
            return true;
        }
        if !board.has_moved(from) && from.offset(2 * dir, 0) == Some(to) {
            return true;
        }
    }

    [-1, 1]
        .into_iter()
        .filter_map(|dc| from.offset(dir, dc))
        .any(|diag| diag == to && board.team_at(diag) == Some(team.opponent()))
}
