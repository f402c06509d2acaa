//! Knight movement
//!
//! Knights jump, so only the landing tile matters: it must not hold a piece of
//! the knight's own team.

use crate::board::Board;
use crate::types::{Square, Team};

const JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(super) fn can_move(board: &Board, from: Square, to: Square, team: Team) -> bool {
    JUMPS
        .iter()
        .any(|&(dr, dc)| from.offset(dr, dc) == Some(to) && !board.tile(to).holds(team))
}
