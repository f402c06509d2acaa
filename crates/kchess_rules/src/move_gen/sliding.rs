//! Sliding piece movement
//!
//! Bishops, rooks and queens scan outward along rays. Each empty square on a
//! ray is reachable. The first occupied square ends the ray; it is reachable
//! only when it holds an opposing piece.

use crate::board::Board;
use crate::types::{Square, Team};

/// Bishop rays
pub(super) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Rook rays
pub(super) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(super) fn can_slide(
    board: &Board,
    from: Square,
    to: Square,
    team: Team,
    rays: &[(i8, i8)],
) -> bool {
    rays.iter().any(|&(dr, dc)| ray_reaches(board, from, to, team, dr, dc))
}

fn ray_reaches(board: &Board, from: Square, to: Square, team: Team, dr: i8, dc: i8) -> bool {
    let mut cur = from;

    while let Some(next) = cur.offset(dr, dc) {
        match board.team_at(next) {
            None if next == to => return true,
            None => cur = next,
            Some(blocker) => return next == to && blocker != team,
        }
    }

    false
}
