//! King movement
//!
//! ## Steps
//!
//! Any of the eight neighbouring squares not held by the king's own team. There
//! is no attack test.
//!
//! ## Castling
//!
//! The king must stand unmoved on column 4. The corner on its row must hold an
//! unmoved rook of the same team, and every square strictly between them must
//! be empty. The king then lands on column 2 (queenside) or column 6
//! (kingside) and the rook hops to column 3 or column 5.

use crate::board::Board;
use crate::types::*;

const KING_COL: u8 = 4;

const STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(super) fn can_step(board: &Board, from: Square, to: Square, team: Team) -> bool {
    STEPS
        .iter()
        .any(|&(dr, dc)| from.offset(dr, dc) == Some(to) && !board.tile(to).holds(team))
}

pub(super) fn castling(board: &Board, from: Square, to: Square, team: Team) -> Option<Castling> {
    if to.row() != from.row() || from.col() != KING_COL || board.has_moved(from) {
        return None;
    }

    let side = match to.col() {
        c if c == CastleSide::Queenside.king_target_col() => CastleSide::Queenside,
        c if c == CastleSide::Kingside.king_target_col() => CastleSide::Kingside,
        _ => return None,
    };

    let row = from.row();
    let rook_from = Square::new(row, side.rook_col())?;
    let rook = Piece::new(team, PieceKind::Rook);
    if board.occupant(rook_from) != Some(rook) || board.has_moved(rook_from) {
        return None;
    }

    let (lo, hi) = match side {
        CastleSide::Queenside => (side.rook_col() + 1, KING_COL),
        CastleSide::Kingside => (KING_COL + 1, side.rook_col()),
    };
    let path_clear = (lo..hi).all(|col| Square::new(row, col).is_some_and(|sq| board.is_empty(sq)));
    if !path_clear {
        return None;
    }

    Some(Castling {
        side,
        rook_from,
        rook_to: Square::new(row, side.rook_target_col())?,
    })
}
