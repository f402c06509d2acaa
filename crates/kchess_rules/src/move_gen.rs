//! Move legality
//!
//! Decides whether a single `(from, to)` move is legal for the piece on `from`.
//! Everything here is a pure read of the [`Board`]; nothing is mutated and no
//! state is carried between calls.
//!
//! ## Module Organization
//!
//! - `pawn` - forward steps, the unmoved double step and diagonal captures
//! - `knight` - L-shaped jumps
//! - `sliding` - ray scans shared by bishop, rook and queen
//! - `king` - single steps and castling
//!
//! ## Simplified rule set
//!
//! There is no notion of check: a king may step onto an attacked square and
//! castle through or into attack. There is no en passant or promotion, and a
//! pawn's double step does not look at its landing square. These are the rules
//! of the game, not gaps to be filled in here.
//!
//! Castling rights come from the tiles' `moved` flags, but a flag alone is not
//! enough: the king must still be on column 4 and an own rook must still stand
//! on the corner. A vacated corner keeps its unmoved flag and does not allow a
//! castle.

mod king;
mod knight;
mod pawn;
mod sliding;

use crate::board::Board;
use crate::types::*;
use tracing::trace;

use sliding::{DIAGONALS, ORTHOGONALS};

/// Validate a move and describe it
///
/// Returns `None` when `from` is empty or the piece there cannot reach `to`.
/// A legal castle carries the rook relocation the caller must also apply.
pub fn evaluate(board: &Board, from: Square, to: Square) -> Option<LegalMove> {
    let piece = board.occupant(from)?;
    let team = piece.team;
    let mut castling = None;

    let legal = match piece.kind {
        PieceKind::Pawn => pawn::can_move(board, from, to, team),
        PieceKind::Knight => knight::can_move(board, from, to, team),
        PieceKind::Bishop => sliding::can_slide(board, from, to, team, &DIAGONALS),
        PieceKind::Rook => sliding::can_slide(board, from, to, team, &ORTHOGONALS),
        PieceKind::Queen => {
            sliding::can_slide(board, from, to, team, &DIAGONALS)
                || sliding::can_slide(board, from, to, team, &ORTHOGONALS)
        }
        PieceKind::King => {
            if king::can_step(board, from, to, team) {
                true
            } else {
                castling = king::castling(board, from, to, team);
                castling.is_some()
            }
        }
    };

    if !legal {
        trace!("[RULES] {} {} -> {} rejected", piece, from, to);
        return None;
    }

    Some(LegalMove {
        from,
        to,
        piece,
        castling,
    })
}

/// Probe used for move highlighting
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    evaluate(board, from, to).is_some()
}

/// Probe over raw coordinates
///
/// Both squares are bounds-checked before the board is touched. Anything off
/// the board, including a `-1` "nothing selected" source, is simply illegal.
pub fn is_legal_coords(
    board: &Board,
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
) -> bool {
    match (
        Square::from_coords(from_row, from_col),
        Square::from_coords(to_row, to_col),
    ) {
        (Some(from), Some(to)) => is_legal(board, from, to),
        _ => false,
    }
}

/// Every square the piece on `from` may move to, row-major
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    if board.is_empty(from) {
        return Vec::new();
    }

    Square::all().filter(|&to| is_legal(board, from, to)).collect()
}
