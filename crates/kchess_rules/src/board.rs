//! Board model
//!
//! Owns all 64 tiles. Provides:
//! - Standard opening layout and reset
//! - Tile queries by square
//! - Independent occupant / moved-flag mutators used by the game controller
//!
//! Every accessor takes a [`Square`], so out-of-range access is rejected when
//! the square is built rather than when the array is indexed.

use crate::types::*;

/// 8x8 grid of tiles, row 0 first
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    tiles: [[Tile; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board in the standard opening position
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Board with no pieces and every `moved` flag clear
    pub fn empty() -> Self {
        Self {
            tiles: [[Tile::EMPTY; 8]; 8],
        }
    }

    /// Restore the standard opening position and clear all `moved` flags
    pub fn reset(&mut self) {
        self.tiles = [[Tile::EMPTY; 8]; 8];

        for team in Team::ALL {
            let back = team.back_rank() as usize;
            let pawns = team.pawn_rank() as usize;

            for (col, kind) in PieceKind::BACK_RANK.iter().enumerate() {
                self.tiles[back][col] = Tile::with(Piece::new(team, *kind));
                self.tiles[pawns][col] = Tile::with(Piece::new(team, PieceKind::Pawn));
            }
        }
    }

    pub fn tile(&self, sq: Square) -> &Tile {
        &self.tiles[sq.row() as usize][sq.col() as usize]
    }

    fn tile_mut(&mut self, sq: Square) -> &mut Tile {
        &mut self.tiles[sq.row() as usize][sq.col() as usize]
    }

    pub fn occupant(&self, sq: Square) -> Option<Piece> {
        self.tile(sq).occupant
    }

    pub fn team_at(&self, sq: Square) -> Option<Team> {
        self.tile(sq).team()
    }

    pub fn has_moved(&self, sq: Square) -> bool {
        self.tile(sq).moved
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.tile(sq).is_empty()
    }

    /// Replace the occupant, leaving the `moved` flag untouched
    pub fn set_occupant(&mut self, sq: Square, occupant: Option<Piece>) {
        self.tile_mut(sq).occupant = occupant;
    }

    pub fn set_moved(&mut self, sq: Square, moved: bool) {
        self.tile_mut(sq).moved = moved;
    }

    /// Put `piece` on `sq` without marking it moved
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.set_occupant(sq, Some(piece));
    }

    /// Remove whatever stands on `sq`, returning it
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.tile_mut(sq).occupant.take()
    }

    /// Relocate the occupant of `from` onto `to`
    ///
    /// The destination is marked moved; the source keeps its flag. Returns the
    /// piece that was standing on `to`, if any.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mover = self.clear(from);
        let captured = self.occupant(to);
        let dst = self.tile_mut(to);
        dst.occupant = mover;
        dst.moved = true;
        captured
    }

    /// All squares with their tiles, row-major
    pub fn squares(&self) -> impl Iterator<Item = (Square, &Tile)> + '_ {
        Square::all().map(move |sq| (sq, self.tile(sq)))
    }

    /// Squares currently holding `piece`
    pub fn find(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        self.squares()
            .filter(move |(_, tile)| tile.occupant == Some(piece))
            .map(|(sq, _)| sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_initial_back_ranks() {
        let board = Board::new();

        for (col, kind) in PieceKind::BACK_RANK.iter().enumerate() {
            let col = col as u8;
            assert_eq!(
                board.occupant(sq(0, col)),
                Some(Piece::new(Team::Black, *kind))
            );
            assert_eq!(
                board.occupant(sq(7, col)),
                Some(Piece::new(Team::White, *kind))
            );
            assert_eq!(
                board.occupant(sq(1, col)),
                Some(Piece::new(Team::Black, PieceKind::Pawn))
            );
            assert_eq!(
                board.occupant(sq(6, col)),
                Some(Piece::new(Team::White, PieceKind::Pawn))
            );
        }
    }

    #[test]
    fn test_initial_middle_is_empty_and_unmoved() {
        let board = Board::new();
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty(sq(row, col)));
            }
        }
        assert!(board.squares().all(|(_, tile)| !tile.moved));
    }

    #[test]
    fn test_reset_clears_moved_flags() {
        let mut board = Board::new();
        board.relocate(sq(6, 4), sq(4, 4));
        assert!(board.has_moved(sq(4, 4)));

        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_relocate_keeps_source_flag_and_reports_capture() {
        let mut board = Board::empty();
        let rook = Piece::new(Team::White, PieceKind::Rook);
        let pawn = Piece::new(Team::Black, PieceKind::Pawn);
        board.place(sq(4, 0), rook);
        board.set_moved(sq(4, 0), true);
        board.place(sq(4, 5), pawn);

        let captured = board.relocate(sq(4, 0), sq(4, 5));

        assert_eq!(captured, Some(pawn));
        assert_eq!(board.occupant(sq(4, 5)), Some(rook));
        assert!(board.has_moved(sq(4, 5)));
        assert!(board.is_empty(sq(4, 0)));
        assert!(board.has_moved(sq(4, 0)), "source flag is never cleared");
    }

    #[test]
    fn test_find_kings() {
        let board = Board::new();
        let kings: Vec<Square> = board
            .find(Piece::new(Team::White, PieceKind::King))
            .collect();
        assert_eq!(kings, vec![sq(7, 4)]);
    }
}
