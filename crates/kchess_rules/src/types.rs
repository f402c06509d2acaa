//! Core value types shared by the board, the validator and the game controller
//!
//! ## Orientation
//!
//! Squares are addressed as `(row, col)` with row 0 at the top of the board and
//! column 0 on the left, regardless of which side is "down" for the viewer.
//! White starts on rows 6 and 7 and advances toward row 0; Black starts on rows
//! 0 and 1 and advances toward row 7.
//!
//! ## Occupancy
//!
//! An empty tile is `None` rather than a sentinel team value, so "is there a
//! piece here" and "whose piece is it" are separate questions with separate
//! answers.

use crate::error::RulesError;
use std::fmt;

/// Board edge length
pub const BOARD_SIZE: u8 = 8;

/// One side of the game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    /// The other side
    pub const fn opponent(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Row delta of one step "forward" for this team
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => -1,
            Team::Black => 1,
        }
    }

    /// Row holding this team's rook, knight, bishop, queen and king at the start
    pub const fn back_rank(self) -> u8 {
        match self {
            Team::White => 7,
            Team::Black => 0,
        }
    }

    /// Row holding this team's pawns at the start
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Team::White => 6,
            Team::Black => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Team::White => "White",
            Team::Black => "Black",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Movement class of a piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Back rank from column 0 to column 7
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A team-owned piece standing on a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub team: Team,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(team: Team, kind: PieceKind) -> Self {
        Self { team, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.team, self.kind)
    }
}

/// A single board cell
///
/// `moved` records whether any occupant has ever been relocated onto this tile.
/// It is set by the game controller and only cleared by a board reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub occupant: Option<Piece>,
    pub moved: bool,
}

impl Tile {
    pub const EMPTY: Tile = Tile {
        occupant: None,
        moved: false,
    };

    pub const fn with(piece: Piece) -> Self {
        Self {
            occupant: Some(piece),
            moved: false,
        }
    }

    pub fn team(&self) -> Option<Team> {
        self.occupant.map(|p| p.team)
    }

    pub fn kind(&self) -> Option<PieceKind> {
        self.occupant.map(|p| p.kind)
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Occupied by `team`
    pub fn holds(&self, team: Team) -> bool {
        self.team() == Some(team)
    }
}

/// A square that is known to lie on the board
///
/// Serialized as a `(row, col)` pair; deserializing goes through
/// [`Square::new`], so off-board pairs are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u8, u8)", into = "(u8, u8)")
)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square, rejecting anything outside `0..8`
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Build a square from raw signed coordinates
    ///
    /// Negative values (including the `-1` "nothing selected" marker used by
    /// pointer front-ends) and values past the edge yield `None`.
    pub fn from_coords(row: i32, col: i32) -> Option<Square> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Square::new(row, col)
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square `(dr, dc)` away, if it is still on the board
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::from_coords(self.row as i32 + dr as i32, self.col as i32 + dc as i32)
    }

    /// Every square in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

}

impl TryFrom<(u8, u8)> for Square {
    type Error = RulesError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(RulesError::OutOfBounds {
            row: row.into(),
            col: col.into(),
        })
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Which rook takes part in a castle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastleSide {
    /// Toward column 0; king lands on column 2, rook on column 3
    Queenside,
    /// Toward column 7; king lands on column 6, rook on column 5
    Kingside,
}

impl CastleSide {
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 7,
        }
    }

    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Queenside => 2,
            CastleSide::Kingside => 6,
        }
    }

    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Queenside => 3,
            CastleSide::Kingside => 5,
        }
    }
}

/// Secondary rook relocation carried by a legal castle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Castling {
    pub side: CastleSide,
    pub rook_from: Square,
    pub rook_to: Square,
}

/// A move that passed validation
///
/// The castle side effect travels with the verdict instead of being stashed
/// somewhere for the caller to collect afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegalMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub castling: Option<Castling>,
}
