//! Rule engine for a simplified two-player chess variant
//!
//! Pure game logic with no rendering or input coupling:
//! - **Board model** - 8x8 tiles with occupant and a per-tile `moved` flag
//! - **Move validation** - per-piece legality, castling reported as a value
//! - **Turn control** - re-validates, mutates the board, flips the side to move
//! - **Game over** - a side loses when its king is captured
//!
//! ## Module Organization
//!
//! - `types` - teams, pieces, tiles, squares and validated moves
//! - `board` - the board and its opening layout
//! - `move_gen` - legality probes (`evaluate`, `is_legal`, `legal_destinations`)
//! - `game` - the turn controller and click handling
//! - `game_over` - king-capture detection
//! - `error` - diagnostics for rejected commits

pub mod board;
pub mod error;
pub mod game;
pub mod game_over;
pub mod move_gen;
pub mod selection;
pub mod types;

pub use board::Board;
pub use error::{RulesError, RulesResult};
pub use game::{ClickOutcome, Game, MoveOutcome};
pub use game_over::{is_game_over, surviving_king, GameStatus};
pub use move_gen::{evaluate, is_legal, is_legal_coords, legal_destinations};
pub use selection::Selection;
pub use types::{CastleSide, Castling, LegalMove, Piece, PieceKind, Square, Team, Tile};
