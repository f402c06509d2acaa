//! Text rendering of the board
//!
//! A downstream consumer of board state: reads tiles and asks the rule engine
//! for legal destinations to highlight. Never mutates anything.

pub mod board;

pub use board::{glyph, render_board};
