//! Board grid
//!
//! Each square is three characters wide:
//! - ` ♞ ` plain square
//! - `[♞]` selected piece
//! - ` * ` empty legal destination
//! - `(♟)` capturable piece

use crate::core::{CoordinateStyle, GameSettings, GlyphStyle};
use kchess_rules::{legal_destinations, Board, Piece, PieceKind, Square, Team};
use std::fmt::Write;

/// Character for a piece
pub fn glyph(piece: Piece, style: GlyphStyle) -> char {
    match style {
        GlyphStyle::Unicode => match (piece.team, piece.kind) {
            (Team::White, PieceKind::King) => '♔',
            (Team::White, PieceKind::Queen) => '♕',
            (Team::White, PieceKind::Rook) => '♖',
            (Team::White, PieceKind::Bishop) => '♗',
            (Team::White, PieceKind::Knight) => '♘',
            (Team::White, PieceKind::Pawn) => '♙',
            (Team::Black, PieceKind::King) => '♚',
            (Team::Black, PieceKind::Queen) => '♛',
            (Team::Black, PieceKind::Rook) => '♜',
            (Team::Black, PieceKind::Bishop) => '♝',
            (Team::Black, PieceKind::Knight) => '♞',
            (Team::Black, PieceKind::Pawn) => '♟',
        },
        GlyphStyle::Ascii => {
            let c = match piece.kind {
                PieceKind::King => 'k',
                PieceKind::Queen => 'q',
                PieceKind::Rook => 'r',
                PieceKind::Bishop => 'b',
                PieceKind::Knight => 'n',
                PieceKind::Pawn => 'p',
            };
            match piece.team {
                Team::White => c.to_ascii_uppercase(),
                Team::Black => c,
            }
        }
    }
}

fn empty_glyph(sq: Square, style: GlyphStyle) -> char {
    let dark = (sq.row() + sq.col()) % 2 == 1;
    match (style, dark) {
        (GlyphStyle::Unicode, true) => '·',
        (GlyphStyle::Ascii, true) => ':',
        (_, false) => '.',
    }
}

fn row_label(row: u8, style: CoordinateStyle) -> String {
    match style {
        CoordinateStyle::Algebraic => (8 - row).to_string(),
        CoordinateStyle::RowCol => row.to_string(),
    }
}

fn col_label(col: u8, style: CoordinateStyle) -> char {
    match style {
        CoordinateStyle::Algebraic => (b'a' + col) as char,
        CoordinateStyle::RowCol => (b'0' + col) as char,
    }
}

/// Draw the board with optional selection and move hints
pub fn render_board(board: &Board, selected: Option<Square>, settings: &GameSettings) -> String {
    let hints = match selected {
        Some(from) if settings.show_hints => legal_destinations(board, from),
        _ => Vec::new(),
    };

    let mut header = String::from("  ");
    for col in 0..8 {
        header.push(' ');
        header.push(col_label(col, settings.coordinates));
        header.push(' ');
    }

    let mut out = String::new();
    // Writing into a String can't fail
    let _ = writeln!(out, "{header}");

    for row in 0..8u8 {
        let label = row_label(row, settings.coordinates);
        let _ = write!(out, "{label} ");

        for col in 0..8u8 {
            let Some(sq) = Square::new(row, col) else {
                continue;
            };
            let occupant = board.occupant(sq);
            let hinted = hints.contains(&sq);
            let cell = match (occupant, hinted) {
                (Some(piece), _) => glyph(piece, settings.glyphs),
                (None, true) => '*',
                (None, false) => empty_glyph(sq, settings.glyphs),
            };
            let (open, close) = if selected == Some(sq) {
                ('[', ']')
            } else if hinted && occupant.is_some() {
                ('(', ')')
            } else {
                (' ', ' ')
            };
            let _ = write!(out, "{open}{cell}{close}");
        }

        let _ = writeln!(out, " {label}");
    }

    let _ = writeln!(out, "{header}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii() -> GameSettings {
        GameSettings {
            glyphs: GlyphStyle::Ascii,
            ..GameSettings::default()
        }
    }

    #[test]
    fn test_opening_ascii_rows() {
        let text = render_board(&Board::new(), None, &ascii());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0].trim(), "a  b  c  d  e  f  g  h");
        assert_eq!(lines[1], "8  r  n  b  q  k  b  n  r  8");
        assert_eq!(lines[8], "1  R  N  B  Q  K  B  N  R  1");
    }

    #[test]
    fn test_selection_and_hints() {
        let e2 = Square::new(6, 4).unwrap();
        let text = render_board(&Board::new(), Some(e2), &ascii());
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[7].contains("[P]"));
        // e3 and e4 are marked
        assert_eq!(lines[6].matches('*').count(), 1);
        assert_eq!(lines[5].matches('*').count(), 1);
    }

    #[test]
    fn test_hints_can_be_disabled() {
        let settings = GameSettings {
            show_hints: false,
            ..ascii()
        };
        let e2 = Square::new(6, 4).unwrap();
        let text = render_board(&Board::new(), Some(e2), &settings);
        assert!(!text.contains('*'));
        assert!(text.contains("[P]"));
    }

    #[test]
    fn test_unicode_glyphs() {
        assert_eq!(
            glyph(Piece::new(Team::White, PieceKind::King), GlyphStyle::Unicode),
            '♔'
        );
        assert_eq!(
            glyph(Piece::new(Team::Black, PieceKind::Knight), GlyphStyle::Ascii),
            'n'
        );
    }
}
