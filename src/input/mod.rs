//! Input decoding
//!
//! Turns typed lines into board squares and front-end commands. Squares are
//! bounds-checked here, so the rule engine only ever sees on-board squares from
//! this path.

use crate::core::{CoordinateStyle, CoreError, CoreResult};
use kchess_rules::Square;

/// One line of user input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Click on a square
    Click(Square),
    Reset,
    Help,
    Quit,
}

/// Decode a line into a command
pub fn parse_command(line: &str, style: CoordinateStyle) -> CoreResult<Command> {
    let trimmed = line.trim();

    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "r" | "reset" | "new" => Ok(Command::Reset),
        "h" | "?" | "help" => Ok(Command::Help),
        _ => match parse_square(trimmed, style) {
            Ok(sq) => Ok(Command::Click(sq)),
            Err(CoreError::InvalidSquare { .. }) if !looks_like_square(trimmed) => {
                Err(CoreError::UnknownCommand {
                    input: trimmed.to_string(),
                })
            }
            Err(e) => Err(e),
        },
    }
}

fn looks_like_square(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Decode a square in the given style
pub fn parse_square(text: &str, style: CoordinateStyle) -> CoreResult<Square> {
    match style {
        CoordinateStyle::Algebraic => parse_algebraic(text),
        CoordinateStyle::RowCol => parse_row_col(text),
    }
}

/// `e2` → row 6, col 4
fn parse_algebraic(text: &str) -> CoreResult<Square> {
    let invalid = |reason| CoreError::InvalidSquare {
        input: text.to_string(),
        reason,
    };

    let mut chars = text.trim().chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid("expected a file letter and a rank digit, like e2"));
    };

    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) {
        return Err(invalid("file must be a-h"));
    }
    let rank = rank
        .to_digit(10)
        .filter(|r| (1..=8).contains(r))
        .ok_or_else(|| invalid("rank must be 1-8"))?;

    let col = file as u8 - b'a';
    let row = 8 - rank as u8;
    Square::new(row, col).ok_or_else(|| invalid("off the board"))
}

/// `6,4` or `6 4` → row 6, col 4
fn parse_row_col(text: &str) -> CoreResult<Square> {
    let invalid = |reason| CoreError::InvalidSquare {
        input: text.to_string(),
        reason,
    };

    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err(invalid("expected row and column, like 6,4"));
    };

    let row: i32 = row.parse().map_err(|_| invalid("row is not a number"))?;
    let col: i32 = col.parse().map_err(|_| invalid("column is not a number"))?;
    Square::from_coords(row, col).ok_or_else(|| invalid("row and column must be 0-7"))
}

/// Label for a square in the given style
pub fn format_square(sq: Square, style: CoordinateStyle) -> String {
    match style {
        CoordinateStyle::Algebraic => {
            format!("{}{}", (b'a' + sq.col()) as char, 8 - sq.row())
        }
        CoordinateStyle::RowCol => format!("{},{}", sq.row(), sq.col()),
    }
}
