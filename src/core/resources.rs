//! User preferences

use serde::{Deserialize, Serialize};

/// How pieces are drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphStyle {
    /// Chess symbols (♔ ♛ ...)
    #[default]
    Unicode,
    /// Letters, uppercase for White (`K`, `q`, ...)
    Ascii,
}

/// How squares are typed and labelled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateStyle {
    /// `e2`: file a-h left to right, rank 8 on row 0
    #[default]
    Algebraic,
    /// `6,4`: raw row and column
    RowCol,
}

/// Settings persisted between sessions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Piece glyphs
    pub glyphs: GlyphStyle,

    /// Whether to mark legal destinations of the selected piece
    pub show_hints: bool,

    /// Board labels and accepted input
    pub coordinates: CoordinateStyle,

    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            glyphs: GlyphStyle::Unicode,
            show_hints: true,
            coordinates: CoordinateStyle::Algebraic,
            log_level: "warn".to_string(),
        }
    }
}
