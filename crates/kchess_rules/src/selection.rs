//! Two-click piece selection
//!
//! A front-end feeds clicked squares in; the first click picks up a piece of the
//! side on move, the second either moves it, drops it (same square again) or is
//! ignored.

use crate::types::Square;

/// Currently selected square, if any
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected(Square),
}

impl Selection {
    pub fn square(&self) -> Option<Square> {
        match self {
            Selection::Selected(sq) => Some(*sq),
            Selection::Idle => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }
}
