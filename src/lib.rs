//! Terminal front-end for the `kchess_rules` engine
//!
//! - `core` - settings, errors, logging
//! - `input` - typed squares and commands
//! - `rendering` - text board with selection and move hints
//! - `session` - the play loop tying them to a [`kchess_rules::Game`]

pub mod core;
pub mod input;
pub mod rendering;
pub mod session;

pub use kchess_rules as rules;
