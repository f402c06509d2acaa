//! Play loop
//!
//! Reads one command per line, routes clicks through [`Game::click`] and
//! redraws the board. Generic over reader and writer so it can be driven from
//! tests as easily as from stdin/stdout.

use crate::core::GameSettings;
use crate::input::{format_square, parse_command, Command};
use crate::rendering::render_board;
use kchess_rules::{ClickOutcome, Game, GameStatus};
use std::io::{self, BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Type a square to select one of your pieces, then a square to move it to.
Type the selected square again to drop it.
Commands: reset, help, quit";

/// Interactive session state
pub struct Session {
    game: Game,
    settings: GameSettings,
}

impl Session {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            game: Game::new(),
            settings,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{HELP}\n")?;
        self.draw(out)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line, self.settings.coordinates) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(out, "{HELP}")?,
                Ok(Command::Reset) => {
                    self.game.reset();
                    self.draw(out)?;
                }
                Ok(Command::Click(sq)) => {
                    let outcome = self.game.click(sq);
                    debug!("[INPUT] {} -> {:?}", sq, outcome);
                    self.report(outcome, out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            }
        }

        Ok(())
    }

    fn report<W: Write>(&self, outcome: ClickOutcome, out: &mut W) -> io::Result<()> {
        let style = self.settings.coordinates;

        match outcome {
            ClickOutcome::Ignored if self.game.is_game_over() => {
                writeln!(out, "The game is over. Type reset to play again.")
            }
            ClickOutcome::Ignored => writeln!(out, "Nothing to do there."),
            ClickOutcome::Selected(_) | ClickOutcome::Deselected => self.draw(out),
            ClickOutcome::Moved(result) => {
                if let Some(castling) = result.mv.castling {
                    writeln!(
                        out,
                        "{} castles ({:?}), rook {} -> {}",
                        result.mv.piece.team,
                        castling.side,
                        format_square(castling.rook_from, style),
                        format_square(castling.rook_to, style)
                    )?;
                }
                if let Some(victim) = result.captured {
                    writeln!(out, "{} takes {}", result.mv.piece, victim)?;
                }
                self.draw(out)?;
                if let GameStatus::Ended { .. } = result.status {
                    writeln!(out, "Game over! {}", result.status.message())?;
                }
                Ok(())
            }
        }
    }

    fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let selected = self.game.selection().square();
        write!(out, "{}", render_board(self.game.board(), selected, &self.settings))?;
        if !self.game.is_game_over() {
            writeln!(out, "{} to move", self.game.to_move())?;
        }
        Ok(())
    }
}
