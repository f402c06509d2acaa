use anyhow::Result;
use clap::Parser;
use kchess::core::{self, CoordinateStyle, GlyphStyle};
use kchess::session::Session;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Two-player chess in the terminal. Take the opposing king to win.
#[derive(Parser, Debug)]
#[command(name = "kchess", version)]
struct Args {
    /// Settings file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Draw pieces as letters instead of chess symbols
    #[arg(long)]
    ascii: bool,

    /// Don't mark legal destinations of the selected piece
    #[arg(long)]
    no_hints: bool,

    /// Type and label squares as row,col instead of e2
    #[arg(long)]
    row_col: bool,

    /// Log filter when RUST_LOG is unset (e.g. info, kchess_rules=debug)
    #[arg(long)]
    log_level: Option<String>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let path = args.config.clone().unwrap_or_else(core::default_settings_path);
    let mut settings = core::load_settings(&path);

    if args.ascii {
        settings.glyphs = GlyphStyle::Ascii;
    }
    if args.no_hints {
        settings.show_hints = false;
    }
    if args.row_col {
        settings.coordinates = CoordinateStyle::RowCol;
    }
    if let Some(level) = args.log_level {
        settings.log_level = level;
    }

    core::init_logging(&settings.log_level);
    info!("[MAIN] Starting with {:?}", settings);

    if args.save_settings {
        core::save_settings(&path, &settings)?;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Session::new(settings).run(stdin.lock(), &mut stdout)?;

    Ok(())
}
