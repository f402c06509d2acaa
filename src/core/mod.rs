//! Core module - settings, errors and logging for the terminal front-end
//!
//! # Resources
//!
//! - [`GameSettings`] - User preferences (glyphs, hints, coordinate style, log level)
//!
//! Settings live in a JSON file in the user's configuration directory and are
//! loaded once at startup; see [`settings_persistence`].

pub mod error;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use resources::{CoordinateStyle, GameSettings, GlyphStyle};
pub use settings_persistence::{default_settings_path, load_settings, save_settings};

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins when set; otherwise `fallback` (from the command line or the
/// settings file) is used.
pub fn init_logging(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second install (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
