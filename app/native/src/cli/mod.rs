//! CLI module for fitpaper.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;
use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;
use crate::error::FitpaperError;

/// Installs the stderr log subscriber.
///
/// `FITPAPER_LOG` takes precedence; otherwise only warnings are shown, or
/// debug output for fitpaper itself when `verbose` is set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "warn,fitpaper_lib=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), FitpaperError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose());
    cli.execute()
}
