//! Error types for fitpaper.
//!
//! Selection itself never fails with an error: unreadable folders, invalid
//! images and apply failures are all folded into a
//! [`SelectionResult`](crate::wallpaper::SelectionResult). The errors here
//! cover the surrounding command-line tool.

use thiserror::Error;

use crate::wallpaper::ScreenError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum FitpaperError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// The screen size could not be determined.
    #[error("Screen error: {0}")]
    ScreenError(#[from] ScreenError),
    /// Reading or writing the remembered folder failed.
    #[error("State error: {0}")]
    StateError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<serde_json::Error> for FitpaperError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}
