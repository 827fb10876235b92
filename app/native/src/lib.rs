//! fitpaper - pick a random wallpaper that fits the primary screen.
//!
//! The library walks a folder tree, samples files at random without
//! replacement, and applies the first image that is at least as large as
//! the screen with a close enough aspect ratio. See [`wallpaper`] for the
//! selection logic and [`cli`] for the command-line front end.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod schema;
pub mod state;
pub mod utils;
pub mod wallpaper;
