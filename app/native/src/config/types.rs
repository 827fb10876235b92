//! Configuration types for fitpaper.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::APP_NAME;
use crate::wallpaper::ScreenGeometry;

/// How the desktop scales the applied image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Center the image without scaling.
    Center,
    /// Scale to cover the whole screen, cropping the overflow.
    #[default]
    Crop,
    /// Scale to fit inside the screen, letterboxing the rest.
    Fit,
    /// Span the image across all screens.
    Span,
    /// Stretch to the screen size, ignoring proportions.
    Stretch,
    /// Repeat the image.
    Tile,
}

/// Explicit screen size, bypassing display detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScreenOverride {
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
}

impl ScreenOverride {
    /// Returns the geometry, or `None` if either dimension is zero.
    #[must_use]
    pub const fn geometry(self) -> Option<ScreenGeometry> {
        ScreenGeometry::new(self.width, self.height)
    }
}

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FitpaperConfig {
    /// Folder to pick wallpapers from when none is given on the command line
    /// and no folder has been remembered yet. Supports `~`.
    pub path: String,

    /// Fill style used when applying the wallpaper.
    /// Values: "center", "crop", "fit", "span", "stretch", "tile".
    pub mode: FillMode,

    /// Screen size to match images against.
    /// If unset, the primary monitor is queried.
    pub screen: Option<ScreenOverride>,

    /// Remember the folder after a wallpaper was set successfully.
    pub remember_folder: bool,
}

impl Default for FitpaperConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            mode: FillMode::default(),
            screen: None,
            remember_folder: true,
        }
    }
}

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error("No configuration file found. Expected at ~/.config/fitpaper/config.jsonc")]
    NotFound,
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/fitpaper/` if set
/// 2. `~/.config/fitpaper/`
/// 3. The platform config directory (`~/Library/Application Support` on macOS,
///    `%APPDATA%` on Windows)
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut dirs_to_search = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        dirs_to_search.push(PathBuf::from(xdg_config).join(APP_NAME));
    }
    if let Some(home) = dirs::home_dir() {
        dirs_to_search.push(home.join(".config").join(APP_NAME));
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs_to_search.push(config_dir.join(APP_NAME));
    }

    let mut paths = Vec::new();
    for dir in dirs_to_search {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }
    paths
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::IoError` if the file cannot be read and
/// `ConfigError::ParseError` if it is not valid JSONC.
pub fn load_config_from_path(path: &Path) -> Result<(FitpaperConfig, PathBuf), ConfigError> {
    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: FitpaperConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first existing config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no file exists, or the errors of
/// [`load_config_from_path`] for the first one found.
pub fn load_config() -> Result<(FitpaperConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}
