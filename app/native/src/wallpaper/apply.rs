//! Desktop wallpaper apply collaborator.
//!
//! The selector never talks to the operating system directly; it hands an
//! accepted path to a [`WallpaperSetter`]. The production setter delegates to
//! the `wallpaper` crate, which covers Windows, macOS and the common Linux
//! desktops.

use std::path::Path;

use crate::config::FillMode;

/// Applies an image as the desktop background.
pub trait WallpaperSetter {
    /// Sets `path` as the desktop background.
    ///
    /// Returns `false` on any failure; implementations must not panic.
    fn apply(&mut self, path: &Path) -> bool;
}

impl<F> WallpaperSetter for F
where
    F: FnMut(&Path) -> bool,
{
    fn apply(&mut self, path: &Path) -> bool { self(path) }
}

/// Sets the wallpaper through the platform desktop APIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopWallpaper {
    mode: FillMode,
}

impl DesktopWallpaper {
    #[must_use]
    pub const fn new(mode: FillMode) -> Self { Self { mode } }

    const fn platform_mode(self) -> ::wallpaper::Mode {
        match self.mode {
            FillMode::Center => ::wallpaper::Mode::Center,
            FillMode::Crop => ::wallpaper::Mode::Crop,
            FillMode::Fit => ::wallpaper::Mode::Fit,
            FillMode::Span => ::wallpaper::Mode::Span,
            FillMode::Stretch => ::wallpaper::Mode::Stretch,
            FillMode::Tile => ::wallpaper::Mode::Tile,
        }
    }
}

impl WallpaperSetter for DesktopWallpaper {
    fn apply(&mut self, path: &Path) -> bool {
        if !path.is_file() {
            tracing::warn!(path = %path.display(), "wallpaper file not found");
            return false;
        }

        // Some desktops have no notion of a fill style; the image can still be set
        if let Err(err) = ::wallpaper::set_mode(self.platform_mode()) {
            tracing::debug!(mode = ?self.mode, error = %err, "failed to set wallpaper mode");
        }

        let path_str = path.display().to_string();
        match ::wallpaper::set_from_path(&path_str) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(path = %path_str, error = %err, "failed to set wallpaper");
                false
            }
        }
    }
}
