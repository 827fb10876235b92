//! Configuration template generation.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options commented out.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// fitpaper Configuration File
// ============================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{
  // Folder to pick wallpapers from when none is given on the command line
  // and no folder has been remembered yet. "~" is expanded.
  // "path": "",

  // Fill style used when applying the wallpaper:
  // "center", "crop", "fit", "span", "stretch" or "tile"
  // "mode": "crop",

  // Screen size to match images against. Detected from the primary
  // monitor when unset.
  // "screen": { "width": 1920, "height": 1080 },

  // Remember the folder after a wallpaper was set successfully
  // "rememberFolder": true
}
"#
    .to_string()
}

/// Writes the configuration template to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_config_template())
}
