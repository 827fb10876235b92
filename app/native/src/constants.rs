//! Application-wide constants.

/// Application name, used for config and data directories.
pub const APP_NAME: &str = "fitpaper";

/// File holding the last folder a wallpaper was set from.
pub const STATE_FILE_NAME: &str = "root-folder.txt";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "FITPAPER_LOG";
