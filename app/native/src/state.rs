//! Remembered folder persistence.
//!
//! After a wallpaper is set, the folder it came from is written to
//! `<data dir>/fitpaper/root-folder.txt` so the next run can default to it.
//! The file holds the raw path bytes and is overwritten on every
//! successful run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, STATE_FILE_NAME};
use crate::error::FitpaperError;

/// Returns the application data directory.
///
/// Falls back to the system temp directory if no data directory exists.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map_or_else(|| std::env::temp_dir().join(APP_NAME), |data| data.join(APP_NAME))
}

/// Returns the path of the state file.
#[must_use]
pub fn state_file() -> PathBuf { data_dir().join(STATE_FILE_NAME) }

#[cfg(unix)]
fn folder_to_bytes(folder: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    folder.as_os_str().as_bytes().to_vec()
}

#[cfg(not(unix))]
fn folder_to_bytes(folder: &Path) -> Vec<u8> { folder.to_string_lossy().into_owned().into_bytes() }

#[cfg(unix)]
fn folder_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn folder_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Reads a remembered folder from `file`.
///
/// Only a trailing line break is stripped. A missing, unreadable or empty
/// file yields `None`.
#[must_use]
pub fn read_from(file: &Path) -> Option<PathBuf> {
    let contents = match fs::read(file) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            tracing::debug!(file = %file.display(), error = %err, "failed to read state file");
            return None;
        }
    };

    let end = contents.iter().rposition(|&b| !matches!(b, b'\r' | b'\n')).map_or(0, |i| i + 1);
    if end == 0 {
        return None;
    }
    Some(folder_from_bytes(&contents[..end]))
}

/// Writes `folder` to `file` as-is, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_to(file: &Path, folder: &Path) -> io::Result<()> {
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file, folder_to_bytes(folder))
}

/// Returns the last folder a wallpaper was set from.
#[must_use]
pub fn last_folder() -> Option<PathBuf> { read_from(&state_file()) }

/// Remembers `folder` for the next run.
///
/// # Errors
///
/// Returns `FitpaperError::StateError` if the state file cannot be written.
pub fn remember_folder(folder: &Path) -> Result<(), FitpaperError> {
    let file = state_file();
    write_to(&file, folder).map_err(|e| {
        FitpaperError::StateError(format!("Failed to write {}: {e}", file.display()))
    })?;
    tracing::debug!(folder = %folder.display(), "remembered folder");
    Ok(())
}

/// Forgets the remembered folder.
///
/// Returns `true` if a folder was remembered.
///
/// # Errors
///
/// Returns `FitpaperError::StateError` if the state file exists but cannot be removed.
pub fn forget() -> Result<bool, FitpaperError> {
    let file = state_file();
    match fs::remove_file(&file) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(FitpaperError::StateError(format!(
            "Failed to remove {}: {err}",
            file.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_from(&temp_dir.path().join(STATE_FILE_NAME)).is_none());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("state").join(STATE_FILE_NAME);
        let folder = Path::new("/home/user/Pictures/Wallpapers");

        write_to(&file, folder).unwrap();
        assert_eq!(read_from(&file), Some(folder.to_path_buf()));
    }

    #[test]
    fn test_write_overwrites_previous_folder() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join(STATE_FILE_NAME);

        write_to(&file, Path::new("/first/folder/with/a/long/name")).unwrap();
        write_to(&file, Path::new("/second")).unwrap();
        assert_eq!(read_from(&file), Some(PathBuf::from("/second")));
    }

    #[test]
    fn test_read_strips_trailing_line_break_only() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join(STATE_FILE_NAME);
        fs::write(&file, " /walls/summer \r\n").unwrap();
        assert_eq!(read_from(&file), Some(PathBuf::from(" /walls/summer ")));
    }

    #[test]
    fn test_folder_with_surrounding_spaces_survives() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join(STATE_FILE_NAME);
        let folder = Path::new("/walls/summer ");

        write_to(&file, folder).unwrap();
        assert_eq!(read_from(&file), Some(folder.to_path_buf()));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_folder_survives() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join(STATE_FILE_NAME);
        let folder = Path::new(OsStr::from_bytes(b"/walls/caf\xe9"));

        write_to(&file, folder).unwrap();
        assert_eq!(read_from(&file), Some(folder.to_path_buf()));
    }

    #[test]
    fn test_read_blank_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join(STATE_FILE_NAME);
        fs::write(&file, "\n").unwrap();
        assert!(read_from(&file).is_none());
    }

    #[test]
    fn test_state_file_lives_in_data_dir() {
        let file = state_file();
        assert!(file.ends_with(Path::new(APP_NAME).join(STATE_FILE_NAME)));
    }
}
