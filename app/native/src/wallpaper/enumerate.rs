//! Breadth-first candidate enumeration.
//!
//! Walks a root directory level by level and collects every file it can see.
//! Listing failures (permission denied, I/O errors, directories removed
//! mid-walk) yield zero entries for that listing and never abort the walk.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lists the files directly inside `dir`, sorted by path.
///
/// Entries that cannot be read are skipped. Symlinks are classified by their
/// target.
///
/// # Errors
///
/// Returns an error if the directory itself cannot be read.
pub fn list_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Lists the subdirectories directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns an error if the directory itself cannot be read.
pub fn list_subdirectories(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// Collects every readable file under `root`, breadth-first.
///
/// Within each directory, its files are appended before its subdirectories
/// are queued. Returns an empty list if the root is empty or unreadable.
#[must_use]
pub fn enumerate(root: &Path) -> Vec<PathBuf> { walk(root, list_files, list_subdirectories) }

/// Breadth-first walk over the given listing functions.
fn walk<F, D>(root: &Path, mut files_in: F, mut subdirectories_in: D) -> Vec<PathBuf>
where
    F: FnMut(&Path) -> io::Result<Vec<PathBuf>>,
    D: FnMut(&Path) -> io::Result<Vec<PathBuf>>,
{
    let mut files = Vec::new();
    let mut pending = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = pending.pop_front() {
        match files_in(&dir) {
            Ok(found) => files.extend(found),
            Err(err) => {
                tracing::debug!(
                    dir = %dir.display(),
                    error = %err,
                    "skipping unreadable directory"
                );
            }
        }

        match subdirectories_in(&dir) {
            Ok(subdirs) => pending.extend(subdirs),
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %err, "skipping subdirectories");
            }
        }
    }

    tracing::debug!(root = %root.display(), count = files.len(), "enumerated candidates");
    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_enumerate_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        assert!(enumerate(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_enumerate_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        assert!(enumerate(&temp_dir.path().join("gone")).is_empty());
    }

    #[test]
    fn test_enumerate_root_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.jpg");
        touch(&file);
        assert!(enumerate(&file).is_empty());
    }

    #[test]
    fn test_enumerate_is_breadth_first() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("a/deep/d.jpg"));
        touch(&root.join("a/b.jpg"));
        touch(&root.join("c/e.jpg"));
        touch(&root.join("z.jpg"));

        let files = enumerate(root);
        let expected = vec![
            root.join("z.jpg"),
            root.join("a/b.jpg"),
            root.join("c/e.jpg"),
            root.join("a/deep/d.jpg"),
        ];
        assert_eq!(files, expected);
    }

    #[test]
    fn test_enumerate_includes_every_file_kind() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("notes.txt"));
        touch(&temp_dir.path().join("photo.png"));
        touch(&temp_dir.path().join(".hidden"));

        assert_eq!(enumerate(temp_dir.path()).len(), 3);
    }

    #[test]
    fn test_enumerate_has_no_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        for dir in ["one", "one/two", "three"] {
            touch(&temp_dir.path().join(dir).join("same.jpg"));
        }

        let files = enumerate(temp_dir.path());
        let unique: std::collections::HashSet<_> = files.iter().collect();
        assert_eq!(files.len(), 3);
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_list_subdirectories_fails_for_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_subdirectories(&temp_dir.path().join("missing")).is_err());
        assert!(list_files(&temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_list_files_excludes_directories() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("sub/inner.jpg"));
        touch(&temp_dir.path().join("top.jpg"));

        assert_eq!(list_files(temp_dir.path()).unwrap(), vec![temp_dir.path().join("top.jpg")]);
        assert_eq!(
            list_subdirectories(temp_dir.path()).unwrap(),
            vec![temp_dir.path().join("sub")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_enumerate_skips_unreadable_subtree() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("a.jpg"));
        let locked = root.join("locked");
        touch(&locked.join("secret.jpg"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still read the directory; nothing to verify then
        let privileged = fs::read_dir(&locked).is_ok();
        let files = enumerate(root);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if !privileged {
            assert_eq!(files, vec![root.join("a.jpg")]);
        }
    }

    fn denied() -> io::Error { io::Error::from(io::ErrorKind::PermissionDenied) }

    #[test]
    fn test_walk_skips_failed_listing_and_continues() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("a.jpg"));
        touch(&root.join("locked/secret.jpg"));
        touch(&root.join("locked/inner/deeper.jpg"));
        touch(&root.join("open/b.jpg"));
        touch(&root.join("open/nested/c.jpg"));

        let locked = root.join("locked");
        let files = walk(
            root,
            |dir: &Path| if dir == locked { Err(denied()) } else { list_files(dir) },
            |dir: &Path| if dir == locked { Err(denied()) } else { list_subdirectories(dir) },
        );

        assert_eq!(
            files,
            vec![root.join("a.jpg"), root.join("open/b.jpg"), root.join("open/nested/c.jpg")]
        );
    }

    #[test]
    fn test_walk_keeps_files_when_subdirectory_listing_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("a.jpg"));
        touch(&root.join("sub/b.jpg"));

        let files = walk(root, list_files, |_: &Path| Err(denied()));
        assert_eq!(files, vec![root.join("a.jpg")]);
    }

    #[test]
    fn test_walk_unreadable_root_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("a.jpg"));

        let mut visited = Vec::new();
        let files = walk(
            temp_dir.path(),
            |_: &Path| Err(denied()),
            |dir: &Path| {
                visited.push(dir.to_path_buf());
                Err(denied())
            },
        );

        assert!(files.is_empty());
        assert_eq!(visited, vec![temp_dir.path().to_path_buf()]);
    }
}
