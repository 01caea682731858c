// src/watch/path_utils.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolve a path to its absolute form without touching the filesystem.
///
/// Unlike `canonicalize`, this also works for paths that do not exist yet;
/// ignore entries and rename-tracked children routinely don't. It only fails
/// when the current working directory is unavailable.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .with_context(|| format!("resolving absolute form of {:?}", path))
}

/// Whether the final component of `path` starts with a `.`.
pub fn has_hidden_basename(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolutize_keeps_absolute_paths() {
        let abs = absolutize(Path::new("/tmp/project/file.txt")).unwrap();
        assert_eq!(abs, PathBuf::from("/tmp/project/file.txt"));
    }

    #[test]
    fn absolutize_anchors_relative_paths_at_cwd() {
        let abs = absolutize(Path::new("some/file.txt")).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some/file.txt"));
    }

    #[test]
    fn hidden_basename_detection() {
        assert!(has_hidden_basename(Path::new("/home/user/.bashrc")));
        assert!(has_hidden_basename(Path::new(".git")));
        assert!(!has_hidden_basename(Path::new("/home/user/notes.txt")));
        // A hidden ancestor does not make the path itself hidden.
        assert!(!has_hidden_basename(Path::new("/home/user/.config/app.toml")));
        assert!(!has_hidden_basename(Path::new("/")));
    }
}
