// src/watch/ignore.rs

//! The two-layer ignore policy applied to every raw notification.
//!
//! `UserIgnorer` drops what the user explicitly excluded. `SmartIgnorer`
//! layers hidden-file suppression and rename-directory filtering on top; it
//! never un-ignores anything the user layer flagged.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::watch::path_utils::{absolutize, has_hidden_basename};
use crate::watch::watcher::WatchedPaths;

/// A single decision capability: should events for this path be dropped?
pub trait Ignorer: Send + Sync {
    fn is_ignored(&self, path: &Path) -> bool;
}

/// Ignores exactly what the user asked to ignore: the listed paths and
/// everything beneath the listed directories.
#[derive(Debug, Clone, Default)]
pub struct UserIgnorer {
    ignored: HashSet<PathBuf>,
    ignored_dirs: Vec<PathBuf>,
}

impl UserIgnorer {
    /// Build from the raw ignore list.
    ///
    /// Blank entries are skipped; every other entry is trimmed, resolved to
    /// its absolute form and recorded both as an exact match and as a
    /// directory prefix. Resolution only fails when the working directory is
    /// unusable, which is fatal to construction.
    pub fn new(ignored_paths: &[String]) -> Result<Self> {
        let mut ignored = HashSet::new();
        let mut ignored_dirs = Vec::new();
        for raw in ignored_paths {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let path = absolutize(Path::new(trimmed))?;
            ignored_dirs.push(path.clone());
            ignored.insert(path);
        }
        Ok(Self {
            ignored,
            ignored_dirs,
        })
    }
}

impl Ignorer for UserIgnorer {
    fn is_ignored(&self, path: &Path) -> bool {
        let abs = match absolutize(path) {
            Ok(p) => p,
            Err(_) => return false,
        };
        if self.ignored.contains(&abs) {
            return true;
        }
        // Component-wise prefix match: `/tmp/foo` covers `/tmp/foo/bar`
        // but never `/tmp/foobar`.
        self.ignored_dirs.iter().any(|dir| abs.starts_with(dir))
    }
}

/// Rename-tracking state derived from the watched paths.
///
/// Editors that save via write-to-temp + rename-over-original invalidate a
/// plain per-file registration the moment the original path is removed.
/// Watching the parent directory catches the file's reappearance;
/// `rename_children` keeps that from flooding the consumer with events for
/// unrelated siblings.
#[derive(Debug, Clone, Default)]
pub struct RenameTracking {
    /// User-watched paths with a `.`-leading base name, exempt from
    /// hidden-file suppression.
    pub included_hidden_files: HashSet<PathBuf>,
    /// Parent directories registered solely to observe rename-back events.
    pub rename_dirs: HashSet<PathBuf>,
    /// The children inside a rename dir the user actually cares about.
    pub rename_children: HashSet<PathBuf>,
}

impl RenameTracking {
    /// Derive the tracking sets from the registered watch set.
    ///
    /// A parent directory is tracked iff it is not itself one of the watched
    /// paths; its watched children become the rename children.
    pub fn derive(watched: &WatchedPaths) -> Self {
        let mut state = RenameTracking::default();
        for path in watched.keys() {
            if has_hidden_basename(path) {
                state.included_hidden_files.insert(path.clone());
            }

            let Some(dir) = path.parent() else {
                continue;
            };
            if watched.contains_key(dir) {
                continue;
            }
            state.rename_dirs.insert(dir.to_path_buf());
            state.rename_children.insert(path.clone());
        }
        state
    }
}

/// The policy the dispatch loop runs: user layer first, then hidden-file
/// suppression, then rename-directory filtering.
#[derive(Debug, Clone)]
pub struct SmartIgnorer {
    user: UserIgnorer,
    rename: RenameTracking,
}

impl SmartIgnorer {
    pub fn new(user: UserIgnorer, rename: RenameTracking) -> Self {
        Self { user, rename }
    }
}

impl Ignorer for SmartIgnorer {
    fn is_ignored(&self, path: &Path) -> bool {
        if self.user.is_ignored(path) {
            return true;
        }
        let abs = match absolutize(path) {
            Ok(p) => p,
            Err(_) => return false,
        };

        // Hidden-file noise, unless the user asked for this path.
        if has_hidden_basename(&abs) && !self.rename.included_hidden_files.contains(&abs) {
            return true;
        }

        // Inside a rename-tracked directory only the expected children are
        // relevant; everything else is sibling noise.
        if let Some(dir) = abs.parent() {
            if self.rename.rename_dirs.contains(dir)
                && !self.rename.rename_children.contains(&abs)
            {
                return true;
            }
        }

        false
    }
}
