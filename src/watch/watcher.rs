// src/watch/watcher.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::debug;

use crate::watch::digest::{Fingerprint, digest};
use crate::watch::dispatch::{WatchEvent, dispatch_events};
use crate::watch::ignore::{Ignorer, RenameTracking, SmartIgnorer, UserIgnorer};
use crate::watch::path_utils::absolutize;

/// Initial fingerprint state of every registered user path.
///
/// Keys are absolute, deduplicated paths. `None` records a path that could
/// not be fingerprinted at registration time (permissions, races); `Some`
/// carries the three-valued digest result.
pub type WatchedPaths = HashMap<PathBuf, Option<Fingerprint>>;

/// Construction-time options for a watch.
///
/// The dispatch loop only sees what is passed here; there is no
/// process-global verbosity state.
#[derive(Debug, Clone, Copy, Default)]
pub struct WatchOptions {
    /// Log every forwarded change at debug level.
    pub verbose_events: bool,
}

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive
/// for as long as needed. Dropping this handle closes the bridged event
/// stream, which terminates the dispatch loop and closes the output channel.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Register the user's paths, derive the ignore state and start the event
/// dispatch loop as a background task.
///
/// Returns the initial fingerprint map (for inspection and tests) together
/// with the handle keeping the watch alive. Construction is synchronous;
/// dispatch runs on its own tokio task from the moment this returns.
///
/// Registrations are never removed for paths that later become ignored;
/// ignoring is a dispatch-time filtering decision, not subscription
/// management.
pub fn spawn_watch(
    input_paths: &[String],
    ignored_paths: &[String],
    out_tx: mpsc::Sender<WatchEvent>,
    options: WatchOptions,
) -> Result<(WatchedPaths, WatcherHandle)> {
    let user_ignorer = UserIgnorer::new(ignored_paths)?;

    // Channel from the blocking notify callback into the async world. Raw
    // events and raw errors travel as one `notify::Result` stream.
    let (raw_tx, raw_rx) = mpsc::unbounded_channel::<notify::Result<notify::Event>>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<notify::Event>| {
            // A failed send means the dispatch loop is gone; nothing useful
            // is left to do with the event.
            let _ = raw_tx.send(res);
        },
        Config::default(),
    )
    .context("unable to create watcher")?;

    // Register user paths in caller order. Paths that are both asked to be
    // watched and ignored by the user are skipped, as are duplicates. On any
    // registration failure the watcher drops here, releasing everything
    // registered so far.
    let mut watched = WatchedPaths::new();
    for input in input_paths {
        let full_path = absolutize(Path::new(input))?;
        if watched.contains_key(&full_path) || user_ignorer.is_ignored(&full_path) {
            continue;
        }
        watcher
            .watch(&full_path, RecursiveMode::NonRecursive)
            .with_context(|| format!("unable to watch '{}'", input))?;
        // An un-digestible path is still watched, just with no fingerprint.
        let fingerprint = digest(&full_path).ok();
        watched.insert(full_path, fingerprint);
    }

    // Parent directories are registered so a watched file that is renamed
    // away and back (editor safe-save) is picked up again when it reappears
    // under its old name.
    let rename = RenameTracking::derive(&watched);
    for dir in &rename.rename_dirs {
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("unable to watch rename-tracking dir {:?}", dir))?;
    }

    debug!(
        watched = watched.len(),
        rename_dirs = rename.rename_dirs.len(),
        "watch set registered"
    );

    let ignorer = SmartIgnorer::new(user_ignorer, rename);
    tokio::spawn(dispatch_events(raw_rx, out_tx, ignorer, options));

    Ok((watched, WatcherHandle { _inner: watcher }))
}
