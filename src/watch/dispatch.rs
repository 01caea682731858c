// src/watch/dispatch.rs

//! The single-consumer fan-in between `notify` and the output channel.

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use notify::{Event, EventKind};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::watch::ignore::Ignorer;
use crate::watch::watcher::WatchOptions;

/// A filtered change notification, timestamped at the moment it was
/// forwarded.
///
/// Delivery order matches the order the underlying watcher produced events;
/// the timestamp is the forwarding time, not the OS event time, so consumers
/// may only rely on delivery-order monotonicity.
#[derive(Debug, Clone)]
pub struct WatchEvent {
    pub time: SystemTime,
    pub path: PathBuf,
    pub kind: EventKind,
}

impl fmt::Display for WatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.kind, self.path.display())
    }
}

/// Drain the bridged notify stream until it closes, forwarding unignored
/// paths to `out_tx`.
///
/// `Ok` items are raw events, `Err` items are the watcher's transient errors
/// (logged, never fatal). The stream closing — the watcher handle was
/// dropped — is the sole shutdown signal: the loop returns, `out_tx` goes
/// with it, and the closed output channel tells the consumer the watch ended
/// rather than stalled.
pub async fn dispatch_events<I: Ignorer>(
    mut raw_rx: mpsc::UnboundedReceiver<notify::Result<Event>>,
    out_tx: mpsc::Sender<WatchEvent>,
    ignorer: I,
    options: WatchOptions,
) {
    while let Some(item) = raw_rx.recv().await {
        match item {
            Ok(event) => {
                let kind = event.kind;
                for path in event.paths {
                    if ignorer.is_ignored(&path) {
                        continue;
                    }
                    if options.verbose_events {
                        debug!(?kind, path = %path.display(), "unignored file change");
                    }
                    let out = WatchEvent {
                        time: SystemTime::now(),
                        path,
                        kind,
                    };
                    // Blocking here is the backpressure policy: a slow
                    // consumer throttles the whole watch.
                    if out_tx.send(out).await.is_err() {
                        debug!("event consumer dropped; stopping dispatch");
                        return;
                    }
                }
            }
            Err(err) => {
                warn!("watch error: {err}");
            }
        }
    }
    debug!("watch stream closed; dispatch loop finished");
}
