// src/watch/mod.rs

//! Path watching, filtering and event dispatch.
//!
//! This module is responsible for:
//! - Resolving and registering the user-requested watch set (`watcher`).
//! - Deciding which raw notifications are noise (`ignore`).
//! - Fingerprinting watched files so callers can tell real changes from
//!   no-op rewrites (`digest`).
//! - Forwarding timestamped, filtered events to the consumer (`dispatch`).
//!
//! It does **not** decide what to do in response to a change; that is the
//! business of whatever consumes the output channel.

pub mod digest;
pub mod dispatch;
pub mod ignore;
pub mod path_utils;
pub mod watcher;

pub use digest::{Fingerprint, MAX_DIGEST_FILE_SIZE, digest};
pub use dispatch::{WatchEvent, dispatch_events};
pub use ignore::{Ignorer, RenameTracking, SmartIgnorer, UserIgnorer};
pub use watcher::{WatchOptions, WatchedPaths, WatcherHandle, spawn_watch};
