// src/config/mod.rs

//! Configuration loading for watchpipe.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//!
//! The config file only contributes watch inputs; it is merged with whatever
//! was passed on the command line before the watch set is built.

pub mod loader;
pub mod model;

pub use loader::{default_config_path, load_from_path};
pub use model::{ConfigFile, LogSection, WatchSection};
