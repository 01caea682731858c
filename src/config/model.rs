// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [watch]
/// paths = ["src/main.rs", "assets/"]
/// ignore = ["assets/generated"]
///
/// [log]
/// verbose_events = true
/// ```
///
/// All sections are optional and default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Watch inputs from `[watch]`.
    #[serde(default)]
    pub watch: WatchSection,

    /// Logging behaviour from `[log]`.
    #[serde(default)]
    pub log: LogSection,
}

/// `[watch]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchSection {
    /// Paths to watch, relative to the working directory or absolute.
    #[serde(default)]
    pub paths: Vec<String>,

    /// Paths to exclude, exactly or as whole directory subtrees.
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogSection {
    /// Log every forwarded change at debug level.
    ///
    /// The CLI `--verbose-events` flag turns this on regardless of the
    /// config file.
    #[serde(default)]
    pub verbose_events: bool,
}
