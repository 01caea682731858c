// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `watchpipe`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "watchpipe",
    version,
    about = "Watch paths and stream filtered change events to stdout.",
    long_about = None
)]
pub struct CliArgs {
    /// Paths to watch.
    ///
    /// Merged with `[watch].paths` from the config file, if one is loaded.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Path to ignore, either exactly or as a whole directory subtree.
    ///
    /// May be given multiple times.
    #[arg(short = 'i', long = "ignore", value_name = "PATH")]
    pub ignore: Vec<String>,

    /// Path to a TOML config file with additional paths and ignores.
    ///
    /// If omitted, `Watchpipe.toml` in the current working directory is
    /// loaded when it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Log every forwarded change at debug level.
    #[arg(long)]
    pub verbose_events: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCHPIPE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
