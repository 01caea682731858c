// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod watch;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::errors::{Result, WatchpipeError};
use crate::watch::{WatchEvent, WatchOptions, spawn_watch};

/// Capacity of the output event channel.
///
/// The dispatch loop blocks once the consumer falls this far behind, which
/// is what throttles the watch as a whole.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (optional TOML file, merged with CLI flags)
/// - the watch set builder and dispatch loop
/// - a stdout-reporting consumer
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let inputs = EffectiveInputs::resolve(&args)?;

    if inputs.paths.is_empty() {
        return Err(WatchpipeError::ConfigError(
            "no paths to watch (pass them as arguments or via [watch].paths in the config file)"
                .to_string(),
        ));
    }

    let (event_tx, mut event_rx) = mpsc::channel::<WatchEvent>(EVENT_CHANNEL_CAPACITY);

    let options = WatchOptions {
        verbose_events: inputs.verbose_events,
    };
    let (watched, handle) = spawn_watch(&inputs.paths, &inputs.ignore, event_tx, options)?;
    info!(paths = watched.len(), "watch started");

    // Dropping the handle on Ctrl-C closes the bridged stream; the dispatch
    // loop then closes the event channel and the drain below observes it.
    let mut handle = Some(handle);
    loop {
        tokio::select! {
            maybe_event = event_rx.recv() => match maybe_event {
                Some(event) => println!("{event}"),
                None => break,
            },
            _ = tokio::signal::ctrl_c(), if handle.is_some() => {
                info!("shutting down watch");
                handle = None;
            }
        }
    }

    debug!("event channel closed; watch ended");
    Ok(())
}

/// Watch inputs after merging the config file (if any) with CLI flags.
///
/// CLI entries are appended after config entries so the caller-given order
/// within each source is preserved.
#[derive(Debug, Clone, Default)]
struct EffectiveInputs {
    paths: Vec<String>,
    ignore: Vec<String>,
    verbose_events: bool,
}

impl EffectiveInputs {
    fn resolve(args: &CliArgs) -> Result<Self> {
        let mut inputs = EffectiveInputs {
            verbose_events: args.verbose_events,
            ..Default::default()
        };

        // An explicitly passed config file must exist; the default one is
        // only picked up when present.
        if let Some(path) = &args.config {
            inputs.merge_config_file(config::load_from_path(path)?);
        } else {
            let default = config::default_config_path();
            if default.exists() {
                debug!(path = %default.display(), "loading default config file");
                inputs.merge_config_file(config::load_from_path(&default)?);
            }
        }

        inputs.paths.extend(args.paths.iter().cloned());
        inputs.ignore.extend(args.ignore.iter().cloned());
        Ok(inputs)
    }

    fn merge_config_file(&mut self, cfg: config::ConfigFile) {
        self.paths.extend(cfg.watch.paths);
        self.ignore.extend(cfg.watch.ignore);
        self.verbose_events |= cfg.log.verbose_events;
    }
}
