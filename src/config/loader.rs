// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::ConfigFile;
use crate::errors::Result;

/// Load a configuration file from a given path.
///
/// Deserialization is the only thing that happens here; merging with CLI
/// arguments is done by the caller.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: ConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `Watchpipe.toml` in the current working
/// directory; the caller decides whether a missing default file matters.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Watchpipe.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_all_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [watch]
            paths = ["a.txt", "b.txt"]
            ignore = ["tmp"]

            [log]
            verbose_events = true
            "#
        )
        .unwrap();

        let cfg = load_from_path(file.path()).unwrap();
        assert_eq!(cfg.watch.paths, vec!["a.txt", "b.txt"]);
        assert_eq!(cfg.watch.ignore, vec!["tmp"]);
        assert!(cfg.log.verbose_events);
    }

    #[test]
    fn empty_file_defaults_to_empty_sections() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let cfg = load_from_path(file.path()).unwrap();
        assert!(cfg.watch.paths.is_empty());
        assert!(cfg.watch.ignore.is_empty());
        assert!(!cfg.log.verbose_events);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_path("/definitely/not/here/Watchpipe.toml").is_err());
    }
}
