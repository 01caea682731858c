// src/watch/digest.rs

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use blake3::Hasher;

/// Files larger than this are never fingerprinted.
pub const MAX_DIGEST_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Result of fingerprinting a path.
///
/// `Directory` and `TooLarge` are not failures; they are stable statements
/// that no content fingerprint exists for this path. Real I/O problems are
/// reported through `Err` and mean "content state unknown", never "content
/// unchanged".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fingerprint {
    /// blake3 hash of the full file contents, hex-encoded.
    Content(String),
    /// Directories are never content-compared.
    Directory,
    /// The file exceeds [`MAX_DIGEST_FILE_SIZE`]. A partial hash could mask
    /// changes beyond the cap, so none is produced.
    TooLarge,
}

/// Compute the content fingerprint of a single path.
pub fn digest(path: &Path) -> Result<Fingerprint> {
    digest_with_cap(path, MAX_DIGEST_FILE_SIZE)
}

fn digest_with_cap(path: &Path, cap: u64) -> Result<Fingerprint> {
    let file =
        File::open(path).with_context(|| format!("opening {:?} for fingerprinting", path))?;
    let meta = file
        .metadata()
        .with_context(|| format!("inspecting {:?}", path))?;
    if meta.is_dir() {
        return Ok(Fingerprint::Directory);
    }

    let mut hasher = Hasher::new();
    let mut reader = BufReader::new(file).take(cap);
    let mut buf = [0u8; 8192];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    // One byte past the cap decides between "hashed everything" and "too big".
    let mut probe = [0u8; 1];
    if reader.into_inner().read(&mut probe)? > 0 {
        return Ok(Fingerprint::TooLarge);
    }

    Ok(Fingerprint::Content(hasher.finalize().to_hex().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn content(fp: Fingerprint) -> String {
        match fp {
            Fingerprint::Content(hex) => hex,
            other => panic!("expected content fingerprint, got {:?}", other),
        }
    }

    #[test]
    fn same_content_same_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, b"hello watchpipe").unwrap();

        let first = content(digest(&path).unwrap());
        let second = content(digest(&path).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn appending_a_byte_changes_the_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, b"hello watchpipe").unwrap();
        let before = content(digest(&path).unwrap());

        fs::write(&path, b"hello watchpipe!").unwrap();
        let after = content(digest(&path).unwrap());
        assert_ne!(before, after);
    }

    #[test]
    fn directories_have_no_content_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(digest(dir.path()).unwrap(), Fingerprint::Directory);
    }

    #[test]
    fn files_past_the_cap_are_too_large() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        fs::write(&path, vec![7u8; 17]).unwrap();

        assert_eq!(digest_with_cap(&path, 16).unwrap(), Fingerprint::TooLarge);
    }

    #[test]
    fn files_exactly_at_the_cap_are_fingerprinted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exact.bin");
        fs::write(&path, vec![7u8; 16]).unwrap();

        assert!(matches!(
            digest_with_cap(&path, 16).unwrap(),
            Fingerprint::Content(_)
        ));
    }

    #[test]
    fn missing_files_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(digest(&dir.path().join("nope.txt")).is_err());
    }
}
