//! Content hash over the std source directories.

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::Result;

/// Length of the hash prefix stored in the cache file.
pub const HASH_LEN: usize = 16;

/// Truncated SHA-256 of every hashed source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceHash([u8; HASH_LEN]);

impl SourceHash {
    pub fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }
}

impl fmt::Display for SourceHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// A directory scanned recursively for files with one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedDir {
    pub path: PathBuf,
    /// Extension without the leading dot.
    pub extension: String,
}

impl HashedDir {
    pub fn new(path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
        }
    }

    fn matches(&self, path: &std::path::Path) -> bool {
        path.extension().and_then(OsStr::to_str) == Some(self.extension.as_str())
    }
}

/// Hash the contents of every matching file under `dirs`.
///
/// Files are collected across all directories and sorted by path before
/// hashing, so the result does not depend on directory iteration order.
pub fn hash_dirs(dirs: &[HashedDir]) -> Result<SourceHash> {
    let mut paths = Vec::new();
    for dir in dirs {
        for entry in WalkDir::new(&dir.path) {
            let entry = entry?;
            if entry.file_type().is_file() && dir.matches(entry.path()) {
                paths.push(entry.into_path());
            }
        }
    }
    paths.sort();

    let mut hasher = Sha256::new();
    for path in &paths {
        hasher.update(fs::read(path)?);
    }
    let digest = hasher.finalize();

    let mut bytes = [0u8; HASH_LEN];
    bytes.copy_from_slice(&digest[..HASH_LEN]);
    Ok(SourceHash(bytes))
}
