//! On-disk cache of the compiled std schema.
//!
//! The cache file holds [`HASH_LEN`](crate::HASH_LEN) bytes of source
//! hash followed by the binary schema payload. Writes go to a temporary
//! file in the cache directory that is renamed into place, so readers
//! never observe a partial file and concurrent rebuilders simply race to
//! the last rename.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use quiver_core::DynamicSchema;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::Result;
use crate::hash::{HashedDir, SourceHash, hash_dirs};
use crate::module::{MODULE_EXTENSION, ModuleLoader, STD_LIB, load_std_module};

pub const CACHE_FILE_NAME: &str = ".schema.cache";

/// Where the std library lives and what feeds the cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StdConfig {
    pub lib_root: PathBuf,
    pub cache_dir: PathBuf,
    pub hashed_dirs: Vec<HashedDir>,
}

impl StdConfig {
    /// Cache next to the library, keyed on the library's `.eql` sources.
    pub fn new(lib_root: impl Into<PathBuf>) -> Self {
        let lib_root = lib_root.into();
        Self {
            cache_dir: lib_root.clone(),
            hashed_dirs: vec![HashedDir::new(lib_root.clone(), MODULE_EXTENSION)],
            lib_root,
        }
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    /// Add another directory whose contents invalidate the cache.
    pub fn with_hashed_dir(mut self, dir: HashedDir) -> Self {
        self.hashed_dirs.push(dir);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Stored hash matches the sources and the payload decodes.
    Fresh,
    Stale,
    Missing,
}

impl CacheStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CacheStatus::Fresh => "fresh",
            CacheStatus::Stale => "stale",
            CacheStatus::Missing => "missing",
        }
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Std schema cache bound to one configuration.
#[derive(Debug)]
pub struct StdCache {
    config: StdConfig,
}

impl StdCache {
    /// Bind the cache to `config` without touching the filesystem.
    pub fn open(config: StdConfig) -> Self {
        Self { config }
    }

    /// Bind the cache to `config`, creating the cache directory.
    pub fn init(config: StdConfig) -> Result<Self> {
        fs::create_dir_all(&config.cache_dir)?;
        debug!(cache_dir = %config.cache_dir.display(), "std cache initialized");
        Ok(Self::open(config))
    }

    pub fn config(&self) -> &StdConfig {
        &self.config
    }

    pub fn cache_file(&self) -> PathBuf {
        self.config.cache_dir.join(CACHE_FILE_NAME)
    }

    pub fn source_hash(&self) -> Result<SourceHash> {
        hash_dirs(&self.config.hashed_dirs)
    }

    pub fn status(&self) -> Result<CacheStatus> {
        let Some(bytes) = read_if_exists(&self.cache_file())? else {
            return Ok(CacheStatus::Missing);
        };
        let hash = self.source_hash()?;
        let fresh = cached_payload(&bytes, &hash)
            .is_some_and(|payload| DynamicSchema::from_binary(payload).is_ok());
        Ok(if fresh {
            CacheStatus::Fresh
        } else {
            CacheStatus::Stale
        })
    }

    /// Return the std schema, rebuilding it through `loader` when the
    /// cache is missing, stale or unreadable.
    pub fn load(&self, mut loader: impl ModuleLoader) -> Result<DynamicSchema> {
        let hash = self.source_hash()?;
        let path = self.cache_file();

        match read_if_exists(&path)? {
            None => debug!(path = %path.display(), "std schema cache missing"),
            Some(bytes) => match cached_payload(&bytes, &hash) {
                None => debug!(path = %path.display(), "std schema cache stale"),
                Some(payload) => match DynamicSchema::from_binary(payload) {
                    Ok(schema) => {
                        debug!(path = %path.display(), %hash, "std schema cache hit");
                        return Ok(schema);
                    }
                    Err(err) => {
                        warn!(path = %path.display(), %err, "discarding corrupt std schema cache")
                    }
                },
            },
        }

        let mut schema = DynamicSchema::new();
        for name in STD_LIB {
            load_std_module(&mut schema, &self.config.lib_root, name, &mut loader)?;
        }
        self.write(&hash, &schema)?;
        info!(types = schema.type_count(), %hash, "std schema rebuilt");

        Ok(schema)
    }

    fn write(&self, hash: &SourceHash, schema: &DynamicSchema) -> Result<()> {
        // Dropping the temp file on an early return removes it.
        let mut file = NamedTempFile::new_in(&self.config.cache_dir)?;
        file.write_all(hash.as_bytes())?;
        file.write_all(&schema.to_binary())?;
        file.as_file().sync_all()?;

        let path = self.cache_file();
        file.persist(&path).map_err(|err| err.error)?;
        debug!(path = %path.display(), "std schema cache written");
        Ok(())
    }
}

fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Payload following `hash`, if the file was written for these sources.
fn cached_payload<'a>(bytes: &'a [u8], hash: &SourceHash) -> Option<&'a [u8]> {
    bytes.strip_prefix(hash.as_bytes().as_slice())
}
