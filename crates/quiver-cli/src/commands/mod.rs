pub mod hash;
pub mod status;

#[cfg(test)]
mod status_tests;

use std::path::PathBuf;

use quiver_stdlib::{HashedDir, StdConfig};

/// Library config from CLI flags: the library's own sources are always
/// hashed, extra directories are appended.
pub fn std_config(lib: PathBuf, cache_dir: Option<PathBuf>, hash_dirs: Vec<HashedDir>) -> StdConfig {
    let mut config = StdConfig::new(lib);
    if let Some(cache_dir) = cache_dir {
        config = config.with_cache_dir(cache_dir);
    }
    hash_dirs
        .into_iter()
        .fold(config, |config, dir| config.with_hashed_dir(dir))
}
