use std::path::PathBuf;

use quiver_stdlib::{CacheStatus, HashedDir, StdCache};
use tracing::info;

use super::std_config;

pub struct StatusArgs {
    pub lib: PathBuf,
    pub cache_dir: Option<PathBuf>,
    pub hash_dirs: Vec<HashedDir>,
}

pub fn check(args: StatusArgs) -> quiver_stdlib::Result<CacheStatus> {
    let cache = StdCache::open(std_config(args.lib, args.cache_dir, args.hash_dirs));
    let status = cache.status()?;
    info!(cache_file = %cache.cache_file().display(), %status, "checked std schema cache");
    Ok(status)
}

pub fn run(args: StatusArgs) {
    let status = match check(args) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{status}");
    if status != CacheStatus::Fresh {
        std::process::exit(1);
    }
}
