//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use quiver_stdlib::HashedDir;

use crate::commands::hash::HashArgs;
use crate::commands::status::StatusArgs;

pub struct HashParams {
    pub lib: PathBuf,
    pub hash_dirs: Vec<HashedDir>,
}

impl HashParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            lib: m.get_one::<PathBuf>("lib").cloned().unwrap(),
            hash_dirs: parse_hash_dirs(m),
        }
    }
}

impl From<HashParams> for HashArgs {
    fn from(p: HashParams) -> Self {
        Self {
            lib: p.lib,
            hash_dirs: p.hash_dirs,
        }
    }
}

pub struct StatusParams {
    pub lib: PathBuf,
    pub cache_dir: Option<PathBuf>,
    pub hash_dirs: Vec<HashedDir>,
}

impl StatusParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            lib: m.get_one::<PathBuf>("lib").cloned().unwrap(),
            cache_dir: m.get_one::<PathBuf>("cache_dir").cloned(),
            hash_dirs: parse_hash_dirs(m),
        }
    }
}

impl From<StatusParams> for StatusArgs {
    fn from(p: StatusParams) -> Self {
        Self {
            lib: p.lib,
            cache_dir: p.cache_dir,
            hash_dirs: p.hash_dirs,
        }
    }
}

fn parse_hash_dirs(m: &ArgMatches) -> Vec<HashedDir> {
    m.get_many::<HashedDir>("hash_dir")
        .map(|dirs| dirs.cloned().collect())
        .unwrap_or_default()
}
