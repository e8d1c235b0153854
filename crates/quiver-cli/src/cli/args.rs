//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be
//! composed into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use quiver_stdlib::HashedDir;

/// Std library root (--lib).
pub fn lib_arg() -> Arg {
    Arg::new("lib")
        .long("lib")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Standard library root")
}

/// Cache directory (--cache-dir).
pub fn cache_dir_arg() -> Arg {
    Arg::new("cache_dir")
        .long("cache-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Cache directory (defaults to the library root)")
}

/// Extra hashed directory (--hash-dir DIR=EXT), repeatable.
pub fn hash_dir_arg() -> Arg {
    Arg::new("hash_dir")
        .long("hash-dir")
        .value_name("DIR=EXT")
        .action(ArgAction::Append)
        .value_parser(parse_hashed_dir)
        .help("Also hash files with extension EXT under DIR")
}

/// Verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for info, -vv for debug)")
}

pub fn parse_hashed_dir(value: &str) -> Result<HashedDir, String> {
    let invalid = || format!("expected DIR=EXT, got '{value}'");
    let (dir, ext) = value.rsplit_once('=').ok_or_else(invalid)?;
    let ext = ext.trim_start_matches('.');
    if dir.is_empty() || ext.is_empty() {
        return Err(invalid());
    }
    Ok(HashedDir::new(dir, ext))
}
