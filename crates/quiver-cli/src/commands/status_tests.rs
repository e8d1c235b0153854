use std::fs;

use quiver_stdlib::{
    CacheStatus, DynamicSchema, HashedDir, ModuleLoader, StdCache, StdModule, hash_dirs,
};

use super::hash::{HashArgs, compute};
use super::status::{StatusArgs, check};
use super::std_config;

struct NoopLoader;

impl ModuleLoader for NoopLoader {
    fn apply(&mut self, _: &mut DynamicSchema, _: &StdModule<'_>) -> quiver_stdlib::Result<()> {
        Ok(())
    }
}

fn lib_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("std.eql"), "type Object\n").unwrap();
    fs::write(dir.path().join("schema.eql"), "type Type\n").unwrap();
    dir
}

#[test]
fn config_from_flags() {
    let config = std_config(
        "lib".into(),
        Some("cache".into()),
        vec![HashedDir::new("src", "rs")],
    );

    assert_eq!(config.cache_dir, std::path::PathBuf::from("cache"));
    assert_eq!(
        config.hashed_dirs,
        vec![HashedDir::new("lib", "eql"), HashedDir::new("src", "rs")]
    );
}

#[test]
fn hash_matches_library_hash() {
    let lib = lib_dir();

    let hash = compute(HashArgs {
        lib: lib.path().to_owned(),
        hash_dirs: Vec::new(),
    })
    .unwrap();

    assert_eq!(
        hash,
        hash_dirs(&[HashedDir::new(lib.path(), "eql")]).unwrap()
    );
}

#[test]
fn status_reports_missing_then_fresh() {
    let lib = lib_dir();
    let cache_dir = tempfile::tempdir().unwrap();
    let args = || StatusArgs {
        lib: lib.path().to_owned(),
        cache_dir: Some(cache_dir.path().to_owned()),
        hash_dirs: Vec::new(),
    };
    assert_eq!(check(args()).unwrap(), CacheStatus::Missing);

    let config = std_config(lib.path().to_owned(), Some(cache_dir.path().to_owned()), Vec::new());
    StdCache::init(config).unwrap().load(NoopLoader).unwrap();

    assert_eq!(check(args()).unwrap(), CacheStatus::Fresh);

    fs::write(lib.path().join("schema.eql"), "type Type\ntype Link\n").unwrap();
    assert_eq!(check(args()).unwrap(), CacheStatus::Stale);
}

#[test]
fn status_does_not_create_cache_dir() {
    let lib = lib_dir();
    let cache_dir = lib.path().join("target").join("quiver");

    let status = check(StatusArgs {
        lib: lib.path().to_owned(),
        cache_dir: Some(cache_dir.clone()),
        hash_dirs: Vec::new(),
    })
    .unwrap();

    assert_eq!(status, CacheStatus::Missing);
    assert!(!cache_dir.exists());
}

#[test]
fn status_fails_on_missing_library() {
    let dir = tempfile::tempdir().unwrap();
    let cache_dir = tempfile::tempdir().unwrap();
    fs::write(
        cache_dir.path().join(quiver_stdlib::CACHE_FILE_NAME),
        [0u8; 16],
    )
    .unwrap();

    let result = check(StatusArgs {
        lib: dir.path().join("absent"),
        cache_dir: Some(cache_dir.path().to_owned()),
        hash_dirs: Vec::new(),
    });

    assert!(result.is_err());
}
