use std::fs;

use quiver_core::{DynamicSchema, SchemaError};

use crate::test_utils::{RecordingLoader, std_lib, write_file};
use crate::{CACHE_FILE_NAME, CacheStatus, Error, HASH_LEN, HashedDir, StdCache};

fn cache_dir_entries(cache: &StdCache) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(&cache.config().cache_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn init_creates_cache_dir() {
    let (_dir, config) = std_lib();
    assert!(!config.cache_dir.exists());

    let cache = StdCache::init(config).unwrap();

    assert!(cache.config().cache_dir.is_dir());
    assert_eq!(cache.status().unwrap(), CacheStatus::Missing);
}

#[test]
fn open_leaves_missing_cache_dir_alone() {
    let (_dir, config) = std_lib();

    let cache = StdCache::open(config);

    assert_eq!(cache.status().unwrap(), CacheStatus::Missing);
    assert!(!cache.config().cache_dir.exists());
}

#[test]
fn first_load_builds_std_lib_modules() {
    let (_dir, config) = std_lib();
    let cache = StdCache::init(config).unwrap();
    let mut loader = RecordingLoader::default();

    let schema = cache.load(&mut loader).unwrap();

    assert_eq!(
        loader.calls,
        vec![
            ("std".to_owned(), Some("std".to_owned())),
            ("schema".to_owned(), None),
        ]
    );
    let names: Vec<&str> = schema.types().map(|(_, ty)| ty.name.as_str()).collect();
    assert_eq!(names, vec!["Object", "int64", "str", "Type"]);
}

#[test]
fn cache_file_starts_with_source_hash() {
    let (_dir, config) = std_lib();
    let cache = StdCache::init(config).unwrap();

    let schema = cache.load(RecordingLoader::default()).unwrap();

    let bytes = fs::read(cache.cache_file()).unwrap();
    assert_eq!(
        &bytes[..HASH_LEN],
        cache.source_hash().unwrap().as_bytes().as_slice()
    );
    assert_eq!(DynamicSchema::from_binary(&bytes[HASH_LEN..]).unwrap(), schema);
    assert!(cache.cache_file().ends_with(CACHE_FILE_NAME));
}

#[test]
fn second_load_skips_loader() {
    let (_dir, config) = std_lib();
    let cache = StdCache::init(config).unwrap();
    let first = cache.load(RecordingLoader::default()).unwrap();
    let mut loader = RecordingLoader::default();

    let second = cache.load(&mut loader).unwrap();

    assert!(loader.calls.is_empty());
    assert_eq!(first, second);
    assert_eq!(cache.status().unwrap(), CacheStatus::Fresh);
}

#[test]
fn source_change_triggers_rebuild() {
    let (dir, config) = std_lib();
    let cache = StdCache::init(config).unwrap();
    cache.load(RecordingLoader::default()).unwrap();

    write_file(&dir.path().join("lib/std/c_extra.eql"), "type Extra\n");
    assert_eq!(cache.status().unwrap(), CacheStatus::Stale);

    let mut loader = RecordingLoader::default();
    let schema = cache.load(&mut loader).unwrap();

    assert_eq!(loader.modules(), vec!["std", "schema"]);
    assert!(schema.type_by_name("Extra").is_some());
    assert_eq!(cache.status().unwrap(), CacheStatus::Fresh);
}

#[test]
fn unhashed_files_do_not_invalidate() {
    let (dir, config) = std_lib();
    let cache = StdCache::init(config).unwrap();
    cache.load(RecordingLoader::default()).unwrap();

    write_file(&dir.path().join("lib/README.md"), "std library\n");

    assert_eq!(cache.status().unwrap(), CacheStatus::Fresh);
}

#[test]
fn extra_hashed_dir_invalidates() {
    let (dir, config) = std_lib();
    let compiler = dir.path().join("compiler");
    write_file(&compiler.join("lower.rs"), "fn lower() {}\n");
    let cache = StdCache::init(config.with_hashed_dir(HashedDir::new(&compiler, "rs"))).unwrap();
    cache.load(RecordingLoader::default()).unwrap();

    write_file(&compiler.join("lower.rs"), "fn lower() { todo!() }\n");

    assert_eq!(cache.status().unwrap(), CacheStatus::Stale);
}

#[test]
fn corrupt_payload_is_rebuilt() {
    let (_dir, config) = std_lib();
    let cache = StdCache::init(config).unwrap();
    let mut bytes = cache.source_hash().unwrap().as_bytes().to_vec();
    bytes.extend_from_slice(&[0xff; 4]);
    fs::write(cache.cache_file(), bytes).unwrap();
    assert_eq!(cache.status().unwrap(), CacheStatus::Stale);

    let mut loader = RecordingLoader::default();
    let schema = cache.load(&mut loader).unwrap();

    assert_eq!(loader.modules(), vec!["std", "schema"]);
    assert_eq!(schema.type_count(), 4);
    assert_eq!(cache.status().unwrap(), CacheStatus::Fresh);
}

#[test]
fn no_temp_files_left_behind() {
    let (dir, config) = std_lib();
    let cache = StdCache::init(config).unwrap();
    cache.load(RecordingLoader::default()).unwrap();
    write_file(&dir.path().join("lib/schema.eql"), "type Type\ntype Link\n");
    cache.load(RecordingLoader::default()).unwrap();

    assert_eq!(cache_dir_entries(&cache), vec![CACHE_FILE_NAME]);
}

#[test]
fn failed_rebuild_writes_nothing() {
    let (dir, config) = std_lib();
    write_file(&dir.path().join("lib/schema.eql"), "type Object\n");
    let cache = StdCache::init(config).unwrap();

    let err = cache.load(RecordingLoader::default()).unwrap_err();

    assert!(matches!(err, Error::Schema(SchemaError::DuplicateName(_))));
    assert!(cache_dir_entries(&cache).is_empty());
    assert_eq!(cache.status().unwrap(), CacheStatus::Missing);
}

#[test]
fn independent_caches_do_not_interfere() {
    let (_a_dir, a_config) = std_lib();
    let (_b_dir, b_config) = std_lib();
    let a = StdCache::init(a_config).unwrap();
    let b = StdCache::init(b_config).unwrap();

    a.load(RecordingLoader::default()).unwrap();

    assert_eq!(a.status().unwrap(), CacheStatus::Fresh);
    assert_eq!(b.status().unwrap(), CacheStatus::Missing);
}
