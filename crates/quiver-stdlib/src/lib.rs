//! Standard-library schema for the quiver compiler.
//!
//! The std catalog is built by feeding module sources to a DDL loader and
//! cached on disk keyed by a content hash of its sources:
//! - `module` - locating module sources and applying them through a loader
//! - `hash` - content hash over source directories
//! - `cache` - the cache service (`StdCache`) and its configuration

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cache;
pub mod hash;
pub mod module;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod cache_tests;

pub use cache::{CACHE_FILE_NAME, CacheStatus, StdCache, StdConfig};
pub use hash::{HASH_LEN, HashedDir, SourceHash, hash_dirs};
pub use module::{
    GRAPHQL_MODULE, MODULE_EXTENSION, ModuleLoader, STD_LIB, STD_MODULES, StdModule,
    load_graphql_schema, load_std_module, module_source,
};

pub use quiver_core::{DynamicSchema, SchemaError};

/// Errors raised while loading or caching the std schema.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Io(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
