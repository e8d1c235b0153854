//! Std module sources and the loader boundary.

use std::fs;
use std::path::{Path, PathBuf};

use quiver_core::{DynamicSchema, SchemaError};

use crate::Result;

/// Extension of std module source files.
pub const MODULE_EXTENSION: &str = "eql";

/// Modules that make up the cached std schema, in load order.
pub const STD_LIB: [&str; 2] = ["std", "schema"];

/// Every module shipped with the standard library.
pub const STD_MODULES: [&str; 4] = ["std", "schema", "stdattrs", "stdgraphql"];

pub const GRAPHQL_MODULE: &str = "stdgraphql";

/// Module source handed to a [`ModuleLoader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StdModule<'a> {
    pub name: &'a str,
    pub source: String,
    /// Module that unqualified names resolve to.
    pub default_module: Option<&'a str>,
}

/// DDL executor applying module source text to a schema.
pub trait ModuleLoader {
    fn apply(&mut self, schema: &mut DynamicSchema, module: &StdModule<'_>) -> Result<()>;
}

impl<L: ModuleLoader + ?Sized> ModuleLoader for &mut L {
    fn apply(&mut self, schema: &mut DynamicSchema, module: &StdModule<'_>) -> Result<()> {
        (**self).apply(schema, module)
    }
}

/// Source text of module `name` under `lib_root`.
///
/// A module is either a directory of `.eql` files, concatenated in file
/// name order, or a single `<name>.eql` file. Each file is preceded by a
/// newline.
pub fn module_source(lib_root: &Path, name: &str) -> Result<String> {
    let dir = lib_root.join(name);
    let files = if dir.is_dir() {
        module_files(&dir)?
    } else {
        let file = dir.with_extension(MODULE_EXTENSION);
        if !file.is_file() {
            return Err(SchemaError::ModuleNotFound(name.to_owned()).into());
        }
        vec![file]
    };

    let mut source = String::new();
    for file in files {
        source.push('\n');
        source.push_str(&fs::read_to_string(file)?);
    }
    Ok(source)
}

fn module_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_source = path
            .extension()
            .is_some_and(|ext| ext.to_str() == Some(MODULE_EXTENSION));
        if entry.file_type()?.is_file() && is_source {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Apply module `name` to `schema` through `loader`.
pub fn load_std_module(
    schema: &mut DynamicSchema,
    lib_root: &Path,
    name: &str,
    mut loader: impl ModuleLoader,
) -> Result<()> {
    let source = module_source(lib_root, name)?;
    let module = StdModule {
        name,
        source,
        default_module: (name == "std").then_some("std"),
    };
    loader.apply(schema, &module)
}

/// Load the GraphQL reflection module on top of `schema`, or on an empty
/// schema when none is given.
pub fn load_graphql_schema(
    lib_root: &Path,
    schema: Option<DynamicSchema>,
    loader: impl ModuleLoader,
) -> Result<DynamicSchema> {
    let mut schema = schema.unwrap_or_default();
    load_std_module(&mut schema, lib_root, GRAPHQL_MODULE, loader)?;
    Ok(schema)
}
