//! Temporary std library layouts and a recording loader.

use std::fs;
use std::path::Path;

use quiver_core::DynamicSchema;
use tempfile::TempDir;

use crate::{ModuleLoader, Result, StdConfig, StdModule};

pub fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Library with a directory module (`std`) and file modules (`schema`,
/// `stdgraphql`). The cache lives in a sibling directory that does not
/// exist yet.
pub fn std_lib() -> (TempDir, StdConfig) {
    let dir = tempfile::tempdir().unwrap();
    let lib = dir.path().join("lib");
    write_file(&lib.join("std/b_scalars.eql"), "type int64\ntype str\n");
    write_file(&lib.join("std/a_base.eql"), "type Object\n");
    write_file(&lib.join("schema.eql"), "type Type\n");
    write_file(&lib.join("stdgraphql.eql"), "type Query\n");

    let config = StdConfig::new(&lib).with_cache_dir(dir.path().join("cache"));
    (dir, config)
}

/// Loader understanding only `type NAME` lines.
#[derive(Debug, Default)]
pub struct RecordingLoader {
    pub calls: Vec<(String, Option<String>)>,
}

impl RecordingLoader {
    pub fn modules(&self) -> Vec<&str> {
        self.calls.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl ModuleLoader for RecordingLoader {
    fn apply(&mut self, schema: &mut DynamicSchema, module: &StdModule<'_>) -> Result<()> {
        self.calls.push((
            module.name.to_owned(),
            module.default_module.map(str::to_owned),
        ));
        for line in module.source.lines() {
            if let Some(name) = line.trim().strip_prefix("type ") {
                schema.add_type(name.trim(), &[])?;
            }
        }
        Ok(())
    }
}
