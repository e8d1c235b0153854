/// Errors raised by the schema catalog and its loaders.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Pointer name not declared on the type or any of its bases.
    #[error("{type_name} has no pointer named '{pointer}'")]
    PointerNotFound { type_name: String, pointer: String },

    /// Standard-library module has no source file or directory.
    #[error("std module not found: {0}")]
    ModuleNotFound(String),

    #[error("'{0}' is already defined")]
    DuplicateName(String),

    #[error("schema decode error: {0}")]
    Decode(#[from] postcard::Error),
}
