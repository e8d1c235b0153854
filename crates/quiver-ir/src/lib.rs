//! quiver IR: the compiled-query representation and its analyses.
//!
//! This crate sits between translation (AST to IR) and lowering (IR to
//! an execution plan):
//! - `ir` - node kinds, path identity, the node arena, dump printer
//! - `walk` - predicate-driven traversal with explicit pruning
//! - `analyze` - path references, parameters, constness, aggregate scope
//! - `path` - path extension by one pointer step
//! - `views` - subquery/view classification and canonical sets

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod ir;
pub mod path;
pub mod views;
pub mod walk;

#[cfg(test)]
pub mod test_utils;


pub use ir::{Ir, IrPrinter, Node, NodeId, PathId};
pub use path::{PointerRef, extend_path};
pub use walk::{Visit, contains, find_children};

pub use quiver_core::SchemaError;

/// Errors raised while building or extending IR.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pointer name could not be resolved on the source type.
    #[error("path resolution failed: {0}")]
    Resolve(#[from] SchemaError),
}

pub type Result<T> = std::result::Result<T, Error>;
