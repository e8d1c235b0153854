//! Aggregate scoping.
//!
//! A subquery evaluates to its own value at the enclosing scope, so an
//! aggregate inside it never makes the outer expression aggregated.

use quiver_core::Schema;

use crate::ir::{Ir, Node, NodeId};
use crate::walk::{Visit, contains};

/// Whether an aggregate call under `root` is reachable without crossing a
/// statement boundary.
pub fn is_aggregated_expr<S: Schema>(ir: &Ir, schema: &S, root: NodeId) -> bool {
    contains(ir, root, |_, node| match node {
        Node::Stmt(_) => Visit::Prune,
        Node::FunctionCall(call) => schema.function(call.func).aggregate.into(),
        _ => Visit::Skip,
    })
}
