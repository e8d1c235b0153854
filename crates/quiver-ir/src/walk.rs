//! Generic traversal over IR trees.
//!
//! The walker descends through every child field of every node kind in
//! declaration order (see `Node::children`). A predicate decides, per
//! node, whether the node is collected and whether its subtree is
//! entered. Pruning is an ordinary return value, not an early exit.
//!
//! ```ignore
//! // Collect aggregate calls, but stay out of subqueries.
//! find_children(ir, root, |_, node| match node {
//!     Node::Stmt(_) => Visit::Prune,
//!     Node::FunctionCall(call) => schema.function(call.func).aggregate.into(),
//!     _ => Visit::Skip,
//! });
//! ```

use std::collections::HashSet;

use crate::ir::{Ir, Node, NodeId};

/// Predicate verdict for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Collect the node and descend into its children.
    Include,
    /// Leave the node out but descend into its children.
    Skip,
    /// Leave the node out and do not descend.
    Prune,
    /// Collect the node but do not descend.
    IncludeAndPrune,
}

impl Visit {
    pub fn includes(self) -> bool {
        matches!(self, Visit::Include | Visit::IncludeAndPrune)
    }

    pub fn descends(self) -> bool {
        matches!(self, Visit::Include | Visit::Skip)
    }
}

impl From<bool> for Visit {
    fn from(include: bool) -> Self {
        if include { Visit::Include } else { Visit::Skip }
    }
}

/// Collect nodes under `root` (inclusive) accepted by `predicate`.
///
/// Nodes come back in pre-order. A node reachable along several edges is
/// visited once, at its first occurrence.
pub fn find_children<F>(ir: &Ir, root: NodeId, predicate: F) -> Vec<NodeId>
where
    F: FnMut(NodeId, &Node) -> Visit,
{
    walk(ir, root, predicate, false)
}

/// Whether any node under `root` (inclusive) is accepted by `predicate`.
///
/// Stops at the first accepted node.
pub fn contains<F>(ir: &Ir, root: NodeId, predicate: F) -> bool
where
    F: FnMut(NodeId, &Node) -> Visit,
{
    !walk(ir, root, predicate, true).is_empty()
}

fn walk<F>(ir: &Ir, root: NodeId, mut predicate: F, terminate_early: bool) -> Vec<NodeId>
where
    F: FnMut(NodeId, &Node) -> Visit,
{
    let mut result = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }

        let node = ir.node(id);
        let visit = predicate(id, node);

        if visit.includes() {
            result.push(id);
            if terminate_early {
                break;
            }
        }

        if visit.descends() {
            // Reversed so the first child is popped first.
            stack.extend(node.children().into_iter().rev());
        }
    }

    result
}
