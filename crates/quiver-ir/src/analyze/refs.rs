//! Path and parameter references in expression trees.

use indexmap::IndexSet;
use quiver_core::TypeId;

use crate::ir::{Ir, Node, NodeId};
use crate::walk::{Visit, contains, find_children};

/// A `Set` that names a path directly rather than computing a value.
fn plain_path(_: NodeId, node: &Node) -> Visit {
    matches!(node, Node::Set(set) if set.expr.is_none()).into()
}

fn parameter(_: NodeId, node: &Node) -> Visit {
    matches!(node, Node::Parameter(_)).into()
}

/// Plain-path sets reachable from `root`, in traversal order.
pub fn path_sets(ir: &Ir, root: NodeId) -> Vec<NodeId> {
    find_children(ir, root, plain_path)
}

/// Schema types touched by plain paths under `root`.
pub fn get_source_references(ir: &Ir, root: NodeId) -> IndexSet<TypeId> {
    path_sets(ir, root)
        .into_iter()
        .filter_map(|id| ir.set(id))
        .map(|set| set.scls)
        .collect()
}

/// Plain-path sets under `root` that are not an intermediate hop of
/// another collected path.
pub fn get_terminal_references(ir: &Ir, root: NodeId) -> IndexSet<NodeId> {
    let sets = path_sets(ir, root);

    let parents: IndexSet<NodeId> = sets
        .iter()
        .filter_map(|&id| ir.set(id)?.rptr)
        .map(|rptr| ir.ensure_pointer(rptr).source)
        .collect();

    sets.into_iter()
        .filter(|id| !parents.contains(id))
        .collect()
}

/// Parameter nodes under `root`.
pub fn get_variables(ir: &Ir, root: NodeId) -> IndexSet<NodeId> {
    find_children(ir, root, parameter).into_iter().collect()
}

/// Whether `root` can be evaluated without binding any path or input.
pub fn is_const(ir: &Ir, root: NodeId) -> bool {
    !contains(ir, root, plain_path) && !contains(ir, root, parameter)
}
