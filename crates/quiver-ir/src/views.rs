//! Classification of sets as paths, subqueries and views.
//!
//! These predicates decide which sets share identity during lowering:
//! plain paths, subquery-backed sets, view rebindings and transparent
//! aliases. Every function accepts any node id; kinds that cannot carry
//! the inspected fields classify as `false`/`None`.

use crate::ir::{Ir, Node, NodeId, Stmt};

/// Every hop from `id` back to its root is a plain path.
pub fn is_simple_path(ir: &Ir, id: NodeId) -> bool {
    let mut current = id;
    loop {
        let Node::Set(set) = ir.node(current) else {
            return false;
        };
        if set.expr.is_some() {
            return false;
        }
        match set.rptr {
            None => return true,
            Some(rptr) => current = ir.ensure_pointer(rptr).source,
        }
    }
}

/// The set's value comes from an embedded statement.
pub fn is_subquery_set(ir: &Ir, id: NodeId) -> bool {
    match ir.node(id) {
        Node::Set(set) => set.expr.is_some_and(|expr| ir.node(expr).is_stmt()),
        _ => false,
    }
}

/// Result set of the statement embedded in the set at `id`, if any.
fn subquery_result(ir: &Ir, id: NodeId) -> Option<NodeId> {
    let expr = ir.node(id).as_set()?.expr?;
    let result = ir.node(expr).as_stmt()?.result;
    ir.node(result).is_set().then_some(result)
}

/// The set rebinds another set, either through a subquery yielding a set
/// or through `view_source`.
pub fn is_view_set(ir: &Ir, id: NodeId) -> bool {
    // `view_source` is checked independently of the subquery test. Only
    // sets carry it, so other kinds still classify as `false`.
    subquery_result(ir, id).is_some()
        || ir
            .node(id)
            .as_set()
            .is_some_and(|set| set.view_source.is_some())
}

/// The set's nominal identity differs from its structural one.
pub fn is_strictly_view_set(ir: &Ir, id: NodeId) -> bool {
    ir.node(id)
        .as_set()
        .is_some_and(|set| set.real_path_id.as_ref().is_some_and(|real| *real != set.path_id))
}

/// The set refers to a view it rebinds, whatever its own `expr`.
pub fn is_inner_view_reference(ir: &Ir, id: NodeId) -> bool {
    ir.node(id)
        .as_set()
        .is_some_and(|set| set.view_source.is_some())
}

/// Collapse a transparent alias to its base set.
///
/// Takes a single hop: an alias of an alias resolves to the inner alias.
/// Idempotent as long as the alias target is not itself an alias.
pub fn get_canonical_set(ir: &Ir, id: NodeId) -> NodeId {
    match ir.node(id).as_set() {
        Some(set) if set.expr.is_none() => set.source.unwrap_or(id),
        _ => id,
    }
}

/// Set carrying the shape that defines the view at `id`.
///
/// Follows subquery results and `view_source` links until a set with a
/// non-empty shape is found.
pub fn get_subquery_shape(ir: &Ir, id: NodeId) -> Option<NodeId> {
    if let Some(result) = subquery_result(ir, id) {
        let result_set = ir.ensure_set(result);
        if !result_set.shape.is_empty() {
            return Some(result);
        }
        if is_view_set(ir, result) {
            return get_subquery_shape(ir, result);
        }
        return None;
    }

    let view_source = ir.node(id).as_set()?.view_source?;
    get_subquery_shape(ir, view_source)
}

/// Promote `expr` to statement form.
///
/// Statements are returned unchanged; anything else is wrapped in a new
/// `SELECT expr`.
pub fn ensure_stmt(ir: &mut Ir, expr: NodeId) -> NodeId {
    if ir.node(expr).is_stmt() {
        return expr;
    }
    ir.add(Stmt::select(expr))
}

/// A `SELECT` that only re-yields another statement or a subquery set.
pub fn is_simple_wrapper(ir: &Ir, id: NodeId) -> bool {
    match ir.node(id) {
        Node::Stmt(stmt) if stmt.is_select() => {
            ir.node(stmt.result).is_stmt() || is_subquery_set(ir, stmt.result)
        }
        _ => false,
    }
}
