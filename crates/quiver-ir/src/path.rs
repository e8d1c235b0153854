//! Path extension: advancing a set by one pointer step.

use quiver_core::{PointerClassId, PointerDirection, Schema};

use crate::Result;
use crate::ir::{Ir, NodeId};

/// Pointer to follow: a name resolved against the source type, or an
/// already resolved class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRef<'a> {
    Name(&'a str),
    Class(PointerClassId),
}

impl<'a> From<&'a str> for PointerRef<'a> {
    fn from(name: &'a str) -> Self {
        PointerRef::Name(name)
    }
}

impl From<PointerClassId> for PointerRef<'_> {
    fn from(ptrcls: PointerClassId) -> Self {
        PointerRef::Class(ptrcls)
    }
}

/// Follow `ptr` outbound from `source`, returning the new target set.
///
/// The target's type is the pointer's target and its path id is the
/// source's path id plus one outbound step. Existing nodes are not
/// touched.
pub fn extend_path<'a, S: Schema>(
    ir: &mut Ir,
    schema: &S,
    source: NodeId,
    ptr: impl Into<PointerRef<'a>>,
) -> Result<NodeId> {
    let scls = ir.ensure_set(source).scls;

    let ptrcls = match ptr.into() {
        PointerRef::Name(name) => schema.resolve_pointer(scls, name)?,
        PointerRef::Class(ptrcls) => ptrcls,
    };
    let target_type = schema.pointer(ptrcls).target;

    Ok(ir.add_traversal(source, ptrcls, PointerDirection::Outbound, target_type))
}
