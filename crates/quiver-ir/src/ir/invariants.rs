//! Invariant checks excluded from coverage reports.
//!
//! A violation here means the translation stage produced a malformed
//! tree; it is never a recoverable condition.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Ir, Node, NodeId, Pointer, Set};

impl Ir {
    pub(crate) fn ensure_node(&self, id: NodeId) -> &Node {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "Ir: node {id} not found \
                 (id was issued by another arena)"
            )
        })
    }

    pub(crate) fn ensure_set(&self, id: NodeId) -> &Set {
        match self.ensure_node(id) {
            Node::Set(set) => set,
            other => panic!(
                "Ir: expected Set at {id}, found {} \
                 (path sources must be sets)",
                other.kind_name()
            ),
        }
    }

    pub(crate) fn ensure_pointer(&self, id: NodeId) -> &Pointer {
        match self.ensure_node(id) {
            Node::Pointer(ptr) => ptr,
            other => panic!(
                "Ir: expected Pointer at {id}, found {} \
                 (Set.rptr must reference a Pointer)",
                other.kind_name()
            ),
        }
    }
}
