//! Structural path identity.
//!
//! A `PathId` names a navigation chain: a root type followed by pointer
//! steps. Equal chains produce equal ids regardless of which nodes carry
//! them, which is what scope analysis and deduplication key on.
//!
//! Computed sets have no navigation chain of their own, so their root is
//! anchored to the expression node that produces them. Two computed sets of
//! the same type are then distinct paths.

use std::fmt;

use quiver_core::{PointerClassId, PointerDirection, Schema, TypeId};

use super::NodeId;

/// One navigation step of a path.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PathStep {
    pub ptrcls: PointerClassId,
    pub direction: PointerDirection,
    pub target: TypeId,
}

/// Immutable path identifier.
///
/// Equality compares the root type, the root anchor and every step
/// element-wise.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PathId {
    root: TypeId,
    anchor: Option<NodeId>,
    steps: Vec<PathStep>,
}

impl PathId {
    /// Path consisting of the root type alone.
    pub fn root(scls: TypeId) -> Self {
        Self {
            root: scls,
            anchor: None,
            steps: Vec::new(),
        }
    }

    /// Root path of a set computed by `expr`.
    pub fn computed(scls: TypeId, expr: NodeId) -> Self {
        Self {
            root: scls,
            anchor: Some(expr),
            steps: Vec::new(),
        }
    }

    /// New path with one more step; `self` is left untouched.
    pub fn extend(&self, ptrcls: PointerClassId, direction: PointerDirection, target: TypeId) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(PathStep {
            ptrcls,
            direction,
            target,
        });
        Self {
            root: self.root,
            anchor: self.anchor,
            steps,
        }
    }

    pub fn root_type(&self) -> TypeId {
        self.root
    }

    /// Expression a computed root is anchored to.
    pub fn anchor(&self) -> Option<NodeId> {
        self.anchor
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Number of pointer steps (the root is not a step).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Type the path arrives at.
    pub fn target(&self) -> TypeId {
        self.steps.last().map_or(self.root, |step| step.target)
    }

    /// Path without its last step, or `None` for a root path.
    pub fn parent(&self) -> Option<PathId> {
        let (_, init) = self.steps.split_last()?;
        Some(Self {
            root: self.root,
            anchor: self.anchor,
            steps: init.to_vec(),
        })
    }

    /// Whether `prefix` is this path or one of its ancestors.
    pub fn starts_with(&self, prefix: &PathId) -> bool {
        self.root == prefix.root
            && self.anchor == prefix.anchor
            && self.steps.starts_with(&prefix.steps)
    }

    /// Render with schema names, e.g. `User.>friends[User]`. An anchored
    /// root is followed by its expression, e.g. `int64(N6)`.
    pub fn display<'a, S: Schema>(&'a self, schema: &'a S) -> PathIdDisplay<'a, S> {
        PathIdDisplay { path: self, schema }
    }
}

pub struct PathIdDisplay<'a, S> {
    path: &'a PathId,
    schema: &'a S,
}

impl<S: Schema> fmt::Display for PathIdDisplay<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema.type_name(self.path.root))?;
        if let Some(expr) = self.path.anchor {
            write!(f, "({expr})")?;
        }
        for step in &self.path.steps {
            write!(
                f,
                ".{}{}[{}]",
                step.direction.arrow(),
                self.schema.pointer(step.ptrcls).name,
                self.schema.type_name(step.target)
            )?;
        }
        Ok(())
    }
}
