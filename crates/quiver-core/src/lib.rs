#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the quiver compiler crates.
//!
//! Two parts:
//! - **Names**: `Interner`/`Symbol` for identifiers carried by IR nodes
//! - **Schema catalog**: the typed view of object types, pointer classes
//!   and functions that the IR layer consumes
//!
//! The catalog is consumed through the `Schema` trait. `DynamicSchema` is
//! the heap-allocated implementation built by the DDL executor and
//! persisted by the standard-library cache.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod error;
mod interner;
mod invariants;


pub use error::SchemaError;
pub use interner::{Interner, Symbol};

// ============================================================================
// Identifiers
// ============================================================================

/// Handle to an object or scalar type in a schema.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct TypeId(u32);

/// Handle to a pointer (link or property) class in a schema.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct PointerClassId(u32);

/// Handle to a function descriptor in a schema.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct FunctionId(u32);

macro_rules! impl_raw_index {
    ($($ty:ident),*) => {$(
        impl $ty {
            #[inline]
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            pub fn as_u32(self) -> u32 {
                self.0
            }

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    )*};
}

impl_raw_index!(TypeId, PointerClassId, FunctionId);

/// Direction of a pointer traversal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum PointerDirection {
    /// From the pointer's source type to its target type.
    #[default]
    Outbound,
    /// Backwards, from the target type to the source type.
    Inbound,
}

impl PointerDirection {
    /// Path notation for the direction: `>` or `<`.
    pub fn arrow(self) -> char {
        match self {
            PointerDirection::Outbound => '>',
            PointerDirection::Inbound => '<',
        }
    }
}

// ============================================================================
// Catalog entries
// ============================================================================

/// An object type and the pointers it declares directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectType {
    pub name: String,
    /// Direct bases, searched left to right during pointer resolution.
    pub bases: Vec<TypeId>,
    pub pointers: IndexMap<String, PointerClassId>,
}

/// A link or property declared on a source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerClass {
    pub name: String,
    pub source: TypeId,
    pub target: TypeId,
}

/// A function descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    /// Whether the function folds a whole set into one value.
    pub aggregate: bool,
}

// ============================================================================
// Schema Trait
// ============================================================================

/// Schema lookups required by the IR layer.
///
/// Handles passed to the accessors must come from the same schema; a
/// foreign handle is a caller bug and panics.
pub trait Schema {
    fn type_name(&self, id: TypeId) -> &str;

    /// Resolve `name` on `scls` or any of its bases.
    fn resolve_pointer(&self, scls: TypeId, name: &str) -> Result<PointerClassId, SchemaError>;

    fn pointer(&self, id: PointerClassId) -> &PointerClass;
    fn function(&self, id: FunctionId) -> &Function;
}

impl<T: Schema + ?Sized> Schema for &T {
    fn type_name(&self, id: TypeId) -> &str {
        (*self).type_name(id)
    }
    fn resolve_pointer(&self, scls: TypeId, name: &str) -> Result<PointerClassId, SchemaError> {
        (*self).resolve_pointer(scls, name)
    }
    fn pointer(&self, id: PointerClassId) -> &PointerClass {
        (*self).pointer(id)
    }
    fn function(&self, id: FunctionId) -> &Function {
        (*self).function(id)
    }
}

// ============================================================================
// Dynamic Schema (runtime construction)
// ============================================================================

/// Heap-allocated schema catalog.
///
/// Entries are append-only: handles stay valid for the lifetime of the
/// schema and survive a binary round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicSchema {
    types: Vec<ObjectType>,
    pointers: Vec<PointerClass>,
    functions: Vec<Function>,
    type_names: IndexMap<String, TypeId>,
    function_names: IndexMap<String, FunctionId>,
}

impl DynamicSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a type deriving from `bases`.
    pub fn add_type(&mut self, name: &str, bases: &[TypeId]) -> Result<TypeId, SchemaError> {
        if self.type_names.contains_key(name) {
            return Err(SchemaError::DuplicateName(name.to_owned()));
        }
        for &base in bases {
            self.ensure_type(base);
        }

        let id = TypeId(self.types.len() as u32);
        self.types.push(ObjectType {
            name: name.to_owned(),
            bases: bases.to_vec(),
            pointers: IndexMap::new(),
        });
        self.type_names.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Declare pointer `name` on `source` targeting `target`.
    pub fn add_pointer(
        &mut self,
        source: TypeId,
        name: &str,
        target: TypeId,
    ) -> Result<PointerClassId, SchemaError> {
        self.ensure_type(target);
        let owner = self.ensure_type(source);
        if owner.pointers.contains_key(name) {
            return Err(SchemaError::DuplicateName(format!("{}.{name}", owner.name)));
        }

        let id = PointerClassId(self.pointers.len() as u32);
        self.pointers.push(PointerClass {
            name: name.to_owned(),
            source,
            target,
        });
        self.types[source.index()]
            .pointers
            .insert(name.to_owned(), id);
        Ok(id)
    }

    pub fn add_function(&mut self, name: &str, aggregate: bool) -> Result<FunctionId, SchemaError> {
        if self.function_names.contains_key(name) {
            return Err(SchemaError::DuplicateName(name.to_owned()));
        }

        let id = FunctionId(self.functions.len() as u32);
        self.functions.push(Function {
            name: name.to_owned(),
            aggregate,
        });
        self.function_names.insert(name.to_owned(), id);
        Ok(id)
    }

    pub fn type_by_name(&self, name: &str) -> Option<TypeId> {
        self.type_names.get(name).copied()
    }

    pub fn function_by_name(&self, name: &str) -> Option<FunctionId> {
        self.function_names.get(name).copied()
    }

    pub fn get_type(&self, id: TypeId) -> Option<&ObjectType> {
        self.types.get(id.index())
    }

    pub fn types(&self) -> impl Iterator<Item = (TypeId, &ObjectType)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, t)| (TypeId(i as u32), t))
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.functions.is_empty()
    }

    /// Depth-first, left-to-right search through `scls` and its bases.
    fn find_pointer(&self, scls: TypeId, name: &str) -> Option<PointerClassId> {
        let mut stack = vec![scls];
        let mut seen = HashSet::new();

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let ty = self.ensure_type(id);
            if let Some(&ptr) = ty.pointers.get(name) {
                return Some(ptr);
            }
            stack.extend(ty.bases.iter().rev().copied());
        }

        None
    }

    /// Deserialize a schema from its binary cache payload.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, SchemaError> {
        postcard::from_bytes(bytes).map_err(SchemaError::Decode)
    }

    /// Serialize the schema into the binary cache payload.
    pub fn to_binary(&self) -> Vec<u8> {
        postcard::to_allocvec(self).expect("serialization should not fail")
    }
}

impl Schema for DynamicSchema {
    fn type_name(&self, id: TypeId) -> &str {
        &self.ensure_type(id).name
    }

    fn resolve_pointer(&self, scls: TypeId, name: &str) -> Result<PointerClassId, SchemaError> {
        self.find_pointer(scls, name)
            .ok_or_else(|| SchemaError::PointerNotFound {
                type_name: self.type_name(scls).to_owned(),
                pointer: name.to_owned(),
            })
    }

    fn pointer(&self, id: PointerClassId) -> &PointerClass {
        self.ensure_pointer(id)
    }

    fn function(&self, id: FunctionId) -> &Function {
        self.ensure_function(id)
    }
}
