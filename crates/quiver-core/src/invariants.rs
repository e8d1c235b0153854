//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{DynamicSchema, Function, FunctionId, ObjectType, PointerClass, PointerClassId, TypeId};

impl DynamicSchema {
    pub(crate) fn ensure_type(&self, id: TypeId) -> &ObjectType {
        self.types.get(id.index()).unwrap_or_else(|| {
            panic!(
                "DynamicSchema: type {} not found \
                 (handle was issued by another schema)",
                id.as_u32()
            )
        })
    }

    pub(crate) fn ensure_pointer(&self, id: PointerClassId) -> &PointerClass {
        self.pointers.get(id.index()).unwrap_or_else(|| {
            panic!(
                "DynamicSchema: pointer class {} not found \
                 (handle was issued by another schema)",
                id.as_u32()
            )
        })
    }

    pub(crate) fn ensure_function(&self, id: FunctionId) -> &Function {
        self.functions.get(id.index()).unwrap_or_else(|| {
            panic!(
                "DynamicSchema: function {} not found \
                 (handle was issued by another schema)",
                id.as_u32()
            )
        })
    }
}
