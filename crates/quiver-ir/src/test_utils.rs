//! Shared schema fixture for IR tests.

use quiver_core::{DynamicSchema, FunctionId, TypeId};

/// A small social schema:
///
/// ```text
/// Named { name: str }
/// User extending Named { friends: User, groups: Group, age: int64 }
/// Group extending Named { owner: User }
/// count(agg), sum(agg), len
/// ```
pub struct Fixture {
    pub schema: DynamicSchema,
    pub str_ty: TypeId,
    pub int_ty: TypeId,
    pub user: TypeId,
    pub group: TypeId,
    pub count: FunctionId,
    pub sum: FunctionId,
    pub len: FunctionId,
}

pub fn fixture() -> Fixture {
    let mut schema = DynamicSchema::new();
    let str_ty = schema.add_type("str", &[]).unwrap();
    let int_ty = schema.add_type("int64", &[]).unwrap();
    let named = schema.add_type("Named", &[]).unwrap();
    let user = schema.add_type("User", &[named]).unwrap();
    let group = schema.add_type("Group", &[named]).unwrap();

    schema.add_pointer(named, "name", str_ty).unwrap();
    schema.add_pointer(user, "friends", user).unwrap();
    schema.add_pointer(user, "groups", group).unwrap();
    schema.add_pointer(user, "age", int_ty).unwrap();
    schema.add_pointer(group, "owner", user).unwrap();

    let count = schema.add_function("count", true).unwrap();
    let sum = schema.add_function("sum", true).unwrap();
    let len = schema.add_function("len", false).unwrap();

    Fixture {
        schema,
        str_ty,
        int_ty,
        user,
        group,
        count,
        sum,
        len,
    }
}
