//! IR node model.
//!
//! A compiled query is a tree of `Node`s owned by an `Ir` arena. Sets,
//! pointers and statements reference each other through `NodeId`s;
//! back-references (`rptr.source`, `view_source`, `source`) are ids too,
//! so the arena never holds reference cycles.

mod arena;
mod dump;
mod ids;
mod invariants;
mod nodes;
mod path_id;


pub use arena::Ir;
pub use dump::IrPrinter;
pub use ids::NodeId;
pub use nodes::{
    BinOp, BinOpKind, Constant, FunctionCall, Node, Parameter, Pointer, SelectClauses, Set, Stmt,
    StmtKind,
};
pub use path_id::{PathId, PathIdDisplay, PathStep};
