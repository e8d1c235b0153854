//! Reference and scope analysis over IR trees.
//!
//! All functions take the arena and the root of the expression to
//! inspect; results are advisory and never stored on the nodes.
//!
//! - `refs`: source/terminal path references, parameters, constness
//! - `scope`: aggregate detection bounded by subquery statements

mod refs;
mod scope;


pub use refs::{get_source_references, get_terminal_references, get_variables, is_const, path_sets};
pub use scope::is_aggregated_expr;
