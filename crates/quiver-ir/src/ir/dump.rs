//! Text dump of an IR arena for snapshot tests and debugging.

use std::fmt::Write;

use quiver_core::Schema;

use super::{Ir, Node, NodeId, StmtKind};
use crate::walk::{Visit, find_children};

/// Printer for `Ir` with an optional reachability filter.
pub struct IrPrinter<'a, S> {
    ir: &'a Ir,
    schema: &'a S,
    root: Option<NodeId>,
}

impl<'a, S: Schema> IrPrinter<'a, S> {
    pub fn new(ir: &'a Ir, schema: &'a S) -> Self {
        Self {
            ir,
            schema,
            root: None,
        }
    }

    /// Print only nodes reachable from `root`, in traversal order.
    pub fn root(mut self, root: NodeId) -> Self {
        self.root = Some(root);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let ids: Vec<NodeId> = match self.root {
            Some(root) => find_children(self.ir, root, |_, _| Visit::Include),
            None => self.ir.iter().map(|(id, _)| id).collect(),
        };

        for id in ids {
            write!(w, "{id}: ")?;
            self.format_node(w, self.ir.node(id))?;
            writeln!(w)?;
        }
        Ok(())
    }

    fn format_node(&self, w: &mut String, node: &Node) -> std::fmt::Result {
        match node {
            Node::Set(set) => {
                write!(
                    w,
                    "Set {} @ {}",
                    self.schema.type_name(set.scls),
                    set.path_id.display(self.schema)
                )?;
                if let Some(expr) = set.expr {
                    write!(w, " expr={expr}")?;
                }
                if let Some(rptr) = set.rptr {
                    write!(w, " rptr={rptr}")?;
                }
                if let Some(real) = &set.real_path_id {
                    write!(w, " real={}", real.display(self.schema))?;
                }
                if let Some(view_source) = set.view_source {
                    write!(w, " view_source={view_source}")?;
                }
                if !set.shape.is_empty() {
                    write!(w, " shape=[{}]", join_ids(&set.shape))?;
                }
                if let Some(source) = set.source {
                    write!(w, " source={source}")?;
                }
            }
            Node::Pointer(ptr) => {
                write!(
                    w,
                    "Pointer {} .{}{} {}",
                    ptr.source,
                    ptr.direction.arrow(),
                    self.schema.pointer(ptr.ptrcls).name,
                    ptr.target
                )?;
            }
            Node::Stmt(stmt) => {
                write!(w, "{} {}", stmt.keyword(), stmt.result)?;
                match &stmt.kind {
                    StmtKind::Select(clauses) => {
                        if let Some(filter) = clauses.filter {
                            write!(w, " filter={filter}")?;
                        }
                        if !clauses.orderby.is_empty() {
                            write!(w, " orderby=[{}]", join_ids(&clauses.orderby))?;
                        }
                        if let Some(offset) = clauses.offset {
                            write!(w, " offset={offset}")?;
                        }
                        if let Some(limit) = clauses.limit {
                            write!(w, " limit={limit}")?;
                        }
                    }
                    StmtKind::Insert { subject } | StmtKind::Delete { subject } => {
                        write!(w, " subject={subject}")?;
                    }
                    StmtKind::Update { subject, filter } => {
                        write!(w, " subject={subject}")?;
                        if let Some(filter) = filter {
                            write!(w, " filter={filter}")?;
                        }
                    }
                }
            }
            Node::Parameter(param) => {
                write!(w, "Parameter ${}", self.ir.name(param.name))?;
            }
            Node::FunctionCall(call) => {
                write!(
                    w,
                    "Call {}({})",
                    self.schema.function(call.func).name,
                    join_ids(&call.args)
                )?;
            }
            Node::Constant(constant) => {
                write!(
                    w,
                    "Constant {} {}",
                    self.schema.type_name(constant.scls),
                    self.ir.name(constant.value)
                )?;
            }
            Node::BinOp(op) => {
                write!(w, "BinOp {} {} {}", op.left, op.op.symbol(), op.right)?;
            }
        }
        Ok(())
    }
}

fn join_ids(ids: &[NodeId]) -> String {
    ids.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
