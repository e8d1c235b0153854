//! IR node kinds.
//!
//! `Node` is a closed sum type: every pass matches it exhaustively, so a
//! new kind cannot silently fall through an analysis.

use quiver_core::{FunctionId, PointerClassId, PointerDirection, Symbol, TypeId};

use super::{NodeId, PathId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Set(Set),
    Pointer(Pointer),
    Stmt(Stmt),
    Parameter(Parameter),
    FunctionCall(FunctionCall),
    Constant(Constant),
    BinOp(BinOp),
}

/// Evaluation of a path or an expression to a collection of instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set {
    /// Static type of the elements.
    pub scls: TypeId,
    /// Embedded expression; a `Stmt` for subqueries and computables.
    pub expr: Option<NodeId>,
    /// `Pointer` this set is the target of; `None` for roots.
    pub rptr: Option<NodeId>,
    pub path_id: PathId,
    /// Nominal identity assigned by a view rebinding.
    pub real_path_id: Option<PathId>,
    /// Set this one rebinds as a view (non-owning).
    pub view_source: Option<NodeId>,
    /// Projected-property sets of a view; empty when the set has no shape.
    pub shape: Vec<NodeId>,
    /// Base set of a transparent alias (non-owning).
    pub source: Option<NodeId>,
}

impl Set {
    pub fn new(scls: TypeId, path_id: PathId) -> Self {
        Self {
            scls,
            expr: None,
            rptr: None,
            path_id,
            real_path_id: None,
            view_source: None,
            shape: Vec::new(),
            source: None,
        }
    }

    pub fn with_expr(mut self, expr: NodeId) -> Self {
        self.expr = Some(expr);
        self
    }

    pub fn with_real_path_id(mut self, path_id: PathId) -> Self {
        self.real_path_id = Some(path_id);
        self
    }

    pub fn with_view_source(mut self, view_source: NodeId) -> Self {
        self.view_source = Some(view_source);
        self
    }

    pub fn with_shape(mut self, shape: Vec<NodeId>) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_source(mut self, source: NodeId) -> Self {
        self.source = Some(source);
        self
    }

    /// Identity used for caching: the override if present, else `path_id`.
    pub fn real_path_id(&self) -> &PathId {
        self.real_path_id.as_ref().unwrap_or(&self.path_id)
    }
}

/// One navigation step between two sets.
///
/// `target` is the set whose `rptr` is this pointer; it is a back-edge and
/// not a child for traversal purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    pub source: NodeId,
    pub target: NodeId,
    pub ptrcls: PointerClassId,
    pub direction: PointerDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    /// Value the statement yields.
    pub result: NodeId,
}

impl Stmt {
    /// Plain `SELECT result` with no clauses.
    pub fn select(result: NodeId) -> Self {
        Self {
            kind: StmtKind::Select(SelectClauses::default()),
            result,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self.kind, StmtKind::Select(_))
    }

    pub fn keyword(&self) -> &'static str {
        match self.kind {
            StmtKind::Select(_) => "Select",
            StmtKind::Insert { .. } => "Insert",
            StmtKind::Update { .. } => "Update",
            StmtKind::Delete { .. } => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
    Select(SelectClauses),
    Insert {
        subject: NodeId,
    },
    Update {
        subject: NodeId,
        filter: Option<NodeId>,
    },
    Delete {
        subject: NodeId,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectClauses {
    pub filter: Option<NodeId>,
    pub orderby: Vec<NodeId>,
    pub offset: Option<NodeId>,
    pub limit: Option<NodeId>,
}

/// Placeholder bound to a value at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: Symbol,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub func: FunctionId,
    pub args: Vec<NodeId>,
}

/// Literal value; the text is kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    pub scls: TypeId,
    pub value: Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinOp {
    pub op: BinOpKind,
    pub left: NodeId,
    pub right: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinOpKind {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Eq => "=",
            BinOpKind::NotEq => "!=",
            BinOpKind::Lt => "<",
            BinOpKind::LtEq => "<=",
            BinOpKind::Gt => ">",
            BinOpKind::GtEq => ">=",
            BinOpKind::And => "and",
            BinOpKind::Or => "or",
        }
    }
}

impl Node {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Set(_) => "Set",
            Node::Pointer(_) => "Pointer",
            Node::Stmt(_) => "Stmt",
            Node::Parameter(_) => "Parameter",
            Node::FunctionCall(_) => "FunctionCall",
            Node::Constant(_) => "Constant",
            Node::BinOp(_) => "BinOp",
        }
    }

    pub fn as_set(&self) -> Option<&Set> {
        match self {
            Node::Set(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_pointer(&self) -> Option<&Pointer> {
        match self {
            Node::Pointer(ptr) => Some(ptr),
            _ => None,
        }
    }

    pub fn as_stmt(&self) -> Option<&Stmt> {
        match self {
            Node::Stmt(stmt) => Some(stmt),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Node::Set(_))
    }

    pub fn is_stmt(&self) -> bool {
        matches!(self, Node::Stmt(_))
    }

    /// Child nodes in declaration order.
    pub fn children(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        match self {
            Node::Set(set) => {
                out.extend(set.expr);
                out.extend(set.rptr);
                out.extend(set.view_source);
                out.extend(set.shape.iter().copied());
                out.extend(set.source);
            }
            Node::Pointer(ptr) => out.push(ptr.source),
            Node::Stmt(stmt) => {
                out.push(stmt.result);
                match &stmt.kind {
                    StmtKind::Select(clauses) => {
                        out.extend(clauses.filter);
                        out.extend(clauses.orderby.iter().copied());
                        out.extend(clauses.offset);
                        out.extend(clauses.limit);
                    }
                    StmtKind::Insert { subject } | StmtKind::Delete { subject } => {
                        out.push(*subject);
                    }
                    StmtKind::Update { subject, filter } => {
                        out.push(*subject);
                        out.extend(*filter);
                    }
                }
            }
            Node::FunctionCall(call) => out.extend(call.args.iter().copied()),
            Node::BinOp(op) => {
                out.push(op.left);
                out.push(op.right);
            }
            Node::Parameter(_) | Node::Constant(_) => {}
        }
        out
    }
}

macro_rules! impl_into_node {
    ($($variant:ident),*) => {$(
        impl From<$variant> for Node {
            fn from(node: $variant) -> Self {
                Node::$variant(node)
            }
        }
    )*};
}

impl_into_node!(Set, Pointer, Stmt, Parameter, FunctionCall, Constant, BinOp);
