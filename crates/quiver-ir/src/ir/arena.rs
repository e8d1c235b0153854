//! Node storage for one compilation job.
//!
//! Nodes live in a flat `Vec` and refer to each other by `NodeId`. The
//! arena is append-only: once added, a node is never modified, so analysis
//! results computed against an id stay valid while new nodes are added.

use quiver_core::{FunctionId, Interner, PointerClassId, PointerDirection, Symbol, TypeId};

use super::{BinOp, BinOpKind, Constant, FunctionCall, Node, NodeId, Parameter, PathId, Pointer, Set, Stmt};

#[derive(Debug, Clone, Default)]
pub struct Ir {
    nodes: Vec<Node>,
    names: Interner,
}

impl Ir {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: impl Into<Node>) -> NodeId {
        let id = self.next_id();
        self.nodes.push(node.into());
        id
    }

    /// # Panics
    /// Panics if `id` was issued by another arena.
    pub fn node(&self, id: NodeId) -> &Node {
        self.ensure_node(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// The set at `id`, or `None` if `id` holds another kind.
    pub fn set(&self, id: NodeId) -> Option<&Set> {
        self.node(id).as_set()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::from_raw(i as u32), n))
    }

    pub fn intern(&mut self, name: &str) -> Symbol {
        self.names.intern(name)
    }

    pub fn name(&self, sym: Symbol) -> &str {
        self.names.resolve(sym)
    }

    fn next_id(&self) -> NodeId {
        NodeId::from_raw(self.nodes.len() as u32)
    }

    // ------------------------------------------------------------------
    // Construction helpers for the translation stage
    // ------------------------------------------------------------------

    /// Plain path rooted at `scls`.
    pub fn add_root_set(&mut self, scls: TypeId) -> NodeId {
        self.add(Set::new(scls, PathId::root(scls)))
    }

    /// Set whose value is produced by evaluating `expr`. Its path is rooted
    /// at `expr`, so it never equals another computed set's path.
    pub fn add_computed_set(&mut self, scls: TypeId, expr: NodeId) -> NodeId {
        self.add(Set::new(scls, PathId::computed(scls, expr)).with_expr(expr))
    }

    /// Step from `source` along `ptrcls`, yielding the target set.
    ///
    /// Adds the target set and its `Pointer` together so that
    /// `target.rptr` and `pointer.target` refer to each other from the
    /// start. The target's path id extends the source's by one step.
    pub fn add_traversal(
        &mut self,
        source: NodeId,
        ptrcls: PointerClassId,
        direction: PointerDirection,
        target_type: TypeId,
    ) -> NodeId {
        let path_id = self
            .ensure_set(source)
            .path_id
            .extend(ptrcls, direction, target_type);

        let target = self.next_id();
        let rptr = NodeId::from_raw(target.as_u32() + 1);

        let mut set = Set::new(target_type, path_id);
        set.rptr = Some(rptr);
        self.nodes.push(Node::Set(set));
        self.nodes.push(Node::Pointer(Pointer {
            source,
            target,
            ptrcls,
            direction,
        }));

        target
    }

    pub fn add_parameter(&mut self, name: &str) -> NodeId {
        let name = self.intern(name);
        self.add(Parameter { name })
    }

    pub fn add_constant(&mut self, scls: TypeId, value: &str) -> NodeId {
        let value = self.intern(value);
        self.add(Constant { scls, value })
    }

    pub fn add_call(&mut self, func: FunctionId, args: Vec<NodeId>) -> NodeId {
        self.add(FunctionCall { func, args })
    }

    pub fn add_binop(&mut self, op: BinOpKind, left: NodeId, right: NodeId) -> NodeId {
        self.add(BinOp { op, left, right })
    }

    pub fn add_select(&mut self, result: NodeId) -> NodeId {
        self.add(Stmt::select(result))
    }
}
