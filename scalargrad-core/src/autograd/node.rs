use std::fmt;

/// Handle to a node stored in a [`Graph`](crate::autograd::Graph).
///
/// Handles are plain arena indices: cheap to copy, compared by identity. A node can only
/// reference handles that existed when it was created, so every operand index is strictly
/// lower than the index of the node consuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// The operation that produced a node, together with its operands.
///
/// The backward pass dispatches on this tag to apply the local derivative rule
/// (see `backward_op.rs`). Negation, subtraction and division have no tag of their own:
/// they are recorded as the `Mul`/`Add`/`Pow` nodes they are built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input, parameter or constant. No operands, no-op backward rule.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// Power with a fixed, non-differentiated exponent.
    Pow { base: NodeId, exponent: f64 },
    Exp(NodeId),
    Tanh(NodeId),
}

impl Op {
    /// Direct operands of the operation, in recording order.
    ///
    /// The same handle appears twice for a node like `a + a`; the backward rule then
    /// contributes once per edge.
    pub fn operands(&self) -> impl Iterator<Item = NodeId> {
        let (first, second) = match *self {
            Op::Leaf => (None, None),
            Op::Add(a, b) | Op::Mul(a, b) => (Some(a), Some(b)),
            Op::Pow { base, .. } => (Some(base), None),
            Op::Exp(a) | Op::Tanh(a) => (Some(a), None),
        };
        first.into_iter().chain(second)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => Ok(()),
            Op::Add(..) => write!(f, "+"),
            Op::Mul(..) => write!(f, "*"),
            Op::Pow { exponent, .. } => write!(f, "**{}", exponent),
            Op::Exp(_) => write!(f, "exp"),
            Op::Tanh(_) => write!(f, "tanh"),
        }
    }
}

/// A scalar value recorded in the computation graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn new(value: f64, op: Op) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            label: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Gradient accumulated by the backward passes run since the last reset.
    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.op.is_leaf()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={}", self.value, self.grad)?;
        if !self.op.is_leaf() {
            write!(f, ", op={}", self.op)?;
        }
        if let Some(label) = &self.label {
            write!(f, ", label={}", label)?;
        }
        write!(f, ")")
    }
}
