use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;

/// Right- or left-hand side of an operation: an existing node or a raw literal.
///
/// Literals are wrapped into a fresh leaf when the operation runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Literal(f64),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<&NodeId> for Operand {
    fn from(id: &NodeId) -> Self {
        Operand::Node(*id)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Literal(value)
    }
}

/// Exponent passed to [`Graph::pow`].
///
/// Only `Constant` is accepted. `Node` exists so that an attempt to raise to a
/// differentiable exponent is rejected with `InvalidExponent` rather than silently
/// treated as a constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exponent {
    Constant(f64),
    Node(NodeId),
}

impl From<f64> for Exponent {
    fn from(value: f64) -> Self {
        Exponent::Constant(value)
    }
}

impl From<i32> for Exponent {
    fn from(value: i32) -> Self {
        Exponent::Constant(f64::from(value))
    }
}

impl From<NodeId> for Exponent {
    fn from(id: NodeId) -> Self {
        Exponent::Node(id)
    }
}

impl Exponent {
    pub(crate) fn constant(self) -> Result<f64, ScalarGradError> {
        match self {
            Exponent::Constant(p) if p.is_finite() => Ok(p),
            Exponent::Constant(p) => Err(ScalarGradError::InvalidExponent {
                reason: format!("exponent must be a finite real number, got {}", p),
            }),
            Exponent::Node(id) => Err(ScalarGradError::InvalidExponent {
                reason: format!("exponent must be a fixed real number, got graph node {}", id),
            }),
        }
    }
}

impl Graph {
    /// Fails if `operand` names a node outside this graph. Never mutates.
    pub(crate) fn check_operand(&self, operand: Operand) -> Result<(), ScalarGradError> {
        match operand {
            Operand::Node(id) => self.check(id),
            Operand::Literal(_) => Ok(()),
        }
    }

    /// Turns an already checked operand into a handle, creating a leaf for literals.
    pub(crate) fn materialize(&mut self, operand: Operand) -> NodeId {
        match operand {
            Operand::Node(id) => id,
            Operand::Literal(value) => self.leaf(value),
        }
    }

    /// Validates both operands before creating any literal leaf, so a failed
    /// binary operation leaves the graph untouched.
    pub(crate) fn resolve_pair(
        &mut self,
        a: Operand,
        b: Operand,
    ) -> Result<(NodeId, NodeId), ScalarGradError> {
        self.check_operand(a)?;
        self.check_operand(b)?;
        Ok((self.materialize(a), self.materialize(b)))
    }

    pub(crate) fn resolve(&mut self, a: Operand) -> Result<NodeId, ScalarGradError> {
        self.check_operand(a)?;
        Ok(self.materialize(a))
    }
}
