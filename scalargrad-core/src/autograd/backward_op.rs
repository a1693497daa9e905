use crate::autograd::node::{Node, NodeId, Op};

/// Gradient contributions produced by one node's local rule: at most one per operand edge.
pub(crate) type Contributions = [Option<(NodeId, f64)>; 2];

impl Op {
    /// Applies the chain rule for this operation.
    ///
    /// Given the value and the fully accumulated gradient of the node carrying this tag,
    /// returns `d(root)/d(operand)` contributions for each operand edge. The caller adds
    /// them into the operands' gradients; nothing is assigned here.
    ///
    /// `nodes` must contain every operand (guaranteed for handles recorded by the graph).
    pub(crate) fn local_gradients(&self, nodes: &[Node], out_value: f64, out_grad: f64) -> Contributions {
        match *self {
            Op::Leaf => [None, None],
            // d(a + b)/da = d(a + b)/db = 1
            Op::Add(a, b) => [Some((a, out_grad)), Some((b, out_grad))],
            // d(a * b)/da = b, d(a * b)/db = a
            Op::Mul(a, b) => {
                let a_value = nodes[a.0].value;
                let b_value = nodes[b.0].value;
                [Some((a, b_value * out_grad)), Some((b, a_value * out_grad))]
            }
            // d(a^p)/da = p * a^(p - 1)
            Op::Pow { base, exponent } => {
                let base_value = nodes[base.0].value;
                let local = exponent * base_value.powf(exponent - 1.0);
                [Some((base, local * out_grad)), None]
            }
            // d(e^a)/da = e^a, which is the output itself
            Op::Exp(a) => [Some((a, out_value * out_grad)), None],
            // d(tanh a)/da = 1 - tanh(a)^2
            Op::Tanh(a) => [Some((a, (1.0 - out_value * out_value) * out_grad)), None],
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
