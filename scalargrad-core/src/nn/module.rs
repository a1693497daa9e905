use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;

/// Result of a forward pass.
///
/// A module with exactly one output unit hands back the node itself (`Scalar`);
/// otherwise one node per unit, in unit order (`Vector`).
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Scalar(NodeId),
    Vector(Vec<NodeId>),
}

impl Output {
    /// Unwraps a single node into `Scalar`, keeps everything else as `Vector`.
    pub fn from_nodes(nodes: Vec<NodeId>) -> Self {
        match nodes.as_slice() {
            [single] => Output::Scalar(*single),
            _ => Output::Vector(nodes),
        }
    }

    pub fn scalar(&self) -> Option<NodeId> {
        match self {
            Output::Scalar(id) => Some(*id),
            Output::Vector(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<NodeId> {
        match self {
            Output::Scalar(id) => vec![id],
            Output::Vector(nodes) => nodes,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Output::Scalar(_) => 1,
            Output::Vector(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The base trait for the parametric units (neuron, layer, multi-layer perceptron).
///
/// Parameters are leaf nodes living in a caller-owned [`Graph`]; a module only keeps
/// their handles.
pub trait Module: std::fmt::Debug {
    /// Evaluates the module on `inputs`, recording the computation in `graph`.
    ///
    /// # Errors
    /// `InputWidthMismatch` if `inputs.len()` differs from the module's input width,
    /// `UnknownNode` if a handle does not belong to `graph`.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Output, ScalarGradError>;

    /// All learnable parameters, in a stable order.
    fn parameters(&self) -> Vec<NodeId>;

    /// Parameters with hierarchical names (e.g. "layer1.neuron0.w2"). The names match the
    /// labels given to the parameter nodes at construction.
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter, and of every intermediate node of
    /// `graph`, to zero.
    ///
    /// A backward pass run afterwards from the same root reproduces the gradients of a
    /// first pass. Gradients of other leaves (inputs, other modules' parameters) are
    /// left as they are.
    fn zero_grad(&self, graph: &mut Graph) -> Result<(), ScalarGradError> {
        for param in self.parameters() {
            graph.zero_grad(param)?;
        }
        graph.zero_grad_intermediate();
        Ok(())
    }
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;
