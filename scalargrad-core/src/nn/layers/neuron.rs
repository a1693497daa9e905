use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::nn::init::Uniform;
use crate::nn::module::{Module, Output};
use rand::Rng;

/// A single unit computing `tanh(b + Σ w_i · x_i)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
}

impl Neuron {
    /// Creates a neuron with `in_features` weights and one bias, all drawn from
    /// `Uniform::default()` (`[-1, 1]`).
    pub fn new<R: Rng + ?Sized>(graph: &mut Graph, rng: &mut R, in_features: usize) -> Self {
        Self::with_init(graph, rng, in_features, Uniform::default())
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        in_features: usize,
        init: Uniform,
    ) -> Self {
        Self::build(graph, rng, in_features, init, "")
    }

    /// Weights are drawn first, then the bias. `prefix` is prepended to the labels.
    pub(crate) fn build<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        in_features: usize,
        init: Uniform,
        prefix: &str,
    ) -> Self {
        let weights = (0..in_features)
            .map(|i| init.sample_leaf(graph, rng, format!("{}w{}", prefix, i)))
            .collect();
        let bias = init.sample_leaf(graph, rng, format!("{}b", prefix));
        Neuron { weights, bias }
    }

    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    /// Forward pass returning the activation node directly.
    pub fn activate(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputWidthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        for &id in inputs.iter().chain(&self.weights) {
            graph.check(id)?;
        }
        graph.check(self.bias)?;

        let mut act = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            let wx = graph.mul(w, x)?;
            act = graph.add(act, wx)?;
        }
        graph.tanh(act)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Output, ScalarGradError> {
        self.activate(graph, inputs).map(Output::Scalar)
    }

    /// Weights followed by the bias.
    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params: Vec<(String, NodeId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("w{}", i), w))
            .collect();
        params.push(("b".to_string(), self.bias));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
