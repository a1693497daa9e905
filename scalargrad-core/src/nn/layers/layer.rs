use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::nn::init::Uniform;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{Module, Output};
use rand::Rng;

/// Neurons evaluated side by side on the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Layer {
    /// Creates `out_features` neurons, each taking `in_features` inputs.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        in_features: usize,
        out_features: usize,
    ) -> Self {
        Self::with_init(graph, rng, in_features, out_features, Uniform::default())
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        in_features: usize,
        out_features: usize,
        init: Uniform,
    ) -> Self {
        Self::build(graph, rng, in_features, out_features, init, "")
    }

    pub(crate) fn build<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        in_features: usize,
        out_features: usize,
        init: Uniform,
        prefix: &str,
    ) -> Self {
        let neurons = (0..out_features)
            .map(|j| Neuron::build(graph, rng, in_features, init, &format!("{}neuron{}.", prefix, j)))
            .collect();
        Layer {
            neurons,
            in_features,
        }
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// One output per neuron, unwrapped into `Output::Scalar` when the layer has a
    /// single neuron.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Output, ScalarGradError> {
        if inputs.len() != self.in_features {
            return Err(ScalarGradError::InputWidthMismatch {
                expected: self.in_features,
                actual: inputs.len(),
            });
        }
        let outputs = self
            .neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Output::from_nodes(outputs))
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params = Vec::new();
        for (j, neuron) in self.neurons.iter().enumerate() {
            for (name, id) in neuron.named_parameters() {
                params.push((format!("neuron{}.{}", j, name), id));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
