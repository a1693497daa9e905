use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::nn::init::Uniform;
use crate::nn::layers::Layer;
use crate::nn::module::{Module, Output};
use log::debug;
use rand::Rng;

/// Multi-layer perceptron: layers applied in sequence, each layer's width feeding the
/// next layer's input.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
    in_features: usize,
}

impl Mlp {
    /// Builds `widths.len()` layers; layer `i` has `widths[i]` neurons.
    ///
    /// `Mlp::new(graph, rng, 3, &[4, 4, 1])` creates layers 3→4, 4→4 and 4→1.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        in_features: usize,
        widths: &[usize],
    ) -> Self {
        Self::with_init(graph, rng, in_features, widths, Uniform::default())
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        in_features: usize,
        widths: &[usize],
        init: Uniform,
    ) -> Self {
        let sizes: Vec<usize> = std::iter::once(in_features)
            .chain(widths.iter().copied())
            .collect();
        let layers: Vec<Layer> = sizes
            .windows(2)
            .enumerate()
            .map(|(i, w)| Layer::build(graph, rng, w[0], w[1], init, &format!("layer{}.", i)))
            .collect();

        let mlp = Mlp {
            layers,
            in_features,
        };
        debug!(
            "Mlp: built {} layers {:?} with {} parameters",
            mlp.layers.len(),
            sizes,
            mlp.num_parameters()
        );
        mlp
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    /// Threads the inputs through every layer. The final output follows the layer rule:
    /// a last layer of width one yields `Output::Scalar`.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Output, ScalarGradError> {
        if inputs.len() != self.in_features {
            return Err(ScalarGradError::InputWidthMismatch {
                expected: self.in_features,
                actual: inputs.len(),
            });
        }
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?.into_vec();
        }
        Ok(Output::from_nodes(current))
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, id) in layer.named_parameters() {
                params.push((format!("layer{}.{}", i, name), id));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
