//! Scalar reverse-mode automatic differentiation, plus neuron/layer/MLP units built on it.
//!
//! Values live as nodes in a caller-owned [`Graph`]; operations append nodes and
//! [`Graph::backward`] propagates gradients from any node back to every node it depends on.

pub mod autograd;
pub mod model;
pub mod nn;
pub mod ops;
pub mod utils;

pub mod error;
pub use error::ScalarGradError;

// Re-export the main types so they are reachable as `scalargrad_core::Graph`, etc.
pub use autograd::{Graph, Node, NodeId, Op};
pub use model::Mlp;
pub use nn::{Layer, Module, Neuron, Output, Uniform};
pub use ops::{Exponent, Operand};
