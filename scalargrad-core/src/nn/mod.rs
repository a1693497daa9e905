//! Parametric units built on the autograd graph: neuron, layer, and their shared trait.

pub mod init;
pub mod layers;
pub mod module; // Trait Module

// Re-export common items
pub use init::Uniform;
pub use layers::{Layer, Neuron};
pub use module::{Module, Output};
