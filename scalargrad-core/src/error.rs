use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// `pow` only accepts a fixed, finite real exponent.
    #[error("Invalid exponent: {reason}")]
    InvalidExponent { reason: String },

    #[error("Cycle detected in the computation graph during backward pass (at node {node}).")]
    CyclicGraph { node: usize },

    #[error("Unknown node {node}: the graph only holds {len} nodes")]
    UnknownNode { node: usize, len: usize },

    #[error("Cannot overwrite the value of node {node}: it is not a leaf")]
    NotALeaf { node: usize },

    #[error("Input width mismatch: expected {expected}, got {actual}")]
    InputWidthMismatch { expected: usize, actual: usize },

    #[error("Invalid initialization range [{low}, {high}]: bounds must be finite")]
    InvalidInitRange { low: f64, high: f64 },
}
