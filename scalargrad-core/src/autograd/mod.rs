//! Scalar computation graph: nodes, the arena, backward propagation and gradient checking.

pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod node;

pub use graph::Graph;
pub use node::{Node, NodeId, Op};
