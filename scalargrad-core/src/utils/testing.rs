use crate::autograd::{Graph, NodeId};

/// Checks that the gradients of `nodes` match `expected` within `tolerance`.
/// Panics with the offending index if a gradient differs or a node is unknown.
pub fn check_grads_near(graph: &Graph, nodes: &[NodeId], expected: &[f64], tolerance: f64) {
    assert_eq!(nodes.len(), expected.len(), "Gradient count mismatch");

    for (i, (&node, &e)) in nodes.iter().zip(expected.iter()).enumerate() {
        let actual = graph
            .grad(node)
            .expect("Failed to read gradient in check_grads_near");
        let diff = (actual - e).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at index {} ({}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, node, actual, e, diff, tolerance
            );
        }
    }
}

/// Creates one leaf per value.
pub fn leaves(graph: &mut Graph, values: &[f64]) -> Vec<NodeId> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}
