use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{Graph, Mlp, NodeId};

// Shared helpers for the integration tests.
// Not every test file uses every helper.
#[allow(dead_code)]
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED)
}

/// The 3 → [4, 4, 1] network used throughout the integration tests.
#[allow(dead_code)]
pub fn small_mlp(graph: &mut Graph) -> Mlp {
    Mlp::new(graph, &mut seeded_rng(), 3, &[4, 4, 1])
}

/// Squared-error loss summed over `predictions`, built from engine operations only.
#[allow(dead_code)]
pub fn squared_error(
    graph: &mut Graph,
    predictions: &[NodeId],
    targets: &[f64],
) -> Result<NodeId, scalargrad_core::ScalarGradError> {
    let mut terms = Vec::with_capacity(predictions.len());
    for (&pred, &target) in predictions.iter().zip(targets) {
        let diff = graph.sub(pred, target)?;
        terms.push(graph.pow(diff, 2)?);
    }
    graph.sum(&terms)
}
