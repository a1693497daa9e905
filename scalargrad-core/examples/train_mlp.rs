//! # Training a small MLP with plain gradient descent
//!
//! Fits a 3 → [4, 4, 1] perceptron to four labelled points:
//! 1.  Build the model; its parameters become labelled leaves of one `Graph`.
//! 2.  Each epoch: forward every sample, sum the squared errors, reset the
//!     parameter gradients, backpropagate from the loss.
//! 3.  Update every parameter in place with `set_value(p, p - lr * grad)`.
//!
//! Every epoch records a fresh forward pass, so the graph keeps growing; this is fine
//! for a toy run of this size.
//!
//! ## Running
//! `cargo run --example train_mlp`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{Graph, Mlp, Module, NodeId, ScalarGradError};

const EPOCHS: usize = 50;
const LEARNING_RATE: f64 = 0.05;

fn squared_error_loss(
    graph: &mut Graph,
    model: &Mlp,
    xs: &[[f64; 3]],
    ys: &[f64],
) -> Result<(NodeId, Vec<NodeId>), ScalarGradError> {
    let mut predictions = Vec::with_capacity(xs.len());
    let mut terms = Vec::with_capacity(xs.len());
    for (x, &y) in xs.iter().zip(ys) {
        let inputs: Vec<NodeId> = x.iter().map(|&v| graph.leaf(v)).collect();
        let pred = model.forward(graph, &inputs)?.into_vec()[0];
        let diff = graph.sub(pred, y)?;
        terms.push(graph.pow(diff, 2)?);
        predictions.push(pred);
    }
    Ok((graph.sum(&terms)?, predictions))
}

fn main() -> Result<(), ScalarGradError> {
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(1337);
    let model = Mlp::new(&mut graph, &mut rng, 3, &[4, 4, 1]);
    println!("Model created with {} parameters", model.num_parameters());

    for epoch in 0..EPOCHS {
        let (loss, _) = squared_error_loss(&mut graph, &model, &xs, &ys)?;

        model.zero_grad(&mut graph)?;
        graph.backward(loss)?;

        for p in model.parameters() {
            let updated = graph.value(p)? - LEARNING_RATE * graph.grad(p)?;
            graph.set_value(p, updated)?;
        }

        if epoch % 5 == 0 || epoch + 1 == EPOCHS {
            println!(
                "Epoch [{}/{}], Loss: {:.6} ({} nodes recorded)",
                epoch + 1,
                EPOCHS,
                graph.value(loss)?,
                graph.len()
            );
        }
    }

    let (_, predictions) = squared_error_loss(&mut graph, &model, &xs, &ys)?;
    println!("\nPredictions after training:");
    for (pred, target) in predictions.iter().zip(ys) {
        println!("  {:+.4} (target {:+.1})", graph.value(*pred)?, target);
    }
    Ok(())
}
