use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Epsilon must be a positive finite number, got {0}")]
    InvalidEpsilon(f64),
}

/// Builds a fresh graph holding one leaf per input and evaluates `func` on it.
fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<(Graph, Vec<NodeId>, NodeId), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok((graph, leaves, output))
}

fn output_value<F>(func: &F, inputs: &[f64]) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let (graph, _, output) = evaluate(func, inputs)?;
    graph.value(output).map_err(GradCheckError::ForwardPassError)
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and returns the
/// scalar output node. For every input the analytical gradient from `backward` must
/// satisfy `|analytical - numerical| <= abs_tolerance + rel_tolerance * |numerical|`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tolerance: f64,
    rel_tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- Analytical gradients ---
    let (mut graph, leaves, output) = evaluate(&func, inputs)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;

    for (input_index, &leaf) in leaves.iter().enumerate() {
        let analytical_grad = graph
            .grad(leaf)
            .map_err(GradCheckError::BackwardPassError)?;
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        // --- Numerical gradient: (f(x + eps) - f(x - eps)) / 2eps ---
        let mut perturbed = inputs.to_vec();
        perturbed[input_index] = inputs[input_index] + epsilon;
        let loss_plus = output_value(&func, &perturbed)?;
        perturbed[input_index] = inputs[input_index] - epsilon;
        let loss_minus = output_value(&func, &perturbed)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > abs_tolerance + rel_tolerance * numerical_grad.abs() {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
