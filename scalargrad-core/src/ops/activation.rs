//! Nonlinear activations: the exponential and the hyperbolic tangent.

use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::operand::Operand;

impl Graph {
    /// `e ** a`
    pub fn exp(&mut self, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
        let a = self.resolve(a.into())?;
        let value = self.value_unchecked(a).exp();
        Ok(self.push(value, Op::Exp(a)))
    }

    /// Hyperbolic tangent, `(e^{2a} - 1) / (e^{2a} + 1)`.
    ///
    /// Evaluated with `f64::tanh`, which saturates to ±1 where the exponential form
    /// would overflow to NaN.
    pub fn tanh(&mut self, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
        let a = self.resolve(a.into())?;
        let value = self.value_unchecked(a).tanh();
        Ok(self.push(value, Op::Tanh(a)))
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
