//! Arithmetic operations on graph nodes.
//!
//! `add`, `mul` and `pow` record nodes with their own derivative rule. `neg`, `sub` and
//! `div` are compositions of those and inherit their rules.

use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::operand::{Exponent, Operand};

impl Graph {
    /// `a + b`
    pub fn add(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        let (a, b) = self.resolve_pair(a.into(), b.into())?;
        let value = self.value_unchecked(a) + self.value_unchecked(b);
        Ok(self.push(value, Op::Add(a, b)))
    }

    /// `a * b`
    pub fn mul(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        let (a, b) = self.resolve_pair(a.into(), b.into())?;
        let value = self.value_unchecked(a) * self.value_unchecked(b);
        Ok(self.push(value, Op::Mul(a, b)))
    }

    /// `-a`, recorded as `a * -1`.
    pub fn neg(&mut self, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
        let a = self.resolve(a.into())?;
        self.mul(a, -1.0)
    }

    /// `a - b`, recorded as `a + (b * -1)`.
    pub fn sub(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        let (a, b) = self.resolve_pair(a.into(), b.into())?;
        let neg_b = self.neg(b)?;
        self.add(a, neg_b)
    }

    /// `a ** exponent` for a fixed real exponent.
    ///
    /// # Errors
    /// `InvalidExponent` if the exponent is a graph node or not finite. The exponent is
    /// checked first, so on failure the graph is left unchanged.
    pub fn pow(
        &mut self,
        a: impl Into<Operand>,
        exponent: impl Into<Exponent>,
    ) -> Result<NodeId, ScalarGradError> {
        let exponent = exponent.into().constant()?;
        let base = self.resolve(a.into())?;
        let value = self.value_unchecked(base).powf(exponent);
        Ok(self.push(value, Op::Pow { base, exponent }))
    }

    /// `a / b`, recorded as `a * b ** -1`. Division by a zero-valued node yields
    /// infinity or NaN like plain floating point.
    pub fn div(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, ScalarGradError> {
        let (a, b) = self.resolve_pair(a.into(), b.into())?;
        let reciprocal = self.pow(b, -1.0)?;
        self.mul(a, reciprocal)
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
