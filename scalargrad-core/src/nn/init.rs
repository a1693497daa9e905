use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;
use rand::Rng;

/// Uniform initialization over the closed interval `[low, high]`.
///
/// The default range is `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    low: f64,
    high: f64,
}

impl Default for Uniform {
    fn default() -> Self {
        Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Uniform {
    /// Creates the range spanned by `a` and `b`, in either order.
    ///
    /// # Errors
    /// `InvalidInitRange` if either bound is NaN or infinite.
    pub fn new(a: f64, b: f64) -> Result<Self, ScalarGradError> {
        if !(a.is_finite() && b.is_finite()) {
            return Err(ScalarGradError::InvalidInitRange { low: a, high: b });
        }
        Ok(Uniform {
            low: a.min(b),
            high: a.max(b),
        })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.low..=self.high)
    }

    /// Draws a value and records it as a labelled parameter leaf.
    pub fn sample_leaf<R: Rng + ?Sized>(
        &self,
        graph: &mut Graph,
        rng: &mut R,
        label: impl Into<String>,
    ) -> NodeId {
        let value = self.sample(rng);
        graph.leaf_with_label(value, label)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
