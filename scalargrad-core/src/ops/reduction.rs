use crate::autograd::{Graph, NodeId};
use crate::error::ScalarGradError;

impl Graph {
    /// Sums `terms` left to right with `add`. An empty slice yields a `0.0` leaf.
    ///
    /// All handles are checked before anything is recorded.
    pub fn sum(&mut self, terms: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        for &term in terms {
            self.check(term)?;
        }
        let Some((&first, rest)) = terms.split_first() else {
            return Ok(self.leaf(0.0));
        };
        rest.iter().try_fold(first, |acc, &term| self.add(acc, term))
    }
}

#[cfg(test)]
#[path = "reduction_test.rs"]
mod tests;
