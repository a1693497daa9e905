use crate::autograd::node::{Node, NodeId, Op};
use crate::error::ScalarGradError;
use log::{debug, trace};

/// Arena holding every node of a computation graph.
///
/// Operations append nodes; nothing is ever removed or rewired, so the operand relation
/// stays acyclic. The graph is owned by the caller and lives as long as they keep it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes recorded so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a leaf node (input, parameter or constant).
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(value, Op::Leaf)
    }

    pub fn leaf_with_label(&mut self, value: f64, label: impl Into<String>) -> NodeId {
        let id = self.leaf(value);
        self.nodes[id.0].label = Some(label.into());
        id
    }

    /// Records a new node. Operands inside `op` must already be validated.
    pub(crate) fn push(&mut self, value: f64, op: Op) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value, op));
        id
    }

    /// Fails with `UnknownNode` unless `id` belongs to this graph.
    pub(crate) fn check(&self, id: NodeId) -> Result<(), ScalarGradError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(ScalarGradError::UnknownNode {
                node: id.0,
                len: self.nodes.len(),
            })
        }
    }

    /// Value of a handle known to be valid (already checked or just recorded).
    pub(crate) fn value_unchecked(&self, id: NodeId) -> f64 {
        self.nodes[id.0].value
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, ScalarGradError> {
        self.check(id)?;
        Ok(&self.nodes[id.0])
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, ScalarGradError> {
        self.check(id)?;
        Ok(&mut self.nodes[id.0])
    }

    pub fn value(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        Ok(self.node(id)?.value)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        Ok(self.node(id)?.grad)
    }

    pub fn label(&self, id: NodeId) -> Result<Option<&str>, ScalarGradError> {
        Ok(self.node(id)?.label())
    }

    pub fn op(&self, id: NodeId) -> Result<Op, ScalarGradError> {
        Ok(self.node(id)?.op)
    }

    pub fn operands(&self, id: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        Ok(self.node(id)?.op.operands().collect())
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), ScalarGradError> {
        self.node_mut(id)?.label = Some(label.into());
        Ok(())
    }

    /// Overwrites the value of a leaf, e.g. a parameter update from a training loop.
    ///
    /// Nodes computed from the leaf keep their old value until the forward pass is re-run.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> Result<(), ScalarGradError> {
        let node = self.node_mut(id)?;
        if !node.is_leaf() {
            return Err(ScalarGradError::NotALeaf { node: id.0 });
        }
        node.value = value;
        Ok(())
    }

    pub fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<(), ScalarGradError> {
        self.node_mut(id)?.grad = grad;
        Ok(())
    }

    pub fn zero_grad(&mut self, id: NodeId) -> Result<(), ScalarGradError> {
        self.set_grad(id, 0.0)
    }

    /// Resets the gradient of every node in the graph.
    pub fn zero_grad_all(&mut self) {
        for node in &mut self.nodes {
            node.grad = 0.0;
        }
    }

    /// Resets the gradient of every non-leaf node.
    ///
    /// Intermediate gradients only hold the seeds of the last backward pass; leaves keep
    /// whatever they have accumulated.
    pub fn zero_grad_intermediate(&mut self) {
        for node in self.nodes.iter_mut().filter(|n| !n.is_leaf()) {
            node.grad = 0.0;
        }
    }

    /// Orders every node reachable from `root` so that each node comes after all of its
    /// operands (post-order depth-first traversal). `root` is the last element.
    ///
    /// The traversal is iterative and visits each node once, keyed by handle.
    pub fn topological_sort(&self, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        self.check(root)?;
        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut sorted = Vec::new();
        // (node, operands already scheduled)
        let mut stack = vec![(root, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                marks[id.0] = Mark::Done;
                sorted.push(id);
                continue;
            }
            match marks[id.0] {
                Mark::Done => continue,
                Mark::InProgress => return Err(ScalarGradError::CyclicGraph { node: id.0 }),
                Mark::Unvisited => {}
            }
            marks[id.0] = Mark::InProgress;
            stack.push((id, true));
            for operand in self.nodes[id.0].op.operands() {
                match marks[operand.0] {
                    Mark::Unvisited => stack.push((operand, false)),
                    Mark::InProgress => {
                        return Err(ScalarGradError::CyclicGraph { node: operand.0 })
                    }
                    Mark::Done => {}
                }
            }
        }

        Ok(sorted)
    }

    /// Backpropagates from `root`: adds `d(root)/d(node)` into the gradient of every node
    /// reachable from it.
    ///
    /// `root`'s own gradient is overwritten with `1.0`; every other gradient is accumulated
    /// into, never reset. Call [`zero_grad_all`](Self::zero_grad_all) (or `zero_grad` on a
    /// module) between passes unless accumulating across passes on purpose.
    pub fn backward(&mut self, root: NodeId) -> Result<(), ScalarGradError> {
        let sorted = self.topological_sort(root)?;
        debug!("backward: root {} reaches {} nodes", root, sorted.len());

        self.nodes[root.0].grad = 1.0;

        // Reverse topological order: a node's gradient is complete before its rule runs.
        for &id in sorted.iter().rev() {
            let node = &self.nodes[id.0];
            let contributions = node.op.local_gradients(&self.nodes, node.value, node.grad);
            trace!("backward: {} ({:?}) grad={}", id, node.op, node.grad);
            for (operand, grad) in contributions.into_iter().flatten() {
                self.nodes[operand.0].grad += grad;
            }
        }

        debug!("backward: done from root {}", root);
        Ok(())
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
