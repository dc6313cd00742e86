use super::{node::rank, Tree};
use crate::error::StructureError;

impl<K: Ord> Tree<K> {
    /// Checks every node against the heap-order, leftist and rank invariants.
    ///
    /// Trees built through this crate always pass; this is meant for tests and debugging. It
    /// never modifies the tree, and reports the first offending node in pre-order.
    pub fn check_invariants(&self) -> Result<(), StructureError> {
        for (node_index, step) in self.walk().enumerate() {
            let node = step.node;

            if node.left.is_none() && node.right.is_some() {
                return Err(StructureError::MissingLeft { node: node_index });
            }

            if node.children().any(|child| child.value < node.value) {
                return Err(StructureError::HeapOrder { node: node_index });
            }

            if rank(&node.left) < rank(&node.right) {
                return Err(StructureError::Leftist { node: node_index });
            }

            let expected = if node.is_leaf() {
                0
            } else {
                rank(&node.right) + 1
            };

            if node.rank != expected {
                return Err(StructureError::Rank {
                    node: node_index,
                    expected,
                    found: node.rank,
                });
            }
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.check_invariants().is_ok()
    }
}
