use super::{Node, Tree};

/// Which edge of its parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Root,
    Left,
    Right,
}

/// A node visited by [`Walk`], with enough context for a renderer to lay it out.
#[derive(Debug)]
pub struct Step<'a, K> {
    pub node: &'a Node<K>,
    pub depth: usize,
    pub branch: Branch,
    /// Whether the node is the last child of its parent (always true for the root).
    pub last: bool,
}

/// Pre-order traversal: a node, then its left subtree, then its right subtree.
///
/// Uses an explicit stack, so it is safe on arbitrarily long spines.
pub struct Walk<'a, K> {
    pending: Vec<Step<'a, K>>,
}

impl<K> Tree<K> {
    pub fn walk(&self) -> Walk<'_, K> {
        let pending = self
            .root()
            .map(|node| Step {
                node,
                depth: 0,
                branch: Branch::Root,
                last: true,
            })
            .into_iter()
            .collect();

        Walk { pending }
    }

    /// Every key of the tree, in pre-order.
    pub fn values(&self) -> impl Iterator<Item = &K> {
        self.walk().map(|step| step.node.value())
    }
}

impl<'a, K> Iterator for Walk<'a, K> {
    type Item = Step<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.pending.pop()?;
        let depth = step.depth + 1;

        if let Some(right) = step.node.right() {
            self.pending.push(Step {
                node: right,
                depth,
                branch: Branch::Right,
                last: true,
            });
        }

        if let Some(left) = step.node.left() {
            self.pending.push(Step {
                node: left,
                depth,
                branch: Branch::Left,
                last: step.node.right().is_none(),
            });
        }

        Some(step)
    }
}
