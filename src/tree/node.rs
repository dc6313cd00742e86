use std::fmt::{self, Debug, Formatter};

/// Length of a node's right spine. A missing subtree has rank 0, and so does a leaf.
pub type Rank = u32;

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single key of the heap, together with the subtrees it owns.
///
/// Nodes are only ever built by the [`Tree`](super::Tree) operations, so every node reachable
/// from a tree satisfies the heap-order and leftist invariants. Renderers walk them read-only
/// through [`Node::left`] and [`Node::right`].
pub struct Node<K> {
    pub(crate) value: K,
    pub(crate) rank: Rank,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    pub(crate) fn leaf(value: K) -> Box<Self> {
        Box::new(Self {
            value,
            rank: 0,
            left: None,
            right: None,
        })
    }

    pub fn value(&self) -> &K {
        &self.value
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The present children, left first.
    pub fn children(&self) -> impl Iterator<Item = &Node<K>> {
        self.left().into_iter().chain(self.right())
    }
}

// Shallow: children are only flagged, so a long spine is never formatted recursively.
impl<K: Debug> Debug for Node<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("rank", &self.rank)
            .field("left", &self.left.is_some())
            .field("right", &self.right.is_some())
            .finish()
    }
}

pub(crate) fn rank<K>(link: &Link<K>) -> Rank {
    link.as_ref().map_or(0, |node| node.rank)
}
