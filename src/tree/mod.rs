mod node;
mod validate;
mod walk;

use std::{
    fmt::{self, Debug, Formatter},
    mem,
};

use proptest::{collection::vec, prelude::*};

pub use {
    node::{Node, Rank},
    walk::{Branch, Step, Walk},
};

use node::{rank, Link};

/// A mergeable min-heap, stored as a leftist tree.
///
/// The tree is nothing more than its (optional) root: there is no cached size and the minimum is
/// always the root. Every operation that changes the tree keeps three invariants:
///
/// * Heap order: no node is greater than its children.
/// * Leftist property: the rank of a left subtree is never below the rank of its sibling.
/// * Rank: a leaf has rank 0, any other node has the rank of its right subtree plus one.
///
/// Those bound the right spine to `O(log n)` nodes, which is what makes [`Tree::merge`] cheap.
/// Merging consumes both trees, so no node is ever shared between two live trees.
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<K> Tree<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(value: K) -> Self {
        Self {
            root: Some(Node::leaf(value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The smallest key of the heap.
    pub fn peek(&self) -> Option<&K> {
        self.root().map(Node::value)
    }

    pub fn rank(&self) -> Rank {
        rank(&self.root)
    }

    /// Counts the nodes by walking the whole tree.
    pub fn len(&self) -> usize {
        self.walk().count()
    }
}

impl<K: Ord> Tree<K> {
    /// Merges two heaps into one, taking ownership of both.
    ///
    /// Merging with an empty tree returns the other tree untouched. When both roots hold equal
    /// keys, `self` keeps the root.
    pub fn merge(mut self, mut other: Self) -> Self {
        Self {
            root: merge_links(self.root.take(), other.root.take()),
        }
    }

    pub fn merge_with(&mut self, mut other: Self) {
        self.root = merge_links(self.root.take(), other.root.take());
    }

    pub fn insert(self, value: K) -> Self {
        self.merge(Self::singleton(value))
    }

    pub fn push(&mut self, value: K) {
        self.merge_with(Self::singleton(value));
    }

    /// Removes the minimum, merging its two subtrees into the new tree.
    pub fn pop(&mut self) -> Option<K> {
        let root = self.root.take()?;
        let Node {
            value, left, right, ..
        } = *root;

        self.root = merge_links(left, right);
        Some(value)
    }

    pub fn into_sorted_vec(mut self) -> Vec<K> {
        std::iter::from_fn(|| self.pop()).collect()
    }
}

fn merge_links<K: Ord>(a: Link<K>, b: Link<K>) -> Link<K> {
    match (a, b) {
        (None, node) | (node, None) => node,
        (Some(a), Some(b)) => Some(merge_nodes(a, b)),
    }
}

fn merge_nodes<K: Ord>(mut small: Box<Node<K>>, mut large: Box<Node<K>>) -> Box<Node<K>> {
    if small.value > large.value {
        mem::swap(&mut small, &mut large);
    }

    small.right = merge_links(small.right.take(), Some(large));

    if small.left.is_none() {
        small.left = small.right.take();
    } else if rank(&small.left) < rank(&small.right) {
        mem::swap(&mut small.left, &mut small.right);
    }

    small.rank = rank(&small.right) + 1;

    debug_assert!(rank(&small.left) >= rank(&small.right));
    debug_assert!(small.children().all(|child| small.value <= child.value));

    small
}

// Unlinks nodes one by one, so a long left spine is never dropped recursively.
impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

// Rebuilds the copy bottom-up from the reversed pre-order: by the time a node is reached, its
// left subtree is on top of the stack and its right subtree right below.
impl<K: Clone> Clone for Tree<K> {
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<K>>> = Vec::new();
        let nodes: Vec<&Node<K>> = self.walk().map(|step| step.node).collect();

        for node in nodes.into_iter().rev() {
            let left = node.left.as_ref().and_then(|_| built.pop());
            let right = node.right.as_ref().and_then(|_| built.pop());

            built.push(Box::new(Node {
                value: node.value.clone(),
                rank: node.rank,
                left,
                right,
            }));
        }

        Self { root: built.pop() }
    }
}

fn shape<K>(step: Step<'_, K>) -> (&K, Rank, usize, Branch) {
    (step.node.value(), step.node.rank(), step.depth, step.branch)
}

// Two trees are equal when they have the same shape, keys and ranks.
impl<K: PartialEq> PartialEq for Tree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.walk().map(shape).eq(other.walk().map(shape))
    }
}

impl<K: Eq> Eq for Tree<K> {}

impl<K: Debug> Debug for Tree<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.walk()).finish()
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<K> Arbitrary for Tree<K>
where
    K: Arbitrary + Ord + 'static,
{
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        vec(any::<K>(), 0..64).prop_map(Self::from_iter).boxed()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use proptest::prelude::*;
    use test_strategy::proptest;

    use crate::{prelude::*, prop_assert_changes};

    type IntTree = super::Tree<i64>;
    type WordTree = super::Tree<String>;

    crate::test_heap_properties!(IntTree);
    crate::test_heap_properties!(WordTree);

    #[test]
    fn test_inserting_one_at_a_time_tracks_the_minimum() {
        let mut tree = Tree::new();

        for (value, root) in [(5, 5), (3, 3), (8, 3), (1, 1)] {
            tree = tree.insert(value);

            assert_eq!(tree.peek(), Some(&root));
            assert_eq!(tree.check_invariants(), Ok(()));
        }

        assert_eq!(sorted(&tree), vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_merging_two_empty_trees_is_empty() {
        let tree = Tree::<i64>::new().merge(Tree::new());

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.rank(), 0);
    }

    #[test]
    fn test_leaf_gaining_a_child_keeps_it_on_the_left() {
        let tree = Tree::singleton(1).insert(2);
        let root = tree.root().unwrap();

        assert_eq!(root.left().map(Node::value), Some(&2));
        assert!(root.right().is_none());
        assert_eq!(root.rank(), 1);
    }

    #[test]
    fn test_first_argument_wins_ties() {
        // Ordered by the number only, so both keys compare equal.
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Key(u8, char);

        impl PartialOrd for Key {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for Key {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let a = Tree::singleton(Key(1, 'a'));
        let b = Tree::singleton(Key(1, 'b'));

        let ab = a.clone().merge(b.clone());
        let ba = b.merge(a);

        assert_eq!(ab.peek().map(|key| key.1), Some('a'));
        assert_eq!(ba.peek().map(|key| key.1), Some('b'));
        assert_eq!(ab.check_invariants(), Ok(()));
    }

    #[test]
    fn test_pop_returns_values_in_order() {
        let mut tree: Tree<i64> = [9, 4, 7, 1, 4, 0].into_iter().collect();

        assert_eq!(tree.pop(), Some(0));
        assert_eq!(tree.pop(), Some(1));
        assert_eq!(tree.check_invariants(), Ok(()));
        assert_eq!(tree.into_sorted_vec(), vec![4, 4, 7, 9]);
    }

    #[test]
    fn test_pop_on_empty_tree() {
        let mut tree = Tree::<i64>::new();
        assert_eq!(tree.pop(), None);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_descending_inserts_do_not_overflow_the_stack() {
        let tree: Tree<i64> = (0..200_000).rev().collect();

        assert_eq!(tree.peek(), Some(&0));
        assert_eq!(tree.len(), 200_000);
        assert_eq!(tree.check_invariants(), Ok(()));

        drop(tree);
    }

    #[test]
    fn test_deep_trees_clone_compare_and_format_without_recursion() {
        let tree: Tree<i64> = (0..200_000).rev().collect();
        let copy = tree.clone();

        assert_eq!(copy.len(), 200_000);
        assert!(copy == tree);
        assert_eq!(copy.check_invariants(), Ok(()));
        assert!(format!("{tree:?}").starts_with("[Step { node: Node { value: 0, rank: 1"));

        let mut other = copy;
        other.push(-1);
        assert!(other != tree);
    }

    #[test]
    fn test_equality_sees_shape_not_just_keys() {
        // Same keys, different arrangement: 1 -> (L: 2, R: 3) against 1 -> L: 2 -> L: 3.
        let wide: Tree<i64> = [1, 2, 3].into_iter().collect();
        let narrow = Tree::singleton(3).insert(2).merge(Tree::singleton(1));

        assert_eq!(sorted(&wide), sorted(&narrow));
        assert_ne!(wide, narrow);
    }

    #[test]
    fn test_extend_keeps_existing_values() {
        let mut tree = Tree::from_iter([3, 2]);
        tree.extend([5, 1]);

        assert_eq!(tree.peek(), Some(&1));
        assert_eq!(sorted(&tree), vec![1, 2, 3, 5]);
    }

    #[proptest(fork = false)]
    fn test_invariants_hold_after_every_insert(#[strategy(keys(0..128))] values: Vec<i64>) {
        let mut tree = Tree::new();

        for value in values {
            tree = tree.insert(value);
            prop_assert_eq!(tree.check_invariants(), Ok(()));
        }
    }

    #[proptest(fork = false)]
    fn test_root_rank_is_logarithmic(#[strategy(keys(0..512))] values: Vec<i64>) {
        let tree: Tree<i64> = values.iter().copied().collect();

        prop_assert!(tree.rank() <= rank_bound(values.len()));
    }

    #[proptest(fork = false)]
    fn test_root_is_minimum_of_every_prefix(#[strategy(keys(1..128))] values: Vec<i64>) {
        let mut tree = Tree::new();

        for (n, value) in values.iter().enumerate() {
            tree.push(*value);
            prop_assert_eq!(tree.peek(), values[..=n].iter().min());
        }
    }

    #[proptest(fork = false)]
    fn test_inserts_keep_every_value(#[strategy(keys(0..128))] values: Vec<i64>) {
        let tree: Tree<i64> = values.iter().copied().collect();

        prop_assert_eq!(tree.len(), values.len());
        prop_assert_eq!(sorted(&tree), values.into_iter().sorted().collect_vec());
    }

    #[proptest(fork = false)]
    fn test_insert_changes_the_length(mut tree: IntTree, value: i64) {
        prop_assert_changes!(tree.push(value), tree.len());
    }

    #[proptest(fork = false)]
    fn test_clone_is_an_equal_independent_copy(tree: IntTree, value: i64) {
        let mut copy = tree.clone();

        prop_assert_eq!(&copy, &tree);
        prop_assert_eq!(copy.check_invariants(), Ok(()));

        copy.push(value);
        prop_assert_ne!(&copy, &tree);
        prop_assert_eq!(copy.len(), tree.len() + 1);
    }

    #[proptest(fork = false)]
    fn test_into_sorted_vec_is_sorted(tree: IntTree) {
        let expected = sorted(&tree);
        prop_assert_eq!(tree.into_sorted_vec(), expected);
    }

    #[proptest(fork = false)]
    fn test_pop_keeps_invariants(mut tree: IntTree) {
        while let Some(min) = tree.pop() {
            prop_assert_eq!(tree.check_invariants(), Ok(()));

            if let Some(next) = tree.peek() {
                prop_assert!(min <= *next);
            }
        }
    }
}
