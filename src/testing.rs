use itertools::Itertools;
use proptest::{collection::vec, prelude::*, sample::SizeRange};

use crate::prelude::*;

/// Generates keys to insert, drawn from a narrow range so duplicates are common.
pub fn keys(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<i64>> {
    vec(-1_000i64..1_000, size)
}

/// Generates a heap built from [`keys`].
pub fn trees(size: impl Into<SizeRange>) -> impl Strategy<Value = Tree<i64>> {
    keys(size).prop_map(Tree::from_iter)
}

/// Generates the text of a bulk submission, along with the keys it holds.
pub fn submissions(size: impl Into<SizeRange>) -> impl Strategy<Value = (String, Vec<i64>)> {
    keys(size).prop_map(|values| (values.iter().join(","), values))
}

/// The keys of a tree as a sorted multiset.
pub fn sorted<K: Ord + Clone>(tree: &Tree<K>) -> Vec<K> {
    tree.values().cloned().sorted().collect_vec()
}

/// Highest root rank a leftist tree of `len` nodes may have: `floor(log2(len + 1))`.
pub fn rank_bound(len: usize) -> Rank {
    (len + 1).ilog2()
}
