mod error;

pub mod input;
pub mod prelude;
pub mod render;
pub mod session;
pub mod testing;
pub mod tree;

#[doc(hidden)]
/// This is a hidden module to make the macros defined on this crate available for the users.
pub mod __dependencies {
    pub use itertools;
    pub use paste;
    pub use proptest;
    pub use test_strategy;
    pub use thiserror::Error;
}

/// Generates the property suite every heap must pass, for a `Tree<K>` alias in scope.
#[macro_export]
macro_rules! test_heap_properties {
    ($type:ident) => {
        $crate::__dependencies::paste::paste! {
            mod [<test_heap_$type:snake>] {
                use $crate::__dependencies::{
                    itertools::Itertools,
                    proptest::prelude::*,
                    test_strategy,
                };
                use $crate::testing::{rank_bound, sorted};

                use super::$type;

                #[test_strategy::proptest(fork = false)]
                fn test_arbitrary_trees_are_valid(a: $type) {
                    prop_assert_eq!(a.check_invariants(), Ok(()));
                }

                #[test_strategy::proptest(fork = false)]
                fn test_merge_with_empty_is_identity(a: $type) {
                    prop_assert_eq!(a.clone().merge(<$type>::default()), a.clone());
                    prop_assert_eq!(<$type>::default().merge(a.clone()), a);
                }

                #[test_strategy::proptest(fork = false)]
                fn test_merge_is_valid(a: $type, b: $type) {
                    prop_assert_eq!(a.merge(b).check_invariants(), Ok(()));
                }

                #[test_strategy::proptest(fork = false)]
                fn test_merge_keeps_every_value(a: $type, b: $type) {
                    let expected = sorted(&a).into_iter().chain(sorted(&b)).sorted().collect_vec();

                    prop_assert_eq!(sorted(&a.merge(b)), expected);
                }

                #[test_strategy::proptest(fork = false)]
                fn test_merge_root_is_minimum(a: $type, b: $type) {
                    let expected = a.peek().into_iter().chain(b.peek()).min().cloned();

                    prop_assert_eq!(a.merge(b).peek().cloned(), expected);
                }

                #[test_strategy::proptest(fork = false)]
                fn test_merge_rank_is_logarithmic(a: $type, b: $type) {
                    let merged = a.merge(b);

                    prop_assert!(merged.rank() <= rank_bound(merged.len()));
                }

                #[test_strategy::proptest(fork = false)]
                fn test_commutativity(a: $type, b: $type) {
                    let ab = a.clone().merge(b.clone());
                    let ba = b.merge(a);

                    prop_assert_eq!(sorted(&ab), sorted(&ba));
                }

                #[test_strategy::proptest(fork = false)]
                fn test_associativity(a: $type, b: $type, c: $type) {
                    let ab_c = a.clone().merge(b.clone()).merge(c.clone());
                    let a_bc = a.merge(b.merge(c));

                    prop_assert_eq!(sorted(&ab_c), sorted(&a_bc));
                    prop_assert!(ab_c.is_valid() && a_bc.is_valid());
                }
            }
        }
    };
}

#[macro_export]
macro_rules! prop_assert_changes {
    ($action: expr, $value: expr) => {
        let old_value = $value.clone();

        prop_assert_eq!($value, old_value);

        $action;

        prop_assert_ne!($value, old_value);
    };
}

#[macro_export]
macro_rules! prop_assert_does_not_change {
    ($action: expr, $value: expr) => {
        let old_value = $value.clone();

        $action;

        prop_assert_eq!($value, old_value);
    };
}
