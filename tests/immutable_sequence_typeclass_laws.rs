#![cfg(feature = "typeclass")]
//! Property-based tests for the Semigroup and Monoid laws of ImmutableSequence.

use immutable_sequence::sequence::ImmutableSequence;
use immutable_sequence::typeclass::{Monoid, Semigroup};
use proptest::prelude::*;

fn small_sequence() -> impl Strategy<Value = ImmutableSequence<i32>> {
    prop::collection::vec(any::<i32>(), 0..20).prop_map(ImmutableSequence::of)
}

proptest! {
    #[test]
    fn prop_semigroup_associativity(
        first in small_sequence(),
        second in small_sequence(),
        third in small_sequence()
    ) {
        let left = first.clone().combine(second.clone()).combine(third.clone());
        let right = first.combine(second.combine(third));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_monoid_left_identity(sequence in small_sequence()) {
        let identity = <ImmutableSequence<i32> as Monoid>::empty();
        prop_assert_eq!(identity.combine(sequence.clone()), sequence);
    }

    #[test]
    fn prop_monoid_right_identity(sequence in small_sequence()) {
        let identity = <ImmutableSequence<i32> as Monoid>::empty();
        prop_assert_eq!(sequence.clone().combine(identity), sequence);
    }

    #[test]
    fn prop_combine_ref_matches_combine(left in small_sequence(), right in small_sequence()) {
        prop_assert_eq!(left.combine_ref(&right), left.clone().combine(right.clone()));
    }

    #[test]
    fn prop_combine_all_matches_flattening(parts in prop::collection::vec(small_sequence(), 0..5)) {
        let expected: ImmutableSequence<i32> = parts
            .iter()
            .flat_map(|part| part.iter().copied())
            .collect();
        prop_assert_eq!(ImmutableSequence::combine_all(parts), expected);
    }
}
