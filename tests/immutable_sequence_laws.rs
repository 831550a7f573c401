//! Property-based tests for ImmutableSequence.
//!
//! These tests verify the structural properties every sequence must keep,
//! whatever its contents.

use immutable_sequence::sequence::{ImmutableSequence, SequenceError};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// =============================================================================
// Strategies
// =============================================================================

/// Generates an `ImmutableSequence<i32>` with up to `max_size` elements.
fn sequence_strategy(max_size: usize) -> impl Strategy<Value = ImmutableSequence<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(ImmutableSequence::of)
}

fn small_sequence() -> impl Strategy<Value = ImmutableSequence<i32>> {
    sequence_strategy(20)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn prop_of_preserves_length_and_elements(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let sequence = ImmutableSequence::of(elements.clone());
        prop_assert_eq!(sequence.len(), elements.len());
        for (index, element) in elements.iter().enumerate() {
            prop_assert_eq!(sequence.get(index), Ok(element));
        }
        prop_assert_eq!(
            sequence.get(elements.len()),
            Err(SequenceError::IndexOutOfRange { index: elements.len(), length: elements.len() })
        );
    }

    #[test]
    fn prop_len_matches_iter_count(sequence in small_sequence()) {
        prop_assert_eq!(sequence.len(), sequence.iter().count());
        prop_assert_eq!(sequence.is_empty(), sequence.len() == 0);
        prop_assert_eq!(sequence.is_not_empty(), sequence.len() != 0);
    }

    // =========================================================================
    // Search
    // =========================================================================

    #[test]
    fn prop_index_of_finds_first_occurrence(sequence in small_sequence(), target: i32) {
        let expected = sequence.as_slice().iter().position(|value| *value == target);
        prop_assert_eq!(sequence.index_of(&target), expected);
        prop_assert_eq!(sequence.contains(&target), expected.is_some());
    }

    #[test]
    fn prop_every_element_is_found_at_or_before_its_position(sequence in small_sequence()) {
        for (position, element) in sequence.iter().enumerate() {
            let found = sequence.index_of(element);
            prop_assert!(found.is_some_and(|index| index <= position));
        }
    }

    // =========================================================================
    // Equality & Hashing
    // =========================================================================

    #[test]
    fn prop_clone_is_equal_with_equal_hash(sequence in small_sequence()) {
        let cloned = sequence.clone();
        prop_assert_eq!(&cloned, &sequence);
        prop_assert_eq!(hash_of(&cloned), hash_of(&sequence));
    }

    #[test]
    fn prop_equality_matches_slice_equality(left in small_sequence(), right in small_sequence()) {
        prop_assert_eq!(left == right, left.as_slice() == right.as_slice());
        prop_assert_eq!(left == right, right == left);
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    #[test]
    fn prop_concat_length_is_sum(left in small_sequence(), right in small_sequence()) {
        let expected = left.len() + right.len();
        prop_assert_eq!(left.concat(&right).len(), expected);
    }

    #[test]
    fn prop_concat_is_associative(
        first in small_sequence(),
        second in small_sequence(),
        third in small_sequence()
    ) {
        let left = first.clone().concat(&second).concat(&third);
        let right = first.concat(&second.concat(&third));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_concat_with_empty_is_identity(sequence in small_sequence()) {
        prop_assert_eq!(sequence.clone().concat(&ImmutableSequence::empty()), sequence.clone());
        prop_assert_eq!(ImmutableSequence::empty().concat(&sequence), sequence);
    }

    #[test]
    fn prop_split_then_concat_restores(sequence in small_sequence(), split in 0usize..=20) {
        let split = split.min(sequence.len());
        let prefix = sequence.sub_sequence(0, split).unwrap();
        let suffix = sequence.sub_sequence(split, sequence.len()).unwrap();
        prop_assert_eq!(prefix.concat(&suffix), sequence);
    }

    #[test]
    fn prop_sub_sequence_matches_slice(sequence in small_sequence(), from in 0usize..=20, to in 0usize..=20) {
        let result = sequence.sub_sequence(from, to);
        if from > to {
            prop_assert_eq!(result, Err(SequenceError::InvalidArgument { from, to }));
        } else if to > sequence.len() {
            prop_assert_eq!(
                result,
                Err(SequenceError::IndexOutOfRange { index: to, length: sequence.len() })
            );
        } else {
            let derived = result.unwrap();
            prop_assert_eq!(derived.as_slice(), &sequence.as_slice()[from..to]);
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    #[test]
    fn prop_to_array_round_trip(sequence in small_sequence()) {
        let array = sequence.to_array();
        prop_assert_eq!(&*array, sequence.as_slice());
        prop_assert_eq!(ImmutableSequence::of(array), sequence);
    }

    #[test]
    fn prop_to_array_with_keeps_prefix(sequence in small_sequence(), capacity in 0usize..30) {
        let filled = sequence.to_array_with(vec![Some(0); capacity].into_boxed_slice());
        prop_assert_eq!(filled.len(), capacity.max(sequence.len()));
        for (slot, element) in filled.iter().zip(sequence.iter()) {
            prop_assert_eq!(slot.as_ref(), Some(element));
        }
        if capacity > sequence.len() {
            prop_assert_eq!(filled[sequence.len()], None);
        }
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    #[test]
    fn prop_cursor_yields_len_elements_then_fails(sequence in small_sequence()) {
        let mut cursor = sequence.iter();
        for expected in sequence.as_slice() {
            prop_assert!(cursor.has_next());
            prop_assert_eq!(cursor.try_next(), Ok(expected));
        }
        prop_assert!(!cursor.has_next());
        prop_assert_eq!(cursor.try_next(), Err(SequenceError::NoSuchElement));
    }
}
