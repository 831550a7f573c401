//! Monoid type class: semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use immutable_sequence::sequence::ImmutableSequence;
/// use immutable_sequence::typeclass::{Monoid, Semigroup};
///
/// let sequence = ImmutableSequence::of(vec!["a"]);
/// let identity = <ImmutableSequence<&str> as Monoid>::empty();
/// assert_eq!(identity.combine(sequence.clone()), sequence);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every value of an iterator, starting from the identity.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::ImmutableSequence;
    use rstest::rstest;

    #[rstest]
    fn combine_all_of_nothing_is_identity() {
        let nothing: Vec<ImmutableSequence<i32>> = vec![];
        assert!(ImmutableSequence::combine_all(nothing).is_empty_value());
    }

    #[rstest]
    fn non_empty_is_not_identity() {
        assert!(!ImmutableSequence::of(vec![0]).is_empty_value());
    }
}
