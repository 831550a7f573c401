//! Semigroup type class: types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use immutable_sequence::sequence::ImmutableSequence;
//! use immutable_sequence::typeclass::Semigroup;
//!
//! let left = ImmutableSequence::of(vec![1, 2]);
//! let right = ImmutableSequence::of(vec![3]);
//! assert_eq!(left.combine(right), ImmutableSequence::of(vec![1, 2, 3]));
//! ```

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all values of an iterator with `combine`.
    ///
    /// Returns `None` for an empty iterator; see
    /// [`Monoid::combine_all`](super::Monoid::combine_all) for a total version.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}
