//! Forward-only traversal over an [`ImmutableSequence`](super::ImmutableSequence).

use std::iter::FusedIterator;

use super::error::SequenceError;

/// A forward-only cursor over the elements of an
/// [`ImmutableSequence`](super::ImmutableSequence).
///
/// Each call to [`ImmutableSequence::iter`](super::ImmutableSequence::iter)
/// produces a new, independent cursor starting at position 0. A single cursor
/// cannot be rewound once exhausted.
///
/// Besides the checked [`try_next`](Self::try_next) protocol, `Cursor`
/// implements [`Iterator`], so it works with `for` loops and adapters.
///
/// # Examples
///
/// ```rust
/// use immutable_sequence::sequence::{ImmutableSequence, SequenceError};
///
/// let sequence = ImmutableSequence::of(vec![1, 2]);
/// let mut cursor = sequence.iter();
///
/// assert_eq!(cursor.try_next(), Ok(&1));
/// assert_eq!(cursor.try_next(), Ok(&2));
/// assert!(!cursor.has_next());
/// assert_eq!(cursor.try_next(), Err(SequenceError::NoSuchElement));
/// ```
#[derive(Debug)]
pub struct Cursor<'a, E> {
    elements: &'a [E],
    /// Length captured when the cursor was created.
    size: usize,
    position: usize,
}

impl<'a, E> Cursor<'a, E> {
    pub(super) const fn new(elements: &'a [E], size: usize) -> Self {
        Self {
            elements,
            size,
            position: 0,
        }
    }

    /// Returns `true` while the cursor has not yet yielded every element.
    #[inline]
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.position < self.size
    }

    /// Advances the cursor and returns the element it passed over.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::NoSuchElement`] when the cursor is exhausted.
    /// - [`SequenceError::ConcurrentModification`] when the position runs
    ///   past the backing store captured at creation.
    pub fn try_next(&mut self) -> Result<&'a E, SequenceError> {
        let index = self.position;
        if index >= self.size {
            return Err(SequenceError::NoSuchElement);
        }
        let element =
            self.elements
                .get(index)
                .ok_or(SequenceError::ConcurrentModification {
                    expected: self.size,
                    actual: self.elements.len(),
                })?;
        self.position = index + 1;
        Ok(element)
    }

    /// Always fails: the sequence is read-only.
    ///
    /// # Errors
    ///
    /// Always returns [`SequenceError::UnsupportedOperation`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::of(vec![1]);
    /// assert!(sequence.iter().remove().is_err());
    /// ```
    pub const fn remove(&mut self) -> Result<(), SequenceError> {
        Err(SequenceError::UnsupportedOperation {
            operation: "remove",
        })
    }

    #[inline]
    const fn remaining(&self) -> usize {
        self.size.saturating_sub(self.position)
    }
}

impl<'a, E> Iterator for Cursor<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<E> ExactSizeIterator for Cursor<'_, E> {
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl<E> FusedIterator for Cursor<'_, E> {}

/// An owning iterator over the elements of an
/// [`ImmutableSequence`](super::ImmutableSequence).
#[derive(Debug, Clone)]
pub struct ImmutableSequenceIntoIterator<E> {
    inner: std::vec::IntoIter<E>,
}

impl<E> ImmutableSequenceIntoIterator<E> {
    pub(super) fn new(elements: Box<[E]>) -> Self {
        Self {
            inner: elements.into_vec().into_iter(),
        }
    }
}

impl<E> Iterator for ImmutableSequenceIntoIterator<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for ImmutableSequenceIntoIterator<E> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<E> ExactSizeIterator for ImmutableSequenceIntoIterator<E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for ImmutableSequenceIntoIterator<E> {}
