//! Fixed-size, read-only ordered collection.
//!
//! [`ImmutableSequence`] owns a boxed slice whose length is fixed at
//! construction. No method hands out mutable access to it, so once built the
//! contents never change.
//!
//! # Examples
//!
//! ```rust
//! use immutable_sequence::sequence::ImmutableSequence;
//!
//! let sequence = ImmutableSequence::of(vec!["a", "b", "a"]);
//! assert_eq!(sequence.len(), 3);
//! assert_eq!(sequence.index_of(&"a"), Some(0));
//!
//! // Derived sequences own a fresh backing store
//! let tail = sequence.sub_sequence(1, 3).unwrap();
//! assert_eq!(tail, ImmutableSequence::of(vec!["b", "a"]));
//! assert_eq!(sequence.len(), 3);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[cfg(feature = "typeclass")]
use crate::typeclass::{Monoid, Semigroup};

use super::cursor::{Cursor, ImmutableSequenceIntoIterator};
use super::error::SequenceError;

/// A fixed-size, read-only ordered collection.
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `of`            | O(1) for `Box<[E]>`, O(1) or O(n) for `Vec<E>` |
/// | `get`           | O(1)       |
/// | `len`           | O(1)       |
/// | `index_of`      | O(n)       |
/// | `sub_sequence`  | O(k)       |
/// | `concat`        | O(n + m)   |
///
/// # Examples
///
/// ```rust
/// use immutable_sequence::sequence::ImmutableSequence;
///
/// let sequence: ImmutableSequence<i32> = (1..=3).collect();
/// assert_eq!(sequence.get(1), Ok(&2));
/// assert_eq!(format!("{sequence}"), "[1, 2, 3]");
/// ```
#[derive(Clone)]
pub struct ImmutableSequence<E> {
    /// Backing store; never reassigned after construction.
    elements: Box<[E]>,
    /// Cached length of `elements`.
    size: usize,
}

impl<E> ImmutableSequence<E> {
    /// Wraps `elements` as the backing store.
    ///
    /// Ownership moves into the sequence, so no caller can keep a mutable
    /// alias. A `Box<[E]>` is taken as is; a `Vec<E>` is only reallocated if
    /// it carries spare capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::of(vec![Some("a"), None]);
    /// assert_eq!(sequence.len(), 2);
    /// assert_eq!(sequence.get(1), Ok(&None));
    /// ```
    #[must_use]
    pub fn of<B: Into<Box<[E]>>>(elements: B) -> Self {
        let elements = elements.into();
        let size = elements.len();
        Self { elements, size }
    }

    /// Wraps an optional backing store.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NullReference`] when `elements` is `None`.
    /// A present but zero-length store is accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::{ImmutableSequence, SequenceError};
    ///
    /// let missing: Option<Vec<i32>> = None;
    /// assert_eq!(
    ///     ImmutableSequence::of_nullable(missing),
    ///     Err(SequenceError::NullReference)
    /// );
    /// assert!(ImmutableSequence::of_nullable(Some(Vec::<i32>::new())).unwrap().is_empty());
    /// ```
    pub fn of_nullable<B: Into<Box<[E]>>>(elements: Option<B>) -> Result<Self, SequenceError> {
        elements.map(Self::of).ok_or(SequenceError::NullReference)
    }

    /// Returns the empty sequence.
    ///
    /// The zero-length backing store never allocates, so every empty
    /// sequence is interchangeable with every other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let empty: ImmutableSequence<String> = ImmutableSequence::empty();
    /// assert!(empty.is_empty());
    /// assert_eq!(empty, ImmutableSequence::empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            elements: Box::default(),
            size: 0,
        }
    }

    /// Builds a sequence from any collection, keeping its iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
    /// let sequence = ImmutableSequence::from_collection(set);
    /// assert_eq!(sequence.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_collection<I: IntoIterator<Item = E>>(collection: I) -> Self {
        Self::of(collection.into_iter().collect::<Vec<E>>())
    }

    /// Returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] when `position >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::{ImmutableSequence, SequenceError};
    ///
    /// let sequence = ImmutableSequence::of(vec![1, 2, 3]);
    /// assert_eq!(sequence.get(2), Ok(&3));
    /// assert_eq!(
    ///     sequence.get(3),
    ///     Err(SequenceError::IndexOutOfRange { index: 3, length: 3 })
    /// );
    /// ```
    pub fn get(&self, position: usize) -> Result<&E, SequenceError> {
        self.elements
            .get(position)
            .ok_or(SequenceError::IndexOutOfRange {
                index: position,
                length: self.size,
            })
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the sequence contains at least one element.
    #[inline]
    #[must_use]
    pub const fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the first element, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&E> {
        self.elements.first()
    }

    /// Returns the last element, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&E> {
        self.elements.last()
    }

    /// Borrows the backing store as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// Returns a fresh cursor positioned before the first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::of(vec![1, 2, 3]);
    /// let collected: Vec<&i32> = sequence.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Cursor<'_, E> {
        Cursor::new(&self.elements, self.size)
    }

    /// Finds the index of the first element satisfying `predicate`.
    #[must_use]
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&E) -> bool,
    {
        self.elements.iter().position(predicate)
    }

    /// Consumes the sequence and hands its elements back as a `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.elements.into_vec()
    }
}

impl<E: PartialEq> ImmutableSequence<E> {
    /// Returns the index of the first element equal to `value`.
    ///
    /// The scan runs from index 0 and compares with `value` on the left.
    /// An absent `None` target matches the first absent slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::of(vec![None, Some("a")]);
    /// assert_eq!(sequence.index_of(&None), Some(0));
    /// assert_eq!(sequence.index_of(&Some("a")), Some(1));
    /// assert_eq!(sequence.index_of(&Some("z")), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, value: &E) -> Option<usize> {
        self.find_index(|element| value == element)
    }

    /// Returns `true` if some element equals `value`.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &E) -> bool {
        self.index_of(value).is_some()
    }
}

impl<E: Clone> ImmutableSequence<E> {
    /// Returns a growable copy of the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::of(vec![1, 2]);
    /// let mut list = sequence.to_mutable_list();
    /// list.push(3);
    /// assert_eq!(sequence.len(), 2);
    /// ```
    #[must_use]
    pub fn to_mutable_list(&self) -> Vec<E> {
        self.elements.to_vec()
    }

    /// Returns a fixed-size copy of the backing store.
    #[must_use]
    pub fn to_array(&self) -> Box<[E]> {
        self.elements.clone()
    }

    /// Copies the elements into a caller-provided buffer.
    ///
    /// When `buffer` is shorter than the sequence a new buffer of exactly
    /// `len()` slots is returned instead. Otherwise the elements are written
    /// from slot 0 and, if room remains, slot `len()` is set to `None` as an
    /// end marker; later slots are left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::of(vec![1, 2]);
    ///
    /// let buffer = vec![Some(9); 4].into_boxed_slice();
    /// let filled = sequence.to_array_with(buffer);
    /// assert_eq!(&*filled, &[Some(1), Some(2), None, Some(9)]);
    ///
    /// let grown = sequence.to_array_with(Box::new([]));
    /// assert_eq!(&*grown, &[Some(1), Some(2)]);
    /// ```
    #[must_use]
    pub fn to_array_with(&self, mut buffer: Box<[Option<E>]>) -> Box<[Option<E>]> {
        if buffer.len() < self.size {
            return self.elements.iter().cloned().map(Some).collect();
        }
        for (slot, element) in buffer.iter_mut().zip(self.elements.iter()) {
            *slot = Some(element.clone());
        }
        if let Some(end) = buffer.get_mut(self.size) {
            *end = None;
        }
        buffer
    }

    /// Appends `other` to this sequence.
    ///
    /// When `other` is empty `self` is returned unchanged without allocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let joined = ImmutableSequence::of(vec![1]).concat(&ImmutableSequence::of(vec![2, 3]));
    /// assert_eq!(joined, ImmutableSequence::of(vec![1, 2, 3]));
    /// ```
    #[must_use]
    pub fn concat(self, other: &Self) -> Self {
        if other.is_empty() {
            return self;
        }
        let mut elements = self.elements.into_vec();
        elements.reserve_exact(other.size);
        elements.extend_from_slice(&other.elements);
        Self::of(elements)
    }

    /// Returns the half-open range `[from, to)` as a new sequence.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::InvalidArgument`] when `from > to`.
    /// - [`SequenceError::IndexOutOfRange`] when `to > len()`, including on
    ///   an empty receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::{ImmutableSequence, SequenceError};
    ///
    /// let sequence = ImmutableSequence::of(vec![1, 2, 3]);
    /// assert_eq!(sequence.sub_sequence(0, 2), Ok(ImmutableSequence::of(vec![1, 2])));
    /// assert!(sequence.sub_sequence(1, 1).unwrap().is_empty());
    /// assert_eq!(
    ///     sequence.sub_sequence(2, 1),
    ///     Err(SequenceError::InvalidArgument { from: 2, to: 1 })
    /// );
    /// ```
    pub fn sub_sequence(&self, from: usize, to: usize) -> Result<Self, SequenceError> {
        if from > to {
            return Err(SequenceError::InvalidArgument { from, to });
        }
        let range = self
            .elements
            .get(from..to)
            .ok_or(SequenceError::IndexOutOfRange {
                index: to,
                length: self.size,
            })?;
        if range.is_empty() {
            return Ok(Self::empty());
        }
        Ok(Self::from(range))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Default for ImmutableSequence<E> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> From<Vec<E>> for ImmutableSequence<E> {
    fn from(elements: Vec<E>) -> Self {
        Self::of(elements)
    }
}

impl<E> From<Box<[E]>> for ImmutableSequence<E> {
    fn from(elements: Box<[E]>) -> Self {
        Self::of(elements)
    }
}

impl<E, const N: usize> From<[E; N]> for ImmutableSequence<E> {
    fn from(elements: [E; N]) -> Self {
        Self::of(elements)
    }
}

impl<E: Clone> From<&[E]> for ImmutableSequence<E> {
    fn from(elements: &[E]) -> Self {
        Self::of(elements)
    }
}

impl<E> FromIterator<E> for ImmutableSequence<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_collection(iter)
    }
}

impl<E> IntoIterator for ImmutableSequence<E> {
    type Item = E;
    type IntoIter = ImmutableSequenceIntoIterator<E>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ImmutableSequenceIntoIterator::new(self.elements)
    }
}

impl<'a, E> IntoIterator for &'a ImmutableSequence<E> {
    type Item = &'a E;
    type IntoIter = Cursor<'a, E>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> Index<usize> for ImmutableSequence<E> {
    type Output = E;

    /// # Panics
    ///
    /// Panics when `position >= len()`, like slice indexing. Use
    /// [`ImmutableSequence::get`] for a checked lookup.
    fn index(&self, position: usize) -> &Self::Output {
        &self.elements[position]
    }
}

impl<E> AsRef<[E]> for ImmutableSequence<E> {
    fn as_ref(&self) -> &[E] {
        &self.elements
    }
}

impl<E: PartialEq> PartialEq for ImmutableSequence<E> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.elements == other.elements
    }
}

impl<E: Eq> Eq for ImmutableSequence<E> {}

/// Hashes the elements in order, then mixes in the length.
///
/// Equal sequences always produce equal hashes.
///
/// # Examples
///
/// ```rust
/// use immutable_sequence::sequence::ImmutableSequence;
/// use std::collections::HashMap;
///
/// let mut map: HashMap<ImmutableSequence<i32>, &str> = HashMap::new();
/// map.insert(ImmutableSequence::of(vec![1, 2, 3]), "value");
/// assert_eq!(map.get(&ImmutableSequence::of(vec![1, 2, 3])), Some(&"value"));
/// ```
impl<E: Hash> Hash for ImmutableSequence<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
        self.size.hash(state);
    }
}

impl<E: fmt::Debug> fmt::Debug for ImmutableSequence<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for ImmutableSequence<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// Read-only by construction: no mutable access path may exist.
static_assertions::assert_not_impl_any!(
    ImmutableSequence<i32>: std::ops::IndexMut<usize>,
    std::ops::DerefMut,
    AsMut<[i32]>,
    std::borrow::BorrowMut<[i32]>,
    Extend<i32>
);
static_assertions::assert_impl_all!(ImmutableSequence<String>: Send, Sync);
static_assertions::assert_not_impl_any!(ImmutableSequence<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<E: Clone> Semigroup for ImmutableSequence<E> {
    fn combine(self, other: Self) -> Self {
        self.concat(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().concat(other)
    }
}

#[cfg(feature = "typeclass")]
impl<E: Clone> Monoid for ImmutableSequence<E> {
    fn empty() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for ImmutableSequence<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ImmutableSequenceVisitor<E> {
    marker: std::marker::PhantomData<E>,
}

#[cfg(feature = "serde")]
impl<E> ImmutableSequenceVisitor<E> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::de::Visitor<'de> for ImmutableSequenceVisitor<E>
where
    E: serde::Deserialize<'de>,
{
    type Value = ImmutableSequence<E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(ImmutableSequence::of(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for ImmutableSequence<E>
where
    E: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ImmutableSequenceVisitor::new())
    }
}

// =============================================================================
// Rayon Support
// =============================================================================

#[cfg(feature = "rayon")]
impl<E: Send> rayon::iter::IntoParallelIterator for ImmutableSequence<E> {
    type Iter = rayon::vec::IntoIter<E>;
    type Item = E;

    fn into_par_iter(self) -> Self::Iter {
        self.elements.into_vec().into_par_iter()
    }
}

#[cfg(feature = "rayon")]
impl<'a, E: Sync + 'a> rayon::iter::IntoParallelIterator for &'a ImmutableSequence<E> {
    type Iter = rayon::slice::Iter<'a, E>;
    type Item = &'a E;

    fn into_par_iter(self) -> Self::Iter {
        self.as_slice().par_iter()
    }
}

#[cfg(feature = "rayon")]
impl<E: Send> rayon::iter::FromParallelIterator<E> for ImmutableSequence<E> {
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: rayon::iter::IntoParallelIterator<Item = E>,
    {
        Self::of(<Vec<E> as rayon::iter::FromParallelIterator<E>>::from_par_iter(par_iter))
    }
}

// =============================================================================
// Tests
// =============================================================================
