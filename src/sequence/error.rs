//! Errors raised by [`ImmutableSequence`](super::ImmutableSequence) and its
//! [`Cursor`](super::Cursor).
//!
//! Every failure is reported synchronously at the offending call. Nothing is
//! retried or recovered internally.

use std::error::Error;
use std::fmt;

/// Errors that can occur when reading from or traversing an
/// [`ImmutableSequence`](super::ImmutableSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The backing store handed to a constructor was absent.
    NullReference,

    /// A position outside `[0, length)` was requested, or a range end
    /// exceeded the sequence length.
    IndexOutOfRange {
        /// The offending position.
        index: usize,
        /// The length of the sequence at the time of the call.
        length: usize,
    },

    /// A half-open range was given with `from > to`.
    InvalidArgument {
        /// The requested start of the range.
        from: usize,
        /// The requested end of the range.
        to: usize,
    },

    /// `try_next` was called on an exhausted cursor.
    NoSuchElement,

    /// The cursor position ran past the backing store it captured.
    ///
    /// Unreachable while the container stays immutable; kept as an
    /// invariant check on the cursor.
    ConcurrentModification {
        /// The length the cursor was created with.
        expected: usize,
        /// The length of the backing store it observed.
        actual: usize,
    },

    /// The operation is permanently unsupported on a read-only container.
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullReference => {
                write!(formatter, "backing store must not be null")
            }
            Self::IndexOutOfRange { index, length } => {
                write!(
                    formatter,
                    "index out of range: the length is {length} but the index is {index}"
                )
            }
            Self::InvalidArgument { from, to } => {
                write!(formatter, "Illegal arguments: from: {from}, to: {to}")
            }
            Self::NoSuchElement => {
                write!(formatter, "no such element: the cursor is exhausted")
            }
            Self::ConcurrentModification { expected, actual } => {
                write!(
                    formatter,
                    "concurrent modification: expected a backing store of length \
                     {expected} but found {actual}"
                )
            }
            Self::UnsupportedOperation { operation } => {
                write!(
                    formatter,
                    "unsupported operation: `{operation}` is not available on an immutable sequence"
                )
            }
        }
    }
}

impl Error for SequenceError {}
