//! Immutable, fixed-size sequences.
//!
//! - [`ImmutableSequence`]: a read-only ordered collection built once from a
//!   backing store
//! - [`Cursor`]: an independent forward-only traversal over it
//! - [`SequenceError`]: the failures its checked operations report
//!
//! # Flat Copies
//!
//! Unlike a persistent structure, an `ImmutableSequence` shares nothing with
//! the sequences derived from it. `sub_sequence`, `concat` and `clone` always
//! produce their own backing store:
//!
//! ```rust
//! use immutable_sequence::sequence::ImmutableSequence;
//!
//! let sequence = ImmutableSequence::of(vec![1, 2, 3]);
//! let prefix = sequence.sub_sequence(0, 2).unwrap();
//! assert_ne!(prefix.as_slice().as_ptr(), sequence.as_slice().as_ptr());
//! ```
//!
//! # Sharing Across Threads
//!
//! Once constructed a sequence is never written to, so it is `Send` and
//! `Sync` whenever its elements are and can be read concurrently without
//! synchronization.

mod cursor;
mod error;
mod immutable;

pub use cursor::Cursor;
pub use cursor::ImmutableSequenceIntoIterator;
pub use error::SequenceError;
pub use immutable::ImmutableSequence;
