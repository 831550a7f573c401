//! # immutable-sequence
//!
//! A fixed-size, read-only ordered collection.
//!
//! ## Overview
//!
//! [`ImmutableSequence`](sequence::ImmutableSequence) is built once from a
//! backing store and never changes afterwards. It offers:
//!
//! - **Lookup**: checked `get`, `len`, `is_empty`
//! - **Search**: linear `index_of` and `contains` using value equality
//! - **Derivation**: `sub_sequence` and `concat`, each with a fresh store
//! - **Conversion**: `to_mutable_list`, `to_array`, `to_array_with`
//! - **Traversal**: independent forward-only cursors
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): `Semigroup` and `Monoid` implementations
//! - `serde`: serialization as a plain sequence
//! - `rayon`: parallel iteration
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use immutable_sequence::prelude::*;
//!
//! let sequence = ImmutableSequence::of(vec![1, 2, 3]);
//! let joined = sequence.concat(&ImmutableSequence::of(vec![4]));
//! assert_eq!(joined.to_string(), "[1, 2, 3, 4]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use immutable_sequence::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod sequence;

#[cfg(feature = "typeclass")]
pub mod typeclass;
