//! Type classes implemented by the containers of this crate.
//!
//! - [`Semigroup`]: associative binary operations (`combine`)
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//!
//! For [`ImmutableSequence`](crate::sequence::ImmutableSequence), `combine`
//! is concatenation and `empty` is the empty sequence.

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
