//! Pure algorithms over finite ordered sequences.
//!
//! Inputs are slices; pure operations return fresh `Vec`s and never mutate
//! their input. The explicitly mutating variants ([`rearrange`],
//! [`mutate_each`]) take `&mut` and are named for it. No state is shared
//! between calls, so concurrent independent use is trivially safe.
//!
//! # Operations
//!
//! - [`unique_by`] / [`uniques`]: order-preserving deduplication by a
//!   derived key (earliest occurrence wins), amortized O(n)
//! - [`chunks`]: fixed-size chunking, last chunk holds the remainder
//! - [`rearrange`] / [`rearranged`]: index-bounded element relocation
//! - [`shifted`]: circular shift of the starting point
//! - [`at`]: total safe indexing
//! - [`mutate_each`]: in-place element transform
//! - [`sample`]: random picks through an injected index source
//!
//! Method syntax for all of the above is available through [`SequenceExt`]
//! and [`SequenceExtMut`].
//!
//! # Failure semantics
//!
//! Invalid input is a caller bug and panics immediately with a descriptive
//! message; nothing is clamped, corrected, or retried. The exceptions are
//! documented per operation ([`chunks`] with zero size, [`rearrange`] with
//! equal or out-of-range indices, [`shifted`] past the length, [`sample`]
//! from an empty sequence). [`at`] is the total alternative for callers
//! that prefer an `Option` over a precondition.
//!
//! # Example
//!
//! ```
//! use focal::sequence::{chunks, shifted, uniques};
//!
//! assert_eq!(uniques(&[3, 1, 1, 2, 7, 4, 7]), vec![3, 1, 2, 7, 4]);
//! assert_eq!(chunks(&[1, 2, 3, 4, 5, 6, 7], 3).len(), 3);
//! assert_eq!(shifted(&[1, 2, 3, 4, 5], 2), vec![3, 4, 5, 1, 2]);
//! ```

mod access;
mod arrange;
mod chunk;
mod dedup;
mod ext;

pub use access::at;
pub use access::mutate_each;
pub use access::sample;

pub use arrange::rearrange;
pub use arrange::rearranged;
pub use arrange::shifted;

pub use chunk::chunks;

pub use dedup::unique_by;
pub use dedup::uniques;

pub use ext::SequenceExt;
pub use ext::SequenceExtMut;
