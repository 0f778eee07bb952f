//! # focal
//!
//! Composable lens combinators and order-preserving sequence algorithms.
//!
//! ## Overview
//!
//! This library provides two independent leaf modules:
//!
//! - **Optics**: typed field references ("lenses") and the combinator
//!   families built on them, covering both copy-on-write roots and
//!   shared-mutable roots behind `Rc<RefCell<_>>`.
//! - **Sequence**: pure transformations of finite ordered sequences:
//!   order-preserving deduplication, fixed-size chunking, index-bounded
//!   relocation, circular shifting, and total safe indexing.
//!
//! The two modules do not depend on each other; both depend only on
//! generics and the equality/hash capabilities of caller-supplied types.
//!
//! ## Feature Flags
//!
//! - `optics`: lens traits, macros, and combinators (default)
//! - `sequence`: sequence algorithms (default)
//! - `fxhash`: use `rustc-hash` for the deduplication seen-key set
//! - `ahash`: use `ahash` for the deduplication seen-key set
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use focal::prelude::*;
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//! let doubled = over(x_lens, |x: i32| x * 2);
//! assert_eq!(doubled(Point { x: 21, y: 7 }), Point { x: 42, y: 7 });
//!
//! assert_eq!(uniques(&[3, 1, 1, 2, 7, 4, 7]), vec![3, 1, 2, 7, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, and functions.
///
/// # Usage
///
/// ```rust
/// use focal::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "sequence")]
pub mod sequence;
