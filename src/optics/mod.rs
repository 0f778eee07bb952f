//! Optics for typed field access.
//!
//! This module provides lenses - composable, typed field references - and
//! the combinator families built on top of them. A lens identifies one
//! field within a structure and yields reusable functions to read, replace,
//! or transform that field without hand-written boilerplate.
//!
//! # Two update disciplines
//!
//! ```text
//! ValueLens      copy-on-write: set consumes the root, returns a new one
//! ValueLensMut   in-place:      set writes through &mut, no new root
//! ReferenceLens  shared:        set writes through a shared referent
//! ```
//!
//! Value and reference semantics are kept as distinct traits because the
//! two have materially different aliasing behavior: a value update leaves
//! the original root untouched, while a reference update is observed by
//! every holder of the root immediately. Reference updates carry no
//! internal synchronization; concurrent mutation of one referent is the
//! caller's to serialize.
//!
//! # Example
//!
//! ```
//! use focal::optics::ValueLens;
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! // Compose lenses to focus on nested fields
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! // Get nested field
//! assert_eq!(*person_street.get(&person), "Main St");
//!
//! // Set nested field (returns new structure)
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo"); // Other fields unchanged
//! ```
//!
//! # Lens Laws
//!
//! Every lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source, lens.get(&source).clone()) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == &value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! There are no error states anywhere in this module: field references are
//! statically typed, so "field not found" cannot occur at runtime.

mod combinator;
mod lens;
mod shared;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FieldLens;
pub use lens::FunctionLens;
pub use lens::ValueLens;
pub use lens::ValueLensMut;

// Re-export shared-root lenses
pub use shared::ReferenceLens;
pub use shared::SharedLens;

// Re-export the combinator families
pub use combinator::MutSetter;
pub use combinator::Setter;
pub use combinator::SharedSetter;
pub use combinator::{assign, mprop, mver};
pub use combinator::{assign_shared, mprop_shared, mver_shared};
pub use combinator::{get, over, prop, set};
