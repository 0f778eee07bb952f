//! Lenses for shared-mutable roots.
//!
//! A [`ReferenceLens`] writes through a shared referent: the root keeps its
//! identity and every holder of the reference observes the new field value
//! immediately. This is the reference-semantics counterpart of
//! [`ValueLens`](crate::optics::ValueLens), kept as a separate trait so the
//! two aliasing disciplines cannot be blurred.
//!
//! There is no internal synchronization. Serializing concurrent mutation of
//! the same referent is the caller's responsibility.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use focal::optics::ReferenceLens;
//! use focal::shared_lens;
//!
//! #[derive(PartialEq, Debug)]
//! struct Settings { volume: u8 }
//!
//! let volume_lens = shared_lens!(Settings, volume);
//!
//! let settings = Rc::new(RefCell::new(Settings { volume: 3 }));
//! let alias = Rc::clone(&settings);
//!
//! volume_lens.set(&settings, 11);
//!
//! // The mutation is visible through every holder of the reference.
//! assert_eq!(alias.borrow().volume, 11);
//! ```

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

/// A lens with reference (shared-mutable) semantics.
///
/// `R` is the shared root handle; setting mutates the referent in place
/// rather than producing a replacement. Because the referent stays shared,
/// `get` returns an owned value instead of a borrow.
///
/// # Type Parameters
///
/// - `R`: The shared root handle type
/// - `A`: The target type (the focused field)
pub trait ReferenceLens<R, A> {
    /// Gets the current value of the focused field.
    fn get(&self, root: &R) -> A;

    /// Mutates the focused field in place through the given closure.
    fn modify<F>(&self, root: &R, function: F)
    where
        F: FnOnce(&mut A);

    /// Sets the focused field to a new value through the shared referent.
    fn set(&self, root: &R, value: A) {
        self.modify(root, |slot| *slot = value);
    }
}

/// A reference lens over `Rc<RefCell<S>>` roots.
///
/// Built from the same projection pair as
/// [`FieldLens`](crate::optics::FieldLens); the `shared_lens!` macro
/// generates a `SharedLens`. Borrow-checking is dynamic: reading or writing
/// while the referent is already mutably borrowed panics, as usual for
/// [`RefCell`].
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use focal::optics::{ReferenceLens, SharedLens};
///
/// #[derive(PartialEq, Debug)]
/// struct Counter { count: i32 }
///
/// let count_lens = SharedLens::new(
///     |counter: &Counter| &counter.count,
///     |counter: &mut Counter| &mut counter.count,
/// );
///
/// let counter = Rc::new(RefCell::new(Counter { count: 0 }));
/// count_lens.modify(&counter, |count| *count += 1);
/// assert_eq!(count_lens.get(&counter), 1);
/// ```
pub struct SharedLens<S, A, G, M>
where
    G: Fn(&S) -> &A,
    M: Fn(&mut S) -> &mut A,
{
    getter: G,
    getter_mut: M,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, M> SharedLens<S, A, G, M>
where
    G: Fn(&S) -> &A,
    M: Fn(&mut S) -> &mut A,
{
    /// Creates a new `SharedLens` from a shared and a mutable projection.
    ///
    /// Both projections must focus on the same field.
    #[must_use]
    pub const fn new(getter: G, getter_mut: M) -> Self {
        Self {
            getter,
            getter_mut,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, M> ReferenceLens<Rc<RefCell<S>>, A> for SharedLens<S, A, G, M>
where
    G: Fn(&S) -> &A,
    M: Fn(&mut S) -> &mut A,
    A: Clone,
{
    fn get(&self, root: &Rc<RefCell<S>>) -> A {
        (self.getter)(&*root.borrow()).clone()
    }

    fn modify<F>(&self, root: &Rc<RefCell<S>>, function: F)
    where
        F: FnOnce(&mut A),
    {
        let mut referent = root.borrow_mut();
        function((self.getter_mut)(&mut *referent));
    }
}

impl<S, A, G, M> Clone for SharedLens<S, A, G, M>
where
    G: Fn(&S) -> &A + Clone,
    M: Fn(&mut S) -> &mut A + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            getter_mut: self.getter_mut.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, M> std::fmt::Debug for SharedLens<S, A, G, M>
where
    G: Fn(&S) -> &A,
    M: Fn(&mut S) -> &mut A,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("SharedLens").finish_non_exhaustive()
    }
}

/// Creates a reference lens for a struct field.
///
/// Generates a [`SharedLens`](crate::optics::SharedLens) whose projections
/// focus on the named field, usable with `Rc<RefCell<_>>` roots.
///
/// # Syntax
///
/// ```text
/// shared_lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use focal::optics::ReferenceLens;
/// use focal::shared_lens;
///
/// #[derive(PartialEq, Debug)]
/// struct Counter { count: i32 }
///
/// let count_lens = shared_lens!(Counter, count);
/// let counter = Rc::new(RefCell::new(Counter { count: 41 }));
/// count_lens.modify(&counter, |count| *count += 1);
/// assert_eq!(counter.borrow().count, 42);
/// ```
#[macro_export]
macro_rules! shared_lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::SharedLens::new(
            |source: &$struct_type| &source.$field,
            |source: &mut $struct_type| &mut source.$field,
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::SharedLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |source: &mut $struct_type<$($generic),+>| &mut source.$field,
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::SharedLens::new(
            |source: &$struct_type| &source.$field,
            |source: &mut $struct_type| &mut source.$field,
        )
    };
}
