//! Lenses for focusing on struct fields.
//!
//! A lens is a typed field reference: a value pairing a getter with a
//! setter for one field of a larger structure. Lenses compose, which gives
//! access to deeply nested fields without hand-written plumbing.
//!
//! # Laws
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
//! # Examples
//!
//! ```
//! use focal::optics::ValueLens;
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```

use std::marker::PhantomData;

/// A lens with value (copy-on-write) semantics.
///
/// Setting never mutates the input root; a new root is returned with the
/// focused field replaced and every other field untouched.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
///
/// # Laws
///
/// 1. **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
/// 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`
/// 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
pub trait ValueLens<S, A> {
    /// Gets a reference to the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Sets the focused field to a new value, returning a new source.
    ///
    /// The input is consumed; no other field of the source is altered.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function to its current value.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::ValueLens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Modifies the focused field by applying a function to a reference.
    ///
    /// Avoids the `Clone` bound of [`modify`](ValueLens::modify) when the
    /// transformation only needs to read the current value.
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = function(self.get(&source));
        self.set(source, new_value)
    }

    /// Composes this lens with another lens to focus on a nested field.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::ValueLens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Tokyo".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(*person_street.get(&person), "Main St");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: ValueLens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// A value lens that additionally exposes a mutable projection.
///
/// The mutable projection enables the in-place update family: the focused
/// field is rewritten through `&mut` without allocating a replacement root.
pub trait ValueLensMut<S, A>: ValueLens<S, A> {
    /// Gets a mutable reference to the focused field.
    fn get_mut<'a>(&self, source: &'a mut S) -> &'a mut A;

    /// Mutates the focused field in place through the given closure.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::ValueLensMut;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Counter { count: i32 }
    ///
    /// let count_lens = lens!(Counter, count);
    /// let mut counter = Counter { count: 41 };
    /// count_lens.modify_in_place(&mut counter, |count| *count += 1);
    /// assert_eq!(counter.count, 42);
    /// ```
    fn modify_in_place<F>(&self, source: &mut S, function: F)
    where
        F: FnOnce(&mut A),
    {
        function(self.get_mut(source));
    }
}

/// A lens built from a shared projection and a mutable projection.
///
/// This is the canonical lens: the `lens!` macro generates a `FieldLens`.
/// `set` is derived by writing through the mutable projection on an owned
/// root, so a single pair of projections yields the full value family.
///
/// # Example
///
/// ```
/// use focal::optics::{FieldLens, ValueLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FieldLens::new(
///     |point: &Point| &point.x,
///     |point: &mut Point| &mut point.x,
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(*x_lens.get(&point), 10);
/// assert_eq!(x_lens.set(point, 7), Point { x: 7, y: 20 });
/// ```
pub struct FieldLens<S, A, G, M>
where
    G: Fn(&S) -> &A,
    M: Fn(&mut S) -> &mut A,
{
    getter: G,
    getter_mut: M,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, M> FieldLens<S, A, G, M>
where
    G: Fn(&S) -> &A,
    M: Fn(&mut S) -> &mut A,
{
    /// Creates a new `FieldLens` from a shared and a mutable projection.
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

impl<S, A, G, M> ValueLens<S, A> for FieldLens<S, A, G, M>
where
    G: Fn(&S) -> &A,
    M: Fn(&mut S) -> &mut A,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, mut source: S, value: A) -> S {
        *(self.getter_mut)(&mut source) = value;
        source
    }
}

impl<S, A, G, M> ValueLensMut<S, A> for FieldLens<S, A, G, M>
where
    G: Fn(&S) -> &A,
    M: Fn(&mut S) -> &mut A,
{
    fn get_mut<'a>(&self, source: &'a mut S) -> &'a mut A {
        (self.getter_mut)(source)
    }
}

impl<S, A, G, M> Clone for FieldLens<S, A, G, M>
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

impl<S, A, G, M> std::fmt::Debug for FieldLens<S, A, G, M>
where
    G: Fn(&S) -> &A,
    M: Fn(&mut S) -> &mut A,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FieldLens").finish_non_exhaustive()
    }
}

/// A lens built from an explicit getter/setter pair.
///
/// Escape hatch for foci whose replacement is not a plain field write, for
/// example a field kept in sync with another. Implements [`ValueLens`] only;
/// without a mutable projection the in-place family is unavailable.
///
/// # Example
///
/// ```
/// use focal::optics::{FunctionLens, ValueLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| &point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// assert_eq!(*x_lens.get(&Point { x: 10, y: 20 }), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> ValueLens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// Focuses through an intermediate structure: the outer lens reaches the
/// intermediate, the inner lens reaches the final field.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate type (target of `L1`, source of `L2`)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens from an outer and an inner lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> ValueLens<S, B> for ComposedLens<L1, L2, A>
where
    L1: ValueLens<S, A>,
    L2: ValueLens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.second.get(self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source).clone();
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<S, A, B, L1, L2> ValueLensMut<S, B> for ComposedLens<L1, L2, A>
where
    L1: ValueLensMut<S, A>,
    L2: ValueLensMut<A, B>,
    A: Clone + 'static,
{
    fn get_mut<'a>(&self, source: &'a mut S) -> &'a mut B {
        self.second.get_mut(self.first.get_mut(source))
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a lens for a struct field.
///
/// Generates a [`FieldLens`](crate::optics::FieldLens) whose projections
/// focus on the named field of the given struct type.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use focal::optics::{ValueLens, ValueLensMut};
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let y_lens = lens!(Point, y);
///
/// let point = Point { x: 10, y: 20 };
///
/// // Get
/// assert_eq!(*x_lens.get(&point), 10);
/// assert_eq!(*y_lens.get(&point), 20);
///
/// // Set
/// let updated = x_lens.set(point, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
///
/// // Modify in place, no new root
/// let mut point = updated;
/// x_lens.modify_in_place(&mut point, |x| *x *= 2);
/// assert_eq!(point.x, 200);
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FieldLens::new(
            |source: &$struct_type| &source.$field,
            |source: &mut $struct_type| &mut source.$field,
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FieldLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |source: &mut $struct_type<$($generic),+>| &mut source.$field,
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FieldLens::new(
            |source: &$struct_type| &source.$field,
            |source: &mut $struct_type| &mut source.$field,
        )
    };
}
