//! First-class combinators over lenses.
//!
//! These free functions turn a lens into reusable getter/setter/updater
//! functions, so field access composes like any other function value.
//! Three families:
//!
//! - [`get`], [`prop`], [`over`], [`set`]: copy-on-write updates over
//!   [`ValueLens`](crate::optics::ValueLens); the input root is consumed and
//!   a new root is returned.
//! - [`mprop`], [`mver`], [`assign`]: in-place updates over
//!   [`ValueLensMut`](crate::optics::ValueLensMut); the root is mutated
//!   through `&mut` and no replacement is allocated.
//! - [`mprop_shared`], [`mver_shared`], [`assign_shared`]: shared-referent
//!   updates over [`ReferenceLens`](crate::optics::ReferenceLens); every
//!   holder of the root observes the mutation.
//!
//! The curried builders ([`prop`], [`mprop`], [`mprop_shared`]) box the
//! function they produce; the eager forms return unboxed closures.
//!
//! # Examples
//!
//! ```
//! use focal::optics::{get, over, set};
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let point_x = get(lens!(Point, x));
//! let double_x = over(lens!(Point, x), |x: i32| x * 2);
//! let zero_y = set(lens!(Point, y), 0);
//!
//! let point = Point { x: 21, y: 9 };
//! assert_eq!(point_x(&point), 21);
//! assert_eq!(zero_y(double_x(point)), Point { x: 42, y: 0 });
//! ```

use crate::optics::{ReferenceLens, ValueLens, ValueLensMut};

/// A boxed root-to-root transformer, as produced by [`prop`].
pub type Setter<S> = Box<dyn Fn(S) -> S>;

/// A boxed in-place root mutator, as produced by [`mprop`].
pub type MutSetter<S> = Box<dyn Fn(&mut S)>;

/// A boxed shared-referent mutator, as produced by [`mprop_shared`].
pub type SharedSetter<R> = Box<dyn Fn(&R)>;

/// Produces a first-class getter function for a lens.
///
/// Useful for passing field access to mapping algorithms.
///
/// # Example
///
/// ```
/// use focal::optics::get;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, age: u32 }
///
/// let age_of = get(lens!(Person, age));
/// let people = vec![
///     Person { name: "Ann".to_string(), age: 34 },
///     Person { name: "Bob".to_string(), age: 27 },
/// ];
/// let ages: Vec<u32> = people.iter().map(&age_of).collect();
/// assert_eq!(ages, vec![34, 27]);
/// ```
pub fn get<S, A, L>(lens: L) -> impl Fn(&S) -> A
where
    L: ValueLens<S, A>,
    A: Clone,
{
    move |source| lens.get(source).clone()
}

/// Produces a curried setter-builder for a lens.
///
/// Given an update function, the builder returns a pure function that maps a
/// root to a new root with the focused field replaced by
/// `update(current_value)`. The input root is never mutated.
///
/// # Example
///
/// ```
/// use focal::optics::prop;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let with_x = prop(lens!(Point, x));
/// let bump = with_x(|x: i32| x + 1);
///
/// assert_eq!(bump(Point { x: 1, y: 2 }), Point { x: 2, y: 2 });
/// ```
pub fn prop<S, A, L, F>(lens: L) -> impl Fn(F) -> Setter<S>
where
    S: 'static,
    L: ValueLens<S, A> + Clone + 'static,
    F: Fn(A) -> A + 'static,
    A: Clone,
{
    move |update: F| {
        let lens = lens.clone();
        Box::new(move |source: S| {
            let current = lens.get(&source).clone();
            lens.set(source, update(current))
        })
    }
}

/// Produces a setter function for a lens and update function.
///
/// Uncurried [`prop`]: the transform is supplied up front.
///
/// # Example
///
/// ```
/// use focal::optics::over;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, age: u32 }
///
/// let shout = over(lens!(Person, name), |name: String| name.to_uppercase());
/// let person = shout(Person { name: "ann".to_string(), age: 34 });
/// assert_eq!(person.name, "ANN");
/// ```
pub fn over<S, A, L, F>(lens: L, update: F) -> impl Fn(S) -> S
where
    L: ValueLens<S, A>,
    F: Fn(A) -> A,
    A: Clone,
{
    move |source| {
        let current = lens.get(&source).clone();
        lens.set(source, update(current))
    }
}

/// Produces a setter function for a lens and constant value.
///
/// Constant form of [`over`]: every application installs the same value.
///
/// # Example
///
/// ```
/// use focal::optics::set;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let reset_x = set(lens!(Point, x), 0);
/// assert_eq!(reset_x(Point { x: 9, y: 5 }), Point { x: 0, y: 5 });
/// ```
pub fn set<S, A, L>(lens: L, value: A) -> impl Fn(S) -> S
where
    L: ValueLens<S, A>,
    A: Clone,
{
    move |source| lens.set(source, value.clone())
}

/// Produces a curried in-place setter-builder for a lens.
///
/// Given an update closure over `&mut`, the builder returns a function that
/// rewrites the focused field of a root behind `&mut`, without allocating a
/// replacement root.
///
/// # Example
///
/// ```
/// use focal::optics::mprop;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { count: i32 }
///
/// let with_count = mprop(lens!(Counter, count));
/// let increment = with_count(|count: &mut i32| *count += 1);
///
/// let mut counter = Counter { count: 41 };
/// increment(&mut counter);
/// assert_eq!(counter.count, 42);
/// ```
pub fn mprop<S, A, L, F>(lens: L) -> impl Fn(F) -> MutSetter<S>
where
    S: 'static,
    L: ValueLensMut<S, A> + Clone + 'static,
    F: Fn(&mut A) + 'static,
{
    move |update: F| {
        let lens = lens.clone();
        Box::new(move |source: &mut S| update(lens.get_mut(source)))
    }
}

/// Produces an in-place setter function for a lens and update closure.
///
/// Uncurried [`mprop`].
///
/// # Example
///
/// ```
/// use focal::optics::mver;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, age: u32 }
///
/// let birthday = mver(lens!(Person, age), |age: &mut u32| *age += 1);
///
/// let mut person = Person { name: "Ann".to_string(), age: 34 };
/// birthday(&mut person);
/// assert_eq!(person.age, 35);
/// ```
pub fn mver<S, A, L, F>(lens: L, update: F) -> impl Fn(&mut S)
where
    L: ValueLensMut<S, A>,
    F: Fn(&mut A),
{
    move |source| update(lens.get_mut(source))
}

/// Produces an in-place setter function for a lens and constant value.
///
/// Constant form of [`mver`].
///
/// # Example
///
/// ```
/// use focal::optics::assign;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let zero_x = assign(lens!(Point, x), 0);
///
/// let mut point = Point { x: 9, y: 5 };
/// zero_x(&mut point);
/// assert_eq!(point, Point { x: 0, y: 5 });
/// ```
pub fn assign<S, A, L>(lens: L, value: A) -> impl Fn(&mut S)
where
    L: ValueLensMut<S, A>,
    A: Clone,
{
    move |source| *lens.get_mut(source) = value.clone()
}

/// Produces a curried setter-builder over a shared referent.
///
/// Reference-semantics counterpart of [`mprop`]: the returned function
/// mutates through the shared root handle, so the change is visible to
/// every holder immediately. Nothing is synchronized internally.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use focal::optics::mprop_shared;
/// use focal::shared_lens;
///
/// #[derive(PartialEq, Debug)]
/// struct Counter { count: i32 }
///
/// let with_count = mprop_shared(shared_lens!(Counter, count));
/// let increment = with_count(|count: &mut i32| *count += 1);
///
/// let counter = Rc::new(RefCell::new(Counter { count: 41 }));
/// increment(&counter);
/// assert_eq!(counter.borrow().count, 42);
/// ```
pub fn mprop_shared<R, A, L, F>(lens: L) -> impl Fn(F) -> SharedSetter<R>
where
    R: 'static,
    L: ReferenceLens<R, A> + Clone + 'static,
    F: Fn(&mut A) + 'static,
{
    move |update: F| {
        let lens = lens.clone();
        Box::new(move |root: &R| lens.modify(root, |slot| update(slot)))
    }
}

/// Produces a setter function over a shared referent.
///
/// Uncurried [`mprop_shared`].
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use focal::optics::mver_shared;
/// use focal::shared_lens;
///
/// #[derive(PartialEq, Debug)]
/// struct Settings { volume: u8 }
///
/// let louder = mver_shared(shared_lens!(Settings, volume), |volume: &mut u8| *volume += 1);
///
/// let settings = Rc::new(RefCell::new(Settings { volume: 3 }));
/// louder(&settings);
/// assert_eq!(settings.borrow().volume, 4);
/// ```
pub fn mver_shared<R, A, L, F>(lens: L, update: F) -> impl Fn(&R)
where
    L: ReferenceLens<R, A>,
    F: Fn(&mut A),
{
    move |root| lens.modify(root, |slot| update(slot))
}

/// Produces a constant setter function over a shared referent.
///
/// Constant form of [`mver_shared`].
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use focal::optics::assign_shared;
/// use focal::shared_lens;
///
/// #[derive(PartialEq, Debug)]
/// struct Settings { volume: u8 }
///
/// let mute = assign_shared(shared_lens!(Settings, volume), 0);
///
/// let settings = Rc::new(RefCell::new(Settings { volume: 9 }));
/// mute(&settings);
/// assert_eq!(settings.borrow().volume, 0);
/// ```
pub fn assign_shared<R, A, L>(lens: L, value: A) -> impl Fn(&R)
where
    L: ReferenceLens<R, A>,
    A: Clone,
{
    move |root| lens.set(root, value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lens, shared_lens};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_get_is_first_class() {
        let point_x = get(lens!(Point, x));
        let points = [Point { x: 1, y: 0 }, Point { x: 2, y: 0 }];
        let xs: Vec<i32> = points.iter().map(&point_x).collect();
        assert_eq!(xs, vec![1, 2]);
    }

    #[test]
    fn test_prop_does_not_mutate_input() {
        let with_x = prop(lens!(Point, x));
        let bump = with_x(|x: i32| x + 1);

        let point = Point { x: 1, y: 2 };
        let bumped = bump(point.clone());

        assert_eq!(point, Point { x: 1, y: 2 });
        assert_eq!(bumped, Point { x: 2, y: 2 });
    }

    #[test]
    fn test_over_equals_prop_applied() {
        let via_prop = prop(lens!(Point, x))(|x: i32| x * 3);
        let via_over = over(lens!(Point, x), |x: i32| x * 3);

        let point = Point { x: 7, y: 0 };
        assert_eq!(via_prop(point.clone()), via_over(point));
    }

    #[test]
    fn test_set_installs_constant() {
        let reset = set(lens!(Point, y), 0);
        assert_eq!(reset(Point { x: 3, y: 99 }), Point { x: 3, y: 0 });
    }

    #[test]
    fn test_mver_mutates_in_place() {
        let negate = mver(lens!(Point, x), |x: &mut i32| *x = -*x);
        let mut point = Point { x: 5, y: 1 };
        negate(&mut point);
        assert_eq!(point, Point { x: -5, y: 1 });
    }

    #[test]
    fn test_assign_overwrites_field_only() {
        let zero_x = assign(lens!(Point, x), 0);
        let mut point = Point { x: 5, y: 1 };
        zero_x(&mut point);
        assert_eq!(point, Point { x: 0, y: 1 });
    }

    #[test]
    fn test_shared_family_writes_through_referent() {
        #[derive(PartialEq, Debug)]
        struct Counter {
            count: i32,
        }

        let increment = mver_shared(shared_lens!(Counter, count), |count: &mut i32| *count += 1);
        let reset = assign_shared(shared_lens!(Counter, count), 0);

        let counter = Rc::new(RefCell::new(Counter { count: 10 }));
        let alias = Rc::clone(&counter);

        increment(&counter);
        assert_eq!(alias.borrow().count, 11);

        reset(&counter);
        assert_eq!(alias.borrow().count, 0);
    }
}
