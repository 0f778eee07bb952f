//! Method-syntax extensions over slices and vectors.
//!
//! Thin delegating wrappers so the algorithms read as methods:
//!
//! ```
//! use focal::sequence::SequenceExt;
//!
//! assert_eq!([3, 1, 1, 2].uniques(), vec![3, 1, 2]);
//! ```

use std::hash::Hash;

use super::{at, chunks, mutate_each, rearrange, rearranged, sample, shifted, unique_by, uniques};

/// Pure sequence algorithms as slice methods.
///
/// Every method delegates to the free function of the same (or nearly the
/// same) name; preconditions and panics carry over unchanged. `chunked`
/// diverges in name only, to avoid shadowing the inherent `[T]::chunks`.
pub trait SequenceExt<T> {
    /// See [`unique_by`].
    fn unique_by<K, F>(&self, key_of: F) -> Vec<T>
    where
        T: Clone,
        K: Hash + Eq,
        F: FnMut(&T) -> K;

    /// See [`uniques`].
    fn uniques(&self) -> Vec<T>
    where
        T: Hash + Eq + Clone;

    /// See [`chunks`].
    fn chunked(&self, size: usize) -> Vec<Vec<T>>
    where
        T: Clone;

    /// See [`rearranged`].
    fn rearranged(&self, from: usize, to: usize) -> Vec<T>
    where
        T: Clone;

    /// See [`shifted`].
    fn shifted(&self, positions: usize) -> Vec<T>
    where
        T: Clone;

    /// See [`at`].
    fn at(&self, index: usize) -> Option<&T>;

    /// See [`sample`].
    fn sample<F>(&self, amount: usize, next_index: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(usize) -> usize;
}

impl<T> SequenceExt<T> for [T] {
    fn unique_by<K, F>(&self, key_of: F) -> Vec<T>
    where
        T: Clone,
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        unique_by(self, key_of)
    }

    fn uniques(&self) -> Vec<T>
    where
        T: Hash + Eq + Clone,
    {
        uniques(self)
    }

    fn chunked(&self, size: usize) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        chunks(self, size)
    }

    fn rearranged(&self, from: usize, to: usize) -> Vec<T>
    where
        T: Clone,
    {
        rearranged(self, from, to)
    }

    fn shifted(&self, positions: usize) -> Vec<T>
    where
        T: Clone,
    {
        shifted(self, positions)
    }

    fn at(&self, index: usize) -> Option<&T> {
        at(self, index)
    }

    fn sample<F>(&self, amount: usize, next_index: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(usize) -> usize,
    {
        sample(self, amount, next_index)
    }
}

/// Mutating sequence algorithms as vector methods.
pub trait SequenceExtMut<T> {
    /// See [`rearrange`].
    fn rearrange(&mut self, from: usize, to: usize);

    /// See [`mutate_each`].
    fn mutate_each<F>(&mut self, transform: F)
    where
        F: FnMut(&mut T);
}

impl<T> SequenceExtMut<T> for Vec<T> {
    fn rearrange(&mut self, from: usize, to: usize) {
        rearrange(self, from, to);
    }

    fn mutate_each<F>(&mut self, transform: F)
    where
        F: FnMut(&mut T),
    {
        mutate_each(self, transform);
    }
}
