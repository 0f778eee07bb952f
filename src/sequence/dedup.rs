//! Order-preserving deduplication.

use std::collections::HashSet;
use std::hash::Hash;

#[cfg(feature = "fxhash")]
type KeyHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type KeyHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type KeyHasher = std::collections::hash_map::RandomState;

/// Returns the elements whose derived key has not been seen earlier,
/// in their original order.
///
/// Two elements are duplicates when `key_of` maps them to equal keys; the
/// earliest occurrence is always the one kept. Runs in amortized O(n) using
/// a seen-key set (selected by the `fxhash`/`ahash` feature flags, std
/// hashing otherwise). The input is not mutated.
///
/// # Example
///
/// ```
/// use focal::sequence::unique_by;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Car { model: &'static str, year: u32 }
///
/// let cars = [
///     Car { model: "Toyota", year: 2020 },
///     Car { model: "Honda", year: 2020 },
///     Car { model: "Toyota", year: 2021 },
/// ];
///
/// let by_model = unique_by(&cars, |car| car.model);
/// assert_eq!(by_model.len(), 2);
/// assert_eq!(by_model[0].year, 2020); // the earlier Toyota wins
/// ```
pub fn unique_by<T, K, F>(elements: &[T], mut key_of: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut seen: HashSet<K, KeyHasher> =
        HashSet::with_capacity_and_hasher(elements.len(), KeyHasher::default());
    let mut kept = Vec::new();
    for element in elements {
        if seen.insert(key_of(element)) {
            kept.push(element.clone());
        }
    }
    kept
}

/// Returns the distinct elements of a sequence, in their original order.
///
/// Variant of [`unique_by`] keyed by the elements themselves.
///
/// # Example
///
/// ```
/// use focal::sequence::uniques;
///
/// assert_eq!(uniques(&[3, 1, 1, 2, 7, 4, 7]), vec![3, 1, 2, 7, 4]);
/// ```
pub fn uniques<T>(elements: &[T]) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    unique_by(elements, |element| element.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_by_keeps_first_occurrence() {
        let pairs = [(1, "a"), (2, "b"), (1, "c"), (3, "d"), (2, "e")];
        let kept = unique_by(&pairs, |pair| pair.0);
        assert_eq!(kept, vec![(1, "a"), (2, "b"), (3, "d")]);
    }

    #[test]
    fn test_unique_by_preserves_order() {
        let numbers = [9, 3, 9, 1, 3, 7];
        assert_eq!(unique_by(&numbers, |n| *n), vec![9, 3, 1, 7]);
    }

    #[test]
    fn test_uniques_example() {
        assert_eq!(uniques(&[3, 1, 1, 2, 7, 4, 7]), vec![3, 1, 2, 7, 4]);
    }

    #[test]
    fn test_unique_by_empty_input() {
        let empty: [i32; 0] = [];
        assert!(unique_by(&empty, |n| *n).is_empty());
    }

    #[test]
    fn test_unique_by_all_duplicates() {
        assert_eq!(uniques(&[5, 5, 5, 5]), vec![5]);
    }

    #[test]
    fn test_unique_by_does_not_mutate_input() {
        let numbers = vec![1, 1, 2];
        let _ = uniques(&numbers);
        assert_eq!(numbers, vec![1, 1, 2]);
    }
}
