//! Fixed-size chunking.

/// Splits a sequence into consecutive chunks of `size` elements.
///
/// Every chunk has exactly `size` elements except possibly the last, which
/// holds the remainder. The chunk count is `ceil(len / size)`. The input is
/// not mutated.
///
/// # Panics
///
/// Panics if `size` is zero. (Negative sizes are unrepresentable: `size`
/// is a `usize`.)
///
/// # Example
///
/// ```
/// use focal::sequence::chunks;
///
/// assert_eq!(
///     chunks(&[1, 2, 3, 4, 5, 6, 7], 3),
///     vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]],
/// );
/// ```
pub fn chunks<T>(elements: &[T], size: usize) -> Vec<Vec<T>>
where
    T: Clone,
{
    assert!(size > 0, "chunk size must be positive");
    elements.chunks(size).map(<[T]>::to_vec).collect()
}
