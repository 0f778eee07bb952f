//! Element relocation and circular shifting.

/// Moves the element at `from` to position `to`, shifting the elements in
/// between by one place.
///
/// This operation is deliberately strict: clamping an invalid index would
/// mask a caller bug. Callers that need leniency should validate with
/// [`at`](crate::sequence::at) first.
///
/// # Panics
///
/// Panics if `from == to` or if either index is out of bounds.
///
/// # Example
///
/// ```
/// use focal::sequence::rearrange;
///
/// let mut numbers = vec![1, 2, 3, 4, 5];
/// rearrange(&mut numbers, 2, 0);
/// assert_eq!(numbers, vec![3, 1, 2, 4, 5]);
/// ```
pub fn rearrange<T>(elements: &mut Vec<T>, from: usize, to: usize) {
    assert!(from != to, "`from` and `to` must differ");
    assert!(
        from < elements.len() && to < elements.len(),
        "indices out of bounds: from={from}, to={to}, len={}",
        elements.len(),
    );
    let element = elements.remove(from);
    elements.insert(to, element);
}

/// Pure counterpart of [`rearrange`]: returns a new sequence with the
/// element relocated, leaving the input untouched.
///
/// # Panics
///
/// Panics under the same preconditions as [`rearrange`].
///
/// # Example
///
/// ```
/// use focal::sequence::rearranged;
///
/// assert_eq!(rearranged(&[1, 2, 3, 4, 5], 2, 0), vec![3, 1, 2, 4, 5]);
/// ```
pub fn rearranged<T>(elements: &[T], from: usize, to: usize) -> Vec<T>
where
    T: Clone,
{
    let mut relocated = elements.to_vec();
    rearrange(&mut relocated, from, to);
    relocated
}

/// Returns a new sequence with a shifted starting point: the element
/// originally at index `positions` becomes index 0, wrapping around.
///
/// Equivalent to concatenating `[positions, len)` with `[0, positions)`.
/// Both `positions == 0` and `positions == len` yield the original order.
///
/// # Panics
///
/// Panics if `positions > len`.
///
/// # Example
///
/// ```
/// use focal::sequence::shifted;
///
/// assert_eq!(shifted(&[1, 2, 3, 4, 5], 2), vec![3, 4, 5, 1, 2]);
/// ```
pub fn shifted<T>(elements: &[T], positions: usize) -> Vec<T>
where
    T: Clone,
{
    assert!(
        positions <= elements.len(),
        "shift of {positions} exceeds length {}",
        elements.len(),
    );
    let mut rotated = Vec::with_capacity(elements.len());
    rotated.extend_from_slice(&elements[positions..]);
    rotated.extend_from_slice(&elements[..positions]);
    rotated
}
