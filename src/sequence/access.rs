//! Safe indexing, in-place transforms, and sampling.

/// Returns the element at `index`, or `None` when out of bounds.
///
/// This is the one total accessor in the module and never panics; the
/// strict operations ([`rearrange`](crate::sequence::rearrange),
/// [`shifted`](crate::sequence::shifted)) point lenient callers here.
///
/// # Example
///
/// ```
/// use focal::sequence::at;
///
/// let letters = ["a", "b", "c"];
/// assert_eq!(at(&letters, 0), Some(&"a"));
/// assert_eq!(at(&letters, 3), None);
/// ```
pub fn at<T>(elements: &[T], index: usize) -> Option<&T> {
    elements.get(index)
}

/// Applies a transform to every element of a sequence in place.
///
/// # Example
///
/// ```
/// use focal::sequence::mutate_each;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { count: i32 }
///
/// let mut counters = vec![Counter { count: 1 }, Counter { count: 2 }];
/// mutate_each(&mut counters, |counter| counter.count += 1);
/// assert_eq!(counters, vec![Counter { count: 2 }, Counter { count: 3 }]);
/// ```
pub fn mutate_each<T, F>(elements: &mut [T], mut transform: F)
where
    F: FnMut(&mut T),
{
    for element in elements {
        transform(element);
    }
}

/// Picks `amount` elements from the sequence at indices drawn from an
/// injected source. Duplicates are allowed.
///
/// `next_index` is called once per pick with the sequence length and must
/// return an index below it. Taking the source as a parameter rather than
/// reaching for an ambient generator keeps the operation deterministic
/// under test.
///
/// # Panics
///
/// Panics if `amount > 0` and the sequence is empty, or if the source
/// returns an out-of-range index.
///
/// # Example
///
/// ```
/// use focal::sequence::sample;
///
/// let letters = ["a", "b", "c"];
/// // A fixed source: cycles 0, 1, 2, 0, ...
/// let mut state = 0;
/// let picked = sample(&letters, 4, |bound| {
///     let index = state % bound;
///     state += 1;
///     index
/// });
/// assert_eq!(picked, vec!["a", "b", "c", "a"]);
/// ```
pub fn sample<T, F>(elements: &[T], amount: usize, mut next_index: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize) -> usize,
{
    assert!(
        amount == 0 || !elements.is_empty(),
        "cannot sample from an empty sequence",
    );
    (0..amount)
        .map(|_| {
            let index = next_index(elements.len());
            assert!(
                index < elements.len(),
                "index source returned {index}, length is {}",
                elements.len(),
            );
            elements[index].clone()
        })
        .collect()
}
