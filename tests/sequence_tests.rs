#![cfg(feature = "sequence")]
//! Unit tests for the sequence algorithms.
//!
//! Covers the documented end-to-end examples, edge cases for every
//! operation, and the strict precondition failures.

use focal::sequence::{
    at, chunks, mutate_each, rearrange, rearranged, sample, shifted, unique_by, uniques,
    SequenceExt, SequenceExtMut,
};
use rstest::rstest;

// =============================================================================
// End-to-end examples
// =============================================================================

#[rstest]
fn test_uniques_end_to_end() {
    assert_eq!(uniques(&[3, 1, 1, 2, 7, 4, 7]), vec![3, 1, 2, 7, 4]);
}

#[rstest]
fn test_chunks_end_to_end() {
    assert_eq!(
        chunks(&[1, 2, 3, 4, 5, 6, 7], 3),
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]],
    );
}

#[rstest]
fn test_rearrange_end_to_end() {
    let mut numbers = vec![1, 2, 3, 4, 5];
    rearrange(&mut numbers, 2, 0);
    assert_eq!(numbers, vec![3, 1, 2, 4, 5]);
}

#[rstest]
fn test_shifted_end_to_end() {
    assert_eq!(shifted(&[1, 2, 3, 4, 5], 2), vec![3, 4, 5, 1, 2]);
}

// =============================================================================
// Deduplication
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Car {
    model: &'static str,
    year: u32,
}

#[rstest]
fn test_unique_by_derived_key_keeps_earliest() {
    let cars = [
        Car { model: "Toyota", year: 2020 },
        Car { model: "Honda", year: 2020 },
        Car { model: "Toyota", year: 2021 },
        Car { model: "Ford", year: 2020 },
    ];

    let by_model = unique_by(&cars, |car| car.model);

    assert_eq!(
        by_model,
        vec![
            Car { model: "Toyota", year: 2020 },
            Car { model: "Honda", year: 2020 },
            Car { model: "Ford", year: 2020 },
        ],
    );
}

#[rstest]
#[case(&[], &[])]
#[case(&[1], &[1])]
#[case(&[1, 1, 1], &[1])]
#[case(&[1, 2, 3], &[1, 2, 3])]
#[case(&[2, 1, 2, 1], &[2, 1])]
fn test_uniques_cases(#[case] input: &[i32], #[case] expected: &[i32]) {
    assert_eq!(uniques(input), expected.to_vec());
}

// =============================================================================
// Chunking
// =============================================================================

#[rstest]
#[case(7, 3, 3)]
#[case(6, 3, 2)]
#[case(1, 3, 1)]
#[case(0, 3, 0)]
#[case(5, 1, 5)]
fn test_chunk_count_is_ceiling(#[case] length: usize, #[case] size: usize, #[case] expected: usize) {
    let elements: Vec<usize> = (0..length).collect();
    assert_eq!(chunks(&elements, size).len(), expected);
}

#[rstest]
fn test_chunks_concatenation_restores_input() {
    let elements: Vec<i32> = (0..23).collect();
    let rejoined: Vec<i32> = chunks(&elements, 5).concat();
    assert_eq!(rejoined, elements);
}

#[rstest]
#[should_panic(expected = "chunk size must be positive")]
fn test_chunks_zero_size_is_a_precondition_failure() {
    let _ = chunks(&[1, 2, 3], 0);
}

// =============================================================================
// Relocation
// =============================================================================

#[rstest]
#[case(2, 0, &[3, 1, 2, 4, 5])]
#[case(0, 4, &[2, 3, 4, 5, 1])]
#[case(4, 0, &[5, 1, 2, 3, 4])]
#[case(1, 3, &[1, 3, 4, 2, 5])]
fn test_rearranged_cases(#[case] from: usize, #[case] to: usize, #[case] expected: &[i32]) {
    assert_eq!(rearranged(&[1, 2, 3, 4, 5], from, to), expected.to_vec());
}

#[rstest]
fn test_rearranged_element_lands_at_target() {
    let numbers = [10, 20, 30, 40];
    for from in 0..numbers.len() {
        for to in 0..numbers.len() {
            if from == to {
                continue;
            }
            let relocated = rearranged(&numbers, from, to);
            assert_eq!(relocated[to], numbers[from]);
        }
    }
}

#[rstest]
#[should_panic(expected = "`from` and `to` must differ")]
fn test_rearrange_rejects_equal_indices() {
    let mut numbers = vec![1, 2, 3];
    rearrange(&mut numbers, 2, 2);
}

#[rstest]
#[should_panic(expected = "indices out of bounds")]
fn test_rearrange_rejects_from_out_of_bounds() {
    let mut numbers = vec![1, 2, 3];
    rearrange(&mut numbers, 3, 0);
}

#[rstest]
#[should_panic(expected = "indices out of bounds")]
fn test_rearrange_rejects_to_out_of_bounds() {
    let mut numbers = vec![1, 2, 3];
    rearrange(&mut numbers, 0, 3);
}

// =============================================================================
// Shifting
// =============================================================================

#[rstest]
#[case(0, &[1, 2, 3, 4, 5])]
#[case(2, &[3, 4, 5, 1, 2])]
#[case(5, &[1, 2, 3, 4, 5])]
fn test_shifted_cases(#[case] positions: usize, #[case] expected: &[i32]) {
    assert_eq!(shifted(&[1, 2, 3, 4, 5], positions), expected.to_vec());
}

#[rstest]
fn test_shifted_round_trips_for_every_position() {
    let numbers = [1, 2, 3, 4, 5, 6];
    for positions in 0..=numbers.len() {
        let rotated = shifted(&numbers, positions);
        assert_eq!(shifted(&rotated, numbers.len() - positions), numbers.to_vec());
    }
}

#[rstest]
#[should_panic(expected = "exceeds length")]
fn test_shifted_rejects_positions_past_length() {
    let _ = shifted(&[1, 2, 3], 4);
}

// =============================================================================
// Safe access, in-place transform, sampling
// =============================================================================

#[rstest]
fn test_at_never_panics() {
    let letters = ["a", "b", "c"];
    assert_eq!(at(&letters, 2), Some(&"c"));
    assert_eq!(at(&letters, 3), None);
    assert_eq!(at(&letters, usize::MAX), None);
}

#[rstest]
fn test_mutate_each_runs_in_order() {
    let mut log = Vec::new();
    let mut numbers = vec![1, 2, 3];
    mutate_each(&mut numbers, |n| log.push(*n));
    assert_eq!(log, vec![1, 2, 3]);
}

#[rstest]
fn test_sample_accepts_duplicates() {
    let picked = sample(&["x", "y"], 3, |_| 0);
    assert_eq!(picked, vec!["x", "x", "x"]);
}

#[rstest]
fn test_sample_with_cycling_source() {
    let mut state = 0;
    let picked = sample(&[10, 20, 30], 6, |bound| {
        let index = state % bound;
        state += 1;
        index
    });
    assert_eq!(picked, vec![10, 20, 30, 10, 20, 30]);
}

// =============================================================================
// Method syntax
// =============================================================================

#[rstest]
fn test_extension_trait_surface() {
    let numbers = vec![3, 1, 1, 2, 7, 4, 7];

    assert_eq!(numbers.uniques(), vec![3, 1, 2, 7, 4]);
    assert_eq!(numbers.unique_by(|n| n % 2), vec![3, 2]);
    assert_eq!(numbers.chunked(4).len(), 2);
    assert_eq!(numbers.shifted(numbers.len()), numbers);
    assert_eq!(numbers.at(0), Some(&3));
    assert_eq!(numbers.rearranged(1, 2)[2], 1);

    let mut mutable = numbers;
    mutable.rearrange(0, 1);
    mutable.mutate_each(|n| *n += 1);
    assert_eq!(mutable[0], 2);
}
