//! Ordering utilities for materializing operations.
//!
//! ## Purpose
//!
//! This module provides the natural three-way comparator used by `sort`,
//! `median`, `percentile`, and the other order-dependent reducers, plus the
//! sorted-copy helper that marks the explicit materializing boundary between
//! lazy stages and whole-dataset operations.
//!
//! ## Design notes
//!
//! * **Stability**: sorting is stable, preserving the relative order of
//!   equal elements.
//! * **Robustness**: non-comparable values (NaN) compare as equal rather
//!   than panicking, so a pathological input degrades ordering instead of
//!   crashing.
//! * **Materializing boundary**: `sorted_copy` drains its input completely;
//!   it is never part of a lazy chain.
//!
//! ## Invariants
//!
//! * `natural_cmp` is a total function over any `PartialOrd` type.
//! * `sorted_copy` output is a permutation of its input.
//!
//! ## Visibility
//!
//! Internal detail shared by the engine and the statistics module.

use std::cmp::Ordering;

/// Natural three-way comparison, treating non-comparable values as equal.
#[inline]
pub fn natural_cmp<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Drain `values` into a new vector sorted ascending under `natural_cmp`.
///
/// This is the materializing boundary: the entire input is buffered before
/// any order-dependent result can be produced.
pub fn sorted_copy<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_by(natural_cmp);
    sorted
}
