//! Laziness guarantees: construction pulls nothing, and chains ending in a
//! bounding operation consume a bounded upstream prefix regardless of source
//! size.

use std::cell::Cell;
use std::rc::Rc;

use lazyseq::prelude::*;

/// An infinite counting source `0, 1, 2, …` that records every upstream pull.
fn counted_naturals() -> (Sequence<i64>, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0usize));
    let recorder = Rc::clone(&pulls);
    let mut next = 0i64;
    let seq = Sequence::new(std::iter::from_fn(move || {
        recorder.set(recorder.get() + 1);
        let value = next;
        next += 1;
        Some(value)
    }));
    (seq, pulls)
}

#[test]
fn constructing_a_chain_pulls_nothing() {
    let (source, pulls) = counted_naturals();
    let chain = source
        .map(|x| x + 1)
        .filter(|x| x % 3 == 0)
        .drop(2)
        .take(10);
    assert_eq!(pulls.get(), 0);
    drop(chain);
    assert_eq!(pulls.get(), 0);
}

#[test]
fn filter_map_take_consumes_exactly_the_needed_prefix() {
    let (source, pulls) = counted_naturals();
    let out: Vec<i64> = source
        .filter(|x| x % 2 == 0)
        .map(|x| x * x)
        .take(3)
        .to_vec();
    assert_eq!(out, vec![0, 4, 16]);
    // Evens 0, 2, 4 live at source positions 1, 3, 5: six pulls, no more.
    assert_eq!(pulls.get(), 6);
}

#[test]
fn take_never_pulls_past_the_nth_element() {
    let (source, pulls) = counted_naturals();
    let out: Vec<i64> = source.take(4).to_vec();
    assert_eq!(out, vec![0, 1, 2, 3]);
    assert_eq!(pulls.get(), 4);
}

#[test]
fn windows_over_infinite_source_consume_bounded_prefix() {
    let (source, pulls) = counted_naturals();
    let windows: Vec<Vec<i64>> = source.window(3).unwrap().take(2).to_vec();
    assert_eq!(windows, vec![vec![0, 1, 2], vec![1, 2, 3]]);
    // First window needs 3 elements, each further window one more.
    assert_eq!(pulls.get(), 4);
}

#[test]
fn chunks_over_infinite_source_consume_bounded_prefix() {
    let (source, pulls) = counted_naturals();
    let chunks: Vec<Vec<i64>> = source.chunk(2).unwrap().take(3).to_vec();
    assert_eq!(chunks, vec![vec![0, 1], vec![2, 3], vec![4, 5]]);
    assert_eq!(pulls.get(), 6);
}

#[test]
fn find_stops_at_the_first_match() {
    let (source, pulls) = counted_naturals();
    assert_eq!(source.find(|&x| x == 2), Some(2));
    assert_eq!(pulls.get(), 3);
}

#[test]
fn filter_runs_predicate_once_per_pulled_element() {
    let calls = Rc::new(Cell::new(0usize));
    let recorder = Rc::clone(&calls);
    let out: Vec<i64> = Sequence::new(0..)
        .filter(move |_| {
            recorder.set(recorder.get() + 1);
            true
        })
        .take(5)
        .to_vec();
    assert_eq!(out.len(), 5);
    assert_eq!(calls.get(), 5);
}

#[test]
fn unbounded_repeat_terminates_under_take() {
    let out = repeat(1.0_f64).take(4).sum();
    assert_eq!(out, 4.0);
}
