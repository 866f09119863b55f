//! Hand-rolled pull adaptors for the lazy engine.
//!
//! ## Purpose
//!
//! This module implements the pipeline stages that have no exact counterpart
//! in the standard iterator adaptors: the seed-first running accumulator
//! (`Scan`), separator insertion (`Intersperse`), and key-based
//! deduplication (`DistinctBy`). Each is an explicit state machine whose
//! per-element work is deferred until the stage is pulled.
//!
//! ## Design notes
//!
//! * Every adaptor exclusively owns its upstream iterator; stages are never
//!   shared or mutated after construction.
//! * `Scan` emits its seed without touching the upstream; output length is
//!   input length + 1.
//! * `Intersperse` keeps a one-element lookahead so a separator is only
//!   emitted between two real elements, never trailing.
//! * `DistinctBy` grows a membership set sized to the number of distinct
//!   keys seen so far; it is the one lazy stage with O(n) worst-case memory.
//!
//! ## Invariants
//!
//! * Constructing an adaptor performs no iteration.
//! * Each upstream element is pulled at most once.
//!
//! ## Visibility
//!
//! Internal detail of the engine; reached through the methods on `Sequence`.

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::Peekable;

// ============================================================================
// Scan
// ============================================================================

/// Running-accumulator stage: yields the seed, then the accumulator after
/// folding in each upstream element.
pub struct Scan<I, A, F> {
    upstream: I,
    accumulator: Option<A>,
    fold: F,
    seed_emitted: bool,
}

impl<I, A, F> Scan<I, A, F> {
    /// Build a scan stage with the given seed and fold function.
    pub fn new(upstream: I, seed: A, fold: F) -> Self {
        Self {
            upstream,
            accumulator: Some(seed),
            fold,
            seed_emitted: false,
        }
    }
}

impl<I, A, F> Iterator for Scan<I, A, F>
where
    I: Iterator,
    A: Clone,
    F: FnMut(A, I::Item) -> A,
{
    type Item = A;

    fn next(&mut self) -> Option<A> {
        if !self.seed_emitted {
            self.seed_emitted = true;
            return self.accumulator.clone();
        }
        let item = self.upstream.next()?;
        let previous = self.accumulator.take()?;
        let next = (self.fold)(previous, item);
        self.accumulator = Some(next.clone());
        Some(next)
    }
}

// ============================================================================
// Intersperse
// ============================================================================

/// Separator-insertion stage: yields the separator between every pair of
/// consecutive upstream elements.
pub struct Intersperse<I: Iterator> {
    upstream: Peekable<I>,
    separator: I::Item,
    emit_separator: bool,
}

impl<I: Iterator> Intersperse<I> {
    /// Build an intersperse stage with the given separator.
    pub fn new(upstream: I, separator: I::Item) -> Self {
        Self {
            upstream: upstream.peekable(),
            separator,
            emit_separator: false,
        }
    }
}

impl<I> Iterator for Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emit_separator {
            self.emit_separator = false;
            return Some(self.separator.clone());
        }
        let item = self.upstream.next()?;
        // Only schedule a separator when another element is waiting.
        self.emit_separator = self.upstream.peek().is_some();
        Some(item)
    }
}

// ============================================================================
// DistinctBy
// ============================================================================

/// Deduplication stage: yields the first occurrence per derived key, in
/// source order.
pub struct DistinctBy<I, K, F> {
    upstream: I,
    seen: HashSet<K>,
    key: F,
}

impl<I, K, F> DistinctBy<I, K, F> {
    /// Build a deduplication stage with the given key function.
    pub fn new(upstream: I, key: F) -> Self {
        Self {
            upstream,
            seen: HashSet::new(),
            key,
        }
    }
}

impl<I, K, F> Iterator for DistinctBy<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.upstream.next()?;
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
    }
}
