//! K-way ordered merge of pre-sorted sequences.
//!
//! ## Purpose
//!
//! This module implements the k-way merge combinator: given k sequences that
//! are each individually sorted under the same ordering, it produces one
//! sorted sequence in O(N log k) for N total elements, holding only one head
//! element per still-live source.
//!
//! ## Design notes
//!
//! * The min-priority structure is a hand-maintained binary heap over
//!   `(head value, source index)` entries; the comparator is stored in the
//!   iterator, so custom orderings need no `Ord` wrapper types.
//! * Ties between sources break on source index, which makes the output
//!   deterministic and keeps equal elements grouped by argument order.
//! * Same-source relative order is preserved structurally: only the current
//!   head of each source is ever in the heap.
//!
//! ## Preconditions
//!
//! Each input must already be sorted under the merge ordering. This is a
//! documented precondition, not a runtime check: validating it would force a
//! full pass over every input and defeat laziness. Unsorted input produces
//! output in unspecified order (still a multiset union of the inputs), never
//! a crash.
//!
//! ## Invariants
//!
//! * Heap size never exceeds the number of still-live sources.
//! * Every input element appears in the output exactly once.
//!
//! ## Visibility
//!
//! Reached through the `merge` and `merge_by` free functions.

use std::cmp::Ordering;

use crate::engine::sequence::Sequence;
use crate::primitives::sorting::natural_cmp;

struct HeapEntry<T> {
    value: T,
    source: usize,
}

/// Pull-based k-way merge over pre-sorted sources.
pub struct MergeBy<T, F> {
    sources: Vec<Sequence<T>>,
    heap: Vec<HeapEntry<T>>,
    cmp: F,
    primed: bool,
}

impl<T, F> MergeBy<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Build a merge over `sources` under the given comparator.
    pub fn new(sources: Vec<Sequence<T>>, cmp: F) -> Self {
        Self {
            sources,
            heap: Vec::new(),
            cmp,
            primed: false,
        }
    }

    /// Pull one head element per source into the heap. Deferred until the
    /// first downstream pull so that construction performs no iteration.
    fn prime(&mut self) {
        self.heap.reserve(self.sources.len());
        for source in 0..self.sources.len() {
            if let Some(value) = self.sources[source].next() {
                self.heap.push(HeapEntry { value, source });
            }
        }
        let len = self.heap.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    fn precedes(&mut self, a: usize, b: usize) -> bool {
        match (self.cmp)(&self.heap[a].value, &self.heap[b].value) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.heap[a].source < self.heap[b].source,
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < self.heap.len() && self.precedes(left, smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.precedes(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                return;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, F> Iterator for MergeBy<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if !self.primed {
            self.primed = true;
            self.prime();
        }
        if self.heap.is_empty() {
            return None;
        }

        // Refill the root from the source the smallest head came from, or
        // shrink the heap when that source is exhausted.
        let source = self.heap[0].source;
        let emitted = match self.sources[source].next() {
            Some(value) => {
                let replacement = HeapEntry { value, source };
                std::mem::replace(&mut self.heap[0], replacement)
            }
            None => {
                let last = self.heap.pop()?;
                if self.heap.is_empty() {
                    return Some(last.value);
                }
                std::mem::replace(&mut self.heap[0], last)
            }
        };
        self.sift_down(0);
        Some(emitted.value)
    }
}

/// Merge pre-sorted sequences under the natural ascending order.
///
/// ```
/// use lazyseq::{merge, Sequence};
///
/// let merged = merge(vec![
///     Sequence::new(vec![1.0, 3.0, 5.0]),
///     Sequence::new(vec![2.0, 4.0, 6.0]),
/// ]);
/// assert_eq!(merged.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// ```
pub fn merge<T>(sources: Vec<Sequence<T>>) -> Sequence<T>
where
    T: PartialOrd + 'static,
{
    merge_by(sources, natural_cmp)
}

/// Merge pre-sorted sequences under an explicit comparator.
pub fn merge_by<T, F>(sources: Vec<Sequence<T>>, cmp: F) -> Sequence<T>
where
    T: 'static,
    F: FnMut(&T, &T) -> Ordering + 'static,
{
    Sequence::new(MergeBy::new(sources, cmp))
}
