//! Lazy sequence wrapper and pipeline engine.
//!
//! ## Purpose
//!
//! This module provides [`Sequence`], the chainable handle at the center of
//! the crate. A `Sequence` wraps any producer of values and exposes the lazy
//! transformation methods, the materializing orderings, and the terminal
//! reducers. Every lazy method returns a new `Sequence` that pulls from its
//! predecessor on demand; no work happens until a terminal operation (or an
//! explicit `for` loop) drives the chain.
//!
//! ## Design notes
//!
//! * **Pull composition**: the wrapper owns a boxed iterator; each lazy
//!   method consumes `self` and boxes a new stage over it. Ownership moves
//!   through the chain, so deriving two handles from one live source is
//!   rejected by the compiler rather than documented away.
//! * **Standard adaptors where semantics match**: `map`, `filter`, `take`,
//!   and friends delegate to the standard iterator adaptors, which already
//!   implement the required short-circuiting pull behavior. Stages with no
//!   standard counterpart (`scan` with seed-first output, `intersperse`,
//!   `distinct_by`, windowing) are hand-rolled state machines.
//! * **Numeric discipline**: statistical terminals live in a separate
//!   `impl<T: Float>` block, so calling `mean` on a sequence of strings is a
//!   compile error, not a runtime surprise.
//! * **Materializing boundary**: `reverse`, `sort`, and `sort_by` buffer the
//!   entire upstream before producing output and are documented as such;
//!   they are the only lazy-positioned methods without O(1) memory.
//!
//! ## Key concepts
//!
//! ### Single consumption
//! A `Sequence` is consumed exactly once per terminal operation. Re-wrapping
//! a spent single-pass source yields nothing; sources that support fresh
//! iteration (e.g. re-wrapping a `Vec`) behave as the source does.
//!
//! ### Failure semantics
//! Size and percentile parameters are validated synchronously at call time,
//! before any lazy work is scheduled. Panics raised inside caller-supplied
//! closures propagate unmodified at the pull that invoked them.
//!
//! ## Invariants
//!
//! * Constructing a stage performs no iteration.
//! * `take(n)` never pulls the upstream past the nth element.
//! * `filter` calls its predicate at most once per element, only when that
//!   element is pulled.
//!
//! ## Visibility
//!
//! `Sequence` is the primary public type of the crate.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use num_traits::Float;

use crate::engine::adaptors::{DistinctBy, Intersperse, Scan};
use crate::engine::validator::Validator;
use crate::math::stats::{self, Quartiles};
use crate::primitives::errors::SequenceError;
use crate::primitives::sorting::natural_cmp;
use crate::primitives::window::{Chunks, Pairwise, Windows};

/// A lazy, chainable sequence of values.
///
/// Wraps any iterator and defers all transformation work until a terminal
/// operation drains the chain. See the concrete scenario:
///
/// ```
/// use lazyseq::Sequence;
///
/// let squares_of_evens: Vec<i64> = Sequence::new(0..)
///     .filter(|x| x % 2 == 0)
///     .map(|x| x * x)
///     .take(3)
///     .to_vec();
/// assert_eq!(squares_of_evens, vec![0, 4, 16]);
/// ```
pub struct Sequence<T> {
    stage: Box<dyn Iterator<Item = T>>,
}

impl<T> Iterator for Sequence<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.stage.next()
    }
}

// ============================================================================
// Construction
// ============================================================================

impl<T: 'static> Sequence<T> {
    /// Wrap any producer of values in a lazy sequence.
    ///
    /// Construction performs no iteration; the source is only advanced when
    /// the sequence is pulled.
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self {
            stage: Box::new(source.into_iter()),
        }
    }

    /// An empty sequence.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    fn stage<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Self {
            stage: Box::new(iter),
        }
    }
}

// ============================================================================
// Lazy Transformations
// ============================================================================

impl<T: 'static> Sequence<T> {
    /// Yield `f(x)` for each upstream `x`, in order, 1:1.
    pub fn map<U, F>(self, f: F) -> Sequence<U>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        Sequence::stage(self.stage.map(f))
    }

    /// Yield only the elements for which the predicate holds.
    ///
    /// The predicate runs at most once per element, and only when that
    /// element is pulled; nothing is pre-scanned.
    pub fn filter<P>(self, predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Sequence::stage(self.stage.filter(predicate))
    }

    /// For each upstream `x`, yield every element of `f(x)` in order before
    /// advancing to the next `x` (one level deep, not recursive).
    pub fn flat_map<U, S, F>(self, f: F) -> Sequence<U>
    where
        U: 'static,
        S: IntoIterator<Item = U> + 'static,
        S::IntoIter: 'static,
        F: FnMut(T) -> S + 'static,
    {
        Sequence::stage(self.stage.flat_map(f))
    }

    /// Yield at most `n` elements, then stop pulling upstream entirely.
    pub fn take(self, n: usize) -> Sequence<T> {
        Sequence::stage(self.stage.take(n))
    }

    /// Discard the first `n` upstream elements (fewer if the upstream is
    /// shorter), yield the rest unchanged.
    pub fn drop(self, n: usize) -> Sequence<T> {
        Sequence::stage(self.stage.skip(n))
    }

    /// Yield elements while the predicate holds, stopping permanently at the
    /// first failure even if a later element would pass.
    pub fn take_while<P>(self, predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Sequence::stage(self.stage.take_while(predicate))
    }

    /// Discard the leading elements for which the predicate holds, stopping
    /// the discard permanently at the first failure.
    pub fn drop_while<P>(self, predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Sequence::stage(self.stage.skip_while(predicate))
    }

    /// Lazily exhaust this sequence, then `other`.
    pub fn concat(self, other: Sequence<T>) -> Sequence<T> {
        Sequence::stage(self.stage.chain(other.stage))
    }

    /// Yield the separator between every pair of consecutive elements.
    pub fn intersperse(self, separator: T) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence::stage(Intersperse::new(self.stage, separator))
    }

    /// Yield the running accumulator, starting with `seed`.
    ///
    /// The seed is emitted before any upstream pull, so the output is one
    /// element longer than the input.
    pub fn scan<A, F>(self, seed: A, fold: F) -> Sequence<A>
    where
        A: Clone + 'static,
        F: FnMut(A, T) -> A + 'static,
    {
        Sequence::stage(Scan::new(self.stage, seed, fold))
    }

    /// Yield `(index, value)` pairs, index starting at 0.
    pub fn enumerate(self) -> Sequence<(usize, T)> {
        Sequence::stage(self.stage.enumerate())
    }

    /// Invoke `f` on each element for its side effect, yielding the element
    /// unchanged in order.
    pub fn tap<F>(self, f: F) -> Sequence<T>
    where
        F: FnMut(&T) + 'static,
    {
        Sequence::stage(self.stage.inspect(f))
    }

    /// Yield the first occurrence of each value, in source order.
    ///
    /// Unlike most lazy stages this one grows a membership set: worst-case
    /// memory is O(n) in the number of distinct values.
    pub fn distinct(self) -> Sequence<T>
    where
        T: Eq + Hash + Clone,
    {
        Sequence::stage(DistinctBy::new(self.stage, |item: &T| item.clone()))
    }

    /// Yield the first occurrence per derived key, in source order.
    pub fn distinct_by<K, F>(self, key: F) -> Sequence<T>
    where
        K: Eq + Hash + 'static,
        F: FnMut(&T) -> K + 'static,
    {
        Sequence::stage(DistinctBy::new(self.stage, key))
    }
}

// ============================================================================
// Windowing
// ============================================================================

impl<T: Clone + 'static> Sequence<T> {
    /// Sliding windows of `size` consecutive elements.
    ///
    /// Each emitted window is an independent snapshot, oldest first; a finite
    /// upstream of length `n ≥ size` yields exactly `n − size + 1` windows.
    /// At most `size` upstream elements are live at any time.
    ///
    /// # Errors
    ///
    /// `size < 1` fails with a validation error before any iteration.
    pub fn window(self, size: usize) -> Result<Sequence<Vec<T>>, SequenceError> {
        Validator::validate_size("window", "size", size, 1)?;
        Ok(Sequence::stage(Windows::new(self.stage, size)))
    }

    /// Consecutive non-overlapping groups of `size` elements.
    ///
    /// The final chunk may be short; an empty upstream yields no chunks.
    ///
    /// # Errors
    ///
    /// `size < 1` fails with a validation error before any iteration.
    pub fn chunk(self, size: usize) -> Result<Sequence<Vec<T>>, SequenceError> {
        Validator::validate_size("chunk", "size", size, 1)?;
        Ok(Sequence::stage(Chunks::new(self.stage, size)))
    }

    /// Consecutive element pairs; equivalent to `window(2)` specialized to
    /// tuples.
    pub fn pairwise(self) -> Sequence<(T, T)> {
        Sequence::stage(Pairwise::new(self.stage))
    }
}

// ============================================================================
// Materializing Orderings
// ============================================================================

impl<T: 'static> Sequence<T> {
    /// Reverse the sequence.
    ///
    /// Buffers the entire upstream before producing any output; memory use is
    /// O(n), unlike the lazy stages.
    pub fn reverse(self) -> Sequence<T> {
        let mut buffered: Vec<T> = self.stage.collect();
        buffered.reverse();
        Sequence::new(buffered)
    }

    /// Sort ascending under the natural order.
    ///
    /// Defined for element types with a natural ordering (numbers, strings);
    /// non-comparable values (NaN) sort as equal. Buffers the entire upstream
    /// before producing any output.
    pub fn sort(self) -> Sequence<T>
    where
        T: PartialOrd,
    {
        self.sort_by(natural_cmp)
    }

    /// Sort by an explicit three-way comparator.
    ///
    /// Buffers the entire upstream before producing any output. The sort is
    /// stable.
    pub fn sort_by<F>(self, mut cmp: F) -> Sequence<T>
    where
        F: FnMut(&T, &T) -> Ordering + 'static,
    {
        let mut buffered: Vec<T> = self.stage.collect();
        buffered.sort_by(&mut cmp);
        Sequence::new(buffered)
    }
}

// ============================================================================
// Generic Terminals
// ============================================================================

impl<T: 'static> Sequence<T> {
    /// Drain the sequence into a vector.
    pub fn to_vec(self) -> Vec<T> {
        self.stage.collect()
    }

    /// Drain the sequence and count its elements.
    pub fn count(self) -> usize {
        self.stage.count()
    }

    /// Fold the elements with the first element as the seed; `None` for an
    /// empty sequence.
    pub fn reduce<F>(self, f: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.stage.reduce(f)
    }

    /// Fold the elements from an explicit seed.
    pub fn fold<A, F>(self, seed: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.stage.fold(seed, f)
    }

    /// First element satisfying the predicate, pulling no further.
    pub fn find<P>(mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.stage.find(|item| predicate(item))
    }

    /// Whether every element satisfies the predicate; short-circuits on the
    /// first failure.
    pub fn all<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.stage.all(|item| predicate(&item))
    }

    /// Whether any element satisfies the predicate; short-circuits on the
    /// first success.
    pub fn any<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.stage.any(|item| predicate(&item))
    }

    /// The element at position `n` (0-based), or `None` if the sequence is
    /// shorter.
    pub fn nth(mut self, n: usize) -> Option<T> {
        self.stage.nth(n)
    }

    /// The final element, draining the sequence.
    pub fn last(self) -> Option<T> {
        self.stage.last()
    }

    /// Split into matching and non-matching lists in a single pass,
    /// preserving relative order within each.
    pub fn partition<P>(self, mut predicate: P) -> (Vec<T>, Vec<T>)
    where
        P: FnMut(&T) -> bool,
    {
        let mut matching = Vec::new();
        let mut rest = Vec::new();
        for item in self.stage {
            if predicate(&item) {
                matching.push(item);
            } else {
                rest.push(item);
            }
        }
        (matching, rest)
    }

    /// Group elements by a derived key in a single pass.
    ///
    /// Keys appear in first-occurrence order; elements within a group appear
    /// in source order.
    pub fn group_by<K, F>(self, mut key: F) -> Vec<(K, Vec<T>)>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        let mut groups: Vec<(K, Vec<T>)> = Vec::new();
        let mut index: HashMap<K, usize> = HashMap::new();
        for item in self.stage {
            let k = key(&item);
            match index.get(&k) {
                Some(&slot) => groups[slot].1.push(item),
                None => {
                    index.insert(k.clone(), groups.len());
                    groups.push((k, vec![item]));
                }
            }
        }
        groups
    }
}

// ============================================================================
// Numeric Terminals
// ============================================================================

/// Statistical reducers, defined only over numeric element types.
///
/// The `Float` bound is the compile-time face of the numeric-only contract:
/// a sequence of non-numeric elements simply does not have these methods.
/// Each reducer fully drains the sequence and returns a concrete value,
/// never a new lazy stage.
impl<T: Float + 'static> Sequence<T> {
    /// Sum of all elements; the empty sum is zero.
    pub fn sum(self) -> T {
        stats::sum(&self.to_vec())
    }

    /// Product of all elements; the empty product is one.
    pub fn product(self) -> T {
        stats::product(&self.to_vec())
    }

    /// Arithmetic mean, or `None` for an empty sequence.
    pub fn mean(self) -> Option<T> {
        stats::mean(&self.to_vec())
    }

    /// Smallest element by linear scan, or `None` for an empty sequence.
    pub fn min(self) -> Option<T> {
        stats::min(&self.to_vec())
    }

    /// Largest element by linear scan, or `None` for an empty sequence.
    pub fn max(self) -> Option<T> {
        stats::max(&self.to_vec())
    }

    /// Range of the data (`max − min`), or `None` for an empty sequence.
    pub fn span(self) -> Option<T> {
        stats::span(&self.to_vec())
    }

    /// Median of the sorted data, or `None` for an empty sequence.
    pub fn median(self) -> Option<T> {
        stats::median(&self.to_vec())
    }

    /// Population variance (divide by n), or `None` for an empty sequence.
    pub fn variance(self) -> Option<T> {
        stats::variance(&self.to_vec())
    }

    /// Population standard deviation, or `None` for an empty sequence.
    pub fn std_dev(self) -> Option<T> {
        stats::std_dev(&self.to_vec())
    }

    /// Percentile `p` via linear interpolation between the two nearest ranks.
    ///
    /// Returns `Ok(None)` for an empty sequence.
    ///
    /// # Errors
    ///
    /// `p` outside `[0, 100]` fails with a validation error before the
    /// sequence is drained.
    pub fn percentile(self, p: f64) -> Result<Option<T>, SequenceError> {
        Validator::validate_percentile(p)?;
        Ok(stats::percentile(&self.to_vec(), p))
    }

    /// Most frequent value(s), ascending; multimodal input yields all of
    /// them. `None` for an empty sequence.
    pub fn mode(self) -> Option<Vec<T>> {
        stats::mode(&self.to_vec())
    }

    /// Quartile cut points via the same interpolation as `percentile` at
    /// 25/50/75, or `None` for an empty sequence.
    pub fn quartiles(self) -> Option<Quartiles<T>> {
        stats::quartiles(&self.to_vec())
    }

    /// Population covariance over zipped pairs with `other`.
    ///
    /// `None` if either sequence is empty or the lengths differ.
    pub fn covariance(self, other: Sequence<T>) -> Option<T> {
        stats::covariance(&self.to_vec(), &other.to_vec())
    }

    /// Pearson correlation with `other`.
    ///
    /// `None` if either sequence is empty, the lengths differ, or either
    /// standard deviation is zero.
    pub fn correlation(self, other: Sequence<T>) -> Option<T> {
        stats::correlation(&self.to_vec(), &other.to_vec())
    }
}
