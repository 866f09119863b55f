//! Curried functional surface over the sequence engine.
//!
//! ## Purpose
//!
//! This module exposes every lazy and terminal capability of [`Sequence`] as
//! a standalone function taking configuration first and the sequence last,
//! for pipe/compose-style usage. Each function is a thin pass-through to the
//! corresponding method; the two surfaces share one engine and are
//! behaviorally identical.
//!
//! ## Design notes
//!
//! * Parameterized operations return a closure from sequence to
//!   sequence/result, partially applying the configuration.
//! * Parameterless operations (`enumerate`, `mean`, `reverse`, …) take the
//!   sequence directly; they are already in sequence-last form.
//! * Validated operations (`window`, `chunk`, `percentile`) return `Result`
//!   when the returned closure is applied, exactly like their fluent
//!   counterparts.
//!
//! ## Key concepts
//!
//! ### Composition
//! ```
//! use lazyseq::{functional as seq, Sequence};
//!
//! let evens_squared = seq::take(3)(seq::map(|x: i64| x * x)(seq::filter(
//!     |x: &i64| x % 2 == 0,
//! )(Sequence::new(0..))));
//! assert_eq!(evens_squared.to_vec(), vec![0, 4, 16]);
//! ```
//!
//! ## Invariants
//!
//! * No function in this module contains algorithmic logic; every body is a
//!   single delegation to the fluent method.
//!
//! ## Visibility
//!
//! Public; intended to be imported qualified (`functional::map`).

use std::cmp::Ordering;
use std::hash::Hash;

use num_traits::Float;

use crate::engine::sequence::Sequence;
use crate::math::stats::Quartiles;
use crate::primitives::errors::SequenceError;

// ============================================================================
// Lazy Transformations
// ============================================================================

/// Curried [`Sequence::map`].
pub fn map<T, U, F>(f: F) -> impl FnOnce(Sequence<T>) -> Sequence<U>
where
    T: 'static,
    U: 'static,
    F: FnMut(T) -> U + 'static,
{
    move |seq| seq.map(f)
}

/// Curried [`Sequence::filter`].
pub fn filter<T, P>(predicate: P) -> impl FnOnce(Sequence<T>) -> Sequence<T>
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |seq| seq.filter(predicate)
}

/// Curried [`Sequence::flat_map`].
pub fn flat_map<T, U, S, F>(f: F) -> impl FnOnce(Sequence<T>) -> Sequence<U>
where
    T: 'static,
    U: 'static,
    S: IntoIterator<Item = U> + 'static,
    S::IntoIter: 'static,
    F: FnMut(T) -> S + 'static,
{
    move |seq| seq.flat_map(f)
}

/// Curried [`Sequence::take`].
pub fn take<T: 'static>(n: usize) -> impl FnOnce(Sequence<T>) -> Sequence<T> {
    move |seq| seq.take(n)
}

/// Curried [`Sequence::drop`].
pub fn drop<T: 'static>(n: usize) -> impl FnOnce(Sequence<T>) -> Sequence<T> {
    move |seq| seq.drop(n)
}

/// Curried [`Sequence::take_while`].
pub fn take_while<T, P>(predicate: P) -> impl FnOnce(Sequence<T>) -> Sequence<T>
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |seq| seq.take_while(predicate)
}

/// Curried [`Sequence::drop_while`].
pub fn drop_while<T, P>(predicate: P) -> impl FnOnce(Sequence<T>) -> Sequence<T>
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |seq| seq.drop_while(predicate)
}

/// Curried [`Sequence::concat`]; the appended tail is the configuration.
pub fn concat<T: 'static>(tail: Sequence<T>) -> impl FnOnce(Sequence<T>) -> Sequence<T> {
    move |seq| seq.concat(tail)
}

/// Curried [`Sequence::intersperse`].
pub fn intersperse<T>(separator: T) -> impl FnOnce(Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
{
    move |seq| seq.intersperse(separator)
}

/// Curried [`Sequence::scan`].
pub fn scan<T, A, F>(seed: A, fold: F) -> impl FnOnce(Sequence<T>) -> Sequence<A>
where
    T: 'static,
    A: Clone + 'static,
    F: FnMut(A, T) -> A + 'static,
{
    move |seq| seq.scan(seed, fold)
}

/// Sequence-last [`Sequence::enumerate`].
pub fn enumerate<T: 'static>(seq: Sequence<T>) -> Sequence<(usize, T)> {
    seq.enumerate()
}

/// Curried [`Sequence::tap`].
pub fn tap<T, F>(f: F) -> impl FnOnce(Sequence<T>) -> Sequence<T>
where
    T: 'static,
    F: FnMut(&T) + 'static,
{
    move |seq| seq.tap(f)
}

/// Sequence-last [`Sequence::distinct`].
pub fn distinct<T>(seq: Sequence<T>) -> Sequence<T>
where
    T: Eq + Hash + Clone + 'static,
{
    seq.distinct()
}

/// Curried [`Sequence::distinct_by`].
pub fn distinct_by<T, K, F>(key: F) -> impl FnOnce(Sequence<T>) -> Sequence<T>
where
    T: 'static,
    K: Eq + Hash + 'static,
    F: FnMut(&T) -> K + 'static,
{
    move |seq| seq.distinct_by(key)
}

// ============================================================================
// Windowing
// ============================================================================

/// Curried [`Sequence::window`].
pub fn window<T>(size: usize) -> impl FnOnce(Sequence<T>) -> Result<Sequence<Vec<T>>, SequenceError>
where
    T: Clone + 'static,
{
    move |seq| seq.window(size)
}

/// Curried [`Sequence::chunk`].
pub fn chunk<T>(size: usize) -> impl FnOnce(Sequence<T>) -> Result<Sequence<Vec<T>>, SequenceError>
where
    T: Clone + 'static,
{
    move |seq| seq.chunk(size)
}

/// Sequence-last [`Sequence::pairwise`].
pub fn pairwise<T: Clone + 'static>(seq: Sequence<T>) -> Sequence<(T, T)> {
    seq.pairwise()
}

// ============================================================================
// Materializing Orderings
// ============================================================================

/// Sequence-last [`Sequence::reverse`].
pub fn reverse<T: 'static>(seq: Sequence<T>) -> Sequence<T> {
    seq.reverse()
}

/// Sequence-last [`Sequence::sort`].
pub fn sort<T>(seq: Sequence<T>) -> Sequence<T>
where
    T: PartialOrd + 'static,
{
    seq.sort()
}

/// Curried [`Sequence::sort_by`].
pub fn sort_by<T, F>(cmp: F) -> impl FnOnce(Sequence<T>) -> Sequence<T>
where
    T: 'static,
    F: FnMut(&T, &T) -> Ordering + 'static,
{
    move |seq| seq.sort_by(cmp)
}

// ============================================================================
// Generic Terminals
// ============================================================================

/// Sequence-last [`Sequence::to_vec`].
pub fn to_vec<T: 'static>(seq: Sequence<T>) -> Vec<T> {
    seq.to_vec()
}

/// Sequence-last [`Sequence::count`].
pub fn count<T: 'static>(seq: Sequence<T>) -> usize {
    seq.count()
}

/// Curried [`Sequence::all`].
pub fn all<T, P>(predicate: P) -> impl FnOnce(Sequence<T>) -> bool
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |seq| seq.all(predicate)
}

/// Curried [`Sequence::any`].
pub fn any<T, P>(predicate: P) -> impl FnOnce(Sequence<T>) -> bool
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |seq| seq.any(predicate)
}

/// Curried [`Sequence::nth`].
pub fn nth<T: 'static>(n: usize) -> impl FnOnce(Sequence<T>) -> Option<T> {
    move |seq| seq.nth(n)
}

/// Sequence-last [`Sequence::last`].
pub fn last<T: 'static>(seq: Sequence<T>) -> Option<T> {
    seq.last()
}

/// Curried [`Sequence::reduce`].
pub fn reduce<T, F>(f: F) -> impl FnOnce(Sequence<T>) -> Option<T>
where
    T: 'static,
    F: FnMut(T, T) -> T + 'static,
{
    move |seq| seq.reduce(f)
}

/// Curried [`Sequence::fold`].
pub fn fold<T, A, F>(seed: A, f: F) -> impl FnOnce(Sequence<T>) -> A
where
    T: 'static,
    F: FnMut(A, T) -> A + 'static,
{
    move |seq| seq.fold(seed, f)
}

/// Curried [`Sequence::find`].
pub fn find<T, P>(predicate: P) -> impl FnOnce(Sequence<T>) -> Option<T>
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |seq| seq.find(predicate)
}

/// Curried [`Sequence::partition`].
pub fn partition<T, P>(predicate: P) -> impl FnOnce(Sequence<T>) -> (Vec<T>, Vec<T>)
where
    T: 'static,
    P: FnMut(&T) -> bool + 'static,
{
    move |seq| seq.partition(predicate)
}

/// Curried [`Sequence::group_by`].
pub fn group_by<T, K, F>(key: F) -> impl FnOnce(Sequence<T>) -> Vec<(K, Vec<T>)>
where
    T: 'static,
    K: Eq + Hash + Clone + 'static,
    F: FnMut(&T) -> K + 'static,
{
    move |seq| seq.group_by(key)
}

// ============================================================================
// Numeric Terminals
// ============================================================================

/// Sequence-last [`Sequence::sum`].
pub fn sum<T: Float + 'static>(seq: Sequence<T>) -> T {
    seq.sum()
}

/// Sequence-last [`Sequence::product`].
pub fn product<T: Float + 'static>(seq: Sequence<T>) -> T {
    seq.product()
}

/// Sequence-last [`Sequence::mean`].
pub fn mean<T: Float + 'static>(seq: Sequence<T>) -> Option<T> {
    seq.mean()
}

/// Sequence-last [`Sequence::min`].
pub fn min<T: Float + 'static>(seq: Sequence<T>) -> Option<T> {
    seq.min()
}

/// Sequence-last [`Sequence::max`].
pub fn max<T: Float + 'static>(seq: Sequence<T>) -> Option<T> {
    seq.max()
}

/// Sequence-last [`Sequence::span`].
pub fn span<T: Float + 'static>(seq: Sequence<T>) -> Option<T> {
    seq.span()
}

/// Sequence-last [`Sequence::median`].
pub fn median<T: Float + 'static>(seq: Sequence<T>) -> Option<T> {
    seq.median()
}

/// Sequence-last [`Sequence::variance`].
pub fn variance<T: Float + 'static>(seq: Sequence<T>) -> Option<T> {
    seq.variance()
}

/// Sequence-last [`Sequence::std_dev`].
pub fn std_dev<T: Float + 'static>(seq: Sequence<T>) -> Option<T> {
    seq.std_dev()
}

/// Curried [`Sequence::percentile`].
pub fn percentile<T: Float + 'static>(
    p: f64,
) -> impl FnOnce(Sequence<T>) -> Result<Option<T>, SequenceError> {
    move |seq| seq.percentile(p)
}

/// Sequence-last [`Sequence::mode`].
pub fn mode<T: Float + 'static>(seq: Sequence<T>) -> Option<Vec<T>> {
    seq.mode()
}

/// Sequence-last [`Sequence::quartiles`].
pub fn quartiles<T: Float + 'static>(seq: Sequence<T>) -> Option<Quartiles<T>> {
    seq.quartiles()
}

/// Curried [`Sequence::covariance`]; the second sequence is the
/// configuration.
pub fn covariance<T: Float + 'static>(other: Sequence<T>) -> impl FnOnce(Sequence<T>) -> Option<T> {
    move |seq| seq.covariance(other)
}

/// Curried [`Sequence::correlation`]; the second sequence is the
/// configuration.
pub fn correlation<T: Float + 'static>(
    other: Sequence<T>,
) -> impl FnOnce(Sequence<T>) -> Option<T> {
    move |seq| seq.correlation(other)
}
