//! Multi-source combinators.
//!
//! ## Purpose
//!
//! This module provides the free functions that combine several sequences
//! into one lazy sequence: pairing (`zip`, `zip_with`), concatenation
//! (`chain`), round-robin interleaving (`interleave`), and the k-way ordered
//! merge (`merge`, `merge_by`). The arithmetic and repetition generators
//! live in the [`generate`] submodule.
//!
//! ## Design notes
//!
//! * `zip` delegates to the standard pairing adaptor, which pulls the first
//!   input before the second and therefore never over-reads the longer input
//!   by more than one element.
//! * `chain` exhausts each source fully, in argument order, before starting
//!   the next.
//! * `interleave` drops a source from the rotation the moment it is
//!   exhausted and continues until every source is spent.
//!
//! ## Invariants
//!
//! * No combinator pulls any source element at construction time.
//! * Combining consumes the source handles; a combined source cannot also be
//!   driven independently.
//!
//! ## Visibility
//!
//! All combinators are re-exported at the crate root.

pub mod generate;
pub mod merge;

use crate::engine::sequence::Sequence;

// ============================================================================
// Pairing
// ============================================================================

/// Pair elements of two sequences, stopping at the shorter one.
///
/// ```
/// use lazyseq::{zip, Sequence};
///
/// let pairs = zip(Sequence::new(vec![1, 2, 3]), Sequence::new(vec!["a", "b"]));
/// assert_eq!(pairs.to_vec(), vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip<A, B>(a: Sequence<A>, b: Sequence<B>) -> Sequence<(A, B)>
where
    A: 'static,
    B: 'static,
{
    Sequence::new(a.zip(b))
}

/// Pair elements of two sequences and combine each pair with `f`.
pub fn zip_with<A, B, C, F>(a: Sequence<A>, b: Sequence<B>, mut f: F) -> Sequence<C>
where
    A: 'static,
    B: 'static,
    C: 'static,
    F: FnMut(A, B) -> C + 'static,
{
    zip(a, b).map(move |(x, y)| f(x, y))
}

// ============================================================================
// Concatenation and Interleaving
// ============================================================================

/// Lazily exhaust each source fully, in argument order.
pub fn chain<T: 'static>(sources: Vec<Sequence<T>>) -> Sequence<T> {
    Sequence::new(sources.into_iter().flatten())
}

/// Round-robin one element from each live source per round.
///
/// A source that becomes exhausted is dropped from the rotation; the
/// remaining sources keep rotating until all are spent.
///
/// ```
/// use lazyseq::{interleave, Sequence};
///
/// let braided = interleave(vec![
///     Sequence::new(vec![1, 4]),
///     Sequence::new(vec![2, 5, 6, 7]),
///     Sequence::new(vec![3]),
/// ]);
/// assert_eq!(braided.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn interleave<T: 'static>(sources: Vec<Sequence<T>>) -> Sequence<T> {
    Sequence::new(Interleave {
        sources,
        cursor: 0,
    })
}

/// Pull-based round-robin rotation over multiple sources.
struct Interleave<T> {
    sources: Vec<Sequence<T>>,
    cursor: usize,
}

impl<T> Iterator for Interleave<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if self.sources.is_empty() {
                return None;
            }
            if self.cursor >= self.sources.len() {
                self.cursor = 0;
            }
            match self.sources[self.cursor].next() {
                Some(value) => {
                    self.cursor += 1;
                    return Some(value);
                }
                // Exhausted: remove from rotation without advancing the
                // cursor, so the following source takes this slot's turn.
                None => {
                    self.sources.remove(self.cursor);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_respects_argument_order() {
        let joined = chain(vec![
            Sequence::new(vec![1, 2]),
            Sequence::new(Vec::new()),
            Sequence::new(vec![3]),
        ]);
        assert_eq!(joined.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn zip_with_combines_pairs() {
        let sums = zip_with(
            Sequence::new(vec![1, 2, 3]),
            Sequence::new(vec![10, 20, 30]),
            |a, b| a + b,
        );
        assert_eq!(sums.to_vec(), vec![11, 22, 33]);
    }

    #[test]
    fn interleave_drops_exhausted_sources() {
        let braided = interleave(vec![
            Sequence::new(vec![1]),
            Sequence::new(vec![2, 3, 4]),
        ]);
        assert_eq!(braided.to_vec(), vec![1, 2, 3, 4]);
    }
}
