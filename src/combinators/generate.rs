//! Source generators: arithmetic ranges and repetition.
//!
//! ## Purpose
//!
//! This module provides the free functions that produce sequences without a
//! prior source: `range` for arithmetic progressions and `repeat` /
//! `repeat_n` for constant values.
//!
//! ## Design notes
//!
//! * `range` supports descending progressions with a negative step; a zero
//!   step is rejected at call time because it would never terminate.
//! * `repeat` is unbounded by design; callers pair it with a bounding
//!   operation such as `take` to avoid non-termination.
//!
//! ## Invariants
//!
//! * `range(start, stop, step)` never yields `stop` itself (half-open).
//! * `repeat_n(value, times)` yields the value exactly `times` times.
//!
//! ## Visibility
//!
//! All generators are re-exported at the crate root.

use num_traits::Num;

use crate::engine::sequence::Sequence;
use crate::engine::validator::Validator;
use crate::primitives::errors::SequenceError;

/// Arithmetic progression from `start` toward `stop` (exclusive) in steps of
/// `step`; descending when `step` is negative.
///
/// ```
/// use lazyseq::range;
///
/// assert_eq!(range(0, 10, 3).unwrap().to_vec(), vec![0, 3, 6, 9]);
/// assert_eq!(range(5, 0, -2).unwrap().to_vec(), vec![5, 3, 1]);
/// ```
///
/// # Errors
///
/// A `step` of zero fails with a validation error before any iteration.
pub fn range<T>(start: T, stop: T, step: T) -> Result<Sequence<T>, SequenceError>
where
    T: Num + PartialOrd + Copy + 'static,
{
    Validator::validate_step("range", &step)?;
    let ascending = step > T::zero();
    let mut current = start;
    Ok(Sequence::new(std::iter::from_fn(move || {
        let live = if ascending {
            current < stop
        } else {
            current > stop
        };
        if !live {
            return None;
        }
        let value = current;
        current = current + step;
        Some(value)
    })))
}

/// Repeat `value` indefinitely.
///
/// Pair with a bounding operation (`take`) before any terminal, or the
/// terminal will not terminate.
pub fn repeat<T: Clone + 'static>(value: T) -> Sequence<T> {
    Sequence::new(std::iter::repeat(value))
}

/// Repeat `value` exactly `times` times.
pub fn repeat_n<T: Clone + 'static>(value: T, times: usize) -> Sequence<T> {
    Sequence::new(std::iter::repeat(value).take(times))
}
