//! Statistical reducers over drained numeric sequences.
//!
//! ## Purpose
//!
//! This module implements the whole-dataset statistics behind the numeric
//! terminal operations: central tendency, dispersion, order statistics, and
//! the two-sequence measures (covariance, correlation). Everything here
//! operates on a fully drained slice; statistics are inherently terminal,
//! never lazy.
//!
//! ## Design notes
//!
//! * All functions are generic over `Float` to support f32 and f64.
//! * Empty input returns `None` rather than an error, except `sum` and
//!   `product` which return their identity elements (0 and 1).
//! * Variance is the **population** variance (divide by n, not n − 1);
//!   `std_dev` is its square root.
//! * Order statistics (`median`, `percentile`, `quartiles`) sort a copy of
//!   the data and interpolate linearly between the two nearest ranks at the
//!   fractional index `(p / 100) · (n − 1)`.
//! * `mode` may return multiple values when the input is multimodal; values
//!   are grouped by sorting and counting runs of equal elements, which avoids
//!   hashing floating-point keys.
//!
//! ## Invariants
//!
//! * `variance(x) == std_dev(x)²` within floating tolerance.
//! * `percentile(x, 50) == median(x)` within floating tolerance.
//! * `correlation(x, x) == 1` for any non-constant input.
//! * Covariance and correlation require equal-length, non-empty inputs;
//!   correlation additionally requires both standard deviations to be
//!   non-zero.
//!
//! ## Non-goals
//!
//! * This module does not validate percentile ranks; callers go through the
//!   engine's `Validator` first.
//! * This module does not stream; single-pass moving statistics are built by
//!   composing `window` with these reducers at the sequence level.
//!
//! ## Visibility
//!
//! Internal detail reached through the numeric terminals on `Sequence`;
//! `Quartiles` is re-exported as part of the public API.

use num_traits::Float;

use crate::primitives::sorting::sorted_copy;

// ============================================================================
// Result Records
// ============================================================================

/// Quartile cut points of a numeric dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles<T> {
    /// First quartile (25th percentile).
    pub q1: T,
    /// Second quartile (median).
    pub q2: T,
    /// Third quartile (75th percentile).
    pub q3: T,
}

// ============================================================================
// Sums and Extremes
// ============================================================================

/// Sum of all values; the empty sum is zero.
pub fn sum<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &x| acc + x)
}

/// Product of all values; the empty product is one.
pub fn product<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::one(), |acc, &x| acc * x)
}

/// Smallest value by linear scan, or `None` for empty input.
pub fn min<T: Float>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .reduce(|a, b| if b < a { b } else { a })
}

/// Largest value by linear scan, or `None` for empty input.
pub fn max<T: Float>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .reduce(|a, b| if b > a { b } else { a })
}

/// Range of the data: `max − min`, or `None` for empty input.
pub fn span<T: Float>(values: &[T]) -> Option<T> {
    Some(max(values)? - min(values)?)
}

// ============================================================================
// Central Tendency and Dispersion
// ============================================================================

/// Arithmetic mean, or `None` for empty input.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len()).unwrap();
    Some(sum(values) / n)
}

/// Population variance (divide by n), or `None` for empty input.
pub fn variance<T: Float>(values: &[T]) -> Option<T> {
    let m = mean(values)?;
    let n = T::from(values.len()).unwrap();
    let squared_deviations = values.iter().fold(T::zero(), |acc, &x| {
        let d = x - m;
        acc + d * d
    });
    Some(squared_deviations / n)
}

/// Population standard deviation, or `None` for empty input.
pub fn std_dev<T: Float>(values: &[T]) -> Option<T> {
    variance(values).map(|v| v.sqrt())
}

// ============================================================================
// Order Statistics
// ============================================================================

/// Median: the middle element of the sorted data, or the average of the two
/// middle elements for even-length input. `None` for empty input.
pub fn median<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted_copy(values);
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / T::from(2.0).unwrap())
    }
}

/// Percentile via linear interpolation between the two nearest ranks.
///
/// The rank of percentile `p` is the fractional index `(p / 100) · (n − 1)`
/// into the sorted data; the result interpolates linearly between the
/// elements at the floor and ceiling of that index.
///
/// `p` is assumed already validated to lie within `[0, 100]`.
pub fn percentile<T: Float>(values: &[T], p: f64) -> Option<T> {
    debug_assert!((0.0..=100.0).contains(&p), "percentile rank out of range");
    if values.is_empty() {
        return None;
    }
    let sorted = sorted_copy(values);
    Some(interpolated_rank(&sorted, p))
}

/// Quartiles computed via the same rank interpolation at 25/50/75.
pub fn quartiles<T: Float>(values: &[T]) -> Option<Quartiles<T>> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted_copy(values);
    Some(Quartiles {
        q1: interpolated_rank(&sorted, 25.0),
        q2: interpolated_rank(&sorted, 50.0),
        q3: interpolated_rank(&sorted, 75.0),
    })
}

/// Interpolate the value at percentile `p` of already-sorted data.
fn interpolated_rank<T: Float>(sorted: &[T], p: f64) -> T {
    let n = sorted.len();
    let index = (p / 100.0) * (n - 1) as f64;
    let lo = index.floor() as usize;
    let hi = index.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let alpha = T::from(index - lo as f64).unwrap();
    sorted[lo] + alpha * (sorted[hi] - sorted[lo])
}

/// Value(s) with the highest frequency; multimodal input yields all of them
/// in ascending order. `None` for empty input.
pub fn mode<T: Float>(values: &[T]) -> Option<Vec<T>> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted_copy(values);

    // Count runs of equal values in the sorted data.
    let mut best_count = 0usize;
    let mut modes: Vec<T> = Vec::new();
    let mut run_value = sorted[0];
    let mut run_count = 0usize;

    for &value in &sorted {
        if value == run_value {
            run_count += 1;
        } else {
            if run_count > best_count {
                best_count = run_count;
                modes.clear();
                modes.push(run_value);
            } else if run_count == best_count {
                modes.push(run_value);
            }
            run_value = value;
            run_count = 1;
        }
    }
    if run_count > best_count {
        modes.clear();
        modes.push(run_value);
    } else if run_count == best_count {
        modes.push(run_value);
    }

    Some(modes)
}

// ============================================================================
// Two-Sequence Measures
// ============================================================================

/// Population covariance `Σ(x − x̄)(y − ȳ) / n` over zipped pairs.
///
/// Returns `None` if either input is empty or the lengths differ.
pub fn covariance<T: Float>(x: &[T], y: &[T]) -> Option<T> {
    if x.is_empty() || x.len() != y.len() {
        return None;
    }
    let mx = mean(x)?;
    let my = mean(y)?;
    let n = T::from(x.len()).unwrap();
    let cross = x
        .iter()
        .zip(y.iter())
        .fold(T::zero(), |acc, (&xi, &yi)| acc + (xi - mx) * (yi - my));
    Some(cross / n)
}

/// Pearson correlation `cov(x, y) / (σx · σy)`.
///
/// Returns `None` if either input is empty, the lengths differ, or either
/// standard deviation is zero.
pub fn correlation<T: Float>(x: &[T], y: &[T]) -> Option<T> {
    let cov = covariance(x, y)?;
    let sx = std_dev(x)?;
    let sy = std_dev(y)?;
    if sx.is_zero() || sy.is_zero() {
        return None;
    }
    Some(cov / (sx * sy))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn empty_input_behavior() {
        let empty: [f64; 0] = [];
        assert_eq!(sum(&empty), 0.0);
        assert_eq!(product(&empty), 1.0);
        assert_eq!(mean(&empty), None);
        assert_eq!(median(&empty), None);
        assert_eq!(mode(&empty), None);
        assert_eq!(quartiles(&empty), None);
    }

    #[test]
    fn variance_is_population_variance() {
        // Deviations from mean 3: 4, 1, 0, 1, 4 → 10 / 5 = 2.
        let v = variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((v - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn percentile_interpolates_between_ranks() {
        assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0, 5.0], 75.0), Some(4.0));
        let p = percentile(&[1.0, 2.0, 3.0, 4.0], 50.0).unwrap();
        assert!((p - 2.5).abs() < TOLERANCE);
    }

    #[test]
    fn mode_handles_multimodal_input() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0, 3.0]), Some(vec![2.0, 3.0]));
        assert_eq!(mode(&[4.0, 4.0, 1.0]), Some(vec![4.0]));
    }

    #[test]
    fn correlation_of_scaled_input_is_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        let r = correlation(&x, &y).unwrap();
        assert!((r - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn correlation_undefined_for_constant_input() {
        let x = [1.0, 2.0, 3.0];
        let constant = [5.0, 5.0, 5.0];
        assert_eq!(correlation(&x, &constant), None);
    }
}
