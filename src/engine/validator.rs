//! Parameter validation for sequence operations.
//!
//! ## Purpose
//!
//! This module provides the fail-fast guard methods consulted by every
//! operation that takes a numeric or size parameter, before any lazy stage
//! is constructed. Validation failures identify the operation, the parameter,
//! and the rejected value.
//!
//! ## Design notes
//!
//! * All validation happens upfront: a pipeline stage is only built from
//!   arguments that have already passed their guards.
//! * Validation is fail-fast and side-effect free.
//! * Checks are ordered from cheap to expensive.
//!
//! ## Validated parameters
//!
//! * **Window/chunk size**: at least 1.
//! * **Percentile rank**: finite and within `[0, 100]`.
//! * **Range step**: non-zero.
//!
//! ## Non-goals
//!
//! * This module does not inspect sequence elements; element-level contracts
//!   (e.g. pre-sorted inputs to `merge`) are documented preconditions, not
//!   runtime checks.
//!
//! ## Visibility
//!
//! Internal to the engine; not part of the public API.

use num_traits::Num;

use crate::primitives::errors::SequenceError;

/// Validation utility for sequence parameters.
///
/// Provides static methods returning `Result<(), SequenceError>` that fail
/// fast on the first violation.
pub struct Validator;

impl Validator {
    /// Validate a size/count parameter against a minimum.
    pub fn validate_size(
        operation: &'static str,
        parameter: &'static str,
        got: usize,
        min: usize,
    ) -> Result<(), SequenceError> {
        if got < min {
            return Err(SequenceError::InvalidSize {
                operation,
                parameter,
                got,
                min,
            });
        }
        Ok(())
    }

    /// Validate a percentile rank: finite and in `[0, 100]`.
    pub fn validate_percentile(p: f64) -> Result<(), SequenceError> {
        if !p.is_finite() {
            return Err(SequenceError::NonFiniteParameter {
                operation: "percentile",
                parameter: "p",
                got: p,
            });
        }
        if !(0.0..=100.0).contains(&p) {
            return Err(SequenceError::InvalidPercentile { got: p });
        }
        Ok(())
    }

    /// Validate an arithmetic range step: must be non-zero.
    pub fn validate_step<T: Num>(operation: &'static str, step: &T) -> Result<(), SequenceError> {
        if step.is_zero() {
            return Err(SequenceError::ZeroStep { operation });
        }
        Ok(())
    }
}
