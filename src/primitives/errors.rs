//! Error taxonomy for sequence operations.
//!
//! ## Purpose
//!
//! This module defines the crate-wide error type returned by every operation
//! that validates its arguments. Variants carry the operation name, the
//! offending parameter, and the rejected value so that callers receive
//! actionable messages without string parsing.
//!
//! ## Design notes
//!
//! * Validation errors are raised synchronously at the call that constructs
//!   the offending stage or invokes the terminal, never during iteration.
//! * Errors raised inside caller-supplied closures are not wrapped; they
//!   propagate (as panics) to the caller of the pull that triggered them.
//! * There is no retry or fault-tolerance layer: every variant is a
//!   programmer error.
//!
//! ## Invariants
//!
//! * Each variant names the operation it came from.
//! * Messages include the concrete rejected value.
//!
//! ## Visibility
//!
//! `SequenceError` is part of the public API and re-exported at the crate
//! root.

use thiserror::Error;

/// Errors produced by sequence construction and terminal operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    /// A size or count parameter was below its minimum (e.g. `window(0)`).
    #[error("{operation}: parameter '{parameter}' must be at least {min}, got {got}")]
    InvalidSize {
        /// Operation that rejected the parameter.
        operation: &'static str,
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// Value supplied by the caller.
        got: usize,
        /// Minimum accepted value.
        min: usize,
    },

    /// A percentile rank outside the closed range `[0, 100]`.
    #[error("percentile: parameter 'p' must be within [0, 100], got {got}")]
    InvalidPercentile {
        /// Value supplied by the caller.
        got: f64,
    },

    /// A range step of zero, which would never terminate.
    #[error("{operation}: parameter 'step' must be non-zero")]
    ZeroStep {
        /// Operation that rejected the parameter.
        operation: &'static str,
    },

    /// A non-finite numeric parameter where a finite value is required.
    #[error("{operation}: parameter '{parameter}' must be finite, got {got}")]
    NonFiniteParameter {
        /// Operation that rejected the parameter.
        operation: &'static str,
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// Value supplied by the caller.
        got: f64,
    },

    /// Input data that is not contiguous in memory (ndarray views).
    #[error("{operation}: input must be contiguous in memory")]
    NonContiguousInput {
        /// Operation that rejected the input.
        operation: &'static str,
    },
}
