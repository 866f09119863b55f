//! Numeric computations backing the terminal reducers.
//!
//! ## Purpose
//!
//! This module holds the slice-level statistical functions that the numeric
//! terminals on `Sequence` delegate to after draining their upstream.
//!
//! ## Visibility
//!
//! Internal; `Quartiles` is re-exported as part of the public API.

pub mod stats;
