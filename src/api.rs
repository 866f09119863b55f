//! High-level API surface for lazy sequences.
//!
//! ## Purpose
//!
//! This module curates the public surface of the crate: the sequence wrapper
//! itself, the free constructors that produce sequences without a prior
//! source, the error type, and the `Result` alias.
//!
//! ## Design notes
//!
//! * All semantics live in the engine and combinator modules; this module
//!   only re-exports.
//! * The same capabilities are exposed a second time, configuration-first,
//!   in the [`functional`](crate::functional) module; the two surfaces share
//!   one engine.
//!
//! ## Key concepts
//!
//! ### Fluent chaining
//! ```text
//! Sequence::new(source)
//!     .filter(p)
//!     .map(f)
//!     .take(n)
//!     .to_vec()
//! ```
//!
//! ### Free constructors
//! `range`, `repeat`, `repeat_n`, `zip`, `zip_with`, `chain`, `interleave`,
//! `merge`, and `merge_by` produce chainable handles without requiring a
//! prior source.
//!
//! ## Visibility
//!
//! This module is the primary public API. Types and functions re-exported
//! here are stable and follow semantic versioning.

use std::result;

// Publicly re-exported types and constructors
pub use crate::combinators::generate::{range, repeat, repeat_n};
pub use crate::combinators::merge::{merge, merge_by};
pub use crate::combinators::{chain, interleave, zip, zip_with};
pub use crate::engine::sequence::Sequence;
pub use crate::input::SequenceInput;
pub use crate::math::stats::Quartiles;
pub use crate::primitives::errors::SequenceError;

/// Result type alias for sequence operations.
pub type Result<T> = result::Result<T, SequenceError>;
