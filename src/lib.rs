//! # lazyseq — Lazy Sequence Composition with ndarray Integration
//!
//! A lazy-iterator composition library: chainable transformation and
//! windowing operators, terminal statistical reducers, and multi-source
//! combinators over any iterator, all evaluated on demand.
//!
//! ## What is lazy composition?
//!
//! A lazy sequence defers every transformation until a terminal operation
//! drives the chain. Constructing `map`, `filter`, `window`, or `take`
//! stages performs no iteration; pulling the first value from the outermost
//! stage is what triggers upstream pulls, recursively, one element at a
//! time. Intermediate containers are never materialized.
//!
//! **Key advantages:**
//! - Works over infinite generators: only the consumed prefix is produced
//! - Bounded memory: windowing holds at most `size` live elements
//! - Single-pass: each upstream element is pulled at most once
//! - Compile-time numeric discipline: statistics exist only on `Float`
//!   element types
//!
//! **Common applications:**
//! - Moving statistics over data streams (`window` + `mean`/`std_dev`)
//! - Combining pre-sorted event feeds (`merge`)
//! - Exploratory descriptive statistics (`quartiles`, `correlation`)
//! - Pipeline-style data munging without intermediate allocations
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! // Squares of the first three even naturals, from an infinite source.
//! let squares: Vec<i64> = Sequence::new(0..)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * x)
//!     .take(3)
//!     .to_vec();
//! assert_eq!(squares, vec![0, 4, 16]);
//! ```
//!
//! ### Windowing and Moving Statistics
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let readings = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! // Sliding windows...
//! let windows = Sequence::new(readings.clone()).window(3).unwrap().to_vec();
//! assert_eq!(windows, vec![vec![1.0, 2.0, 3.0], vec![2.0, 3.0, 4.0], vec![3.0, 4.0, 5.0]]);
//!
//! // ...compose into moving averages.
//! let moving_means: Vec<f64> = Sequence::new(readings)
//!     .window(3)
//!     .unwrap()
//!     .map(|w| Sequence::new(w).mean().unwrap())
//!     .to_vec();
//! assert_eq!(moving_means, vec![2.0, 3.0, 4.0]);
//! ```
//!
//! ### Statistics
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! assert_eq!(Sequence::new(data.clone()).percentile(75.0).unwrap(), Some(4.0));
//!
//! let q = Sequence::new(data.clone()).quartiles().unwrap();
//! assert_eq!((q.q1, q.q2, q.q3), (2.0, 3.0, 4.0));
//!
//! let doubled = Sequence::new(data.clone()).map(|x| 2.0 * x);
//! let r: f64 = Sequence::new(data).correlation(doubled).unwrap();
//! assert!((r - 1.0).abs() < 1e-12);
//! ```
//!
//! ### Combining Sequences
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! // K-way merge of individually pre-sorted feeds.
//! let merged = merge(vec![
//!     Sequence::new(vec![1, 3, 5]),
//!     Sequence::new(vec![2, 4, 6]),
//! ]);
//! assert_eq!(merged.to_vec(), vec![1, 2, 3, 4, 5, 6]);
//!
//! // Round-robin interleaving; exhausted feeds drop out of rotation.
//! let braided = interleave(vec![
//!     Sequence::new(vec![1, 4]),
//!     Sequence::new(vec![2, 5, 6]),
//!     Sequence::new(vec![3]),
//! ]);
//! assert_eq!(braided.to_vec(), vec![1, 2, 3, 4, 5, 6]);
//! ```
//!
//! ### Curried Functional Surface
//!
//! Every capability is also exposed configuration-first for pipe/compose
//! style; both surfaces delegate to the same engine:
//!
//! ```rust
//! use lazyseq::{functional as seq, Sequence};
//!
//! let fluent = Sequence::new(vec![1, 2, 3, 4]).map(|x| x * 10).to_vec();
//! let curried = seq::to_vec(seq::map(|x: i32| x * 10)(Sequence::new(vec![1, 2, 3, 4])));
//! assert_eq!(fluent, curried);
//! ```
//!
//! ## Evaluation Model
//!
//! Single-threaded, synchronous, cooperative pull: each element is produced
//! on demand when the consumer requests the next value. There is no
//! background production, no prefetch beyond what a specific operator's
//! algorithm requires (the window buffer, the one-head-per-source merge
//! heap), and no cancellation primitive beyond the consumer simply not
//! pulling again. A sequence handle owns its upstream exclusively; deriving
//! two chains from one live handle is rejected by the compiler.
//!
//! The materializing operations — `reverse`, `sort`, `sort_by`, and every
//! statistical reducer — are the explicit exception: they buffer or drain
//! the entire upstream and are documented as such.
//!
//! ## Error Handling
//!
//! Operations that take a size or numeric parameter validate it
//! synchronously at call time, before any lazy work is scheduled, and return
//! [`Result<T, SequenceError>`](Result). Errors carry the operation name,
//! the parameter name, and the rejected value. Common errors:
//!
//! - [`InvalidSize`](SequenceError::InvalidSize): `window(0)`, `chunk(0)`
//! - [`InvalidPercentile`](SequenceError::InvalidPercentile): rank outside `[0, 100]`
//! - [`ZeroStep`](SequenceError::ZeroStep): `range` with a step of zero
//!
//! Panics raised inside caller-supplied closures propagate unmodified to
//! the caller of the pull that invoked them; the library never wraps,
//! retries, or suppresses them. `merge` on unsorted inputs is a documented
//! precondition violation: the output order is unspecified, never a crash.
//!
//! ## API Stability
//!
//! This crate follows [semantic versioning](https://semver.org/).
//!
//! **Core Types:**
//! - [`Sequence`] - The chainable lazy handle
//! - [`Quartiles`] - Quartile cut points record
//! - [`SequenceError`] - Error type
//! - [`Result<T>`](Result) - Result type alias
//!
//! **Free Constructors:**
//! - [`range`], [`repeat`], [`repeat_n`] - Sources
//! - [`zip`], [`zip_with`], [`chain`], [`interleave`], [`merge`],
//!   [`merge_by`] - Combinators
//!
//! **Surfaces:**
//! - Fluent methods on [`Sequence`]
//! - [`functional`] module - configuration-first counterparts
//! - [`prelude`] module - convenient wildcard imports
//!
//! Internal modules (`engine`, `primitives`, `math`) are implementation
//! details and may change without notice.
//!
//! ## Dependencies
//!
//! - `num-traits` - Generic numeric bounds for the statistical terminals
//! - `ndarray` - Slice-compatible construction from 1-D arrays
//! - `thiserror` - Error type derivation

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error taxonomy, window buffer, ordering utilities.
mod primitives;

// Layer 2: Numeric computations behind the terminal reducers.
mod math;

// Layer 3: Engine - the sequence wrapper, pull adaptors, and validator.
mod engine;

// Layer 4: Multi-source combinators and generators.
mod combinators;

// High-level fluent API surface.
mod api;

// Input abstraction for ndarray/slice compatibility.
mod input;

// Curried functional surface (public module, imported qualified).
pub mod functional;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use crate::api::{
    chain, interleave, merge, merge_by, range, repeat, repeat_n, zip, zip_with, Quartiles, Result,
    Sequence, SequenceError, SequenceInput,
};

// ============================================================================
// Prelude
// ============================================================================

/// Standard lazyseq prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used items:
///
/// ```
/// use lazyseq::prelude::*;
/// ```
///
/// This imports:
/// - `Sequence` - The chainable lazy handle
/// - `range`, `repeat`, `repeat_n` - Source generators
/// - `zip`, `zip_with`, `chain`, `interleave`, `merge`, `merge_by` -
///   Combinators
/// - `Quartiles`, `SequenceError`, `Result` - Result types
pub mod prelude {
    pub use crate::api::{
        chain, interleave, merge, merge_by, range, repeat, repeat_n, zip, zip_with, Quartiles,
        Result, Sequence, SequenceError, SequenceInput,
    };
}
