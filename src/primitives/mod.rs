//! Low-level building blocks shared across the crate.
//!
//! ## Purpose
//!
//! This module groups the primitives the engine is assembled from: the error
//! taxonomy, the fixed-capacity window buffer with its pull-based iterators,
//! and the ordering utilities behind every materializing operation.
//!
//! ## Visibility
//!
//! Only [`errors::SequenceError`] is re-exported publicly; the rest are
//! internal implementation details.

pub mod errors;
pub mod sorting;
pub mod window;
