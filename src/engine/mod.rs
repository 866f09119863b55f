//! The lazy pipeline engine.
//!
//! ## Purpose
//!
//! This module contains the sequence wrapper at the heart of the crate, the
//! hand-rolled pull adaptors it composes, and the fail-fast parameter
//! validator every size/numeric argument passes through.
//!
//! ## Visibility
//!
//! [`sequence::Sequence`] is public; the adaptors and validator are internal
//! implementation details.

pub mod adaptors;
pub mod sequence;
pub mod validator;
