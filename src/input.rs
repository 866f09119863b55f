//! Input abstraction for sequence construction.
//!
//! This module defines the `SequenceInput` trait which allows sequences to be
//! built from standard slices, vectors, fixed arrays, and 1-D ndarray views
//! interchangeably.

use ndarray::{ArrayBase, Data, Ix1};

use crate::engine::sequence::Sequence;
use crate::primitives::errors::SequenceError;

/// Trait for data types that can seed a lazy sequence.
///
/// This trait abstracts over slice-like inputs, allowing construction from
/// both `&[T]` and `&ArrayBase` (ndarray) seamlessly. Elements are cloned
/// out of the source, so the resulting sequence owns its data and supports
/// fresh iteration.
pub trait SequenceInput<T> {
    /// View the input as a contiguous slice.
    ///
    /// # Returns
    ///
    /// * `Ok(&[T])` - A reference to the underlying contiguous slice.
    /// * `Err(SequenceError)` - If the data is not contiguous in memory.
    fn as_sequence_slice(&self) -> Result<&[T], SequenceError>;
}

impl<T> SequenceInput<T> for [T] {
    fn as_sequence_slice(&self) -> Result<&[T], SequenceError> {
        Ok(self)
    }
}

impl<T> SequenceInput<T> for Vec<T> {
    fn as_sequence_slice(&self) -> Result<&[T], SequenceError> {
        Ok(self.as_slice())
    }
}

impl<T, const N: usize> SequenceInput<T> for [T; N] {
    fn as_sequence_slice(&self) -> Result<&[T], SequenceError> {
        Ok(self.as_slice())
    }
}

impl<T, S> SequenceInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_sequence_slice(&self) -> Result<&[T], SequenceError> {
        self.as_slice().ok_or(SequenceError::NonContiguousInput {
            operation: "Sequence::from_data",
        })
    }
}

impl<T: Clone + 'static> Sequence<T> {
    /// Build a sequence by cloning the elements of any slice-like input.
    ///
    /// # Errors
    ///
    /// Fails if an ndarray input is not contiguous in memory.
    pub fn from_data<I>(input: &I) -> Result<Self, SequenceError>
    where
        I: SequenceInput<T> + ?Sized,
    {
        let slice = input.as_sequence_slice()?;
        Ok(Sequence::new(slice.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn builds_from_slice_vec_and_ndarray() {
        let from_slice = Sequence::from_data(&[1.0, 2.0][..]).unwrap();
        assert_eq!(from_slice.to_vec(), vec![1.0, 2.0]);

        let from_vec = Sequence::from_data(&vec![3, 4]).unwrap();
        assert_eq!(from_vec.to_vec(), vec![3, 4]);

        let array = Array1::from(vec![5.0, 6.0]);
        let from_array = Sequence::from_data(&array).unwrap();
        assert_eq!(from_array.to_vec(), vec![5.0, 6.0]);
    }
}
