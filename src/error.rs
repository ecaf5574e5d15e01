//! Contains the [`Error`] type returned by the fallible [`Array`](crate::collection::Array) operations.

use thiserror::Error;

/// A rejected index. The array is never modified when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// The index does not refer to a live element.
	#[error("index {index} is out of range for length {len}")]
	IndexOutOfRange { index: usize, len: usize },

	/// The index is past the end of the array and cannot be inserted at.
	#[error("cannot insert at index {index} into length {len}")]
	InvalidIndex { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
