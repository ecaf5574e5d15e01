//! Contains the [`Policy`] trait and a few default implementations.
//! It is used to decide when and how far an array resizes its storage.

/// A strategy to resize the storage of an array. It allows us to trade
/// memory waste against reallocation frequency depending on the needs
/// of the application.
pub trait Policy {
	/// The capacity to grow to when an array of length `len` is full.
	/// Values that are not greater than `len` are raised to `len + 1`.
	fn grow(len: usize) -> usize;

	/// The capacity to shrink to after a removal left `len` elements
	/// in `capacity` slots, or `None` to keep the current storage.
	fn shrink(len: usize, capacity: usize) -> Option<usize>;
}

#[inline]
fn doubled(len: usize) -> usize {
	len.saturating_mul(2).max(1)
}

/// Doubles when full and halves when exactly a quarter full.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct Halving;

impl Policy for Halving {
	#[inline]
	fn grow(len: usize) -> usize {
		doubled(len)
	}

	#[inline]
	fn shrink(len: usize, capacity: usize) -> Option<usize> {
		let half = capacity / 2;

		(len == capacity / 4 && half != 0).then_some(half)
	}
}

/// Doubles when full and never gives memory back. It is useful when an
/// array is refilled right after being drained.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct Retain;

impl Policy for Retain {
	#[inline]
	fn grow(len: usize) -> usize {
		doubled(len)
	}

	#[inline]
	fn shrink(_: usize, _: usize) -> Option<usize> {
		None
	}
}
