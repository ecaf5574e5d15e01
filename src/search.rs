//! Contains the linear search operations of the [`Array`] type.

use alloc::vec::Vec;

use crate::collection::Array;

impl<T: PartialEq, P> Array<T, P> {
	/// Returns the index of the first element equal to `value`.
	#[must_use]
	pub fn find(&self, value: &T) -> Option<usize> {
		self.live().position(|element| element == value)
	}

	/// Returns the indices of every element equal to `value`, in ascending order.
	#[must_use]
	pub fn find_all(&self, value: &T) -> Vec<usize> {
		self.live()
			.enumerate()
			.filter_map(|(i, element)| (element == value).then_some(i))
			.collect()
	}

	/// Returns `true` if any element is equal to `value`.
	#[inline]
	#[must_use]
	pub fn contains(&self, value: &T) -> bool {
		self.find(value).is_some()
	}
}
