//! Contains the [`Array`] type, which is the main type of this crate.

use alloc::boxed::Box;
use core::{
	fmt::{self, Debug, Display, Formatter},
	iter,
	marker::PhantomData,
	ops::{Index, IndexMut},
};

use tracing::{debug, trace};

use crate::{
	error::{Error, Result},
	policy::{Halving, Policy},
};

fn vacant<T>(capacity: usize) -> Box<[Option<T>]> {
	iter::repeat_with(|| None).take(capacity).collect()
}

fn out_of_range(index: usize, len: usize) -> Error {
	debug!(index, len, "index out of range");

	Error::IndexOutOfRange { index, len }
}

/// An [`Array`] is an ordered sequence of values stored in one contiguous
/// buffer. Unlike a [`Vec`](alloc::vec::Vec), its capacity is exact and
/// follows the [`Policy`] `P`, so it also gives memory back as it empties.
pub struct Array<T, P = Halving> {
	pub(crate) buf: Box<[Option<T>]>,
	pub(crate) len: usize,
	policy: PhantomData<fn() -> P>,
}

impl<T, P> Array<T, P> {
	/// Returns the total number of elements the [`Array`] can hold without reallocating.
	#[inline]
	#[must_use]
	pub fn capacity(&self) -> usize {
		self.buf.len()
	}

	/// Returns the number of elements in the [`Array`].
	#[inline]
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Returns `true` if the [`Array`] contains no elements.
	#[inline]
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns a reference to the element at `index`.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index` is not less than the length.
	#[inline]
	pub fn get(&self, index: usize) -> Result<&T> {
		self.buf[..self.len]
			.get(index)
			.and_then(Option::as_ref)
			.ok_or_else(|| out_of_range(index, self.len))
	}

	/// Returns a mutable reference to the element at `index`.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index` is not less than the length.
	#[inline]
	pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
		let len = self.len;

		self.buf[..len]
			.get_mut(index)
			.and_then(Option::as_mut)
			.ok_or_else(|| out_of_range(index, len))
	}

	/// Replaces the element at `index`, returning the previous one.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index` is not less than the length.
	pub fn set(&mut self, index: usize, value: T) -> Result<T> {
		let slot = self.get_mut(index)?;

		Ok(core::mem::replace(slot, value))
	}

	/// Returns the first element, or `None` if the [`Array`] is empty.
	#[inline]
	#[must_use]
	pub fn first(&self) -> Option<&T> {
		self.get(0).ok()
	}

	/// Returns the last element, or `None` if the [`Array`] is empty.
	#[inline]
	#[must_use]
	pub fn last(&self) -> Option<&T> {
		let index = self.len.checked_sub(1)?;

		self.get(index).ok()
	}

	pub(crate) fn live(&self) -> impl Iterator<Item = &T> + '_ {
		self.buf[..self.len].iter().flatten()
	}

	fn resize(&mut self, capacity: usize, reason: &'static str) {
		debug_assert!(capacity >= self.len, "resize would drop live elements");

		let from = self.capacity();
		let old = core::mem::replace(&mut self.buf, vacant(capacity));

		for (slot, value) in self.buf.iter_mut().zip(old.into_vec()) {
			*slot = value;
		}

		trace!(from, to = capacity, reason, "resized array storage");
	}
}

impl<T, P: Policy> Array<T, P> {
	/// Creates a new, empty [`Array`] with no storage.
	#[inline]
	#[must_use]
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	/// Creates a new, empty [`Array`] with exactly `capacity` slots.
	#[inline]
	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buf: vacant(capacity),
			len: 0,
			policy: PhantomData,
		}
	}

	/// Inserts a value at `index`, shifting every element after it to the right.
	/// An `index` equal to the length appends the value.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidIndex`] if `index` is greater than the length.
	pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
		if index > self.len {
			debug!(index, len = self.len, "invalid insertion index");

			return Err(Error::InvalidIndex {
				index,
				len: self.len,
			});
		}

		if self.len == self.capacity() {
			let capacity = P::grow(self.len).max(self.len + 1);

			self.resize(capacity, "grow");
		}

		let gap = &mut self.buf[index..=self.len];

		gap.rotate_right(1);
		gap[0] = Some(value);

		self.len += 1;

		Ok(())
	}

	/// Inserts a value before every other element.
	#[inline]
	pub fn push_front(&mut self, value: T) {
		self.insert(0, value).unwrap_or_else(|_| unreachable!());
	}

	/// Inserts a value after every other element.
	#[inline]
	pub fn push_back(&mut self, value: T) {
		self.insert(self.len, value).unwrap_or_else(|_| unreachable!());
	}

	/// Removes the element at `index`, shifting every element after it to the left.
	/// The storage may shrink afterwards, as decided by the [`Policy`].
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index` is not less than the length.
	pub fn remove(&mut self, index: usize) -> Result<T> {
		if index >= self.len {
			return Err(out_of_range(index, self.len));
		}

		let live = &mut self.buf[index..self.len];
		let value = live[0].take();

		// The vacated slot ends up just past the last element.
		live.rotate_left(1);

		self.len -= 1;

		if let Some(capacity) = P::shrink(self.len, self.capacity()) {
			self.resize(capacity.max(self.len), "shrink");
		}

		Ok(value.unwrap_or_else(|| unreachable!("live slot {index} is vacant")))
	}

	/// Removes the first element.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if the [`Array`] is empty.
	#[inline]
	pub fn pop_front(&mut self) -> Result<T> {
		self.remove(0)
	}

	/// Removes the last element.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if the [`Array`] is empty.
	#[inline]
	pub fn pop_back(&mut self) -> Result<T> {
		match self.len.checked_sub(1) {
			Some(index) => self.remove(index),
			None => Err(out_of_range(0, 0)),
		}
	}
}

impl<T, P: Policy> Default for Array<T, P> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone, P> Clone for Array<T, P> {
	fn clone(&self) -> Self {
		Self {
			buf: self.buf.clone(),
			len: self.len,
			policy: PhantomData,
		}
	}
}

impl<T: PartialEq, P, Q> PartialEq<Array<T, Q>> for Array<T, P> {
	fn eq(&self, other: &Array<T, Q>) -> bool {
		self.buf[..self.len] == other.buf[..other.len]
	}
}

impl<T: Eq, P> Eq for Array<T, P> {}

impl<T: Debug, P> Debug for Array<T, P> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.live()).finish()
	}
}

impl<T: Display, P> Display for Array<T, P> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		writeln!(f, "Array: size = {}, capacity = {}", self.len, self.capacity())?;

		f.write_str("[")?;

		for (i, value) in self.live().enumerate() {
			if i != 0 {
				f.write_str(",")?;
			}

			Display::fmt(value, f)?;
		}

		f.write_str("]")
	}
}

impl<T, P> Index<usize> for Array<T, P> {
	type Output = T;

	#[inline]
	fn index(&self, index: usize) -> &Self::Output {
		self.get(index).expect("index out of range")
	}
}

impl<T, P> IndexMut<usize> for Array<T, P> {
	#[inline]
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		self.get_mut(index).expect("index out of range")
	}
}
