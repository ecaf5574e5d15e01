#![forbid(unsafe_code)]

//! An `Array` is a growable sequence backed by a single buffer whose capacity is exact. It doubles when full and halves once it is only a quarter full, so memory use stays bounded by the number of live elements. Every index is checked, and a rejected index leaves the array untouched.
//!
//! ## Example
//!
//! ```rust
//! # use darray::{collection::Array, error::Error};
//! let mut array = Array::<&str>::with_capacity(1);
//!
//! array.push_back("World");
//! array.push_front("Hello");
//!
//! assert_eq!(array[0], "Hello");
//! assert_eq!(array.find(&"World"), Some(1));
//! assert_eq!(array.capacity(), 2);
//!
//! assert_eq!(array.remove(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
//! ```
//!
//! ## Features
//!
//! - `O(1)` access to elements by index
//! - `O(n)` insertion, removal, and search anywhere in the array
//! - No `unsafe` code
//! - Custom resize policies

extern crate alloc;

pub mod collection;
pub mod error;
pub mod policy;
pub mod search;
