// Copyright © 2025 Stephan Kunz
//! Implements the [`Exclude`] trait for the usual collections of keys.

use alloc::{collections::btree_set::BTreeSet, string::String, vec::Vec};

/// A set of keys to omit from the result of a query string operation.
///
/// Keys are compared exactly, there is no case normalization.
pub trait Exclude {
	/// Returns `true` if `key` shall be omitted.
	fn excludes(&self, key: &str) -> bool;
}

/// The empty exclusion set, every key is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeepAll;

impl Exclude for KeepAll {
	fn excludes(&self, _key: &str) -> bool {
		false
	}
}

// region:		--- sequences
impl<S: AsRef<str>> Exclude for [S] {
	fn excludes(&self, key: &str) -> bool {
		self.iter().any(|excluded| excluded.as_ref() == key)
	}
}

impl<S: AsRef<str>, const N: usize> Exclude for [S; N] {
	fn excludes(&self, key: &str) -> bool {
		self.as_slice().excludes(key)
	}
}

impl<S: AsRef<str>> Exclude for Vec<S> {
	fn excludes(&self, key: &str) -> bool {
		self.as_slice().excludes(key)
	}
}
// endregion:	--- sequences

// region:		--- sets
impl Exclude for BTreeSet<String> {
	fn excludes(&self, key: &str) -> bool {
		self.contains(key)
	}
}

impl Exclude for BTreeSet<&str> {
	fn excludes(&self, key: &str) -> bool {
		self.contains(key)
	}
}

#[cfg(feature = "std")]
impl<H: core::hash::BuildHasher> Exclude for std::collections::HashSet<String, H> {
	fn excludes(&self, key: &str) -> bool {
		self.contains(key)
	}
}

#[cfg(feature = "std")]
impl<H: core::hash::BuildHasher> Exclude for std::collections::HashSet<&str, H> {
	fn excludes(&self, key: &str) -> bool {
		self.contains(key)
	}
}
// endregion:	--- sets

impl<T: Exclude + ?Sized> Exclude for &T {
	fn excludes(&self, key: &str) -> bool {
		(**self).excludes(key)
	}
}
