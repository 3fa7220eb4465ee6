// Copyright © 2025 Stephan Kunz
//! The strict query string parsing error handling.

use crate::ConstString;

/// Shortcut for the Result<T, E> type of [`try_qs2dict`](crate::try_qs2dict).
pub type Result<T> = core::result::Result<T, Error>;

/// Things that may go wrong parsing a query string strictly.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub enum Error {
	/// A segment without a `=`.
	MalformedSegment {
		/// The offending segment.
		segment: ConstString,
	},
	/// A key that occurs more than once.
	DuplicateKey {
		/// The repeated key.
		key: ConstString,
	},
}

/// Currently the default implementation is sufficient.
impl core::error::Error for Error {}

impl core::fmt::Debug for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::MalformedSegment { segment } => write!(f, "MalformedSegment(segment: {segment})"),
			Self::DuplicateKey { key } => write!(f, "DuplicateKey(key: {key})"),
		}
	}
}

impl core::fmt::Display for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::MalformedSegment { segment } => {
				write!(f, "the segment '{segment}' is not a key=value pair")
			}
			Self::DuplicateKey { key } => write!(f, "the key {key} occurs more than once"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::format;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<Error>();
	}

	#[test]
	fn messages() {
		let error = Error::MalformedSegment { segment: "novalue".into() };
		assert_eq!(format!("{error}"), "the segment 'novalue' is not a key=value pair");
		assert_eq!(format!("{error:?}"), "MalformedSegment(segment: novalue)");

		let error = Error::DuplicateKey { key: "a".into() };
		assert_eq!(format!("{error}"), "the key a occurs more than once");
		assert_eq!(format!("{error:?}"), "DuplicateKey(key: a)");
	}
}
