// Copyright © 2025 Stephan Kunz
//! Implements the [`Segment`] of a query string and the [`Segments`] splitter.

use core::{fmt, iter::FusedIterator, str::Split};

/// Separator between two [`Segment`]s.
pub const SEGMENT_SEPARATOR: char = '&';
/// Separator between `key` and `value` of a [`Segment::Pair`].
pub const PAIR_SEPARATOR: char = '=';

/// One `&`-delimited unit of a query string, borrowed from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
	/// A `key=value` pair, split at the first `=`.
	/// The `value` may contain further `=` characters.
	Pair {
		/// Everything before the first `=`.
		key: &'a str,
		/// Everything after the first `=`.
		value: &'a str,
	},
	/// A token without any `=`, including the empty token.
	Bare(&'a str),
}

impl<'a> Segment<'a> {
	/// Classifies a single segment.
	#[must_use]
	pub fn parse(segment: &'a str) -> Self {
		segment
			.split_once(PAIR_SEPARATOR)
			.map_or(Self::Bare(segment), |(key, value)| Self::Pair { key, value })
	}

	/// Returns the `key` of a pair, otherwise `None`.
	#[must_use]
	pub const fn key(&self) -> Option<&'a str> {
		match *self {
			Self::Pair { key, .. } => Some(key),
			Self::Bare(_) => None,
		}
	}

	/// Returns the `value` of a pair, otherwise `None`.
	#[must_use]
	pub const fn value(&self) -> Option<&'a str> {
		match *self {
			Self::Pair { value, .. } => Some(value),
			Self::Bare(_) => None,
		}
	}

	/// Returns `(key, value)` of a pair, otherwise `None`.
	#[must_use]
	pub const fn as_pair(&self) -> Option<(&'a str, &'a str)> {
		match *self {
			Self::Pair { key, value } => Some((key, value)),
			Self::Bare(_) => None,
		}
	}

	/// Returns `true` for a `key=value` pair.
	#[must_use]
	pub const fn is_pair(&self) -> bool {
		matches!(self, Self::Pair { .. })
	}
}

/// Re-emits the segment, pairs joined with a single `=`.
impl fmt::Display for Segment<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Pair { key, value } => write!(f, "{key}{PAIR_SEPARATOR}{value}"),
			Self::Bare(token) => f.write_str(token),
		}
	}
}

/// Lazy iterator over the [`Segment`]s of a query string.
/// Created by [`segments`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
	inner: Split<'a, char>,
}

impl<'a> Iterator for Segments<'a> {
	type Item = Segment<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(Segment::parse)
	}
}

impl DoubleEndedIterator for Segments<'_> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back().map(Segment::parse)
	}
}

impl FusedIterator for Segments<'_> {}

/// Splits `qs` on `&` into its [`Segment`]s.
///
/// Like a plain split, an empty string yields a single empty [`Segment::Bare`],
/// and consecutive `&` yield empty bare segments in between.
#[must_use]
pub fn segments(qs: &str) -> Segments<'_> {
	Segments {
		inner: qs.split(SEGMENT_SEPARATOR),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::{string::ToString, vec::Vec};

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<Segment<'_>>();
		is_normal::<Segments<'_>>();
	}

	#[test]
	fn first_equal_sign_splits() {
		assert_eq!(
			Segment::parse("a=1=2"),
			Segment::Pair { key: "a", value: "1=2" }
		);
		assert_eq!(Segment::parse("=x"), Segment::Pair { key: "", value: "x" });
		assert_eq!(Segment::parse("a="), Segment::Pair { key: "a", value: "" });
		assert_eq!(Segment::parse("novalue"), Segment::Bare("novalue"));
	}

	#[test]
	fn display_reproduces_input() {
		for raw in ["a=1", "a=1=2", "=", "novalue", ""] {
			assert_eq!(Segment::parse(raw).to_string(), raw);
		}
	}

	#[test]
	fn reverse_iteration() {
		let keys: Vec<_> = segments("a=1&b=2&c")
			.rev()
			.map(|s| s.key())
			.collect();
		assert_eq!(keys, [None, Some("b"), Some("a")]);
	}
}
