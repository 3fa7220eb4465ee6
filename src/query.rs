// Copyright © 2025 Stephan Kunz
//! Implements the query string operations [`qs2dict`], [`try_qs2dict`] and [`qsfilter`].

use crate::{
	error::{Error, Result},
	exclude::Exclude,
	segment::{PAIR_SEPARATOR, SEGMENT_SEPARATOR, Segment, segments},
};
use alloc::{
	collections::{btree_map::BTreeMap, btree_set::BTreeSet},
	string::{String, ToString},
};

/// The key/value mapping produced from a query string.
pub type QueryMap = BTreeMap<String, String>;

/// Parses a query string into a [`QueryMap`], omitting all keys excluded by `filter`.
///
/// Every segment is split at its first `=`, so `a=1=2` maps `a` to `1=2`.
/// Segments without a `=` are dropped silently.
/// For repeated keys the last occurrence wins.
#[must_use]
pub fn qs2dict<F: Exclude + ?Sized>(qs: &str, filter: &F) -> QueryMap {
	let mut result = QueryMap::new();
	for segment in segments(qs) {
		match segment {
			Segment::Pair { key, value } if !filter.excludes(key) => {
				result.insert(key.into(), value.into());
			}
			#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
			skipped => {
				#[cfg(feature = "logging")]
				log::trace!("skipping segment '{skipped}'");
			}
		}
	}
	result
}

/// Parses a query string into a [`QueryMap`] like [`qs2dict`], but rejects input instead of ignoring it.
///
/// Excluded keys are skipped before the check for duplicates, so they may repeat.
/// # Errors
/// - [`Error::MalformedSegment`] for the first segment without a `=`
/// - [`Error::DuplicateKey`] for the first key that is not excluded and occurs again
pub fn try_qs2dict<F: Exclude + ?Sized>(qs: &str, filter: &F) -> Result<QueryMap> {
	let mut seen = BTreeSet::new();
	let mut result = QueryMap::new();
	for segment in segments(qs) {
		let Some((key, value)) = segment.as_pair() else {
			let error = Error::MalformedSegment {
				segment: segment.to_string().into(),
			};
			#[cfg(feature = "logging")]
			log::debug!("rejecting query string: {error}");
			return Err(error);
		};
		if filter.excludes(key) {
			continue;
		}
		if !seen.insert(key) {
			let error = Error::DuplicateKey { key: key.into() };
			#[cfg(feature = "logging")]
			log::debug!("rejecting query string: {error}");
			return Err(error);
		}
		result.insert(key.into(), value.into());
	}
	Ok(result)
}

/// Filters a query string, omitting all pairs whose key is excluded by `filter`.
///
/// Retained pairs are re-emitted as `key=value`, segments without a `=` are passed through verbatim.
/// The original order of the segments is kept.
#[must_use]
pub fn qsfilter<F: Exclude + ?Sized>(qs: &str, filter: &F) -> String {
	let mut result = String::with_capacity(qs.len());
	let mut first = true;
	for segment in segments(qs) {
		if segment
			.key()
			.is_some_and(|key| filter.excludes(key))
		{
			#[cfg(feature = "logging")]
			log::trace!("excluding segment '{segment}'");
			continue;
		}
		if !first {
			result.push(SEGMENT_SEPARATOR);
		}
		first = false;
		match segment {
			Segment::Pair { key, value } => {
				result.push_str(key);
				result.push(PAIR_SEPARATOR);
				result.push_str(value);
			}
			Segment::Bare(token) => result.push_str(token),
		}
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::exclude::KeepAll;

	#[test]
	fn bare_segments() {
		assert!(qs2dict("novalue", &KeepAll).is_empty());
		assert_eq!(qsfilter("novalue", &KeepAll), "novalue");
		assert!(try_qs2dict("novalue", &KeepAll).is_err());
	}

	#[test]
	fn empty_query() {
		assert!(qs2dict("", &KeepAll).is_empty());
		assert_eq!(qsfilter("", &KeepAll), "");
		assert_eq!(qsfilter("", &["a"]), "");
	}

	#[test]
	fn empty_segments_pass_through() {
		assert_eq!(qsfilter("a=1&&b=2", &KeepAll), "a=1&&b=2");
		assert_eq!(qsfilter("&a=1&", &["a"]), "&");
	}
}
