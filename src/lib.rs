// Copyright © 2025 Stephan Kunz
#![no_std]
#![doc = include_str!("../README.md")]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

#[doc(hidden)]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod exclude;
mod query;
mod segment;

use alloc::sync::Arc;

// flatten
pub use error::{Error, Result};
pub use exclude::{Exclude, KeepAll};
pub use query::{QueryMap, qs2dict, qsfilter, try_qs2dict};
pub use segment::{PAIR_SEPARATOR, SEGMENT_SEPARATOR, Segment, Segments, segments};

/// An immutable thread safe `String` type
/// see: [Logan Smith](https://www.youtube.com/watch?v=A4cKi7PTJSs).
type ConstString = Arc<str>;
