//! This crate provides [`IntervalSet`], a Data Structure for storing a set
//! of integers as disjoint, non-adjacent half-open intervals based off
//! [`BTreeMap`].
//!
//! Large, mostly contiguous runs of integers such as IDs or offsets are
//! stored in memory proportional to the number of runs rather than the
//! number of integers, and every operation is `O(log n)` in the number of
//! intervals.
//!
//! ## Example
//!
//! ```rust
//! use disjoint_interval_tree::{Interval, IntervalSet};
//!
//! let mut set = IntervalSet::new();
//!
//! set.insert_interval(5, 10).unwrap();
//! set.insert_interval(0, 5).unwrap();
//! set.insert(12).unwrap();
//!
//! assert_eq!(set.contains(7), true);
//! assert_eq!(set.contains(11), false);
//!
//! assert!(set.erase(7));
//!
//! for interval in set.iter() {
//! 	println!("[{}, {})", interval.begin, interval.end);
//! }
//!
//! assert_eq!(
//! 	set.iter().collect::<Vec<_>>(),
//! 	[Interval::new(0, 7), Interval::new(8, 10), Interval::new(12, 13)]
//! );
//! assert_eq!(set.min(), Some(0));
//! assert_eq!(set.max(), Some(13));
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Half-Open Intervals
//!
//! Every interval in this crate is half-open, `[begin, end)`, so it
//! contains `begin` but not `end`. An interval is only valid if it
//! contains at least one point, `begin < end`. A consequence is that
//! [`IntervalSet::max()`] returns one past the largest point in the set,
//! and that the maximum value of the point type can never be stored.
//!
//! ### Disjoint and Non-Adjacent
//!
//! No two intervals in an [`IntervalSet`] share a point (overlap), and no
//! two intervals "touch": `[2, 4)` and `[4, 6)` touch since no integer lies
//! between them. Touching intervals are merged on insertion, in both
//! directions, so the set always holds the minimum number of intervals.
//!
//! ### Validation
//!
//! Inserting an interval which overlaps the set is a breach of contract.
//! In [`Validation::Strict`] mode this is detected in `O(log n)` and
//! reported as an [`InsertError`]; in [`Validation::Unchecked`] mode the
//! check is skipped. New sets are strict when `debug_assertions` are
//! enabled. [`IntervalSet::check_invariants()`] audits a whole set.
//!
//! ## Features
//!
//! - `serde`: [`Serialize`] and [`Deserialize`] impls for [`Interval`] and
//!   [`IntervalSet`], the latter as a sequence of intervals.
//!
//! ## Logging
//!
//! Merges and splits are reported at `trace` level, and rejected strict
//! insertions at `debug` level, through the [`log`] facade.
//!
//! [`btreemap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
//! [`serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html
//! [`log`]: https://docs.rs/log

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

extern crate alloc;

pub(crate) mod utils;

pub mod error;
pub mod interval;
pub mod point;
pub mod set;

pub use crate::error::{InsertError, InvariantError};
pub use crate::interval::Interval;
pub use crate::point::{DiscretePoint, PointType};
pub use crate::set::{IntervalSet, Validation};
