//! A module containing the error types returned by
//! [`IntervalSet`](crate::IntervalSet).

use core::fmt::Debug;

use thiserror::Error;

use crate::Interval;

/// The error returned when an insertion into an
/// [`IntervalSet`](crate::IntervalSet) is rejected. The set is left
/// unchanged whenever this error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertError<T>
where
	T: Debug,
{
	/// The interval `[begin, end)` contains no points.
	#[error("invalid interval [{begin:?}, {end:?}): begin must be less than end")]
	InvalidInterval {
		/// The start of the rejected interval.
		begin: T,
		/// The end of the rejected interval.
		end: T,
	},
	/// The interval intersects an interval already in the set.
	#[error("trying to add {interval:?} which intersects with existing {existing:?}")]
	Overlap {
		/// The interval which was not inserted.
		interval: Interval<T>,
		/// An interval of the set which overlaps it.
		existing: Interval<T>,
	},
	/// The point is the maximum value of its type so the interval
	/// `[value, value + 1)` cannot be represented.
	#[error("cannot insert {value:?}: value + 1 overflows")]
	Overflow {
		/// The point which was not inserted.
		value: T,
	},
}

/// The error returned by
/// [`IntervalSet::check_invariants()`](crate::IntervalSet::check_invariants)
/// when the internal state of a set is corrupt.
///
/// Sets only reach such a state if intervals were inserted in
/// [`Validation::Unchecked`](crate::Validation::Unchecked) mode in breach
/// of the non-overlapping precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantError<T>
where
	T: Debug,
{
	/// A stored interval contains no points.
	#[error("stored interval {interval:?} is empty")]
	EmptyInterval {
		/// The offending interval.
		interval: Interval<T>,
	},
	/// Two consecutive stored intervals overlap or touch.
	#[error("stored intervals {left:?} and {right:?} overlap or touch")]
	OverlappingOrTouching {
		/// The lower of the two intervals.
		left: Interval<T>,
		/// The upper of the two intervals.
		right: Interval<T>,
	},
	/// The cached element count disagrees with the stored intervals.
	#[error("element count is {actual} but the intervals hold {expected}")]
	CountMismatch {
		/// The sum of the stored interval lengths.
		expected: u128,
		/// The cached element count.
		actual: u128,
	},
}
