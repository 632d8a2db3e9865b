//! A module containing [`Interval`], the half-open interval type stored in
//! an [`IntervalSet`](crate::IntervalSet).

use core::ops::Range;

use crate::PointType;

/// A half-open interval `[begin, end)` of discrete points.
///
/// An interval is only valid if it contains at least one point, that is
/// if `begin < end`. Every interval stored inside an
/// [`IntervalSet`](crate::IntervalSet) is valid.
///
/// # Examples
/// ```
/// use disjoint_interval_tree::Interval;
///
/// let interval = Interval::new(5, 10);
///
/// assert_eq!(interval.len(), 5);
/// assert_eq!(interval.contains(5), true);
/// assert_eq!(interval.contains(10), false);
/// assert_eq!(Interval::from(5..10), interval);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
	/// The start of the interval, inclusive.
	pub begin: T,
	/// The end of the interval, exclusive.
	pub end: T,
}

impl<T> Interval<T> {
	/// Makes a new [`Interval`] without checking its validity.
	pub const fn new(begin: T, end: T) -> Self {
		Interval { begin, end }
	}
}

impl<T> Interval<T>
where
	T: PointType,
{
	/// Returns `true` if the interval contains at least one point.
	pub fn is_valid(&self) -> bool {
		self.begin < self.end
	}

	/// Returns `true` if the interval contains no points.
	pub fn is_empty(&self) -> bool {
		!self.is_valid()
	}

	/// The number of points in the interval, saturating at [`usize::MAX`].
	pub fn len(&self) -> usize {
		usize::try_from(self.begin.distance(self.end)).unwrap_or(usize::MAX)
	}

	/// Returns `true` if `point` lies within `[begin, end)`.
	pub fn contains(&self, point: T) -> bool {
		self.begin <= point && point < self.end
	}

	/// Returns `true` if `self` and `other` share at least one point.
	pub fn overlaps(&self, other: &Self) -> bool {
		self.begin < other.end && other.begin < self.end
	}

	/// Returns `true` if the two intervals do not overlap and no point lies
	/// between them.
	pub fn touches(&self, other: &Self) -> bool {
		self.end == other.begin || other.end == self.begin
	}
}

impl<T> From<Range<T>> for Interval<T> {
	fn from(range: Range<T>) -> Self {
		Interval {
			begin: range.start,
			end: range.end,
		}
	}
}

impl<T> From<Interval<T>> for Range<T> {
	fn from(interval: Interval<T>) -> Self {
		interval.begin..interval.end
	}
}
