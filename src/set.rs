//! A module containing [`IntervalSet`].

use btree_monstrousity::btree_map::{
	IntoIter as BTreeMapIntoIter, SearchBoundCustom,
};
use btree_monstrousity::BTreeMap;
use itertools::Itertools;
use log::{debug, trace};

use crate::utils::{
	begins_at_comp, cut_point, overlapping_comp, starts_comp,
	touching_begin_comp, touching_end_comp,
};
use crate::{InsertError, Interval, InvariantError, PointType};

/// Whether an [`IntervalSet`] checks that inserted intervals do not
/// intersect the intervals already in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validation {
	/// Every insertion is checked in `O(log n)` and rejected with
	/// [`InsertError::Overlap`] if it intersects the set.
	Strict,
	/// The caller guarantees inserted intervals never intersect the set.
	///
	/// Breaking that guarantee does not cause undefined behavior but
	/// leaves the set in an unspecified state, which
	/// [`IntervalSet::check_invariants()`] will report.
	Unchecked,
}

impl Default for Validation {
	/// [`Validation::Strict`] in builds with `debug_assertions` enabled and
	/// [`Validation::Unchecked`] otherwise.
	fn default() -> Self {
		if cfg!(debug_assertions) {
			Validation::Strict
		} else {
			Validation::Unchecked
		}
	}
}

/// An ordered set of integers stored as disjoint, non-adjacent half-open
/// intervals based on [`BTreeMap`].
///
/// `T` is the generic type parameter for the integer type of the points
/// in the set.
///
/// Touching intervals are always merged on insertion so the set holds
/// the minimum number of intervals needed to represent its points, and
/// memory use is proportional to that number rather than to the number
/// of points.
///
/// # Examples
/// ```
/// use disjoint_interval_tree::{Interval, IntervalSet};
///
/// let mut set = IntervalSet::new();
///
/// set.insert_interval(0, 5).unwrap();
/// set.insert_interval(5, 10).unwrap();
/// set.insert(20).unwrap();
///
/// assert_eq!(set.num_intervals(), 2);
/// assert_eq!(set.num_elements(), 11);
///
/// // Punch a hole in the middle of the first interval
/// assert_eq!(set.erase(7), true);
/// assert_eq!(set.contains(7), false);
///
/// assert_eq!(
/// 	set.iter().collect::<Vec<_>>(),
/// 	[Interval::new(0, 7), Interval::new(8, 10), Interval::new(20, 21)]
/// );
/// ```
///
/// [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
#[derive(Debug, Clone)]
pub struct IntervalSet<T> {
	inner: BTreeMap<Interval<T>, ()>,
	// exact for every point type, `[i128::MIN, i128::MAX)` included
	num_elements: u128,
	validation: Validation,
}

impl<T> IntervalSet<T>
where
	T: PointType,
{
	/// Adds a single point to the set, merging it into any intervals it
	/// touches.
	///
	/// This is equivalent to `insert_interval(value, value + 1)`.
	///
	/// # Errors
	///
	/// Returns [`InsertError::Overflow`] if `value` is the maximum value
	/// of `T`, and otherwise any error
	/// [`insert_interval()`](IntervalSet::insert_interval) returns.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::{InsertError, Interval, IntervalSet};
	///
	/// let mut set = IntervalSet::new();
	///
	/// assert_eq!(set.insert(4_u8), Ok(()));
	/// assert_eq!(set.insert(5), Ok(()));
	/// assert_eq!(
	/// 	set.insert(u8::MAX),
	/// 	Err(InsertError::Overflow { value: u8::MAX })
	/// );
	///
	/// assert_eq!(set.first(), Some(Interval::new(4, 6)));
	/// ```
	pub fn insert(&mut self, value: T) -> Result<(), InsertError<T>> {
		let end = value.up().ok_or(InsertError::Overflow { value })?;

		self.insert_interval(value, end)
	}

	/// Adds the interval `[begin, end)` to the set, merging it with the
	/// intervals directly before and after it if they touch.
	///
	/// # Errors
	///
	/// Returns [`InsertError::InvalidInterval`] if `begin >= end`.
	///
	/// In [`Validation::Strict`] mode returns [`InsertError::Overlap`] if
	/// the interval intersects any interval already in the set. In
	/// [`Validation::Unchecked`] mode this is not checked and must be
	/// guaranteed by the caller.
	///
	/// The set is not updated when an error is returned.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::{
	/// 	InsertError, Interval, IntervalSet, Validation,
	/// };
	///
	/// let mut set = IntervalSet::with_validation(Validation::Strict);
	///
	/// assert_eq!(set.insert_interval(5, 10), Ok(()));
	/// assert_eq!(set.insert_interval(0, 5), Ok(()));
	/// assert_eq!(
	/// 	set.insert_interval(8, 12),
	/// 	Err(InsertError::Overlap {
	/// 		interval: Interval::new(8, 12),
	/// 		existing: Interval::new(0, 10),
	/// 	})
	/// );
	/// assert_eq!(
	/// 	set.insert_interval(20, 20),
	/// 	Err(InsertError::InvalidInterval { begin: 20, end: 20 })
	/// );
	///
	/// assert_eq!(set.iter().collect::<Vec<_>>(), [Interval::new(0, 10)]);
	/// ```
	pub fn insert_interval(
		&mut self,
		begin: T,
		end: T,
	) -> Result<(), InsertError<T>> {
		let interval = Interval::new(begin, end);

		if !interval.is_valid() {
			return Err(InsertError::InvalidInterval { begin, end });
		}

		if self.validation == Validation::Strict {
			if let Some(existing) = self.first_overlapping(interval) {
				debug!(
					"rejected {interval:?} as it intersects with existing {existing:?}"
				);
				return Err(InsertError::Overlap { interval, existing });
			}
		}

		self.insert_merge_touching(interval);
		self.num_elements = self
			.num_elements
			.saturating_add(interval.begin.distance(interval.end));

		Ok(())
	}

	fn first_overlapping(&self, interval: Interval<T>) -> Option<Interval<T>> {
		let last = interval.end.down()?;

		self.inner
			.range(
				overlapping_comp(interval.begin),
				SearchBoundCustom::Included,
				overlapping_comp(last),
				SearchBoundCustom::Included,
			)
			.next()
			.map(|(key, _)| *key)
	}

	fn insert_merge_touching(&mut self, interval: Interval<T>) {
		let touching_begin = self
			.inner
			.get_key_value(touching_begin_comp(interval.begin))
			.map(|(key, _)| *key);
		let touching_end = self
			.inner
			.get_key_value(touching_end_comp(interval.end))
			.map(|(key, _)| *key);

		let mut merged = interval;
		if let Some(touching_begin) = touching_begin {
			self.inner.remove(touching_begin_comp(interval.begin));
			merged.begin = touching_begin.begin;
		}
		if let Some(touching_end) = touching_end {
			self.inner.remove(touching_end_comp(interval.end));
			merged.end = touching_end.end;
		}

		if merged != interval {
			trace!("merged {interval:?} into {merged:?}");
		}

		self.insert_unchecked(merged);
	}

	fn insert_unchecked(&mut self, interval: Interval<T>) {
		self.inner.insert(interval, (), starts_comp());
	}

	/// Returns `true` if the set contains the given point, and `false`
	/// if not.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::IntervalSet;
	///
	/// let mut set = IntervalSet::new();
	/// set.insert_interval(5, 10).unwrap();
	///
	/// assert_eq!(set.contains(4), false);
	/// assert_eq!(set.contains(5), true);
	/// assert_eq!(set.contains(9), true);
	/// assert_eq!(set.contains(10), false);
	/// ```
	pub fn contains(&self, value: T) -> bool {
		self.find_containing(value).is_some()
	}

	/// Returns the interval of the set which contains the given point, if
	/// any.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::{Interval, IntervalSet};
	///
	/// let mut set = IntervalSet::new();
	/// set.insert_interval(1, 4).unwrap();
	/// set.insert_interval(8, 100).unwrap();
	///
	/// assert_eq!(set.find_containing(3), Some(Interval::new(1, 4)));
	/// assert_eq!(set.find_containing(8), Some(Interval::new(8, 100)));
	/// assert_eq!(set.find_containing(4), None);
	/// assert_eq!(set.find_containing(100), None);
	/// ```
	pub fn find_containing(&self, value: T) -> Option<Interval<T>> {
		self.inner
			.get_key_value(overlapping_comp(value))
			.map(|(key, _)| *key)
	}

	/// Returns `true` if the given point is exactly the start of one of
	/// the intervals in the set.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::IntervalSet;
	///
	/// let mut set = IntervalSet::new();
	/// set.insert_interval(5, 10).unwrap();
	///
	/// assert_eq!(set.starts_interval(5), true);
	/// assert_eq!(set.starts_interval(6), false);
	/// ```
	pub fn starts_interval(&self, value: T) -> bool {
		self.inner.get_key_value(begins_at_comp(value)).is_some()
	}

	/// Removes a single point from the set, returning `true` if it was
	/// present and `false` if not.
	///
	/// Removing the first or last point of an interval shrinks it,
	/// removing the only point of an interval removes the interval and
	/// removing any other point splits the interval in two.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::{Interval, IntervalSet};
	///
	/// let mut set = IntervalSet::new();
	/// set.insert_interval(5, 10).unwrap();
	///
	/// assert_eq!(set.erase(7), true);
	/// assert_eq!(set.erase(7), false);
	/// assert_eq!(set.erase(5), true);
	///
	/// assert_eq!(
	/// 	set.iter().collect::<Vec<_>>(),
	/// 	[Interval::new(6, 7), Interval::new(8, 10)]
	/// );
	/// assert_eq!(set.num_elements(), 3);
	/// ```
	pub fn erase(&mut self, value: T) -> bool {
		let Some(containing) = self.find_containing(value) else {
			return false;
		};

		self.inner.remove(overlapping_comp(value));
		self.num_elements -= 1;

		let remaining = cut_point(containing, value);
		if remaining.len() == 2 {
			trace!("split {containing:?} at {value:?}");
		}
		// the pieces are separated by `value` so they cannot touch anything
		for interval in remaining {
			debug_assert!(interval.is_valid());
			self.insert_unchecked(interval);
		}

		return true;
	}

	/// Returns the smallest point in the set, if any.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::IntervalSet;
	///
	/// let mut set = IntervalSet::new();
	/// assert_eq!(set.min(), None);
	///
	/// set.insert_interval(3, 8).unwrap();
	/// set.insert_interval(10, 12).unwrap();
	/// assert_eq!(set.min(), Some(3));
	/// ```
	pub fn min(&self) -> Option<T> {
		self.first().map(|interval| interval.begin)
	}

	/// Returns one past the largest point in the set, if any.
	///
	/// Note that this is an exclusive bound: the largest point itself is
	/// `max() - 1`.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::IntervalSet;
	///
	/// let mut set = IntervalSet::new();
	/// assert_eq!(set.max(), None);
	///
	/// set.insert_interval(3, 8).unwrap();
	/// set.insert_interval(10, 12).unwrap();
	/// assert_eq!(set.max(), Some(12));
	/// assert_eq!(set.contains(12), false);
	/// ```
	pub fn max(&self) -> Option<T> {
		self.last().map(|interval| interval.end)
	}

	/// Returns the first interval in the set, if any.
	pub fn first(&self) -> Option<Interval<T>> {
		self.inner.first_key_value().map(|(key, _)| *key)
	}

	/// Returns the last interval in the set, if any.
	pub fn last(&self) -> Option<Interval<T>> {
		self.inner.last_key_value().map(|(key, _)| *key)
	}

	/// Returns an iterator over every interval in the set in ascending
	/// order.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::{Interval, IntervalSet};
	///
	/// let set = IntervalSet::from_slice_strict([
	/// 	Interval::new(8, 100),
	/// 	Interval::new(1, 4),
	/// ])
	/// .unwrap();
	///
	/// let mut iter = set.iter();
	///
	/// assert_eq!(iter.next(), Some(Interval::new(1, 4)));
	/// assert_eq!(iter.next(), Some(Interval::new(8, 100)));
	/// assert_eq!(iter.next(), None);
	/// ```
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = Interval<T>> + '_ {
		self.inner.iter().map(|(key, _)| *key)
	}

	/// Checks that every stored interval is non-empty, that no two stored
	/// intervals overlap or touch and that
	/// [`num_elements()`](IntervalSet::num_elements) matches the stored
	/// intervals.
	///
	/// This walks the whole set so runs in `O(n)`.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::{IntervalSet, InvariantError, Validation};
	/// use disjoint_interval_tree::Interval;
	///
	/// let mut set = IntervalSet::with_validation(Validation::Unchecked);
	///
	/// set.insert_interval(0, 5).unwrap();
	/// assert_eq!(set.check_invariants(), Ok(()));
	///
	/// // Breaks the caller's side of the contract.
	/// set.insert_interval(3, 8).unwrap();
	/// assert_eq!(
	/// 	set.check_invariants(),
	/// 	Err(InvariantError::OverlappingOrTouching {
	/// 		left: Interval::new(0, 5),
	/// 		right: Interval::new(3, 8),
	/// 	})
	/// );
	/// ```
	pub fn check_invariants(&self) -> Result<(), InvariantError<T>> {
		if let Some(interval) = self.iter().find(|interval| interval.is_empty())
		{
			return Err(InvariantError::EmptyInterval { interval });
		}

		if let Some((left, right)) = self
			.iter()
			.tuple_windows::<(Interval<T>, Interval<T>)>()
			.find(|(left, right)| left.end >= right.begin)
		{
			return Err(InvariantError::OverlappingOrTouching { left, right });
		}

		let expected = self
			.iter()
			.map(|interval| interval.begin.distance(interval.end))
			.fold(0, u128::saturating_add);
		if expected != self.num_elements {
			return Err(InvariantError::CountMismatch {
				expected,
				actual: self.num_elements,
			});
		}

		Ok(())
	}

	/// Makes a new [`IntervalSet`] from a slice of intervals, each of
	/// which is inserted with [`Validation::Strict`].
	///
	/// The returned set uses [`Validation::default()`].
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::{Interval, IntervalSet};
	///
	/// let set = IntervalSet::from_slice_strict([
	/// 	Interval::new(1, 4),
	/// 	Interval::new(4, 8),
	/// 	Interval::new(10, 100),
	/// ])
	/// .unwrap();
	///
	/// assert_eq!(set.num_intervals(), 2);
	/// ```
	pub fn from_slice_strict<const N: usize>(
		slice: [Interval<T>; N],
	) -> Result<IntervalSet<T>, InsertError<T>> {
		IntervalSet::from_iter_strict(slice.into_iter())
	}

	/// Makes a new [`IntervalSet`] from an iterator of intervals, each of
	/// which is inserted with [`Validation::Strict`].
	///
	/// The returned set uses [`Validation::default()`].
	pub fn from_iter_strict(
		iter: impl Iterator<Item = Interval<T>>,
	) -> Result<IntervalSet<T>, InsertError<T>> {
		let mut set = IntervalSet::with_validation(Validation::Strict);
		for interval in iter {
			set.insert_interval(interval.begin, interval.end)?;
		}
		set.set_validation(Validation::default());

		return Ok(set);
	}
}

impl<T> IntervalSet<T> {
	/// Makes a new, empty [`IntervalSet`] using [`Validation::default()`].
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::IntervalSet;
	///
	/// let set: IntervalSet<u64> = IntervalSet::new();
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Makes a new, empty [`IntervalSet`] using the given validation mode.
	pub fn with_validation(validation: Validation) -> Self {
		IntervalSet {
			inner: BTreeMap::default(),
			num_elements: 0,
			validation,
		}
	}

	/// Returns the validation mode of the set.
	pub fn validation(&self) -> Validation {
		self.validation
	}

	/// Changes the validation mode used by future insertions.
	pub fn set_validation(&mut self, validation: Validation) {
		self.validation = validation;
	}

	/// Returns the number of points in the set.
	///
	/// This is maintained incrementally so runs in `O(1)`. It saturates
	/// at [`usize::MAX`] for sets of 64 and 128-bit integers holding more
	/// points than that, see
	/// [`num_elements_u128()`](IntervalSet::num_elements_u128) for the
	/// exact count.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::IntervalSet;
	///
	/// let mut set = IntervalSet::new();
	///
	/// set.insert_interval(0, 5).unwrap();
	/// set.insert_interval(10, 12).unwrap();
	///
	/// assert_eq!(set.num_elements(), 7);
	/// ```
	pub fn num_elements(&self) -> usize {
		usize::try_from(self.num_elements).unwrap_or(usize::MAX)
	}

	/// Returns the exact number of points in the set.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::IntervalSet;
	///
	/// let mut set = IntervalSet::new();
	///
	/// set.insert_interval(i128::MIN, 0).unwrap();
	///
	/// assert_eq!(set.num_elements(), usize::MAX);
	/// assert_eq!(set.num_elements_u128(), 1_u128 << 127);
	/// ```
	pub fn num_elements_u128(&self) -> u128 {
		self.num_elements
	}

	/// Returns the number of intervals in the set.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::IntervalSet;
	///
	/// let mut set = IntervalSet::new();
	///
	/// set.insert_interval(0, 5).unwrap();
	/// set.insert_interval(10, 12).unwrap();
	///
	/// assert_eq!(set.num_intervals(), 2);
	/// ```
	pub fn num_intervals(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the set contains no points, and `false` if it
	/// does.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Removes every point from the set. The validation mode is kept.
	pub fn clear(&mut self) {
		self.inner = BTreeMap::default();
		self.num_elements = 0;
	}

	/// Swaps the contents of two sets in `O(1)`, validation modes
	/// included.
	///
	/// # Examples
	/// ```
	/// use disjoint_interval_tree::IntervalSet;
	///
	/// let mut a = IntervalSet::new();
	/// let mut b = IntervalSet::new();
	/// a.insert_interval(0, 10).unwrap();
	///
	/// a.swap(&mut b);
	///
	/// assert_eq!(a.is_empty(), true);
	/// assert_eq!(b.num_elements(), 10);
	/// ```
	pub fn swap(&mut self, other: &mut Self) {
		core::mem::swap(self, other);
	}
}

// Helper Functions ==========================

fn first<A, B>((a, _): (A, B)) -> A {
	a
}

// Trait Impls ==========================

impl<T> PartialEq for IntervalSet<T>
where
	T: PartialEq,
{
	/// Two sets are equal if they hold the same points, regardless of
	/// their validation modes.
	fn eq(&self, other: &Self) -> bool {
		self.num_elements == other.num_elements
			&& self.inner.len() == other.inner.len()
			&& self.inner.iter().map(first).eq(other.inner.iter().map(first))
	}
}
impl<T> Eq for IntervalSet<T> where T: Eq {}

impl<T> IntoIterator for IntervalSet<T> {
	type Item = Interval<T>;
	type IntoIter = IntoIter<T>;
	fn into_iter(self) -> Self::IntoIter {
		return IntoIter {
			inner: self.inner.into_iter(),
		};
	}
}
/// An owning iterator over the intervals of an [`IntervalSet`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`IntervalSet`] (provided by the [`IntoIterator`] trait). See
/// its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<T> {
	inner: BTreeMapIntoIter<Interval<T>, ()>,
}
impl<T> Iterator for IntoIter<T> {
	type Item = Interval<T>;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(first)
	}
}
impl<T> DoubleEndedIterator for IntoIter<T> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back().map(first)
	}
}

impl<T> Default for IntervalSet<T> {
	fn default() -> Self {
		IntervalSet::with_validation(Validation::default())
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{Interval, IntervalSet, PointType, Validation};

	impl<T> Serialize for IntervalSet<T>
	where
		T: PointType + Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.num_intervals()))?;
			for interval in self.iter() {
				seq.serialize_element(&interval)?;
			}
			seq.end()
		}
	}

	impl<'de, T> Deserialize<'de> for IntervalSet<T>
	where
		T: PointType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(IntervalSetVisitor { t: PhantomData })
		}
	}

	struct IntervalSetVisitor<T> {
		t: PhantomData<T>,
	}

	impl<'de, T> Visitor<'de> for IntervalSetVisitor<T>
	where
		T: PointType + Deserialize<'de>,
	{
		type Value = IntervalSet<T>;

		fn expecting(
			&self,
			formatter: &mut alloc::fmt::Formatter,
		) -> alloc::fmt::Result {
			formatter.write_str("an IntervalSet")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut set = IntervalSet::with_validation(Validation::Strict);
			while let Some(interval) = access.next_element::<Interval<T>>()? {
				set.insert_interval(interval.begin, interval.end)
					.map_err(<A::Error as serde::de::Error>::custom)?;
			}
			set.set_validation(Validation::default());
			Ok(set)
		}
	}
}
