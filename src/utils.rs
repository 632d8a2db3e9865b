use core::cmp::Ordering;

use smallvec::SmallVec;

use crate::{Interval, PointType};

pub(crate) fn cmp_point_with_interval<T>(
	point: T,
	interval: Interval<T>,
) -> Ordering
where
	T: PointType,
{
	if point < interval.begin {
		Ordering::Less
	} else if point >= interval.end {
		Ordering::Greater
	} else {
		Ordering::Equal
	}
}

// The stored intervals never overlap or touch so every comparator below is
// monotone over the keys of the map.

pub(crate) fn starts_comp<T>() -> impl FnMut(&Interval<T>, &Interval<T>) -> Ordering
where
	T: PointType,
{
	|inner_interval: &Interval<T>, new_interval: &Interval<T>| {
		new_interval.begin.cmp(&inner_interval.begin)
	}
}
pub(crate) fn overlapping_comp<T>(point: T) -> impl FnMut(&Interval<T>) -> Ordering
where
	T: PointType,
{
	move |inner_interval: &Interval<T>| {
		cmp_point_with_interval(point, *inner_interval)
	}
}
pub(crate) fn begins_at_comp<T>(begin: T) -> impl FnMut(&Interval<T>) -> Ordering
where
	T: PointType,
{
	move |inner_interval: &Interval<T>| begin.cmp(&inner_interval.begin)
}
/// Finds the interval ending exactly where `begin` starts.
pub(crate) fn touching_begin_comp<T>(begin: T) -> impl FnMut(&Interval<T>) -> Ordering
where
	T: PointType,
{
	move |inner_interval: &Interval<T>| begin.cmp(&inner_interval.end)
}
/// Finds the interval starting exactly where `end` stops.
pub(crate) fn touching_end_comp<T>(end: T) -> impl FnMut(&Interval<T>) -> Ordering
where
	T: PointType,
{
	move |inner_interval: &Interval<T>| end.cmp(&inner_interval.begin)
}

/// Removes a single point from `base` returning the (at most two) valid
/// intervals left over in ascending order.
///
/// `point` must be contained in `base`.
pub(crate) fn cut_point<T>(
	base: Interval<T>,
	point: T,
) -> SmallVec<[Interval<T>; 2]>
where
	T: PointType,
{
	debug_assert!(base.contains(point));

	let mut result = SmallVec::new();

	let before_cut = Interval::new(base.begin, point);
	if before_cut.is_valid() {
		result.push(before_cut);
	}
	// point < base.end so this can only overflow on a corrupt base
	if let Some(after_begin) = point.up() {
		let after_cut = Interval::new(after_begin, base.end);
		if after_cut.is_valid() {
			result.push(after_cut);
		}
	}

	return result;
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn cmp_point_with_interval_tests() {
		let interval = Interval::new(4, 8);
		assert_eq!(cmp_point_with_interval(3, interval), Ordering::Less);
		assert_eq!(cmp_point_with_interval(4, interval), Ordering::Equal);
		assert_eq!(cmp_point_with_interval(7, interval), Ordering::Equal);
		assert_eq!(cmp_point_with_interval(8, interval), Ordering::Greater);
	}

	#[test]
	fn cut_point_tests() {
		assert_eq!(cut_point(Interval::new(5, 10), 7).as_slice(), [
			Interval::new(5, 7),
			Interval::new(8, 10)
		]);
		assert_eq!(cut_point(Interval::new(5, 10), 5).as_slice(), [
			Interval::new(6, 10)
		]);
		assert_eq!(cut_point(Interval::new(5, 10), 9).as_slice(), [
			Interval::new(5, 9)
		]);
		assert!(cut_point(Interval::new(42, 43), 42).is_empty());
	}

	#[test]
	fn cut_point_at_the_type_maximum() {
		assert_eq!(cut_point(Interval::new(250_u8, 255), 254).as_slice(), [
			Interval::new(250, 254)
		]);
	}
}
