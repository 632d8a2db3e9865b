//! A module containing the [`DiscretePoint`] trait and trait impls for the
//! primitive integer datatypes.

use core::fmt::Debug;

/// A trait for the discrete, finite integer types an
/// [`IntervalSet`](crate::IntervalSet) can store.
///
/// It is implemented for every primitive integer type and there should be
/// no need to implement it yourself.
pub trait DiscretePoint: Sized {
	/// The smallest value greater than `self` if one exists.
	fn up(self) -> Option<Self>;
	/// The greatest value smaller than `self` if one exists.
	fn down(self) -> Option<Self>;
	/// The number of values in `self..end`.
	///
	/// Returns `0` if `end <= self`. Every primitive integer range fits in
	/// a `u128`, `i128::MIN..i128::MAX` included.
	fn distance(self, end: Self) -> u128;
}

/// The marker trait for valid point types, a blanket implementation is
/// provided for all types which implement this traits' super-traits so
/// you shouldn't need to implement this yourself.
pub trait PointType: Ord + Copy + Debug + DiscretePoint {}
impl<T> PointType for T where T: Ord + Copy + Debug + DiscretePoint {}

macro_rules! impl_discrete_point {
	($($t:ident),* $(,)?) => {
		$(
			impl DiscretePoint for $t {
				fn up(self) -> Option<Self> {
					self.checked_add(1)
				}
				fn down(self) -> Option<Self> {
					self.checked_sub(1)
				}
				fn distance(self, end: Self) -> u128 {
					if end <= self {
						return 0;
					}
					u128::try_from(end.abs_diff(self)).unwrap_or(u128::MAX)
				}
			}
		)*
	};
}

impl_discrete_point!(
	u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,
);

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn up_and_down_stop_at_the_type_bounds() {
		assert_eq!(5_u8.up(), Some(6));
		assert_eq!(u8::MAX.up(), None);
		assert_eq!(0_u8.down(), None);
		assert_eq!(i8::MIN.down(), None);
		assert_eq!((-1_i8).up(), Some(0));
	}

	#[test]
	fn distance_tests() {
		assert_eq!(3_u32.distance(8), 5);
		assert_eq!(8_u32.distance(3), 0);
		assert_eq!(4_i64.distance(4), 0);
		// wider than the type itself
		assert_eq!(i8::MIN.distance(i8::MAX), 255);
		assert_eq!((-100_i8).distance(100), 200);
		assert_eq!(0_u128.distance(u128::MAX), u128::MAX);
		assert_eq!(i128::MIN.distance(i128::MAX), u128::MAX);
		assert_eq!(i128::MIN.distance(0), 1_u128 << 127);
		assert_eq!(
			isize::MIN.distance(isize::MAX),
			u128::try_from(usize::MAX).unwrap()
		);
	}
}
