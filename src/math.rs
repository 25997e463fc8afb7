//! Numeric helpers, and the `Number` capability shared with `range`.

use num_traits::{Num, ToPrimitive};

/// The arithmetic `range_with_step` needs: zero and one, subtraction,
/// addition and division, ordering, and a conversion to `usize` for the size of
/// the result. Every primitive integer and float type is a `Number`.
pub trait Number: Num + PartialOrd + Copy + ToPrimitive {}
impl<T: Num + PartialOrd + Copy + ToPrimitive> Number for T {}

/// The absolute value of `num`. (For an unsigned type this is `num` itself.)
#[must_use]
pub fn abs<T: Number>(num: T) -> T {
    if num < T::zero() {
        T::zero() - num
    } else {
        num
    }
}

/// The greatest of `nums`, or `None` if `nums` is empty. When the greatest
/// value occurs more than once, the first is returned.
#[must_use]
pub fn max<T: PartialOrd + Copy>(nums: &[T]) -> Option<T> {
    let (&first, rest) = nums.split_first()?;
    Some(rest.iter().fold(first, |best, &n| if n > best { n } else { best }))
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn abs_of_signed_unsigned_and_float() {
        assert_eq!(abs(-3), 3);
        assert_eq!(abs(3), 3);
        assert_eq!(abs(7_u8), 7);
        assert_eq!(abs(-2.5_f64), 2.5);
    }

    #[test]
    fn max_of_numbers() {
        assert_eq!(max(&[1, 3, 2]), Some(3));
        assert_eq!(max(&[-1.5, -0.5]), Some(-0.5));
        assert_eq!(max::<i32>(&[]), None);
    }
}
