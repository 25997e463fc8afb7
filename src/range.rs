//! Arithmetic sequences over half-open intervals.

use crate::error::{Error, Result};
use crate::math::{abs, Number};

/// Returns `[start, start + 1, ...]`, stopping before `end`.
///
/// Fails with [`Error::InvalidRange`] when `start > end`; `start == end` gives
/// an empty sequence.
///
/// ```
/// assert_eq!(sift::range(0, 3), Ok(vec![0, 1, 2]));
/// assert_eq!(sift::range(3, 2), Err(sift::Error::InvalidRange));
/// ```
pub fn range<T: Number>(start: T, end: T) -> Result<Vec<T>> {
    if start > end {
        return Err(Error::InvalidRange);
    }
    range_with_step(start, end, T::one())
}

/// Returns the sequence that begins at `start` and advances by `step` towards
/// `end`, which it never reaches. `step` may be negative, for a descending
/// sequence.
///
/// The length is `floor(|end - start| / |step|)`, so when the distance is not a
/// multiple of the step the partial last step is dropped, and `start == end`
/// gives an empty sequence.
///
/// Fails with [`Error::ZeroStep`] when `step` is zero, and with
/// [`Error::DirectionMismatch`] when `step` points away from `end`. The length
/// is measured outside `T`, so a span wider than `T` can hold is still counted
/// in full; a length that cannot be represented as a `usize` (as with a `NaN`
/// bound) yields an empty sequence.
pub fn range_with_step<T: Number>(start: T, end: T, step: T) -> Result<Vec<T>> {
    let zero = T::zero();
    if step == zero {
        return Err(Error::ZeroStep);
    }
    if (start < end && step < zero) || (start > end && step > zero) {
        return Err(Error::DirectionMismatch);
    }

    let size = step_count(start, end, step);
    let mut result = Vec::with_capacity(size);
    let mut next = start;
    for _ in 0..size {
        result.push(next);
        next = next + step;
    }
    Ok(result)
}

/// Number of steps from `start` towards `end`, for a step whose direction has
/// already been checked. Integer spans are measured in `i128`, so a span wider
/// than `T` itself (`-100_i8` to `100_i8`) still counts every step.
fn step_count<T: Number>(start: T, end: T, step: T) -> usize {
    if is_integral::<T>() {
        let wide = (start.to_i128(), end.to_i128(), step.to_i128());
        if let (Some(start), Some(end), Some(step)) = wide {
            return end
                .checked_sub(start)
                .and_then(|span| span.checked_div(step))
                .and_then(|count| usize::try_from(count).ok())
                .unwrap_or(0);
        }
    }
    // Floats, and unsigned values past `i128::MAX`. Subtract the smaller bound
    // from the larger, so unsigned types don't wrap.
    let distance = if start < end { end - start } else { start - end };
    (distance / abs(step)).to_usize().unwrap_or(0)
}

/// Integer division truncates, so `1 / 2` is zero only for integer types.
fn is_integral<T: Number>() -> bool {
    let one = T::one();
    one / (one + one) == T::zero()
}
