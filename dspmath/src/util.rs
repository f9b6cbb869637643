//! Various utility functions

use crate::Float;

/// Returns true if `value` is within [crate::EPSILON] of zero.  NaN is not.
#[inline]
pub fn close_to_zero<T: Float>(value: T) -> bool {
    value <= T::SILENCE_EPSILON && value >= -T::SILENCE_EPSILON
}

/// The interval from `base` to `freq`, in cents.  Positive when `freq` is
/// sharp of `base`.
#[inline]
pub fn calculate_cents<T: Float>(base: T, freq: T) -> T {
    T::CENTS_PER_OCTAVE * (freq / base).log2()
}
