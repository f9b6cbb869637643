//! Floating point fast approximations for use inside the per-sample loop.
//!
//! Each family comes in two tiers: "quicker" is the cheapest and loosest,
//! "quick" costs a few more operations and is noticeably closer to the real
//! function.  None of these check their input.

use crate::Float;

/// Approximate tanh(x) with a truncated continued fraction.
///
/// Odd and monotonic, and within about 3e-4 of tanh for `|x| <= 1`.  It is
/// *not* bounded: past `|x| ~= 2.2` the output exceeds 1, and it grows like
/// `x / 6` for large inputs, so only use this where the input is known to be
/// small.
#[inline]
pub fn quicker_tanh<T: Float>(x: T) -> T {
    let square = x * x;
    x / (T::ONE + square / (T::from_u16(3) + square / T::from_u16(5)))
}

/// Approximate tanh(x) with an odd rational function.
///
/// Within about 5e-4 of tanh for `|x| <= 10` and monotonic for `|x| <= 4.5`.
/// The magnitude creeps up towards `0.8212 / 0.8146 ~= 1.008` as `|x|` grows.
#[inline]
pub fn quick_tanh<T: Float>(x: T) -> T {
    let n1 = T::lit(2.455_507_507_029_56);
    let n3 = T::lit(0.893_229_853_513_558);
    let n4 = T::lit(0.821_226_666_969_744);
    let d0 = T::lit(2.445_066_346_522_99);
    let d2 = T::lit(0.814_642_734_961_073);

    let abs_x = x.abs();
    let square = x * x;
    let num = x * (n1 + n1 * abs_x + square * (n3 + n4 * abs_x));
    let den = d0 + (d0 + square) * (x + d2 * x * abs_x).abs();
    num / den
}

/// Parabolic approximation of `sin(2*pi*phase)` for `phase` in `[-0.5, 0.5]`
#[inline]
pub fn quicker_sin<T: Float>(phase: T) -> T {
    phase * (T::from_u16(8) - T::from_u16(16) * phase.abs())
}

/// [quicker_sin] with a correction term, within about 1e-3 of
/// `sin(2*pi*phase)` for `phase` in `[-0.5, 0.5]`
#[inline]
pub fn quick_sin<T: Float>(phase: T) -> T {
    sin_correction(quicker_sin(phase))
}

/// Parabolic approximation of `sin(2*pi*(0.5 - phase))`, i.e.
/// `sin(2*pi*phase)` for `phase` in `[0, 1]`
#[inline]
pub fn quicker_sin1<T: Float>(phase: T) -> T {
    quicker_sin(T::ONE_HALF - phase)
}

/// [quicker_sin1] with the same correction term as [quick_sin]
#[inline]
pub fn quick_sin1<T: Float>(phase: T) -> T {
    sin_correction(quicker_sin1(phase))
}

// Pulls the parabola towards a sine.  Coefficients sum to 1 so the peaks stay
// at +/-1.
#[inline]
fn sin_correction<T: Float>(approx: T) -> T {
    approx * (T::lit(0.776) + T::lit(0.224) * approx.abs())
}
