//! Min/max/clamp primitives and the float decomposition helper.
//!
//! There are two backends with identical semantics:
//!
//! - [sse2] uses the scalar `minsd`/`maxsd`/`minss`/`maxss` instructions and is
//!   selected whenever the target has SSE2 (unless the `portable` feature is
//!   enabled),
//! - [portable] uses plain comparisons and works everywhere.
//!
//! Both follow the operand order of the SSE2 instructions: `min(a, b)` is
//! `if a < b { a } else { b }` and `max(a, b)` is `if a > b { a } else { b }`.
//! If either argument is NaN the comparison is false, so the *second* argument
//! is returned.  For [clamp] this means a NaN value comes out as the lower
//! bound.  NaN bounds give garbage, but the same garbage on both backends.
//! Note that this differs from `f64::min`/`f64::max`, which ignore NaN on
//! either side.

use crate::Float;
use cfg_if::cfg_if;

pub mod portable;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))]
pub mod sse2;

cfg_if! {
    if #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2",
        not(feature = "portable")
    ))] {
        pub(crate) use sse2 as backend;
        pub(crate) const SIMD_BACKEND: bool = true;
    } else {
        pub(crate) use portable as backend;
        pub(crate) const SIMD_BACKEND: bool = false;
    }
}

/// Returns the smaller of `a` and `b`.  If either is NaN, returns `b`.
#[inline]
pub fn min<T: Float>(a: T, b: T) -> T {
    a.fmin(b)
}

/// Returns the larger of `a` and `b`.  If either is NaN, returns `b`.
#[inline]
pub fn max<T: Float>(a: T, b: T) -> T {
    a.fmax(b)
}

/// Limits `value` to the range `[min, max]`.
///
/// The ordering of `min` and `max` is the caller's responsibility: if
/// `min > max` the result is `max`.  This never panics.
#[inline]
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    value.fclamp(min, max)
}

/// Integer version of [clamp], with the same behavior for `min > max`
#[inline]
pub fn clamp_int(value: i32, min: i32, max: i32) -> i32 {
    core::cmp::min(core::cmp::max(value, min), max)
}

/// Split `value` into its integral and fractional parts, like C's `modf`.
/// The integral part is written to `integral` and the fractional part is
/// returned.  Both carry the sign of `value`; an infinite value has a
/// fractional part of (signed) zero.
#[inline]
pub fn modf<T: Float>(value: T, integral: &mut T) -> T {
    let int = value.trunc();
    *integral = int;
    if value.is_infinite() {
        return T::ZERO.copysign(value);
    }
    (value - int).copysign(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))]
    const SPECIALS_F64: [f64; 12] = [
        0.0,
        -0.0,
        1.0,
        -1.0,
        f64::MIN_POSITIVE,
        f64::MIN_POSITIVE / 4.0, // denormal
        f64::MAX,
        f64::MIN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
        1e-16,
    ];

    #[test]
    fn clamp_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(0xc1a3);
        for _ in 0..10000 {
            let a: f64 = rng.gen_range(-1000.0..1000.0);
            let b: f64 = rng.gen_range(-1000.0..1000.0);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let value: f64 = rng.gen_range(-2000.0..2000.0);
            let clamped = clamp(value, lo, hi);
            assert!(clamped >= lo && clamped <= hi);
            if value >= lo && value <= hi {
                assert_eq!(clamped, value);
            } else if value < lo {
                assert_eq!(clamped, lo);
            } else {
                assert_eq!(clamped, hi);
            }
        }
    }

    #[test]
    fn clamp_stays_in_range_f32() {
        let mut rng = SmallRng::seed_from_u64(0xf32);
        for _ in 0..10000 {
            let lo: f32 = rng.gen_range(-10.0..0.0);
            let hi: f32 = rng.gen_range(0.0..10.0);
            let value: f32 = rng.gen_range(-20.0..20.0);
            let clamped = clamp(value, lo, hi);
            assert!(clamped >= lo && clamped <= hi);
            if value >= lo && value <= hi {
                assert_eq!(clamped, value);
            }
        }
    }

    #[test]
    fn min_max_pick_the_right_operand() {
        assert_eq!(min(1.0, 2.0), 1.0);
        assert_eq!(min(2.0f32, 1.0), 1.0);
        assert_eq!(max(1.0, 2.0), 2.0);
        assert_eq!(max(2.0f32, 1.0), 2.0);
        assert_eq!(min(-3.5, -3.5), -3.5);
    }

    #[test]
    fn nan_second_operand_wins() {
        assert_eq!(min(f64::NAN, 1.0), 1.0);
        assert!(min(1.0, f64::NAN).is_nan());
        assert_eq!(max(f32::NAN, 1.0), 1.0);
        assert!(max(1.0f32, f32::NAN).is_nan());
        assert_eq!(clamp(f64::NAN, -1.0, 1.0), -1.0);
        assert_eq!(clamp(f32::NAN, -1.0, 1.0), -1.0);
    }

    #[test]
    fn signed_zero_follows_operand_order() {
        assert!(min(-0.0f64, 0.0).is_sign_positive());
        assert!(min(0.0f64, -0.0).is_sign_negative());
        assert!(max(-0.0f32, 0.0).is_sign_positive());
    }

    #[test]
    fn inverted_range_returns_max() {
        assert_eq!(clamp(0.0, 1.0, -1.0), -1.0);
        assert_eq!(clamp(5.0f32, 1.0, -1.0), -1.0);
        assert_eq!(clamp_int(0, 1, -1), -1);
    }

    #[test]
    fn clamp_int_bounds() {
        assert_eq!(clamp_int(5, 0, 10), 5);
        assert_eq!(clamp_int(-5, 0, 10), 0);
        assert_eq!(clamp_int(15, 0, 10), 10);
        assert_eq!(clamp_int(i32::MIN, -1, 1), -1);
        assert_eq!(clamp_int(i32::MAX, -1, 1), 1);
    }

    #[test]
    fn modf_splits_like_c() {
        let mut int = 0.0f64;
        assert_eq!(modf(3.75, &mut int), 0.75);
        assert_eq!(int, 3.0);
        assert_eq!(modf(-2.5, &mut int), -0.5);
        assert_eq!(int, -2.0);
        let frac: f64 = modf(-3.0, &mut int);
        assert_eq!(frac, 0.0);
        assert!(frac.is_sign_negative());
        assert_eq!(int, -3.0);
        let frac = modf(f64::NEG_INFINITY, &mut int);
        assert_eq!(frac, 0.0);
        assert!(frac.is_sign_negative());
        assert_eq!(int, f64::NEG_INFINITY);
        assert!(modf(f64::NAN, &mut int).is_nan());
        assert!(int.is_nan());

        let mut intf = 0.0f32;
        assert_eq!(modf(1.25f32, &mut intf), 0.25);
        assert_eq!(intf, 1.0);
        assert_eq!(modf(f32::INFINITY, &mut intf), 0.0);
        assert_eq!(intf, f32::INFINITY);
    }

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))]
    #[test]
    fn backends_are_bit_identical_f64() {
        let mut rng = SmallRng::seed_from_u64(0xb17);
        let mut values: std::vec::Vec<f64> = SPECIALS_F64.to_vec();
        values.extend((0..64).map(|_| rng.gen_range(-1e6..1e6)));
        for &a in &values {
            for &b in &values {
                assert_eq!(
                    sse2::min_f64(a, b).to_bits(),
                    portable::min_f64(a, b).to_bits()
                );
                assert_eq!(
                    sse2::max_f64(a, b).to_bits(),
                    portable::max_f64(a, b).to_bits()
                );
                for &c in SPECIALS_F64.iter() {
                    assert_eq!(
                        sse2::clamp_f64(a, b, c).to_bits(),
                        portable::clamp_f64(a, b, c).to_bits()
                    );
                }
            }
        }
    }

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))]
    #[test]
    fn backends_are_bit_identical_f32() {
        let mut rng = SmallRng::seed_from_u64(0xb17f);
        let mut values: std::vec::Vec<f32> = SPECIALS_F64.iter().map(|&x| x as f32).collect();
        values.push(f32::MIN_POSITIVE / 8.0);
        values.extend((0..64).map(|_| rng.gen_range(-1e4..1e4)));
        for &a in &values {
            for &b in &values {
                assert_eq!(
                    sse2::min_f32(a, b).to_bits(),
                    portable::min_f32(a, b).to_bits()
                );
                assert_eq!(
                    sse2::max_f32(a, b).to_bits(),
                    portable::max_f32(a, b).to_bits()
                );
                let (lo, hi) = (-1.0f32, 1.0f32);
                assert_eq!(
                    sse2::clamp_f32(a, lo, hi).to_bits(),
                    portable::clamp_f32(a, lo, hi).to_bits()
                );
                assert_eq!(
                    sse2::clamp_f32(a, b, hi).to_bits(),
                    portable::clamp_f32(a, b, hi).to_bits()
                );
            }
        }
    }
}
