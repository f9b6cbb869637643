//! Scalar SSE2 backend.  `minsd`/`minss` return the second operand unless the
//! first compares less; `maxsd`/`maxss` likewise with greater.
//!
//! This module is only compiled when the `sse2` target feature is enabled at
//! compile time, which is what makes the intrinsic calls below sound.

// Intrinsics are safe to call under a statically enabled target feature on
// newer compilers; the `unsafe` blocks are kept for older ones.
#![allow(unused_unsafe)]

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// `minsd`
#[inline]
pub fn min_f64(a: f64, b: f64) -> f64 {
    unsafe { _mm_cvtsd_f64(_mm_min_sd(_mm_set_sd(a), _mm_set_sd(b))) }
}

/// `maxsd`
#[inline]
pub fn max_f64(a: f64, b: f64) -> f64 {
    unsafe { _mm_cvtsd_f64(_mm_max_sd(_mm_set_sd(a), _mm_set_sd(b))) }
}

/// `minsd(maxsd(value, min), max)`
#[inline]
pub fn clamp_f64(value: f64, min: f64, max: f64) -> f64 {
    unsafe {
        _mm_cvtsd_f64(_mm_min_sd(
            _mm_max_sd(_mm_set_sd(value), _mm_set_sd(min)),
            _mm_set_sd(max),
        ))
    }
}

/// `minss`
#[inline]
pub fn min_f32(a: f32, b: f32) -> f32 {
    unsafe { _mm_cvtss_f32(_mm_min_ss(_mm_set_ss(a), _mm_set_ss(b))) }
}

/// `maxss`
#[inline]
pub fn max_f32(a: f32, b: f32) -> f32 {
    unsafe { _mm_cvtss_f32(_mm_max_ss(_mm_set_ss(a), _mm_set_ss(b))) }
}

/// `minss(maxss(value, min), max)`
#[inline]
pub fn clamp_f32(value: f32, min: f32, max: f32) -> f32 {
    unsafe {
        _mm_cvtss_f32(_mm_min_ss(
            _mm_max_ss(_mm_set_ss(value), _mm_set_ss(min)),
            _mm_set_ss(max),
        ))
    }
}
