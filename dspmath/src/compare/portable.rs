//! Plain-comparison backend.  The comparisons are written in the same operand
//! order as the SSE2 instructions so NaN and signed zero behave identically.

/// `a` if `a < b`, otherwise `b`
#[inline]
pub fn min_f64(a: f64, b: f64) -> f64 {
    if a < b {
        a
    } else {
        b
    }
}

/// `a` if `a > b`, otherwise `b`
#[inline]
pub fn max_f64(a: f64, b: f64) -> f64 {
    if a > b {
        a
    } else {
        b
    }
}

/// `min_f64(max_f64(value, min), max)`
#[inline]
pub fn clamp_f64(value: f64, min: f64, max: f64) -> f64 {
    min_f64(max_f64(value, min), max)
}

/// `a` if `a < b`, otherwise `b`
#[inline]
pub fn min_f32(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

/// `a` if `a > b`, otherwise `b`
#[inline]
pub fn max_f32(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// `min_f32(max_f32(value, min), max)`
#[inline]
pub fn clamp_f32(value: f32, min: f32, max: f32) -> f32 {
    min_f32(max_f32(value, min), max)
}
