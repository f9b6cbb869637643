//! Whole-buffer primitives.
//!
//! These are deliberately plain loops over slices so that the compiler can
//! auto-vectorize them.  They never allocate and an empty slice is a no-op.

use crate::util::close_to_zero;
use crate::Float;
use num_traits::Zero;

/// Returns true if every sample in `buffer` is within [crate::EPSILON] of
/// zero.  Stops at the first sample that isn't.  An empty buffer is silent.
#[inline]
pub fn is_silent<T: Float>(buffer: &[T]) -> bool {
    buffer.iter().all(|&smp| close_to_zero(smp))
}

/// Overwrite every element of `buffer` with zero.  Works for integer buffers
/// as well as samples.
#[inline]
pub fn zero_buffer<T: Zero + Copy>(buffer: &mut [T]) {
    for smp in buffer.iter_mut() {
        *smp = T::zero();
    }
}

/// Copy `source` into `dest`, element by element.  If the lengths differ only
/// the common prefix is copied.
#[inline]
pub fn copy_buffer<T: Copy>(dest: &mut [T], source: &[T]) {
    for (out, smp) in dest.iter_mut().zip(source) {
        *out = *smp;
    }
}
