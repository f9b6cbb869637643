use num_traits::Float as NumTraitsFloat;

/// Types must implement this trait to be used with the generic functions in
/// this crate.  Implementations are provided for `f32` and `f64`.
///
/// The constants mirror the crate-level `f64` constants at this type's
/// precision, so generic code never has to convert (or unwrap) at runtime.
pub trait Float: NumTraitsFloat + From<u16> + Default + Copy + Send + Sync {
    /// 0
    const ZERO: Self;
    /// 1
    const ONE: Self;
    /// 10
    const TEN: Self;
    /// 1/2
    const ONE_HALF: Self;
    /// Silence threshold, see [crate::EPSILON]
    const SILENCE_EPSILON: Self;
    /// See [crate::DB_GAIN_CONVERSION_MULT]
    const DB_GAIN_CONVERSION_MULT: Self;
    /// See [crate::MIDI_0_FREQUENCY]
    const MIDI_0_FREQUENCY: Self;
    /// See [crate::NOTES_PER_OCTAVE]
    const NOTES_PER_OCTAVE: Self;
    /// See [crate::CENTS_PER_NOTE]
    const CENTS_PER_NOTE: Self;
    /// See [crate::CENTS_PER_OCTAVE]
    const CENTS_PER_OCTAVE: Self;
    /// See [crate::MIN_Q_POW]
    const MIN_Q_POW: Self;
    /// See [crate::MAX_Q_POW]
    const MAX_Q_POW: Self;
    /// Creates a value of this type from a u16.  Functionality provided by
    /// the trait (uses the `From<u16>` implementation)
    fn from_u16(x: u16) -> Self {
        <Self as From<u16>>::from(x)
    }
    /// Creates a value of this type from an `f64` literal, rounding if this
    /// type is narrower.  Used for approximation coefficients.
    fn lit(x: f64) -> Self;
    /// Returns the smaller of self and `other`, or `other` if either is NaN
    fn fmin(self, other: Self) -> Self;
    /// Returns the larger of self and `other`, or `other` if either is NaN
    fn fmax(self, other: Self) -> Self;
    /// Limits self to `[min, max]`.  A NaN self yields `min`.
    fn fclamp(self, min: Self, max: Self) -> Self;
}

impl Float for f32 {
    const ZERO: f32 = 0.0f32;
    const ONE: f32 = 1.0f32;
    const TEN: f32 = 10.0f32;
    const ONE_HALF: f32 = 0.5f32;
    const SILENCE_EPSILON: f32 = crate::EPSILON as f32;
    const DB_GAIN_CONVERSION_MULT: f32 = crate::DB_GAIN_CONVERSION_MULT as f32;
    const MIDI_0_FREQUENCY: f32 = crate::MIDI_0_FREQUENCY as f32;
    const NOTES_PER_OCTAVE: f32 = crate::NOTES_PER_OCTAVE as f32;
    const CENTS_PER_NOTE: f32 = crate::CENTS_PER_NOTE as f32;
    const CENTS_PER_OCTAVE: f32 = crate::CENTS_PER_OCTAVE as f32;
    const MIN_Q_POW: f32 = crate::MIN_Q_POW as f32;
    const MAX_Q_POW: f32 = crate::MAX_Q_POW as f32;
    fn lit(x: f64) -> Self {
        x as f32
    }
    fn fmin(self, other: Self) -> Self {
        crate::compare::backend::min_f32(self, other)
    }
    fn fmax(self, other: Self) -> Self {
        crate::compare::backend::max_f32(self, other)
    }
    fn fclamp(self, min: Self, max: Self) -> Self {
        crate::compare::backend::clamp_f32(self, min, max)
    }
}

impl Float for f64 {
    const ZERO: f64 = 0.0f64;
    const ONE: f64 = 1.0f64;
    const TEN: f64 = 10.0f64;
    const ONE_HALF: f64 = 0.5f64;
    const SILENCE_EPSILON: f64 = crate::EPSILON;
    const DB_GAIN_CONVERSION_MULT: f64 = crate::DB_GAIN_CONVERSION_MULT;
    const MIDI_0_FREQUENCY: f64 = crate::MIDI_0_FREQUENCY;
    const NOTES_PER_OCTAVE: f64 = crate::NOTES_PER_OCTAVE as f64;
    const CENTS_PER_NOTE: f64 = crate::CENTS_PER_NOTE as f64;
    const CENTS_PER_OCTAVE: f64 = crate::CENTS_PER_OCTAVE as f64;
    const MIN_Q_POW: f64 = crate::MIN_Q_POW;
    const MAX_Q_POW: f64 = crate::MAX_Q_POW;
    fn lit(x: f64) -> Self {
        x
    }
    fn fmin(self, other: Self) -> Self {
        crate::compare::backend::min_f64(self, other)
    }
    fn fmax(self, other: Self) -> Self {
        crate::compare::backend::max_f64(self, other)
    }
    fn fclamp(self, min: Self, max: Self) -> Self {
        crate::compare::backend::clamp_f64(self, min, max)
    }
}
