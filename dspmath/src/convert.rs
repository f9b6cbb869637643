//! Conversions between musical and physical units.
//!
//! These are exact (as exact as the float math allows) and do no validation:
//! passing a gain or frequency of zero gives `-inf`, negative values give NaN.

use crate::Float;

/// Linear interpolation: `from` at `t == 0`, `to` at `t == 1`
#[inline]
pub fn interpolate<T: Float>(from: T, to: T, t: T) -> T {
    from + t * (to - from)
}

/// Convert a linear gain to decibels.  A gain of zero gives `-inf`.
#[inline]
pub fn gain_to_db<T: Float>(gain: T) -> T {
    T::DB_GAIN_CONVERSION_MULT * gain.log10()
}

/// Convert decibels to a linear gain
#[inline]
pub fn db_to_gain<T: Float>(decibels: T) -> T {
    T::TEN.powf(decibels / T::DB_GAIN_CONVERSION_MULT)
}

/// Convert an interval in cents to a frequency ratio
#[inline]
pub fn cents_to_ratio<T: Float>(cents: T) -> T {
    (cents / T::CENTS_PER_OCTAVE).exp2()
}

/// Convert a (fractional) MIDI note number expressed in cents to Hz
#[inline]
pub fn midi_cents_to_frequency<T: Float>(cents: T) -> T {
    T::MIDI_0_FREQUENCY * cents_to_ratio(cents)
}

/// Convert a (fractional) MIDI note number to Hz
#[inline]
pub fn midi_note_to_frequency<T: Float>(note: T) -> T {
    midi_cents_to_frequency(note * T::CENTS_PER_NOTE)
}

/// Convert a frequency in Hz to a (fractional) MIDI note number
#[inline]
pub fn frequency_to_midi_note<T: Float>(frequency: T) -> T {
    T::NOTES_PER_OCTAVE * (frequency / T::MIDI_0_FREQUENCY).log2()
}

/// Convert a frequency in Hz to a MIDI note number expressed in cents
#[inline]
pub fn frequency_to_midi_cents<T: Float>(frequency: T) -> T {
    T::CENTS_PER_NOTE * frequency_to_midi_note(frequency)
}

/// Map a normalized resonance in `[0, 1]` onto a filter Q between `2^-1` and
/// `2^4`, exponentially
#[inline]
pub fn magnitude_to_q<T: Float>(magnitude: T) -> T {
    interpolate(T::MIN_Q_POW, T::MAX_Q_POW, magnitude).exp2()
}

/// Inverse of [magnitude_to_q]
#[inline]
pub fn q_to_magnitude<T: Float>(q: T) -> T {
    (q.log2() - T::MIN_Q_POW) / (T::MAX_Q_POW - T::MIN_Q_POW)
}
