//! This crate contains the small numeric toolkit a synthesizer's audio thread
//! leans on: unit conversions between musical and physical quantities, cheap
//! approximations of `tanh` and `sin`, and whole-buffer primitives.  It is
//! `no_std`, never allocates and holds no state, so everything in here is safe
//! to call from a realtime callback.
//!
//! All of the scalar functions are generic over [Float], which is implemented
//! for both `f32` and `f64`.  An engine that wants to pick one precision for
//! everything can use the [Sample] alias, which is `f64` unless the
//! `single_precision` feature is enabled.
//!
//! Min/max/clamp are implemented twice (see [compare]): once using scalar SSE2
//! instructions and once using plain comparisons.  The backend is picked at
//! compile time and both produce bit-identical results, NaN included.

#![no_std]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("dspmath needs either the `std` or the `libm` feature for its float math");

/// True if using libm for floating-point math, false if using std
pub const USE_LIBM: bool = cfg!(all(feature = "libm", not(feature = "std")));

/// True if min/max/clamp are implemented with SSE2 instructions, false if the
/// portable backend was selected
pub const SIMD_BACKEND: bool = compare::SIMD_BACKEND;

/// MIDI note numbers by name, as `u8`.  Octaves follow scientific pitch
/// notation, so `midi_const::C4` is middle C (60) and `midi_const::A4` (69) is
/// concert A.  Flats are spelled with a lowercase `b` (`Eb3`, `Bb5`) and there
/// are no sharps; use the enharmonic flat instead.
pub mod midi_const;

pub mod buffer;
pub mod compare;
pub mod convert;
mod float_approx;
pub mod util;

mod float_traits;
pub use float_traits::Float;

/// The sample type used by an engine that commits to a single precision.
#[cfg(not(feature = "single_precision"))]
pub type Sample = f64;
/// The sample type used by an engine that commits to a single precision.
#[cfg(feature = "single_precision")]
pub type Sample = f32;

/// Samples with an absolute value at or below this are considered silent
pub const EPSILON: f64 = 1e-16;
/// Multiplier between `log10` of a gain and decibels
pub const DB_GAIN_CONVERSION_MULT: f64 = 20.0;
/// Frequency of MIDI note 0 in Hz, assuming A440 tuning
pub const MIDI_0_FREQUENCY: f64 = 8.1757989156;
/// Semitones per octave (12-TET)
pub const NOTES_PER_OCTAVE: i32 = 12;
/// Cents per semitone
pub const CENTS_PER_NOTE: i32 = 100;
/// Cents per octave
pub const CENTS_PER_OCTAVE: i32 = NOTES_PER_OCTAVE * CENTS_PER_NOTE;
/// Number of MIDI note numbers
pub const MIDI_SIZE: i32 = 128;
/// One past the highest MIDI note, in cents
pub const MAX_CENTS: i32 = MIDI_SIZE * CENTS_PER_NOTE;
/// Exponent (base 2) of the filter Q at a resonance magnitude of 1
pub const MAX_Q_POW: f64 = 4.0;
/// Exponent (base 2) of the filter Q at a resonance magnitude of 0
pub const MIN_Q_POW: f64 = -1.0;

pub use buffer::{copy_buffer, is_silent, zero_buffer};
pub use compare::{clamp, clamp_int, max, min, modf};
pub use convert::{
    cents_to_ratio, db_to_gain, frequency_to_midi_cents, frequency_to_midi_note, gain_to_db,
    interpolate, magnitude_to_q, midi_cents_to_frequency, midi_note_to_frequency, q_to_magnitude,
};
pub use float_approx::{
    quick_sin, quick_sin1, quick_tanh, quicker_sin, quicker_sin1, quicker_tanh,
};
pub use util::{calculate_cents, close_to_zero};
