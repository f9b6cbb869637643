use dspmath::Float;

// A buffer is (pointer, length) on the C side.  A null pointer or a length
// that isn't positive is treated as an empty buffer.
unsafe fn buffer<'a, T>(data: *const T, length: i32) -> &'a [T] {
    if data.is_null() || length <= 0 {
        return &[];
    }
    core::slice::from_raw_parts(data, length as usize)
}

unsafe fn buffer_mut<'a, T>(data: *mut T, length: i32) -> &'a mut [T] {
    if data.is_null() || length <= 0 {
        return &mut [];
    }
    core::slice::from_raw_parts_mut(data, length as usize)
}

macro_rules! unary {
    ($($name:ident => $func:ident : $t:ty;)+) => {
        $(
            #[no_mangle]
            pub extern "C" fn $name(x: $t) -> $t {
                dspmath::$func(x)
            }
        )+
    };
}

unary! {
    dspmath_gain_to_db_f32 => gain_to_db: f32;
    dspmath_gain_to_db_f64 => gain_to_db: f64;
    dspmath_db_to_gain_f32 => db_to_gain: f32;
    dspmath_db_to_gain_f64 => db_to_gain: f64;
    dspmath_cents_to_ratio_f32 => cents_to_ratio: f32;
    dspmath_cents_to_ratio_f64 => cents_to_ratio: f64;
    dspmath_midi_cents_to_frequency_f32 => midi_cents_to_frequency: f32;
    dspmath_midi_cents_to_frequency_f64 => midi_cents_to_frequency: f64;
    dspmath_midi_note_to_frequency_f32 => midi_note_to_frequency: f32;
    dspmath_midi_note_to_frequency_f64 => midi_note_to_frequency: f64;
    dspmath_frequency_to_midi_note_f32 => frequency_to_midi_note: f32;
    dspmath_frequency_to_midi_note_f64 => frequency_to_midi_note: f64;
    dspmath_frequency_to_midi_cents_f32 => frequency_to_midi_cents: f32;
    dspmath_frequency_to_midi_cents_f64 => frequency_to_midi_cents: f64;
    dspmath_magnitude_to_q_f32 => magnitude_to_q: f32;
    dspmath_magnitude_to_q_f64 => magnitude_to_q: f64;
    dspmath_q_to_magnitude_f32 => q_to_magnitude: f32;
    dspmath_q_to_magnitude_f64 => q_to_magnitude: f64;
    dspmath_quicker_tanh_f32 => quicker_tanh: f32;
    dspmath_quicker_tanh_f64 => quicker_tanh: f64;
    dspmath_quick_tanh_f32 => quick_tanh: f32;
    dspmath_quick_tanh_f64 => quick_tanh: f64;
    dspmath_quicker_sin_f32 => quicker_sin: f32;
    dspmath_quicker_sin_f64 => quicker_sin: f64;
    dspmath_quick_sin_f32 => quick_sin: f32;
    dspmath_quick_sin_f64 => quick_sin: f64;
    dspmath_quicker_sin1_f32 => quicker_sin1: f32;
    dspmath_quicker_sin1_f64 => quicker_sin1: f64;
    dspmath_quick_sin1_f32 => quick_sin1: f32;
    dspmath_quick_sin1_f64 => quick_sin1: f64;
}

#[no_mangle]
pub extern "C" fn dspmath_min_f32(a: f32, b: f32) -> f32 {
    dspmath::min(a, b)
}

#[no_mangle]
pub extern "C" fn dspmath_min_f64(a: f64, b: f64) -> f64 {
    dspmath::min(a, b)
}

#[no_mangle]
pub extern "C" fn dspmath_max_f32(a: f32, b: f32) -> f32 {
    dspmath::max(a, b)
}

#[no_mangle]
pub extern "C" fn dspmath_max_f64(a: f64, b: f64) -> f64 {
    dspmath::max(a, b)
}

#[no_mangle]
pub extern "C" fn dspmath_clamp_f32(value: f32, min: f32, max: f32) -> f32 {
    dspmath::clamp(value, min, max)
}

#[no_mangle]
pub extern "C" fn dspmath_clamp_f64(value: f64, min: f64, max: f64) -> f64 {
    dspmath::clamp(value, min, max)
}

#[no_mangle]
pub extern "C" fn dspmath_clamp_i32(value: i32, min: i32, max: i32) -> i32 {
    dspmath::clamp_int(value, min, max)
}

#[no_mangle]
pub extern "C" fn dspmath_interpolate_f32(from: f32, to: f32, t: f32) -> f32 {
    dspmath::interpolate(from, to, t)
}

#[no_mangle]
pub extern "C" fn dspmath_interpolate_f64(from: f64, to: f64, t: f64) -> f64 {
    dspmath::interpolate(from, to, t)
}

unsafe fn modf_into<T: Float>(value: T, integral: *mut T) -> T {
    let mut int = T::ZERO;
    let frac = dspmath::modf(value, &mut int);
    if !integral.is_null() {
        *integral = int;
    }
    frac
}

#[no_mangle]
pub unsafe extern "C" fn dspmath_modf_f32(value: f32, integral: *mut f32) -> f32 {
    modf_into(value, integral)
}

#[no_mangle]
pub unsafe extern "C" fn dspmath_modf_f64(value: f64, integral: *mut f64) -> f64 {
    modf_into(value, integral)
}

#[no_mangle]
pub unsafe extern "C" fn dspmath_is_silent_f32(data: *const f32, length: i32) -> bool {
    dspmath::is_silent(buffer(data, length))
}

#[no_mangle]
pub unsafe extern "C" fn dspmath_is_silent_f64(data: *const f64, length: i32) -> bool {
    dspmath::is_silent(buffer(data, length))
}

#[no_mangle]
pub unsafe extern "C" fn dspmath_zero_buffer_f32(data: *mut f32, length: i32) {
    dspmath::zero_buffer(buffer_mut(data, length))
}

#[no_mangle]
pub unsafe extern "C" fn dspmath_zero_buffer_f64(data: *mut f64, length: i32) {
    dspmath::zero_buffer(buffer_mut(data, length))
}

#[no_mangle]
pub unsafe extern "C" fn dspmath_zero_buffer_i32(data: *mut i32, length: i32) {
    dspmath::zero_buffer(buffer_mut(data, length))
}

/// `dest` and `source` must not overlap
#[no_mangle]
pub unsafe extern "C" fn dspmath_copy_buffer_f32(dest: *mut f32, source: *const f32, length: i32) {
    if dest.is_null() || source.is_null() {
        return;
    }
    dspmath::copy_buffer(buffer_mut(dest, length), buffer(source, length))
}

/// `dest` and `source` must not overlap
#[no_mangle]
pub unsafe extern "C" fn dspmath_copy_buffer_f64(dest: *mut f64, source: *const f64, length: i32) {
    if dest.is_null() || source.is_null() {
        return;
    }
    dspmath::copy_buffer(buffer_mut(dest, length), buffer(source, length))
}
