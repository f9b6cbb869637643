#![allow(non_upper_case_globals)]
#![allow(missing_docs)]

// Defines one octave of note constants, counting up from `$base`
macro_rules! octave {
    ($base:expr; $($name:ident),+) => {
        octave!(@step $base; $($name),+);
    };
    (@step $n:expr; $name:ident $(, $rest:ident)*) => {
        pub const $name: u8 = $n;
        octave!(@step $n + 1; $($rest),*);
    };
    (@step $n:expr;) => {};
}

octave!(12; C0, Db0, D0, Eb0, E0, F0, Gb0, G0, Ab0, A0, Bb0, B0);
octave!(24; C1, Db1, D1, Eb1, E1, F1, Gb1, G1, Ab1, A1, Bb1, B1);
octave!(36; C2, Db2, D2, Eb2, E2, F2, Gb2, G2, Ab2, A2, Bb2, B2);
octave!(48; C3, Db3, D3, Eb3, E3, F3, Gb3, G3, Ab3, A3, Bb3, B3);
octave!(60; C4, Db4, D4, Eb4, E4, F4, Gb4, G4, Ab4, A4, Bb4, B4);
octave!(72; C5, Db5, D5, Eb5, E5, F5, Gb5, G5, Ab5, A5, Bb5, B5);
octave!(84; C6, Db6, D6, Eb6, E6, F6, Gb6, G6, Ab6, A6, Bb6, B6);
octave!(96; C7, Db7, D7, Eb7, E7, F7, Gb7, G7, Ab7, A7, Bb7, B7);
octave!(108; C8, Db8, D8, Eb8, E8, F8, Gb8, G8, Ab8, A8, Bb8, B8);
octave!(120; C9, Db9, D9, Eb9, E9, F9, Gb9, G9);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmarks() {
        assert_eq!(C4, 60);
        assert_eq!(Db4, 61);
        assert_eq!(A4, 69);
        assert_eq!(B8, 119);
        assert_eq!(G9, 127);
    }
}
