//! Parsing and evaluation of playground commands

use dspmath::Sample;
use std::fmt;

pub const HELP: &str = "\
commands (one per line):
  note <n>            MIDI note -> Hz
  freq <hz>           Hz -> MIDI note, cents, and tuning vs. nearest note
  cents <c>           interval in cents -> frequency ratio
  db <db>             decibels -> gain
  gain <g>            gain -> decibels
  q <q>               filter Q -> resonance magnitude
  mag <m>             resonance magnitude in [0, 1] -> filter Q
  tanh <x>            tanh approximations vs. the real thing
  sin <phase>         sin approximations, phase in [-0.5, 0.5]
  sin1 <phase>        sin approximations, phase in [0, 1]
  clamp <v> <lo> <hi> clamp a value
  help                show this message
  quit                exit";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Note(Sample),
    Freq(Sample),
    Cents(Sample),
    Db(Sample),
    Gain(Sample),
    Q(Sample),
    Mag(Sample),
    Tanh(Sample),
    Sin(Sample),
    Sin1(Sample),
    Clamp(Sample, Sample, Sample),
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    TrailingInput(String),
    BadNumber(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty command"),
            Self::Unknown(cmd) => write!(f, "Unknown command: {} (try `help`)", cmd),
            Self::MissingArgument(name) => write!(f, "Missing argument: {}", name),
            Self::TrailingInput(rest) => write!(f, "Unexpected input: {}", rest),
            Self::BadNumber(text) => write!(f, "Not a number: {}", text),
        }
    }
}

impl std::error::Error for CommandError {}

fn number<'a>(
    args: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<Sample, CommandError> {
    let text = args.next().ok_or(CommandError::MissingArgument(name))?;
    text.parse::<Sample>()
        .map_err(|_| CommandError::BadNumber(text.to_owned()))
}

impl TryFrom<&str> for Command {
    type Error = CommandError;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args = &mut words;
        let cmd = match name.to_ascii_lowercase().as_str() {
            "note" => Self::Note(number(args, "note")?),
            "freq" => Self::Freq(number(args, "frequency")?),
            "cents" => Self::Cents(number(args, "cents")?),
            "db" => Self::Db(number(args, "decibels")?),
            "gain" => Self::Gain(number(args, "gain")?),
            "q" => Self::Q(number(args, "q")?),
            "mag" => Self::Mag(number(args, "magnitude")?),
            "tanh" => Self::Tanh(number(args, "x")?),
            "sin" => Self::Sin(number(args, "phase")?),
            "sin1" => Self::Sin1(number(args, "phase")?),
            "clamp" => Self::Clamp(
                number(args, "value")?,
                number(args, "min")?,
                number(args, "max")?,
            ),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(name.to_owned())),
        };
        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(CommandError::TrailingInput(rest.join(" ")));
        }
        Ok(cmd)
    }
}

impl Command {
    /// Run the command and format the result for display.  Returns `None`
    /// for [Command::Quit].
    pub fn evaluate(&self) -> Option<String> {
        let out = match *self {
            Self::Note(note) => format!(
                "note {} = {:.4} Hz",
                note,
                dspmath::midi_note_to_frequency(note)
            ),
            Self::Freq(freq) => {
                let note = dspmath::frequency_to_midi_note(freq);
                let nearest = note.round();
                let offset =
                    dspmath::calculate_cents(dspmath::midi_note_to_frequency(nearest), freq);
                format!(
                    "{} Hz = note {:.4} ({:.2} cents), {:+.2} cents from note {}",
                    freq,
                    note,
                    dspmath::frequency_to_midi_cents(freq),
                    offset,
                    nearest
                )
            }
            Self::Cents(cents) => format!(
                "{} cents = ratio {:.6}",
                cents,
                dspmath::cents_to_ratio(cents)
            ),
            Self::Db(db) => format!("{} dB = gain {:.6}", db, dspmath::db_to_gain(db)),
            Self::Gain(gain) => format!("gain {} = {:.4} dB", gain, dspmath::gain_to_db(gain)),
            Self::Q(q) => format!("Q {} = magnitude {:.6}", q, dspmath::q_to_magnitude(q)),
            Self::Mag(mag) => format!("magnitude {} = Q {:.6}", mag, dspmath::magnitude_to_q(mag)),
            Self::Tanh(x) => format!(
                "tanh({}) = {:.6}, quick {:.6}, quicker {:.6}",
                x,
                x.tanh(),
                dspmath::quick_tanh(x),
                dspmath::quicker_tanh(x)
            ),
            Self::Sin(phase) => format!(
                "sin(2pi*{}) = {:.6}, quick {:.6}, quicker {:.6}",
                phase,
                (std::f64::consts::TAU as Sample * phase).sin(),
                dspmath::quick_sin(phase),
                dspmath::quicker_sin(phase)
            ),
            Self::Sin1(phase) => format!(
                "sin(2pi*{}) = {:.6}, quick {:.6}, quicker {:.6}",
                phase,
                (std::f64::consts::TAU as Sample * phase).sin(),
                dspmath::quick_sin1(phase),
                dspmath::quicker_sin1(phase)
            ),
            Self::Clamp(value, min, max) => format!(
                "clamp({}, {}, {}) = {}",
                value,
                min,
                max,
                dspmath::clamp(value, min, max)
            ),
            Self::Help => HELP.to_owned(),
            Self::Quit => return None,
        };
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::try_from("note 69"), Ok(Command::Note(69.0)));
        assert_eq!(Command::try_from("  FREQ   440 "), Ok(Command::Freq(440.0)));
        assert_eq!(
            Command::try_from("clamp 2 -1 1"),
            Ok(Command::Clamp(2.0, -1.0, 1.0))
        );
        assert_eq!(Command::try_from("quit"), Ok(Command::Quit));
        assert_eq!(Command::try_from("?"), Ok(Command::Help));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Command::try_from(""), Err(CommandError::Empty));
        assert_eq!(
            Command::try_from("bogus 1"),
            Err(CommandError::Unknown("bogus".to_owned()))
        );
        assert_eq!(
            Command::try_from("note"),
            Err(CommandError::MissingArgument("note"))
        );
        assert_eq!(
            Command::try_from("db loud"),
            Err(CommandError::BadNumber("loud".to_owned()))
        );
        assert_eq!(
            Command::try_from("gain 1 2"),
            Err(CommandError::TrailingInput("2".to_owned()))
        );
        assert_eq!(
            Command::try_from("clamp 1 2"),
            Err(CommandError::MissingArgument("max"))
        );
    }

    #[test]
    fn evaluates() {
        let out = Command::Note(69.0).evaluate().unwrap_or_default();
        assert_eq!(out, "note 69 = 440.0000 Hz");
        let out = Command::Gain(1.0).evaluate().unwrap_or_default();
        assert_eq!(out, "gain 1 = 0.0000 dB");
        let out = Command::Mag(1.0).evaluate().unwrap_or_default();
        assert_eq!(out, "magnitude 1 = Q 16.000000");
        let out = Command::Freq(445.0).evaluate().unwrap_or_default();
        assert!(out.starts_with("445 Hz = note 69.1956"));
        assert!(out.ends_with("+19.56 cents from note 69"));
        let out = Command::Freq(430.0).evaluate().unwrap_or_default();
        assert!(out.ends_with("-39.80 cents from note 69"));
        assert_eq!(Command::Quit.evaluate(), None);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CommandError::BadNumber("x".to_owned()).to_string(),
            "Not a number: x"
        );
    }
}
