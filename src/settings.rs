//! Password generation settings.

use crate::cli::CliFlags;
use crate::pass::Charset;

/// Resolved request: how long, and which character classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numeric: bool,
    pub special: bool,
}

impl Settings {
    /// Resolve parsed flags. Negative lengths collapse to zero so they fail
    /// the minimum-length check instead of wrapping.
    pub fn from_flags(flags: &CliFlags) -> Self {
        let pass_length = usize::try_from(flags.length.max(0)).unwrap_or(usize::MAX);

        Self {
            pass_length,
            uppercase: flags.upper,
            lowercase: flags.lower,
            numeric: flags.number,
            special: flags.symbol,
        }
    }

    pub fn charset(&self) -> Charset {
        Charset::build(self.uppercase, self.lowercase, self.numeric, self.special)
    }

    /// Names of the selected classes, for diagnostics.
    pub fn classes(&self) -> Vec<&'static str> {
        [
            (self.uppercase, "upper"),
            (self.lowercase, "lower"),
            (self.numeric, "number"),
            (self.special, "symbol"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: crate::cli::DEFAULT_LENGTH as usize,
            uppercase: false,
            lowercase: false,
            numeric: false,
            special: false,
        }
    }
}
