//! Centralized user-facing output lines.

use std::fmt::Display;
use std::io::{self, Write};

use crate::terminal::{red, stderr_is_tty};

/// `Error: <message>`, with a red prefix when `color` is set.
pub fn format_error(err: &dyn Display, color: bool) -> String {
    format!("{} {err}", red("Error:", color))
}

/// Print an error line to stderr. Color only when stderr is a terminal.
pub fn error(err: &dyn Display) {
    eprintln!("{}", format_error(err, stderr_is_tty()));
}

pub fn password<W: Write>(out: &mut W, password: &str) -> io::Result<()> {
    writeln!(out, "Generated password: {password}")?;
    out.flush()
}

pub fn version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "passgen {}", env!("CARGO_PKG_VERSION"))
}
