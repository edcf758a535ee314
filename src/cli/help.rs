//! Usage screen.

use std::io::{self, Write};

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    box_top(out, "Passgen")?;
    box_line_center(out, "Password Generator CLI")?;
    box_line(out, "Create random password based on ASCII character.")?;
    box_line(out, "")?;
    box_line(out, "USAGE:")?;
    box_line(out, "  passgen [OPTIONS]")?;
    box_line(out, "")?;
    box_line(out, "EXAMPLES:")?;
    box_line(out, "  passgen -L 16 -u -l -n -s")?;
    box_line(out, "  passgen --length 20 --upper --lower")?;
    box_line(out, "")?;
    box_line(out, "OPTIONS:")?;
    box_opt(out, "  -L, --length <N>", "Password length (default: 8, minimum: 8)")?;
    box_opt(out, "  -u, --upper", "Using upper case (A-Z)")?;
    box_opt(out, "  -l, --lower", "Using lower case (a-z)")?;
    box_opt(out, "  -n, --number", "Using number (0-9)")?;
    box_opt(out, "  -s, --symbol", "Using symbol (!@#$...)")?;
    box_line(out, "")?;
    box_opt(out, "      --debug", "Log diagnostics to stderr")?;
    box_opt(out, "  -h, --help", "Display this help message")?;
    box_opt(out, "  -V, --version", "Display version")?;
    box_bottom(out)?;
    out.flush()
}
