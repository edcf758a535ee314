use clap::Parser;

pub const DEFAULT_LENGTH: i64 = 8;

/// Command-line flags. Help and version are handled by the CLI itself so
/// usage text goes to stderr.
#[derive(Parser, Debug)]
#[command(name = "passgen", disable_help_flag = true, disable_version_flag = true)]
pub struct CliFlags {
    /// Password length
    #[arg(short = 'L', long, default_value_t = DEFAULT_LENGTH, allow_negative_numbers = true)]
    pub length: i64,

    /// Use upper case (A-Z)
    #[arg(short, long)]
    pub upper: bool,

    /// Use lower case (a-z)
    #[arg(short, long)]
    pub lower: bool,

    /// Use numbers (0-9)
    #[arg(short, long)]
    pub number: bool,

    /// Use symbols (!@#$...)
    #[arg(short, long)]
    pub symbol: bool,

    /// Display help
    #[arg(short, long)]
    pub help: bool,

    /// Display version
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Log diagnostics to stderr
    #[arg(long)]
    pub debug: bool,
}
