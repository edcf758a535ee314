//! Diagnostic logging to stderr.

use env_logger::Builder;
use log::LevelFilter;

/// Install the logger. Warnings by default, everything down to debug with
/// `--debug`. Configured in code only; no environment variables are read.
pub fn init(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = Builder::new();
    builder.filter_level(level).format_timestamp(None);
    // A logger may already be installed when embedded in a test harness.
    let _ = builder.try_init();
}
