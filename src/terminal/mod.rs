//! Shared terminal utilities.
//!
//! Box drawing and ANSI helpers.

mod output;

pub use output::*;
