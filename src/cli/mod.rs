mod context;
mod error;
mod flags;
mod help;
pub mod prompts;

pub use context::Context;
pub use error::Error;
pub use flags::{CliFlags, DEFAULT_LENGTH};
pub use help::print_help;
