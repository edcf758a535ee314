//! Password generation.

pub mod charset;
mod error;
mod generate;

pub use charset::Charset;
pub use error::GenerateError;
pub use generate::generate;

/// Shortest password the sampler will produce.
pub const MIN_LENGTH: usize = 8;
