//! Password generation errors.

use thiserror::Error;

use super::MIN_LENGTH;

/// Reasons a single generation attempt can fail. None are retried.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Requested length is below [`MIN_LENGTH`].
    #[error("minimum length is {}", MIN_LENGTH)]
    InvalidLength,

    /// No character class selected.
    #[error("illegal choices")]
    EmptyCharset,

    /// The secure random source failed mid-generation.
    #[error("{0}")]
    RandomSource(#[from] rand::Error),
}
