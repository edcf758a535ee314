use std::io;

use thiserror::Error;

use crate::pass::GenerateError;

/// Anything that ends a CLI run with a diagnostic.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
