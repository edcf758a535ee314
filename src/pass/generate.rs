//! Password generation.

use log::{debug, trace};
use rand::RngCore;
use zeroize::Zeroizing;

use super::{Charset, GenerateError, MIN_LENGTH};
use crate::entropy;

/// Generated password. Wiped from memory on drop.
pub type Password = Zeroizing<String>;

/// Generate a password of `length` characters from `charset` using the OS CSPRNG.
pub fn generate(length: usize, charset: &Charset) -> Result<Password, GenerateError> {
    generate_with(&mut entropy::os(), length, charset)
}

/// Generate with an explicit random source.
///
/// Length is checked before the charset. Each position is an independent
/// uniform draw; the first source failure aborts and the partial buffer is
/// wiped.
pub fn generate_with<R: RngCore + ?Sized>(
    rng: &mut R,
    length: usize,
    charset: &Charset,
) -> Result<Password, GenerateError> {
    if length < MIN_LENGTH {
        return Err(GenerateError::InvalidLength);
    }
    if charset.is_empty() {
        return Err(GenerateError::EmptyCharset);
    }

    let chars = charset.as_bytes();
    debug!("drawing {length} characters from {} candidates", chars.len());

    let mut buf = Zeroizing::new(Vec::with_capacity(length));
    for _ in 0..length {
        let idx = entropy::index(rng, chars.len()).inspect_err(|e| {
            trace!("random source failed after {} of {length} draws: {e}", buf.len());
        })?;
        buf.push(chars[idx]);
    }

    // One char per drawn byte; builder pools are ASCII.
    let password: String = buf.iter().map(|&b| char::from(b)).collect();
    Ok(Zeroizing::new(password))
}
