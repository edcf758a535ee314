//! Secure random source for password generation.
//!
//! All draws go through `RngCore::try_fill_bytes` so a failing source surfaces
//! as an error instead of a panic.

mod uniform;

use rand::rngs::OsRng;

pub use uniform::index;

/// The operating system CSPRNG (getrandom / BCryptGenRandom / SecRandomCopyBytes).
pub fn os() -> OsRng {
    OsRng
}

pub fn source_name() -> &'static str {
    "OS CSPRNG"
}
