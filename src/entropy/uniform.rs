//! Unbiased bounded draws.

use rand::RngCore;

#[inline]
fn next_u64<R: RngCore + ?Sized>(rng: &mut R) -> Result<u64, rand::Error> {
    let mut buf = [0u8; 8];
    rng.try_fill_bytes(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Uniform integer in `[0, bound)`.
///
/// Multiply-and-reject over 64-bit draws: the high word of `x * bound` is the
/// candidate, and draws whose low word falls below `2^64 mod bound` are thrown
/// away so every result has exactly `floor(2^64 / bound)` preimages.
///
/// `bound` must be non-zero.
pub fn index<R: RngCore + ?Sized>(rng: &mut R, bound: usize) -> Result<usize, rand::Error> {
    debug_assert!(bound > 0, "empty range");
    let n = bound as u64;

    let mut m = u128::from(next_u64(rng)?) * u128::from(n);
    let mut low = m as u64;

    if low < n {
        let threshold = n.wrapping_neg() % n;
        while low < threshold {
            m = u128::from(next_u64(rng)?) * u128::from(n);
            low = m as u64;
        }
    }

    Ok((m >> 64) as usize)
}
