//! Character set building for password generation.

use std::ops::RangeInclusive;

const UPPERCASE: RangeInclusive<u8> = b'A'..=b'Z';
const LOWERCASE: RangeInclusive<u8> = b'a'..=b'z';
const DIGITS: RangeInclusive<u8> = b'0'..=b'9';

/// Printable ASCII punctuation, in code point order: `!`..`/`, `:`..`@`, `[`..`` ` ``, `{`..`~`.
const SYMBOLS: [RangeInclusive<u8>; 4] = [b'!'..=b'/', b':'..=b'@', b'['..=b'`', b'{'..=b'~'];

/// Ordered pool of candidate bytes. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Charset(Vec<u8>);

impl Charset {
    /// Build the pool from the four class toggles.
    ///
    /// Classes are appended upper, lower, number, symbol; each range ascends.
    /// All toggles off yields an empty pool, which the sampler rejects.
    pub fn build(upper: bool, lower: bool, number: bool, symbol: bool) -> Self {
        let mut ranges: Vec<RangeInclusive<u8>> = Vec::with_capacity(7);

        if upper {
            ranges.push(UPPERCASE);
        }
        if lower {
            ranges.push(LOWERCASE);
        }
        if number {
            ranges.push(DIGITS);
        }
        if symbol {
            ranges.extend(SYMBOLS);
        }

        Charset(ranges.into_iter().flatten().collect())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, byte: u8) -> bool {
        self.0.contains(&byte)
    }
}

impl From<Vec<u8>> for Charset {
    fn from(bytes: Vec<u8>) -> Self {
        Charset(bytes)
    }
}

impl From<&[u8]> for Charset {
    fn from(bytes: &[u8]) -> Self {
        Charset(bytes.to_vec())
    }
}
