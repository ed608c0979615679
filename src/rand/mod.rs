//! Random number generation backed by a cryptographically secure source.

#[cfg(test)]
pub(crate) mod scripted;
mod os;
pub mod urand;

use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};

pub use urand::OsRandom;

// =============================================================================
// RandomSource
// =============================================================================

/// A cryptographically secure source of bytes.
///
/// Implementors only supply [`fill_bytes`](RandomSource::fill_bytes); the
/// bounded integer and byte-vector helpers are derived from it. Sources are
/// shared across threads, so any internal state must be synchronized by the
/// implementation.
pub trait RandomSource: Send + Sync {
    /// Fill `buf` entirely with random bytes.
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()>;

    /// Random integer in `min_inclusive..max_exclusive`.
    ///
    /// Four bytes are read as a little-endian `i32`, folded to a magnitude
    /// and reduced modulo the span. The reduction carries a small bias
    /// towards low residues when the span does not divide `2^31`; for the
    /// alphabet sizes used here the skew is below one part in ten million.
    fn random_int(&self, min_inclusive: i32, max_exclusive: i32) -> Result<i32> {
        if min_inclusive >= max_exclusive {
            return Err(Error::EmptyRange {
                min: min_inclusive,
                max: max_exclusive,
            });
        }

        let mut word = [0u8; 4];
        self.fill_bytes(&mut word)?;
        let raw = i32::from_le_bytes(word);
        word.zeroize();

        Ok(reduce(raw, min_inclusive, max_exclusive))
    }

    /// `length` random bytes, wiped when dropped.
    fn random_bytes(&self, length: usize) -> Result<Zeroizing<Vec<u8>>> {
        if length == 0 {
            return Err(Error::ZeroByteCount);
        }

        let mut bytes = Zeroizing::new(vec![0u8; length]);
        self.fill_bytes(&mut bytes)?;
        Ok(bytes)
    }
}

/// Map a raw 32-bit draw into `min..max`. Caller guarantees `min < max`.
#[inline]
pub(crate) fn reduce(raw: i32, min: i32, max: i32) -> i32 {
    // i32::MIN has no positive counterpart; nudge it before negating.
    let folded = if raw == i32::MIN { raw + 1 } else { raw };
    let magnitude = i64::from(folded.abs());
    let span = i64::from(max) - i64::from(min);

    // min + (magnitude % span) < max, so the narrowing cannot truncate.
    (i64::from(min) + magnitude % span) as i32
}
