//! Password generation.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use super::GenerationOptions;
use super::charset;
use crate::error::{Error, Result};
use crate::rand::{OsRandom, RandomSource};

/// Builds passwords from an injected [`RandomSource`].
///
/// The generator keeps no state of its own. Clones share the same source, so
/// one generator can serve many threads as long as the source is thread-safe
/// (every [`RandomSource`] is `Send + Sync`).
#[derive(Clone)]
pub struct PasswordGenerator {
    source: Arc<dyn RandomSource>,
}

impl PasswordGenerator {
    pub fn new<R: RandomSource + 'static>(source: R) -> Self {
        Self::from_shared(Arc::new(source))
    }

    pub fn from_shared(source: Arc<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// Generator backed by the OS entropy device.
    pub fn os() -> Result<Self> {
        Ok(Self::new(OsRandom::open()?))
    }

    /// Generate one password.
    ///
    /// One character of every selected class is drawn first, the rest comes
    /// from the combined alphabet, then the whole buffer is shuffled so the
    /// guaranteed characters land anywhere. When `length` is smaller than the
    /// number of selected classes the shuffled buffer is cut to `length`, so
    /// the output length always matches but not every class survives.
    pub fn generate(&self, options: &GenerationOptions) -> Result<String> {
        options.validate()?;

        let classes = charset::selected(options);
        let alphabet = charset::build(options);
        trace!(length = options.length, classes = classes.len(), "generating password");

        let mut buf = Zeroizing::new(Vec::with_capacity(options.length.max(classes.len())));

        for class in &classes {
            buf.push(self.pick(class.chars())?);
        }

        while buf.len() < options.length {
            buf.push(self.pick(&alphabet)?);
        }

        self.shuffle(&mut buf)?;

        if buf.len() > options.length {
            debug!(
                length = options.length,
                classes = classes.len(),
                "length below class count, truncating"
            );
            buf[options.length..].zeroize();
            buf.truncate(options.length);
        }

        let bytes = std::mem::take(&mut *buf);
        // Safety: every byte comes from an ASCII class table
        Ok(unsafe { String::from_utf8_unchecked(bytes) })
    }

    /// Generate `count` independent passwords with the same options.
    ///
    /// Either every password is returned or none is; passwords produced
    /// before a failure are wiped.
    pub fn generate_batch(&self, options: &GenerationOptions, count: usize) -> Result<Vec<String>> {
        if count == 0 {
            return Err(Error::ZeroCount);
        }
        options.validate()?;

        let mut passwords = Vec::with_capacity(count);
        for _ in 0..count {
            match self.generate(options) {
                Ok(pass) => passwords.push(pass),
                Err(e) => {
                    passwords.zeroize();
                    return Err(e);
                }
            }
        }

        Ok(passwords)
    }

    #[inline]
    fn pick(&self, chars: &[u8]) -> Result<u8> {
        let idx = self.source.random_int(0, bound(chars.len())?)?;
        Ok(chars[idx as usize])
    }

    /// Fisher-Yates, last index down to 1.
    fn shuffle(&self, buf: &mut [u8]) -> Result<()> {
        for i in (1..buf.len()).rev() {
            let j = self.source.random_int(0, bound(i + 1)?)? as usize;
            buf.swap(i, j);
        }
        Ok(())
    }
}

impl fmt::Debug for PasswordGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordGenerator").finish_non_exhaustive()
    }
}

/// Exclusive upper bound for `random_int`.
#[inline]
fn bound(n: usize) -> Result<i32> {
    i32::try_from(n).map_err(|_| Error::LengthTooLarge {
        length: n,
        max: super::MAX_LENGTH,
    })
}
