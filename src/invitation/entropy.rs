//! Random byte providers for token generation.
//!
//! Production code draws from the operating system CSPRNG through [`OsEntropy`].
//! Tests inject [`FixedEntropy`] to get reproducible tokens.

use super::Error;
use rand::{rngs::OsRng, RngCore};

/// Fills buffers with random bytes.
pub trait EntropySource: Send + Sync {
    /// Fill `dest` completely.
    ///
    /// # Errors
    /// Returns [`Error::EntropySource`] when no bytes can be produced. Implementations
    /// must not fall back to a weaker generator.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), Error>;
}

/// Operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), Error> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|err| Error::EntropySource(err.to_string()))
    }
}

/// Repeats a fixed byte pattern. Not random; only for tests.
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    pattern: Vec<u8>,
}

impl FixedEntropy {
    #[must_use]
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl EntropySource for FixedEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), Error> {
        if self.pattern.is_empty() {
            return Err(Error::EntropySource("empty byte pattern".to_string()));
        }
        for (byte, value) in dest.iter_mut().zip(self.pattern.iter().cycle()) {
            *byte = *value;
        }
        Ok(())
    }
}
