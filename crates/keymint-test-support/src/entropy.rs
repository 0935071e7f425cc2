//! Test entropy — deterministic `EntropySource` implementations.

use keymint_core::entropy::EntropySource;
use keymint_core::error::{Error, Result};

/// A source that hands out bytes from a predetermined sequence. Panics
/// when the sequence is exhausted. Used in tests that need specific,
/// repeatable draws (e.g., forcing the sampler's rejection branches).
#[derive(Debug)]
pub struct SequenceEntropy {
    bytes: Vec<u8>,
    index: usize,
}

impl SequenceEntropy {
    /// Create a new `SequenceEntropy` with the given bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, index: 0 }
    }

    /// How many bytes have been consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl EntropySource for SequenceEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        for slot in dest.iter_mut() {
            *slot = self.bytes[self.index];
            self.index += 1;
        }
        Ok(())
    }
}

/// A source that always fails, for exercising entropy-outage handling.
#[derive(Debug, Clone, Copy)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<()> {
        Err(Error::EntropyUnavailable("test source is offline".to_owned()))
    }
}
