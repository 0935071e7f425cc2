//! Entropy source abstraction.
//!
//! In production this wraps the operating system's secure random
//! generator. Tests and replays inject deterministic implementations.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{Error, Result};

/// Abstraction over a cryptographically strong source of random bytes.
pub trait EntropySource: Send + Sync {
    /// Fills `dest` with random bytes.
    ///
    /// The read may block briefly under entropy starvation on some
    /// platforms; treat it as a blocking system call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`] when the underlying source
    /// cannot produce bytes. The failure is fatal for the operation that
    /// needed the bytes; callers must surface it, not retry.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// Production source backed by the operating system's random generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::EntropyUnavailable(e.to_string()))
    }
}
