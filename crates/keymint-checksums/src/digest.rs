//! Salted hex digests.

use sha2::Sha256;
use sha2::digest::Digest;

/// Returns the lowercase hex digest of `salt` followed by `data` under
/// the hash `D`.
#[must_use]
pub fn hexdigest<D: Digest>(salt: &[u8], data: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(salt);
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Salted SHA-256 hex digest.
#[must_use]
pub fn sha256_hexdigest(salt: &str, data: &str) -> String {
    hexdigest::<Sha256>(salt.as_bytes(), data.as_bytes())
}
