//! Unique identifier allocation.
//!
//! Short identifiers come from a 56-bit entropy draw checked against a
//! caller-supplied uniqueness oracle. Unchecked identifiers fall back
//! to 128-bit version-4 values, whose collision probability needs no
//! oracle.

use keymint_core::entropy::EntropySource;
use keymint_core::error::{Error, PredicateError, Result};
use keymint_numconv::codec::NumConv;
use tracing::debug;
use uuid::{Builder, Uuid};

/// Number of entropy bytes in a short random identifier (56 bits).
pub const RANDOM_ID_BYTES: usize = 7;

/// Builds a codec spanning the whole of `alphabet`.
fn full_alphabet_codec(alphabet: &str) -> Result<NumConv> {
    let radix = u32::try_from(alphabet.chars().count())
        .map_err(|_| Error::Configuration("alphabet length exceeds u32".to_owned()))?;
    NumConv::new(radix, alphabet)
}

/// Draws [`RANDOM_ID_BYTES`] bytes and folds them into an integer.
///
/// This is a raw entropy draw with no uniqueness check; it is the
/// candidate generator for the collision-checked allocators.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`] when the source fails.
pub fn random_id(source: &mut dyn EntropySource) -> Result<u128> {
    let mut buf = [0u8; RANDOM_ID_BYTES];
    source.fill_bytes(&mut buf)?;
    Ok(buf
        .iter()
        .fold(0u128, |acc, byte| (acc << 8) | u128::from(*byte)))
}

/// Draws a short random identifier and encodes it with `alphabet`.
///
/// The radix is the full alphabet length;
/// [`BASE62`](keymint_numconv::alphabet::BASE62) keeps the result
/// URL-safe and is the conventional choice.
///
/// # Errors
///
/// Returns [`Error::Configuration`] for an unusable alphabet and
/// [`Error::EntropyUnavailable`] when the source fails.
pub fn random_id_str(source: &mut dyn EntropySource, alphabet: &str) -> Result<String> {
    let codec = full_alphabet_codec(alphabet)?;
    Ok(codec.encode(random_id(source)?))
}

/// Returns a 128-bit identifier that needs no uniqueness check.
///
/// The value is a version-4 UUID built from 16 bytes of `source`, so an
/// entropy failure is reported instead of panicking.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`] when the source fails.
pub fn unique_id(source: &mut dyn EntropySource) -> Result<u128> {
    Ok(random_uuid(source)?.as_u128())
}

/// Returns the 128-bit identifier of [`unique_id`] encoded with
/// `alphabet`.
///
/// # Errors
///
/// Returns [`Error::Configuration`] for an unusable alphabet and
/// [`Error::EntropyUnavailable`] when the source fails.
pub fn unique_id_str(source: &mut dyn EntropySource, alphabet: &str) -> Result<String> {
    let codec = full_alphabet_codec(alphabet)?;
    Ok(codec.encode(unique_id(source)?))
}

/// Returns a short identifier accepted by `is_unique`.
///
/// Candidates are drawn via [`random_id`] until the predicate accepts
/// one. The loop has no iteration cap: termination relies on the
/// predicate's acceptance rate staying bounded away from zero, which
/// holds whenever the identifier space is sparsely occupied. A caller
/// that cannot assume this must cap attempts inside the predicate.
///
/// No lock is held across predicate calls; the predicate may block on
/// I/O such as a datastore existence check.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`] when the source fails, or
/// [`Error::Predicate`] carrying whatever the predicate raised.
pub fn unique_id_with<F>(source: &mut dyn EntropySource, mut is_unique: F) -> Result<u128>
where
    F: FnMut(u128) -> std::result::Result<bool, PredicateError>,
{
    loop {
        let candidate = random_id(source)?;
        if is_unique(candidate).map_err(Error::Predicate)? {
            return Ok(candidate);
        }
        debug!(candidate = %candidate, "identifier collision, redrawing");
    }
}

/// Returns a short encoded identifier accepted by `is_unique`.
///
/// The string variant of [`unique_id_with`]: every candidate is encoded
/// with `alphabet` before the predicate sees it, so the oracle checks
/// the exact value that would be persisted.
///
/// # Errors
///
/// Returns [`Error::Configuration`] for an unusable alphabet,
/// [`Error::EntropyUnavailable`] when the source fails, or
/// [`Error::Predicate`] carrying whatever the predicate raised.
pub fn unique_id_str_with<F>(
    source: &mut dyn EntropySource,
    alphabet: &str,
    mut is_unique: F,
) -> Result<String>
where
    F: FnMut(&str) -> std::result::Result<bool, PredicateError>,
{
    let codec = full_alphabet_codec(alphabet)?;
    loop {
        let candidate = codec.encode(random_id(source)?);
        if is_unique(&candidate).map_err(Error::Predicate)? {
            return Ok(candidate);
        }
        debug!(candidate = %candidate, "identifier collision, redrawing");
    }
}

fn random_uuid(source: &mut dyn EntropySource) -> Result<Uuid> {
    let mut bytes = [0u8; 16];
    source.fill_bytes(&mut bytes)?;
    Ok(Builder::from_random_bytes(bytes).into_uuid())
}
