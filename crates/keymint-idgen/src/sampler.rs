//! Uniform sampling over an inclusive integer range.
//!
//! Bit-length rejection sampling: candidates are drawn with exactly the
//! bit width of the upper bound, and draws that would bias the result
//! are discarded and redrawn. Every value in the range ends up with the
//! same selection probability.

use keymint_core::entropy::EntropySource;
use keymint_core::error::{Error, Result};
use tracing::trace;

/// Draws a uniformly random integer of the given bit width.
fn random_bits(source: &mut dyn EntropySource, bit_length: u32) -> Result<u64> {
    let n_bytes = (bit_length as usize).div_ceil(8);
    let mut buf = [0u8; 8];
    source.fill_bytes(&mut buf[..n_bytes])?;
    let mut value = 0u64;
    for byte in &buf[..n_bytes] {
        value = (value << 8) | u64::from(*byte);
    }
    if bit_length < 64 {
        value &= (1u64 << bit_length) - 1;
    }
    Ok(value)
}

/// Returns a uniformly distributed integer in `[min_value, max_value]`,
/// both bounds inclusive.
///
/// The expected number of draws is close to one; a draw is only
/// discarded when it is the maximal bit pattern or falls in the biased
/// tail of the bucket division.
///
/// # Errors
///
/// Returns [`Error::Configuration`] when the range holds fewer than two
/// values, and [`Error::EntropyUnavailable`] when the source fails.
#[allow(clippy::cast_possible_truncation)]
pub fn sample_uniform(
    source: &mut dyn EntropySource,
    min_value: u64,
    max_value: u64,
) -> Result<u64> {
    if min_value >= max_value {
        return Err(Error::Configuration(format!(
            "sampling range [{min_value}, {max_value}] must contain at least two values"
        )));
    }
    let value_range = u128::from(max_value) - u128::from(min_value) + 1;
    let bit_length = 64 - max_value.leading_zeros();
    let rand_max = (1u128 << bit_length) - 1;

    // A range that exactly fills the bit width needs no rejection: the
    // masked draw already is the answer.
    if value_range == rand_max + 1 {
        return Ok(min_value + random_bits(source, bit_length)?);
    }

    let bucket = rand_max / value_range;
    let remainder = rand_max % value_range;
    loop {
        let base_random = u128::from(random_bits(source, bit_length)?);
        // The bucket math below assumes base_random in [0, rand_max).
        if base_random == rand_max {
            trace!(base_random = %base_random, "discarding maximal draw");
            continue;
        }
        if base_random < rand_max - remainder {
            return Ok(min_value + (base_random / bucket) as u64);
        }
        trace!(base_random = %base_random, "discarding draw from biased tail");
    }
}

/// Returns a uniformly distributed integer over the full `u64` range.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`] when the source fails.
pub fn sample_u64(source: &mut dyn EntropySource) -> Result<u64> {
    sample_uniform(source, 0, u64::MAX)
}
