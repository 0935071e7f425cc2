//! IPv4 address/integer conversion.

use std::net::Ipv4Addr;

use keymint_core::error::{Error, Result};

/// Converts a dotted-quad IPv4 address to its 32-bit integer form.
///
/// Surrounding whitespace is tolerated.
///
/// # Errors
///
/// Returns [`Error::Input`] when `ip` is not a valid IPv4 address.
pub fn ipv4_to_int(ip: &str) -> Result<u32> {
    let addr: Ipv4Addr = ip
        .trim()
        .parse()
        .map_err(|_| Error::Input(format!("invalid IPv4 address: {ip:?}")))?;
    Ok(u32::from(addr))
}

/// Converts a 32-bit integer to its dotted-quad IPv4 form.
#[must_use]
pub fn ipv4_to_str(ip: u32) -> String {
    Ipv4Addr::from(ip).to_string()
}
