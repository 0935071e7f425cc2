//! Keymint — checksum and check-digit routines.
//!
//! CRC-16 for short payload integrity, Luhn validation for check-digit
//! numbers, and salted hex digests.

pub mod crc16;
pub mod digest;
pub mod luhn;
