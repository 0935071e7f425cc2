//! Keymint — arbitrary-radix numeral codec.
//!
//! Converts non-negative integers to and from strings in any radix from
//! 2 up to the alphabet length, using configurable symbol alphabets.
//! Encoded identifiers are persisted and shared, so the predefined
//! alphabets in [`alphabet`] are part of the external contract.

pub mod alphabet;
pub mod codec;
