//! Arbitrary-radix integer/string conversion.

use std::collections::HashMap;

use keymint_core::error::{Error, Result};

use crate::alphabet::BASE85;

/// Converter between non-negative integers and their string form in a
/// fixed radix over a fixed alphabet.
///
/// Construction validates the radix/alphabet pairing and builds the
/// symbol lookup once. The codec is immutable afterwards and cheap to
/// reuse across many conversions, including from multiple threads.
#[derive(Debug, Clone)]
pub struct NumConv {
    radix: u32,
    /// The first `radix` symbols of the alphabet, indexed by digit value.
    digits: Vec<char>,
    /// Reverse lookup restricted to the first `radix` symbols.
    values: HashMap<char, u32>,
    /// Whether `digits` matches the canonical ordering exactly, enabling
    /// the native formatter fast path for radixes 8, 10 and 16.
    canonical: bool,
}

impl NumConv {
    /// Creates a codec for `radix` over the first `radix` symbols of
    /// `alphabet`.
    ///
    /// The alphabet may be longer than the radix; the excess symbols are
    /// ignored for conversion but still checked for duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `radix` is below 2 or exceeds
    /// the alphabet length, or if `alphabet` contains a duplicate symbol.
    pub fn new(radix: u32, alphabet: &str) -> Result<Self> {
        let symbols: Vec<char> = alphabet.chars().collect();
        if radix < 2 || radix as usize > symbols.len() {
            return Err(Error::Configuration(format!(
                "radix must be >= 2 and <= {}",
                symbols.len()
            )));
        }
        let mut values = HashMap::with_capacity(symbols.len());
        for (value, symbol) in symbols.iter().copied().enumerate() {
            let value = u32::try_from(value).map_err(|_| {
                Error::Configuration("alphabet length exceeds u32".to_owned())
            })?;
            if values.insert(symbol, value).is_some() {
                return Err(Error::Configuration(format!(
                    "duplicate symbol {symbol:?} in alphabet {alphabet:?}"
                )));
            }
        }
        values.retain(|_, value| *value < radix);
        let digits: Vec<char> = symbols[..radix as usize].to_vec();
        let canonical = digits
            .iter()
            .copied()
            .eq(BASE85.chars().take(radix as usize));
        Ok(Self {
            radix,
            digits,
            values,
            canonical,
        })
    }

    /// The radix this codec converts with.
    #[must_use]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Encodes `num` most-significant digit first.
    ///
    /// Zero encodes to the single zero-digit symbol. For radixes 8, 10
    /// and 16 over the canonical digit ordering the native formatter is
    /// used; its output is byte-identical to the digit loop.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn encode(&self, num: u128) -> String {
        if self.canonical {
            match self.radix {
                8 => return format!("{num:o}"),
                10 => return num.to_string(),
                16 => return format!("{num:X}"),
                _ => {}
            }
        }
        let radix = u128::from(self.radix);
        let mut encoded = Vec::new();
        let mut num = num;
        loop {
            encoded.push(self.digits[(num % radix) as usize]);
            if num < radix {
                break;
            }
            num /= radix;
        }
        encoded.iter().rev().collect()
    }

    /// Decodes a string of this codec's symbols back to an integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] when a character is not among the first
    /// `radix` symbols of the alphabet, or when the decoded value does
    /// not fit in 128 bits.
    pub fn decode(&self, num: &str) -> Result<u128> {
        let radix = u128::from(self.radix);
        let mut decoded: u128 = 0;
        for ch in num.chars() {
            let Some(&digit) = self.values.get(&ch) else {
                return Err(Error::Input(format!(
                    "invalid literal for radix {}: {num:?}",
                    self.radix
                )));
            };
            decoded = decoded
                .checked_mul(radix)
                .and_then(|value| value.checked_add(u128::from(digit)))
                .ok_or_else(|| {
                    Error::Input(format!("value does not fit in 128 bits: {num:?}"))
                })?;
        }
        Ok(decoded)
    }
}

/// One-shot encode through a throwaway codec.
///
/// # Errors
///
/// Returns [`Error::Configuration`] for an invalid radix/alphabet pair.
pub fn encode(num: u128, radix: u32, alphabet: &str) -> Result<String> {
    Ok(NumConv::new(radix, alphabet)?.encode(num))
}

/// One-shot decode through a throwaway codec.
///
/// # Errors
///
/// Returns [`Error::Configuration`] for an invalid radix/alphabet pair
/// and [`Error::Input`] for a string the codec cannot decode.
pub fn decode(num: &str, radix: u32, alphabet: &str) -> Result<u128> {
    NumConv::new(radix, alphabet)?.decode(num)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{BASE16, BASE32, BASE62, BASE64URL};

    // --- construction tests ---

    #[test]
    fn test_new_rejects_radix_below_two() {
        for radix in [0, 1] {
            let result = NumConv::new(radix, BASE85);
            match result.unwrap_err() {
                Error::Configuration(msg) => {
                    assert_eq!(msg, "radix must be >= 2 and <= 85");
                }
                other => panic!("expected Configuration, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_new_rejects_radix_beyond_alphabet() {
        assert!(NumConv::new(86, BASE85).is_err());
        assert!(NumConv::new(17, BASE16).is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_symbols() {
        let result = NumConv::new(3, "abcda");
        match result.unwrap_err() {
            Error::Configuration(msg) => {
                assert!(msg.contains("duplicate symbol"), "unexpected: {msg}");
            }
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn test_new_checks_duplicates_past_the_radix() {
        // The trailing duplicate is outside the first 3 symbols but still
        // invalidates the alphabet.
        assert!(NumConv::new(3, "abcbd").is_err());
    }

    #[test]
    fn test_new_accepts_radix_equal_to_alphabet_length() {
        let codec = NumConv::new(4, "rofl").unwrap();
        assert_eq!(codec.radix(), 4);
    }

    // --- encode tests ---

    #[test]
    fn test_encode_hexadecimal() {
        let codec = NumConv::new(16, BASE16).unwrap();
        assert_eq!(codec.encode(3_735_928_559), "DEADBEEF");
    }

    #[test]
    fn test_encode_binary() {
        let codec = NumConv::new(2, BASE85).unwrap();
        assert_eq!(codec.encode(19_284), "100101101010100");
    }

    #[test]
    fn test_encode_custom_alphabet() {
        let codec = NumConv::new(4, "rofl").unwrap();
        assert_eq!(codec.encode(37), "foo");
    }

    #[test]
    fn test_encode_base85() {
        let codec = NumConv::new(85, BASE85).unwrap();
        assert_eq!(codec.encode(2_693_233_728_041_137), "~123AFz@");
    }

    #[test]
    fn test_encode_zero_is_single_zero_digit() {
        assert_eq!(NumConv::new(16, BASE16).unwrap().encode(0), "0");
        assert_eq!(NumConv::new(2, BASE85).unwrap().encode(0), "0");
        assert_eq!(NumConv::new(4, "rofl").unwrap().encode(0), "r");
    }

    #[test]
    fn test_encode_decimal_matches_display() {
        let codec = NumConv::new(10, BASE85).unwrap();
        assert_eq!(codec.encode(1_234_567_890), "1234567890");
        assert_eq!(codec.encode(u128::MAX), u128::MAX.to_string());
    }

    #[test]
    fn test_encode_octal() {
        let codec = NumConv::new(8, BASE85).unwrap();
        assert_eq!(codec.encode(0o755), "755");
    }

    #[test]
    fn test_encode_non_canonical_hex_skips_fast_path() {
        // Lowercase digits must come out lowercase; the uppercase native
        // formatter would diverge from the digit loop here.
        let codec = NumConv::new(16, "0123456789abcdef").unwrap();
        assert_eq!(codec.encode(3_735_928_559), "deadbeef");
    }

    // --- decode tests ---

    #[test]
    fn test_decode_hexadecimal() {
        let codec = NumConv::new(16, BASE16).unwrap();
        assert_eq!(codec.decode("DEADBEEF").unwrap(), 3_735_928_559);
    }

    #[test]
    fn test_decode_binary() {
        let codec = NumConv::new(2, BASE85).unwrap();
        assert_eq!(codec.decode("100101101010100").unwrap(), 19_284);
    }

    #[test]
    fn test_decode_custom_alphabet() {
        let codec = NumConv::new(4, "rofl").unwrap();
        assert_eq!(codec.decode("foo").unwrap(), 37);
    }

    #[test]
    fn test_decode_base85() {
        let codec = NumConv::new(85, BASE85).unwrap();
        assert_eq!(codec.decode("~123AFz@").unwrap(), 2_693_233_728_041_137);
    }

    #[test]
    fn test_decode_rejects_symbol_outside_radix() {
        // 'G' is in BASE85 but not among the first 16 symbols.
        let codec = NumConv::new(16, BASE85).unwrap();
        let result = codec.decode("DEADG");
        match result.unwrap_err() {
            Error::Input(msg) => {
                assert_eq!(msg, "invalid literal for radix 16: \"DEADG\"");
            }
            other => panic!("expected Input, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_lowercase_for_uppercase_alphabet() {
        let codec = NumConv::new(16, BASE16).unwrap();
        assert!(codec.decode("deadbeef").is_err());
    }

    #[test]
    fn test_decode_overflow_is_reported() {
        let codec = NumConv::new(16, BASE16).unwrap();
        // 33 hex digits: one past the 128-bit capacity.
        let too_long = "F".repeat(33);
        match codec.decode(&too_long).unwrap_err() {
            Error::Input(msg) => {
                assert!(msg.contains("does not fit"), "unexpected: {msg}");
            }
            other => panic!("expected Input, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_max_value_round_trips() {
        let codec = NumConv::new(16, BASE16).unwrap();
        let encoded = codec.encode(u128::MAX);
        assert_eq!(codec.decode(&encoded).unwrap(), u128::MAX);
    }

    // --- round-trip tests ---

    #[test]
    fn test_round_trip_across_alphabets() {
        let values = [0u128, 1, 61, 62, 4_096, 19_284, 3_735_928_559, 1 << 56];
        for alphabet in [BASE16, BASE32, BASE62, BASE64URL, BASE85] {
            let radix = u32::try_from(alphabet.chars().count()).unwrap();
            let codec = NumConv::new(radix, alphabet).unwrap();
            for value in values {
                let encoded = codec.encode(value);
                assert_eq!(
                    codec.decode(&encoded).unwrap(),
                    value,
                    "round trip failed for {value} over radix {radix}"
                );
            }
        }
    }

    #[test]
    fn test_round_trip_string_side() {
        let codec = NumConv::new(62, BASE62).unwrap();
        for s in ["0", "z", "10", "kKeY", "7Zz9aQ"] {
            let decoded = codec.decode(s).unwrap();
            assert_eq!(codec.encode(decoded), s);
        }
    }

    // --- one-shot helper tests ---

    #[test]
    fn test_one_shot_helpers_match_codec() {
        assert_eq!(encode(3_735_928_559, 16, BASE16).unwrap(), "DEADBEEF");
        assert_eq!(decode("DEADBEEF", 16, BASE16).unwrap(), 3_735_928_559);
        assert!(encode(1, 1, BASE16).is_err());
    }
}
