//! Predefined encoding alphabets.
//!
//! Symbol order is part of the external contract: any identifier encoded
//! with one of these alphabets may live in a database or a URL, so the
//! order must never change.

/// 85-symbol alphabet in RFC 1924 order: digits, uppercase, lowercase,
/// punctuation. The densest predefined encoding.
pub const BASE85: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

/// Hexadecimal-compatible 16-symbol alphabet; the first 16 symbols of
/// [`BASE85`].
pub const BASE16: &str = "0123456789ABCDEF";

/// RFC 4648 base32 alphabet.
pub const BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// RFC 4648 base32hex alphabet; the first 32 symbols of [`BASE85`].
pub const BASE32HEX: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// 62-symbol alphanumeric alphabet; the first 62 symbols of [`BASE85`].
/// The conventional choice for URL shorteners and short database keys.
pub const BASE62: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// RFC 4648 base64 alphabet.
pub const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// RFC 4648 URL-safe base64 alphabet; [`BASE64`] with the last two
/// symbols replaced by `-` and `_`.
pub const BASE64URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
