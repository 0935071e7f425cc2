//! String splitting helpers.

/// Splits `s` on any of the characters in `seps`.
///
/// Empty input or an empty separator set yields the input unchanged as a
/// single element. Adjacent separators produce empty segments, matching
/// the behavior of a plain single-separator split.
#[must_use]
pub fn multi_split<'a>(s: &'a str, seps: &str) -> Vec<&'a str> {
    if s.is_empty() || seps.is_empty() {
        return vec![s];
    }
    s.split(|ch| seps.contains(ch)).collect()
}
