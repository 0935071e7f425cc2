//! Lenient coercion of request parameters.

/// Parses `value` as an integer, falling back to `default` and clamping
/// to the given bounds.
///
/// Typical use is query parameters such as page numbers, where garbage
/// input should degrade to a sane default rather than error. The bounds
/// also apply to the fallback default.
#[must_use]
pub fn clean_int(
    value: &str,
    default: i64,
    min_value: Option<i64>,
    max_value: Option<i64>,
) -> i64 {
    let mut value = value.trim().parse::<i64>().unwrap_or(default);
    if let Some(min_value) = min_value {
        value = value.max(min_value);
    }
    if let Some(max_value) = max_value {
        value = value.min(max_value);
    }
    value
}

/// Interprets common form-value spellings of truth.
#[must_use]
pub fn str_to_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "on" | "1"
    )
}
