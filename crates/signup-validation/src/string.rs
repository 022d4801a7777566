//! String predicates

/// Literal non-emptiness; whitespace counts as content
pub fn is_not_empty(value: &str) -> bool {
    !value.is_empty()
}

/// True when `value` is at least `min` long
///
/// Length is measured in UTF-16 code units, the way browsers report
/// `value.length`: "pässwörd" is eight long, an emoji outside the BMP is two.
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.encode_utf16().count() >= min
}

/// Exact equality, used for password confirmation
pub fn is_equal_to_other_value(value: &str, other: &str) -> bool {
    value == other
}
