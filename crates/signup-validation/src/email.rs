//! Email shape check

/// Checks for a conventional `local@domain.tld` shape
///
/// Checks for:
/// - Exactly one '@' symbol
/// - Content before and after '@'
/// - At least one '.' in the domain, not leading, trailing or doubled
/// - No whitespace
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
