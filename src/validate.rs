// Input validation.
// Character-class checks for usernames and stored timestamps.

/// Whether `name` is a non-empty run of lowercase ASCII letters and digits.
///
/// GitHub itself allows mixed case and hyphens; this tool does not.
pub fn is_valid_username(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Whether `value` looks like an ISO-8601 timestamp: digits plus `T Z - + : .`.
///
/// Only the character set is checked, not the calendar.
pub fn is_valid_timestamp(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| matches!(c, '0'..='9' | 'T' | 'Z' | '-' | '+' | ':' | '.'))
}
