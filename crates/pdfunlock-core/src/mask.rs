//! Display masking for stored passwords.

/// Minimum length (in characters) at which a password is abbreviated.
const MIN_MASKED_LEN: usize = 4;

/// Number of leading characters kept visible by [`abbreviate`].
const VISIBLE_PREFIX: usize = 3;

/// Abbreviate a password for display in a selection list.
///
/// Passwords of four characters or more are shown as the first three
/// characters, an ellipsis, and the last character (`"abcdef"` becomes
/// `"abc…f"`). Shorter passwords are returned unchanged. Lengths are counted
/// in `char`s, so multi-byte characters are never split.
///
/// This is a presentation aid, not a security mechanism.
pub fn abbreviate(password: &str) -> String {
    let count = password.chars().count();
    if count < MIN_MASKED_LEN {
        return password.to_string();
    }
    let prefix: String = password.chars().take(VISIBLE_PREFIX).collect();
    // count >= 4, so there is always a last char
    let last = password.chars().next_back().unwrap_or_default();
    format!("{prefix}…{last}")
}
