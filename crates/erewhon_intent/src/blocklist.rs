//! Spam and low-effort markers that veto a comment outright.

/// Tokens that mark a comment as non-creative. Matched as substrings of the
/// lower-cased text.
pub const BLOCKLIST: &[&str] = &["spam", "first", "subscribe", "like if", "boring"];

/// Returns true if the lower-cased text contains any blocklisted token.
///
/// # Examples
///
/// ```
/// use erewhon_intent::is_blocked;
///
/// assert!(is_blocked("first!!"));
/// assert!(!is_blocked("add a dragon"));
/// ```
pub fn is_blocked(lowered: &str) -> bool {
    BLOCKLIST.iter().any(|token| lowered.contains(*token))
}
