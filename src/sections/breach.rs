//! Breach section - checks the password against the loaded wordlist.

use crate::wordlist::WordSet;

pub const BREACH_RECOMMENDATION: &str =
    "This password is in a known data breach. It offers no security and must not be used.";

/// Exact, case-sensitive lookup of the password in `words`.
///
/// # Returns
/// - `Some(recommendation)` if the password is in the wordlist
/// - `None` if there is no wordlist or the password is not in it
pub fn breach_section(password: &str, words: Option<&WordSet>) -> Option<String> {
    if words.is_some_and(|set| set.contains(password)) {
        return Some(BREACH_RECOMMENDATION.to_string());
    }
    None
}
