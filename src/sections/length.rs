//! Length section - recommends longer passwords.

use super::{PasswordProfile, SectionResult};

const RECOMMENDED_MIN_LENGTH: usize = 12;

/// Checks if the password is long enough to skip the length recommendation.
///
/// # Returns
/// - `Some(recommendation)` if password is shorter than 12 characters
/// - `None` otherwise
pub fn length_section(profile: &PasswordProfile<'_>) -> SectionResult {
    if profile.length < RECOMMENDED_MIN_LENGTH {
        return Some("Make your password longer (16+ characters is recommended).".to_string());
    }
    None
}
