//! Character variety section - checks for lowercase, uppercase, numbers, symbols.

use super::{PasswordProfile, SectionResult};

/// Checks if the password draws from all four character classes.
///
/// # Returns
/// - `Some(recommendation)` naming the missing classes
/// - `None` if all classes are present
pub fn character_variety_section(profile: &PasswordProfile<'_>) -> SectionResult {
    let missing: Vec<&str> = profile
        .charset
        .missing_classes()
        .into_iter()
        .map(|class| class.name())
        .collect();

    if !missing.is_empty() {
        return Some(format!(
            "Add more character types (missing: {}).",
            missing.join(", ")
        ));
    }
    None
}
