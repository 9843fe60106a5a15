//! Password evaluation sections
//!
//! Each section checks one aspect of a password and may contribute a
//! recommendation.

mod breach;
mod length;
mod variety;

pub use breach::{breach_section, BREACH_RECOMMENDATION};
pub use length::length_section;
pub use variety::character_variety_section;

use crate::charset::CharsetInfo;

/// Facts about a non-empty password shared by all sections.
#[derive(Debug, Clone, Copy)]
pub struct PasswordProfile<'a> {
    /// Length in Unicode scalar values.
    pub length: usize,
    pub charset: &'a CharsetInfo,
}

/// Result type for section evaluation functions.
/// - `Some(recommendation)` - Section found something to improve
/// - `None` - Section passed
pub type SectionResult = Option<String>;
