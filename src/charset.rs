//! Character classes and pool-size detection.

use std::collections::BTreeSet;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed alphabet of this class (ASCII only).
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Number of characters in the alphabet: 26, 26, 10 or 32.
    pub fn size(self) -> usize {
        self.alphabet().len()
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    /// Short human name, also used in recommendations.
    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "numbers",
            CharacterClass::Symbol => "symbols",
        }
    }
}

/// Active classes of a password and the resulting pool size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharsetInfo {
    pub pool_size: usize,
    pub active_classes: BTreeSet<CharacterClass>,
}

impl CharsetInfo {
    /// Classes with no character present in the password, in canonical order.
    pub fn missing_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| !self.active_classes.contains(class))
            .collect()
    }
}

/// Scans the password and sums the alphabet sizes of the classes it uses.
///
/// Characters outside every alphabet (spaces, non-ASCII) are ignored here;
/// they still count toward the password length.
pub fn analyze_charset(password: &str) -> CharsetInfo {
    let active_classes: BTreeSet<CharacterClass> = CharacterClass::ALL
        .into_iter()
        .filter(|class| password.chars().any(|c| class.contains(c)))
        .collect();

    let pool_size = active_classes.iter().map(|class| class.size()).sum();

    CharsetInfo {
        pool_size,
        active_classes,
    }
}
