//! Character classes and alphabet building for password generation.

use std::fmt;

use super::GenerationOptions;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?/";

/// One of the four fixed character sets.
///
/// Variant order is significant: it is both the alphabet build order and the
/// order in which guaranteed characters are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    /// The class's characters, all ASCII.
    pub const fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub const fn len(self) -> usize {
        self.chars().len()
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    /// The class `c` belongs to, if any.
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    pub const fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Special => "special",
        }
    }

    fn is_selected(self, options: &GenerationOptions) -> bool {
        match self {
            CharacterClass::Uppercase => options.uppercase,
            CharacterClass::Lowercase => options.lowercase,
            CharacterClass::Digits => options.numbers,
            CharacterClass::Special => options.special,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selected classes, in fixed class order.
pub fn selected(options: &GenerationOptions) -> Vec<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| class.is_selected(options))
        .collect()
}

/// Build the filler alphabet: selected classes concatenated in order.
pub fn build(options: &GenerationOptions) -> Vec<u8> {
    selected(options)
        .into_iter()
        .flat_map(|class| class.chars().iter().copied())
        .collect()
}

/// Alphabet size without building it (for entropy calculation).
pub fn size(options: &GenerationOptions) -> usize {
    selected(options).into_iter().map(CharacterClass::len).sum()
}
