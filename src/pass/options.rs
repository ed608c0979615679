//! Password generation options.

use super::charset::{self, CharacterClass};
use crate::error::{Error, Result};

/// Longest password the generator can index; draws are bounded by `i32`.
pub const MAX_LENGTH: usize = i32::MAX as usize;

/// What a single password must look like.
///
/// Defaults to 16 characters drawn from all four classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
}

impl GenerationOptions {
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_uppercase(mut self, include: bool) -> Self {
        self.uppercase = include;
        self
    }

    pub fn with_lowercase(mut self, include: bool) -> Self {
        self.lowercase = include;
        self
    }

    pub fn with_numbers(mut self, include: bool) -> Self {
        self.numbers = include;
        self
    }

    pub fn with_special(mut self, include: bool) -> Self {
        self.special = include;
        self
    }

    /// Check the invariants every generation relies on.
    ///
    /// Only `1..=MAX_LENGTH` and "some class selected" are enforced; tighter
    /// bounds belong to the caller.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::InvalidLength);
        }
        if self.length > MAX_LENGTH {
            return Err(Error::LengthTooLarge {
                length: self.length,
                max: MAX_LENGTH,
            });
        }
        if !self.any_class() {
            return Err(Error::NoCharacterClass);
        }
        Ok(())
    }

    pub fn any_class(&self) -> bool {
        self.uppercase || self.lowercase || self.numbers || self.special
    }

    pub fn classes(&self) -> Vec<CharacterClass> {
        charset::selected(self)
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            special: true,
        }
    }
}
