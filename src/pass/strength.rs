//! Password strength estimates: length rating and alphabet entropy.

use std::fmt;

use super::{GenerationOptions, charset};

// =============================================================================
// Length rating
// =============================================================================

/// Coarse rating of a password by length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SecurityLevel {
    Weak,
    Medium,
    Strong,
    Perfect,
}

impl SecurityLevel {
    pub fn from_length(length: usize) -> Self {
        match length {
            0..8 => SecurityLevel::Weak,
            8..12 => SecurityLevel::Medium,
            12..16 => SecurityLevel::Strong,
            _ => SecurityLevel::Perfect,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            SecurityLevel::Weak => "Your password is too short!",
            SecurityLevel::Medium => "Your password is not long enough!",
            SecurityLevel::Strong => "Your password looks secure!",
            SecurityLevel::Perfect => "Your password is very strong!",
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SecurityLevel::Weak => "Weak",
            SecurityLevel::Medium => "Medium",
            SecurityLevel::Strong => "Strong",
            SecurityLevel::Perfect => "Perfect",
        })
    }
}

/// Rate an existing password. Length counts characters, not bytes.
pub fn rate_length(password: &str) -> SecurityLevel {
    SecurityLevel::from_length(password.chars().count())
}

// =============================================================================
// Entropy
// =============================================================================

/// Bits of entropy for `length` symbols drawn from `charset_size` choices.
pub fn calculate_entropy(length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Entropy of a password generated with `options`.
///
/// Treats every position as a uniform draw from the full alphabet, which
/// slightly overstates passwords whose length is close to the class count.
pub fn entropy_bits(options: &GenerationOptions) -> f64 {
    calculate_entropy(options.length, charset::size(options))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntropyStrength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl EntropyStrength {
    pub fn from_bits(bits: f64) -> Self {
        match bits as u32 {
            0..=35 => EntropyStrength::Weak,
            36..=59 => EntropyStrength::Fair,
            60..=127 => EntropyStrength::Strong,
            _ => EntropyStrength::VeryStrong,
        }
    }
}

impl fmt::Display for EntropyStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntropyStrength::Weak => "Weak",
            EntropyStrength::Fair => "Fair",
            EntropyStrength::Strong => "Strong",
            EntropyStrength::VeryStrong => "Very Strong",
        })
    }
}
