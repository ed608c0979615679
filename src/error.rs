//! Error types.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("password length must be a positive number")]
    InvalidLength,

    #[error("password length {length} exceeds the maximum of {max}")]
    LengthTooLarge { length: usize, max: usize },

    #[error("at least one character class must be selected")]
    NoCharacterClass,

    #[error("minimum must be less than maximum (min: {min}, max: {max})")]
    EmptyRange { min: i32, max: i32 },

    #[error("byte count must be a positive number")]
    ZeroByteCount,

    #[error("password count must be a positive number")]
    ZeroCount,

    #[error("entropy source failed: {0}")]
    Entropy(#[from] io::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value outside the operation's domain.
    InvalidArgument,
    /// The OS entropy device could not be read.
    Entropy,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Entropy(_) => ErrorKind::Entropy,
            _ => ErrorKind::InvalidArgument,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
