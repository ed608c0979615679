//! Password generation with guaranteed character classes.
//!
//! A [`PasswordGenerator`] draws every character through an injected
//! [`RandomSource`]; [`OsRandom`] is the production source, reading
//! `/dev/urandom` through a locked, self-wiping pool.

pub mod error;
pub mod pass;
pub mod rand;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::pass::{CharacterClass, GenerationOptions, PasswordGenerator};
pub use crate::rand::{OsRandom, RandomSource};
