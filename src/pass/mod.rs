//! Password generation.

pub mod charset;
mod generate;
mod options;
pub mod strength;

pub use charset::CharacterClass;
pub use generate::PasswordGenerator;
pub use options::{GenerationOptions, MAX_LENGTH};
