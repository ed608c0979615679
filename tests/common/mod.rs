#![allow(dead_code)]

use std::sync::Mutex;

use pwforge::{RandomSource, Result};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Reproducible source: same seed, same passwords.
pub struct SeededRandom(Mutex<ChaCha20Rng>);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(ChaCha20Rng::seed_from_u64(seed)))
    }
}

impl RandomSource for SeededRandom {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        self.0.lock().unwrap().fill_bytes(buf);
        Ok(())
    }
}

/// Source that always answers with the same bytes.
pub struct ConstantRandom(pub u8);

impl RandomSource for ConstantRandom {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        buf.fill(self.0);
        Ok(())
    }
}

pub const SPECIAL: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";
