//! Deterministic sources for unit tests.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use super::RandomSource;
use crate::error::{Error, Result};

/// Serves a fixed byte script, failing once it runs dry.
pub(crate) struct ScriptedBytes {
    bytes: Mutex<VecDeque<u8>>,
    consumed: Mutex<usize>,
}

impl ScriptedBytes {
    pub(crate) fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: Mutex::new(bytes.iter().copied().collect()),
            consumed: Mutex::new(0),
        }
    }

    pub(crate) fn consumed(&self) -> usize {
        *self.consumed.lock().unwrap()
    }
}

impl RandomSource for ScriptedBytes {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        let mut bytes = self.bytes.lock().unwrap();
        if bytes.len() < buf.len() {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted").into());
        }
        for b in buf.iter_mut() {
            *b = bytes.pop_front().unwrap();
        }
        *self.consumed.lock().unwrap() += buf.len();
        Ok(())
    }
}

/// Answers `random_int` from a queue and records every requested range.
///
/// An empty queue answers `min`.
pub(crate) struct ScriptedInts {
    values: Mutex<VecDeque<i32>>,
    calls: Mutex<Vec<(i32, i32)>>,
}

impl ScriptedInts {
    pub(crate) fn new(values: &[i32]) -> Self {
        Self {
            values: Mutex::new(values.iter().copied().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(i32, i32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl RandomSource for ScriptedInts {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        buf.fill(0);
        Ok(())
    }

    fn random_int(&self, min_inclusive: i32, max_exclusive: i32) -> Result<i32> {
        if min_inclusive >= max_exclusive {
            return Err(Error::EmptyRange {
                min: min_inclusive,
                max: max_exclusive,
            });
        }
        self.calls.lock().unwrap().push((min_inclusive, max_exclusive));
        let v = self.values.lock().unwrap().pop_front().unwrap_or(min_inclusive);
        assert!(
            (min_inclusive..max_exclusive).contains(&v),
            "scripted value {v} outside {min_inclusive}..{max_exclusive}"
        );
        Ok(v)
    }
}
