//! Urandom pool - OS entropy served through a small locked buffer.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, trace, warn};
use zeroize::Zeroize;

use super::RandomSource;
use super::os::{self, Device};
use crate::error::Result;

const POOL_SIZE: usize = 4096;

// =============================================================================
// OsRandom
// =============================================================================

/// Entropy source holding one handle on the OS generator.
///
/// On Unix that is an open `/dev/urandom`; elsewhere the platform generator
/// is reached through `getrandom`. The handle and the pool are acquired in
/// [`OsRandom::open`] and released when the value is dropped; the pool is
/// wiped before its memory is freed. Reads are serialized through an
/// internal lock, so a single instance can be shared between threads.
pub struct OsRandom {
    pool: Mutex<Pool>,
}

impl OsRandom {
    pub fn open() -> Result<Self> {
        let device = Device::open()?;
        let buf = Box::new([0u8; POOL_SIZE]);
        let locked = os::lock(&buf[..]);
        if !locked {
            warn!(source = os::source_name(), "mlock failed, entropy pool may be swapped to disk");
        }

        // Built before the first fill so a failed read still unwinds through Drop.
        let mut pool = Pool {
            device,
            buf,
            pos: POOL_SIZE,
            locked,
        };
        pool.refill()?;

        debug!(source = os::source_name(), pool_size = POOL_SIZE, locked, "entropy source opened");
        Ok(Self {
            pool: Mutex::new(pool),
        })
    }

    /// Whether the pool is pinned in RAM.
    pub fn is_memory_locked(&self) -> bool {
        self.pool
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .locked
    }
}

impl RandomSource for OsRandom {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        // A panic mid-copy leaves at worst a stale cursor; the next take repairs it.
        let mut pool = self.pool.lock().unwrap_or_else(PoisonError::into_inner);
        pool.take(buf)
    }
}

impl fmt::Debug for OsRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OsRandom")
            .field("source", &os::source_name())
            .field("pool_size", &POOL_SIZE)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Pool management
// =============================================================================

struct Pool {
    device: Device,
    buf: Box<[u8; POOL_SIZE]>,
    pos: usize,
    locked: bool,
}

impl Pool {
    fn take(&mut self, out: &mut [u8]) -> Result<()> {
        let mut filled = 0;

        while filled < out.len() {
            if self.pos >= POOL_SIZE {
                self.refill()?;
            }

            let n = (POOL_SIZE - self.pos).min(out.len() - filled);
            let end = self.pos + n;
            out[filled..filled + n].copy_from_slice(&self.buf[self.pos..end]);
            // Served bytes never stay behind in the pool.
            self.buf[self.pos..end].zeroize();
            self.pos = end;
            filled += n;
        }

        Ok(())
    }

    #[cold]
    fn refill(&mut self) -> Result<()> {
        // Marked empty first: a short read must not leave partial bytes servable.
        self.pos = POOL_SIZE;
        self.device.fill(&mut self.buf[..])?;
        self.pos = 0;
        trace!(pool_size = POOL_SIZE, "entropy pool refilled");
        Ok(())
    }
}

impl Drop for Pool {
    fn drop(&mut self) {
        self.buf[..].zeroize();
        if self.locked {
            os::unlock(&self.buf[..]);
        }
        debug!(source = os::source_name(), "entropy source closed");
    }
}
