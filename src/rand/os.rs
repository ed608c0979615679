//! Operating system entropy backends.
//!
//! Unix targets keep one handle to `/dev/urandom` open for the life of the
//! source and pin the pool with `mlock`. Every other target asks the
//! platform generator through `getrandom` and leaves the pool unpinned.

use std::io;

#[cfg(unix)]
mod imp {
    use std::fs::File;
    use std::io::{self, Read};
    use std::path::Path;

    const DEVICE: &str = "/dev/urandom";

    pub fn source_name() -> &'static str {
        DEVICE
    }

    pub(super) fn is_available() -> bool {
        Path::new(DEVICE).exists()
    }

    pub struct Device(File);

    impl Device {
        pub fn open() -> io::Result<Self> {
            if !is_available() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{DEVICE} is not present on this system"),
                ));
            }
            File::open(DEVICE).map(Device)
        }

        pub fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
            self.0.read_exact(buf)
        }
    }

    pub fn lock(buf: &[u8]) -> bool {
        unsafe { libc::mlock(buf.as_ptr() as *const libc::c_void, buf.len()) == 0 }
    }

    pub fn unlock(buf: &[u8]) {
        unsafe { libc::munlock(buf.as_ptr() as *const libc::c_void, buf.len()) };
    }
}

#[cfg(not(unix))]
mod imp {
    use std::io;

    pub fn source_name() -> &'static str {
        "getrandom"
    }

    pub struct Device;

    impl Device {
        pub fn open() -> io::Result<Self> {
            Ok(Device)
        }

        pub fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
            getrandom::fill(buf).map_err(|e| io::Error::other(e.to_string()))
        }
    }

    pub fn lock(_buf: &[u8]) -> bool {
        false
    }

    pub fn unlock(_buf: &[u8]) {}
}

pub(crate) use imp::{lock, source_name, unlock};

/// Handle on the platform entropy backend.
pub(crate) struct Device(imp::Device);

impl Device {
    pub(crate) fn open() -> io::Result<Self> {
        imp::Device::open().map(Device)
    }

    /// Fill `buf` completely or fail.
    pub(crate) fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.0.fill(buf)
    }
}
