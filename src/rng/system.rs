//! Operating system random words
//!
//! Reads eight bytes of OS entropy per word through the platform layer in
//! `crate::os`. A failed read (for example an interrupted system call) is
//! reported as transient.

use log::debug;

use crate::os::sys_random;
use crate::rng::{SourceUnavailable, WordSource};

/// Random word source backed by operating system entropy.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRng;

impl WordSource for SystemRng {
    fn try_next_word(&mut self) -> Result<u64, SourceUnavailable> {
        let mut buf = [0u8; 8];

        sys_random(&mut buf).map_err(|err| {
            debug!("operating system entropy read failed: {err}");
            SourceUnavailable
        })?;

        Ok(u64::from_le_bytes(buf))
    }
}
