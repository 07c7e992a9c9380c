//! Hardware random words (x86-64 `RDRAND`)
//!
//! `RDRAND` signals a transient underflow of the on-chip entropy pool by
//! clearing the carry flag; that case is surfaced as
//! [`SourceUnavailable`] so the caller's retry budget applies.

use crate::rng::{SourceUnavailable, WordSource};

/// Random word source backed by the `RDRAND` instruction.
///
/// Only constructible on CPUs that advertise the instruction.
#[derive(Debug, Clone, Copy)]
pub struct HardwareRng {
    _detected: (),
}

impl HardwareRng {
    /// Returns a source if the CPU supports `RDRAND`, `None` otherwise.
    pub fn new() -> Option<Self> {
        rdrand_available().then_some(Self { _detected: () })
    }
}

impl WordSource for HardwareRng {
    fn try_next_word(&mut self) -> Result<u64, SourceUnavailable> {
        rdrand64().ok_or(SourceUnavailable)
    }
}

#[cfg(target_arch = "x86_64")]
fn rdrand_available() -> bool {
    std::arch::is_x86_feature_detected!("rdrand")
}

#[cfg(target_arch = "x86_64")]
fn rdrand64() -> Option<u64> {
    #[target_feature(enable = "rdrand")]
    unsafe fn step() -> Option<u64> {
        let mut word = 0u64;
        // SAFETY: `word` is a valid, writable u64.
        let ok = unsafe { core::arch::x86_64::_rdrand64_step(&mut word) };
        (ok == 1).then_some(word)
    }

    // SAFETY: a `HardwareRng` is only handed out after `rdrand_available`
    // confirmed the CPU feature, and this function is only reached through it.
    unsafe { step() }
}

#[cfg(not(target_arch = "x86_64"))]
fn rdrand_available() -> bool {
    false
}

#[cfg(not(target_arch = "x86_64"))]
fn rdrand64() -> Option<u64> {
    None
}
