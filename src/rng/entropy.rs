//! Default entropy source selection

use log::debug;

use crate::rng::{HardwareRng, SourceUnavailable, SystemRng, WordSource};

/// The source used when the caller does not supply one.
///
/// Prefers `RDRAND` and falls back to operating system entropy on CPUs
/// without it.
#[derive(Debug, Clone, Copy)]
pub enum EntropySource {
    /// x86-64 `RDRAND`.
    Hardware(HardwareRng),
    /// Operating system entropy.
    System(SystemRng),
}

impl EntropySource {
    /// Picks the best source available on this machine.
    pub fn detect() -> Self {
        match HardwareRng::new() {
            Some(hardware) => Self::Hardware(hardware),
            None => {
                debug!("RDRAND unavailable, using operating system entropy");
                Self::System(SystemRng)
            }
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::detect()
    }
}

impl WordSource for EntropySource {
    fn try_next_word(&mut self) -> Result<u64, SourceUnavailable> {
        match self {
            Self::Hardware(source) => source.try_next_word(),
            Self::System(source) => source.try_next_word(),
        }
    }
}
