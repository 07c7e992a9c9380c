//! Adapter from `rand_core` generators

use rand_core::RngCore;

use crate::rng::{SourceUnavailable, WordSource};

/// Wraps any [`RngCore`] as a [`WordSource`].
///
/// Errors from [`RngCore::try_fill_bytes`] are reported as transient.
#[derive(Debug, Clone)]
pub struct RngWords<R>(pub R);

impl<R> RngWords<R> {
    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: RngCore> WordSource for RngWords<R> {
    fn try_next_word(&mut self) -> Result<u64, SourceUnavailable> {
        let mut buf = [0u8; 8];
        self.0
            .try_fill_bytes(&mut buf)
            .map_err(|_| SourceUnavailable)?;

        Ok(u64::from_le_bytes(buf))
    }
}
