//! Random word sources
//!
//! Private exponents are filled one 64-bit word at a time from a
//! [`WordSource`]. A source may fail transiently; [`fill_words`] retries
//! each word up to [`RETRY_LIMIT`] times before giving up with
//! [`Error::RandomGenerationExhausted`]. Exhaustion only aborts the value
//! being filled.
//!
//! Implementations:
//! - [`HardwareRng`]: the x86-64 `RDRAND` instruction
//! - [`SystemRng`]: operating system entropy
//! - [`EntropySource`]: hardware when available, the OS otherwise
//! - [`RngWords`]: any `rand_core::RngCore`, e.g. a seeded generator in tests

mod entropy;
mod hardware;
mod system;
mod words;

use log::{debug, warn};
use thiserror::Error;

use crate::{Error, Result};

pub use entropy::EntropySource;
pub use hardware::HardwareRng;
pub use system::SystemRng;
pub use words::RngWords;

/// Number of retries allowed for a single word after its first failed
/// attempt.
pub const RETRY_LIMIT: u32 = 10;

/// Transient failure of a [`WordSource`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("random word source temporarily unavailable")]
pub struct SourceUnavailable;

/// A source of uniformly random 64-bit words.
///
/// Each call either yields a word or reports a transient failure; callers
/// retry a bounded number of times.
pub trait WordSource {
    /// Returns the next random word.
    fn try_next_word(&mut self) -> core::result::Result<u64, SourceUnavailable>;
}

impl<S: WordSource + ?Sized> WordSource for &mut S {
    fn try_next_word(&mut self) -> core::result::Result<u64, SourceUnavailable> {
        (**self).try_next_word()
    }
}

/// Fills `out` from `source`, retrying each word up to [`RETRY_LIMIT`]
/// times.
///
/// # Errors
/// [`Error::RandomGenerationExhausted`] when one word fails
/// `RETRY_LIMIT + 1` times in a row. Words already written are left in
/// place and must be discarded by the caller.
pub fn fill_words<S: WordSource + ?Sized>(source: &mut S, out: &mut [u64]) -> Result<()> {
    for word in out.iter_mut() {
        *word = next_word(source)?;
    }

    Ok(())
}

fn next_word<S: WordSource + ?Sized>(source: &mut S) -> Result<u64> {
    let mut attempts = 0;

    loop {
        match source.try_next_word() {
            Ok(word) => return Ok(word),
            Err(SourceUnavailable) => {
                attempts += 1;

                if attempts > RETRY_LIMIT {
                    warn!("random word source failed {attempts} times in a row, giving up");
                    return Err(Error::RandomGenerationExhausted { attempts });
                }

                debug!("random word source unavailable, retry {attempts}/{RETRY_LIMIT}");

                // Give sibling hyperthreads a chance to refill the hardware pool.
                std::hint::spin_loop();
            }
        }
    }
}
