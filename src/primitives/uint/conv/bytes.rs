//! Canonical byte serialization
//!
//! The canonical form is the word array written least significant word
//! first, each word in little-endian byte order: `LIMBS * 8` bytes in total.
//! It is the form handed to hash functions and to the wire formats that
//! carry public keys.

use crate::primitives::Uint;
use crate::{Error, Result};

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {
    /// Serializes to `LIMBS * 8` little-endian bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.limbs.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    /// Parses little-endian bytes of any length.
    ///
    /// Missing high bytes are taken as zero.
    ///
    /// # Errors
    /// [`Error::Overflow`] if a non-zero bit lies at or above `BITS`.
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self> {
        let mut limbs = [0u64; LIMBS];

        for (index, &byte) in bytes.iter().enumerate() {
            match limbs.get_mut(index / 8) {
                Some(word) => *word |= (byte as u64) << (8 * (index % 8)),
                None if byte == 0 => {}
                None => return Err(Error::Overflow { bits: BITS }),
            }
        }

        let mut value = Self { limbs };

        if value.normalize() {
            return Err(Error::Overflow { bits: BITS });
        }

        Ok(value)
    }
}
