//! Crate error type
//!
//! Only parsing, key generation and reducer construction can fail.
//! Arithmetic reports overflow and underflow through return values instead.

use thiserror::Error;

/// Errors returned by fallible operations of this crate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The random word source kept failing while filling a value.
    #[error("random word source failed {attempts} consecutive times")]
    RandomGenerationExhausted {
        /// Number of attempts made for the word that could not be filled.
        attempts: u32,
    },

    /// A numeric literal contains a character that is neither a digit of
    /// its radix nor a separator.
    #[error("invalid character {character:?} at offset {offset} in numeric literal")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the literal.
        offset: usize,
    },

    /// A parsed or decoded value does not fit in the target width.
    #[error("value does not fit in {bits} bits")]
    Overflow {
        /// Width of the target type.
        bits: usize,
    },

    /// A reducer was requested for a zero modulus.
    #[error("modulus must be non-zero")]
    ZeroModulus,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
