//! Key agreement.
//!
//! ## Diffie-Hellman
//!
//! The `dh` module implements classic Diffie-Hellman over the
//! multiplicative group of integers modulo a prime, on top of the
//! fixed-width integers of [`crate::primitives`] and the Barrett reducer of
//! [`crate::modular`].
//!
//! Each party draws a private exponent, publishes `g^x mod p` and raises
//! the peer's public value to its own exponent. Keying material is the
//! hash of the resulting shared value.
pub mod dh;
