//! Fixed-width constant-time integers and finite-field Diffie-Hellman
//!
//! This crate provides the arithmetic needed for classic (MODP group)
//! Diffie-Hellman key agreement, built from the word up with fixed
//! iteration counts.
//!
//! # Module overview
//!
//! - `primitives`  
//!   `Uint<BITS, LIMBS>`, an unsigned integer of exactly `BITS` bits stored
//!   in `ceil(BITS / 64)` little-endian 64-bit words, and the word-level
//!   kernel (carry/borrow propagation, multiply-accumulate, shifts, long
//!   division) it is built on. Arithmetic never fails: overflow and
//!   underflow are returned as flags.
//!
//! - `modular`  
//!   Barrett reduction against a fixed modulus and square-and-multiply
//!   modular exponentiation on top of it.
//!
//! - `keys`  
//!   Diffie-Hellman key agreement over the RFC 3526 MODP groups or custom
//!   parameters, with keying material derived through a hash function from
//!   the `sha2` crate.
//!
//! - `rng`  
//!   The random word source abstraction used to generate private
//!   exponents, with hardware (RDRAND), operating system and `rand_core`
//!   backed implementations.
//!
//! # Timing behaviour
//!
//! Multiplication, division, Barrett reduction and exponentiation use loop
//! bounds that depend on type widths only and select between candidate
//! values with masks rather than branches. This is a property of the
//! source code; it is not verified by the test suite and needs dedicated
//! side-channel tooling to confirm on a given compiler and target.

mod error;
mod os;

pub mod keys;
pub mod modular;
pub mod primitives;
pub mod rng;

pub use error::{Error, Result};
