//! Primitive types
//!
//! This module defines the fixed-width unsigned integer used by every
//! arithmetic routine in the crate, together with the word-level kernel it
//! is built on.
//!
//! `Uint<BITS, LIMBS>` stores exactly `LIMBS = ceil(BITS / 64)` words, least
//! significant first. The width is part of the type, so every loop in the
//! kernel runs a number of iterations fixed at compile time.
//!
//! The aliases below cover the widths used by the finite-field
//! Diffie-Hellman groups in [`crate::keys::dh`] and a few common sizes.

pub(crate) mod limbs;
mod uint;

/// Fixed-width unsigned integer.
pub use uint::Uint;

/// 64-bit unsigned integer.
pub type U64 = Uint<64, 1>;
/// 128-bit unsigned integer.
pub type U128 = Uint<128, 2>;
/// 256-bit unsigned integer.
pub type U256 = Uint<256, 4>;
/// 512-bit unsigned integer.
pub type U512 = Uint<512, 8>;
/// 1024-bit unsigned integer.
pub type U1024 = Uint<1024, 16>;
/// 1536-bit unsigned integer.
pub type U1536 = Uint<1536, 24>;
/// 2048-bit unsigned integer.
pub type U2048 = Uint<2048, 32>;
/// 3072-bit unsigned integer.
pub type U3072 = Uint<3072, 48>;
/// 4096-bit unsigned integer.
pub type U4096 = Uint<4096, 64>;
/// 8192-bit unsigned integer.
pub type U8192 = Uint<8192, 128>;
