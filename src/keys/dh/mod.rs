//! Finite-field Diffie-Hellman key agreement.
//!
//! ## Structure
//!
//! - `core`  
//!   The [`DiffieHellman`] state machine: private exponent generation,
//!   public key, shared key and keying material derivation.
//! - `groups`  
//!   Group parameters, including the RFC 3526 MODP groups.

mod core;
pub mod groups;

pub use self::core::{DhState, DiffieHellman};
pub use self::groups::{Group, MODP_1536, MODP_4096};
