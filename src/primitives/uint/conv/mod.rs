//! Conversions for `Uint`.
//!
//! Split by representation: native integers, canonical bytes and string
//! literals.

mod bytes;
mod literal;
mod native;
