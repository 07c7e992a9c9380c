//! Fixed-width unsigned integer
//!
//! - `core`: the type, constants, bit access, comparison and formatting
//! - `arith`: flagged addition, subtraction and multiply-accumulate
//! - `shift`: partial (sub-word) and whole-word shifts
//! - `div`: bit-serial long division
//! - `ops`: operator traits for equal widths
//! - `conv`: native integers, byte serialization and string literals

mod arith;
mod conv;
mod core;
mod div;
mod ops;
mod shift;

pub use self::core::Uint;
