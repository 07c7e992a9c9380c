//! Modular arithmetic
//!
//! - [`BarrettReducer`]: reduction against a fixed modulus through a
//!   precomputed reciprocal, replacing repeated long division with
//!   multiplications
//! - [`pow_mod`]: square-and-multiply exponentiation driven by a reducer
//!
//! Both keep their control flow independent of the values being reduced
//! or exponentiated.

mod barrett;
mod pow;

pub use barrett::BarrettReducer;
pub use pow::pow_mod;
