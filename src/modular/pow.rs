//! Modular exponentiation
//!
//! Right-to-left square-and-multiply. Every exponent bit costs exactly one
//! multiplication and one squaring: the multiplier is either the running
//! power or one, picked with a constant-time select, so the sequence of
//! operations is the same for every exponent of a given width.

use subtle::ConditionallySelectable;

use crate::Result;
use crate::modular::BarrettReducer;
use crate::primitives::Uint;

/// Computes `base^exponent mod m`, where `m` is the reducer's modulus.
///
/// Runs `EB` iterations (the exponent's declared width) whatever the
/// exponent's value.
pub fn pow_mod<const BITS: usize, const LIMBS: usize, const EB: usize, const EL: usize>(
    base: &Uint<BITS, LIMBS>,
    exponent: &Uint<EB, EL>,
    reducer: &BarrettReducer<BITS, LIMBS>,
) -> Uint<BITS, LIMBS> {
    let one = Uint::<BITS, LIMBS>::ONE;
    let mut result = reducer.modulo(&one);
    let mut running = reducer.modulo(base);

    for i in 0..EB {
        let factor = Uint::conditional_select(&one, &running, exponent.bit_choice(i));

        result = reducer.mul_mod(&result, &factor);
        running = reducer.mul_mod(&running, &running);
    }

    result
}

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {
    /// Computes `self^exponent mod m` with a prepared reducer for `m`.
    pub fn pow_mod<const EB: usize, const EL: usize>(
        &self,
        exponent: &Uint<EB, EL>,
        reducer: &BarrettReducer<BITS, LIMBS>,
    ) -> Self {
        pow_mod(self, exponent, reducer)
    }

    /// Computes `self^exponent mod modulus`, building a one-off reducer.
    ///
    /// # Errors
    /// [`crate::Error::ZeroModulus`] if `modulus` is zero.
    pub fn pow_mod_with_modulus<const EB: usize, const EL: usize>(
        &self,
        exponent: &Uint<EB, EL>,
        modulus: &Self,
    ) -> Result<Self> {
        let reducer = BarrettReducer::new(*modulus)?;
        Ok(pow_mod(self, exponent, &reducer))
    }
}
