//! Long division
//!
//! Bit-serial shift-and-subtract division. The loop always runs once per
//! bit of the dividend's width and always performs the subtraction, keeping
//! or discarding its result through a mask.

use crate::primitives::Uint;
use crate::primitives::limbs;

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// The remainder has the divisor's width.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub fn div_rem<const B2: usize, const L2: usize>(
        &self,
        divisor: &Uint<B2, L2>,
    ) -> (Self, Uint<B2, L2>) {
        assert!(!divisor.is_zero(), "division by zero");

        let mut quotient = Self::ZERO;
        let mut remainder = Uint::<B2, L2>::ZERO;

        limbs::div_rem(
            &mut quotient.limbs,
            &mut remainder.limbs,
            &self.limbs,
            BITS,
            &divisor.limbs,
        );

        (quotient, remainder)
    }
}
