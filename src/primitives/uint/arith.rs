//! Flagged arithmetic
//!
//! These methods accept operands of any width and always produce a value of
//! the receiver's width. They never fail: a result that does not fit is
//! truncated and reported through the returned flag, so that fixed-time
//! compositions of them are never interrupted.

use crate::primitives::Uint;
use crate::primitives::limbs;

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {
    /// Computes `self + rhs`, returning the truncated sum and whether it
    /// overflowed.
    pub fn overflowing_add<const B2: usize, const L2: usize>(
        &self,
        rhs: &Uint<B2, L2>,
    ) -> (Self, bool) {
        let mut out = Self::ZERO;
        let spill = limbs::add(&mut out.limbs, &self.limbs, &rhs.limbs);
        let high = out.normalize();

        (out, spill | high)
    }

    /// Computes `self - rhs`, returning the wrapped difference and whether
    /// it underflowed.
    pub fn overflowing_sub<const B2: usize, const L2: usize>(
        &self,
        rhs: &Uint<B2, L2>,
    ) -> (Self, bool) {
        let mut out = Self::ZERO;
        let spill = limbs::sub(&mut out.limbs, &self.limbs, &rhs.limbs);
        let high = out.normalize();

        (out, spill | high)
    }

    /// Multiply-accumulate: `self += a * b`.
    ///
    /// Every word pair of `a` and `b` is processed whatever their values.
    /// Returns `true` if the accumulated result does not fit in `BITS`.
    pub fn mul_acc<const BA: usize, const LA: usize, const BB: usize, const LB: usize>(
        &mut self,
        a: &Uint<BA, LA>,
        b: &Uint<BB, LB>,
    ) -> bool {
        let spill = limbs::mul_acc(&mut self.limbs, &a.limbs, &b.limbs);
        spill | self.normalize()
    }

    /// Computes `self * rhs`, returning the truncated product and whether it
    /// overflowed.
    pub fn overflowing_mul<const B2: usize, const L2: usize>(
        &self,
        rhs: &Uint<B2, L2>,
    ) -> (Self, bool) {
        let mut out = Self::ZERO;
        let overflow = out.mul_acc(self, rhs);

        (out, overflow)
    }

    /// `self = self * multiplier + addend`, returning `true` on overflow.
    pub(crate) fn mul_word(&mut self, multiplier: u64, addend: u64) -> bool {
        let carry = limbs::mul_small(&mut self.limbs, multiplier, addend);
        (carry != 0) | self.normalize()
    }
}
