//! Operator traits for `Uint`
//!
//! Arithmetic operators wrap modulo 2^BITS and discard the overflow flag;
//! use the `overflowing_*` methods when the flag matters. Shifts by
//! `BITS` or more yield zero.

use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, Mul, MulAssign, Not, Rem, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use crate::primitives::Uint;

/// Addition modulo 2^BITS.
impl<const BITS: usize, const LIMBS: usize> Add for Uint<BITS, LIMBS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.overflowing_add(&rhs).0
    }
}

impl<const BITS: usize, const LIMBS: usize> AddAssign for Uint<BITS, LIMBS> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Subtraction modulo 2^BITS.
impl<const BITS: usize, const LIMBS: usize> Sub for Uint<BITS, LIMBS> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.overflowing_sub(&rhs).0
    }
}

impl<const BITS: usize, const LIMBS: usize> SubAssign for Uint<BITS, LIMBS> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Multiplication modulo 2^BITS.
impl<const BITS: usize, const LIMBS: usize> Mul for Uint<BITS, LIMBS> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.overflowing_mul(&rhs).0
    }
}

impl<const BITS: usize, const LIMBS: usize> MulAssign for Uint<BITS, LIMBS> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Integer division producing the quotient.
impl<const BITS: usize, const LIMBS: usize> Div for Uint<BITS, LIMBS> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.div_rem(&rhs).0
    }
}

/// Integer division producing the remainder.
impl<const BITS: usize, const LIMBS: usize> Rem for Uint<BITS, LIMBS> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.div_rem(&rhs).1
    }
}

impl<const BITS: usize, const LIMBS: usize> ShlAssign<usize> for Uint<BITS, LIMBS> {
    fn shl_assign(&mut self, count: usize) {
        if count >= BITS {
            *self = Self::ZERO;
            return;
        }

        self.shl_digits(count / 64);
        self.shl_partial((count % 64) as u32, 0);
    }
}

/// Logical left shift.
impl<const BITS: usize, const LIMBS: usize> Shl<usize> for Uint<BITS, LIMBS> {
    type Output = Self;

    fn shl(mut self, count: usize) -> Self::Output {
        self <<= count;
        self
    }
}

impl<const BITS: usize, const LIMBS: usize> ShrAssign<usize> for Uint<BITS, LIMBS> {
    fn shr_assign(&mut self, count: usize) {
        if count >= BITS {
            *self = Self::ZERO;
            return;
        }

        self.shr_digits(count / 64);
        self.shr_partial((count % 64) as u32, 0);
    }
}

/// Logical right shift.
impl<const BITS: usize, const LIMBS: usize> Shr<usize> for Uint<BITS, LIMBS> {
    type Output = Self;

    fn shr(mut self, count: usize) -> Self::Output {
        self >>= count;
        self
    }
}

impl<const BITS: usize, const LIMBS: usize> BitAnd for Uint<BITS, LIMBS> {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self::Output {
        self.limbs
            .iter_mut()
            .zip(rhs.limbs.iter())
            .for_each(|(l, r)| *l &= r);
        self
    }
}

impl<const BITS: usize, const LIMBS: usize> BitOr for Uint<BITS, LIMBS> {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self.limbs
            .iter_mut()
            .zip(rhs.limbs.iter())
            .for_each(|(l, r)| *l |= r);
        self
    }
}

impl<const BITS: usize, const LIMBS: usize> BitXor for Uint<BITS, LIMBS> {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self.limbs
            .iter_mut()
            .zip(rhs.limbs.iter())
            .for_each(|(l, r)| *l ^= r);
        self
    }
}

/// Bitwise complement within `BITS`.
impl<const BITS: usize, const LIMBS: usize> Not for Uint<BITS, LIMBS> {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        self.limbs.iter_mut().for_each(|l| *l = !*l);
        self.normalize();
        self
    }
}
