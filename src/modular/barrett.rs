//! Barrett reduction
//!
//! For a `K`-bit modulus `m` the reducer precomputes, once,
//!
//! ```text
//! r = floor(2^(2K) / m)
//! ```
//!
//! with the long-division kernel. Each reduction of an `x < 2^(2K)` then
//! costs two multiplications, a shift and a subtraction:
//!
//! ```text
//! q = (x * r) >> 2K
//! remainder = x - q * m
//! if remainder >= m { remainder -= m; q += 1 }
//! ```
//!
//! The estimate `q` is never more than one below `floor(x / m)`, so a single
//! correction suffices. The correction is always computed and then kept or
//! dropped with a mask.

use log::debug;
use subtle::Choice;

use crate::primitives::Uint;
use crate::primitives::limbs;
use crate::{Error, Result};

/// Precomputed reduction context for a fixed modulus.
#[derive(Clone, Debug)]
pub struct BarrettReducer<const BITS: usize, const LIMBS: usize> {
    modulus: Uint<BITS, LIMBS>,
    /// `floor(2^(2 BITS) / modulus)`, `ceil((2 BITS + 1) / 64)` words.
    reciprocal: Vec<u64>,
}

impl<const BITS: usize, const LIMBS: usize> BarrettReducer<BITS, LIMBS> {
    /// Builds a reducer for `modulus`, paying for one long division.
    ///
    /// # Errors
    /// [`Error::ZeroModulus`] if `modulus` is zero.
    pub fn new(modulus: Uint<BITS, LIMBS>) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::ZeroModulus);
        }

        let width = 2 * BITS + 1;
        let mut scaled_one = vec![0u64; width.div_ceil(64)];
        scaled_one[2 * BITS / 64] = 1 << (2 * BITS % 64);

        let mut reciprocal = vec![0u64; scaled_one.len()];
        let mut remainder = [0u64; LIMBS];
        limbs::div_rem(
            &mut reciprocal,
            &mut remainder,
            &scaled_one,
            width,
            &modulus.limbs,
        );

        debug!("barrett reducer ready for a {BITS}-bit modulus");

        Ok(Self {
            modulus,
            reciprocal,
        })
    }

    /// The modulus this reducer was built for.
    pub fn modulus(&self) -> &Uint<BITS, LIMBS> {
        &self.modulus
    }

    /// Divides `x` by the modulus, returning `(quotient, remainder)`.
    ///
    /// `x` may be up to `2 * BITS` bits wide; wider operands are rejected at
    /// compile time.
    pub fn divide<const XB: usize, const XL: usize>(
        &self,
        x: &Uint<XB, XL>,
    ) -> (Uint<XB, XL>, Uint<BITS, LIMBS>) {
        const { assert!(XB <= 2 * BITS, "operand wider than twice the modulus width") };

        let mut quotient = Uint::<XB, XL>::ZERO;
        let remainder = self.reduce(&x.limbs, &mut quotient.limbs);

        (quotient, remainder)
    }

    /// Returns `x mod modulus` for `x` up to `2 * BITS` bits wide.
    pub fn modulo<const XB: usize, const XL: usize>(&self, x: &Uint<XB, XL>) -> Uint<BITS, LIMBS> {
        self.divide(x).1
    }

    /// Returns `a * b mod modulus`.
    ///
    /// The double-width product lives in a scratch buffer sized from the
    /// type width, so the operands may be any `BITS`-bit values.
    pub fn mul_mod(&self, a: &Uint<BITS, LIMBS>, b: &Uint<BITS, LIMBS>) -> Uint<BITS, LIMBS> {
        let mut scratch = vec![0u64; 4 * LIMBS];
        let (product, quotient) = scratch.split_at_mut(2 * LIMBS);

        limbs::mul_acc(product, &a.limbs, &b.limbs);
        self.reduce(product, quotient)
    }

    /// Reduces the little-endian value `x < 2^(2 BITS)`, writing the quotient
    /// into `quotient` (same length as `x`) and returning the remainder.
    fn reduce(&self, x: &[u64], quotient: &mut [u64]) -> Uint<BITS, LIMBS> {
        let n = x.len();
        debug_assert_eq!(quotient.len(), n);

        let mut scratch = vec![0u64; n + self.reciprocal.len() + 4 * n];
        let (product, rest) = scratch.split_at_mut(n + self.reciprocal.len());
        let (near, rest) = rest.split_at_mut(n);
        let (remainder, rest) = rest.split_at_mut(n);
        let (corrected_remainder, corrected_quotient) = rest.split_at_mut(n);

        // q = (x * r) >> 2K, never larger than x
        limbs::mul_acc(product, x, &self.reciprocal);
        limbs::shr_words(product, 2 * BITS / 64);
        limbs::shr_bits(product, (2 * BITS % 64) as u32, 0);
        quotient.copy_from_slice(&product[..n]);

        // 0 <= x - q * m < 2m, and x - q * m <= x, so n words suffice
        limbs::mul_acc(near, quotient, &self.modulus.limbs);
        limbs::sub(remainder, x, near);

        limbs::sub(corrected_remainder, remainder, &self.modulus.limbs);
        limbs::add(corrected_quotient, quotient, &[1]);

        let (below, _) = limbs::compare(remainder, &self.modulus.limbs);
        let off_by_one: Choice = !below;

        limbs::select(remainder, corrected_remainder, off_by_one);
        limbs::select(quotient, corrected_quotient, off_by_one);

        let mut out = Uint::<BITS, LIMBS>::ZERO;
        for (o, &w) in out.limbs.iter_mut().zip(remainder.iter()) {
            *o = w;
        }

        out
    }
}
