//! Conversions between `Uint` and native unsigned integers
//!
//! Conversions into `Uint` truncate to `BITS` when the type is narrower
//! than the source, matching the explicit narrowing of `Uint::resize`.
//! Conversions out of `Uint` fail when the value does not fit.

use crate::Error;
use crate::primitives::Uint;

macro_rules! from_native {
    ($($t:ty),*) => {
        $(
            impl<const BITS: usize, const LIMBS: usize> From<$t> for Uint<BITS, LIMBS> {
                fn from(value: $t) -> Self {
                    Self::from_u64(value as u64)
                }
            }
        )*
    };
}

from_native!(u8, u16, u32, u64);

/// Places the low 64 bits in word 0 and the high 64 bits in word 1.
impl<const BITS: usize, const LIMBS: usize> From<u128> for Uint<BITS, LIMBS> {
    fn from(value: u128) -> Self {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = value as u64;

        if let Some(high) = limbs.get_mut(1) {
            *high = (value >> 64) as u64;
        }

        Self::from_limbs(limbs)
    }
}

/// Succeeds only if every word above the first is zero.
impl<const BITS: usize, const LIMBS: usize> TryFrom<Uint<BITS, LIMBS>> for u64 {
    type Error = Error;

    fn try_from(value: Uint<BITS, LIMBS>) -> Result<Self, Self::Error> {
        if value.limbs[1..].iter().any(|&w| w != 0) {
            return Err(Error::Overflow { bits: 64 });
        }

        Ok(value.limbs[0])
    }
}

/// Succeeds only if every word above the second is zero.
impl<const BITS: usize, const LIMBS: usize> TryFrom<Uint<BITS, LIMBS>> for u128 {
    type Error = Error;

    fn try_from(value: Uint<BITS, LIMBS>) -> Result<Self, Self::Error> {
        if value.limbs.iter().skip(2).any(|&w| w != 0) {
            return Err(Error::Overflow { bits: 128 });
        }

        let high = value.limbs.get(1).copied().unwrap_or(0);
        Ok(((high as u128) << 64) | value.limbs[0] as u128)
    }
}
