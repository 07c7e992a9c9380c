//! Fixed-width unsigned integer type
//!
//! `Uint<BITS, LIMBS>` is a plain value type holding `LIMBS` 64-bit words in
//! little-endian word order. Bits at or above position `BITS` are zero after
//! every operation; arithmetic that would set them reports overflow through
//! its return value and clears them.
//!
//! Comparison, selection and bit access do not branch on the stored value.
//! Formatting does, and is meant for public values only.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter, LowerHex, UpperHex, Write};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::Result;
use crate::primitives::limbs;
use crate::rng::{self, WordSource};

/// Unsigned integer of exactly `BITS` bits stored in `LIMBS` words.
///
/// `LIMBS` must equal `ceil(BITS / 64)`; any other combination fails to
/// compile as soon as a value of the type is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Uint<const BITS: usize, const LIMBS: usize> {
    pub(crate) limbs: [u64; LIMBS],
}

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {
    const SHAPE: () = assert!(
        BITS > 0 && LIMBS == BITS.div_ceil(64),
        "Uint<BITS, LIMBS> requires LIMBS == ceil(BITS / 64)"
    );

    /// Mask of the bits of the most significant word that belong to the value.
    pub(crate) const TOP_MASK: u64 = match BITS % 64 {
        0 => u64::MAX,
        used => (1u64 << used) - 1,
    };

    /// Width of the type in bits.
    pub const BITS: usize = BITS;

    /// Number of 64-bit words in the representation.
    pub const LIMBS: usize = LIMBS;

    /// The value zero.
    pub const ZERO: Self = {
        let () = Self::SHAPE;
        Self { limbs: [0; LIMBS] }
    };

    /// The value one.
    pub const ONE: Self = Self::from_u64(1);

    /// The maximum representable value (2^BITS − 1).
    pub const MAX: Self = {
        let () = Self::SHAPE;
        let mut limbs = [u64::MAX; LIMBS];
        limbs[LIMBS - 1] = Self::TOP_MASK;
        Self { limbs }
    };

    /// Builds a value from a single word, zero-extended (or truncated when
    /// `BITS < 64`).
    pub const fn from_u64(value: u64) -> Self {
        let () = Self::SHAPE;
        let mut limbs = [0u64; LIMBS];
        limbs[0] = value;
        limbs[LIMBS - 1] &= Self::TOP_MASK;
        Self { limbs }
    }

    /// Builds a value from little-endian words. Bits above `BITS` are dropped.
    pub const fn from_limbs(mut limbs: [u64; LIMBS]) -> Self {
        let () = Self::SHAPE;
        limbs[LIMBS - 1] &= Self::TOP_MASK;
        Self { limbs }
    }

    /// Returns the little-endian words.
    pub const fn as_limbs(&self) -> &[u64; LIMBS] {
        &self.limbs
    }

    /// Fills every word from `source`, retrying each word a bounded number
    /// of times.
    ///
    /// # Errors
    /// [`crate::Error::RandomGenerationExhausted`] if the source keeps
    /// failing for a single word.
    pub fn random<S: WordSource + ?Sized>(source: &mut S) -> Result<Self> {
        let mut limbs = [0u64; LIMBS];
        rng::fill_words(source, &mut limbs)?;

        let value = Self::from_limbs(limbs);
        limbs.zeroize();

        Ok(value)
    }

    /// Converts to another width, zero-extending or truncating.
    pub fn resize<const B2: usize, const L2: usize>(&self) -> Uint<B2, L2> {
        let mut limbs = [0u64; L2];

        for (o, &w) in limbs.iter_mut().zip(self.limbs.iter()) {
            *o = w;
        }

        Uint::from_limbs(limbs)
    }

    /// Clears the bits above `BITS`, returning `true` if any was set.
    pub(crate) fn normalize(&mut self) -> bool {
        let top = &mut self.limbs[LIMBS - 1];
        let spill = *top & !Self::TOP_MASK;
        *top &= Self::TOP_MASK;

        spill != 0
    }

    /// Returns bit `index`. Indices at or above `BITS` are not meaningful.
    pub fn bit(&self, index: usize) -> bool {
        bool::from(self.bit_choice(index))
    }

    pub(crate) fn bit_choice(&self, index: usize) -> Choice {
        debug_assert!(index < BITS, "bit index {index} out of range for {BITS}-bit integer");
        Choice::from(((self.limbs[index / 64] >> (index % 64)) & 1) as u8)
    }

    /// Sets or clears bit `index`. Indices at or above `BITS` are not meaningful.
    pub fn set_bit(&mut self, index: usize, value: bool) {
        debug_assert!(index < BITS, "bit index {index} out of range for {BITS}-bit integer");

        let mask = 1u64 << (index % 64);
        let bit = u64::conditional_select(&0, &mask, Choice::from(value as u8));
        let word = &mut self.limbs[index / 64];

        *word = (*word & !mask) | bit;
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        bool::from(self.ct_eq(&Self::ZERO))
    }

    /// Total order against a value of any width.
    ///
    /// The narrower operand is zero-extended and every word of both operands
    /// is visited.
    pub fn compare<const B2: usize, const L2: usize>(&self, other: &Uint<B2, L2>) -> Ordering {
        let (lt, gt) = limbs::compare(&self.limbs, &other.limbs);

        if bool::from(lt) {
            Ordering::Less
        } else if bool::from(gt) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn write_hex(&self, f: &mut Formatter<'_>, digits: &[u8; 16]) -> fmt::Result {
        let mut started = false;

        for &word in self.limbs.iter().rev() {
            for shift in (0..16).rev() {
                let nibble = ((word >> (shift * 4)) & 0xf) as usize;
                started |= nibble != 0;

                if started {
                    f.write_char(digits[nibble] as char)?;
                }
            }
        }

        if !started {
            f.write_char('0')?;
        }

        Ok(())
    }
}

impl<const BITS: usize, const LIMBS: usize> Default for Uint<BITS, LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const BITS: usize, const LIMBS: usize> PartialOrd for Uint<BITS, LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const BITS: usize, const LIMBS: usize> Ord for Uint<BITS, LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<const BITS: usize, const LIMBS: usize> ConstantTimeEq for Uint<BITS, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs[..].ct_eq(&other.limbs[..])
    }
}

impl<const BITS: usize, const LIMBS: usize> ConditionallySelectable for Uint<BITS, LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = a.limbs;
        limbs::select(&mut limbs, &b.limbs, choice);
        Self { limbs }
    }
}

impl<const BITS: usize, const LIMBS: usize> Zeroize for Uint<BITS, LIMBS> {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl<const BITS: usize, const LIMBS: usize> Display for Uint<BITS, LIMBS> {
    /// Formats the value as `0x` followed by lowercase hexadecimal digits,
    /// without leading zeros. Zero prints as `0x0`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        self.write_hex(f, b"0123456789abcdef")
    }
}

impl<const BITS: usize, const LIMBS: usize> LowerHex for Uint<BITS, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        self.write_hex(f, b"0123456789abcdef")
    }
}

impl<const BITS: usize, const LIMBS: usize> UpperHex for Uint<BITS, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        self.write_hex(f, b"0123456789ABCDEF")
    }
}
