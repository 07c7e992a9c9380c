//! Shifts
//!
//! Partial shifts move the value by fewer than 64 bits and exchange a carry
//! word with the caller; digit shifts move whole words. Full shifts by any
//! amount are composed from the two in `ops`.

use crate::primitives::Uint;
use crate::primitives::limbs;

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {
    /// Shifts left by `count` bits (`0..=63`), feeding `carry_in` into the
    /// low end.
    ///
    /// `carry_in` must fit in `count` bits. Returns the bits pushed past
    /// position `BITS`, right-aligned; a non-zero result means overflow.
    pub fn shl_partial(&mut self, count: u32, carry_in: u64) -> u64 {
        assert!(count < 64, "partial shift count must be below 64");

        let carry = limbs::shl_bits(&mut self.limbs, count, carry_in);

        match BITS % 64 {
            0 => carry,
            used => {
                let top = self.limbs[LIMBS - 1];
                self.limbs[LIMBS - 1] = top & Self::TOP_MASK;

                (top >> used) | (carry << (64 - used))
            }
        }
    }

    /// Shifts right by `count` bits (`0..=63`), feeding the `count` most
    /// significant bits of `carry_in` in just below position `BITS`.
    ///
    /// Returns the bits shifted out of the low end, left-aligned.
    pub fn shr_partial(&mut self, count: u32, carry_in: u64) -> u64 {
        assert!(count < 64, "partial shift count must be below 64");

        let carry = limbs::shr_bits(&mut self.limbs, count, 0);

        if count > 0 {
            let incoming = carry_in >> (64 - count);
            let position = BITS - (count as usize).min(BITS);
            let offset = position % 64;

            self.limbs[position / 64] |= incoming << offset;

            if offset > 0 && position / 64 + 1 < LIMBS {
                self.limbs[position / 64 + 1] |= incoming >> (64 - offset);
            }

            self.normalize();
        }

        carry
    }

    /// Shifts left by `count` whole words. Returns `true` if a non-zero bit
    /// is lost.
    pub fn shl_digits(&mut self, count: usize) -> bool {
        let spill = limbs::shl_words(&mut self.limbs, count);
        spill | self.normalize()
    }

    /// Shifts right by `count` whole words. Returns `true` if a non-zero
    /// bit is shifted out.
    pub fn shr_digits(&mut self, count: usize) -> bool {
        limbs::shr_words(&mut self.limbs, count)
    }
}
