//! Word-level arithmetic kernel
//!
//! Every routine in this module operates on little-endian slices of 64-bit
//! words. Loop bounds are derived from slice lengths only, never from the
//! values stored in them, so a caller that keeps its widths fixed gets a
//! fixed instruction trace.
//!
//! Operands of different lengths are zero-extended. Results that do not
//! fit in the destination are reported through a flag instead of being
//! treated as an error; the destination then holds the low words.

use subtle::{Choice, ConditionallySelectable, ConstantTimeGreater, ConstantTimeLess};

/// Adds `a + b + carry`, returning `(sum, carry_out)`.
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = a as u128 + b as u128 + carry as u128;
    (t as u64, (t >> 64) as u64)
}

/// Computes `a - b - borrow`, returning `(difference, borrow_out)`.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub(b as u128 + borrow as u128);
    (t as u64, (t >> 127) as u64)
}

/// Computes `acc + b * c + carry`, returning `(low, high)`.
///
/// The full result always fits in 128 bits.
#[inline(always)]
pub(crate) const fn mac(acc: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = acc as u128 + (b as u128) * (c as u128) + carry as u128;
    (t as u64, (t >> 64) as u64)
}

/// Word `index` of `words`, or zero past the end.
#[inline(always)]
fn word(words: &[u64], index: usize) -> u64 {
    words.get(index).copied().unwrap_or(0)
}

/// `out = a + b`. Returns `true` if the sum does not fit in `out`.
pub(crate) fn add(out: &mut [u64], a: &[u64], b: &[u64]) -> bool {
    let mut carry = 0;

    for (i, o) in out.iter_mut().enumerate() {
        let (sum, c) = adc(word(a, i), word(b, i), carry);
        *o = sum;
        carry = c;
    }

    let spill = a
        .iter()
        .skip(out.len())
        .chain(b.iter().skip(out.len()))
        .fold(carry, |acc, &w| acc | w);

    spill != 0
}

/// `out = a - b`. Returns `true` if the difference is negative or does not
/// fit in `out`.
pub(crate) fn sub(out: &mut [u64], a: &[u64], b: &[u64]) -> bool {
    let n = out.len().max(a.len()).max(b.len());
    let mut borrow = 0;
    let mut spill = 0;

    for i in 0..n {
        let (diff, bo) = sbb(word(a, i), word(b, i), borrow);
        borrow = bo;

        match out.get_mut(i) {
            Some(o) => *o = diff,
            None => spill |= diff,
        }
    }

    (spill | borrow) != 0
}

/// `words -= rhs` in place, returning the final borrow.
fn sub_in_place(words: &mut [u64], rhs: &[u64]) -> u64 {
    let mut borrow = 0;

    for (i, w) in words.iter_mut().enumerate() {
        let (diff, bo) = sbb(*w, word(rhs, i), borrow);
        *w = diff;
        borrow = bo;
    }

    borrow
}

/// `words += rhs & mask(choice)` in place, discarding the final carry.
fn add_masked(words: &mut [u64], rhs: &[u64], choice: Choice) {
    let mask = u64::conditional_select(&0, &u64::MAX, choice);
    let mut carry = 0;

    for (i, w) in words.iter_mut().enumerate() {
        let (sum, c) = adc(*w, word(rhs, i) & mask, carry);
        *w = sum;
        carry = c;
    }
}

/// Schoolbook multiply-accumulate: `out += a * b`.
///
/// Every pair of words is multiplied and the carry is propagated through
/// the rest of `out` on every row. Returns `true` if any part of the
/// accumulated result falls outside `out`.
pub(crate) fn mul_acc(out: &mut [u64], a: &[u64], b: &[u64]) -> bool {
    let mut spill = 0u64;

    for (j, &bw) in b.iter().enumerate() {
        let mut carry = 0u64;

        for (i, &aw) in a.iter().enumerate() {
            let k = i + j;
            let (lo, hi) = mac(word(out, k), aw, bw, carry);

            match out.get_mut(k) {
                Some(o) => *o = lo,
                None => spill |= lo,
            }

            carry = hi;
        }

        // The accumulator may already hold a value, so the row carry has
        // to travel all the way to the top.
        for o in out.iter_mut().skip(a.len() + j) {
            let (sum, c) = adc(*o, carry, 0);
            *o = sum;
            carry = c;
        }

        spill |= carry;
    }

    spill != 0
}

/// `words = words * multiplier + carry`, returning the outgoing carry word.
pub(crate) fn mul_small(words: &mut [u64], multiplier: u64, mut carry: u64) -> u64 {
    for w in words.iter_mut() {
        let (lo, hi) = mac(carry, *w, multiplier, 0);
        *w = lo;
        carry = hi;
    }

    carry
}

/// Shifts left by `count < 64` bits, injecting `carry` into the low bits.
///
/// Returns the bits shifted out of the top word, right-aligned.
pub(crate) fn shl_bits(words: &mut [u64], count: u32, mut carry: u64) -> u64 {
    debug_assert!(count < 64);

    for w in words.iter_mut() {
        let d = *w;
        *w = (d << count) | carry;
        carry = (d >> 1) >> (63 - count);
    }

    carry
}

/// Shifts right by `count < 64` bits, injecting `carry` into the high bits.
///
/// Returns the bits shifted out of the bottom word, left-aligned.
pub(crate) fn shr_bits(words: &mut [u64], count: u32, mut carry: u64) -> u64 {
    debug_assert!(count < 64);

    for w in words.iter_mut().rev() {
        let d = *w;
        *w = (d >> count) | carry;
        carry = (d << 1) << (63 - count);
    }

    carry
}

/// Shifts left by whole words. Returns `true` if a non-zero word is lost.
pub(crate) fn shl_words(words: &mut [u64], count: usize) -> bool {
    let n = words.len();
    let count = count.min(n);
    let spill = words[n - count..].iter().fold(0, |acc, &w| acc | w);

    for i in (0..n).rev() {
        words[i] = if i >= count { words[i - count] } else { 0 };
    }

    spill != 0
}

/// Shifts right by whole words. Returns `true` if a non-zero word is lost.
pub(crate) fn shr_words(words: &mut [u64], count: usize) -> bool {
    let n = words.len();
    let count = count.min(n);
    let spill = words[..count].iter().fold(0, |acc, &w| acc | w);

    for i in 0..n {
        words[i] = if i + count < n { words[i + count] } else { 0 };
    }

    spill != 0
}

/// Compares two word slices, zero-extending the shorter one.
///
/// Returns `(a < b, a > b)`. All words are visited regardless of where the
/// first difference occurs.
pub(crate) fn compare(a: &[u64], b: &[u64]) -> (Choice, Choice) {
    let mut lt = Choice::from(0);
    let mut gt = Choice::from(0);

    for i in (0..a.len().max(b.len())).rev() {
        let (x, y) = (word(a, i), word(b, i));
        let undecided = !(lt | gt);

        lt |= undecided & x.ct_lt(&y);
        gt |= undecided & x.ct_gt(&y);
    }

    (lt, gt)
}

/// Overwrites `dst` with `src` when `choice` is set, without branching.
pub(crate) fn select(dst: &mut [u64], src: &[u64], choice: Choice) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.conditional_assign(s, choice);
    }
}

/// Bit-serial long division.
///
/// Walks the low `bits` bits of `dividend` from the most significant down.
/// For each bit the running remainder is shifted left, the bit is brought
/// in, the divisor is subtracted unconditionally and the subtraction is
/// undone through a mask when it borrowed. `remainder` must be as long as
/// `divisor`; bit `i` of the quotient lands in `quotient` when it has room
/// for it.
pub(crate) fn div_rem(
    quotient: &mut [u64],
    remainder: &mut [u64],
    dividend: &[u64],
    bits: usize,
    divisor: &[u64],
) {
    debug_assert_eq!(remainder.len(), divisor.len());

    quotient.fill(0);
    remainder.fill(0);

    for i in (0..bits).rev() {
        let incoming = (word(dividend, i / 64) >> (i % 64)) & 1;

        // `top` is the bit that no longer fits in the remainder words.
        let top = shl_bits(remainder, 1, incoming);
        let borrow = sub_in_place(remainder, divisor);
        let keep = Choice::from((top | (borrow ^ 1)) as u8);

        add_masked(remainder, divisor, !keep);

        if let Some(q) = quotient.get_mut(i / 64) {
            *q |= (keep.unwrap_u8() as u64) << (i % 64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adc_and_sbb_carry() {
        assert_eq!(adc(u64::MAX, 1, 0), (0, 1));
        assert_eq!(adc(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
        assert_eq!(sbb(0, 1, 0), (u64::MAX, 1));
        assert_eq!(sbb(5, 3, 1), (1, 0));
        assert_eq!(sbb(0, u64::MAX, 1), (0, 1));
    }

    #[test]
    fn mac_full_width() {
        assert_eq!(
            mac(u64::MAX, u64::MAX, u64::MAX, u64::MAX),
            (u64::MAX, u64::MAX)
        );
    }

    #[test]
    fn add_reports_carry_out_of_destination() {
        let mut out = [0u64; 2];
        assert!(add(&mut out, &[u64::MAX, u64::MAX], &[1]));
        assert_eq!(out, [0, 0]);

        assert!(!add(&mut out, &[u64::MAX], &[1]));
        assert_eq!(out, [0, 1]);
    }

    #[test]
    fn add_reports_truncated_operand_words() {
        let mut out = [0u64; 1];
        assert!(add(&mut out, &[1, 1], &[2]));
        assert_eq!(out, [3]);

        assert!(add(&mut out, &[1], &[2, 0, 7]));
        assert!(!add(&mut out, &[1, 0], &[2, 0, 0]));
    }

    #[test]
    fn sub_reports_underflow() {
        let mut out = [0u64; 2];
        assert!(sub(&mut out, &[0, 0], &[1]));
        assert_eq!(out, [u64::MAX, u64::MAX]);

        assert!(!sub(&mut out, &[0, 1], &[1]));
        assert_eq!(out, [u64::MAX, 0]);
    }

    #[test]
    fn mul_acc_accumulates() {
        let mut out = [5u64, 0, 0];
        let overflow = mul_acc(&mut out, &[u64::MAX], &[u64::MAX]);

        // (2^64 - 1)^2 + 5 = 2^128 - 2^65 + 6
        assert!(!overflow);
        assert_eq!(out, [6, u64::MAX - 1, 0]);
    }

    #[test]
    fn mul_acc_flags_overflow() {
        let mut out = [0u64; 1];
        assert!(mul_acc(&mut out, &[1 << 32], &[1 << 32]));
        assert_eq!(out, [0]);
    }

    #[test]
    fn bit_shifts_carry_words() {
        let mut words = [0x8000_0000_0000_0001u64, 0];
        assert_eq!(shl_bits(&mut words, 1, 1), 0);
        assert_eq!(words, [3, 1]);

        assert_eq!(shr_bits(&mut words, 1, 0), 1 << 63);
        assert_eq!(words, [0x8000_0000_0000_0001, 0]);

        let mut words = [u64::MAX];
        assert_eq!(shl_bits(&mut words, 0, 0), 0);
        assert_eq!(shl_bits(&mut words, 63, 0), u64::MAX >> 1);
        assert_eq!(words, [1 << 63]);
    }

    #[test]
    fn word_shifts() {
        let mut words = [1u64, 2, 3];
        assert!(shl_words(&mut words, 1));
        assert_eq!(words, [0, 1, 2]);

        assert!(!shr_words(&mut words, 1));
        assert_eq!(words, [1, 2, 0]);

        assert!(shr_words(&mut words, 5));
        assert_eq!(words, [0, 0, 0]);
    }

    #[test]
    fn compare_zero_extends() {
        let (lt, gt) = compare(&[1, 0, 0], &[1]);
        assert!(!bool::from(lt) && !bool::from(gt));

        let (lt, gt) = compare(&[0, 1], &[u64::MAX]);
        assert!(!bool::from(lt) && bool::from(gt));

        let (lt, gt) = compare(&[u64::MAX], &[0, 1]);
        assert!(bool::from(lt) && !bool::from(gt));
    }

    #[test]
    fn div_rem_small_values() {
        let mut quotient = [0u64; 2];
        let mut remainder = [0u64; 1];

        div_rem(&mut quotient, &mut remainder, &[100, 0], 128, &[7]);
        assert_eq!(quotient, [14, 0]);
        assert_eq!(remainder, [2]);

        // 2^64 / 3
        div_rem(&mut quotient, &mut remainder, &[0, 1], 128, &[3]);
        assert_eq!(quotient, [0x5555_5555_5555_5555, 0]);
        assert_eq!(remainder, [1]);
    }

    #[test]
    fn div_rem_divisor_with_top_bit_set() {
        let mut quotient = [0u64; 2];
        let mut remainder = [0u64; 1];

        div_rem(&mut quotient, &mut remainder, &[5, u64::MAX - 1], 128, &[u64::MAX]);

        // (2^64 - 2) * 2^64 + 5 = (2^64 - 1)(2^64 - 1) + 4
        assert_eq!(quotient, [u64::MAX, 0]);
        assert_eq!(remainder, [4]);
    }
}
