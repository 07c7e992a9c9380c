//! Numeric string literals
//!
//! Accepted forms:
//! - `0x` / `0X` prefix: hexadecimal, digits case-insensitive
//! - `0d` / `0D` prefix: decimal
//! - no prefix: decimal
//!
//! Spaces, tabs, line breaks, commas and apostrophes between digits are
//! ignored so long constants can be grouped for readability. An empty digit
//! sequence reads as zero.

use std::str::FromStr;

use crate::primitives::Uint;
use crate::{Error, Result};

fn is_separator(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n' | '\r' | ',' | '\'')
}

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {
    /// Parses a hexadecimal literal at compile time.
    ///
    /// Intended for constants such as group parameters: the `0x` prefix is
    /// optional and the same separators as [`FromStr`] are skipped.
    ///
    /// # Panics
    /// Panics (a compile error in const context) on any other character or
    /// if the value does not fit in `BITS`.
    pub const fn from_hex_str(literal: &str) -> Self {
        let bytes = literal.as_bytes();
        let start = if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
            2
        } else {
            0
        };

        let mut limbs = Self::ZERO.limbs;
        let mut position = 0;
        let mut i = bytes.len();

        while i > start {
            i -= 1;

            let nibble = match bytes[i] {
                b'0'..=b'9' => bytes[i] - b'0',
                b'a'..=b'f' => bytes[i] - b'a' + 10,
                b'A'..=b'F' => bytes[i] - b'A' + 10,
                b' ' | b'\t' | b'\n' | b'\r' | b',' | b'\'' => continue,
                _ => panic!("invalid character in hexadecimal literal"),
            };

            if nibble != 0 {
                assert!(position < LIMBS * 16, "hexadecimal literal does not fit");
                limbs[position / 16] |= (nibble as u64) << (4 * (position % 16));
            }

            position += 1;
        }

        assert!(
            limbs[LIMBS - 1] & !Self::TOP_MASK == 0,
            "hexadecimal literal does not fit"
        );

        Self { limbs }
    }
}

impl<const BITS: usize, const LIMBS: usize> FromStr for Uint<BITS, LIMBS> {
    type Err = Error;

    /// # Errors
    /// - [`Error::InvalidCharacter`] for a character that is neither a digit
    ///   of the selected radix nor a separator
    /// - [`Error::Overflow`] if the value does not fit in `BITS`
    fn from_str(literal: &str) -> Result<Self> {
        let (radix, offset) = match literal.as_bytes() {
            [b'0', b'x' | b'X', ..] => (16, 2),
            [b'0', b'd' | b'D', ..] => (10, 2),
            _ => (10, 0),
        };

        let mut value = Self::ZERO;

        for (index, character) in literal[offset..].char_indices() {
            if is_separator(character) {
                continue;
            }

            let digit = character
                .to_digit(radix)
                .ok_or(Error::InvalidCharacter {
                    character,
                    offset: offset + index,
                })?;

            let overflow = match radix {
                16 => value.shl_partial(4, digit as u64) != 0,
                _ => value.mul_word(10, digit as u64),
            };

            if overflow {
                return Err(Error::Overflow { bits: BITS });
            }
        }

        Ok(value)
    }
}
