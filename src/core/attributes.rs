//! Tile multiplier attributes
//!
//! Attributes are a bitset. The two letter multipliers are mutually exclusive, as are
//! the two word multipliers, but a tile may carry one of each.

use super::TileError;
use std::fmt;
use std::ops::BitOr;

/// Multiplier flags carried by a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileAttributes(u8);

impl TileAttributes {
    pub const NONE: Self = Self(0x0);
    pub const DOUBLE_LETTER: Self = Self(0x1);
    pub const TRIPLE_LETTER: Self = Self(0x2);
    pub const DOUBLE_WORD: Self = Self(0x4);
    pub const TRIPLE_WORD: Self = Self(0x8);

    const ALL_BITS: u8 = 0xF;

    /// Validate a raw bitset
    ///
    /// # Errors
    /// Returns `TileError::InvalidAttributes` if unknown bits are set, or if both
    /// letter multipliers or both word multipliers are set.
    ///
    /// # Examples
    /// ```
    /// use wordgrid_solver::core::TileAttributes;
    ///
    /// let attrs = TileAttributes::from_bits(0x1 | 0x4).unwrap();
    /// assert_eq!(attrs.letter_multiplier(), 2);
    /// assert_eq!(attrs.word_multiplier(), 2);
    ///
    /// assert!(TileAttributes::from_bits(0x1 | 0x2).is_err());
    /// ```
    pub const fn from_bits(bits: u8) -> Result<Self, TileError> {
        let letter_conflict = bits & 0x3 == 0x3;
        let word_conflict = bits & 0xC == 0xC;
        if bits & !Self::ALL_BITS != 0 || letter_conflict || word_conflict {
            return Err(TileError::InvalidAttributes(bits));
        }
        Ok(Self(bits))
    }

    /// Raw bitset value
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Factor applied once to the tile's letter points
    #[must_use]
    pub const fn letter_multiplier(self) -> u32 {
        if self.contains(Self::DOUBLE_LETTER) {
            2
        } else if self.contains(Self::TRIPLE_LETTER) {
            3
        } else {
            1
        }
    }

    /// Factor applied to the whole word when a path crosses this tile
    #[must_use]
    pub const fn word_multiplier(self) -> u32 {
        if self.contains(Self::DOUBLE_WORD) {
            2
        } else if self.contains(Self::TRIPLE_WORD) {
            3
        } else {
            1
        }
    }
}

/// Combine flags without validation; use [`TileAttributes::from_bits`] on the result
/// when the inputs are untrusted.
impl BitOr for TileAttributes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for TileAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::DOUBLE_LETTER, "DL"),
            (Self::TRIPLE_LETTER, "TL"),
            (Self::DOUBLE_WORD, "DW"),
            (Self::TRIPLE_WORD, "TW"),
        ];
        let parts: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();

        if parts.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_unit_multipliers() {
        let attrs = TileAttributes::NONE;
        assert!(attrs.is_none());
        assert_eq!(attrs.letter_multiplier(), 1);
        assert_eq!(attrs.word_multiplier(), 1);
    }

    #[test]
    fn letter_and_word_flags_combine() {
        let attrs = TileAttributes::from_bits(
            (TileAttributes::TRIPLE_LETTER | TileAttributes::DOUBLE_WORD).bits(),
        )
        .unwrap();
        assert_eq!(attrs.letter_multiplier(), 3);
        assert_eq!(attrs.word_multiplier(), 2);
    }

    #[test]
    fn conflicting_flags_rejected() {
        assert_eq!(
            TileAttributes::from_bits(0x3),
            Err(TileError::InvalidAttributes(0x3))
        );
        assert_eq!(
            TileAttributes::from_bits(0xC),
            Err(TileError::InvalidAttributes(0xC))
        );
    }

    #[test]
    fn unknown_bits_rejected() {
        assert!(TileAttributes::from_bits(0x10).is_err());
        assert!(TileAttributes::from_bits(0xFF).is_err());
    }

    #[test]
    fn display_uses_mnemonics() {
        assert_eq!(TileAttributes::NONE.to_string(), "-");
        assert_eq!(TileAttributes::TRIPLE_WORD.to_string(), "TW");
        let combo = TileAttributes::DOUBLE_LETTER | TileAttributes::TRIPLE_WORD;
        assert_eq!(combo.to_string(), "DL+TW");
    }
}
