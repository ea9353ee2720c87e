//! Grid tile representation
//!
//! A Tile is one immutable grid cell. Adjacency lives in the board, which resolves
//! tiles by index, so tiles never reference each other.

use super::{TileAttributes, letter_points};
use std::fmt;

/// Zero-based (row, column) position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Geometric 8-neighbour test: Chebyshev distance of exactly one
    #[must_use]
    pub const fn is_adjacent_to(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr | dc) != 0
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error type for invalid tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    InvalidLetter(char),
    InvalidAttributes(u8),
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(c) => write!(f, "Invalid letter [{c}], expected a-z"),
            Self::InvalidAttributes(bits) => {
                write!(f, "Invalid tile attributes {bits:#x}")
            }
        }
    }
}

impl std::error::Error for TileError {}

/// A single lettered grid cell with its point value and multipliers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    letter: u8,
    coord: Coord,
    attributes: TileAttributes,
    base_value: u32,
    value: u32,
}

impl Tile {
    /// Create a new tile at the given coordinates
    ///
    /// The letter is matched case-insensitively and stored lowercase. The letter
    /// multiplier is folded into [`Tile::value`] here, once.
    ///
    /// # Errors
    /// Returns `TileError::InvalidLetter` for anything other than a single ASCII letter,
    /// and `TileError::InvalidAttributes` if both letter or both word multipliers are set.
    ///
    /// # Examples
    /// ```
    /// use wordgrid_solver::core::{Coord, Tile, TileAttributes};
    ///
    /// let tile = Tile::new('P', TileAttributes::TRIPLE_LETTER, Coord::new(0, 1)).unwrap();
    /// assert_eq!(tile.letter(), b'p');
    /// assert_eq!(tile.value(), 12);
    ///
    /// assert!(Tile::new('7', TileAttributes::NONE, Coord::new(0, 0)).is_err());
    /// ```
    pub fn new(letter: char, attributes: TileAttributes, coord: Coord) -> Result<Self, TileError> {
        if !letter.is_ascii_alphabetic() {
            return Err(TileError::InvalidLetter(letter));
        }
        let letter = letter.to_ascii_lowercase() as u8;
        let base_value = letter_points(letter).ok_or(TileError::InvalidLetter(letter as char))?;
        let attributes = TileAttributes::from_bits(attributes.bits())?;

        Ok(Self {
            letter,
            coord,
            attributes,
            base_value,
            value: base_value * attributes.letter_multiplier(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    #[must_use]
    pub const fn attributes(&self) -> TileAttributes {
        self.attributes
    }

    /// Points of the letter before any multiplier
    #[inline]
    #[must_use]
    pub const fn base_value(&self) -> u32 {
        self.base_value
    }

    /// Points contributed to a word, letter multiplier included
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn word_multiplier(&self) -> u32 {
        self.attributes.word_multiplier()
    }

    #[must_use]
    pub const fn is_adjacent_to(&self, other: &Self) -> bool {
        self.coord.is_adjacent_to(other.coord)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile[{}, {}]", self.letter as char, self.coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_creation_valid() {
        let tile = Tile::new('a', TileAttributes::NONE, Coord::new(1, 2)).unwrap();
        assert_eq!(tile.letter(), b'a');
        assert_eq!(tile.coord(), Coord::new(1, 2));
        assert_eq!(tile.value(), 1);
        assert_eq!(tile.word_multiplier(), 1);
    }

    #[test]
    fn tile_creation_uppercase_normalized() {
        let tile = Tile::new('Q', TileAttributes::NONE, Coord::new(0, 0)).unwrap();
        assert_eq!(tile.letter(), b'q');
        assert_eq!(tile.value(), 10);
    }

    #[test]
    fn tile_creation_invalid_letter() {
        for bad in ['1', ' ', '!', 'é', '\n'] {
            assert_eq!(
                Tile::new(bad, TileAttributes::NONE, Coord::new(0, 0)),
                Err(TileError::InvalidLetter(bad))
            );
        }
    }

    #[test]
    fn tile_creation_conflicting_attributes() {
        let letters = TileAttributes::DOUBLE_LETTER | TileAttributes::TRIPLE_LETTER;
        let words = TileAttributes::DOUBLE_WORD | TileAttributes::TRIPLE_WORD;
        assert_eq!(
            Tile::new('a', letters, Coord::new(0, 0)),
            Err(TileError::InvalidAttributes(0x3))
        );
        assert_eq!(
            Tile::new('a', words, Coord::new(0, 0)),
            Err(TileError::InvalidAttributes(0xC))
        );

        let mixed = TileAttributes::TRIPLE_LETTER | TileAttributes::DOUBLE_WORD;
        let tile = Tile::new('a', mixed, Coord::new(0, 0)).unwrap();
        assert_eq!(tile.value(), 3);
        assert_eq!(tile.word_multiplier(), 2);
    }

    #[test]
    fn letter_multiplier_applied_once() {
        let double = Tile::new('h', TileAttributes::DOUBLE_LETTER, Coord::new(0, 0)).unwrap();
        assert_eq!(double.base_value(), 4);
        assert_eq!(double.value(), 8);

        let triple = Tile::new('h', TileAttributes::TRIPLE_LETTER, Coord::new(0, 0)).unwrap();
        assert_eq!(triple.value(), 12);
    }

    #[test]
    fn word_multiplier_from_attributes() {
        let dw = Tile::new('e', TileAttributes::DOUBLE_WORD, Coord::new(0, 0)).unwrap();
        let tw = Tile::new('e', TileAttributes::TRIPLE_WORD, Coord::new(0, 0)).unwrap();
        assert_eq!(dw.word_multiplier(), 2);
        assert_eq!(tw.word_multiplier(), 3);
        assert_eq!(dw.value(), 1);
    }

    #[test]
    fn adjacency_is_chebyshev_one() {
        let center = Coord::new(1, 1);
        let mut count = 0;
        for row in 0..4 {
            for col in 0..4 {
                if center.is_adjacent_to(Coord::new(row, col)) {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 8);
        assert!(!center.is_adjacent_to(center));
        assert!(!Coord::new(0, 0).is_adjacent_to(Coord::new(2, 0)));
        assert!(Coord::new(0, 0).is_adjacent_to(Coord::new(1, 1)));
    }

    #[test]
    fn tile_display() {
        let tile = Tile::new('r', TileAttributes::NONE, Coord::new(1, 3)).unwrap();
        assert_eq!(tile.to_string(), "Tile[r, (1, 3)]");
    }
}
