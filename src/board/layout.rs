//! Parsing grid and attribute layouts from strings
//!
//! Letters: 16 letters in row-major order. Whitespace, `/`, `,` and `|` are
//! ignored, so `"lpef/aoar/wees/dlhd"` and `"LPEFAOARWEESDLHD"` are the same grid.
//!
//! Attributes: 16 tokens separated by whitespace, `/`, `,` or `|`. Each token is
//! `.` or `-` (no multiplier), a decimal bitset (`1` DL, `2` TL, `4` DW, `8` TW),
//! or mnemonics joined with `+`, such as `DL+DW`.

use super::{Board, BoardBuilder, BoardError, NUM_TILES};
use crate::core::TileAttributes;

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '/' | ',' | '|')
}

/// Extract the 16 grid letters from a layout string
///
/// Letters are not validated here; invalid characters surface as
/// `BoardError::Tile` when the board is built.
///
/// # Errors
/// Returns `BoardError::LayoutLength` unless exactly 16 non-separator characters remain.
pub fn parse_letters(layout: &str) -> Result<Vec<char>, BoardError> {
    let letters: Vec<char> = layout.chars().filter(|&c| !is_separator(c)).collect();
    if letters.len() != NUM_TILES {
        return Err(BoardError::LayoutLength {
            what: "letters",
            expected: NUM_TILES,
            got: letters.len(),
        });
    }
    Ok(letters)
}

/// Parse a single attribute token without position context
fn parse_token(token: &str) -> Result<u8, BoardError> {
    if token == "." || token == "-" {
        return Ok(TileAttributes::NONE.bits());
    }
    if token.bytes().all(|b| b.is_ascii_digit()) {
        return token
            .parse::<u8>()
            .map_err(|_| BoardError::InvalidAttributeToken(token.to_string()));
    }

    token.split('+').try_fold(0u8, |bits, part| {
        let flag = match part.to_ascii_uppercase().as_str() {
            "DL" => TileAttributes::DOUBLE_LETTER,
            "TL" => TileAttributes::TRIPLE_LETTER,
            "DW" => TileAttributes::DOUBLE_WORD,
            "TW" => TileAttributes::TRIPLE_WORD,
            _ => return Err(BoardError::InvalidAttributeToken(token.to_string())),
        };
        Ok(bits | flag.bits())
    })
}

/// Parse an attribute layout into one validated bitset per tile
///
/// # Errors
/// Returns `BoardError::LayoutLength` unless there are exactly 16 tokens,
/// `BoardError::InvalidAttributeToken` for unreadable tokens, and
/// `BoardError::Tile` for conflicting multipliers such as `DL+TL`.
///
/// # Examples
/// ```
/// use wordgrid_solver::board::layout::parse_attributes;
/// use wordgrid_solver::core::TileAttributes;
///
/// let attrs = parse_attributes("DL . . TW / . 5 . . / . . . . / . . . -").unwrap();
/// assert_eq!(attrs[0], TileAttributes::DOUBLE_LETTER);
/// assert_eq!(attrs[3], TileAttributes::TRIPLE_WORD);
/// assert_eq!(attrs[5].word_multiplier(), 2);
/// ```
pub fn parse_attributes(layout: &str) -> Result<Vec<TileAttributes>, BoardError> {
    let tokens: Vec<&str> = layout
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.len() != NUM_TILES {
        return Err(BoardError::LayoutLength {
            what: "attribute tokens",
            expected: NUM_TILES,
            got: tokens.len(),
        });
    }

    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let bits = parse_token(token)?;
            TileAttributes::from_bits(bits).map_err(|source| BoardError::Tile { index, source })
        })
        .collect()
}

impl Board {
    /// Build a board from a letter layout and an optional attribute layout
    ///
    /// # Errors
    /// Returns `BoardError` if either layout is malformed or a letter is invalid.
    pub fn from_layout(letters: &str, attributes: Option<&str>) -> Result<Self, BoardError> {
        let letters = parse_letters(letters)?;
        let attributes = match attributes {
            Some(layout) => parse_attributes(layout)?,
            None => vec![TileAttributes::NONE; NUM_TILES],
        };

        let mut builder = BoardBuilder::new();
        for (letter, attrs) in letters.into_iter().zip(attributes) {
            builder.add_tile(letter, attrs)?;
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileError;

    #[test]
    fn letters_ignore_separators_and_case() {
        let plain = parse_letters("lpefaoarweesdlhd").unwrap();
        let spaced = parse_letters("l p e f / A O A R / w e e s | d,l,h,d").unwrap();
        assert_eq!(plain.len(), NUM_TILES);
        assert_eq!(
            Board::from_letters("lpefaoarweesdlhd").unwrap().letters(),
            Board::from_letters("l p e f / A O A R / w e e s | d,l,h,d")
                .unwrap()
                .letters()
        );
        assert_eq!(spaced[4], 'A');
    }

    #[test]
    fn letters_wrong_length() {
        assert_eq!(
            parse_letters("abc"),
            Err(BoardError::LayoutLength {
                what: "letters",
                expected: NUM_TILES,
                got: 3,
            })
        );
        assert!(parse_letters("abcdefghijklmnopq").is_err());
    }

    #[test]
    fn invalid_letter_reported_at_build() {
        let err = Board::from_letters("abcdefghijklmno9").unwrap_err();
        assert_eq!(
            err,
            BoardError::Tile {
                index: 15,
                source: TileError::InvalidLetter('9'),
            }
        );
    }

    #[test]
    fn attribute_tokens() {
        assert_eq!(parse_token(".").unwrap(), 0);
        assert_eq!(parse_token("-").unwrap(), 0);
        assert_eq!(parse_token("8").unwrap(), 8);
        assert_eq!(parse_token("dl+tw").unwrap(), 0x1 | 0x8);
        assert_eq!(parse_token("TL").unwrap(), 0x2);
        assert!(matches!(
            parse_token("XX"),
            Err(BoardError::InvalidAttributeToken(t)) if t == "XX"
        ));
        assert!(parse_token("999").is_err());
    }

    #[test]
    fn conflicting_attributes_rejected_with_position() {
        let layout = ". . DL+TL . . . . . . . . . . . . .";
        assert_eq!(
            parse_attributes(layout),
            Err(BoardError::Tile {
                index: 2,
                source: TileError::InvalidAttributes(0x3),
            })
        );
    }

    #[test]
    fn attribute_count_must_match() {
        assert!(matches!(
            parse_attributes("DL TW"),
            Err(BoardError::LayoutLength { got: 2, .. })
        ));
    }

    #[test]
    fn layout_applies_attributes_to_tiles() {
        let board = Board::from_layout(
            "lpef aoar wees dlhd",
            Some("TL . . . / . . . . / . . . . / . . DW ."),
        )
        .unwrap();
        assert_eq!(board.tile_at(0, 0).value(), 3);
        assert_eq!(board.tile_at(3, 2).word_multiplier(), 2);
        assert_eq!(board.tile_at(1, 1).value(), 1);
    }
}
