//! Board arena, adjacency graph and letter index

use super::{NUM_COLS, NUM_ROWS, NUM_TILES};
use crate::core::{Coord, Tile, TileAttributes, TileError, TileSet};
use log::info;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for board construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The tile at `index` (row-major) could not be created
    Tile { index: usize, source: TileError },
    /// All tiles have already been placed
    Full,
    /// `build` was called with fewer tiles than the grid holds
    Incomplete(usize),
    /// A layout string did not describe exactly one entry per tile
    LayoutLength {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    /// An attribute token was not `.`, `-`, a bitset, or a `DL`/`TL`/`DW`/`TW` combination
    InvalidAttributeToken(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tile { index, source } => {
                let coord = Coord::new(index / NUM_COLS, index % NUM_COLS);
                write!(f, "Tile {coord}: {source}")
            }
            Self::Full => write!(f, "Board already holds {NUM_TILES} tiles"),
            Self::Incomplete(count) => {
                write!(f, "Board needs {NUM_TILES} tiles, got {count}")
            }
            Self::LayoutLength {
                what,
                expected,
                got,
            } => write!(f, "Expected {expected} {what}, got {got}"),
            Self::InvalidAttributeToken(token) => {
                write!(f, "Unrecognized tile attribute '{token}'")
            }
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tile { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Incremental, row-major board construction
#[derive(Debug, Clone, Default)]
pub struct BoardBuilder {
    tiles: Vec<Tile>,
}

impl BoardBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: Vec::with_capacity(NUM_TILES),
        }
    }

    /// Place the next tile, filling rows left to right, top to bottom
    ///
    /// # Errors
    /// Returns `BoardError::Full` once all tiles are placed, or `BoardError::Tile`
    /// if the letter is invalid.
    pub fn add_tile(
        &mut self,
        letter: char,
        attributes: TileAttributes,
    ) -> Result<&mut Self, BoardError> {
        let index = self.tiles.len();
        if index >= NUM_TILES {
            return Err(BoardError::Full);
        }
        let coord = Coord::new(index / NUM_COLS, index % NUM_COLS);
        let tile = Tile::new(letter, attributes, coord)
            .map_err(|source| BoardError::Tile { index, source })?;
        self.tiles.push(tile);
        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.len() == NUM_TILES
    }

    /// Freeze the grid and derive its adjacency graph and letter index
    ///
    /// # Errors
    /// Returns `BoardError::Incomplete` unless every tile has been placed.
    pub fn build(self) -> Result<Board, BoardError> {
        if !self.is_full() {
            return Err(BoardError::Incomplete(self.tiles.len()));
        }
        Ok(Board::from_tiles(self.tiles))
    }
}

/// An immutable 4×4 grid with its precomputed adjacency graph
///
/// Cloning is cheap enough to give every worker thread its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    /// Every neighbour of each tile, in grid scan order
    adjacency: Vec<Vec<usize>>,
    /// Neighbours of each tile grouped by letter, each group in grid scan order
    neighbors_by_letter: Vec<FxHashMap<u8, Vec<usize>>>,
    tiles_by_letter: FxHashMap<u8, Vec<usize>>,
}

impl Board {
    fn from_tiles(tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), NUM_TILES);

        let adjacency: Vec<Vec<usize>> = tiles
            .iter()
            .map(|tile| {
                (0..tiles.len())
                    .filter(|&other| tile.is_adjacent_to(&tiles[other]))
                    .collect()
            })
            .collect();

        let neighbors_by_letter = adjacency
            .iter()
            .map(|neighbors| {
                let mut by_letter: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
                for &idx in neighbors {
                    by_letter.entry(tiles[idx].letter()).or_default().push(idx);
                }
                by_letter
            })
            .collect();

        let mut tiles_by_letter: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (idx, tile) in tiles.iter().enumerate() {
            tiles_by_letter.entry(tile.letter()).or_default().push(idx);
        }

        let board = Self {
            tiles,
            adjacency,
            neighbors_by_letter,
            tiles_by_letter,
        };
        info!(
            "built board {} ({} distinct letters)",
            board.letters(),
            board.tiles_by_letter.len()
        );
        board
    }

    /// Board with the given 16 letters and no multiplier tiles
    ///
    /// # Errors
    /// Returns `BoardError` if there are not exactly 16 letters or one is invalid.
    ///
    /// # Examples
    /// ```
    /// use wordgrid_solver::board::Board;
    ///
    /// let board = Board::from_letters("lpef aoar wees dlhd").unwrap();
    /// assert_eq!(board.tile_at(1, 3).letter(), b'r');
    /// assert!(Board::from_letters("abc").is_err());
    /// ```
    pub fn from_letters(letters: &str) -> Result<Self, BoardError> {
        Self::from_layout(letters, None)
    }

    /// Board of uniformly random letters with no multiplier tiles
    ///
    /// # Panics
    /// Will not panic - generated letters are always in `a..=z`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut builder = BoardBuilder::new();
        for _ in 0..NUM_TILES {
            let letter = char::from(b'a' + rng.random_range(0..26u8));
            builder
                .add_tile(letter, TileAttributes::NONE)
                .expect("random letters are valid and the board is not full");
        }
        builder.build().expect("all tiles placed")
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn tile(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    /// Tile at the given coordinates
    ///
    /// # Panics
    /// Panics if `row >= NUM_ROWS` or `col >= NUM_COLS`; out-of-range access is a
    /// programming error.
    #[must_use]
    pub fn tile_at(&self, row: usize, col: usize) -> &Tile {
        assert!(
            row < NUM_ROWS && col < NUM_COLS,
            "coordinate ({row}, {col}) outside {NUM_ROWS}x{NUM_COLS} board"
        );
        &self.tiles[row * NUM_COLS + col]
    }

    /// Indices of every tile carrying `letter`, in grid scan order
    #[must_use]
    pub fn tiles_with_letter(&self, letter: u8) -> &[usize] {
        self.tiles_by_letter
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.tiles_by_letter.contains_key(&letter)
    }

    /// Every neighbour of `index`, in grid scan order
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    #[must_use]
    pub fn has_neighbor_with_letter(&self, index: usize, letter: u8) -> bool {
        self.neighbors_by_letter[index].contains_key(&letter)
    }

    /// Neighbours of `index` carrying `letter`, in grid scan order
    #[must_use]
    pub fn neighbors_with_letter(&self, index: usize, letter: u8) -> &[usize] {
        self.neighbors_by_letter[index]
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Neighbours of `index` carrying `letter` that are not already on the path
    pub fn available_neighbors(
        &self,
        index: usize,
        letter: u8,
        used: TileSet,
    ) -> impl Iterator<Item = usize> + '_ {
        self.neighbors_with_letter(index, letter)
            .iter()
            .copied()
            .filter(move |&idx| !used.contains(idx))
    }

    /// Score a path: sum of tile values times the product of word multipliers
    ///
    /// # Examples
    /// ```
    /// use wordgrid_solver::board::Board;
    ///
    /// let board = Board::from_layout("shed xxxx xxxx xxxx", Some("- DL - TW . . . . . . . . . . . .")).unwrap();
    /// // s(1) + h(4 x2) + e(1) + d(2), whole word x3
    /// assert_eq!(board.score_path(&[0, 1, 2, 3]), 36);
    /// ```
    #[must_use]
    pub fn score_path(&self, path: &[usize]) -> u32 {
        let (sum, multiplier) = path.iter().fold((0, 1), |(sum, multiplier), &idx| {
            let tile = &self.tiles[idx];
            (sum + tile.value(), multiplier * tile.word_multiplier())
        });
        sum * multiplier
    }

    /// Coordinates of each tile on a path
    #[must_use]
    pub fn coords_of(&self, path: &[usize]) -> Vec<Coord> {
        path.iter().map(|&idx| self.tiles[idx].coord()).collect()
    }

    /// Letters spelled by a path
    #[must_use]
    pub fn spell(&self, path: &[usize]) -> String {
        path.iter()
            .map(|&idx| char::from(self.tiles[idx].letter()))
            .collect()
    }

    /// All letters in row-major order
    #[must_use]
    pub fn letters(&self) -> String {
        self.tiles.iter().map(|t| char::from(t.letter())).collect()
    }

    /// True if consecutive path tiles are adjacent and no tile repeats
    #[must_use]
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        if path.iter().any(|&idx| idx >= self.tiles.len()) {
            return false;
        }
        let distinct = TileSet::from_path(path).len() as usize == path.len();
        distinct
            && path
                .windows(2)
                .all(|pair| self.tiles[pair[0]].is_adjacent_to(&self.tiles[pair[1]]))
    }
}
