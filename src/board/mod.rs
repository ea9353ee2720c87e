//! The fixed letter grid
//!
//! Tiles live in a single row-major arena and refer to each other by index.
//! The adjacency graph and letter index are derived exactly once, when the
//! builder is turned into a [`Board`].

mod grid;
pub mod layout;

pub use grid::{Board, BoardBuilder, BoardError};

/// Grid height
pub const NUM_ROWS: usize = 4;

/// Grid width
pub const NUM_COLS: usize = 4;

/// Tiles on a full board; also the longest spellable word
pub const NUM_TILES: usize = NUM_ROWS * NUM_COLS;

/// Shortest playable word
pub const MIN_WORD_LEN: usize = 2;
