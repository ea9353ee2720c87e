//! Wordgrid Solver
//!
//! Finds the highest-scoring placement of words on a 4x4 letter grid, where a word
//! is spelled by a path of adjacent tiles (diagonals included) that uses each tile
//! at most once. Tiles may carry letter or word multipliers.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgrid_solver::board::Board;
//! use wordgrid_solver::solver::{SearchOptions, WordFinder};
//!
//! let board = Board::from_layout(
//!     "lpef aoar wees dlhd",
//!     Some("DW . . . / . . . . / . . . . / . . . ."),
//! )
//! .unwrap();
//! let mut finder = WordFinder::new(board, SearchOptions::default()).unwrap();
//!
//! let found = finder.find_word("lope").unwrap();
//! assert_eq!(found.score, 14);
//! assert_eq!(found.path.len(), 4);
//! ```

// Core domain types
pub mod core;

// Board construction and adjacency
pub mod board;

// Path search, k-prefix filter and prefix cache
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
