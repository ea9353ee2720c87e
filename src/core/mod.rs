//! Core domain types for the letter grid
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond fast hashing. All types here are pure, testable, and immutable once built.

mod attributes;
mod letters;
mod tile;
mod tile_set;

pub use attributes::TileAttributes;
pub use letters::{LETTER_POINTS, letter_index, letter_points};
pub use tile::{Coord, Tile, TileError};
pub use tile_set::TileSet;
