//! Formatting utilities for terminal output

use crate::core::{Coord, Tile, TileAttributes};
use crate::solver::WordMatch;
use std::time::Duration;

/// Tile coordinates as `(r, c), (r, c), ...`
#[must_use]
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One match as `word score:N tiles:(r, c), ...`
#[must_use]
pub fn format_match(found: &WordMatch) -> String {
    format!(
        "{} score:{} tiles:{}",
        found.word,
        found.score,
        format_path(&found.path)
    )
}

/// Lookup time in brackets, microseconds below one millisecond
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1000 {
        format!("[{micros}µs]")
    } else {
        format!("[{:.2}ms]", duration.as_secs_f64() * 1000.0)
    }
}

/// Uppercase letter padded to a fixed-width board cell, with its bonus label
#[must_use]
pub fn format_cell(tile: &Tile) -> String {
    let letter = char::from(tile.letter()).to_ascii_uppercase();
    if tile.attributes().is_none() {
        format!("{letter}      ")
    } else {
        format!("{letter}{:<6}", format!(":{}", tile.attributes()))
    }
}

/// Rank of the strongest bonus on a tile, used to pick a colour
#[must_use]
pub const fn bonus_rank(attributes: TileAttributes) -> u8 {
    if attributes.contains(TileAttributes::TRIPLE_WORD) {
        4
    } else if attributes.contains(TileAttributes::DOUBLE_WORD) {
        3
    } else if attributes.contains(TileAttributes::TRIPLE_LETTER) {
        2
    } else if attributes.contains(TileAttributes::DOUBLE_LETTER) {
        1
    } else {
        0
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
