//! Word lists for grid solving
//!
//! Provides an embedded dictionary compiled into the binary, and a loader for
//! word list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
