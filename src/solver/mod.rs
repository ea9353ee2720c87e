//! Word location search
//!
//! The backtracking path search plus its two optimizations: the k-prefix
//! filter (sound, never loses a match) and the prefix cache (a heuristic,
//! off by default).

mod engine;
pub mod kprefix;
mod options;
pub mod prefix_cache;
pub mod search;

pub use engine::{SearchStats, WordFinder, WordMatch};
pub use options::{CacheMode, OptionsError, SearchOptions};
