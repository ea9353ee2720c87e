//! Command implementations

pub mod compare;
pub mod find;
pub mod solve;

pub use compare::{ComparisonResult, ConfigurationResult, compare_configurations};
pub use find::{FindResult, find_words};
pub use solve::{SolveConfig, SolveReport, rank_matches, solve_board};
