//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_comparison, print_find_results, print_options, print_solve_report,
    print_stats,
};
