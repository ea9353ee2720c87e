//! Word lookup command
//!
//! Looks up individual words given on the command line.

use crate::solver::{WordFinder, WordMatch};
use std::time::{Duration, Instant};

/// Result of looking up one word
#[derive(Debug, Clone)]
pub struct FindResult {
    /// Word as given by the user
    pub query: String,
    pub found: Option<WordMatch>,
    pub duration: Duration,
}

impl FindResult {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.found.is_some()
    }
}

/// Look up each query in order against the same finder
///
/// Queries share the finder, so with the cache enabled later words see
/// placements recorded by earlier ones.
pub fn find_words<S: AsRef<str>>(finder: &mut WordFinder, queries: &[S]) -> Vec<FindResult> {
    queries
        .iter()
        .map(|query| {
            let query = query.as_ref();
            let start = Instant::now();
            let found = finder.find_word(query);
            FindResult {
                query: query.to_string(),
                found,
                duration: start.elapsed(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::Coord;
    use crate::solver::{CacheMode, SearchOptions};

    fn finder(options: SearchOptions) -> WordFinder {
        let board = Board::from_letters("lpef aoar wees dlhd").unwrap();
        WordFinder::new(board, options).unwrap()
    }

    #[test]
    fn reports_each_query_in_order() {
        let mut finder = finder(SearchOptions::default());
        let results = find_words(&mut finder, &["Lope", "pearl", "shed"]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].query, "Lope");
        assert!(results[0].is_found());
        assert_eq!(results[0].found.as_ref().unwrap().start, Coord::new(0, 0));
        assert!(!results[1].is_found());
        assert_eq!(results[2].found.as_ref().unwrap().score, 8);
        assert_eq!(finder.stats().queries, 3);
    }

    #[test]
    fn queries_share_the_cache() {
        let mut finder = finder(SearchOptions::default().with_cache(CacheMode::Exact));
        let results = find_words(&mut finder, &["shed", "she"]);

        assert!(results.iter().all(FindResult::is_found));
        assert_eq!(finder.stats().cache_hits, 1);
    }

    #[test]
    fn no_queries() {
        let mut finder = finder(SearchOptions::default());
        let results = find_words::<&str>(&mut finder, &[]);
        assert!(results.is_empty());
    }
}
