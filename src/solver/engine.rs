//! Main word finder interface

use super::kprefix::KPrefixFilter;
use super::options::{CacheMode, OptionsError, SearchOptions};
use super::prefix_cache::PrefixCache;
use super::search::{SearchBudget, best_path, extend_path, find_paths};
use crate::board::{Board, MIN_WORD_LEN, NUM_TILES};
use crate::core::Coord;
use log::{debug, trace, warn};

/// Best placement of a word on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    /// Normalized (trimmed, lowercase) word
    pub word: String,
    pub start: Coord,
    /// Tile indices in path order
    pub tiles: Vec<usize>,
    /// Tile coordinates in path order
    pub path: Vec<Coord>,
    pub score: u32,
}

/// Counters describing what happened to each query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub queries: usize,
    pub rejected_length: usize,
    pub rejected_first_letter: usize,
    pub rejected_k_prefix: usize,
    pub cache_hits: usize,
    pub seeded_searches: usize,
    pub full_searches: usize,
    pub budget_exhausted: usize,
    pub matches: usize,
}

impl SearchStats {
    /// Sum of two sets of counters, used to merge per-worker stats
    #[must_use]
    pub const fn merged(self, other: Self) -> Self {
        Self {
            queries: self.queries + other.queries,
            rejected_length: self.rejected_length + other.rejected_length,
            rejected_first_letter: self.rejected_first_letter + other.rejected_first_letter,
            rejected_k_prefix: self.rejected_k_prefix + other.rejected_k_prefix,
            cache_hits: self.cache_hits + other.cache_hits,
            seeded_searches: self.seeded_searches + other.seeded_searches,
            full_searches: self.full_searches + other.full_searches,
            budget_exhausted: self.budget_exhausted + other.budget_exhausted,
            matches: self.matches + other.matches,
        }
    }
}

/// Finds the highest-scoring placement of words on one board
///
/// Holds the board, the k-prefix filter (computed once, here) and, when enabled,
/// the prefix cache. Queries take `&mut self` because the cache and the counters
/// change; clone the finder to query from several threads.
#[derive(Debug, Clone)]
pub struct WordFinder {
    board: Board,
    options: SearchOptions,
    k_filter: Option<KPrefixFilter>,
    cache: Option<PrefixCache>,
    stats: SearchStats,
}

impl WordFinder {
    /// Create a finder over `board`
    ///
    /// # Errors
    /// Returns `OptionsError` if the options are out of range.
    ///
    /// # Examples
    /// ```
    /// use wordgrid_solver::board::Board;
    /// use wordgrid_solver::solver::{SearchOptions, WordFinder};
    ///
    /// let board = Board::from_letters("lpef aoar wees dlhd").unwrap();
    /// let mut finder = WordFinder::new(board, SearchOptions::default()).unwrap();
    ///
    /// let found = finder.find_word("  SHED ").unwrap();
    /// assert_eq!(found.word, "shed");
    /// assert_eq!(found.score, 8);
    /// assert!(finder.find_word("pearl").is_none());
    /// ```
    pub fn new(board: Board, options: SearchOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        let k_filter = options.k_prefix.map(|k| KPrefixFilter::new(&board, k));
        if let Some(filter) = &k_filter {
            debug!("{} distinct {}-prefixes on board", filter.len(), filter.k());
        }
        let cache = options.cache.is_enabled().then(PrefixCache::new);

        Ok(Self {
            board,
            options,
            k_filter,
            cache,
            stats: SearchStats::default(),
        })
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn options(&self) -> &SearchOptions {
        &self.options
    }

    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub const fn cache(&self) -> Option<&PrefixCache> {
        self.cache.as_ref()
    }

    /// Best-scoring placement of `word`, or `None` if it cannot be spelled
    ///
    /// The word is trimmed and lowercased first. Cheap rejects run in order:
    /// length, first letter, k-prefix. With the cache enabled a cached answer
    /// may be returned instead of searching.
    pub fn find_word(&mut self, word: &str) -> Option<WordMatch> {
        self.stats.queries += 1;
        let word = word.trim().to_lowercase();
        let letters = word.as_bytes();

        if !(MIN_WORD_LEN..=NUM_TILES).contains(&letters.len()) {
            self.stats.rejected_length += 1;
            debug!("'{word}': length {} outside board limits", letters.len());
            return None;
        }
        if !self.board.has_letter(letters[0]) {
            self.stats.rejected_first_letter += 1;
            debug!("'{word}': first letter not on board");
            return None;
        }
        if let Some(filter) = &self.k_filter
            && !filter.admits(&word)
        {
            self.stats.rejected_k_prefix += 1;
            debug!("'{word}': {}-prefix not on board", filter.k());
            return None;
        }

        if let Some(node) = self.cache.as_ref().and_then(|c| c.find_node(letters)) {
            self.stats.cache_hits += 1;
            self.stats.matches += 1;
            debug!("'{word}': cache hit, score {}", node.score());
            let tiles = node.tiles().to_vec();
            let score = node.score();
            return Some(self.to_match(word, tiles, score));
        }

        let mut budget = SearchBudget::new(self.options.max_expansions);
        let paths = self.search(letters, &mut budget);
        if budget.is_exhausted() {
            self.stats.budget_exhausted += 1;
            warn!(
                "'{word}': search budget of {} expansions exhausted, result may be incomplete",
                budget.expanded()
            );
        }

        let Some((tiles, score)) = best_path(&self.board, paths) else {
            debug!("'{word}': no path");
            return None;
        };
        self.stats.matches += 1;
        debug!("'{word}': best score {score}");

        // A truncated search may have missed better paths
        if let Some(cache) = &mut self.cache
            && !budget.is_exhausted()
        {
            let board = &self.board;
            cache.add_word(letters, &tiles, |sub| board.score_path(sub));
        }
        Some(self.to_match(word, tiles, score))
    }

    /// Candidate paths for `letters`, seeded from the cache when configured
    ///
    /// The seeded attempt spends from its own budget, so a dead-end prefix never
    /// starves the full search. `budget` ends up describing whichever search
    /// produced the paths.
    fn search(&mut self, letters: &[u8], budget: &mut SearchBudget) -> Vec<Vec<usize>> {
        if self.options.cache == CacheMode::Seeded
            && let Some(cache) = &self.cache
            && let Some((len, node)) = cache.longest_prefix(letters, MIN_WORD_LEN)
        {
            let mut seed_budget = SearchBudget::new(self.options.max_expansions);
            let seeded = extend_path(&self.board, node.tiles(), &letters[len..], &mut seed_budget);
            if !seeded.is_empty() {
                *budget = seed_budget;
                trace!(
                    "seeded from cached {}-letter prefix, {} paths",
                    len,
                    seeded.len()
                );
                self.stats.seeded_searches += 1;
                return seeded;
            }
            trace!("cached {len}-letter prefix does not extend, searching whole board");
        }

        self.stats.full_searches += 1;
        find_paths(&self.board, letters, budget)
    }

    fn to_match(&self, word: String, tiles: Vec<usize>, score: u32) -> WordMatch {
        let path = self.board.coords_of(&tiles);
        WordMatch {
            word,
            start: path[0],
            tiles,
            path,
            score,
        }
    }
}
