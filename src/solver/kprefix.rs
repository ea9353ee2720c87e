//! k-prefix feasibility filter
//!
//! The set of every k-letter sequence that can be walked on the board. A word whose
//! first k letters are missing from the set cannot be spelled at all, so rejecting
//! it never loses a match.

use crate::board::Board;
use crate::core::TileSet;
use rustc_hash::FxHashSet;

/// Largest accepted k; enumeration cost grows exponentially with k
pub const MAX_K_PREFIX: usize = 6;

/// Default k used by the filter
pub const DEFAULT_K_PREFIX: usize = 4;

/// Distinct k-letter sequences reachable from tile `index` by k-1 adjacency hops
/// without revisiting a tile
///
/// # Examples
/// ```
/// use wordgrid_solver::board::Board;
/// use wordgrid_solver::solver::kprefix::k_prefixes_from;
///
/// let board = Board::from_letters("lpef aoar wees dlhd").unwrap();
/// assert_eq!(k_prefixes_from(&board, 0, 1).len(), 1);
/// assert!(k_prefixes_from(&board, 0, 4).contains("lope"));
/// ```
#[must_use]
pub fn k_prefixes_from(board: &Board, index: usize, k: usize) -> FxHashSet<String> {
    let mut prefixes = FxHashSet::default();
    if k > 0 {
        let mut prefix = String::with_capacity(k);
        collect(board, index, k, TileSet::EMPTY, &mut prefix, &mut prefixes);
    }
    prefixes
}

fn collect(
    board: &Board,
    index: usize,
    k: usize,
    used: TileSet,
    prefix: &mut String,
    out: &mut FxHashSet<String>,
) {
    prefix.push(char::from(board.tile(index).letter()));
    if prefix.len() == k {
        out.insert(prefix.clone());
    } else {
        let used = used.with(index);
        for &next in board.neighbors(index) {
            if !used.contains(next) {
                collect(board, next, k, used, prefix, out);
            }
        }
    }
    prefix.pop();
}

/// Union of the k-prefixes of every tile on a board
#[derive(Debug, Clone)]
pub struct KPrefixFilter {
    k: usize,
    prefixes: FxHashSet<String>,
}

impl KPrefixFilter {
    /// Enumerate all k-prefixes of `board`
    #[must_use]
    pub fn new(board: &Board, k: usize) -> Self {
        let mut prefixes = FxHashSet::default();
        for index in 0..board.tiles().len() {
            prefixes.extend(k_prefixes_from(board, index, k));
        }
        Self { k, prefixes }
    }

    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    /// False only when `word` is at least k long and its k-prefix is absent
    #[must_use]
    pub fn admits(&self, word: &str) -> bool {
        word.len() < self.k || word.get(..self.k).is_some_and(|p| self.prefixes.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NUM_TILES;
    use crate::solver::search::{SearchBudget, find_paths};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_board() -> Board {
        Board::from_letters("lpef aoar wees dlhd").unwrap()
    }

    #[test]
    fn k_one_is_own_letter() {
        let board = sample_board();
        let prefixes = k_prefixes_from(&board, 14, 1);
        assert_eq!(prefixes.len(), 1);
        assert!(prefixes.contains("h"));
    }

    #[test]
    fn k_zero_is_empty() {
        assert!(k_prefixes_from(&sample_board(), 0, 0).is_empty());
    }

    #[test]
    fn k_two_lists_neighbor_letters() {
        let board = sample_board();
        // l(0,0) touches p, a, o
        let prefixes = k_prefixes_from(&board, 0, 2);
        let mut sorted: Vec<&str> = prefixes.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["la", "lo", "lp"]);
    }

    #[test]
    fn duplicates_collapse() {
        // Every walk spells "aaa"
        let board = Board::from_letters("aaaa aaaa aaaa aaaa").unwrap();
        let filter = KPrefixFilter::new(&board, 3);
        assert_eq!(filter.len(), 1);
        assert!(filter.contains("aaa"));
    }

    #[test]
    fn prefixes_never_revisit_tiles() {
        let board = Board::from_letters("abxx xxxx xxxx xxxx").unwrap();
        let filter = KPrefixFilter::new(&board, 3);
        assert!(!filter.contains("aba"));
        assert!(filter.contains("abx"));
    }

    #[test]
    fn admits_short_words_and_known_prefixes() {
        let board = sample_board();
        let filter = KPrefixFilter::new(&board, 4);
        assert_eq!(filter.k(), 4);
        assert!(filter.admits("ok"));
        assert!(filter.admits("lope"));
        assert!(filter.admits("shed"));
        assert!(!filter.admits("lead"));
        assert!(!filter.admits("zzzz"));
        // "pear" can be walked even though "pearl" cannot
        assert!(filter.admits("pearl"));
    }

    #[test]
    fn filter_matches_exhaustive_search_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let board = Board::random(&mut rng);
            let filter = KPrefixFilter::new(&board, 3);
            for start in 0..NUM_TILES {
                for prefix in k_prefixes_from(&board, start, 3) {
                    let paths =
                        find_paths(&board, prefix.as_bytes(), &mut SearchBudget::unlimited());
                    assert!(!paths.is_empty(), "{prefix} listed but not findable");
                    assert!(filter.contains(&prefix));
                }
            }
        }
    }
}
