//! Backtracking path search
//!
//! The tiles on the current path are threaded through the recursion as a
//! [`TileSet`] passed by value, so leaving a call "unmarks" its tile for free and
//! no state outlives a search.

use crate::board::Board;
use crate::core::TileSet;
use log::trace;

/// Optional cap on the number of tiles the search may expand
#[derive(Debug, Clone, Copy)]
pub struct SearchBudget {
    limit: Option<usize>,
    expanded: usize,
    exhausted: bool,
}

impl SearchBudget {
    #[must_use]
    pub const fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            expanded: 0,
            exhausted: false,
        }
    }

    #[must_use]
    pub const fn unlimited() -> Self {
        Self::new(None)
    }

    /// Account for one expansion; false once the limit is reached
    fn spend(&mut self) -> bool {
        if let Some(limit) = self.limit
            && self.expanded >= limit
        {
            self.exhausted = true;
            return false;
        }
        self.expanded += 1;
        true
    }

    #[must_use]
    pub const fn expanded(&self) -> usize {
        self.expanded
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Every distinct path spelling `word`, from every tile carrying its first letter
///
/// Paths are returned in discovery order, which follows grid scan order and is
/// therefore deterministic.
pub fn find_paths(board: &Board, word: &[u8], budget: &mut SearchBudget) -> Vec<Vec<usize>> {
    let Some((&first, suffix)) = word.split_first() else {
        return Vec::new();
    };
    extend(
        board,
        board.tiles_with_letter(first),
        suffix,
        TileSet::EMPTY,
        budget,
    )
}

/// Every path spelling `suffix` that continues `prefix` without revisiting its tiles
///
/// Each returned path includes `prefix` itself.
pub fn extend_path(
    board: &Board,
    prefix: &[usize],
    suffix: &[u8],
    budget: &mut SearchBudget,
) -> Vec<Vec<usize>> {
    let Some(&last) = prefix.last() else {
        return find_paths(board, suffix, budget);
    };
    let Some((&next, rest)) = suffix.split_first() else {
        return vec![prefix.to_vec()];
    };

    let used = TileSet::from_path(prefix);
    let candidates: Vec<usize> = board.available_neighbors(last, next, used).collect();
    extend(board, &candidates, rest, used, budget)
        .into_iter()
        .map(|tail| {
            let mut path = Vec::with_capacity(prefix.len() + tail.len());
            path.extend_from_slice(prefix);
            path.extend(tail);
            path
        })
        .collect()
}

/// Extend each candidate tile by the letters of `suffix`
///
/// With an empty suffix every candidate is a complete one-tile tail.
fn extend(
    board: &Board,
    candidates: &[usize],
    suffix: &[u8],
    used: TileSet,
    budget: &mut SearchBudget,
) -> Vec<Vec<usize>> {
    let Some((&next, rest)) = suffix.split_first() else {
        return candidates.iter().map(|&idx| vec![idx]).collect();
    };

    let mut paths = Vec::new();
    for &tile in candidates {
        if !budget.spend() {
            break;
        }
        if !board.has_neighbor_with_letter(tile, next) {
            continue;
        }

        let used = used.with(tile);
        let next_candidates: Vec<usize> = board.available_neighbors(tile, next, used).collect();
        trace!(
            "tile {} -> {} candidates for '{}'",
            board.tile(tile),
            next_candidates.len(),
            char::from(next)
        );

        for tail in extend(board, &next_candidates, rest, used, budget) {
            let mut path = Vec::with_capacity(tail.len() + 1);
            path.push(tile);
            path.extend(tail);
            paths.push(path);
        }
    }
    paths
}

/// Highest-scoring path; ties go to the path discovered first
#[must_use]
pub fn best_path(board: &Board, paths: Vec<Vec<usize>>) -> Option<(Vec<usize>, u32)> {
    let mut best: Option<(Vec<usize>, u32)> = None;
    for path in paths {
        let score = board.score_path(&path);
        if best.as_ref().is_none_or(|(_, best_score)| score > *best_score) {
            best = Some((path, score));
        }
    }
    best
}
