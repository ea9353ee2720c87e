//! Search configuration comparison
//!
//! Scans the same word list under several search configurations and reports
//! timing, match counts and where cached answers differ from a plain search.

use super::solve::{SolveConfig, solve_board};
use crate::board::Board;
use crate::solver::{CacheMode, OptionsError, SearchOptions, SearchStats, WordFinder};
use rustc_hash::FxHashMap;
use std::time::Duration;

/// One configuration's scan
#[derive(Debug, Clone)]
pub struct ConfigurationResult {
    pub label: &'static str,
    pub options: SearchOptions,
    pub matches: usize,
    pub total_score: u64,
    pub duration: Duration,
    pub stats: SearchStats,
    /// Words found by both but scored differently than the plain search
    pub score_differences: usize,
    /// Words the plain search found that this configuration missed
    pub missing: usize,
}

/// Result of comparing every configuration on one board
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub words_scanned: usize,
    /// Plain exhaustive search first
    pub configurations: Vec<ConfigurationResult>,
}

/// Configurations compared, plain search first
///
/// Every configuration but the plain one filters on `k_prefix`-letter prefixes.
#[must_use]
pub fn configurations(
    k_prefix: usize,
    max_expansions: Option<usize>,
) -> Vec<(&'static str, SearchOptions)> {
    let base = SearchOptions {
        max_expansions,
        ..SearchOptions::exhaustive()
    };
    let filtered = base.with_k_prefix(Some(k_prefix));
    vec![
        ("plain", base),
        ("k-prefix", filtered),
        ("exact cache", filtered.with_cache(CacheMode::Exact)),
        ("seeded cache", filtered.with_cache(CacheMode::Seeded)),
    ]
}

/// Scan `words` on `board` under every configuration
///
/// # Errors
/// Returns `OptionsError` if `k_prefix` is out of range or `max_expansions` is zero.
pub fn compare_configurations(
    board: &Board,
    words: &[String],
    k_prefix: usize,
    max_expansions: Option<usize>,
) -> Result<ComparisonResult, OptionsError> {
    let config = SolveConfig::default();
    let mut baseline: Option<FxHashMap<String, u32>> = None;
    let mut results = Vec::new();

    for (label, options) in configurations(k_prefix, max_expansions) {
        let finder = WordFinder::new(board.clone(), options)?;
        let report = solve_board(&finder, words, &config);

        let scores: FxHashMap<String, u32> = report
            .matches
            .iter()
            .map(|m| (m.word.clone(), m.score))
            .collect();

        let (score_differences, missing) = baseline.as_ref().map_or((0, 0), |plain| {
            plain.iter().fold((0, 0), |(diff, miss), (word, score)| {
                match scores.get(word) {
                    Some(s) if s != score => (diff + 1, miss),
                    Some(_) => (diff, miss),
                    None => (diff, miss + 1),
                }
            })
        });

        results.push(ConfigurationResult {
            label,
            options,
            matches: report.matches.len(),
            total_score: report.matches.iter().map(|m| u64::from(m.score)).sum(),
            duration: report.duration,
            stats: report.stats,
            score_differences,
            missing,
        });

        if baseline.is_none() {
            baseline = Some(scores);
        }
    }

    Ok(ComparisonResult {
        words_scanned: words.len(),
        configurations: results,
    })
}
