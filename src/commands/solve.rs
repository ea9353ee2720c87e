//! Board solving command
//!
//! Scans a word list against one board and ranks every match by score.

use crate::solver::{SearchStats, WordFinder, WordMatch};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a dictionary scan
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveConfig {
    /// Scan with one cloned finder per rayon worker
    pub parallel: bool,
    /// Keep only the top N matches
    pub limit: Option<usize>,
    pub show_progress: bool,
}

/// Result of scanning a word list
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Matches sorted by score, highest first; equal scores keep word list order
    pub matches: Vec<WordMatch>,
    pub words_scanned: usize,
    pub duration: Duration,
    pub stats: SearchStats,
    pub parallel: bool,
}

/// Stable sort by score, highest first
pub fn rank_matches(matches: &mut [WordMatch]) {
    matches.sort_by(|a, b| b.score.cmp(&a.score));
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}

/// Look up every word with a clone of `finder`
///
/// Parallel scanning is refused when the prefix cache is enabled, since cached
/// answers depend on the order in which words are queried.
pub fn solve_board(finder: &WordFinder, words: &[String], config: &SolveConfig) -> SolveReport {
    let parallel = if config.parallel && finder.options().cache.is_enabled() {
        warn!("prefix cache depends on query order, scanning sequentially");
        false
    } else {
        config.parallel
    };

    let pb = progress_bar(words.len(), config.show_progress);
    let start = Instant::now();

    let (found, stats) = if parallel {
        scan_parallel(finder, words, &pb)
    } else {
        scan_sequential(finder, words, &pb)
    };

    let mut matches: Vec<WordMatch> = found.into_iter().flatten().collect();
    pb.finish_with_message(format!("{} matches", matches.len()));

    rank_matches(&mut matches);
    if let Some(limit) = config.limit {
        matches.truncate(limit);
    }

    let duration = start.elapsed();
    info!(
        "scanned {} words in {:.3}s: {} matches",
        words.len(),
        duration.as_secs_f64(),
        stats.matches
    );

    SolveReport {
        matches,
        words_scanned: words.len(),
        duration,
        stats,
        parallel,
    }
}

fn scan_sequential(
    finder: &WordFinder,
    words: &[String],
    pb: &ProgressBar,
) -> (Vec<Option<WordMatch>>, SearchStats) {
    let mut worker = finder.clone();
    let found = words
        .iter()
        .enumerate()
        .map(|(idx, word)| {
            let result = worker.find_word(word);
            if idx % 256 == 0 {
                pb.set_message(word.clone());
            }
            pb.inc(1);
            result
        })
        .collect();
    (found, worker.stats())
}

fn scan_parallel(
    finder: &WordFinder,
    words: &[String],
    pb: &ProgressBar,
) -> (Vec<Option<WordMatch>>, SearchStats) {
    let chunk_size = (words.len() / (rayon::current_num_threads() * 4)).max(1);

    let chunks: Vec<(Vec<Option<WordMatch>>, SearchStats)> = words
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut worker = finder.clone();
            let found: Vec<Option<WordMatch>> =
                chunk.iter().map(|word| worker.find_word(word)).collect();
            pb.inc(chunk.len() as u64);
            (found, worker.stats())
        })
        .collect();

    let mut stats = SearchStats::default();
    let mut found = Vec::with_capacity(words.len());
    for (chunk_found, chunk_stats) in chunks {
        found.extend(chunk_found);
        stats = stats.merged(chunk_stats);
    }
    (found, stats)
}
