//! Display functions for command results

use super::formatters::{
    bonus_rank, create_progress_bar, format_cell, format_duration, format_match, format_path,
};
use crate::board::{Board, NUM_COLS, NUM_ROWS};
use crate::commands::{ComparisonResult, FindResult, SolveReport};
use crate::solver::{SearchOptions, SearchStats};
use colored::Colorize;

fn header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the board grid, bonus tiles coloured by strength
pub fn print_board(board: &Board) {
    println!();
    for row in 0..NUM_ROWS {
        let cells: Vec<String> = (0..NUM_COLS)
            .map(|col| {
                let tile = board.tile_at(row, col);
                let cell = format_cell(tile);
                match bonus_rank(tile.attributes()) {
                    4 => cell.red().bold().to_string(),
                    3 => cell.magenta().bold().to_string(),
                    2 => cell.blue().bold().to_string(),
                    1 => cell.cyan().to_string(),
                    _ => cell.bright_white().to_string(),
                }
            })
            .collect();
        println!("   {}", cells.join(" "));
    }
}

/// Print the active search options
pub fn print_options(options: &SearchOptions) {
    let k_prefix = options
        .k_prefix
        .map_or_else(|| "off".to_string(), |k| k.to_string());
    let budget = options
        .max_expansions
        .map_or_else(|| "unlimited".to_string(), |b| b.to_string());
    println!(
        "   k-prefix: {}  cache: {}  budget: {}",
        k_prefix.bright_yellow(),
        options.cache.to_string().bright_yellow(),
        budget.bright_yellow()
    );
}

/// Print lookups for individual words
pub fn print_find_results(results: &[FindResult]) {
    header("WORD LOOKUP");
    for result in results {
        let elapsed = format_duration(result.duration).bright_black();
        match &result.found {
            Some(found) => println!(
                "{} {} {}",
                "✓".green().bold(),
                format_match(found).bright_white(),
                elapsed
            ),
            None => println!(
                "{} {} {}",
                "✗".red().bold(),
                format!("{} not on board", result.query.trim()).bright_black(),
                elapsed
            ),
        }
    }
}

/// Print a ranked dictionary scan
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    header("BOARD SOLUTION");

    let max_score = report.matches.first().map_or(0, |m| m.score);
    for (rank, found) in report.matches.iter().enumerate() {
        let bar = create_progress_bar(f64::from(found.score), f64::from(max_score), 20);
        println!(
            "{:4}. {:<16} {} {}",
            rank + 1,
            found.word.bright_white().bold(),
            bar.green(),
            format!("{:>4}", found.score).bright_yellow()
        );
        if verbose {
            println!("      {}", format_path(&found.path).bright_black());
        }
    }

    println!("\n📊 {}", "Scan:".bright_cyan().bold());
    println!("   Words scanned:    {}", report.words_scanned);
    println!(
        "   Matches:          {}",
        report.stats.matches.to_string().bright_yellow().bold()
    );
    println!(
        "   Mode:             {}",
        if report.parallel { "parallel" } else { "sequential" }
    );
    println!("   Time taken:       {:.3}s", report.duration.as_secs_f64());
    if verbose {
        print_stats(&report.stats);
    }
}

/// Print per-query counters
pub fn print_stats(stats: &SearchStats) {
    println!("\n📈 {}", "Counters:".bright_cyan().bold());
    println!("   Queries:               {}", stats.queries);
    println!("   Rejected (length):     {}", stats.rejected_length);
    println!("   Rejected (first):      {}", stats.rejected_first_letter);
    println!("   Rejected (k-prefix):   {}", stats.rejected_k_prefix);
    println!("   Cache hits:            {}", stats.cache_hits);
    println!("   Seeded searches:       {}", stats.seeded_searches);
    println!("   Full searches:         {}", stats.full_searches);
    if stats.budget_exhausted > 0 {
        println!(
            "   Budget exhausted:      {}",
            stats.budget_exhausted.to_string().yellow()
        );
    }
}

/// Print a side-by-side comparison of search configurations
pub fn print_comparison(result: &ComparisonResult) {
    header("CONFIGURATION COMPARISON");
    println!("\nScanned {} words per configuration\n", result.words_scanned);
    println!(
        "   {:<14} {:>8} {:>10} {:>10} {:>8} {:>8}",
        "config", "matches", "score", "time", "diffs", "missing"
    );
    println!("   {}", "─".repeat(63).bright_black());

    for config in &result.configurations {
        let diffs = format!("{:>8}", config.score_differences);
        let diffs = if config.score_differences > 0 {
            diffs.yellow()
        } else {
            diffs.green()
        };
        let missing = format!("{:>8}", config.missing);
        let missing = if config.missing > 0 {
            missing.red()
        } else {
            missing.green()
        };
        println!(
            "   {:<14} {:>8} {:>10} {:>9.3}s {} {}",
            config.label,
            config.matches,
            config.total_score,
            config.duration.as_secs_f64(),
            diffs,
            missing
        );
    }

    if result
        .configurations
        .iter()
        .any(|c| c.score_differences > 0 || c.missing > 0)
    {
        println!(
            "\n{}",
            "Cached placements are heuristic: a word may be reported below its best score."
                .yellow()
        );
    }
}
