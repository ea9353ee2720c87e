//! Wordgrid Solver - CLI
//!
//! Looks up words on a 4x4 letter grid and ranks a whole word list by score.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordgrid_solver::{
    board::Board,
    commands::{SolveConfig, compare_configurations, find_words, solve_board},
    output::{
        print_board, print_comparison, print_find_results, print_options, print_solve_report,
        print_stats,
    },
    solver::{CacheMode, SearchOptions, WordFinder, kprefix::DEFAULT_K_PREFIX},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordgrid",
    about = "Highest-scoring word placement on a 4x4 letter grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Board letters, row by row (e.g. "lpef aoar wees dlhd"), or 'random'
    #[arg(short, long, global = true, default_value = "random")]
    grid: String,

    /// Tile bonuses, one token per tile: '.', DL, TL, DW, TW, combined with '+'
    #[arg(short, long, global = true)]
    attrs: Option<String>,

    /// Seed for a random board
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Length of the k-prefix filter
    #[arg(short, long, global = true, default_value_t = DEFAULT_K_PREFIX)]
    k_prefix: usize,

    /// Disable the k-prefix filter
    #[arg(long, global = true)]
    no_k_prefix: bool,

    /// Prefix cache: off (default), exact, seeded
    #[arg(short, long, global = true, default_value = "off")]
    cache: String,

    /// Maximum tiles expanded per word
    #[arg(short, long, global = true)]
    budget: Option<usize>,

    /// Debug logging and per-query counters
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one or more words
    Find {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Rank every word in the word list that can be placed on the board
    Solve {
        /// Scan with one finder per thread
        #[arg(short, long)]
        parallel: bool,

        /// Show only the top N words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Compare plain search, k-prefix filter and both cache modes
    Compare,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Build the board from --grid, --attrs and --seed
fn load_board(grid: &str, attrs: Option<&str>, seed: Option<u64>) -> Result<Board> {
    if grid.eq_ignore_ascii_case("random") {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let letters = Board::random(&mut rng).letters();
        info!("random board: {letters}");
        return Board::from_layout(&letters, attrs).context("Invalid attribute layout");
    }
    Board::from_layout(grid, attrs).with_context(|| format!("Invalid board '{grid}'"))
}

/// Load the word list selected with -w
fn load_wordlist(wordlist: &str) -> Result<Vec<String>> {
    let words = match wordlist {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist '{path}'"))?,
    };
    debug!("{} words loaded", words.len());
    Ok(words)
}

fn search_options(cli: &Cli) -> Result<SearchOptions> {
    let Some(cache) = CacheMode::from_name(&cli.cache) else {
        bail!("Unknown cache mode '{}', expected off, exact or seeded", cli.cache);
    };
    let k_prefix = (!cli.no_k_prefix).then_some(cli.k_prefix);
    let options = SearchOptions::default()
        .with_k_prefix(k_prefix)
        .with_cache(cache)
        .with_max_expansions(cli.budget);
    options.validate()?;
    Ok(options)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = search_options(&cli)?;
    let board = load_board(&cli.grid, cli.attrs.as_deref(), cli.seed)?;

    print_board(&board);
    print_options(&options);

    match &cli.command {
        Commands::Find { words } => {
            let mut finder = WordFinder::new(board, options)?;
            let results = find_words(&mut finder, words.as_slice());
            print_find_results(&results);
            if cli.verbose {
                print_stats(&finder.stats());
            }
        }
        Commands::Solve { parallel, limit } => {
            let words = load_wordlist(&cli.wordlist)?;
            let finder = WordFinder::new(board, options)?;
            let config = SolveConfig {
                parallel: *parallel,
                limit: *limit,
                show_progress: true,
            };
            let report = solve_board(&finder, &words, &config);
            print_solve_report(&report, cli.verbose);
        }
        Commands::Compare => {
            let words = load_wordlist(&cli.wordlist)?;
            let result =
                compare_configurations(&board, &words, cli.k_prefix, options.max_expansions)?;
            print_comparison(&result);
        }
    }

    Ok(())
}
