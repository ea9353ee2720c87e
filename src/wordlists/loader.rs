//! Word list loading utilities
//!
//! Candidate words are only normalized here (trimmed, lowercased, blanks
//! dropped); deciding whether a word fits the board is the finder's job.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Load words from a file, one per line
///
/// The file is read line by line rather than all at once.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or a line cannot be read.
///
/// # Examples
/// ```no_run
/// use wordgrid_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("TWL06.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use wordgrid_solver::wordlists::loader::words_from_slice;
/// use wordgrid_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}
