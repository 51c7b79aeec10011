//! Word-list loading and the opening-guess cache.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::WORD_LENGTH;
use crate::solver::OpeningGuess;

pub const EMBEDDED_GUESSES: &str = include_str!("resources/guesses.txt");
pub const EMBEDDED_SOLUTIONS: &str = include_str!("resources/solutions.txt");

/// The two word lists the solver works from: every playable guess, and the
/// smaller set of words that can actually be the secret. Loaded once, never
/// mutated.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub allowed_guesses: Vec<String>,
    pub candidate_solutions: Vec<String>,
}

impl Vocabulary {
    /// The word lists compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            allowed_guesses: load_wordlist_from_str(EMBEDDED_GUESSES),
            candidate_solutions: load_wordlist_from_str(EMBEDDED_SOLUTIONS),
        }
    }

    /// Load both lists from newline-delimited files.
    pub fn from_files<P: AsRef<Path>>(guesses: P, solutions: P) -> io::Result<Self> {
        let allowed_guesses = load_wordlist_from_file(guesses)?;
        let candidate_solutions = load_wordlist_from_file(solutions)?;
        if allowed_guesses.is_empty() {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                "guess list contains no usable words",
            ));
        }
        if candidate_solutions.is_empty() {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                "solution list contains no usable words",
            ));
        }
        Ok(Self {
            allowed_guesses,
            candidate_solutions,
        })
    }
}

fn is_playable(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn load_wordlist_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_playable(word))
        .collect()
}

pub fn load_wordlist_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if is_playable(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Where a recomputed opening guess is cached between runs.
pub fn opening_cache_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("wordle-entropy").join("opening.txt"))
}

/// Read an opening guess written by [`write_cached_opening`]. Anything
/// unparsable means no cache.
pub fn read_cached_opening(path: &Path) -> Option<OpeningGuess> {
    let contents = fs::read_to_string(path).ok()?;
    let mut parts = contents.split_whitespace();
    let word = parts.next()?.to_string();
    let entropy_bits: f64 = parts.next()?.parse().ok()?;
    if !is_playable(&word) {
        return None;
    }
    Some(OpeningGuess { word, entropy_bits })
}

pub fn write_cached_opening(path: &Path, opening: &OpeningGuess) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    writeln!(file, "{} {}", opening.word, opening.entropy_bits)?;
    Ok(())
}
