// Library interface for wordle-entropy
// This allows the binary and integration tests to access internal modules

pub mod candidates;
pub mod cli;
pub mod constraints;
pub mod entropy;
pub mod feedback;
pub mod game;
pub mod logging;
pub mod solver;
pub mod wordbank;

// Re-export the types most callers need
pub use feedback::{FeedbackCode, FeedbackParseError, LetterScore};
pub use solver::{OpeningGuess, SolveError, Solver};
pub use wordbank::{Vocabulary, load_wordlist_from_file, load_wordlist_from_str};

/// Number of letters in every word the solver handles.
pub const WORD_LENGTH: usize = 5;
