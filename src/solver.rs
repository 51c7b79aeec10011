//! Round orchestration for the solver engine.
//!
//! One [`Solver`] plays one puzzle: `next_guess` proposes a word,
//! `submit_feedback` folds the reply into the constraint state and prunes
//! the candidate list. The engine never decides the puzzle is solved; the
//! caller stops when it sees the all-correct code.

use std::error::Error;
use std::fmt;

use crate::candidates;
use crate::constraints::ConstraintState;
use crate::entropy;
use crate::feedback::{FeedbackCode, FeedbackParseError};
use crate::wordbank::Vocabulary;
use crate::{debug_log, info_log};

/// Candidate lists at or below this size are scored against themselves, so
/// late guesses can also be the answer.
const ENDGAME_CUTOFF: usize = 5;

/// Highest-entropy opening word for the bundled word lists, computed
/// offline.
pub const DEFAULT_OPENING_WORD: &str = "tarse";
pub const DEFAULT_OPENING_BITS: f64 = 5.94723;

/// A fixed first guess and the expected information it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningGuess {
    pub word: String,
    pub entropy_bits: f64,
}

impl Default for OpeningGuess {
    fn default() -> Self {
        Self {
            word: DEFAULT_OPENING_WORD.to_string(),
            entropy_bits: DEFAULT_OPENING_BITS,
        }
    }
}

/// Failures local to one puzzle session. None of them corrupt the
/// vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Every candidate has been pruned away: the secret is missing from the
    /// solution list, or some feedback was wrong.
    Exhausted,
    /// Feedback arrived before any guess was made.
    NoPendingGuess,
    /// Feedback input was rejected.
    InvalidFeedback(FeedbackParseError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Exhausted => write!(
                f,
                "no candidates remain: the solution is missing from the word list or some feedback was mistyped"
            ),
            SolveError::NoPendingGuess => write!(f, "feedback submitted before any guess"),
            SolveError::InvalidFeedback(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SolveError {}

impl From<FeedbackParseError> for SolveError {
    fn from(err: FeedbackParseError) -> Self {
        SolveError::InvalidFeedback(err)
    }
}

/// Entropy-driven solver for a single puzzle.
///
/// Construct a new solver to start a new puzzle; there is no in-place
/// restart.
#[derive(Debug, Clone)]
pub struct Solver {
    vocabulary: Vocabulary,
    constraints: ConstraintState,
    candidates: Vec<String>,
    last_guess: Option<String>,
    round: usize,
    opening: Option<OpeningGuess>,
}

impl Solver {
    /// Solver using the precomputed opening guess.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_opening(vocabulary, Some(OpeningGuess::default()))
    }

    /// Solver with an injected opening guess, or `None` to have the first
    /// `next_guess` score the full guess vocabulary instead.
    pub fn with_opening(vocabulary: Vocabulary, opening: Option<OpeningGuess>) -> Self {
        let candidates = vocabulary.candidate_solutions.clone();
        Self {
            vocabulary,
            constraints: ConstraintState::new(),
            candidates,
            last_guess: None,
            round: 0,
            opening,
        }
    }

    /// Compute the highest-entropy opening guess for a vocabulary. This is
    /// the expensive pass the precomputed default exists to avoid.
    pub fn compute_opening(vocabulary: &Vocabulary) -> Option<OpeningGuess> {
        entropy::best_guess(&vocabulary.allowed_guesses, &vocabulary.candidate_solutions).map(
            |(word, bits)| OpeningGuess {
                word: word.to_string(),
                entropy_bits: bits,
            },
        )
    }

    /// The engine's current best guess. Advances the round counter.
    pub fn next_guess(&mut self) -> Result<String, SolveError> {
        let guess = if self.round == 0
            && let Some(opening) = &self.opening
        {
            opening.word.clone()
        } else if self.candidates.is_empty() {
            return Err(SolveError::Exhausted);
        } else if self.candidates.len() == 1 {
            self.candidates[0].clone()
        } else {
            self.scored_guess()?
        };

        self.last_guess = Some(guess.clone());
        self.round += 1;
        Ok(guess)
    }

    /// Record feedback for the previous guess, given as an x/y/g string.
    pub fn submit_feedback(&mut self, feedback: &str) -> Result<(), SolveError> {
        let code = FeedbackCode::parse(feedback)?;
        self.submit_feedback_code(code)
    }

    /// Record feedback for the previous guess as a packed code.
    ///
    /// An all-correct code means the puzzle is over; the caller is expected
    /// to stop there instead of submitting it.
    pub fn submit_feedback_code(&mut self, code: FeedbackCode) -> Result<(), SolveError> {
        let Some(guess) = self.last_guess.clone() else {
            return Err(SolveError::NoPendingGuess);
        };

        // The positional predicates cannot always eliminate the guess itself
        // when it repeats a letter ("nanny"), so drop it explicitly.
        self.candidates.retain(|word| *word != guess);
        self.constraints.interpret(&guess, code);
        candidates::prune(&mut self.candidates, &self.constraints);
        info_log!(
            "round {}: {} candidates remain",
            self.round,
            self.candidates.len()
        );
        Ok(())
    }

    fn scored_guess(&self) -> Result<String, SolveError> {
        let pool = self.scoring_pool();
        let (word, bits) =
            entropy::best_guess(pool, &self.candidates).ok_or(SolveError::Exhausted)?;
        debug_log!(
            "scored {} pool words against {} candidates, best {} at {:.3} bits",
            pool.len(),
            self.candidates.len(),
            word,
            bits
        );
        Ok(word.to_string())
    }

    /// Which words are worth scoring as the next guess. Early on, any word
    /// from the broad guess vocabulary can pay for itself in information;
    /// near the end only words that can still be the answer are worth
    /// playing.
    fn scoring_pool(&self) -> &[String] {
        if self.round == 0 && self.candidates.len() > ENDGAME_CUTOFF {
            &self.vocabulary.allowed_guesses
        } else if self.candidates.len() <= ENDGAME_CUTOFF {
            &self.candidates
        } else {
            &self.vocabulary.candidate_solutions
        }
    }

    /// Words still consistent with every round of feedback.
    pub fn remaining(&self) -> &[String] {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    /// Completed guess rounds.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary(guesses: &[&str], solutions: &[&str]) -> Vocabulary {
        Vocabulary {
            allowed_guesses: guesses.iter().map(|word| word.to_string()).collect(),
            candidate_solutions: solutions.iter().map(|word| word.to_string()).collect(),
        }
    }

    fn opening(word: &str) -> Option<OpeningGuess> {
        Some(OpeningGuess {
            word: word.to_string(),
            entropy_bits: 0.0,
        })
    }

    #[test]
    fn first_guess_is_the_configured_opening() {
        let mut solver = Solver::new(vocabulary(
            &["crane", "slate", "tarse"],
            &["crane", "slate"],
        ));
        assert_eq!(solver.next_guess().unwrap(), DEFAULT_OPENING_WORD);
        assert_eq!(solver.round(), 1);
    }

    #[test]
    fn single_candidate_is_returned_without_scoring() {
        let mut solver = Solver::with_opening(vocabulary(&["crane"], &["crane"]), None);
        assert_eq!(solver.next_guess().unwrap(), "crane");
    }

    #[test]
    fn endgame_guesses_come_from_the_candidates_themselves() {
        let solutions = ["crane", "slate", "gloom"];
        let mut solver = Solver::with_opening(
            vocabulary(&["fghij", "crane", "slate", "gloom"], &solutions),
            None,
        );
        let guess = solver.next_guess().unwrap();
        assert!(solutions.contains(&guess.as_str()));
    }

    #[test]
    fn feedback_before_any_guess_is_rejected() {
        let mut solver = Solver::new(vocabulary(&["crane"], &["crane"]));
        assert_eq!(
            solver.submit_feedback("xxxxx"),
            Err(SolveError::NoPendingGuess)
        );
    }

    #[test]
    fn malformed_feedback_is_rejected_with_the_offending_position() {
        let mut solver = Solver::new(vocabulary(&["crane"], &["crane"]));
        solver.next_guess().unwrap();

        assert_eq!(
            solver.submit_feedback("xxx"),
            Err(SolveError::InvalidFeedback(FeedbackParseError::Length {
                expected: 5,
                actual: 3
            }))
        );
        assert_eq!(
            solver.submit_feedback("xxqxx"),
            Err(SolveError::InvalidFeedback(FeedbackParseError::Symbol {
                position: 2,
                symbol: 'q'
            }))
        );
    }

    #[test]
    fn exhaustion_is_a_distinct_error_not_a_guess() {
        let mut solver = Solver::with_opening(
            vocabulary(&["crane", "trace"], &["crane", "trace"]),
            opening("crane"),
        );
        solver.next_guess().unwrap();
        // all five letters absent contradicts both candidates
        solver.submit_feedback("xxxxx").unwrap();

        assert_eq!(solver.remaining_count(), 0);
        assert_eq!(solver.next_guess(), Err(SolveError::Exhausted));
    }

    #[test]
    fn pruning_keeps_the_true_solution() {
        let solutions = ["crane", "slate", "gloom", "pride", "refer", "moist", "fever"];
        let secret = "fever";
        let mut solver = Solver::new(vocabulary(&solutions, &solutions));

        for _ in 0..4 {
            let guess = solver.next_guess().unwrap();
            let code = FeedbackCode::score(&guess, secret);
            if code.is_all_correct() {
                return;
            }
            solver.submit_feedback_code(code).unwrap();
            assert!(solver.remaining().contains(&secret.to_string()));
        }
    }

    #[test]
    fn eliminated_repeated_letter_guess_does_not_reappear() {
        // Real-game budgeted feedback for nanny against canny grays the
        // leading n. Every positional predicate still passes for nanny, so
        // only the last-guess removal keeps it out.
        let mut solver = Solver::with_opening(
            vocabulary(&["nanny", "canny"], &["nanny", "canny"]),
            opening("nanny"),
        );
        assert_eq!(solver.next_guess().unwrap(), "nanny");
        solver.submit_feedback("xgggg").unwrap();

        assert_eq!(solver.remaining(), ["canny".to_string()]);
        assert_eq!(solver.next_guess().unwrap(), "canny");
    }

    #[test]
    fn candidate_list_shrinks_monotonically() {
        let solutions = [
            "crane", "slate", "gloom", "pride", "refer", "moist", "fever", "stare",
        ];
        let secret = "gloom";
        let mut solver = Solver::new(vocabulary(&solutions, &solutions));
        let mut previous = solver.remaining_count();

        for _ in 0..4 {
            let guess = solver.next_guess().unwrap();
            let code = FeedbackCode::score(&guess, secret);
            if code.is_all_correct() {
                return;
            }
            solver.submit_feedback_code(code).unwrap();
            assert!(solver.remaining_count() <= previous);
            previous = solver.remaining_count();
        }
    }
}
