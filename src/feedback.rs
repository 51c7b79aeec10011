//! Feedback codec for comparing a guess against a solution.
//!
//! Each letter of a guess scores as absent, present elsewhere, or in the
//! correct position. A whole word packs into a [`FeedbackCode`], 2 bits per
//! letter with position 0 in the most significant pair, which keeps the code
//! cheap to hash when grouping words by the feedback they produce.

use std::fmt;

use crate::WORD_LENGTH;

/// Outcome for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    /// The letter does not occur anywhere in the solution (gray)
    Absent,
    /// The letter occurs in the solution but not at this position (yellow)
    Present,
    /// The letter matches the solution at this position (green)
    Correct,
}

impl LetterScore {
    const BITS: usize = 2;

    /// Score one letter of the guess against the solution.
    ///
    /// The rule is character-presence based: a letter that occurs anywhere in
    /// the solution is never scored absent, no matter how many times it
    /// repeats in the guess. Official Wordle caps yellows by the number of
    /// unmatched occurrences; this codec does not.
    pub fn score(guess_letter: u8, position: usize, solution: &str) -> Self {
        if !solution.as_bytes().contains(&guess_letter) {
            LetterScore::Absent
        } else if solution.as_bytes()[position] == guess_letter {
            LetterScore::Correct
        } else {
            LetterScore::Present
        }
    }

    pub fn to_char(self) -> char {
        match self {
            LetterScore::Absent => 'x',
            LetterScore::Present => 'y',
            LetterScore::Correct => 'g',
        }
    }

    /// Parse from a feedback character (x=gray, y=yellow, g=green).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'x' => Some(LetterScore::Absent),
            'y' => Some(LetterScore::Present),
            'g' => Some(LetterScore::Correct),
            _ => None,
        }
    }

    fn value(self) -> u16 {
        match self {
            LetterScore::Absent => 0b00,
            LetterScore::Present => 0b01,
            LetterScore::Correct => 0b10,
        }
    }
}

/// Packed feedback for a whole guess: 2 bits per letter, 10 bits total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackCode(u16);

impl FeedbackCode {
    /// The code produced when every letter is in the correct position.
    pub const ALL_CORRECT: Self = Self(0b10_10_10_10_10);

    /// Compute the feedback `guess` would receive if the secret were
    /// `solution`.
    pub fn score(guess: &str, solution: &str) -> Self {
        debug_assert_eq!(guess.len(), WORD_LENGTH);
        debug_assert_eq!(solution.len(), WORD_LENGTH);

        let mut bits = 0u16;
        for (position, &letter) in guess.as_bytes().iter().enumerate() {
            bits |= LetterScore::score(letter, position, solution).value() << Self::shift(position);
        }
        Self(bits)
    }

    /// Human-readable form of [`FeedbackCode::score`]. For example, "tarse"
    /// against "refer" gives "xxyxy".
    pub fn score_string(guess: &str, solution: &str) -> String {
        Self::score(guess, solution).to_string()
    }

    /// Parse an x/y/g feedback string, case-insensitively. Anything else is
    /// rejected with the offending position.
    pub fn parse(feedback: &str) -> Result<Self, FeedbackParseError> {
        let symbols: Vec<char> = feedback.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackParseError::Length {
                expected: WORD_LENGTH,
                actual: symbols.len(),
            });
        }
        let mut bits = 0u16;
        for (position, &symbol) in symbols.iter().enumerate() {
            let score = LetterScore::from_char(symbol)
                .ok_or(FeedbackParseError::Symbol { position, symbol })?;
            bits |= score.value() << Self::shift(position);
        }
        Ok(Self(bits))
    }

    pub fn from_scores(scores: [LetterScore; WORD_LENGTH]) -> Self {
        let mut bits = 0u16;
        for (position, score) in scores.into_iter().enumerate() {
            bits |= score.value() << Self::shift(position);
        }
        Self(bits)
    }

    pub fn to_scores(self) -> [LetterScore; WORD_LENGTH] {
        let mut scores = [LetterScore::Absent; WORD_LENGTH];
        for (position, score) in scores.iter_mut().enumerate() {
            *score = match (self.0 >> Self::shift(position)) & 0b11 {
                0b00 => LetterScore::Absent,
                0b01 => LetterScore::Present,
                0b10 => LetterScore::Correct,
                _ => unreachable!("no constructor emits the 0b11 pair"),
            };
        }
        scores
    }

    /// Whether this code ends the puzzle.
    pub fn is_all_correct(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// The raw packed bits.
    pub fn bits(self) -> u16 {
        self.0
    }

    fn shift(position: usize) -> u16 {
        (LetterScore::BITS * (WORD_LENGTH - 1 - position)) as u16
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for score in self.to_scores() {
            write!(f, "{}", score.to_char())?;
        }
        Ok(())
    }
}

/// Rejected feedback input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackParseError {
    /// The feedback string does not have one symbol per letter.
    Length { expected: usize, actual: usize },
    /// A symbol outside the x/y/g alphabet.
    Symbol { position: usize, symbol: char },
}

impl fmt::Display for FeedbackParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackParseError::Length { expected, actual } => {
                write!(f, "feedback must have {expected} symbols, got {actual}")
            }
            FeedbackParseError::Symbol { position, symbol } => {
                write!(
                    f,
                    "unrecognized feedback symbol '{symbol}' at position {position}, expected x, y, or g"
                )
            }
        }
    }
}

impl std::error::Error for FeedbackParseError {}
