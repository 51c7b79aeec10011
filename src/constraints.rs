//! Letter knowledge accumulated from feedback.

use crate::WORD_LENGTH;
use crate::feedback::{FeedbackCode, LetterScore};

/// Everything known about the solution's letters after some rounds of
/// feedback. Each call to [`ConstraintState::interpret`] folds one
/// (guess, feedback) pair into the running state; fields only ever gain
/// information.
#[derive(Debug, Clone, Default)]
pub struct ConstraintState {
    /// Letters confirmed to occur somewhere in the solution, sorted and
    /// deduplicated.
    must_include: Vec<u8>,
    /// Letters confirmed absent, minus anything also in `must_include`.
    must_exclude: Vec<u8>,
    /// Confirmed letter per position, where known.
    fixed_positions: [Option<u8>; WORD_LENGTH],
    /// Positions a present letter is known not to occupy.
    forbidden_positions: Vec<(usize, u8)>,
}

impl ConstraintState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one round of feedback into the constraint fields.
    pub fn interpret(&mut self, guess: &str, code: FeedbackCode) {
        for (position, (&letter, score)) in
            guess.as_bytes().iter().zip(code.to_scores()).enumerate()
        {
            match score {
                LetterScore::Absent => self.must_exclude.push(letter),
                LetterScore::Present => {
                    self.must_include.push(letter);
                    if !self.forbidden_positions.contains(&(position, letter)) {
                        self.forbidden_positions.push((position, letter));
                    }
                }
                LetterScore::Correct => {
                    self.must_include.push(letter);
                    self.fixed_positions[position] = Some(letter);
                }
            }
        }
        sort_dedup(&mut self.must_include);
        sort_dedup(&mut self.must_exclude);
        // A letter confirmed present anywhere overrides an absent signal for
        // another copy of the same letter, in this guess or a later one.
        self.must_exclude
            .retain(|letter| !self.must_include.contains(letter));
    }

    pub fn must_include(&self) -> &[u8] {
        &self.must_include
    }

    pub fn must_exclude(&self) -> &[u8] {
        &self.must_exclude
    }

    pub fn fixed_positions(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.fixed_positions
    }

    pub fn forbidden_positions(&self) -> &[(usize, u8)] {
        &self.forbidden_positions
    }
}

fn sort_dedup(letters: &mut Vec<u8>) {
    letters.sort_unstable();
    letters.dedup();
}
