//! Interactive game loop: the engine proposes guesses, the user relays the
//! feedback the game showed them.

use std::io::BufRead;

use crate::cli::{self, FeedbackInput};
use crate::debug_log;
use crate::solver::{DEFAULT_OPENING_WORD, OpeningGuess, SolveError, Solver};
use crate::wordbank::{self, Vocabulary};

/// A puzzle allows this many guesses.
pub const MAX_ROUNDS: usize = 6;

enum GameEnd {
    Finished,
    NewGame,
    Exit,
}

/// Run interactive games until the user exits. `next` abandons the current
/// puzzle and starts over with a fresh solver.
pub fn game_loop<R: BufRead>(vocabulary: &Vocabulary, opening: Option<OpeningGuess>, mut reader: R) {
    loop {
        let mut solver = Solver::with_opening(vocabulary.clone(), opening.clone());
        match play_one_game(&mut solver, &mut reader) {
            GameEnd::Exit => {
                cli::display_exit_message();
                break;
            }
            GameEnd::NewGame => {
                cli::display_new_game_message(vocabulary.candidate_solutions.len());
            }
            GameEnd::Finished => break,
        }
    }
}

fn play_one_game<R: BufRead>(solver: &mut Solver, reader: &mut R) -> GameEnd {
    for round in 1..=MAX_ROUNDS {
        let guess = match solver.next_guess() {
            Ok(guess) => guess,
            Err(SolveError::Exhausted) => {
                cli::display_exhausted();
                return GameEnd::Finished;
            }
            Err(err) => {
                println!("{err}");
                return GameEnd::Finished;
            }
        };
        cli::display_guess(round, &guess, solver.remaining_count());

        loop {
            match cli::read_feedback(reader) {
                FeedbackInput::Exit => return GameEnd::Exit,
                FeedbackInput::NewGame => return GameEnd::NewGame,
                FeedbackInput::Invalid => continue,
                FeedbackInput::Code(code) => {
                    if code.is_all_correct() {
                        cli::display_solved(&guess, round);
                        return GameEnd::Finished;
                    }
                    if let Err(err) = solver.submit_feedback_code(code) {
                        println!("{err}");
                        return GameEnd::Finished;
                    }
                    cli::display_candidates(solver.remaining());
                    break;
                }
            }
        }
    }
    cli::display_out_of_rounds(solver.remaining_count());
    GameEnd::Finished
}

/// Decide the opening guess: the precomputed constant when the loaded lists
/// can play it, otherwise a cached or freshly computed one.
pub fn resolve_opening(vocabulary: &Vocabulary, recompute: bool) -> Option<OpeningGuess> {
    let cache_path = wordbank::opening_cache_path();

    if !recompute {
        if vocabulary
            .allowed_guesses
            .iter()
            .any(|word| word == DEFAULT_OPENING_WORD)
        {
            return Some(OpeningGuess::default());
        }
        if let Some(path) = &cache_path
            && let Some(opening) = wordbank::read_cached_opening(path)
            && vocabulary.allowed_guesses.contains(&opening.word)
        {
            return Some(opening);
        }
    }

    println!("Computing opening guess, please wait...");
    let opening = Solver::compute_opening(vocabulary);

    if let Some(opening) = &opening
        && let Some(path) = &cache_path
        && let Err(err) = wordbank::write_cached_opening(path, opening)
    {
        debug_log!("failed to cache opening guess: {err}");
    }

    opening
}
