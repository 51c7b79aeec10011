use std::io;

use wordle_entropy::WORD_LENGTH;
use wordle_entropy::cli::{self, parse_cli};
use wordle_entropy::feedback::FeedbackCode;
use wordle_entropy::game;
use wordle_entropy::solver::{OpeningGuess, Solver};
use wordle_entropy::wordbank::Vocabulary;

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let vocabulary = match (&cli.guesses_path, &cli.solutions_path) {
        (Some(guesses), Some(solutions)) => match Vocabulary::from_files(guesses, solutions) {
            Ok(vocabulary) => vocabulary,
            Err(e) => {
                eprintln!("Failed to load word lists: {e}");
                return;
            }
        },
        _ => Vocabulary::bundled(),
    };
    println!(
        "Loaded {} guess words, {} possible solutions.",
        vocabulary.allowed_guesses.len(),
        vocabulary.candidate_solutions.len()
    );

    let opening = game::resolve_opening(&vocabulary, cli.recompute_opening);
    cli::display_opening(opening.as_ref());

    if let Some(secret) = &cli.secret {
        self_play(&vocabulary, opening, secret);
        return;
    }

    let stdin = io::stdin();
    game::game_loop(&vocabulary, opening, stdin.lock());
}

/// Play a full game against a known secret, generating the feedback
/// internally and printing each round.
fn self_play(vocabulary: &Vocabulary, opening: Option<OpeningGuess>, secret: &str) {
    let secret = secret.trim().to_lowercase();
    if secret.len() != WORD_LENGTH || !secret.chars().all(|c| c.is_ascii_alphabetic()) {
        eprintln!("Secret must be {WORD_LENGTH} letters.");
        return;
    }

    let mut solver = Solver::with_opening(vocabulary.clone(), opening);
    for round in 1..=game::MAX_ROUNDS {
        let guess = match solver.next_guess() {
            Ok(guess) => guess,
            Err(e) => {
                println!("{e}");
                return;
            }
        };
        let code = FeedbackCode::score(&guess, &secret);
        println!("Round {round}: {guess} -> {code}");

        if code.is_all_correct() {
            println!("Solved in {round} guesses.");
            return;
        }
        if let Err(e) = solver.submit_feedback_code(code) {
            println!("{e}");
            return;
        }
    }
    println!("Not solved within {} guesses.", game::MAX_ROUNDS);
}
