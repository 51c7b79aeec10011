// Integration tests for the wordle-entropy solver
// These drive the public API end to end, with feedback generated by the codec

use std::io::Cursor;

use wordle_entropy::feedback::FeedbackCode;
use wordle_entropy::game;
use wordle_entropy::solver::{OpeningGuess, SolveError, Solver};
use wordle_entropy::wordbank::Vocabulary;

/// Upper bound used when playing the engine to completion. Looser than the
/// six-guess game cap so a slow convergence still counts as solved.
const ROUND_LIMIT: usize = 10;

fn play_to_completion(mut solver: Solver, secret: &str) -> Option<usize> {
    for round in 1..=ROUND_LIMIT {
        let guess = solver.next_guess().expect("engine should keep guessing");
        let code = FeedbackCode::score(&guess, secret);
        if code.is_all_correct() {
            return Some(round);
        }
        solver.submit_feedback_code(code).expect("valid feedback");
    }
    None
}

#[test]
fn solves_bundled_secrets() {
    let vocabulary = Vocabulary::bundled();

    for secret in ["crane", "gloom", "penny", "vivid", "roast"] {
        assert!(
            vocabulary.candidate_solutions.contains(&secret.to_string()),
            "{secret} should be a bundled solution"
        );
        let solver = Solver::new(vocabulary.clone());
        let rounds = play_to_completion(solver, secret);
        assert!(rounds.is_some(), "failed to solve {secret}");
    }
}

#[test]
fn truthful_feedback_never_prunes_the_secret() {
    let vocabulary = Vocabulary::bundled();
    let secret = "spine".to_string();
    let mut solver = Solver::new(vocabulary);

    for _ in 0..ROUND_LIMIT {
        let guess = solver.next_guess().unwrap();
        let code = FeedbackCode::score(&guess, &secret);
        if code.is_all_correct() {
            return;
        }
        solver.submit_feedback_code(code).unwrap();
        assert!(
            solver.remaining().contains(&secret),
            "secret pruned after guessing {guess}"
        );
    }
    panic!("never converged on {secret}");
}

#[test]
fn candidate_count_never_increases() {
    let vocabulary = Vocabulary::bundled();
    let secret = "world";
    let mut solver = Solver::new(vocabulary);
    let mut previous = solver.remaining_count();

    for _ in 0..ROUND_LIMIT {
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

#[test]
fn first_round_constraints_flow_through_to_the_candidates() {
    let vocabulary = Vocabulary::bundled();
    let mut solver = Solver::new(vocabulary);

    // The opening guess is tarse; against a secret like refer it earns xxyxy
    assert_eq!(solver.next_guess().unwrap(), "tarse");
    solver.submit_feedback("xxyxy").unwrap();

    assert!(solver.remaining().contains(&"refer".to_string()));
    for word in solver.remaining() {
        assert!(word.contains('r') && word.contains('e'));
        assert!(!word.contains('t') && !word.contains('a') && !word.contains('s'));
        let bytes = word.as_bytes();
        assert_ne!(bytes[2], b'r');
        assert_ne!(bytes[4], b'e');
    }
}

#[test]
fn inconsistent_feedback_exhausts_the_candidates() {
    let words: Vec<String> = ["crane", "trace", "react"]
        .iter()
        .map(|word| word.to_string())
        .collect();
    let vocabulary = Vocabulary {
        allowed_guesses: words.clone(),
        candidate_solutions: words,
    };
    let mut solver = Solver::with_opening(
        vocabulary,
        Some(OpeningGuess {
            word: "crane".to_string(),
            entropy_bits: 0.0,
        }),
    );

    solver.next_guess().unwrap();
    // every candidate shares letters with crane, so all-absent is impossible
    solver.submit_feedback("xxxxx").unwrap();

    assert_eq!(solver.remaining_count(), 0);
    assert_eq!(solver.next_guess(), Err(SolveError::Exhausted));
}

#[test]
fn single_remaining_candidate_is_proposed_directly() {
    let words: Vec<String> = ["gloom"].iter().map(|word| word.to_string()).collect();
    let vocabulary = Vocabulary {
        allowed_guesses: words.clone(),
        candidate_solutions: words,
    };
    let mut solver = Solver::with_opening(vocabulary, None);

    assert_eq!(solver.next_guess().unwrap(), "gloom");
}

#[test]
fn game_loop_over_the_bundled_vocabulary() {
    let vocabulary = Vocabulary::bundled();

    // The opening guess happens to be the secret
    let reader = Cursor::new("ggggg\n");
    game::game_loop(&vocabulary, Some(OpeningGuess::default()), reader);

    // A short game: feedback for tarse against refer, then refined guesses
    // until the input runs out
    let reader = Cursor::new("xxyxy\nexit\n");
    game::game_loop(&vocabulary, Some(OpeningGuess::default()), reader);
}

#[test]
fn self_play_style_loop_matches_submitted_strings() {
    // Feeding the engine string feedback must agree with the packed form
    let vocabulary = Vocabulary::bundled();
    let secret = "pride";

    let mut by_code = Solver::new(vocabulary.clone());
    let mut by_string = Solver::new(vocabulary);

    for _ in 0..ROUND_LIMIT {
        let guess_a = by_code.next_guess().unwrap();
        let guess_b = by_string.next_guess().unwrap();
        assert_eq!(guess_a, guess_b);

        let code = FeedbackCode::score(&guess_a, secret);
        if code.is_all_correct() {
            return;
        }
        by_code.submit_feedback_code(code).unwrap();
        by_string.submit_feedback(&code.to_string()).unwrap();
        assert_eq!(by_code.remaining(), by_string.remaining());
    }
    panic!("never converged on {secret}");
}
