use std::io::BufRead;

use clap::Parser;

use crate::feedback::FeedbackCode;
use crate::solver::OpeningGuess;

/// Wordle entropy solver CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of allowed guess words
    #[arg(short = 'g', long = "guesses", requires = "solutions_path")]
    pub guesses_path: Option<String>,

    /// Path to a newline-delimited list of possible solution words
    #[arg(short = 's', long = "solutions", requires = "guesses_path")]
    pub solutions_path: Option<String>,

    /// Recompute the opening guess for the loaded word lists and cache it
    #[arg(long)]
    pub recompute_opening: bool,

    /// Play automatically against a known secret word and print each round
    #[arg(long = "solve", value_name = "WORD")]
    pub secret: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum FeedbackInput {
    Code(FeedbackCode),
    Invalid,
    Exit,
    NewGame,
}

pub fn read_feedback<R: BufRead>(reader: &mut R) -> FeedbackInput {
    println!("Enter feedback (g=green, y=yellow, x=gray, e.g. xxyxy), or 'exit', or 'next':");
    let mut input = String::new();
    if reader.read_line(&mut input).unwrap_or(0) == 0 {
        return FeedbackInput::Exit;
    }
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "exit" => FeedbackInput::Exit,
        "next" => FeedbackInput::NewGame,
        _ => match FeedbackCode::parse(&input) {
            Ok(code) => FeedbackInput::Code(code),
            Err(err) => {
                println!("Invalid feedback: {err}.");
                FeedbackInput::Invalid
            }
        },
    }
}

pub fn display_opening(opening: Option<&OpeningGuess>) {
    match opening {
        Some(opening) => println!(
            "Opening guess: {} ({:.3} bits expected)",
            opening.word, opening.entropy_bits
        ),
        None => println!("No opening guess available; it will be computed on the first round."),
    }
}

pub fn display_guess(round: usize, guess: &str, remaining: usize) {
    println!("\nGuess {round}: {guess} ({remaining} candidates)");
}

pub fn display_candidates(candidates: &[String]) {
    println!("Possible solutions ({})", candidates.len());
    for word in candidates.iter().take(5) {
        println!("{word}");
    }
    if candidates.len() > 5 {
        println!("...and {} more", candidates.len() - 5);
    }
}

pub fn display_solved(guess: &str, rounds: usize) {
    println!("Solved: {guess} in {rounds} guesses.");
}

pub fn display_exhausted() {
    println!("No candidates remain. The solution is missing from the word list, or some feedback was mistyped.");
}

pub fn display_out_of_rounds(remaining: usize) {
    println!("Out of guesses with {remaining} candidates left.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

pub fn display_new_game_message(word_count: usize) {
    println!("New game started. {word_count} possible solutions.");
}
