//! Interactive play command
//!
//! A human guesses against a secret answer drawn from the answers list.

use std::io::{self, Write};

use anyhow::{Context, Result};
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{GameError, GameSession, GameState, MAX_GUESSES};
use crate::output::render_guess;

/// Run a manual game. A fixed answer can be supplied for practice;
/// otherwise one is sampled.
///
/// # Errors
/// Returns an error on I/O failures or an invalid fixed answer.
pub fn run_play(config: &GameConfig, answer: Option<&str>, rng: &mut StdRng) -> Result<()> {
    let answer = match answer {
        Some(text) => {
            let word = Word::new(text).context("invalid answer word")?;
            anyhow::ensure!(
                config.is_allowed(word.text()),
                "answer {:?} is not in the word list",
                word.text()
            );
            word
        }
        None => config.sample_answer(rng),
    };
    let mut session = GameSession::new(config, answer);

    println!("\nGuess the five-letter word. You have {MAX_GUESSES} tries.");
    println!("Feedback: G = right spot, Y = in the word elsewhere, - = absent.\n");

    while session.state() == GameState::InProgress {
        let turn = session.guesses_used() + 1;
        let raw = prompt(&format!("Guess {turn}/{MAX_GUESSES}"))?;
        if raw == "quit" {
            println!("The word was {:?}.", session.answer().text());
            return Ok(());
        }
        match session.make_guess(&raw) {
            Ok(guess) => {
                println!("  {}  (score {})\n", render_guess(&guess), guess.score());
            }
            Err(GameError::InvalidGuess(word)) => {
                println!("  {word:?} is not in the word list, try again.\n");
            }
            Err(err) => return Err(err.into()),
        }
    }

    match session.state() {
        GameState::Won => println!(
            "You got it in {} guesses!",
            session.guesses_used()
        ),
        _ => println!("Out of guesses. The word was {:?}.", session.answer().text()),
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush().context("flushing prompt")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading guess")?;
    Ok(line.trim().to_ascii_lowercase())
}
