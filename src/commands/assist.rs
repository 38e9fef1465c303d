//! Assist command
//!
//! Suggests guesses for a game played elsewhere; the user reports the
//! feedback pattern after each suggestion.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::core::{Guess, Word, parse_pattern};
use crate::game::MAX_GUESSES;
use crate::solver::{CandidateUniverse, HintSet, SelectionContext, StrategyType};

/// Run the interactive assistant.
///
/// # Errors
/// Returns an error on I/O failures, when the strategy cannot produce
/// a suggestion, or when the reported feedback eliminates every
/// candidate.
pub fn run_assist(
    config: &GameConfig,
    strategy: StrategyType,
    first_word: Option<&str>,
    rng: &mut StdRng,
) -> Result<()> {
    println!("\nI'll suggest a word; play it and type the feedback you got.");
    println!("  G = green (right spot), Y = yellow (elsewhere), - = gray");
    println!("Commands: 'win' when solved, 'new' to restart, 'quit' to exit.\n");

    let opening = match first_word {
        Some(text) => Some(Word::new(text).context("invalid first word")?),
        None => None,
    };

    'game: loop {
        let mut hints = HintSet::new();
        let mut universe = CandidateUniverse::new(config.allowed(), config.weights());
        let mut last_score = 0;

        for turn in 1..=MAX_GUESSES {
            let suggestion = if turn == 1
                && let Some(word) = &opening
            {
                word.clone()
            } else {
                suggest(config, strategy, &universe, turn - 1, last_score, rng)?
            };
            println!(
                "Turn {turn}: try {:?}  ({} candidates left)",
                suggestion.text(),
                universe.len()
            );

            let pattern = loop {
                let input = prompt("Feedback")?;
                match input.as_str() {
                    "quit" => return Ok(()),
                    "new" => {
                        println!("\nStarting over.\n");
                        continue 'game;
                    }
                    "win" => {
                        println!("Solved in {turn} guesses.");
                        return Ok(());
                    }
                    other => {
                        if let Some(pattern) = parse_pattern(other) {
                            break pattern;
                        }
                        println!("  Enter five of G/Y/-, or a command.");
                    }
                }
            };

            let guess = Guess::from_pattern(suggestion, pattern);
            if guess.is_answer() {
                println!("Solved in {turn} guesses.");
                return Ok(());
            }
            hints.update(&guess);
            universe = universe
                .narrowed(guess.word(), &hints)
                .context("the reported feedback may be inconsistent")?;
            last_score = guess.score();
        }

        println!("Out of guesses.");
        return Ok(());
    }
}

fn suggest(
    config: &GameConfig,
    strategy: StrategyType,
    universe: &CandidateUniverse,
    guesses_used: usize,
    last_score: u16,
    rng: &mut StdRng,
) -> Result<Word> {
    if universe.len() == 1
        && let Some(word) = universe.words().next()
    {
        return Ok(word.clone());
    }
    let ctx = SelectionContext {
        universe,
        guess_pool: config.allowed(),
        weights: config.weights(),
        guesses_used,
        last_score,
    };
    match strategy.select_guess(&ctx, rng) {
        Some(word) => Ok(word),
        None => bail!("no suggestion available"),
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush().context("flushing prompt")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading feedback")?;
    Ok(line.trim().to_ascii_lowercase())
}
