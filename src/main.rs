//! Wordle Pilot - CLI
//!
//! Play, solve, assist, and benchmark modes over configurable word
//! lists.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_pilot::{
    commands::{
        SolveOptions, print_benchmark_report, print_solve_outcome, run_assist, run_benchmark,
        run_play, run_solve,
    },
    config::GameConfig,
    core::Word,
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "wordle_pilot",
    about = "Wordle game and adaptive candidate-elimination solver",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: unique (default), weighted, entropy
    #[arg(short, long, global = true, default_value = "unique")]
    strategy: String,

    /// Path to a custom allowed-words list (one word per line)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Path to a custom possible-answers list
    #[arg(short = 'a', long, global = true)]
    answers: Option<PathBuf>,

    /// Path to a JSON word-weight table
    #[arg(long, global = true)]
    weights: Option<PathBuf>,

    /// Seed for reproducible runs (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game yourself (default)
    Play {
        /// Fix the secret answer instead of sampling one
        #[arg(long)]
        answer: Option<String>,
    },

    /// Watch the solver play one game
    Solve {
        /// Target answer; sampled when omitted
        #[arg(long)]
        answer: Option<String>,

        /// Override the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Print the turn-by-turn solution path
        #[arg(short, long)]
        verbose: bool,
    },

    /// Get suggestions for a game played elsewhere
    Assist {
        /// Override the first suggestion
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Benchmark solver performance over many games
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Force a first guess in every game
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::load(
        cli.words.as_deref(),
        cli.answers.as_deref(),
        cli.weights.as_deref(),
    )?;
    let strategy = StrategyType::from_name(&cli.strategy);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command.unwrap_or(Commands::Play { answer: None }) {
        Commands::Play { answer } => run_play(&config, answer.as_deref(), &mut rng)?,
        Commands::Solve {
            answer,
            first_word,
            verbose,
        } => {
            let options = SolveOptions {
                answer,
                first_word,
                verbose,
            };
            let outcome = run_solve(&config, strategy, &options, &mut rng)?;
            if options.verbose {
                print_solve_outcome(&outcome);
            } else if outcome.solved() {
                println!(
                    "Solved {:?} in {} guesses.",
                    outcome.answer,
                    outcome.turns.len()
                );
            } else {
                println!("Failed to solve. The answer was {:?}.", outcome.answer);
            }
        }
        Commands::Assist { first_word } => {
            run_assist(&config, strategy, first_word.as_deref(), &mut rng)?;
        }
        Commands::Benchmark { count, first_word } => {
            let first = first_word.map(Word::new).transpose()?;
            let report = run_benchmark(&config, strategy, count, first.as_ref(), cli.seed.unwrap_or(0))?;
            print_benchmark_report(&report);
        }
    }
    Ok(())
}
