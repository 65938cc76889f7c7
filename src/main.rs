//! Ocelo: an 8x8 stone-flipping board game in the terminal.
//!
//! ## Usage
//!
//! - `ocelo` - Play a two-player game at the terminal
//! - `ocelo play` - Same as above
//! - `ocelo demo` - Play random games and print their results

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ocelo::board::Player;
use ocelo::game::GameController;
use ocelo::playout::{RandomMoves, playout};
use ocelo::rules::Outcome;
use ocelo::shell::Shell;

/// Ocelo: an 8x8 stone-flipping board game
#[derive(Parser)]
#[command(name = "ocelo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug", "ocelo=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a two-player game, reading moves as "row col"
    Play,
    /// Play random games between two random movers
    Demo {
        /// Number of games to play
        #[arg(short, long, default_value_t = 10)]
        games: usize,
        /// Seed for reproducible games
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.command {
        Some(Commands::Play) | None => run_play(),
        Some(Commands::Demo { games, seed }) => run_demo(games, seed),
    }
}

fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter {default_filter:?}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run_play() -> Result<()> {
    let mut game = GameController::new();
    let mut shell = Shell::stdio();
    let outcome = game.run(&mut shell).context("game aborted")?;
    if outcome.is_none() {
        // Abandoned: show where things stood, without a verdict.
        shell
            .print_board(&game.board().snapshot())
            .context("failed to write board")?;
    }
    Ok(())
}

fn run_demo(games: usize, seed: Option<u64>) -> Result<()> {
    println!("Ocelo: random self-play\n");

    let mut source = match seed {
        Some(seed) => RandomMoves::with_seed(seed),
        None => RandomMoves::from_entropy(),
    };

    let (mut black_wins, mut white_wins, mut draws) = (0, 0, 0);
    for i in 1..=games {
        let result = playout(&mut source).with_context(|| format!("playout {i} failed"))?;
        let verdict = match result.outcome {
            Outcome::Winner(Player::Black) => {
                black_wins += 1;
                "Black wins"
            }
            Outcome::Winner(Player::White) => {
                white_wins += 1;
                "White wins"
            }
            Outcome::Draw => {
                draws += 1;
                "Draw"
            }
        };
        println!(
            "Game {i}: Black {} White {} after {} moves - {verdict}",
            result.black, result.white, result.moves
        );
    }

    println!("\nBlack: {black_wins}  White: {white_wins}  Draws: {draws}");
    Ok(())
}
