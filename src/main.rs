//! Mastermind - CLI
//!
//! Mastermind with TUI and CLI modes, against a friend or a bot.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{BenchmarkConfig, PlayOptions, run_benchmark, run_simple, score_guess},
    game::{DEFAULT_AMOUNT_OF_ROWS, Gamemode, MAX_ROUNDS, MIN_ROUNDS},
    interactive::{App, run_tui},
    output::{print_benchmark_result, print_score_result},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with random and smart bots",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess attempts per turn
    #[arg(short, long, global = true, default_value_t = DEFAULT_AMOUNT_OF_ROWS)]
    rows: usize,

    /// Seed for the bots, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Gamemode: pvp, pve or pve-smart (asked for when missing)
        #[arg(short, long)]
        mode: Option<Gamemode>,

        /// Rounds to play, 1 to 10 (asked for when missing)
        #[arg(long, value_parser = clap::value_parser!(u32).range(i64::from(MIN_ROUNDS)..=i64::from(MAX_ROUNDS)))]
        rounds: Option<u32>,
    },

    /// Simple CLI mode (text prompts without TUI)
    Simple {
        /// Gamemode: pvp, pve or pve-smart (asked for when missing)
        #[arg(short, long)]
        mode: Option<Gamemode>,

        /// Rounds to play, 1 to 10 (asked for when missing)
        #[arg(long, value_parser = clap::value_parser!(u32).range(i64::from(MIN_ROUNDS)..=i64::from(MAX_ROUNDS)))]
        rounds: Option<u32>,
    },

    /// Benchmark a bot breaking random codes
    Benchmark {
        /// Bot to test: random or smart
        #[arg(short, long, default_value = "smart")]
        strategy: String,

        /// Number of turns to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },

    /// Score a guess against a code
    Score {
        /// The secret code, e.g. "red,green,blue,yellow"
        code: String,

        /// The guess, e.g. "red,blue,green,yellow"
        guess: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        mode: None,
        rounds: None,
    });
    debug!(rows = cli.rows, seed = ?cli.seed, "starting");

    match command {
        Commands::Play { mode, rounds } => {
            run_tui(App::new(play_options(mode, rounds, cli.rows, cli.seed)))
        }
        Commands::Simple { mode, rounds } => {
            run_simple(&play_options(mode, rounds, cli.rows, cli.seed))
        }
        Commands::Benchmark { strategy, count } => {
            run_benchmark_command(&strategy, count, cli.rows, cli.seed)
        }
        Commands::Score { code, guess } => {
            let result = score_guess(&code, &guess)?;
            print_score_result(&result);
            Ok(())
        }
    }
}

const fn play_options(
    gamemode: Option<Gamemode>,
    rounds: Option<u32>,
    amount_of_rows: usize,
    seed: Option<u64>,
) -> PlayOptions {
    PlayOptions {
        gamemode,
        rounds,
        amount_of_rows,
        seed,
    }
}

fn run_benchmark_command(
    strategy_name: &str,
    count: usize,
    amount_of_rows: usize,
    seed: Option<u64>,
) -> Result<()> {
    let gamemode = match strategy_name.to_lowercase().as_str() {
        "random" | "easy" => Gamemode::Pve,
        "smart" | "hard" => Gamemode::PveSmart,
        other => anyhow::bail!("unknown strategy '{other}', expected random or smart"),
    };

    println!("Running benchmark on {count} random codes...");

    let config = BenchmarkConfig {
        amount_of_rows,
        seed,
        show_progress: true,
        ..BenchmarkConfig::new(gamemode, count)
    };
    let result = run_benchmark(&config)?;
    print_benchmark_result(&result);
    Ok(())
}
