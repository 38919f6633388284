//! Benchmark command
//!
//! Measures how fast a bot breaks random codes.

use super::turn::{Role, TurnDriver, TurnOutcome, play_turn};
use crate::game::{DEFAULT_AMOUNT_OF_ROWS, Game, GameConfig, Gamemode};
use crate::player::Seat;
use crate::player::strategy::random_colors;
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// What to benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// `Pve` for the random bot, `PveSmart` for the smart bot
    pub gamemode: Gamemode,
    pub turns: usize,
    pub amount_of_rows: usize,
    /// Base seed; turn `i` uses `seed + i`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(gamemode: Gamemode, turns: usize) -> Self {
        Self {
            gamemode,
            turns,
            amount_of_rows: DEFAULT_AMOUNT_OF_ROWS,
            seed: None,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub bot_name: String,
    pub total_turns: usize,
    pub solved: usize,
    pub success_rate: f64,
    /// Over solved turns only
    pub average_attempts: f64,
    /// Points the coder earned, per turn
    pub average_points: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    /// Solved turns by number of attempts
    pub distribution: FxHashMap<usize, usize>,
    pub amount_of_rows: usize,
    pub duration: Duration,
    pub turns_per_second: f64,
}

/// Enters a random code for the human seat
struct RandomCoder {
    rng: StdRng,
}

impl TurnDriver for RandomCoder {
    fn colors_for(&mut self, _game: &Game, _seat: Seat, _role: Role) -> Result<Vec<String>> {
        Ok(random_colors(&mut self.rng).map(str::to_string).to_vec())
    }
}

/// Play `config.turns` turns of a random code against the configured bot
///
/// Turns run in parallel, each on its own game.
///
/// # Errors
/// Returns an error for a gamemode without a bot, an invalid board size or a
/// failed turn.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    if config.gamemode == Gamemode::Pvp {
        bail!("benchmark needs a bot, {} has none", config.gamemode);
    }
    info!(gamemode = %config.gamemode, turns = config.turns, "benchmark started");

    let pb = if config.show_progress {
        ProgressBar::new(config.turns as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let outcomes = (0..config.turns)
        .into_par_iter()
        .map(|trial| {
            let outcome = play_trial(config, trial);
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<TurnOutcome>>>()?;
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let bot_name = Game::new(GameConfig::new(config.gamemode, 1))?
        .player(Seat::Second)
        .name()
        .to_string();

    let result = summarize(bot_name, config.amount_of_rows, &outcomes, duration);
    info!(
        solved = result.solved,
        average_attempts = result.average_attempts,
        "benchmark finished"
    );
    Ok(result)
}

fn play_trial(config: &BenchmarkConfig, trial: usize) -> Result<TurnOutcome> {
    let seed = config.seed.map(|seed| seed.wrapping_add(trial as u64));
    let game_config = GameConfig::new(config.gamemode, 1)
        .with_rows(config.amount_of_rows)
        .with_seed(seed);
    let mut game = Game::new(game_config)?;

    let rng = seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        |seed| StdRng::seed_from_u64(seed.wrapping_mul(31)),
    );
    let mut coder = RandomCoder { rng };

    play_turn(&mut game, Seat::First, Seat::Second, &mut coder)
}

fn summarize(
    bot_name: String,
    amount_of_rows: usize,
    outcomes: &[TurnOutcome],
    duration: Duration,
) -> BenchmarkResult {
    let total_turns = outcomes.len();
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut solved_attempts = 0;
    let mut total_points = 0u64;

    for outcome in outcomes {
        total_points += u64::from(outcome.points);
        if outcome.is_guessed() {
            solved_attempts += outcome.attempts;
            *distribution.entry(outcome.attempts).or_insert(0) += 1;
        }
    }

    let solved: usize = distribution.values().sum();
    let ratio = |value: f64, count: usize| if count == 0 { 0.0 } else { value / count as f64 };

    BenchmarkResult {
        bot_name,
        total_turns,
        solved,
        success_rate: ratio(solved as f64 * 100.0, total_turns),
        average_attempts: ratio(solved_attempts as f64, solved),
        average_points: ratio(total_points as f64, total_turns),
        min_attempts: distribution.keys().copied().min().unwrap_or(0),
        max_attempts: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        amount_of_rows,
        duration,
        turns_per_second: total_turns as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(gamemode: Gamemode, turns: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            seed: Some(2024),
            ..BenchmarkConfig::new(gamemode, turns)
        }
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&seeded(Gamemode::Pve, 20)).unwrap();

        assert_eq!(result.bot_name, "Bot");
        assert_eq!(result.total_turns, 20);
        assert!(result.solved <= 20);
        assert!(result.average_points >= 1.0);
        assert!(result.average_points <= 11.0);
    }

    /// Points a coder earns on average: attempts for broken codes, rows + 1 otherwise
    fn expected_average_points(result: &BenchmarkResult) -> f64 {
        let unbroken = result.total_turns - result.solved;
        let broken_points = result.average_attempts * result.solved as f64;
        let unbroken_points = ((result.amount_of_rows + 1) * unbroken) as f64;
        (broken_points + unbroken_points) / result.total_turns as f64
    }

    #[test]
    fn smart_bot_results_are_bounded() {
        let result = run_benchmark(&seeded(Gamemode::PveSmart, 50)).unwrap();

        assert_eq!(result.bot_name, "Bot Smart");
        assert!(result.solved <= result.total_turns);
        assert!((result.success_rate - result.solved as f64 * 2.0).abs() < 1e-9);
        if result.solved > 0 {
            assert!(result.min_attempts >= 1);
            assert!(result.max_attempts <= 10);
        }
    }

    #[test]
    fn smart_bot_leaves_some_codes_unbroken() {
        // Four different colors have 24 arrangements, only six rows are left for them
        let result = run_benchmark(&seeded(Gamemode::PveSmart, 200)).unwrap();
        assert!(result.solved < result.total_turns);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(&seeded(Gamemode::Pve, 30)).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        for &attempts in result.distribution.keys() {
            assert!((1..=10).contains(&attempts));
        }
    }

    #[test]
    fn benchmark_metrics_consistency() {
        for gamemode in [Gamemode::Pve, Gamemode::PveSmart] {
            let result = run_benchmark(&seeded(gamemode, 30)).unwrap();

            if result.solved > 0 {
                assert!(result.average_attempts >= result.min_attempts as f64);
                assert!(result.average_attempts <= result.max_attempts as f64);
            }
            assert!((result.average_points - expected_average_points(&result)).abs() < 1e-9);
        }
    }

    #[test]
    fn short_board_counts_unbroken_points() {
        // A single solid row only breaks single-color codes
        let config = BenchmarkConfig {
            amount_of_rows: 1,
            ..seeded(Gamemode::PveSmart, 40)
        };
        let result = run_benchmark(&config).unwrap();

        assert!(result.solved < result.total_turns);
        assert!((result.average_points - expected_average_points(&result)).abs() < 1e-9);
    }

    #[test]
    fn seeded_benchmark_is_reproducible() {
        let first = run_benchmark(&seeded(Gamemode::Pve, 25)).unwrap();
        let second = run_benchmark(&seeded(Gamemode::Pve, 25)).unwrap();
        assert_eq!(first.distribution, second.distribution);
        assert!((first.average_points - second.average_points).abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_without_turns() {
        let result = run_benchmark(&seeded(Gamemode::Pve, 0)).unwrap();
        assert_eq!(result.total_turns, 0);
        assert_eq!(result.solved, 0);
        assert!(result.average_attempts.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_needs_a_bot() {
        assert!(run_benchmark(&seeded(Gamemode::Pvp, 5)).is_err());
    }
}
