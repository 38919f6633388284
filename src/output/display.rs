//! Display functions for the game and command results

use super::formatters::{
    create_progress_bar, format_board, format_colors, format_feedback, format_points,
    format_row, format_turn_result, format_winner,
};
use crate::commands::{BenchmarkResult, ScoreResult, TurnOutcome};
use crate::game::Game;
use colored::Colorize;

/// Rules of the game, one sentence per line
pub const RULES: [&str; 8] = [
    "Mastermind is a game between two players.",
    "A codemaker sets a code, and a codebreaker tries to break it.",
    "The code is made of 4 colors chosen from red, green, blue and yellow. Colors may repeat.",
    "After every attempt the codebreaker gets feedback on the guess.",
    "A white peg marks a right color in the right spot, a cyan peg a right color in a wrong spot.",
    "Codes and guesses are typed as \"color color color color\", one color per spot.",
    "Every round, both players get to be the codemaker once.",
    "After every turn the codemaker scores one point per attempt the codebreaker needed.",
];

/// Print the rules of the game
pub fn print_rules() {
    println!("{}\n", "Rules:".bright_cyan().bold());
    for sentence in RULES {
        println!("{sentence}");
    }
}

/// Print the board of the current turn, last attempt on top
pub fn print_board(game: &Game) {
    println!("{}", format_board(game.board()));
}

/// Print both players' points
pub fn print_points(game: &Game) {
    println!("{}", format_points(game));
}

/// Print who won the match
pub fn print_winner(game: &Game) {
    println!("{}", format_winner(game).bright_green().bold());
}

/// Print the result of a finished turn, revealing the code if it was not broken
pub fn print_turn_result(game: &Game, outcome: &TurnOutcome) {
    if !outcome.is_guessed() {
        println!("CODED ROW:\n{}\n", format_row(game.coded_row()));
    }
    println!("{}\n", format_turn_result(game, outcome));
}

/// Print a guess scored against a code
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Code:     {}", format_colors(result.code.pegs()));
    println!("Guess:    {}", format_colors(result.guess.pegs()));
    println!("{}", "─".repeat(60).cyan());

    println!("{}", format_row(&result.guess));
    println!("\nFeedback: {}", format_feedback(result.feedback));

    if result.feedback.is_perfect() {
        println!("{}", "✅ The guess breaks the code!".green().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        result.bot_name.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Turns played:     {}", result.total_turns);
    println!(
        "   Codes broken:     {} ({:.1}%)",
        result.solved, result.success_rate
    );
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!("   Average points:   {:.2}", result.average_points);
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Turns/second:     {:.1}", result.turns_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=result.amount_of_rows {
        if let Some(&count) = result.distribution.get(&attempts) {
            let pct = (count as f64 / result.total_turns as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {attempts:2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    let unsolved = result.total_turns - result.solved;
    if unsolved > 0 {
        println!(
            "   {}",
            format!("Not broken: {unsolved}").red()
        );
    }
}
