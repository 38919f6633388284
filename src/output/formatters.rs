//! Formatting utilities for terminal output

use crate::commands::TurnOutcome;
use crate::core::{Feedback, GameError, Peg, ROW_LENGTH, Row};
use crate::game::Game;
use colored::{ColoredString, Colorize};

/// Width of the code part of a row between its outer bars
const CODE_WIDTH: usize = ROW_LENGTH * 8 - 2;

/// Width of the key part of a row between its bars
const KEY_WIDTH: usize = ROW_LENGTH * 2 + 1;

/// Paint `text` in the color of `peg`
#[must_use]
pub fn paint(text: &str, peg: Peg) -> ColoredString {
    match peg {
        Peg::Red => text.red(),
        Peg::Green => text.green(),
        Peg::Blue => text.blue(),
        Peg::Yellow => text.yellow(),
        Peg::White => text.bright_white(),
        Peg::Cyan => text.cyan(),
        Peg::Black => text.bright_black(),
    }
}

/// Horizontal border framing a row
#[must_use]
pub fn row_border() -> String {
    format!("|{}|{}|", "-".repeat(CODE_WIDTH), "-".repeat(KEY_WIDTH))
}

/// Format a row as three lines: border, pegs with key pegs, border
#[must_use]
pub fn format_row(row: &Row) -> String {
    let code: String = row
        .pegs()
        .iter()
        .map(|&peg| format!("|  {}  |", paint("██", peg)))
        .collect();
    let keys: String = row
        .key_pegs()
        .iter()
        .map(|&peg| format!(" {}", paint("●", peg)))
        .collect();

    let border = row_border();
    format!("{border}\n{code}{keys} |\n{border}")
}

/// Format rows top to bottom
#[must_use]
pub fn format_board<'a>(rows: impl IntoIterator<Item = &'a Row>) -> String {
    rows.into_iter()
        .map(format_row)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colored color names, e.g. for a code shown as text
#[must_use]
pub fn format_colors(pegs: &[Peg]) -> String {
    pegs.iter()
        .map(|&peg| paint(peg.name(), peg).bold().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Key peg counts in words
#[must_use]
pub fn format_feedback(feedback: Feedback) -> String {
    format!(
        "{} white, {} cyan, {} black",
        feedback.exact(),
        feedback.color_only(),
        feedback.none()
    )
}

#[must_use]
pub const fn point_or_points(points: u32) -> &'static str {
    if points == 1 { "point" } else { "points" }
}

/// Both players' points, one per line
#[must_use]
pub fn format_points(game: &Game) -> String {
    let mut text = String::from("Points:");
    for player in game.players_list() {
        text.push_str(&format!(
            "\n{}: {}",
            player,
            player.points().to_string().bright_cyan().bold()
        ));
    }
    text
}

/// Final result of the match
#[must_use]
pub fn format_winner(game: &Game) -> String {
    game.winner().map_or_else(
        || "The game is tied, no one wins!".to_string(),
        |winner| format!("{winner} wins the game!"),
    )
}

/// What happened in a finished turn
#[must_use]
pub fn format_turn_result(game: &Game, outcome: &TurnOutcome) -> String {
    let coder = game.player(outcome.coder);
    let breaker = game.player(outcome.breaker);
    let points = outcome.points;
    let unit = point_or_points(points);

    if outcome.is_guessed() {
        format!("{breaker} guessed the code! {coder} gets {points} {unit}")
    } else {
        format!("{breaker} didn't manage to guess the code. {coder} gets {points} {unit}")
    }
}

/// Hint shown when typed-in colors are rejected
#[must_use]
pub fn input_error_hint(error: &GameError) -> String {
    match error {
        GameError::InvalidPegColor => "You have to choose between Red Green Blue or Yellow".to_string(),
        GameError::InvalidAmountOfPegs(_) => format!("You have to pick exactly {ROW_LENGTH} colors"),
        other => other.to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
