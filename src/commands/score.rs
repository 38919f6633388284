//! Score command
//!
//! Scores a single guess against a code without playing a turn.

use super::turn::split_colors;
use crate::core::{Feedback, Row};
use anyhow::{Context, Result};

/// A guess scored against a code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub code: Row,
    /// The guess with its key pegs installed
    pub guess: Row,
    pub feedback: Feedback,
}

/// Score `guess` against `code`, both given as color lists
///
/// Colors may be separated by spaces or commas.
///
/// # Errors
///
/// Returns an error if either list is not four code colors.
pub fn score_guess(code: &str, guess: &str) -> Result<ScoreResult> {
    let code = Row::from_colors(&split_colors(code)).with_context(|| format!("invalid code '{code}'"))?;
    let mut guess =
        Row::from_colors(&split_colors(guess)).with_context(|| format!("invalid guess '{guess}'"))?;

    guess.compare_pegs(&code);
    let feedback = Feedback::from_key_pegs(guess.key_pegs());

    Ok(ScoreResult {
        code,
        guess,
        feedback,
    })
}
