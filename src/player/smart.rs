//! Smart bot
//!
//! Guesses every solid-color row it has not tried yet, in the order red, green,
//! blue, yellow. Once all four are on the board it switches to rearranging the
//! colors of the secret row, never repeating an arrangement already played.
//!
//! The fallback reads the secret code it is trying to break. That is how the
//! bot has always played; it only kicks in after four solid guesses.

use super::strategy::{Board, Colors, Strategy, random_colors};
use crate::core::{CODE_PEGS, Peg, ROW_LENGTH, Result, validate_guess};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Bot that avoids guesses already on the board
#[derive(Debug, Clone)]
pub struct SmartBot {
    rng: StdRng,
}

impl SmartBot {
    /// Smart bot seeded from the thread-local generator
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Smart bot with reproducible choices
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick an arrangement of the secret's colors that is not on the board yet
    ///
    /// Every untried distinct arrangement is equally likely. When none is left
    /// the secret's own order is returned.
    fn new_colors_variation(
        &mut self,
        coded: &[Peg; ROW_LENGTH],
        tried: &FxHashSet<[Peg; ROW_LENGTH]>,
    ) -> [Peg; ROW_LENGTH] {
        let untried: Vec<[Peg; ROW_LENGTH]> = arrangements(*coded)
            .into_iter()
            .filter(|arrangement| !tried.contains(arrangement))
            .collect();

        untried.choose(&mut self.rng).copied().unwrap_or(*coded)
    }
}

impl Default for SmartBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for SmartBot {
    fn code_pegs_colors(&mut self, _input: Option<&[&str]>, _board: Board<'_>) -> Result<Colors> {
        Ok(random_colors(&mut self.rng))
    }

    fn guess_pegs_colors(&mut self, _input: Option<&[&str]>, board: Board<'_>) -> Result<Colors> {
        let tried: FxHashSet<[Peg; ROW_LENGTH]> =
            board.rows().iter().map(|row| *row.pegs()).collect();

        let pegs = CODE_PEGS
            .into_iter()
            .map(|color| [color; ROW_LENGTH])
            .find(|solid| !tried.contains(solid))
            .unwrap_or_else(|| self.new_colors_variation(board.coded_row().pegs(), &tried));

        let colors = pegs.map(Peg::name);
        validate_guess(&colors)?;
        Ok(colors)
    }
}

/// All distinct orderings of a row's pegs
fn arrangements(pegs: [Peg; ROW_LENGTH]) -> Vec<[Peg; ROW_LENGTH]> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    let mut working = pegs;
    permute(&mut working, 0, &mut |arrangement| {
        if seen.insert(arrangement) {
            out.push(arrangement);
        }
    });
    out
}

fn permute<F: FnMut([Peg; ROW_LENGTH])>(pegs: &mut [Peg; ROW_LENGTH], start: usize, emit: &mut F) {
    if start == ROW_LENGTH {
        emit(*pegs);
        return;
    }
    for i in start..ROW_LENGTH {
        pegs.swap(start, i);
        permute(pegs, start + 1, emit);
        pegs.swap(start, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameError, Row};

    fn board_with(played: &[[&str; ROW_LENGTH]], amount: usize) -> Vec<Row> {
        let mut rows: Vec<Row> = played
            .iter()
            .map(|colors| Row::from_colors(colors).unwrap())
            .collect();
        rows.resize(amount, Row::new());
        rows
    }

    #[test]
    fn starts_with_solid_red_on_empty_board() {
        let rows = board_with(&[], 10);
        let coded = Row::from_colors(&["Green", "Blue", "Yellow", "Red"]).unwrap();
        let mut bot = SmartBot::seeded(1);

        let guess = bot.guess_pegs_colors(None, Board::new(&rows, &coded)).unwrap();
        assert_eq!(guess, ["RED"; 4]);
    }

    #[test]
    fn tries_solid_colors_in_fixed_order() {
        let coded = Row::from_colors(&["Green", "Blue", "Yellow", "Red"]).unwrap();
        let mut bot = SmartBot::seeded(1);

        let rows = board_with(&[["RED"; 4]], 10);
        let guess = bot.guess_pegs_colors(None, Board::new(&rows, &coded)).unwrap();
        assert_eq!(guess, ["GREEN"; 4]);

        let rows = board_with(&[["RED"; 4], ["GREEN"; 4]], 10);
        let guess = bot.guess_pegs_colors(None, Board::new(&rows, &coded)).unwrap();
        assert_eq!(guess, ["BLUE"; 4]);

        let rows = board_with(&[["RED"; 4], ["GREEN"; 4], ["BLUE"; 4]], 10);
        let guess = bot.guess_pegs_colors(None, Board::new(&rows, &coded)).unwrap();
        assert_eq!(guess, ["YELLOW"; 4]);
    }

    #[test]
    fn skips_solid_rows_in_any_position() {
        let coded = Row::from_colors(&["Green", "Blue", "Yellow", "Red"]).unwrap();
        let rows = board_with(&[["BLUE"; 4], ["RED"; 4]], 10);
        let mut bot = SmartBot::seeded(1);

        let guess = bot.guess_pegs_colors(None, Board::new(&rows, &coded)).unwrap();
        assert_eq!(guess, ["GREEN"; 4]);
    }

    #[test]
    fn falls_back_to_untried_arrangement_of_secret() {
        let secret = ["GREEN", "BLUE", "YELLOW", "RED"];
        let coded = Row::from_colors(&secret).unwrap();
        let solids = [["RED"; 4], ["GREEN"; 4], ["BLUE"; 4], ["YELLOW"; 4]];
        let mut played = solids.to_vec();
        let mut bot = SmartBot::seeded(9);

        // 24 distinct arrangements of four different colors, none repeated
        for _ in 0..24 {
            let rows = board_with(&played, 30);
            let guess = bot.guess_pegs_colors(None, Board::new(&rows, &coded)).unwrap();

            let mut sorted_guess = guess;
            let mut sorted_secret = secret;
            sorted_guess.sort_unstable();
            sorted_secret.sort_unstable();
            assert_eq!(sorted_guess, sorted_secret);
            assert!(!played.contains(&guess));
            played.push(guess);
        }
    }

    #[test]
    fn fallback_with_everything_tried_returns_secret() {
        let coded = Row::from_colors(&["Red", "Red", "Red", "Blue"]).unwrap();
        let played = [
            ["RED"; 4],
            ["GREEN"; 4],
            ["BLUE"; 4],
            ["YELLOW"; 4],
            ["BLUE", "RED", "RED", "RED"],
            ["RED", "BLUE", "RED", "RED"],
            ["RED", "RED", "BLUE", "RED"],
            ["RED", "RED", "RED", "BLUE"],
        ];
        let rows = board_with(&played, 10);
        let mut bot = SmartBot::seeded(2);

        let guess = bot.guess_pegs_colors(None, Board::new(&rows, &coded)).unwrap();
        assert_eq!(guess, ["RED", "RED", "RED", "BLUE"]);
    }

    #[test]
    fn fallback_without_secret_is_invalid() {
        // An unset secret holds only empty slots, which are not a valid guess
        let rows = board_with(&[["RED"; 4], ["GREEN"; 4], ["BLUE"; 4], ["YELLOW"; 4]], 10);
        let coded = Row::new();
        let mut bot = SmartBot::seeded(2);

        assert_eq!(
            bot.guess_pegs_colors(None, Board::new(&rows, &coded)),
            Err(GameError::InvalidPegColor)
        );
    }

    #[test]
    fn code_is_random_and_valid() {
        let rows = board_with(&[], 10);
        let coded = Row::new();
        let mut bot = SmartBot::seeded(5);
        let colors = bot.code_pegs_colors(None, Board::new(&rows, &coded)).unwrap();
        assert!(validate_guess(&colors).is_ok());
    }

    #[test]
    fn arrangements_are_distinct() {
        assert_eq!(arrangements([Peg::Red, Peg::Green, Peg::Blue, Peg::Yellow]).len(), 24);
        assert_eq!(arrangements([Peg::Red, Peg::Red, Peg::Red, Peg::Blue]).len(), 4);
        assert_eq!(arrangements([Peg::Red, Peg::Red, Peg::Blue, Peg::Blue]).len(), 6);
        assert_eq!(arrangements([Peg::Red; 4]).len(), 1);
    }
}
