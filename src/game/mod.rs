//! Game state: the secret code, the board of attempts, the players and their score
//!
//! The game does not run turns by itself. A presentation layer asks it for the
//! players' codes and guesses, places them on the board and asks for points at
//! the end of each turn (see `commands::turn`).

mod gamemode;

pub use gamemode::Gamemode;

use crate::core::{Feedback, GameError, Result, Row};
use crate::player::{Board, Colors, Player, RandomBot, Seat, SmartBot, StrategyType};

/// Fewest rounds a match can have
pub const MIN_ROUNDS: u32 = 1;

/// Most rounds a match can have
pub const MAX_ROUNDS: u32 = 10;

/// Guess attempts per turn unless configured otherwise
pub const DEFAULT_AMOUNT_OF_ROWS: usize = 10;

/// Configuration for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub gamemode: Gamemode,
    pub rounds: u32,
    /// Guess attempts per turn
    pub amount_of_rows: usize,
    /// Seed for the bot's random choices; `None` seeds from the system
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(gamemode: Gamemode, rounds: u32) -> Self {
        Self {
            gamemode,
            rounds,
            amount_of_rows: DEFAULT_AMOUNT_OF_ROWS,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_rows(mut self, amount_of_rows: usize) -> Self {
        self.amount_of_rows = amount_of_rows;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// A Mastermind match between two players
#[derive(Debug)]
pub struct Game {
    gamemode: Gamemode,
    rounds: u32,
    amount_of_rows: usize,
    coded_row: Row,
    rows_list: Vec<Row>,
    players: [Player; 2],
}

impl Game {
    /// Set up a match with an empty board
    ///
    /// # Errors
    /// - `GameError::InvalidRounds` if `rounds` is outside `1..=10`
    /// - `GameError::InvalidAmountOfRows` if the board would have no rows
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{Game, GameConfig, Gamemode};
    ///
    /// let game = Game::new(GameConfig::new(Gamemode::Pve, 3)).unwrap();
    /// assert_eq!(game.rows_list().len(), 10);
    /// assert_eq!(game.players_list()[1].name(), "Bot");
    ///
    /// assert!(Game::new(GameConfig::new(Gamemode::Pvp, 0)).is_err());
    /// ```
    pub fn new(config: GameConfig) -> Result<Self> {
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&config.rounds) {
            return Err(GameError::InvalidRounds(config.rounds));
        }
        if config.amount_of_rows == 0 {
            return Err(GameError::InvalidAmountOfRows(config.amount_of_rows));
        }

        let mut game = Self {
            gamemode: config.gamemode,
            rounds: config.rounds,
            amount_of_rows: config.amount_of_rows,
            coded_row: Row::new(),
            rows_list: Vec::new(),
            players: create_players(config.gamemode, config.seed),
        };
        game.new_board();
        Ok(game)
    }

    #[inline]
    #[must_use]
    pub const fn gamemode(&self) -> Gamemode {
        self.gamemode
    }

    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    #[inline]
    #[must_use]
    pub const fn amount_of_rows(&self) -> usize {
        self.amount_of_rows
    }

    /// Attempt rows, first attempt at index 0
    #[inline]
    #[must_use]
    pub fn rows_list(&self) -> &[Row] {
        &self.rows_list
    }

    /// The secret row of the current turn
    #[inline]
    #[must_use]
    pub const fn coded_row(&self) -> &Row {
        &self.coded_row
    }

    #[inline]
    #[must_use]
    pub const fn players_list(&self) -> &[Player; 2] {
        &self.players
    }

    #[inline]
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Rows in display order: last attempt on top, first attempt at the bottom
    pub fn board(&self) -> impl Iterator<Item = &Row> {
        self.rows_list.iter().rev()
    }

    /// Empty the board for a new turn
    ///
    /// Points are kept and the secret row stays as it is until a new code is set.
    pub fn new_board(&mut self) {
        self.rows_list = vec![Row::new(); self.amount_of_rows];
    }

    /// Install the secret code of the current turn
    ///
    /// # Errors
    /// Returns a validation error if `colors` is not a valid code.
    pub fn set_code<S: AsRef<str>>(&mut self, colors: &[S]) -> Result<()> {
        self.coded_row.set_pegs(Some(colors))
    }

    /// Place a guess in the row at `index` and score it against the secret
    ///
    /// # Errors
    /// - `GameError::InvalidRowIndex` if the board has no such row
    /// - a validation error if `colors` is not a valid guess
    pub fn play_row<S: AsRef<str>>(&mut self, index: usize, colors: &[S]) -> Result<Feedback> {
        let row = self
            .rows_list
            .get_mut(index)
            .ok_or(GameError::InvalidRowIndex(index))?;
        row.set_pegs(Some(colors))?;
        row.compare_pegs(&self.coded_row);
        Ok(Feedback::from_key_pegs(row.key_pegs()))
    }

    /// Index of the first attempt row nothing has been placed in
    #[must_use]
    pub fn next_empty_row(&self) -> Option<usize> {
        self.rows_list.iter().position(Row::is_empty)
    }

    /// Check if `row` holds exactly the secret code
    #[must_use]
    pub fn is_guessed(&self, row: &Row) -> bool {
        row.pegs() == self.coded_row.pegs()
    }

    /// Ask the player at `seat` for the secret code of a turn
    ///
    /// # Errors
    /// Returns a validation error for bad human input.
    pub fn code_pegs_colors(&mut self, seat: Seat, input: Option<&[&str]>) -> Result<Colors> {
        let board = Board::new(&self.rows_list, &self.coded_row);
        self.players[seat.index()].code_pegs_colors(input, board)
    }

    /// Ask the player at `seat` for their next guess
    ///
    /// # Errors
    /// Returns a validation error for bad human input.
    pub fn guess_pegs_colors(&mut self, seat: Seat, input: Option<&[&str]>) -> Result<Colors> {
        let board = Board::new(&self.rows_list, &self.coded_row);
        self.players[seat.index()].guess_pegs_colors(input, board)
    }

    /// Award the coder of the finished turn and return the points given
    ///
    /// The coder earns one point per attempt the breaker needed, taken from the
    /// last row matching the secret. A code that was never broken earns
    /// `amount_of_rows + 1`.
    pub fn player_give_points(&mut self, seat: Seat) -> u32 {
        let winning_row = self.rows_list.iter().rposition(|row| self.is_guessed(row));

        let attempts = winning_row.map_or(self.amount_of_rows + 1, |index| index + 1);
        let points = u32::try_from(attempts).unwrap_or(u32::MAX);

        self.players[seat.index()].add_points(points);
        points
    }

    /// Player with the most points, or `None` on a tie
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        let [first, second] = &self.players;
        match first.points().cmp(&second.points()) {
            std::cmp::Ordering::Greater => Some(first),
            std::cmp::Ordering::Less => Some(second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

fn create_players(gamemode: Gamemode, seed: Option<u64>) -> [Player; 2] {
    let first = Player::human("Player 1");
    let second = match gamemode {
        Gamemode::Pvp => Player::human("Player 2"),
        Gamemode::Pve => {
            let bot = seed.map_or_else(RandomBot::new, RandomBot::seeded);
            Player::new("Bot", StrategyType::Random(bot))
        }
        Gamemode::PveSmart => {
            let bot = seed.map_or_else(SmartBot::new, SmartBot::seeded);
            Player::new("Bot Smart", StrategyType::Smart(bot))
        }
    };
    [first, second]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp() -> Game {
        Game::new(GameConfig::new(Gamemode::Pvp, 1)).unwrap()
    }

    #[test]
    fn create_game() {
        let game = Game::new(GameConfig::new(Gamemode::Pvp, 2)).unwrap();
        assert_eq!(game.gamemode(), Gamemode::Pvp);
        assert_eq!(game.rounds(), 2);
        assert_eq!(game.amount_of_rows(), DEFAULT_AMOUNT_OF_ROWS);
        assert_eq!(game.rows_list().len(), DEFAULT_AMOUNT_OF_ROWS);
        assert!(game.coded_row().is_empty());
    }

    #[test]
    fn rounds_must_be_in_range() {
        for rounds in [0, 11, 100] {
            assert_eq!(
                Game::new(GameConfig::new(Gamemode::Pve, rounds)).unwrap_err(),
                GameError::InvalidRounds(rounds)
            );
        }
        assert!(Game::new(GameConfig::new(Gamemode::Pve, 1)).is_ok());
        assert!(Game::new(GameConfig::new(Gamemode::Pve, 10)).is_ok());
    }

    #[test]
    fn board_needs_rows() {
        assert_eq!(
            Game::new(GameConfig::new(Gamemode::Pvp, 1).with_rows(0)).unwrap_err(),
            GameError::InvalidAmountOfRows(0)
        );
        let game = Game::new(GameConfig::new(Gamemode::Pvp, 1).with_rows(5)).unwrap();
        assert_eq!(game.rows_list().len(), 5);
    }

    #[test]
    fn players_for_pvp() {
        let game = Game::new(GameConfig::new(Gamemode::Pvp, 3)).unwrap();
        let [first, second] = game.players_list();
        assert!(first.is_human());
        assert!(second.is_human());
        assert_eq!(first.to_string(), "Player 1");
        assert_eq!(second.to_string(), "Player 2");
    }

    #[test]
    fn players_for_pve() {
        let game = Game::new(GameConfig::new(Gamemode::Pve, 3)).unwrap();
        let [first, second] = game.players_list();
        assert!(first.is_human());
        assert!(matches!(second.strategy(), StrategyType::Random(_)));
        assert_eq!(second.name(), "Bot");
    }

    #[test]
    fn players_for_pve_smart() {
        let game = Game::new(GameConfig::new(Gamemode::PveSmart, 3)).unwrap();
        let [first, second] = game.players_list();
        assert!(first.is_human());
        assert!(matches!(second.strategy(), StrategyType::Smart(_)));
        assert_eq!(second.name(), "Bot Smart");
    }

    #[test]
    fn new_board_clears_rows_but_keeps_points_and_code() {
        let mut game = pvp();
        game.set_code(&["Red", "Red", "Red", "Red"]).unwrap();
        game.play_row(0, &["Red", "Red", "Red", "Red"]).unwrap();
        game.player_give_points(Seat::First);

        game.new_board();
        assert!(game.rows_list().iter().all(Row::is_empty));
        assert_eq!(game.player(Seat::First).points(), 1);
        assert_eq!(game.coded_row().colors(), ["RED"; 4]);
    }

    #[test]
    fn give_points_guessed_on_third_row() {
        let mut game = pvp();
        game.set_code(&["Red", "Red", "Red", "Red"]).unwrap();
        game.play_row(2, &["Red", "Red", "Red", "Red"]).unwrap();
        assert_eq!(game.player_give_points(Seat::First), 3);
        assert_eq!(game.player(Seat::First).points(), 3);
    }

    #[test]
    fn give_points_guessed_on_last_row() {
        let mut game = pvp();
        game.set_code(&["Red", "Red", "Red", "Red"]).unwrap();
        let last = game.amount_of_rows() - 1;
        game.play_row(last, &["Red", "Red", "Red", "Red"]).unwrap();
        game.player_give_points(Seat::First);
        assert_eq!(game.player(Seat::First).points(), 10);
    }

    #[test]
    fn give_points_not_guessed() {
        let mut game = pvp();
        game.set_code(&["Red", "Red", "Red", "Red"]).unwrap();
        assert_eq!(game.player_give_points(Seat::First), 11);
        assert_eq!(game.player(Seat::First).points(), 11);
    }

    #[test]
    fn give_points_uses_last_matching_row() {
        let mut game = pvp();
        game.set_code(&["Blue", "Green", "Blue", "Green"]).unwrap();
        game.play_row(1, &["Blue", "Green", "Blue", "Green"]).unwrap();
        game.play_row(4, &["Blue", "Green", "Blue", "Green"]).unwrap();
        assert_eq!(game.player_give_points(Seat::Second), 5);
        assert_eq!(game.player(Seat::First).points(), 0);
    }

    #[test]
    fn winner_has_more_points() {
        let mut game = pvp();
        game.players[0].add_points(10);
        game.players[1].add_points(9);
        assert_eq!(game.winner().map(Player::name), Some("Player 1"));

        game.players[1].add_points(2);
        assert_eq!(game.winner().map(Player::name), Some("Player 2"));
    }

    #[test]
    fn winner_tied() {
        let mut game = pvp();
        assert!(game.winner().is_none());
        game.players[0].add_points(9);
        game.players[1].add_points(9);
        assert!(game.winner().is_none());
    }

    #[test]
    fn is_guessed_true() {
        let mut game = pvp();
        game.play_row(0, &["Red", "Red", "Red", "Red"]).unwrap();
        game.set_code(&["Red", "Red", "Red", "Red"]).unwrap();
        assert!(game.is_guessed(&game.rows_list()[0]));
    }

    #[test]
    fn is_guessed_false() {
        let mut game = pvp();
        game.play_row(0, &["Red", "Red", "Red", "Red"]).unwrap();
        game.set_code(&["Green", "Red", "Red", "Red"]).unwrap();
        assert!(!game.is_guessed(&game.rows_list()[0]));
    }

    #[test]
    fn play_row_installs_feedback() {
        let mut game = pvp();
        game.set_code(&["Red", "Red", "Red", "Blue"]).unwrap();
        let feedback = game.play_row(0, &["Red", "Red", "Blue", "Blue"]).unwrap();
        assert_eq!(feedback.exact(), 3);
        assert_eq!(game.rows_list()[0].key_colors(), ["WHITE", "WHITE", "WHITE", "BLACK"]);
        assert_eq!(game.next_empty_row(), Some(1));
    }

    #[test]
    fn play_row_outside_board() {
        let mut game = pvp();
        assert_eq!(
            game.play_row(10, &["Red", "Red", "Red", "Red"]),
            Err(GameError::InvalidRowIndex(10))
        );
    }

    #[test]
    fn board_lists_last_row_first() {
        let mut game = pvp();
        game.play_row(0, &["Red", "Red", "Red", "Red"]).unwrap();
        let top_down: Vec<&Row> = game.board().collect();
        assert_eq!(top_down.len(), 10);
        assert_eq!(top_down[9].colors(), ["RED"; 4]);
        assert!(top_down[0].is_empty());
    }

    #[test]
    fn smart_bot_opens_with_solid_row() {
        let mut game = Game::new(GameConfig::new(Gamemode::PveSmart, 1).with_seed(Some(4))).unwrap();
        game.set_code(&["Green", "Blue", "Yellow", "Green"]).unwrap();
        let guess = game.guess_pegs_colors(Seat::Second, None).unwrap();
        assert_eq!(guess, ["RED"; 4]);
    }

    #[test]
    fn human_guess_goes_through_validation() {
        let mut game = pvp();
        assert_eq!(
            game.guess_pegs_colors(Seat::First, Some(&["red", "blue", "pink", "red"])),
            Err(GameError::InvalidPegColor)
        );
        assert_eq!(
            game.code_pegs_colors(Seat::Second, Some(&["red", "blue", "green", "red"])),
            Ok(["RED", "BLUE", "GREEN", "RED"])
        );
    }

    #[test]
    fn seeded_bots_repeat_their_codes() {
        let config = GameConfig::new(Gamemode::Pve, 1).with_seed(Some(17));
        let mut first = Game::new(config).unwrap();
        let mut second = Game::new(config).unwrap();
        assert_eq!(
            first.code_pegs_colors(Seat::Second, None),
            second.code_pegs_colors(Seat::Second, None)
        );
    }
}
