//! Simple interactive CLI mode
//!
//! Text-based game without TUI: menus on stdin, the board printed to stdout.

use super::turn::{Role, TurnAborted, TurnDriver, TurnOutcome, play_match, split_colors};
use crate::core::GameError;
use crate::game::{DEFAULT_AMOUNT_OF_ROWS, Game, GameConfig, Gamemode, MAX_ROUNDS, MIN_ROUNDS};
use crate::output::display::{
    print_board, print_points, print_rules, print_turn_result, print_winner,
};
use crate::output::formatters::input_error_hint;
use crate::player::Seat;
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::info;

/// Pause after every bot guess so the board can be followed
const BOT_GUESS_DELAY: Duration = Duration::from_millis(500);

/// Settings taken from the command line
///
/// A missing gamemode or amount of rounds is asked for interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOptions {
    pub gamemode: Option<Gamemode>,
    pub rounds: Option<u32>,
    pub amount_of_rows: usize,
    pub seed: Option<u64>,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            gamemode: None,
            rounds: None,
            amount_of_rows: DEFAULT_AMOUNT_OF_ROWS,
            seed: None,
        }
    }
}

impl PlayOptions {
    /// Game configuration for a chosen gamemode and amount of rounds
    #[must_use]
    pub const fn game_config(&self, gamemode: Gamemode, rounds: u32) -> GameConfig {
        GameConfig::new(gamemode, rounds)
            .with_rows(self.amount_of_rows)
            .with_seed(self.seed)
    }
}

/// Run the simple interactive CLI mode
///
/// Typing `quit` at any prompt ends the program.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing to the
/// terminal.
pub fn run_simple(options: &PlayOptions) -> Result<()> {
    match play_simple(options) {
        Err(err) if err.is::<TurnAborted>() => {
            info!("player quit");
            println!("\n👋 Thanks for playing!\n");
            Ok(())
        }
        other => other,
    }
}

fn play_simple(options: &PlayOptions) -> Result<()> {
    clear_screen()?;
    print_rules();
    get_user_input("\nPress enter to continue")?;

    let mut preset = (options.gamemode, options.rounds);
    loop {
        let gamemode = match preset.0.take() {
            Some(gamemode) => gamemode,
            None => pick_gamemode()?,
        };
        let rounds = match preset.1.take() {
            Some(rounds) => rounds,
            None => pick_amount_of_rounds()?,
        };

        let mut game = Game::new(options.game_config(gamemode, rounds))?;
        play_match(&mut game, &mut SimpleDriver::default())?;

        clear_screen()?;
        print_points(&game);
        println!();
        print_winner(&game);
        println!();

        let answer = get_user_input("If you want to play again, type \"yes\"")?;
        if !answer.eq_ignore_ascii_case("yes") {
            return Ok(());
        }
    }
}

/// Drives turns through stdin and stdout
#[derive(Debug, Default)]
struct SimpleDriver {
    /// The last input was rejected and its hint is on screen
    retrying: bool,
}

impl SimpleDriver {
    /// Whether the next prompt starts over instead of following a hint
    fn starts_new_prompt(&mut self) -> bool {
        !std::mem::take(&mut self.retrying)
    }
}

impl TurnDriver for SimpleDriver {
    fn colors_for(&mut self, game: &Game, seat: Seat, role: Role) -> Result<Vec<String>> {
        if self.starts_new_prompt() {
            let player = game.player(seat);
            match role {
                Role::Coder => println!("{player}\nSet the color code:\n"),
                Role::Breaker => {
                    clear_screen()?;
                    print_board(game);
                    println!("\n{player}\nTry to guess the color code:\n");
                }
            }
        }
        Ok(split_colors(&get_user_input("Colors")?))
    }

    fn input_rejected(&mut self, _game: &Game, _seat: Seat, error: &GameError) -> Result<()> {
        println!("{}\n", input_error_hint(error));
        self.retrying = true;
        Ok(())
    }

    fn turn_started(&mut self, _game: &Game, _coder: Seat, _breaker: Seat) -> Result<()> {
        clear_screen()
    }

    fn guess_played(&mut self, game: &Game, seat: Seat, _index: usize) -> Result<()> {
        if !game.player(seat).is_human() {
            clear_screen()?;
            print_board(game);
            thread::sleep(BOT_GUESS_DELAY);
        }
        Ok(())
    }

    fn turn_finished(&mut self, game: &Game, outcome: &TurnOutcome) -> Result<()> {
        clear_screen()?;
        print_board(game);
        println!();
        print_turn_result(game, outcome);
        print_points(game);
        get_user_input("\nPress enter to continue")?;
        Ok(())
    }
}

/// Ask for a gamemode until a valid menu number is given
fn pick_gamemode() -> Result<Gamemode> {
    clear_screen()?;
    print_gamemode_menu();
    loop {
        let input = get_user_input("Choose a game mode")?;
        let error = match input.parse::<u32>() {
            Ok(number) => match Gamemode::from_number(number) {
                Ok(gamemode) => return Ok(gamemode),
                Err(_) => "Gamemode number has to be either 1, 2 or 3",
            },
            Err(_) => "Gamemode has to be a number",
        };
        clear_screen()?;
        print_gamemode_menu();
        println!("{error}\n");
    }
}

fn print_gamemode_menu() {
    for gamemode in Gamemode::ALL {
        println!("{} -> {}", gamemode.number(), gamemode.description());
    }
    println!("\n");
}

/// Ask for the amount of rounds until a number in range is given
fn pick_amount_of_rounds() -> Result<u32> {
    clear_screen()?;
    loop {
        let input = get_user_input("Set an amount of rounds")?;
        let error = match input.parse::<u32>() {
            Ok(rounds) if (MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) => return Ok(rounds),
            Ok(_) => format!("Amount of rounds has to be between {MIN_ROUNDS} and {MAX_ROUNDS}"),
            Err(_) => "Amount of rounds has to be a number".to_string(),
        };
        clear_screen()?;
        println!("{error}\n");
    }
}

fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

/// Get user input with a prompt
///
/// `quit` (or end of input) aborts the game.
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if read == 0 || is_quit(input) {
        return Err(TurnAborted.into());
    }
    Ok(input.to_string())
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit")
}
