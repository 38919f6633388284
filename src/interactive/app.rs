//! TUI application state and logic

use crate::commands::{
    PlayOptions, Role, TurnAborted, TurnDriver, TurnOutcome, play_match, split_colors,
};
use crate::core::{Feedback, GameError};
use crate::game::{Game, Gamemode, MAX_ROUNDS, MIN_ROUNDS};
use crate::output::formatters::{format_feedback, format_turn_result, format_winner, input_error_hint};
use crate::player::Seat;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::thread;
use std::time::Duration;
use tracing::info;

/// Pause after every bot guess so the board can be followed
const BOT_GUESS_DELAY: Duration = Duration::from_millis(500);

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 8;

/// Application state
pub struct App {
    pub options: PlayOptions,
    pub screen: Screen,
    pub prompt: String,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Show the secret row on the board
    pub reveal_code: bool,
    pub turns_played: usize,
}

/// What the main panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Rules,
    GamemodeMenu,
    Rounds,
    Playing,
    MatchOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a key press asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Submit(String),
    Quit,
}

impl App {
    #[must_use]
    pub fn new(options: PlayOptions) -> Self {
        Self {
            options,
            screen: Screen::Rules,
            prompt: "Press Enter to continue".to_string(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Type colors like 'red green blue yellow'.".to_string(),
                style: MessageStyle::Info,
            }],
            reveal_code: false,
            turns_played: 0,
        }
    }

    /// Update the input line for a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                KeyAction::None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                KeyAction::None
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input_buffer);
                let input = input.trim();
                if input.eq_ignore_ascii_case("quit") {
                    KeyAction::Quit
                } else {
                    KeyAction::Submit(input.to_string())
                }
            }
            _ => KeyAction::None,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Parse a gamemode menu answer, logging what was wrong with it
    pub fn choose_gamemode(&mut self, input: &str) -> Option<Gamemode> {
        let Ok(number) = input.parse::<u32>() else {
            self.add_message("Gamemode has to be a number", MessageStyle::Error);
            return None;
        };
        if let Ok(gamemode) = Gamemode::from_number(number) {
            Some(gamemode)
        } else {
            self.add_message("Gamemode number has to be either 1, 2 or 3", MessageStyle::Error);
            None
        }
    }

    /// Parse an amount of rounds, logging what was wrong with it
    pub fn choose_rounds(&mut self, input: &str) -> Option<u32> {
        match input.parse::<u32>() {
            Ok(rounds) if (MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) => Some(rounds),
            Ok(_) => {
                self.add_message(
                    &format!("Amount of rounds has to be between {MIN_ROUNDS} and {MAX_ROUNDS}"),
                    MessageStyle::Error,
                );
                None
            }
            Err(_) => {
                self.add_message("Amount of rounds has to be a number", MessageStyle::Error);
                None
            }
        }
    }
}

/// Turn driver reading from the keyboard and drawing with ratatui
struct TuiDriver<'t, B: ratatui::backend::Backend> {
    terminal: &'t mut Terminal<B>,
    app: App,
}

impl<B: ratatui::backend::Backend> TuiDriver<'_, B> {
    fn draw(&mut self, game: Option<&Game>) -> Result<()> {
        let app = &self.app;
        self.terminal
            .draw(|f| super::rendering::ui(f, app, game))?;
        Ok(())
    }

    /// Redraw until a line is submitted
    fn read_line(&mut self, game: Option<&Game>) -> Result<String> {
        loop {
            self.draw(game)?;
            if let Event::Key(key) = event::read()? {
                match self.app.handle_key(key) {
                    KeyAction::Submit(line) => return Ok(line),
                    KeyAction::Quit => return Err(TurnAborted.into()),
                    KeyAction::None => {}
                }
            }
        }
    }

    fn wait_for_enter(&mut self, game: Option<&Game>) -> Result<()> {
        self.app.prompt = "Press Enter to continue".to_string();
        self.read_line(game)?;
        Ok(())
    }

    fn pick_gamemode(&mut self) -> Result<Gamemode> {
        self.app.screen = Screen::GamemodeMenu;
        self.app.prompt = "Choose a game mode (1-3)".to_string();
        loop {
            let input = self.read_line(None)?;
            if let Some(gamemode) = self.app.choose_gamemode(&input) {
                return Ok(gamemode);
            }
        }
    }

    fn pick_amount_of_rounds(&mut self) -> Result<u32> {
        self.app.screen = Screen::Rounds;
        self.app.prompt = format!("Set an amount of rounds ({MIN_ROUNDS}-{MAX_ROUNDS})");
        loop {
            let input = self.read_line(None)?;
            if let Some(rounds) = self.app.choose_rounds(&input) {
                return Ok(rounds);
            }
        }
    }
}

impl<B: ratatui::backend::Backend> TurnDriver for TuiDriver<'_, B> {
    fn colors_for(&mut self, game: &Game, seat: Seat, role: Role) -> Result<Vec<String>> {
        let player = game.player(seat);
        self.app.prompt = match role {
            Role::Coder => format!("{player}: set the color code"),
            Role::Breaker => format!("{player}: try to guess the color code"),
        };
        Ok(split_colors(&self.read_line(Some(game))?))
    }

    fn input_rejected(&mut self, _game: &Game, _seat: Seat, error: &GameError) -> Result<()> {
        self.app.add_message(&input_error_hint(error), MessageStyle::Error);
        Ok(())
    }

    fn turn_started(&mut self, game: &Game, coder: Seat, breaker: Seat) -> Result<()> {
        self.app.screen = Screen::Playing;
        self.app.reveal_code = false;
        self.app.add_message(
            &format!("{} codes, {} breaks", game.player(coder), game.player(breaker)),
            MessageStyle::Info,
        );
        Ok(())
    }

    fn guess_played(&mut self, game: &Game, seat: Seat, index: usize) -> Result<()> {
        let feedback = Feedback::from_key_pegs(game.rows_list()[index].key_pegs());
        self.app.add_message(
            &format!("Row {}: {}", index + 1, format_feedback(feedback)),
            MessageStyle::Info,
        );

        if !game.player(seat).is_human() {
            self.draw(Some(game))?;
            thread::sleep(BOT_GUESS_DELAY);
        }
        Ok(())
    }

    fn turn_finished(&mut self, game: &Game, outcome: &TurnOutcome) -> Result<()> {
        self.app.turns_played += 1;
        self.app.reveal_code = true;
        let style = if outcome.is_guessed() {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.app.add_message(&format_turn_result(game, outcome), style);
        self.wait_for_enter(Some(game))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Err(err) if err.is::<TurnAborted>() => {
            info!("player quit");
            Ok(())
        }
        other => other,
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: App) -> Result<()> {
    let mut driver = TuiDriver { terminal, app };
    driver.wait_for_enter(None)?;

    let mut preset = (driver.app.options.gamemode, driver.app.options.rounds);
    loop {
        let gamemode = match preset.0.take() {
            Some(gamemode) => gamemode,
            None => driver.pick_gamemode()?,
        };
        let rounds = match preset.1.take() {
            Some(rounds) => rounds,
            None => driver.pick_amount_of_rounds()?,
        };

        let mut game = Game::new(driver.app.options.game_config(gamemode, rounds))?;
        driver.app.turns_played = 0;
        play_match(&mut game, &mut driver)?;

        driver.app.screen = Screen::MatchOver;
        driver
            .app
            .add_message(&format_winner(&game), MessageStyle::Success);
        driver.app.prompt = "If you want to play again, type \"yes\"".to_string();
        let answer = driver.read_line(Some(&game))?;
        if !answer.eq_ignore_ascii_case("yes") {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> KeyAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_line(app: &mut App, text: &str) -> KeyAction {
        for c in text.chars() {
            assert_eq!(press(app, KeyCode::Char(c)), KeyAction::None);
        }
        press(app, KeyCode::Enter)
    }

    #[test]
    fn typed_line_is_submitted() {
        let mut app = App::new(PlayOptions::default());
        assert_eq!(
            type_line(&mut app, "red blue "),
            KeyAction::Submit("red blue".to_string())
        );
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut app = App::new(PlayOptions::default());
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "r");
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = App::new(PlayOptions::default());
        assert_eq!(press(&mut app, KeyCode::Esc), KeyAction::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(type_line(&mut app, "quit"), KeyAction::Quit);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(PlayOptions::default());
        let mut key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(app.handle_key(key), KeyAction::None);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn gamemode_menu_answers() {
        let mut app = App::new(PlayOptions::default());
        assert_eq!(app.choose_gamemode("3"), Some(Gamemode::PveSmart));
        assert_eq!(app.choose_gamemode("4"), None);
        assert_eq!(app.choose_gamemode("pvp"), None);
        let errors = app
            .messages
            .iter()
            .filter(|message| message.style == MessageStyle::Error)
            .count();
        assert_eq!(errors, 2);
    }

    #[test]
    fn rounds_answers() {
        let mut app = App::new(PlayOptions::default());
        assert_eq!(app.choose_rounds("10"), Some(10));
        assert_eq!(app.choose_rounds("0"), None);
        assert_eq!(app.choose_rounds("eleven"), None);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = App::new(PlayOptions::default());
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().map(|m| m.text.as_str()), Some("message 19"));
    }
}
