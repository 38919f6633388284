//! Turn orchestration
//!
//! Runs the coder/breaker cycle against a [`Game`]. Where the colors of a human
//! player come from, and what the players see, is up to a [`TurnDriver`].

use crate::core::GameError;
use crate::game::Game;
use crate::player::{Colors, Seat};
use anyhow::{Result, bail};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Raised by a driver when the player asked to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("game aborted by the player")]
pub struct TurnAborted;

/// What a player is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Sets the secret code
    Coder,
    /// Tries to guess it
    Breaker,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coder => f.write_str("coder"),
            Self::Breaker => f.write_str("breaker"),
        }
    }
}

/// Result of one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub coder: Seat,
    pub breaker: Seat,
    /// Index of the row that matched the secret, if any
    pub guessed_at: Option<usize>,
    /// Rows the breaker filled
    pub attempts: usize,
    /// Points awarded to the coder
    pub points: u32,
}

impl TurnOutcome {
    #[inline]
    #[must_use]
    pub const fn is_guessed(&self) -> bool {
        self.guessed_at.is_some()
    }
}

/// Presentation side of a turn
///
/// Only `colors_for` is required. It is called for human players only; bots are
/// asked through their strategy.
pub trait TurnDriver {
    /// Colors typed in by the human at `seat`
    ///
    /// # Errors
    /// Returns [`TurnAborted`] when the player quits, or an I/O error.
    fn colors_for(&mut self, game: &Game, seat: Seat, role: Role) -> Result<Vec<String>>;

    /// Input from `colors_for` was rejected, the player will be asked again
    ///
    /// # Errors
    /// Returns an error if the rejection cannot be shown.
    fn input_rejected(&mut self, _game: &Game, _seat: Seat, _error: &GameError) -> Result<()> {
        Ok(())
    }

    /// A fresh board is ready and nobody has coded yet
    ///
    /// # Errors
    /// Returns an error if the board cannot be shown.
    fn turn_started(&mut self, _game: &Game, _coder: Seat, _breaker: Seat) -> Result<()> {
        Ok(())
    }

    /// The breaker filled the row at `index`
    ///
    /// # Errors
    /// Returns an error if the board cannot be shown.
    fn guess_played(&mut self, _game: &Game, _seat: Seat, _index: usize) -> Result<()> {
        Ok(())
    }

    /// Points for the turn have been given
    ///
    /// # Errors
    /// Returns an error if the result cannot be shown, or [`TurnAborted`].
    fn turn_finished(&mut self, _game: &Game, _outcome: &TurnOutcome) -> Result<()> {
        Ok(())
    }
}

/// Play one turn: `coder` sets a code, `breaker` gets one try per row
///
/// Stops at the first row matching the secret and awards the coder.
///
/// # Errors
/// Returns an error if both seats are the same, if the driver fails (including
/// [`TurnAborted`]) or if a bot produces an invalid code or guess.
pub fn play_turn<D: TurnDriver + ?Sized>(
    game: &mut Game,
    coder: Seat,
    breaker: Seat,
    driver: &mut D,
) -> Result<TurnOutcome> {
    if coder == breaker {
        bail!("{} cannot break their own code", game.player(coder));
    }

    game.new_board();
    driver.turn_started(game, coder, breaker)?;

    let code = ask_colors(game, coder, Role::Coder, driver)?;
    game.set_code(&code)?;
    info!(
        coder = game.player(coder).name(),
        breaker = game.player(breaker).name(),
        "turn started"
    );

    let mut guessed_at = None;
    let mut attempts = 0;
    for index in 0..game.amount_of_rows() {
        let guess = ask_colors(game, breaker, Role::Breaker, driver)?;
        let feedback = game.play_row(index, &guess)?;
        attempts += 1;
        debug!(
            row = index,
            guess = ?guess,
            exact = feedback.exact(),
            color_only = feedback.color_only(),
            "guess played"
        );
        driver.guess_played(game, breaker, index)?;

        if game.is_guessed(&game.rows_list()[index]) {
            guessed_at = Some(index);
            break;
        }
    }

    let points = game.player_give_points(coder);
    let outcome = TurnOutcome {
        coder,
        breaker,
        guessed_at,
        attempts,
        points,
    };
    info!(
        coder = game.player(coder).name(),
        guessed = outcome.is_guessed(),
        attempts,
        points,
        "turn finished"
    );
    driver.turn_finished(game, &outcome)?;
    Ok(outcome)
}

/// Play every round of the match
///
/// Each round both players code once, player 1 first.
///
/// # Errors
/// Propagates the first error of [`play_turn`].
pub fn play_match<D: TurnDriver + ?Sized>(game: &mut Game, driver: &mut D) -> Result<Vec<TurnOutcome>> {
    info!(
        gamemode = %game.gamemode(),
        rounds = game.rounds(),
        rows = game.amount_of_rows(),
        "match started"
    );

    let mut outcomes = Vec::with_capacity(game.rounds() as usize * Seat::BOTH.len());
    for round in 1..=game.rounds() {
        debug!(round, "round started");
        for coder in Seat::BOTH {
            outcomes.push(play_turn(game, coder, coder.other(), driver)?);
        }
    }

    info!(
        winner = game.winner().map_or("none", |player| player.name()),
        "match finished"
    );
    Ok(outcomes)
}

/// Split typed-in colors on whitespace and commas
#[must_use]
pub fn split_colors(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn ask_colors<D: TurnDriver + ?Sized>(
    game: &mut Game,
    seat: Seat,
    role: Role,
    driver: &mut D,
) -> Result<Colors> {
    if !game.player(seat).is_human() {
        let colors = match role {
            Role::Coder => game.code_pegs_colors(seat, None)?,
            Role::Breaker => game.guess_pegs_colors(seat, None)?,
        };
        return Ok(colors);
    }

    loop {
        let input = driver.colors_for(game, seat, role)?;
        let input: Vec<&str> = input.iter().map(String::as_str).collect();
        let result = match role {
            Role::Coder => game.code_pegs_colors(seat, Some(input.as_slice())),
            Role::Breaker => game.guess_pegs_colors(seat, Some(input.as_slice())),
        };

        match result {
            Ok(colors) => return Ok(colors),
            Err(err) => {
                debug!(%role, error = %err, "input rejected");
                driver.input_rejected(game, seat, &err)?;
            }
        }
    }
}
