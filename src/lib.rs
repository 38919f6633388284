//! Mastermind
//!
//! The code-breaking board game for two players, with a random bot and a smart
//! bot to play against.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::Row;
//!
//! let secret = Row::from_colors(&["red", "blue", "yellow", "green"]).unwrap();
//! let mut guess = Row::from_colors(&["red", "yellow", "blue", "green"]).unwrap();
//!
//! guess.compare_pegs(&secret);
//! assert_eq!(guess.key_colors(), ["WHITE", "WHITE", "CYAN", "CYAN"]);
//! ```

// Core domain types
pub mod core;

// Players and strategies
pub mod player;

// Game state and scoring
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
