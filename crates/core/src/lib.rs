//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the Connect Four rules and state management.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: The same move sequence always produces the same game
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: runtime-sized grid with the gravity drop rule and
//!   four-direction win detection
//! - [`game_state`]: turn sequencing and the win/tie state machine
//!
//! # Game Rules
//!
//! Two players alternate turns, dropping a disc into one of the columns.
//! The disc falls to the lowest empty cell of that column. The first
//! player to line up four of their discs - horizontally, vertically, or
//! along either diagonal - wins. If the board fills with no line of four,
//! the game is tied. Once won or tied, no further moves are accepted.
//!
//! # Example
//!
//! ```
//! use tui_connect4_core::GameState;
//! use tui_connect4_types::{GameStatus, Player};
//!
//! // A standard 7x6 game; Player 1 moves first.
//! let mut game = GameState::default();
//! assert_eq!(game.current_player(), Player::One);
//!
//! // Discs land at the bottom of their column.
//! let placement = game.drop_disc(3).unwrap();
//! assert_eq!(placement.row, 5);
//! assert_eq!(placement.status, GameStatus::InProgress);
//!
//! // The turn has passed to Player 2.
//! assert_eq!(game.current_player(), Player::Two);
//! ```

pub mod board;
pub mod game_state;

pub use tui_connect4_types as types;

// Re-export the two core types for convenience
pub use board::Board;
pub use game_state::GameState;
