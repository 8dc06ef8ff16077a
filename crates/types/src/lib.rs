//! Shared types for the Connect Four workspace.
//!
//! This crate defines the vocabulary used by every other crate: players,
//! cells, game status, move results, and the error kinds a move can fail
//! with. All types are plain data with no I/O, usable from the game core,
//! the terminal view, and tests alike.
//!
//! # Board Dimensions
//!
//! The standard Connect Four board:
//!
//! - **Width**: 7 columns (indexed 0-6)
//! - **Height**: 6 rows (indexed 0-5, row 0 at the top)
//! - **Win length**: 4 contiguous same-player discs
//!
//! Boards are sized at construction; these constants are only the
//! defaults.
//!
//! # Examples
//!
//! ```
//! use tui_connect4_types::{GameStatus, Player};
//!
//! let p = Player::One;
//! assert_eq!(p.other(), Player::Two);
//! assert_eq!(p.number(), 1);
//!
//! let status = GameStatus::Won(Player::Two);
//! assert!(status.is_terminal());
//! assert_eq!(status.winner(), Some(Player::Two));
//! ```

use std::fmt;

use thiserror::Error;

/// Default board width in columns (7)
pub const DEFAULT_WIDTH: usize = 7;

/// Default board height in rows (6)
pub const DEFAULT_HEIGHT: usize = 6;

/// Number of contiguous discs that wins the game (4)
pub const WIN_LENGTH: usize = 4;

/// One of the two players. `Player::One` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player.
    ///
    /// ```
    /// use tui_connect4_types::Player;
    ///
    /// assert_eq!(Player::One.other(), Player::Two);
    /// assert_eq!(Player::Two.other(), Player::One);
    /// ```
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as shown to users (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Display name ("Player 1" / "Player 2").
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single board cell: empty, or occupied by a player's disc.
pub type Cell = Option<Player>;

/// Where the game stands.
///
/// Starts `InProgress` and transitions to `Won` or `Tied` exactly once.
/// Both of those are terminal: no further moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    /// True once the game has ended (won or tied).
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning player, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// The result of an accepted move: where the disc landed and the game
/// status after the placement, so a presentation layer can render without
/// re-querying the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Row the disc landed in (0 = top).
    pub row: usize,
    /// Column the disc was dropped into.
    pub column: usize,
    /// Game status after this placement.
    pub status: GameStatus,
}

/// Why a move was rejected. A rejected move never changes board or turn
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DropError {
    /// Column index outside `[0, width)`. A UI that respects the board
    /// width never produces this.
    #[error("column {column} is out of range for a board {width} columns wide")]
    InvalidColumn { column: usize, width: usize },

    /// The chosen column has no empty cell left. Expected during play;
    /// the caller should pick another column.
    #[error("column {0} is full")]
    ColumnFull(usize),

    /// The game has already been won or tied.
    #[error("the game is already over")]
    GameAlreadyOver,
}
