//! Game state module - turn sequencing and the win/tie state machine
//!
//! [`GameState`] exclusively owns the board and the turn. All mutation
//! funnels through [`GameState::drop_disc`]; everything else is a query.
//! One instance is one game session - restarting means constructing a
//! fresh state.

use tui_connect4_types::{
    Cell, DropError, GameStatus, Placement, Player, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

use crate::Board;

/// Complete game state: board, whose turn it is, and whether the game
/// has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Player,
    status: GameStatus,
}

impl GameState {
    /// Create a new game on an empty `width` x `height` board.
    /// Player 1 moves first.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            board: Board::new(width, height),
            current: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// The player whose move it is. Once the game ends this stays on the
    /// player who made the final move (the winner, when there is one).
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has been won or tied.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at (row, col), for rendering. `None` if out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Columns that can still accept a disc. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop a disc into `column` for the current player.
    ///
    /// On success the disc settles on the lowest empty row and the game
    /// advances:
    ///
    /// 1. If the placement completes four-in-a-row for the mover, the
    ///    game is won. The turn does not switch.
    /// 2. Otherwise, if the board is now full, the game is tied. Checked
    ///    strictly after the win check: a winning move on the final cell
    ///    is a win, not a tie.
    /// 3. Otherwise the turn passes to the other player.
    ///
    /// Fails with [`DropError::GameAlreadyOver`] once the game has ended,
    /// or with the board's own rejection for an out-of-range or full
    /// column. A rejected drop leaves board and turn untouched.
    pub fn drop_disc(&mut self, column: usize) -> Result<Placement, DropError> {
        if self.status.is_terminal() {
            return Err(DropError::GameAlreadyOver);
        }

        let row = self.board.drop_disc(column, self.current)?;

        // Only the mover's color can have gained a line.
        if self.board.has_four_in_a_row(self.current) {
            self.status = GameStatus::Won(self.current);
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
        } else {
            self.current = self.current.other();
        }

        Ok(Placement {
            row,
            column,
            status: self.status,
        })
    }
}

impl Default for GameState {
    /// The standard 7x6 game.
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
