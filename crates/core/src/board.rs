//! Board module - manages the game grid
//!
//! The board is a HEIGHT x WIDTH grid where each cell is empty or holds a
//! player's disc. Dimensions are fixed at construction (7x6 by default).
//! Uses flat row-major storage for better cache locality.
//! Coordinates: (row, col) where row 0 is the top and row HEIGHT-1 the
//! bottom; dropped discs settle on the lowest empty row of their column.

use tui_connect4_types::{Cell, DropError, Player, WIN_LENGTH};

/// The four scan directions for win detection, as (row, col) steps:
/// right, down, down-right, down-left. Left/up runs are covered by the
/// same runs scanned from their other end.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The game grid. Owns nothing but cells; turn order and game lifecycle
/// live in [`crate::GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Dimensions must be positive. Anything at least 4x4 makes for a
    /// winnable game; smaller boards are legal but can only tie.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Board width in columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (row, col). Returns `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// True if the column has no empty cell left (or is out of range).
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.cells[col].is_some()
    }

    /// Lowest empty row of a column, scanning from the bottom upward.
    /// `None` when the column is full or out of range.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_none())
    }

    /// Drop a disc into a column; it settles on the lowest empty row.
    /// Returns the row it landed in. A rejected drop changes nothing.
    pub fn drop_disc(&mut self, col: usize, player: Player) -> Result<usize, DropError> {
        if col >= self.width {
            return Err(DropError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }

        let row = self
            .lowest_empty_row(col)
            .ok_or(DropError::ColumnFull(col))?;
        self.cells[row * self.width + col] = Some(player);
        Ok(row)
    }

    /// True when every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Whole-board win scan for one player's color.
    ///
    /// For every cell and each of the four directions, the fixed-length
    /// run of 4 cells starting there wins iff all 4 are in bounds and all
    /// 4 hold `player`'s discs. O(width * height) with constant work per
    /// cell; the board is small and this runs once per accepted move.
    pub fn has_four_in_a_row(&self, player: Player) -> bool {
        for row in 0..self.height {
            for col in 0..self.width {
                for (dr, dc) in DIRECTIONS {
                    let win = (0..WIN_LENGTH).all(|step| {
                        let r = row as isize + dr * step as isize;
                        let c = col as isize + dc * step as isize;
                        self.player_at(r, c, player)
                    });
                    if win {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// True iff (row, col) is in bounds and holds `player`'s disc.
    /// Signed coordinates so direction stepping can walk off either edge.
    fn player_at(&self, row: isize, col: isize, player: Player) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        matches!(
            self.get(row as usize, col as usize),
            Some(Some(p)) if p == player
        )
    }
}
