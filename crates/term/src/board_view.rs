//! BoardView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_connect4_core::GameState;
use tui_connect4_types::{GameStatus, Player};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the board, the column cursor, and the status lines.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 4 columns per cell keeps discs readable at typical glyph
        // aspect ratios.
        Self { cell_w: 4 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the current game into a framebuffer.
    ///
    /// `cursor` is the column the next disc would drop into; `notice` is
    /// an optional transient message (for example a rejected move).
    pub fn render(
        &self,
        game: &GameState,
        cursor: usize,
        notice: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let cols = game.board().width() as u16;
        let rows = game.board().height() as u16;
        let board_px_w = cols * self.cell_w;
        let frame_w = board_px_w + 2;
        let frame_h = rows + 2;

        // Rows above the frame: title, blank, column numbers, cursor.
        // Rows below: status, notice, help.
        let block_h = frame_h + 7;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(block_h) / 2;

        let numbers_y = top + 2;
        let cursor_y = top + 3;
        let frame_y = top + 4;
        let status_y = frame_y + frame_h;
        let notice_y = status_y + 1;
        let help_y = notice_y + 1;

        let title = CellStyle {
            fg: Rgb::new(235, 235, 235),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let faint = CellStyle {
            fg: Rgb::new(150, 150, 150),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let panel = CellStyle {
            fg: Rgb::new(110, 125, 180),
            bg: Rgb::new(28, 48, 110),
            bold: false,
            dim: false,
        };

        self.draw_centered(&mut fb, top, "CONNECT FOUR", title);

        // Column numbers over their cells.
        for col in 0..cols {
            let label = char::from_digit(((col + 1) % 10) as u32, 10).unwrap_or('?');
            let x = self.cell_center_x(start_x, col);
            fb.set(x, numbers_y, faint.into_cell(label));
        }

        // Cursor marker in the mover's color; hidden once the game ends.
        if !game.is_over() && (cursor as u16) < cols {
            let x = self.cell_center_x(start_x, cursor as u16);
            let style = self.disc_style(game.current_player(), Rgb::new(0, 0, 0));
            fb.set(x, cursor_y, style.into_cell('▼'));
        }

        // Frame background and border.
        fb.fill_rect(start_x + 1, frame_y + 1, board_px_w, rows, ' ', panel);
        self.draw_border(&mut fb, start_x, frame_y, frame_w, frame_h, border);

        // Board cells.
        for row in 0..rows {
            for col in 0..cols {
                let x = self.cell_center_x(start_x, col);
                let y = frame_y + 1 + row;
                match game.cell(row as usize, col as usize).flatten() {
                    Some(player) => {
                        let style = self.disc_style(player, panel.bg);
                        fb.set(x, y, style.into_cell('●'));
                    }
                    None => {
                        fb.set(x, y, panel.into_cell('·'));
                    }
                }
            }
        }

        // Status line.
        let (status_text, status_style) = self.status_line(game);
        self.draw_centered(&mut fb, status_y, &status_text, status_style);

        if let Some(text) = notice {
            self.draw_centered(&mut fb, notice_y, text, faint);
        }

        self.draw_centered(
            &mut fb,
            help_y,
            "←/→ or 1-9: column   enter/space: drop   r: restart   q: quit",
            faint,
        );

        fb
    }

    fn cell_center_x(&self, start_x: u16, col: u16) -> u16 {
        start_x + 1 + col * self.cell_w + self.cell_w / 2
    }

    fn disc_style(&self, player: Player, bg: Rgb) -> CellStyle {
        let fg = match player {
            Player::One => Rgb::new(225, 80, 70),
            Player::Two => Rgb::new(235, 205, 80),
        };
        CellStyle {
            fg,
            bg,
            bold: true,
            dim: false,
        }
    }

    fn status_line(&self, game: &GameState) -> (String, CellStyle) {
        match game.status() {
            GameStatus::InProgress => {
                let player = game.current_player();
                (
                    format!("{}'s turn", player),
                    self.disc_style(player, Rgb::new(0, 0, 0)),
                )
            }
            GameStatus::Won(player) => (
                format!("{} wins!  press r for a new game", player),
                self.disc_style(player, Rgb::new(0, 0, 0)),
            ),
            GameStatus::Tied => (
                "It's a tie!  press r for a new game".to_string(),
                CellStyle {
                    fg: Rgb::new(235, 235, 235),
                    bg: Rgb::new(0, 0, 0),
                    bold: true,
                    dim: false,
                },
            ),
        }
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
        let len = text.chars().count() as u16;
        let x = fb.width().saturating_sub(len) / 2;
        fb.draw_text(x, y, text, style);
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }

        fb.set(x, y, style.into_cell('┌'));
        fb.set(x + w - 1, y, style.into_cell('┐'));
        fb.set(x, y + h - 1, style.into_cell('└'));
        fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));

        for dx in 1..w - 1 {
            fb.set(x + dx, y, style.into_cell('─'));
            fb.set(x + dx, y + h - 1, style.into_cell('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, style.into_cell('│'));
            fb.set(x + w - 1, y + dy, style.into_cell('│'));
        }
    }
}
