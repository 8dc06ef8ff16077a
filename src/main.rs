//! Terminal Connect Four runner.
//!
//! Renders through the framebuffer renderer and blocks on key events.
//! The game is turn-based, so there is no tick loop; one key press, one
//! frame.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_connect4::core::GameState;
use tui_connect4::input::{handle_key_event, should_quit, UiIntent};
use tui_connect4::term::{BoardView, TerminalRenderer, Viewport};
use tui_connect4::types::{DropError, DEFAULT_HEIGHT, DEFAULT_WIDTH};

fn main() -> Result<()> {
    let (width, height) = board_dimensions();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, width, height);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, width: usize, height: usize) -> Result<()> {
    let view = BoardView::default();
    let mut game = GameState::new(width, height);
    let mut cursor = width / 2;
    let mut notice: Option<String> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, cursor, notice.as_deref(), Viewport::new(w, h));
        term.draw(&fb)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        notice = None;
        match handle_key_event(key) {
            Some(UiIntent::CursorLeft) => cursor = cursor.saturating_sub(1),
            Some(UiIntent::CursorRight) => {
                if cursor + 1 < width {
                    cursor += 1;
                }
            }
            Some(UiIntent::Drop) => drop_into(&mut game, cursor, &mut notice),
            Some(UiIntent::SelectColumn(col)) if col < width => {
                cursor = col;
                drop_into(&mut game, col, &mut notice);
            }
            Some(UiIntent::SelectColumn(_)) => {}
            Some(UiIntent::Restart) => {
                // One engine per session: restart is a fresh game.
                game = GameState::new(width, height);
                cursor = width / 2;
            }
            None => {}
        }
    }
}

/// Attempt a drop and surface rejections on the notice line.
fn drop_into(game: &mut GameState, column: usize, notice: &mut Option<String>) {
    match game.drop_disc(column) {
        Ok(_) => {}
        Err(DropError::ColumnFull(col)) => {
            // 1-based in the message, matching the on-screen labels.
            *notice = Some(format!("column {} is full", col + 1));
        }
        // Terminal outcome is already on screen; ignore further drops.
        Err(DropError::GameAlreadyOver) => {}
        Err(err @ DropError::InvalidColumn { .. }) => *notice = Some(err.to_string()),
    }
}

/// Board dimensions from the environment, falling back to the standard
/// 7x6 board: `CONNECT4_WIDTH` / `CONNECT4_HEIGHT`, any positive integer.
fn board_dimensions() -> (usize, usize) {
    let width = parse_dim(std::env::var("CONNECT4_WIDTH").ok(), DEFAULT_WIDTH);
    let height = parse_dim(std::env::var("CONNECT4_HEIGHT").ok(), DEFAULT_HEIGHT);
    (width, height)
}

fn parse_dim(raw: Option<String>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&dim| dim > 0)
        .unwrap_or(default)
}
