//! Terminal presentation for Connect Four.
//!
//! - [`fb`]: a framebuffer of styled character cells (pure data)
//! - [`board_view`]: maps game state into a framebuffer (pure, no I/O)
//! - [`renderer`]: flushes a framebuffer to the real terminal

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_connect4_core as core;
pub use tui_connect4_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
