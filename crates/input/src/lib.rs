//! Terminal input for Connect Four.
//!
//! Maps `crossterm` key events into UI intents. Connect Four is
//! turn-based, so there is no auto-repeat handling; one key press maps
//! to at most one intent.

pub mod map;

pub use map::{handle_key_event, should_quit, UiIntent};
