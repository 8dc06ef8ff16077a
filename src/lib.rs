//! Terminal Connect Four (workspace facade crate).
//!
//! This package keeps a stable `tui_connect4::{core,term,input,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_connect4_core as core;
pub use tui_connect4_input as input;
pub use tui_connect4_term as term;
pub use tui_connect4_types as types;
