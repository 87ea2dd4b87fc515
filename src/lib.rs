//! TUI Life (workspace facade crate).
//!
//! Re-exports the member crates under one path so the binary, benches and
//! integration tests can use `tui_life::{core,engine,input,term,types}`.

pub use tui_life_core as core;
pub use tui_life_engine as engine;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;
