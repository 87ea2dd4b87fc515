//! Terminal input module (engine-facing).
//!
//! This module is independent of the renderer. It maps `crossterm` key
//! events into [`crate::types::ControlAction`], mouse presses into
//! [`PointerClick`]s carrying a [`crate::types::ClickMode`], and display
//! positions into grid cells.

pub mod map;
pub mod pointer;

pub use tui_life_types as types;

pub use map::{click_mode, handle_key_event, pointer_click, should_quit, PointerClick};
pub use pointer::{hit_cell, pointer_to_cell, SurfaceGeometry};
