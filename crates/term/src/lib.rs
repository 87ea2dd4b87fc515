//! Terminal rendering module.
//!
//! The grid is painted into a pixel [`Surface`] exactly as a 2D canvas would
//! be: 1px gridlines and `cell_size` squares. [`LifeView`] then samples that
//! surface into a terminal [`FrameBuffer`] with half-block glyphs, and
//! [`TerminalRenderer`] flushes the framebuffer to the terminal.
//!
//! - [`surface`] / [`canvas`]: pure pixel painting (testable)
//! - [`fb`] / [`view`]: pure terminal composition (testable)
//! - [`renderer`]: terminal I/O

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod surface;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use canvas::{CanvasRenderer, Palette};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::Surface;
pub use view::{HudStatus, LifeView, Viewport, HUD_ROWS, KEY_HINT};
