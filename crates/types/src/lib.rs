//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping).
//!
//! # Grid Geometry
//!
//! Every cell occupies `CELL_SIZE` pixels plus a 1px gridline on the surface:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_SIZE` | 5 | Cell edge in surface pixels |
//! | `FRAME_MS` | 16 | Default frame interval (~60 FPS) |
//! | `DEFAULT_WIDTH` | 64 | Default grid columns |
//! | `DEFAULT_HEIGHT` | 64 | Default grid rows |
//! | `MAX_GRID_SIDE` | 1024 | Largest accepted grid side |
//! | `MAX_CELL_SIZE` | 32 | Largest accepted cell edge |
//! | `MAX_SURFACE_SIDE` | 4096 | Largest surface side in pixels |
//!
//! # Packed Cell Order
//!
//! Cells are stored row-major, 8 per byte, most-significant bit first:
//! cell `(row, col)` is bit `row * width + col`.
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{ControlAction, Dimensions, DisplayRect, SpeedControl};
//!
//! let dims = Dimensions::new(4, 4);
//! assert_eq!(dims.index(1, 1), 5);
//! assert_eq!(dims.byte_len(), 2);
//!
//! assert_eq!(ControlAction::TogglePlay.as_str(), "togglePlay");
//!
//! let rect = DisplayRect::new(28.0, 0.0, 24.0, 24.0);
//! assert!(rect.contains(28.5, 23.0));
//! assert!(!rect.contains(0.5, 57.0));
//!
//! let mut speed = SpeedControl::default();
//! speed.set(0);
//! assert_eq!(speed.value(), 1);
//! ```

/// Cell edge length in surface pixels (gridline excluded)
pub const CELL_SIZE: u32 = 5;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Default grid width in cells
pub const DEFAULT_WIDTH: u32 = 64;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: u32 = 64;

/// Largest accepted grid side in cells
pub const MAX_GRID_SIDE: u32 = 1024;

/// Largest accepted cell edge in surface pixels
pub const MAX_CELL_SIZE: u32 = 32;

/// Largest surface side in pixels; the cell size shrinks to stay within it
pub const MAX_SURFACE_SIDE: u32 = 4096;

/// Slowest tick rate: one generation per frame
pub const MIN_TICKS_PER_FRAME: u32 = 1;

/// Fastest tick rate offered by the speed control
pub const MAX_TICKS_PER_FRAME: u32 = 10;

/// Gridline color (#CCCCCC)
pub const GRID_COLOR: Rgb = Rgb::new(0xCC, 0xCC, 0xCC);

/// Dead cell color (#FFFFFF)
pub const DEAD_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Alive cell color (#000000)
pub const ALIVE_COLOR: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Grid dimensions in cells.
///
/// Both axes are at least 1; constructors clamp zero up to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Bit index of `(row, col)` in the packed buffer.
    #[inline(always)]
    pub fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.width as usize) + (col as usize)
    }

    /// Whether a signed coordinate lies on the grid.
    #[inline(always)]
    pub fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0 && row < self.height as i64 && col >= 0 && col < self.width as i64
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Bytes needed to hold every cell at 8 cells per byte.
    pub fn byte_len(&self) -> usize {
        self.cell_count().div_ceil(8)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// A cell position that is already known to be on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: u32,
    pub col: u32,
}

impl CellCoord {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Where the surface appears on screen, in display pixels.
///
/// A terminal cell is one display pixel wide and two tall (half blocks).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether `(x, y)` lies in `[left, left + width) x [top, top + height)`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        !self.is_empty()
            && x >= self.left
            && x < self.left + self.width
            && y >= self.top
            && y < self.top + self.height
    }
}

/// What a pointer click does, selected by held modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClickMode {
    /// Flip the clicked cell.
    #[default]
    Toggle,
    /// Stamp a glider anchored at the clicked cell.
    Glider,
    /// Stamp a pulsar centred on the clicked cell.
    Pulsar,
}

/// User-facing controls of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    TogglePlay,
    Play,
    Pause,
    /// Advance exactly one generation, even while paused.
    Step,
    Randomize,
    Clear,
    Faster,
    Slower,
}

impl ControlAction {
    /// camelCase name, used as the `action` field in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlAction::TogglePlay => "togglePlay",
            ControlAction::Play => "play",
            ControlAction::Pause => "pause",
            ControlAction::Step => "step",
            ControlAction::Randomize => "randomize",
            ControlAction::Clear => "clear",
            ControlAction::Faster => "faster",
            ControlAction::Slower => "slower",
        }
    }
}

/// Ticks-per-frame slider.
///
/// The value is an integer in `[min, max]` with `min >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedControl {
    value: u32,
    min: u32,
    max: u32,
}

impl SpeedControl {
    pub fn new(value: u32, min: u32, max: u32) -> Self {
        let min = min.max(MIN_TICKS_PER_FRAME);
        let max = max.max(min);
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn set(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn increase(&mut self) {
        self.set(self.value.saturating_add(1));
    }

    pub fn decrease(&mut self) {
        self.set(self.value.saturating_sub(1));
    }
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self::new(MIN_TICKS_PER_FRAME, MIN_TICKS_PER_FRAME, MAX_TICKS_PER_FRAME)
    }
}
