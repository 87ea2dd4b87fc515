//! Startup configuration from environment variables.
//!
//! - `LIFE_WIDTH` / `LIFE_HEIGHT`: grid size in cells (default 64x64)
//! - `LIFE_CELL_SIZE`: cell edge in surface pixels (default 5)
//! - `LIFE_FRAME_MS`: frame interval (default 16)
//! - `LIFE_TICKS`: initial generations per frame (default 1)
//! - `LIFE_SEED`: seed for the random initial board (default: clock)
//! - `LIFE_LOG_PATH`: write tracing output to this file (default: off)
//!
//! Unparseable or zero values fall back to the defaults. Grid sides are capped
//! at `MAX_GRID_SIDE`; the cell size is capped at `MAX_CELL_SIZE` and lowered
//! further so neither surface side exceeds `MAX_SURFACE_SIDE`.

use std::time::Duration;

use crate::types::{
    Dimensions, SpeedControl, CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH, FRAME_MS, MAX_CELL_SIZE,
    MAX_GRID_SIDE, MAX_SURFACE_SIDE, MAX_TICKS_PER_FRAME, MIN_TICKS_PER_FRAME,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub frame_ms: u32,
    pub ticks_per_frame: u32,
    pub max_ticks_per_frame: u32,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: CELL_SIZE,
            frame_ms: FRAME_MS,
            ticks_per_frame: MIN_TICKS_PER_FRAME,
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let positive = |key: &str, default: u32| -> u32 {
            lookup(key)
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };

        let max_ticks_per_frame = defaults.max_ticks_per_frame;
        let ticks_per_frame =
            positive("LIFE_TICKS", defaults.ticks_per_frame).min(max_ticks_per_frame);

        let seed = lookup("LIFE_SEED").and_then(|s| s.trim().parse::<u32>().ok());

        let log_path = lookup("LIFE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let width = positive("LIFE_WIDTH", defaults.width).min(MAX_GRID_SIDE);
        let height = positive("LIFE_HEIGHT", defaults.height).min(MAX_GRID_SIDE);
        let max_pitch = MAX_SURFACE_SIDE / width.max(height);
        let cell_size = positive("LIFE_CELL_SIZE", defaults.cell_size)
            .min(MAX_CELL_SIZE)
            .min(max_pitch.saturating_sub(1).max(1));

        Self {
            width,
            height,
            cell_size,
            frame_ms: positive("LIFE_FRAME_MS", defaults.frame_ms),
            ticks_per_frame,
            max_ticks_per_frame,
            seed,
            log_path,
        }
    }

    pub fn dims(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms as u64)
    }

    pub fn speed_control(&self) -> SpeedControl {
        SpeedControl::new(
            self.ticks_per_frame,
            MIN_TICKS_PER_FRAME,
            self.max_ticks_per_frame,
        )
    }
}
