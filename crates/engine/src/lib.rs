//! Frame loop and orchestration.
//!
//! [`GameController`] ties the engine ([`crate::core::Simulation`]), the
//! canvas ([`crate::term::CanvasRenderer`]), the [`MemoryReporter`] and a
//! [`FrameRate`] collaborator together under a cancelable
//! [`FrameScheduler`].
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tui_life_core::Universe;
//! use tui_life_engine::{FpsCounter, GameConfig, GameController};
//!
//! let config = GameConfig { width: 8, height: 8, ..GameConfig::default() };
//! let t0 = Instant::now();
//! let mut game = GameController::new(Universe::dead(8, 8), FpsCounter::new(), &config, t0);
//!
//! // Playback starts immediately; the first frame is already due.
//! assert!(game.pump(t0));
//! assert_eq!(game.generation(), 1);
//!
//! game.pause();
//! assert!(!game.pump(t0 + Duration::from_secs(1)));
//!
//! game.tick();
//! assert_eq!(game.generation(), 2);
//! assert!(game.is_paused());
//! ```

pub mod config;
pub mod controller;
pub mod fps;
pub mod memory;
pub mod scheduler;

pub use tui_life_core as core;
pub use tui_life_term as term;
pub use tui_life_types as types;

pub use config::GameConfig;
pub use controller::GameController;
pub use fps::{FpsCounter, FpsStats, FrameRate, FPS_WINDOW};
pub use memory::{format_mb, HeapMetric, MemoryReporter, NoHeapMetric, ProcessHeap};
pub use scheduler::{FrameHandle, FrameScheduler};
