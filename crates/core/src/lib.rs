//! Core simulation module - pure, deterministic, and testable
//!
//! This module holds everything that knows about cells but nothing about
//! terminals or input devices:
//!
//! - [`bits`]: decoding of the packed MSB-first cell buffer
//! - [`universe`]: the [`Simulation`] engine seam and the stock [`Universe`]
//! - [`patterns`]: glider and pulsar stamps
//! - [`rng`]: seeded coin flips for random boards
//!
//! # Example
//!
//! ```
//! use tui_life_core::{BitGridView, Simulation, Universe};
//!
//! let mut universe = Universe::dead(8, 8);
//! universe.set_alive(2, 3);
//!
//! let view = BitGridView::new(universe.cells(), universe.dims());
//! assert!(view.is_alive(2, 3));
//! assert_eq!(view.live_count(), 1);
//!
//! // A lone cell dies of underpopulation.
//! universe.step();
//! assert_eq!(universe.live_count(), 0);
//! ```

pub mod bits;
pub mod patterns;
pub mod rng;
pub mod universe;

pub use tui_life_types as types;

pub use bits::{is_alive, BitGridView};
pub use patterns::{Pattern, GLIDER, PULSAR};
pub use rng::SimpleRng;
pub use universe::{Simulation, Universe};
