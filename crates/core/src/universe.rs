//! The simulation engine seam and its default implementation.
//!
//! The render loop only talks to [`Simulation`]. [`Universe`] is the stock
//! engine: a packed toroidal grid running the B3/S23 rule.

use std::fmt;

use bitvec::prelude::*;

use crate::rng::SimpleRng;
use crate::types::Dimensions;

/// Engine contract consumed by the game controller.
///
/// `cells()` returns the packed buffer of the current generation, MSB-first
/// row-major. The slice is borrowed from the engine, so callers re-acquire it
/// after every mutation instead of caching it.
pub trait Simulation {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Advance one generation.
    fn step(&mut self);

    fn cells(&self) -> &[u8];

    fn cells_byte_len(&self) -> usize {
        self.cells().len()
    }

    fn randomize(&mut self);
    fn clear(&mut self);
    fn set_alive(&mut self, row: u32, col: u32);
    fn toggle(&mut self, row: u32, col: u32);

    fn dims(&self) -> Dimensions {
        Dimensions::new(self.width(), self.height())
    }
}

/// Packed toroidal Game of Life grid.
#[derive(Debug, Clone)]
pub struct Universe {
    dims: Dimensions,
    cells: BitVec<u8, Msb0>,
    scratch: BitVec<u8, Msb0>,
    rng: SimpleRng,
}

impl Universe {
    /// Create a universe filled with a random ~50% population.
    pub fn new(width: u32, height: u32, seed: u32) -> Self {
        let mut universe = Self::dead(width, height);
        universe.rng = SimpleRng::new(seed);
        universe.randomize();
        universe
    }

    /// Create a universe with every cell dead.
    pub fn dead(width: u32, height: u32) -> Self {
        let dims = Dimensions::new(width, height);
        let size = dims.cell_count();
        Self {
            dims,
            cells: bitvec![u8, Msb0; 0; size],
            scratch: bitvec![u8, Msb0; 0; size],
            rng: SimpleRng::new(1),
        }
    }

    /// Set every listed `(row, col)` alive. Off-grid entries are ignored.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) {
        for &(row, col) in cells {
            self.set_alive(row, col);
        }
    }

    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.cells[self.dims.index(row, col)]
    }

    pub fn live_count(&self) -> usize {
        self.cells.count_ones()
    }

    fn live_neighbor_count(&self, row: u32, col: u32) -> u8 {
        let (w, h) = (self.dims.width, self.dims.height);
        let mut count = 0;
        for delta_row in [h - 1, 0, 1] {
            for delta_col in [w - 1, 0, 1] {
                if delta_row == 0 && delta_col == 0 {
                    continue;
                }
                let neighbor_row = (row + delta_row) % h;
                let neighbor_col = (col + delta_col) % w;
                if self.cells[self.dims.index(neighbor_row, neighbor_col)] {
                    count += 1;
                }
            }
        }
        count
    }
}

impl Simulation for Universe {
    fn width(&self) -> u32 {
        self.dims.width
    }

    fn height(&self) -> u32 {
        self.dims.height
    }

    fn step(&mut self) {
        let _span = tracing::trace_span!("universe_step").entered();

        for row in 0..self.dims.height {
            for col in 0..self.dims.width {
                let idx = self.dims.index(row, col);
                let alive = self.cells[idx];
                let next = matches!(
                    (alive, self.live_neighbor_count(row, col)),
                    (true, 2) | (true, 3) | (false, 3)
                );
                self.scratch.set(idx, next);
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    fn cells(&self) -> &[u8] {
        self.cells.as_raw_slice()
    }

    fn randomize(&mut self) {
        for idx in 0..self.dims.cell_count() {
            let alive = self.rng.next_bool();
            self.cells.set(idx, alive);
        }
    }

    fn clear(&mut self) {
        self.cells.fill(false);
    }

    fn set_alive(&mut self, row: u32, col: u32) {
        if row < self.dims.height && col < self.dims.width {
            let idx = self.dims.index(row, col);
            self.cells.set(idx, true);
        }
    }

    fn toggle(&mut self, row: u32, col: u32) {
        if row < self.dims.height && col < self.dims.width {
            let idx = self.dims.index(row, col);
            let current = self.cells[idx];
            self.cells.set(idx, !current);
        }
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dims.height {
            for col in 0..self.dims.width {
                let symbol = if self.is_alive(row, col) { '◼' } else { '◻' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
