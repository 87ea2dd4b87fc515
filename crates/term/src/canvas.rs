//! CanvasRenderer: paints gridlines and cells onto a [`Surface`].
//!
//! This module is pure (no I/O). Every call repaints everything it owns:
//! there is no dirty-rectangle tracking. A 256x256 grid is ~1.6M pixel
//! writes per frame, which fits a 16ms frame; revisit only if profiling
//! on a slower host says otherwise.

use crate::core::BitGridView;
use crate::surface::Surface;
use crate::types::{
    Dimensions, Rgb, ALIVE_COLOR, CELL_SIZE, DEAD_COLOR, GRID_COLOR, MAX_CELL_SIZE,
};

/// Colors used by the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub grid: Rgb,
    pub alive: Rgb,
    pub dead: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: GRID_COLOR,
            alive: ALIVE_COLOR,
            dead: DEAD_COLOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasRenderer {
    cell_size: u32,
    palette: Palette,
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self::new(CELL_SIZE)
    }
}

impl CanvasRenderer {
    /// `cell_size` is clamped into `1..=MAX_CELL_SIZE`.
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.clamp(1, MAX_CELL_SIZE),
            palette: Palette::default(),
        }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    fn pitch(&self) -> u32 {
        self.cell_size.saturating_add(1)
    }

    /// Allocate a surface with one pixel of gridline per cell on each axis.
    pub fn init_surface(&self, dims: Dimensions) -> Surface {
        Surface::new(
            self.pitch().saturating_mul(dims.width),
            self.pitch().saturating_mul(dims.height),
            self.cell_size,
            self.palette.dead,
        )
    }

    /// Top-left pixel of cell `(row, col)`.
    pub fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        let pitch = self.pitch();
        (
            col.saturating_mul(pitch).saturating_add(1),
            row.saturating_mul(pitch).saturating_add(1),
        )
    }

    /// Draw `width + 1` vertical and `height + 1` horizontal gridlines.
    ///
    /// The last line on each axis sits at the surface edge and is clipped.
    pub fn draw_grid(&self, surface: &mut Surface, dims: Dimensions) {
        let pitch = self.pitch();
        for i in 0..=dims.width {
            surface.vline(i.saturating_mul(pitch), self.palette.grid);
        }
        for j in 0..=dims.height {
            surface.hline(j.saturating_mul(pitch), self.palette.grid);
        }
    }

    /// Repaint every cell from the packed buffer of the current generation.
    pub fn draw_cells(&self, surface: &mut Surface, cells: &[u8], dims: Dimensions) {
        let view = BitGridView::new(cells, dims);
        for row in 0..dims.height {
            for col in 0..dims.width {
                let color = if view.is_alive(row, col) {
                    self.palette.alive
                } else {
                    self.palette.dead
                };
                let (x, y) = self.cell_origin(row, col);
                surface.fill_rect(x, y, self.cell_size, self.cell_size, color);
            }
        }
    }

    /// Gridlines, then cells.
    pub fn draw(&self, surface: &mut Surface, cells: &[u8], dims: Dimensions) {
        self.draw_grid(surface, dims);
        self.draw_cells(surface, cells, dims);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_reserves_one_gridline_per_cell() {
        let canvas = CanvasRenderer::new(5);
        let s = canvas.init_surface(Dimensions::new(4, 3));
        assert_eq!(s.width(), 24);
        assert_eq!(s.height(), 18);
    }

    #[test]
    fn gridlines_land_on_pitch_multiples() {
        let canvas = CanvasRenderer::new(2);
        let dims = Dimensions::new(3, 2);
        let mut s = canvas.init_surface(dims);
        canvas.draw_grid(&mut s, dims);

        let grid = canvas.palette().grid;
        for x in [0, 3, 6] {
            for y in 0..s.height() {
                assert_eq!(s.pixel(x, y), Some(grid), "x={x} y={y}");
            }
        }
        for y in [0, 3] {
            for x in 0..s.width() {
                assert_eq!(s.pixel(x, y), Some(grid), "x={x} y={y}");
            }
        }
        // Cell interior untouched by the grid.
        assert_eq!(s.pixel(1, 1), Some(canvas.palette().dead));
    }

    #[test]
    fn single_live_cell_fills_only_its_square() {
        let canvas = CanvasRenderer::new(2);
        let dims = Dimensions::new(2, 2);
        let mut s = canvas.init_surface(dims);
        // Cell (1,0) => bit 2.
        canvas.draw(&mut s, &[0b0010_0000], dims);

        let p = canvas.palette();
        assert_eq!(s.pixel(1, 4), Some(p.alive));
        assert_eq!(s.pixel(2, 5), Some(p.alive));
        assert_eq!(s.pixel(4, 4), Some(p.dead));
        assert_eq!(s.pixel(1, 1), Some(p.dead));
        assert_eq!(s.pixel(0, 4), Some(p.grid));
    }

    #[test]
    fn oversized_cell_size_is_clamped() {
        let canvas = CanvasRenderer::new(u32::MAX);
        assert_eq!(canvas.cell_size(), MAX_CELL_SIZE);
        let s = canvas.init_surface(Dimensions::new(2, 1));
        assert_eq!(s.width(), 2 * (MAX_CELL_SIZE + 1));
        assert_eq!(s.height(), MAX_CELL_SIZE + 1);
    }

    #[test]
    fn cell_origin_saturates_instead_of_overflowing() {
        let canvas = CanvasRenderer::new(MAX_CELL_SIZE);
        assert_eq!(canvas.cell_origin(u32::MAX, u32::MAX), (u32::MAX, u32::MAX));
    }

    #[test]
    fn repaint_overwrites_previous_frame() {
        let canvas = CanvasRenderer::new(1);
        let dims = Dimensions::new(2, 1);
        let mut s = canvas.init_surface(dims);
        canvas.draw_cells(&mut s, &[0b1100_0000], dims);
        canvas.draw_cells(&mut s, &[0b0000_0000], dims);
        assert_eq!(s.pixel(1, 1), Some(canvas.palette().dead));
        assert_eq!(s.pixel(3, 1), Some(canvas.palette().dead));
    }
}
