//! Pixel surface: the drawing target the canvas renderer paints into.

use crate::types::Rgb;

/// RGB pixel surface sized once from the grid geometry.
///
/// Writes outside the surface are clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    cell_size: u32,
    pixels: Vec<Rgb>,
}

impl Surface {
    pub fn new(width: u32, height: u32, cell_size: u32, fill: Rgb) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cell_size,
            pixels: vec![fill; len],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Distance between neighbouring cell origins (cell plus gridline).
    pub fn pitch(&self) -> u32 {
        self.cell_size.saturating_add(1)
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let x_end = x.saturating_add(w).min(self.width) as usize;
        let y_end = y.saturating_add(h).min(self.height);
        let stride = self.width as usize;
        for row in y..y_end {
            let base = (row as usize) * stride;
            self.pixels[base + x as usize..base + x_end].fill(color);
        }
    }

    /// Full-height 1px vertical line at column `x`.
    pub fn vline(&mut self, x: u32, color: Rgb) {
        self.fill_rect(x, 0, 1, self.height, color);
    }

    /// Full-width 1px horizontal line at row `y`.
    pub fn hline(&mut self, y: u32, color: Rgb) {
        self.fill_rect(0, y, self.width, 1, color);
    }
}
