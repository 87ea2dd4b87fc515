//! LifeView: maps a pixel [`Surface`] plus a status HUD into a terminal
//! framebuffer.
//!
//! This module is pure (no I/O). Each terminal cell shows two vertically
//! stacked display pixels via the upper-half-block glyph: foreground is the
//! top pixel, background the bottom one. Surfaces larger than the terminal
//! are scaled down with nearest-neighbour sampling; they are never magnified.

use std::fmt::Write as _;

use crate::fb::{CellStyle, FrameBuffer};
use crate::surface::Surface;
use crate::types::{DisplayRect, Rgb};

/// Rows reserved for the HUD at the bottom of the screen.
pub const HUD_ROWS: u16 = 2;

const UPPER_HALF: char = '▀';
const BACKDROP: Rgb = Rgb::new(0, 0, 0);

/// Second HUD row: key and click bindings.
pub const KEY_HINT: &str = concat!(
    "space play/pause  n step  r random  c clear  +/- speed  ",
    "click toggle  alt+click glider  shift/ctrl+click pulsar  q quit",
);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Live diagnostics shown under the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStatus<'a> {
    pub running: bool,
    pub ticks_per_frame: u32,
    pub generation: u64,
    pub population: usize,
    pub fps: &'a str,
    pub memory: &'a str,
}

#[derive(Debug, Default)]
pub struct LifeView {
    line: String,
}

impl LifeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute where the surface lands inside `viewport`.
    pub fn layout(surface: &Surface, viewport: Viewport) -> DisplayRect {
        let avail_w = viewport.width as f64;
        let avail_h = viewport.height.saturating_sub(HUD_ROWS) as f64 * 2.0;
        if avail_w < 1.0 || avail_h < 1.0 || surface.width() == 0 || surface.height() == 0 {
            return DisplayRect::default();
        }

        let sw = surface.width() as f64;
        let sh = surface.height() as f64;
        let scale = (sw / avail_w).max(sh / avail_h).max(1.0);
        let width = (sw / scale).floor().max(1.0);
        let height = (sh / scale).floor().max(1.0);
        let left = ((avail_w - width) / 2.0).floor();

        DisplayRect::new(left, 0.0, width, height)
    }

    /// Render surface and HUD into an existing framebuffer.
    ///
    /// Returns the on-screen rectangle of the surface, in display pixels,
    /// for pointer mapping.
    pub fn render_into(
        &mut self,
        surface: &Surface,
        hud: &HudStatus<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> DisplayRect {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(BACKDROP, BACKDROP).into_cell(' '));

        let rect = Self::layout(surface, viewport);
        if !rect.is_empty() {
            self.draw_surface(surface, rect, fb);
        }
        self.draw_hud(hud, viewport, fb);
        rect
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &mut self,
        surface: &Surface,
        hud: &HudStatus<'_>,
        viewport: Viewport,
    ) -> (FrameBuffer, DisplayRect) {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let rect = self.render_into(surface, hud, viewport, &mut fb);
        (fb, rect)
    }

    fn draw_surface(&self, surface: &Surface, rect: DisplayRect, fb: &mut FrameBuffer) {
        let scale_x = surface.width() as f64 / rect.width;
        let scale_y = surface.height() as f64 / rect.height;
        let cols = rect.width as u32;
        let px_rows = rect.height as u32;
        let left = rect.left as u16;

        let sample = |dx: u32, dy: u32| -> Rgb {
            let sx = (((dx as f64) + 0.5) * scale_x) as u32;
            let sy = (((dy as f64) + 0.5) * scale_y) as u32;
            surface
                .pixel(sx.min(surface.width() - 1), sy.min(surface.height() - 1))
                .unwrap_or(BACKDROP)
        };

        for ty in 0..px_rows.div_ceil(2) {
            let top_px = ty * 2;
            let bottom_px = top_px + 1;
            for dx in 0..cols {
                let fg = sample(dx, top_px);
                let bg = if bottom_px < px_rows {
                    sample(dx, bottom_px)
                } else {
                    BACKDROP
                };
                fb.put_char(
                    left + dx as u16,
                    ty as u16,
                    UPPER_HALF,
                    CellStyle::new(fg, bg),
                );
            }
        }
    }

    fn draw_hud(&mut self, hud: &HudStatus<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        if viewport.height < HUD_ROWS {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BACKDROP);
        let hint = CellStyle::new(Rgb::new(120, 120, 130), BACKDROP);

        let status_y = viewport.height - HUD_ROWS;
        let state = if hud.running { "▶ RUNNING" } else { "⏸ PAUSED" };
        let x = fb.put_str(0, status_y, state, label);

        self.line.clear();
        let _ = write!(
            self.line,
            "  ticks/frame {}  gen {}  pop {}  {}  {}",
            hud.ticks_per_frame, hud.generation, hud.population, hud.fps, hud.memory
        );
        fb.put_str(x, status_y, &self.line, value);

        fb.put_str(
            0,
            status_y + 1,
            KEY_HINT,
            hint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hud() -> HudStatus<'static> {
        HudStatus {
            running: true,
            ticks_per_frame: 1,
            generation: 0,
            population: 0,
            fps: "",
            memory: "",
        }
    }

    #[test]
    fn small_surface_is_not_magnified() {
        let s = Surface::new(10, 6, 1, Rgb::new(1, 2, 3));
        let rect = LifeView::layout(&s, Viewport::new(40, 20));
        assert_eq!(rect.width, 10.0);
        assert_eq!(rect.height, 6.0);
        assert_eq!(rect.left, 15.0);
    }

    #[test]
    fn large_surface_scales_down_preserving_aspect() {
        let s = Surface::new(200, 100, 1, Rgb::new(0, 0, 0));
        // avail: 100 x (27 - 2) * 2 = 100 x 50 => scale 2
        let rect = LifeView::layout(&s, Viewport::new(100, 27));
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 50.0);
    }

    #[test]
    fn half_blocks_carry_top_and_bottom_pixels() {
        let mut s = Surface::new(1, 2, 1, Rgb::new(0, 0, 0));
        s.fill_rect(0, 1, 1, 1, Rgb::new(255, 255, 255));
        let mut view = LifeView::new();
        let (fb, _) = view.render(&s, &hud(), Viewport::new(1, 3));
        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, '▀');
        assert_eq!(cell.style.fg, Rgb::new(0, 0, 0));
        assert_eq!(cell.style.bg, Rgb::new(255, 255, 255));
    }

    #[test]
    fn hud_shows_play_state_and_counters() {
        let s = Surface::new(4, 4, 1, Rgb::new(0, 0, 0));
        let mut view = LifeView::new();
        let status = HudStatus {
            running: false,
            ticks_per_frame: 3,
            generation: 42,
            population: 7,
            fps: "fps 60",
            memory: "Memory: 0.01 MB",
        };
        let (fb, _) = view.render(&s, &status, Viewport::new(120, 10));
        let line = fb.row_text(8);
        assert!(line.contains("PAUSED"));
        assert!(line.contains("ticks/frame 3"));
        assert!(line.contains("gen 42"));
        assert!(line.contains("Memory: 0.01 MB"));
    }

    #[test]
    fn key_hint_row_lists_both_pulsar_modifiers() {
        let s = Surface::new(4, 4, 1, Rgb::new(0, 0, 0));
        let mut view = LifeView::new();
        let (fb, _) = view.render(&s, &hud(), Viewport::new(160, 10));
        assert!(fb.row_text(9).contains("shift/ctrl+click pulsar"));
    }

    #[test]
    fn tiny_viewport_yields_empty_rect() {
        let s = Surface::new(4, 4, 1, Rgb::new(0, 0, 0));
        let rect = LifeView::layout(&s, Viewport::new(10, 2));
        assert!(rect.is_empty());
    }
}
