//! GameController: the frame-driven play/pause state machine.
//!
//! Everything happens synchronously inside one frame callback: record the
//! frame, advance the engine `ticks_per_frame` generations, repaint the
//! surface, refresh the memory report, then request the next frame. There is
//! no other timer; the scheduler's frame requests are the only clock.
//!
//! `Running` means a frame request is pending, `Paused` means none is.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::{BitGridView, Pattern, Simulation, GLIDER, PULSAR};
use crate::fps::FrameRate;
use crate::memory::{HeapMetric, MemoryReporter, ProcessHeap};
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::term::{CanvasRenderer, HudStatus, Surface};
use crate::types::{CellCoord, ClickMode, ControlAction, Dimensions, SpeedControl};

pub struct GameController<U, F, H = ProcessHeap> {
    universe: U,
    fps: F,
    memory: MemoryReporter<H>,
    canvas: CanvasRenderer,
    surface: Surface,
    dims: Dimensions,
    scheduler: FrameScheduler,
    animation: Option<FrameHandle>,
    speed: SpeedControl,
    memory_text: String,
    generation: u64,
    redraws: u64,
}

impl<U: Simulation, F: FrameRate> GameController<U, F, ProcessHeap> {
    /// Build a controller, paint the initial board and start playback.
    pub fn new(universe: U, fps: F, config: &GameConfig, now: Instant) -> Self {
        Self::with_heap_metric(universe, fps, ProcessHeap, config, now)
    }
}

impl<U: Simulation, F: FrameRate, H: HeapMetric> GameController<U, F, H> {
    pub fn with_heap_metric(
        universe: U,
        fps: F,
        metric: H,
        config: &GameConfig,
        now: Instant,
    ) -> Self {
        let dims = universe.dims();
        let canvas = CanvasRenderer::new(config.cell_size);
        let surface = canvas.init_surface(dims);

        let mut controller = Self {
            universe,
            fps,
            memory: MemoryReporter::new(metric),
            canvas,
            surface,
            dims,
            scheduler: FrameScheduler::new(config.frame_interval()),
            animation: None,
            speed: config.speed_control(),
            memory_text: String::new(),
            generation: 0,
            redraws: 0,
        };
        controller.draw();
        controller.refresh_memory();
        controller.play(now);
        controller
    }

    pub fn is_paused(&self) -> bool {
        self.animation.is_none()
    }

    /// Start the frame loop. The first frame is due immediately.
    pub fn play(&mut self, now: Instant) {
        if self.animation.is_none() {
            self.animation = Some(self.scheduler.request_immediate(now));
            info!(ticks_per_frame = self.speed.value(), "playback started");
        }
    }

    /// Cancel the pending frame and reset the frame-rate window.
    pub fn pause(&mut self) {
        if let Some(handle) = self.animation.take() {
            self.scheduler.cancel(handle);
            self.fps.reset();
            info!(generation = self.generation, "playback paused");
        }
    }

    pub fn toggle_play(&mut self, now: Instant) {
        if self.is_paused() {
            self.play(now);
        } else {
            self.pause();
        }
    }

    /// Run the pending frame if it is due. Returns whether a frame ran.
    pub fn pump(&mut self, now: Instant) -> bool {
        let Some(handle) = self.scheduler.take_due(now) else {
            return false;
        };
        if self.animation != Some(handle) {
            return false;
        }
        self.render_frame(now);
        true
    }

    fn render_frame(&mut self, now: Instant) {
        self.fps.record_frame(now);

        for _ in 0..self.speed.value() {
            self.universe.step();
            self.generation += 1;
        }
        self.draw();
        self.refresh_memory();

        self.animation = Some(self.scheduler.request(now));
    }

    /// One generation and one redraw, whether running or paused.
    pub fn tick(&mut self) {
        self.universe.step();
        self.generation += 1;
        self.draw();
    }

    /// Full repaint: gridlines, then every cell.
    pub fn draw(&mut self) {
        let cells = self.universe.cells();
        self.canvas.draw(&mut self.surface, cells, self.dims);
        self.redraws += 1;
    }

    pub fn reset_random(&mut self) {
        self.universe.randomize();
        self.generation = 0;
        info!("board randomized");
        self.draw();
    }

    pub fn reset_dead(&mut self) {
        self.universe.clear();
        self.generation = 0;
        info!("board cleared");
        self.draw();
    }

    /// Flip one cell. Does not redraw; off-grid coordinates are ignored.
    pub fn toggle_cell(&mut self, row: u32, col: u32) {
        if row < self.dims.height && col < self.dims.width {
            self.universe.toggle(row, col);
        }
    }

    /// Set alive every pattern cell that lands on the grid; the rest are
    /// clipped without error. Does not redraw.
    pub fn insert_pattern(&mut self, row: u32, col: u32, pattern: &Pattern) {
        let mut stamped = 0usize;
        for &(d_row, d_col) in pattern.offsets {
            let r = row as i64 + d_row as i64;
            let c = col as i64 + d_col as i64;
            if self.dims.contains(r, c) {
                self.universe.set_alive(r as u32, c as u32);
                stamped += 1;
            }
        }
        debug!(
            pattern = pattern.name,
            row,
            col,
            stamped,
            clipped = pattern.len() - stamped,
            "pattern stamped"
        );
    }

    /// Pointer edit at an on-grid cell, followed by a redraw.
    pub fn click(&mut self, cell: CellCoord, mode: ClickMode) {
        match mode {
            ClickMode::Toggle => self.toggle_cell(cell.row, cell.col),
            ClickMode::Glider => self.insert_pattern(cell.row, cell.col, &GLIDER),
            ClickMode::Pulsar => self.insert_pattern(cell.row, cell.col, &PULSAR),
        }
        self.draw();
    }

    pub fn apply(&mut self, action: ControlAction, now: Instant) {
        debug!(action = action.as_str(), "control");
        match action {
            ControlAction::TogglePlay => self.toggle_play(now),
            ControlAction::Play => self.play(now),
            ControlAction::Pause => self.pause(),
            ControlAction::Step => self.tick(),
            ControlAction::Randomize => self.reset_random(),
            ControlAction::Clear => self.reset_dead(),
            ControlAction::Faster => self.speed.increase(),
            ControlAction::Slower => self.speed.decrease(),
        }
    }

    fn refresh_memory(&mut self) {
        self.memory_text = self.memory.report(self.universe.cells());
    }

    pub fn ticks_per_frame(&self) -> u32 {
        self.speed.value()
    }

    pub fn set_ticks_per_frame(&mut self, ticks: u32) {
        self.speed.set(ticks);
    }

    pub fn time_until_next_frame(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_due(now)
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn universe(&self) -> &U {
        &self.universe
    }

    pub fn fps(&self) -> &F {
        &self.fps
    }

    pub fn memory_text(&self) -> &str {
        &self.memory_text
    }

    /// Generations advanced since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of full repaints performed so far.
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    pub fn population(&self) -> usize {
        BitGridView::new(self.universe.cells(), self.dims).live_count()
    }

    pub fn hud(&self) -> HudStatus<'_> {
        HudStatus {
            running: !self.is_paused(),
            ticks_per_frame: self.speed.value(),
            generation: self.generation,
            population: self.population(),
            fps: self.fps.text(),
            memory: &self.memory_text,
        }
    }
}
