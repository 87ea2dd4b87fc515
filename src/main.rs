//! Terminal Game of Life runner (default binary).
//!
//! crossterm supplies key and mouse input; the grid is painted into a pixel
//! surface and shown through a framebuffer-based renderer.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_life::core::{SimpleRng, Universe};
use tui_life::engine::{FpsCounter, GameConfig, GameController};
use tui_life::input::{handle_key_event, hit_cell, pointer_click, should_quit, SurfaceGeometry};
use tui_life::term::{FrameBuffer, LifeView, TerminalRenderer, Viewport};
use tui_life::types::DisplayRect;

/// Input poll timeout while paused (nothing scheduled).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        tracing::error!(?err, "failed to restore terminal");
    }
    result
}

/// Send tracing output to `LIFE_LOG_PATH`; the terminal itself is the display.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(|| SimpleRng::from_time().next_u32());
    info!(
        width = config.width,
        height = config.height,
        cell_size = config.cell_size,
        frame_ms = config.frame_ms,
        seed,
        "starting"
    );

    let universe = Universe::new(config.width, config.height, seed);
    let mut game = GameController::new(universe, FpsCounter::new(), config, Instant::now());

    let mut view = LifeView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut display = DisplayRect::default();
    let mut dirty = true;

    loop {
        let now = Instant::now();
        if game.pump(now) {
            dirty = true;
        }

        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            display = view.render_into(game.surface(), &game.hud(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let timeout = game
            .time_until_next_frame(Instant::now())
            .unwrap_or(IDLE_POLL);
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(generation = game.generation(), "quit");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game.apply(action, Instant::now());
                    dirty = true;
                }
            }
            Event::Mouse(mouse) => {
                if let Some(click) = pointer_click(mouse) {
                    let surface = game.surface();
                    let geometry = SurfaceGeometry {
                        width: surface.width(),
                        height: surface.height(),
                        cell_size: surface.cell_size(),
                        dims: game.dims(),
                    };
                    let (x, y) = click.display_point();
                    if let Some(cell) = hit_cell(x, y, display, geometry) {
                        game.click(cell, click.mode);
                        dirty = true;
                    }
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
